//! Stack growth for descriptor traversals.
//!
//! Conformance, subtyping, diagnostics and rendering all recurse through the
//! descriptor tree (and, for tables, through the value). Trees are finite and
//! acyclic, but a construction layer can nest them far deeper than a thread's
//! default stack tolerates. Each recursive step runs inside
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Native targets**: `stacker::maybe_grow` with a 100KB red zone and 1MB
//!   segments.
//! - **WASM targets**: passthrough.

/// Grow when less than this much stack remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
