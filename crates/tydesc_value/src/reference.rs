//! Identity-compared reference values: callables and coroutine handles.
//!
//! The conformance engine only ever asks *what category* a reference value
//! belongs to and *whether two references are the same object*, so both
//! payloads are opaque: a process-unique id plus a label for display.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique object id. Shared by tables, functions and threads.
pub(crate) fn next_object_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// An opaque callable.
#[derive(Debug)]
pub struct FunctionValue {
    id: u64,
    name: Box<str>,
}

impl FunctionValue {
    pub(crate) fn new(name: &str) -> Self {
        FunctionValue {
            id: next_object_id(),
            name: name.into(),
        }
    }

    /// Process-unique identity of this function object.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function: {}", self.name)
    }
}

/// An opaque coroutine handle.
#[derive(Debug)]
pub struct ThreadValue {
    id: u64,
}

impl ThreadValue {
    pub(crate) fn new() -> Self {
        ThreadValue { id: next_object_id() }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ThreadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread: #{}", self.id)
    }
}
