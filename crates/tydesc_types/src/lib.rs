//! Runtime type descriptors.
//!
//! A [`Descriptor`] describes a set of acceptable [`Value`]s for a dynamically
//! typed host: primitives, literals, optionals, positional tuples, unions and
//! structural tables. Descriptors answer three questions:
//!
//! - **Conformance**: [`Descriptor::is`] / [`Descriptor::is_args`], with
//!   [`Descriptor::explain`] reporting *why* a value was rejected.
//! - **Subtyping**: [`Descriptor::is_subtype`] / [`Descriptor::is_type_of`].
//! - **Equality**: structural, order-sensitive `==`.
//!
//! Named primitives and the boolean literals are shared through
//! [`registry::lookup`].
//!
//! # Tracing
//!
//! Enable tracing with environment variables, then call [`init_tracing`]:
//! - `TYDESC_LOG=tydesc_types=debug` - registry initialization
//! - `TYDESC_LOG=tydesc_types=trace` - every check, with table rejections
//!
//! `RUST_LOG` is consulted when `TYDESC_LOG` is unset.

mod conform;
mod descriptor;
mod error;
mod explain;
mod format;
mod kind;
pub mod registry;
mod stack;
mod subtype;

use std::sync::Once;

pub use descriptor::{
    CustomType, Descriptor, FieldType, LiteralType, MapType, OptionalType, Slot, TableType,
    TupleType, UnionType,
};
pub use error::DescriptorError;
pub use explain::{Mismatch, MismatchReason, PathSegment};
pub use kind::Kind;
pub use tydesc_value::Value;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Does nothing unless `TYDESC_LOG` or `RUST_LOG` is set. Safe to call
/// multiple times, and leaves an already installed global subscriber alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match EnvFilter::try_from_env("TYDESC_LOG") {
            Ok(filter) => filter,
            Err(_) if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
            Err(_) => return,
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}
