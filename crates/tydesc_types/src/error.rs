//! Recoverable builder errors.

use crate::Kind;

/// A descriptor of the wrong kind was offered where a specific kind is required.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    #[error("expected a {expected} descriptor, found {found}")]
    KindMismatch { expected: Kind, found: Kind },
}
