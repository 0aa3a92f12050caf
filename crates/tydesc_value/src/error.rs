//! Errors raised while building host values.

/// Failure to store an entry in a [`TableValue`](crate::TableValue).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// `nil` can never address a table slot.
    #[error("table index is nil")]
    NilKey,
    /// `NaN` is not equal to itself, so it cannot address a slot either.
    #[error("table index is NaN")]
    NaNKey,
}
