//! Descriptor kind tag.
//!
//! Every [`Descriptor`](crate::Descriptor) reports a `Kind`. Tags are grouped
//! into ranges so the category checks are single comparisons:
//!
//! - 0-15: Primitives (no payload)
//! - 16-31: Scalar wrappers (one literal value or one inner descriptor)
//! - 32-47: Sequences (ordered child descriptors)
//! - 48-63: Table parts
//! - 240-255: Opaque extension kinds

use std::fmt;

/// Descriptor kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Kind {
    // === Primitives (0-15) ===
    Nil = 0,
    Boolean = 1,
    Number = 2,
    String = 3,
    Function = 4,
    /// Coroutine handle.
    Thread = 5,
    /// Top type; accepts every value.
    Any = 6,

    // === Scalar wrappers (16-31) ===
    /// Exactly one value.
    Literal = 16,
    /// Absent, or the inner descriptor.
    Optional = 17,

    // === Sequences (32-47) ===
    Tuple = 32,
    Union = 33,

    // === Table parts (48-63) ===
    Map = 48,
    Field = 49,
    Table = 50,

    // === Extension (240-255) ===
    /// Named kind owned by an outer layer; opaque to this crate.
    Custom = 240,
}

impl Kind {
    /// Check if this kind has no payload.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16
    }

    /// Check if this kind holds child descriptors.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Optional | Self::Tuple | Self::Union | Self::Map | Self::Field | Self::Table
        )
    }

    /// Lower-case name of this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Thread => "thread",
            Self::Any => "any",
            Self::Literal => "literal",
            Self::Optional => "optional",
            Self::Tuple => "tuple",
            Self::Union => "union",
            Self::Map => "map",
            Self::Field => "field",
            Self::Table => "table",
            Self::Custom => "custom",
        }
    }

    /// Parse a primitive kind from its name.
    ///
    /// Only primitives are nameable; composite kinds need a payload.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "nil" => Self::Nil,
            "boolean" => Self::Boolean,
            "number" => Self::Number,
            "string" => Self::String,
            "function" => Self::Function,
            "thread" => Self::Thread,
            "any" => Self::Any,
            _ => return None,
        })
    }

    /// All primitive kinds, in tag order.
    pub const PRIMITIVES: [Kind; 7] = [
        Self::Nil,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Function,
        Self::Thread,
        Self::Any,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Kind must stay one byte
const _: () = assert!(std::mem::size_of::<Kind>() == 1);
