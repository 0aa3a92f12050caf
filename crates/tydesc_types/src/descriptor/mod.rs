//! The descriptor sum type.
//!
//! A `Descriptor` is built bottom-up: leaves first (primitives and
//! literals), then the composites that own them. Primitive variants carry no
//! payload, so each one is its own singleton. Composite payloads grow only by
//! appending, and change only by replacing the child behind a [`Slot`].
//!
//! Equality is structural and order-sensitive: two unions with the same
//! members in a different order are not equal, even though they accept the
//! same values.

mod composite;
mod slot;

use tydesc_value::Value;

pub use composite::{
    CustomType, FieldType, LiteralType, MapType, OptionalType, TableType, TupleType, UnionType,
};
pub use slot::Slot;

use crate::Kind;

/// A description of a set of acceptable values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Descriptor {
    // ===== Primitives =====
    Nil,
    Boolean,
    Number,
    String,
    Function,
    Thread,
    /// Accepts everything, including no value at all.
    Any,

    // ===== Scalar wrappers =====
    Literal(LiteralType),
    Optional(OptionalType),

    // ===== Sequences =====
    Tuple(TupleType),
    Union(UnionType),

    // ===== Table parts =====
    Map(MapType),
    Field(FieldType),
    Table(TableType),

    // ===== Extension =====
    Custom(CustomType),
}

impl Descriptor {
    pub const fn kind(&self) -> Kind {
        match self {
            Descriptor::Nil => Kind::Nil,
            Descriptor::Boolean => Kind::Boolean,
            Descriptor::Number => Kind::Number,
            Descriptor::String => Kind::String,
            Descriptor::Function => Kind::Function,
            Descriptor::Thread => Kind::Thread,
            Descriptor::Any => Kind::Any,
            Descriptor::Literal(_) => Kind::Literal,
            Descriptor::Optional(_) => Kind::Optional,
            Descriptor::Tuple(_) => Kind::Tuple,
            Descriptor::Union(_) => Kind::Union,
            Descriptor::Map(_) => Kind::Map,
            Descriptor::Field(_) => Kind::Field,
            Descriptor::Table(_) => Kind::Table,
            Descriptor::Custom(_) => Kind::Custom,
        }
    }

    /// The primitive descriptor for `kind`, if `kind` is primitive.
    pub fn primitive(kind: Kind) -> Option<Descriptor> {
        Some(match kind {
            Kind::Nil => Descriptor::Nil,
            Kind::Boolean => Descriptor::Boolean,
            Kind::Number => Descriptor::Number,
            Kind::String => Descriptor::String,
            Kind::Function => Descriptor::Function,
            Kind::Thread => Descriptor::Thread,
            Kind::Any => Descriptor::Any,
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    // ===== Constructors =====

    pub fn literal(value: impl Into<Value>) -> Self {
        Descriptor::Literal(LiteralType::new(value.into()))
    }

    pub fn optional(value_type: Descriptor) -> Self {
        Descriptor::Optional(OptionalType::new(value_type))
    }

    pub fn tuple(value_types: impl IntoIterator<Item = Descriptor>) -> Self {
        Descriptor::Tuple(TupleType::new(value_types))
    }

    pub fn union(types: impl IntoIterator<Item = Descriptor>) -> Self {
        Descriptor::Union(UnionType::new(types))
    }

    pub fn map(key_type: Option<Descriptor>, value_type: Option<Descriptor>) -> Self {
        Descriptor::Map(MapType::new(key_type, value_type))
    }

    #[track_caller]
    pub fn field(key: impl Into<Value>, value_type: Option<Descriptor>) -> Self {
        Descriptor::Field(FieldType::new(key.into(), value_type))
    }

    pub fn table(
        maps: impl IntoIterator<Item = MapType>,
        fields: impl IntoIterator<Item = FieldType>,
    ) -> Self {
        Descriptor::Table(TableType::new(maps, fields))
    }

    pub fn custom(name: &str) -> Self {
        Descriptor::Custom(CustomType::new(name))
    }

    // ===== Kind-specific builder operations =====
    //
    // These serve construction layers that only hold a `Descriptor`. Calling
    // one on the wrong kind is a programming error and panics.

    /// Append a tuple position.
    ///
    /// # Panics
    /// Panics unless `self` is a tuple.
    #[track_caller]
    pub fn add_value_type(&mut self, value_type: Descriptor) -> Slot {
        match self {
            Descriptor::Tuple(tuple) => tuple.add_value_type(value_type),
            other => wrong_kind("add_value_type", Kind::Tuple, other.kind()),
        }
    }

    /// # Panics
    /// Panics unless `self` is a tuple.
    #[track_caller]
    pub fn replace_value_type(&mut self, slot: Slot, value_type: Descriptor) -> Option<Descriptor> {
        match self {
            Descriptor::Tuple(tuple) => tuple.replace_value_type(slot, value_type),
            other => wrong_kind("replace_value_type", Kind::Tuple, other.kind()),
        }
    }

    /// Append a union member.
    ///
    /// # Panics
    /// Panics unless `self` is a union.
    #[track_caller]
    pub fn add_type(&mut self, member: Descriptor) -> Slot {
        match self {
            Descriptor::Union(union) => union.add_type(member),
            other => wrong_kind("add_type", Kind::Union, other.kind()),
        }
    }

    /// # Panics
    /// Panics unless `self` is a union.
    #[track_caller]
    pub fn replace_type(&mut self, slot: Slot, member: Descriptor) -> Option<Descriptor> {
        match self {
            Descriptor::Union(union) => union.replace_type(slot, member),
            other => wrong_kind("replace_type", Kind::Union, other.kind()),
        }
    }

    /// # Panics
    /// Panics unless `self` is a table.
    #[track_caller]
    pub fn add_map_type(&mut self, map: MapType) -> Slot {
        match self {
            Descriptor::Table(table) => table.add_map_type(map),
            other => wrong_kind("add_map_type", Kind::Table, other.kind()),
        }
    }

    /// # Panics
    /// Panics unless `self` is a table.
    #[track_caller]
    pub fn add_field_type(&mut self, field: FieldType) -> Slot {
        match self {
            Descriptor::Table(table) => table.add_field_type(field),
            other => wrong_kind("add_field_type", Kind::Table, other.kind()),
        }
    }
}

#[cold]
#[track_caller]
fn wrong_kind(operation: &str, expected: Kind, found: Kind) -> ! {
    panic!("{operation} requires a {expected} descriptor, called on {found}")
}

impl From<LiteralType> for Descriptor {
    fn from(literal: LiteralType) -> Self {
        Descriptor::Literal(literal)
    }
}

impl From<OptionalType> for Descriptor {
    fn from(optional: OptionalType) -> Self {
        Descriptor::Optional(optional)
    }
}

impl From<TupleType> for Descriptor {
    fn from(tuple: TupleType) -> Self {
        Descriptor::Tuple(tuple)
    }
}

impl From<UnionType> for Descriptor {
    fn from(union: UnionType) -> Self {
        Descriptor::Union(union)
    }
}

impl From<MapType> for Descriptor {
    fn from(map: MapType) -> Self {
        Descriptor::Map(map)
    }
}

impl From<FieldType> for Descriptor {
    fn from(field: FieldType) -> Self {
        Descriptor::Field(field)
    }
}

impl From<TableType> for Descriptor {
    fn from(table: TableType) -> Self {
        Descriptor::Table(table)
    }
}

impl From<CustomType> for Descriptor {
    fn from(custom: CustomType) -> Self {
        Descriptor::Custom(custom)
    }
}

// Built once, read from any thread.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Descriptor>();
};
