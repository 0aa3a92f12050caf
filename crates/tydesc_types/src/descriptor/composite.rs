//! Payloads of the non-primitive descriptor kinds and their builders.

use tydesc_value::Value;

use super::{Descriptor, Slot};
use crate::{DescriptorError, Kind};

/// Exactly one value.
#[derive(Clone, Debug)]
pub struct LiteralType {
    value: Value,
}

impl LiteralType {
    pub fn new(value: Value) -> Self {
        LiteralType { value }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Literals are equal when their values are identical (`NaN` included).
impl PartialEq for LiteralType {
    fn eq(&self, other: &Self) -> bool {
        self.value.is_identical(&other.value)
    }
}

impl Eq for LiteralType {}

/// Absent, or a value matching the inner descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalType {
    value_type: Box<Descriptor>,
}

impl OptionalType {
    pub fn new(value_type: Descriptor) -> Self {
        OptionalType {
            value_type: Box::new(value_type),
        }
    }

    #[inline]
    pub fn value_type(&self) -> &Descriptor {
        &self.value_type
    }
}

/// Fixed-arity positional sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TupleType {
    value_types: Vec<Descriptor>,
}

impl TupleType {
    pub fn new(value_types: impl IntoIterator<Item = Descriptor>) -> Self {
        TupleType {
            value_types: value_types.into_iter().collect(),
        }
    }

    #[inline]
    pub fn value_types(&self) -> &[Descriptor] {
        &self.value_types
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.value_types.len()
    }

    pub fn get(&self, slot: Slot) -> Option<&Descriptor> {
        self.value_types.get(slot.index())
    }

    /// Append a position, returning its slot.
    pub fn add_value_type(&mut self, value_type: Descriptor) -> Slot {
        push_child(&mut self.value_types, value_type)
    }

    /// Swap the child at `slot`, returning the old one. No-op on an unknown slot.
    pub fn replace_value_type(&mut self, slot: Slot, value_type: Descriptor) -> Option<Descriptor> {
        replace_child(&mut self.value_types, slot, value_type)
    }
}

/// One of several alternatives.
///
/// Member order is kept for rendering and equality; matching ignores it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnionType {
    types: Vec<Descriptor>,
}

impl UnionType {
    pub fn new(types: impl IntoIterator<Item = Descriptor>) -> Self {
        UnionType {
            types: types.into_iter().collect(),
        }
    }

    #[inline]
    pub fn types(&self) -> &[Descriptor] {
        &self.types
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, slot: Slot) -> Option<&Descriptor> {
        self.types.get(slot.index())
    }

    pub fn add_type(&mut self, member: Descriptor) -> Slot {
        push_child(&mut self.types, member)
    }

    pub fn replace_type(&mut self, slot: Slot, member: Descriptor) -> Option<Descriptor> {
        replace_child(&mut self.types, slot, member)
    }
}

/// Open key/value constraint over entries no field claims.
///
/// An unset key or value type places no constraint on that side.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MapType {
    key_type: Option<Box<Descriptor>>,
    value_type: Option<Box<Descriptor>>,
}

impl MapType {
    pub fn new(key_type: Option<Descriptor>, value_type: Option<Descriptor>) -> Self {
        MapType {
            key_type: key_type.map(Box::new),
            value_type: value_type.map(Box::new),
        }
    }

    #[inline]
    pub fn key_type(&self) -> Option<&Descriptor> {
        self.key_type.as_deref()
    }

    #[inline]
    pub fn value_type(&self) -> Option<&Descriptor> {
        self.value_type.as_deref()
    }
}

impl TryFrom<Descriptor> for MapType {
    type Error = DescriptorError;

    fn try_from(descriptor: Descriptor) -> Result<Self, Self::Error> {
        match descriptor {
            Descriptor::Map(map) => Ok(map),
            other => Err(DescriptorError::KindMismatch {
                expected: Kind::Map,
                found: other.kind(),
            }),
        }
    }
}

/// One required named slot.
#[derive(Clone, Debug)]
pub struct FieldType {
    key: Value,
    value_type: Option<Box<Descriptor>>,
}

impl FieldType {
    /// # Panics
    /// Panics if `key` is `nil` or `NaN`; neither can address a table slot.
    #[track_caller]
    pub fn new(key: Value, value_type: Option<Descriptor>) -> Self {
        let addressable = match &key {
            Value::Nil => false,
            Value::Number(n) => !n.is_nan(),
            _ => true,
        };
        assert!(addressable, "field key {} cannot address a table slot", key.repr());
        FieldType {
            key,
            value_type: value_type.map(Box::new),
        }
    }

    /// Shorthand for a string-keyed field.
    #[track_caller]
    pub fn named(name: &str, value_type: Descriptor) -> Self {
        Self::new(Value::string(name), Some(value_type))
    }

    #[inline]
    pub fn key(&self) -> &Value {
        &self.key
    }

    #[inline]
    pub fn value_type(&self) -> Option<&Descriptor> {
        self.value_type.as_deref()
    }
}

impl PartialEq for FieldType {
    fn eq(&self, other: &Self) -> bool {
        self.key.is_identical(&other.key) && self.value_type == other.value_type
    }
}

impl Eq for FieldType {}

impl TryFrom<Descriptor> for FieldType {
    type Error = DescriptorError;

    fn try_from(descriptor: Descriptor) -> Result<Self, Self::Error> {
        match descriptor {
            Descriptor::Field(field) => Ok(field),
            other => Err(DescriptorError::KindMismatch {
                expected: Kind::Field,
                found: other.kind(),
            }),
        }
    }
}

/// Record shape: required fields plus an open tail governed by maps.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TableType {
    maps: Vec<MapType>,
    fields: Vec<FieldType>,
}

impl TableType {
    pub fn new(
        maps: impl IntoIterator<Item = MapType>,
        fields: impl IntoIterator<Item = FieldType>,
    ) -> Self {
        TableType {
            maps: maps.into_iter().collect(),
            fields: fields.into_iter().collect(),
        }
    }

    #[inline]
    pub fn maps(&self) -> &[MapType] {
        &self.maps
    }

    #[inline]
    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    /// First field declared for `key`.
    pub fn field(&self, key: &Value) -> Option<&FieldType> {
        self.fields.iter().find(|f| f.key() == key)
    }

    pub fn add_map_type(&mut self, map: MapType) -> Slot {
        push_child(&mut self.maps, map)
    }

    pub fn add_field_type(&mut self, field: FieldType) -> Slot {
        push_child(&mut self.fields, field)
    }

    /// Append a map given as a general descriptor.
    pub fn add_map_descriptor(&mut self, descriptor: Descriptor) -> Result<Slot, DescriptorError> {
        Ok(self.add_map_type(MapType::try_from(descriptor)?))
    }

    /// Append a field given as a general descriptor.
    pub fn add_field_descriptor(&mut self, descriptor: Descriptor) -> Result<Slot, DescriptorError> {
        Ok(self.add_field_type(FieldType::try_from(descriptor)?))
    }
}

/// Named kind defined outside this crate.
///
/// Nothing here knows what values it admits: conformance rejects every
/// value and subtyping only relates it to `any` and to itself.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CustomType {
    name: Box<str>,
}

impl CustomType {
    pub fn new(name: &str) -> Self {
        CustomType { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn push_child<T>(children: &mut Vec<T>, child: T) -> Slot {
    let slot = Slot::at(children.len());
    children.push(child);
    slot
}

fn replace_child<T>(children: &mut [T], slot: Slot, child: T) -> Option<T> {
    children
        .get_mut(slot.index())
        .map(|existing| std::mem::replace(existing, child))
}
