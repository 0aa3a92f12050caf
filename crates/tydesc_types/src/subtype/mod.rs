//! Structural subtyping between descriptors.
//!
//! `a.is_subtype(&b)` asks whether every value `a` describes is also
//! described by `b`. The rules, by left-hand kind:
//!
//! | left | subtype of |
//! |---|---|
//! | anything | `any` |
//! | `any` | only `any` |
//! | union | another union: `self` is a subtype of *every* member of it; anything else: *some* member of `self` is a subtype of it |
//! | tuple | a tuple of equal arity, position by position (covariant) |
//! | map | a map whose key and value types it refines; an unset side on either map is unconstrained |
//! | field | a field with an identical key whose value type it refines; an unset value type on either side is unconstrained |
//! | table | a table where every map of the right is refined by some map of the left, and every field of the left refines some field of the right |
//! | custom | a custom kind with the same name |
//! | primitive, literal, optional | see below |
//!
//! Tuple, map, field, table and custom descriptors are subtypes of nothing
//! beyond the cases listed; in particular they never absorb into a union or
//! an optional. The scalar-shaped kinds do:
//!
//! - against a union, some member must be a supertype; `T?` may also split,
//!   with `nil` and `T` each a subtype of the union;
//! - `nil`, and a `nil` literal, is a subtype of every optional;
//! - a primitive or literal is a subtype of `T?` when it is a subtype of `T`;
//! - `T?` is a subtype of `U?` when `T` is a subtype of `U`, and of nothing
//!   else non-union;
//! - a literal is a subtype of an identical literal and of the primitive
//!   that accepts its value;
//! - a primitive is a subtype of itself.

use crate::stack::ensure_sufficient_stack;
use crate::{Descriptor, FieldType, MapType, TableType, TupleType};

impl Descriptor {
    /// Whether every value `self` describes is also described by `other`.
    #[tracing::instrument(level = "trace", skip_all, fields(sub = %self.kind(), sup = %other.kind()))]
    pub fn is_subtype(&self, other: &Descriptor) -> bool {
        self.subtype_of(other)
    }

    /// Whether `other` is a subtype of `self`.
    #[inline]
    pub fn is_type_of(&self, other: &Descriptor) -> bool {
        other.is_subtype(self)
    }

    fn subtype_of(&self, other: &Descriptor) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (_, Descriptor::Any) => true,
            (Descriptor::Any, _) => false,

            (Descriptor::Union(_), Descriptor::Union(sup)) => {
                sup.types().iter().all(|member| self.subtype_of(member))
            }
            (Descriptor::Union(sub), _) => sub.types().iter().any(|member| member.subtype_of(other)),

            (Descriptor::Tuple(sub), Descriptor::Tuple(sup)) => sub.subtype_of(sup),
            (Descriptor::Map(sub), Descriptor::Map(sup)) => sub.is_subtype(sup),
            (Descriptor::Field(sub), Descriptor::Field(sup)) => sub.is_subtype(sup),
            (Descriptor::Table(sub), Descriptor::Table(sup)) => sub.subtype_of(sup),
            (Descriptor::Custom(sub), Descriptor::Custom(sup)) => sub.name() == sup.name(),
            (
                Descriptor::Tuple(_)
                | Descriptor::Map(_)
                | Descriptor::Field(_)
                | Descriptor::Table(_)
                | Descriptor::Custom(_),
                _,
            ) => false,

            // Scalar-shaped left side from here on.
            (Descriptor::Optional(sub), Descriptor::Union(sup)) => {
                sup.types().iter().any(|member| self.subtype_of(member))
                    || (Descriptor::Nil.subtype_of(other) && sub.value_type().subtype_of(other))
            }
            (_, Descriptor::Union(sup)) => sup.types().iter().any(|member| self.subtype_of(member)),

            (Descriptor::Optional(sub), Descriptor::Optional(sup)) => {
                sub.value_type().subtype_of(sup.value_type())
            }
            (Descriptor::Optional(_), _) => false,
            (Descriptor::Nil, Descriptor::Optional(_)) => true,
            (Descriptor::Literal(sub), Descriptor::Optional(_)) if sub.value().is_nil() => true,
            (_, Descriptor::Optional(sup)) => self.subtype_of(sup.value_type()),

            (Descriptor::Literal(sub), Descriptor::Literal(sup)) => {
                sub.value().is_identical(sup.value())
            }
            (Descriptor::Literal(sub), sup) if sup.is_primitive() => sup.conforms(sub.value()),

            (sub, sup) if sub.is_primitive() && sup.is_primitive() => sub.kind() == sup.kind(),
            _ => false,
        })
    }
}

impl TupleType {
    fn subtype_of(&self, other: &TupleType) -> bool {
        self.arity() == other.arity()
            && self
                .value_types()
                .iter()
                .zip(other.value_types())
                .all(|(sub, sup)| sub.subtype_of(sup))
    }
}

impl MapType {
    /// Whether this map refines `other`. Unset sides are unconstrained.
    pub fn is_subtype(&self, other: &MapType) -> bool {
        refines(self.key_type(), other.key_type()) && refines(self.value_type(), other.value_type())
    }
}

impl FieldType {
    /// Whether this field refines `other`: same key, compatible value type.
    pub fn is_subtype(&self, other: &FieldType) -> bool {
        self.key().is_identical(other.key()) && refines(self.value_type(), other.value_type())
    }
}

impl TableType {
    /// `self` must accept at least as broad a tail as `other` declares, and
    /// every field `self` requires must be explained by a field of `other`.
    fn subtype_of(&self, other: &TableType) -> bool {
        let maps_covered = other
            .maps()
            .iter()
            .all(|sup| self.maps().iter().any(|sub| sub.is_subtype(sup)));
        maps_covered
            && self
                .fields()
                .iter()
                .all(|sub| other.fields().iter().any(|sup| sub.is_subtype(sup)))
    }
}

fn refines(sub: Option<&Descriptor>, sup: Option<&Descriptor>) -> bool {
    match (sub, sup) {
        (Some(sub), Some(sup)) => sub.subtype_of(sup),
        _ => true,
    }
}

#[cfg(test)]
mod tests;
