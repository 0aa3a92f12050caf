//! Conformance: does a runtime value match a descriptor?
//!
//! # Argument forms
//!
//! [`Descriptor::is`] checks exactly one value. [`Descriptor::is_args`] is
//! the variadic form: a tuple checks each position against the matching
//! argument, `optional` and `any` also accept an empty argument list, and
//! every other kind checks the first argument. Positions past the end of
//! the argument list are *absent*: `optional` and `any` accept absence,
//! everything else sees it as `nil`.
//!
//! # Deliberate permissiveness
//!
//! - Tuple arguments beyond the declared arity are never inspected.
//! - A table with no maps places no constraint on entries its fields do not
//!   claim. Zero maps means "anything else is allowed", not a closed record.
//!
//! # Deliberate strictness
//!
//! - An empty union matches nothing.
//! - A table field must be present even when its value type is `optional`;
//!   table entries are never absent, so there is nothing for the optional to
//!   absorb.

use tydesc_value::{TableValue, Value};

use crate::stack::ensure_sufficient_stack;
use crate::{Descriptor, FieldType, Kind, MapType, TableType, TupleType};

pub(crate) static NIL: Value = Value::Nil;

impl Descriptor {
    /// Check one value against this descriptor.
    ///
    /// # Panics
    /// Panics on a bare map or field descriptor; those only have meaning
    /// inside a table.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %self.kind()))]
    pub fn is(&self, value: &Value) -> bool {
        self.conforms(value)
    }

    /// Check an argument list against this descriptor.
    ///
    /// # Panics
    /// Panics on a bare map or field descriptor.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %self.kind(), argc = args.len()))]
    pub fn is_args(&self, args: &[Value]) -> bool {
        match self {
            Descriptor::Tuple(tuple) => tuple.conforms_args(args),
            _ => self.conforms_slot(args.first()),
        }
    }

    /// Check a possibly absent value.
    pub(crate) fn conforms_slot(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, Some(value)) => self.conforms(value),
            (Descriptor::Any | Descriptor::Optional(_), None) => true,
            (Descriptor::Tuple(tuple), None) => tuple.conforms_args(&[]),
            (_, None) => self.conforms(&NIL),
        }
    }

    /// Check a present value.
    pub(crate) fn conforms(&self, value: &Value) -> bool {
        ensure_sufficient_stack(|| match self {
            Descriptor::Nil => matches!(value, Value::Nil),
            Descriptor::Boolean => matches!(value, Value::Boolean(_)),
            Descriptor::Number => matches!(value, Value::Number(_)),
            Descriptor::String => matches!(value, Value::String(_)),
            Descriptor::Function => matches!(value, Value::Function(_)),
            Descriptor::Thread => matches!(value, Value::Thread(_)),
            Descriptor::Any => true,

            // Raw equality: no coercion, and NaN matches nothing.
            Descriptor::Literal(literal) => literal.value() == value,
            Descriptor::Optional(optional) => optional.value_type().conforms(value),
            Descriptor::Tuple(tuple) => tuple.conforms_args(std::slice::from_ref(value)),
            Descriptor::Union(union) => union.types().iter().any(|member| member.conforms(value)),
            Descriptor::Table(table) => table.conforms(value),
            Descriptor::Custom(_) => false,

            Descriptor::Map(_) | Descriptor::Field(_) => no_standalone_check(self.kind()),
        })
    }
}

#[cold]
#[track_caller]
pub(crate) fn no_standalone_check(kind: Kind) -> ! {
    panic!("a {kind} descriptor has no standalone conformance check; place it in a table")
}

impl TupleType {
    /// Position `i` checks argument `i`; extra arguments are ignored.
    pub(crate) fn conforms_args(&self, args: &[Value]) -> bool {
        self.value_types()
            .iter()
            .enumerate()
            .all(|(i, value_type)| value_type.conforms_slot(args.get(i)))
    }
}

impl MapType {
    /// Whether one unclaimed table entry satisfies this map.
    pub fn accepts(&self, key: &Value, value: &Value) -> bool {
        self.key_type().map_or(true, |key_type| key_type.conforms(key))
            && self.value_type().map_or(true, |value_type| value_type.conforms(value))
    }
}

impl FieldType {
    /// Whether a present entry satisfies this field's value type.
    pub fn accepts(&self, value: &Value) -> bool {
        self.value_type().map_or(true, |value_type| value_type.conforms(value))
    }
}

impl TableType {
    fn conforms(&self, value: &Value) -> bool {
        let Some(table) = value.as_table() else {
            return false;
        };

        for field in self.fields() {
            match table.get(field.key()) {
                None => {
                    tracing::trace!(key = %field.key(), "required field missing");
                    return false;
                }
                Some(entry) if !field.accepts(entry) => {
                    tracing::trace!(key = %field.key(), "field value rejected");
                    return false;
                }
                Some(_) => {}
            }
        }

        // No maps: the tail is open.
        if self.maps().is_empty() {
            return true;
        }

        self.unclaimed(table).all(|(key, entry)| {
            let accepted = self.maps().iter().all(|map| map.accepts(key, entry));
            if !accepted {
                tracing::trace!(%key, "unclaimed entry rejected by map");
            }
            accepted
        })
    }

    /// Entries of `table` that no declared field claims.
    pub(crate) fn unclaimed<'t>(
        &'t self,
        table: &'t TableValue,
    ) -> impl Iterator<Item = (&'t Value, &'t Value)> + 't {
        table
            .iter()
            .filter(|(key, _)| !self.fields().iter().any(|field| field.key() == *key))
    }
}
