//! Mismatch diagnostics.
//!
//! [`Descriptor::explain`] answers the same question as [`Descriptor::is`],
//! but on rejection reports *where* the value went wrong. Every accept/reject
//! decision is made by the conformance engine; this module only walks the
//! descriptor alongside it to record the path.

use std::fmt;

use tydesc_value::Value;

use crate::conform::{no_standalone_check, NIL};
use crate::format::is_identifier;
use crate::stack::ensure_sufficient_stack;
use crate::{Descriptor, MapType, TableType, TupleType};

/// Kind name reported for a missing argument or field.
const NO_VALUE: &str = "no value";

/// One step from the checked value toward the offending position.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    /// Tuple position, zero-based.
    Position(usize),
    /// A declared table field.
    Field(Value),
    /// A table entry no field claims, checked against the table's maps.
    Entry(Value),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Position(i) => write!(f, "#{i}"),
            PathSegment::Field(key) => match key.as_str() {
                Some(name) if is_identifier(name) => write!(f, ".{name}"),
                _ => write!(f, "[{}]", key.repr()),
            },
            PathSegment::Entry(key) => write!(f, "[{}]", key.repr()),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MismatchReason {
    /// The value's kind is not the one expected.
    WrongKind,
    /// A table lacks a declared field.
    MissingField,
    /// The descriptor is a union with no members.
    EmptyUnion,
    /// No member of a union accepted the value.
    NoUnionMember,
    /// The value is not the literal.
    LiteralMismatch,
    /// An unclaimed table entry failed one of the table's maps.
    OpenTailRejected,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MismatchReason::WrongKind => "wrong kind",
            MismatchReason::MissingField => "missing field",
            MismatchReason::EmptyUnion => "empty union accepts nothing",
            MismatchReason::NoUnionMember => "no union member matched",
            MismatchReason::LiteralMismatch => "literal mismatch",
            MismatchReason::OpenTailRejected => "entry rejected by table map",
        })
    }
}

/// Why a value does not conform, and where.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{reason}{}: expected {expected}, found {found}", location(.path))]
pub struct Mismatch {
    /// Root-first path to the offending position; empty for the value itself.
    pub path: Vec<PathSegment>,
    /// Rendering of the descriptor that rejected.
    pub expected: String,
    /// Kind name of what was found there.
    pub found: &'static str,
    pub reason: MismatchReason,
}

fn location(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut buf = String::from(" at ");
    for segment in path {
        buf.push_str(&segment.to_string());
    }
    buf
}

impl Descriptor {
    /// Like [`Descriptor::is`], but explains a rejection.
    ///
    /// # Panics
    /// Panics on a bare map or field descriptor.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %self.kind()))]
    pub fn explain(&self, value: &Value) -> Result<(), Mismatch> {
        self.explain_value(value, &mut Vec::new())
    }

    /// Like [`Descriptor::is_args`], but explains a rejection.
    ///
    /// # Panics
    /// Panics on a bare map or field descriptor.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %self.kind(), argc = args.len()))]
    pub fn explain_args(&self, args: &[Value]) -> Result<(), Mismatch> {
        let mut path = Vec::new();
        match self {
            Descriptor::Tuple(tuple) => tuple.explain_args(args, &mut path),
            _ => self.explain_slot(args.first(), &mut path),
        }
    }

    fn explain_slot(
        &self,
        value: Option<&Value>,
        path: &mut Vec<PathSegment>,
    ) -> Result<(), Mismatch> {
        match (self, value) {
            (_, Some(value)) => self.explain_value(value, path),
            (Descriptor::Any | Descriptor::Optional(_), None) => Ok(()),
            (Descriptor::Tuple(tuple), None) => tuple.explain_args(&[], path),
            (_, None) => self.explain_value(&NIL, path),
        }
    }

    fn explain_value(&self, value: &Value, path: &mut Vec<PathSegment>) -> Result<(), Mismatch> {
        ensure_sufficient_stack(|| match self {
            Descriptor::Optional(optional) => optional.value_type().explain_value(value, path),
            Descriptor::Tuple(tuple) => tuple.explain_args(std::slice::from_ref(value), path),
            Descriptor::Table(table) => table.explain(self, value, path),
            Descriptor::Union(union) if union.is_empty() => {
                Err(self.mismatch(path, value.kind_name(), MismatchReason::EmptyUnion))
            }
            Descriptor::Map(_) | Descriptor::Field(_) => no_standalone_check(self.kind()),
            _ if self.conforms(value) => Ok(()),
            Descriptor::Union(_) => {
                Err(self.mismatch(path, value.kind_name(), MismatchReason::NoUnionMember))
            }
            Descriptor::Literal(_) => {
                Err(self.mismatch(path, value.kind_name(), MismatchReason::LiteralMismatch))
            }
            _ => Err(self.mismatch(path, value.kind_name(), MismatchReason::WrongKind)),
        })
    }

    fn mismatch(&self, path: &[PathSegment], found: &'static str, reason: MismatchReason) -> Mismatch {
        Mismatch {
            path: path.to_vec(),
            expected: self.render(),
            found,
            reason,
        }
    }
}

impl TupleType {
    fn explain_args(&self, args: &[Value], path: &mut Vec<PathSegment>) -> Result<(), Mismatch> {
        for (i, value_type) in self.value_types().iter().enumerate() {
            path.push(PathSegment::Position(i));
            value_type.explain_slot(args.get(i), path)?;
            path.pop();
        }
        Ok(())
    }
}

impl TableType {
    fn explain(
        &self,
        descriptor: &Descriptor,
        value: &Value,
        path: &mut Vec<PathSegment>,
    ) -> Result<(), Mismatch> {
        let Some(table) = value.as_table() else {
            return Err(descriptor.mismatch(path, value.kind_name(), MismatchReason::WrongKind));
        };

        for field in self.fields() {
            path.push(PathSegment::Field(field.key().clone()));
            match (table.get(field.key()), field.value_type()) {
                (None, value_type) => {
                    return Err(Mismatch {
                        path: path.clone(),
                        expected: value_type.map_or_else(|| "any".to_owned(), Descriptor::render),
                        found: NO_VALUE,
                        reason: MismatchReason::MissingField,
                    });
                }
                (Some(entry), Some(value_type)) => value_type.explain_value(entry, path)?,
                (Some(_), None) => {}
            }
            path.pop();
        }

        for (key, entry) in self.unclaimed(table) {
            if let Some(map) = self.maps().iter().find(|map| !map.accepts(key, entry)) {
                path.push(PathSegment::Entry(key.clone()));
                return Err(map.mismatch(key, entry, path));
            }
        }
        Ok(())
    }
}

impl MapType {
    /// Reports the key when the key side rejected, otherwise the value.
    fn mismatch(&self, key: &Value, entry: &Value, path: &[PathSegment]) -> Mismatch {
        let key_rejected = self.key_type().is_some_and(|key_type| !key_type.conforms(key));
        let mut expected = String::new();
        self.render_into(&mut expected);
        Mismatch {
            path: path.to_vec(),
            expected,
            found: if key_rejected { key.kind_name() } else { entry.kind_name() },
            reason: MismatchReason::OpenTailRejected,
        }
    }
}

#[cfg(test)]
mod tests;
