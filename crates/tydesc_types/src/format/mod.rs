//! Descriptor signatures for diagnostics and debugging.
//!
//! Rendering is deterministic: children appear in insertion order, so two
//! structurally equal descriptors always render identically.

use std::fmt;

use tydesc_value::Value;

use crate::stack::ensure_sufficient_stack;
use crate::{Descriptor, FieldType, MapType, TableType};

impl Descriptor {
    /// Render this descriptor's signature.
    pub fn render(&self) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf);
        buf
    }

    /// Render into an existing buffer.
    pub fn render_into(&self, buf: &mut String) {
        ensure_sufficient_stack(|| match self {
            // Primitives
            Descriptor::Nil
            | Descriptor::Boolean
            | Descriptor::Number
            | Descriptor::String
            | Descriptor::Function
            | Descriptor::Thread
            | Descriptor::Any => buf.push_str(self.kind().name()),

            Descriptor::Literal(literal) => buf.push_str(&literal.value().repr()),
            Descriptor::Optional(optional) => {
                optional.value_type().render_into(buf);
                buf.push('?');
            }
            Descriptor::Tuple(tuple) => render_sequence(tuple.value_types(), ", ", buf),
            Descriptor::Union(union) => render_sequence(union.types(), " | ", buf),
            Descriptor::Map(map) => map.render_into(buf),
            Descriptor::Field(field) => field.render_into(buf),
            Descriptor::Table(table) => table.render_into(buf),
            Descriptor::Custom(custom) => buf.push_str(custom.name()),
        });
    }
}

impl MapType {
    pub(crate) fn render_into(&self, buf: &mut String) {
        buf.push('[');
        render_optional(self.key_type(), buf);
        buf.push_str("]: ");
        render_optional(self.value_type(), buf);
    }
}

impl FieldType {
    fn render_into(&self, buf: &mut String) {
        render_key(self.key(), buf);
        buf.push_str(": ");
        render_optional(self.value_type(), buf);
    }
}

impl TableType {
    /// `{ field; field; [K]: V }`, fields before maps.
    fn render_into(&self, buf: &mut String) {
        if self.fields().is_empty() && self.maps().is_empty() {
            buf.push_str("{}");
            return;
        }

        buf.push_str("{ ");
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                buf.push_str("; ");
            }
            field.render_into(buf);
        }
        if !self.fields().is_empty() && !self.maps().is_empty() {
            buf.push_str("; ");
        }
        for (i, map) in self.maps().iter().enumerate() {
            if i > 0 {
                buf.push_str("; ");
            }
            map.render_into(buf);
        }
        buf.push_str(" }");
    }
}

fn render_sequence(children: &[Descriptor], separator: &str, buf: &mut String) {
    buf.push('(');
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            buf.push_str(separator);
        }
        child.render_into(buf);
    }
    buf.push(')');
}

/// An unset descriptor places no constraint, so it reads as `any`.
fn render_optional(descriptor: Option<&Descriptor>, buf: &mut String) {
    match descriptor {
        Some(descriptor) => descriptor.render_into(buf),
        None => buf.push_str("any"),
    }
}

/// Identifier-like string keys render bare; every other key is bracketed.
fn render_key(key: &Value, buf: &mut String) {
    match key.as_str() {
        Some(name) if is_identifier(name) => buf.push_str(name),
        _ => {
            buf.push('[');
            buf.push_str(&key.repr());
            buf.push(']');
        }
    }
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
