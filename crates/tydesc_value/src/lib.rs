//! Host values for the tydesc conformance engine.
//!
//! `Value` models a small dynamically typed runtime: `nil`, booleans,
//! double-precision numbers, strings, callables, coroutine handles and
//! keyed tables. The descriptor crate never constructs host behaviour of its
//! own; it only classifies and compares these values.
//!
//! # Heap Values
//!
//! Strings, functions, threads and tables live behind [`Heap`], a shared
//! `Arc` wrapper with a crate-private constructor. Build them through the
//! factories on `Value`:
//!
//! ```text
//! let s = Value::string("hello");
//! let f = Value::function("print");
//! let t = TableBuilder::new().field("name", s).build()?;
//! ```
//!
//! # Thread Safety
//!
//! Every payload is immutable once wrapped, so `Value` is `Send + Sync`.

mod error;
mod heap;
mod reference;
mod table;

use std::fmt;

pub use error::ValueError;
pub use heap::Heap;
pub use reference::{FunctionValue, ThreadValue};
pub use table::{TableBuilder, TableValue};

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Nil,
    Boolean(bool),
    /// All numbers are doubles; integers are integral doubles.
    Number(f64),
    String(Heap<str>),
    Function(Heap<FunctionValue>),
    /// A coroutine handle.
    Thread(Heap<ThreadValue>),
    Table(Heap<TableValue>),
}

// Factory methods (the only way to build heap values)

impl Value {
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    #[inline]
    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    #[inline]
    pub fn string(s: &str) -> Self {
        Value::String(Heap::from_text(s))
    }

    /// Create a fresh function object. Two calls never yield the same function.
    pub fn function(name: &str) -> Self {
        Value::Function(Heap::new(FunctionValue::new(name)))
    }

    /// Create a fresh coroutine handle.
    pub fn thread() -> Self {
        Value::Thread(Heap::new(ThreadValue::new()))
    }

    /// Freeze a table into a value. Clones of the value share the table.
    pub fn table(table: TableValue) -> Self {
        Value::Table(Heap::new(table))
    }

    /// An empty table.
    pub fn empty_table() -> Self {
        Self::table(TableValue::new())
    }
}

// Classification

impl Value {
    /// Runtime category name, as a script would see it.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::Thread(_) => "thread",
            Value::Table(_) => "table",
        }
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_table(&self) -> Option<&TableValue> {
        match self {
            Value::Table(t) => Some(&**t),
            _ => None,
        }
    }

    /// Raw equality that also treats every `NaN` as identical to every other.
    ///
    /// Plain `==` follows IEEE semantics, which would make a `NaN` literal
    /// unequal to itself.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }

    /// Source-like rendering: strings are quoted and escaped.
    pub fn repr(&self) -> String {
        match self {
            Value::String(s) => quote(s),
            other => other.to_string(),
        }
    }
}

/// Raw equality: no coercion between categories, references by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.id() == b.id(),
            (Value::Thread(a), Value::Thread(b)) => a.id() == b.id(),
            (Value::Table(a), Value::Table(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Function(func) => fmt::Display::fmt(&**func, f),
            Value::Thread(thread) => fmt::Display::fmt(&**thread, f),
            Value::Table(t) => write!(f, "table: #{}", t.id()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(&quote(s)),
            Value::Table(t) => fmt::Debug::fmt(&**t, f),
            other => fmt::Display::fmt(other, f),
        }
    }
}

fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("nan")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "inf" } else { "-inf" })
    } else {
        // f64's Display already drops the fractional part of integral values.
        write!(f, "{n}")
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// Values cross threads freely; keep it that way.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};
