//! Keyed containers.
//!
//! A [`TableValue`] maps any non-nil, non-NaN key to a non-nil value.
//! Storing `nil` removes the entry, so a present entry is never absent.
//! Iteration follows insertion order; lookup goes through a hashed key form
//! ([`TableKey`]) so that numbers, strings and object identities all hash.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::reference::next_object_id;
use crate::{Heap, Value, ValueError};

/// Hashable projection of a table key.
///
/// Numbers hash by their bit pattern after folding `-0.0` into `0.0`;
/// reference values hash by object id.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum TableKey {
    Boolean(bool),
    Number(u64),
    String(Heap<str>),
    Object(u64),
}

impl TableKey {
    fn from_value(key: &Value) -> Result<Self, ValueError> {
        match key {
            Value::Nil => Err(ValueError::NilKey),
            Value::Boolean(b) => Ok(TableKey::Boolean(*b)),
            Value::Number(n) if n.is_nan() => Err(ValueError::NaNKey),
            Value::Number(n) => {
                let folded = if *n == 0.0 { 0.0 } else { *n };
                Ok(TableKey::Number(folded.to_bits()))
            }
            Value::String(s) => Ok(TableKey::String(s.clone())),
            Value::Function(f) => Ok(TableKey::Object(f.id())),
            Value::Thread(t) => Ok(TableKey::Object(t.id())),
            Value::Table(t) => Ok(TableKey::Object(t.id())),
        }
    }
}

/// A keyed container with identity.
pub struct TableValue {
    id: u64,
    entries: Vec<(Value, Value)>,
    index: FxHashMap<TableKey, usize>,
}

impl TableValue {
    pub fn new() -> Self {
        TableValue {
            id: next_object_id(),
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Process-unique identity of this table.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `value` at `key`, returning the previous value.
    ///
    /// A `nil` value removes the entry. Removal shifts later entries down,
    /// keeping the remaining insertion order intact.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<Option<Value>, ValueError> {
        let hashed = TableKey::from_value(&key)?;

        if value.is_nil() {
            let Some(pos) = self.index.remove(&hashed) else {
                return Ok(None);
            };
            let (_, old) = self.entries.remove(pos);
            for slot in self.index.values_mut() {
                if *slot > pos {
                    *slot -= 1;
                }
            }
            return Ok(Some(old));
        }

        if let Some(&pos) = self.index.get(&hashed) {
            return Ok(Some(std::mem::replace(&mut self.entries[pos].1, value)));
        }

        self.index.insert(hashed, self.entries.len());
        self.entries.push((key, value));
        Ok(None)
    }

    /// Look up the value stored at `key`. `nil` and `NaN` keys find nothing.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let hashed = TableKey::from_value(key).ok()?;
        self.index.get(&hashed).map(|&pos| &self.entries[pos].1)
    }

    /// Convenience lookup for string keys.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.index
            .get(&TableKey::String(Heap::from_text(key)))
            .map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl Default for TableValue {
    fn default() -> Self {
        Self::new()
    }
}

/// A copy is a distinct table with the same entries.
impl Clone for TableValue {
    fn clone(&self) -> Self {
        TableValue {
            id: next_object_id(),
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl fmt::Debug for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Fluent construction of table values.
///
/// Errors are deferred to [`TableBuilder::build`] so chains stay readable.
#[derive(Default)]
pub struct TableBuilder {
    table: TableValue,
    error: Option<ValueError>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under a string key.
    #[must_use]
    pub fn field(self, name: &str, value: Value) -> Self {
        self.entry(Value::string(name), value)
    }

    /// Add an entry under an arbitrary key.
    #[must_use]
    pub fn entry(mut self, key: Value, value: Value) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.table.insert(key, value) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finish the table, reporting the first rejected key.
    pub fn build(self) -> Result<Value, ValueError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Value::table(self.table)),
        }
    }
}
