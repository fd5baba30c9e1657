//! Parameter storage handed to the driver.
//!
//! Positional styles store a sequence, named styles an insertion-ordered
//! key→value mapping. Both serialize to the shape a driver expects (a JSON
//! array or a JSON object).

use crate::error::{BindError, BindResult};
use crate::value::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered `key → value` mapping for named styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NamedParams {
    entries: IndexMap<String, Value>,
}

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The underlying ordered map.
    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }
}

impl IntoIterator for NamedParams {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<NamedParams> for IndexMap<String, Value> {
    fn from(p: NamedParams) -> Self {
        p.entries
    }
}

/// Bound values collected by a [`QueryParams`](crate::QueryParams).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    /// Sequence for `qmark`, `numeric`, `format` and `dollar` styles.
    Positional(Vec<Value>),
    /// Mapping for `named` and `pyformat` styles.
    Named(NamedParams),
}

impl Params {
    pub(crate) fn for_named(named: bool) -> Self {
        if named {
            Params::Named(NamedParams::new())
        } else {
            Params::Positional(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Params::Positional(v) => v.len(),
            Params::Named(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            Params::Positional(_) => "positional",
            Params::Named(_) => "named",
        }
    }

    /// Values in insertion order, regardless of shape.
    pub fn values(&self) -> Vec<&Value> {
        match self {
            Params::Positional(v) => v.iter().collect(),
            Params::Named(m) => m.iter().map(|(_, v)| v).collect(),
        }
    }

    pub fn as_positional(&self) -> Option<&[Value]> {
        match self {
            Params::Positional(v) => Some(v),
            Params::Named(_) => None,
        }
    }

    pub fn as_named(&self) -> Option<&NamedParams> {
        match self {
            Params::Named(m) => Some(m),
            Params::Positional(_) => None,
        }
    }

    /// Take the sequence of a positional accumulator.
    pub fn into_positional(self) -> BindResult<Vec<Value>> {
        match self {
            Params::Positional(v) => Ok(v),
            other => Err(BindError::StyleMismatch {
                expected: "positional",
                actual: other.kind(),
            }),
        }
    }

    /// Take the mapping of a named accumulator.
    pub fn into_named(self) -> BindResult<NamedParams> {
        match self {
            Params::Named(m) => Ok(m),
            other => Err(BindError::StyleMismatch {
                expected: "named",
                actual: other.kind(),
            }),
        }
    }
}
