//! Caller-supplied call options.
//!
//! cPanel parameters are loosely typed, so options are carried as JSON values
//! keyed by parameter name. Values are never validated locally; the remote API
//! rejects what it does not accept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value parameters for a single API call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty options map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` and returns its value.
    ///
    /// Selector keys are taken out this way so they never reach the remote API.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns true when `key` holds anything other than `null` or `false`.
    pub fn is_truthy(&self, key: &str) -> bool {
        is_truthy(self.0.get(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Absent, `null` and `false` are falsy; every other value is truthy.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
