//! Ordered command set
//!
//! The flat key/value set that is handed to the transport. Keys are unique
//! and a later write to an existing key replaces the value in place, so the
//! iteration order is the order in which keys were first written.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::directive::{DirectiveKey, DirectiveValue};

/// Insertion-ordered directive map with last-write-wins semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    entries: Vec<(DirectiveKey, DirectiveValue)>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a directive, replacing any earlier value for the same key
    ///
    /// Returns the replaced value, if any.
    pub fn insert(
        &mut self,
        key: DirectiveKey,
        value: impl Into<DirectiveValue>,
    ) -> Option<DirectiveValue> {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &DirectiveKey) -> Option<&DirectiveValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &DirectiveKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &DirectiveKey) -> Option<DirectiveValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DirectiveKey, &DirectiveValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &DirectiveKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move the contents out, leaving this set empty
    pub fn take(&mut self) -> CommandSet {
        std::mem::take(self)
    }

    /// The operation marker present in the set, if any
    pub fn operation(&self) -> Option<&DirectiveKey> {
        self.keys().find(|k| k.is_operation())
    }
}

impl<K, V> FromIterator<(K, V)> for CommandSet
where
    K: Into<DirectiveKey>,
    V: Into<DirectiveValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = CommandSet::new();
        for (key, value) in iter {
            set.insert(key.into(), value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a (DirectiveKey, DirectiveValue);
    type IntoIter = std::slice::Iter<'a, (DirectiveKey, DirectiveValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for CommandSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&*key.as_str(), value)?;
        }
        map.end()
    }
}

/// Renders the set as a JSON object in insertion order
impl fmt::Display for CommandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
