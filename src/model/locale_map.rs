use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Schema version stamped into every locale file.
pub const LOCALE_SCHEMA_VERSION: u32 = 100;

/// Key holding the schema version; no string id may use it.
pub const VERSION_KEY: &str = "version";

/// String id -> translated text for one language.
///
/// Serializes as a flat JSON object: `version` first, then the ids in the
/// order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LocaleMap {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts or replaces a value. A replaced id keeps its original position;
    /// the previous value is returned.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let id = id.into();
        let value = value.into();

        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, value));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn version(&self) -> u32 {
        LOCALE_SCHEMA_VERSION
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for LocaleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(VERSION_KEY, &LOCALE_SCHEMA_VERSION)?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}
