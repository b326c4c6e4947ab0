//! Line-oriented `.properties` storage.
//!
//! `key = value` pairs with `#` comments, kept sorted so saved files are
//! stable across runs. This is deliberately a subset of the Java properties
//! format: no escapes, no multi-line values.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesFile {
    entries: BTreeMap<String, String>,
}

impl PropertiesFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a properties file. A missing file is an empty one; lines
    /// without a `=` separator are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let mut entries = BTreeMap::new();
        for line in fs::read_to_string(path)?.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Ok(Self { entries })
    }

    pub fn save(&self, path: &Path, header: &str) -> Result<()> {
        let mut contents = format!("# {header}\n");
        for (key, value) in &self.entries {
            contents.push_str(&format!("{key} = {value}\n"));
        }
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Parse an entry as a boolean. Any value other than `true` (compared
    /// case-insensitively) is `false`.
    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.get(key).map(|value| value.eq_ignore_ascii_case("true"))
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Insert `value` only when `key` has no entry yet. Returns whether the
    /// insert happened.
    pub fn ensure(&mut self, key: &str, value: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.set(key, value);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
