//! Namespaced resource identifiers.

use crate::error::{PackError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Namespace applied when parsing an un-prefixed identifier.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced resource identifier, e.g. `mymod:block/ruby_pillar`.
///
/// Follows the vanilla character rules: namespaces allow `a-z`, `0-9`, `_`,
/// `.` and `-`; paths additionally allow `/`. Construction validates both
/// parts, so a held `ResourceId` is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Create an identifier from a namespace and path, validating both.
    pub fn new(namespace: &str, path: &str) -> Result<Self> {
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(PackError::InvalidIdentifier(format!(
                "{}:{}",
                namespace, path
            )));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(PackError::InvalidIdentifier(format!(
                "{}:{}",
                namespace, path
            )));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Create an identifier in the `minecraft` namespace.
    pub fn minecraft(path: &str) -> Result<Self> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for ResourceId {
    type Err = PackError;

    /// Parse `"ns:path"`; a missing namespace defaults to `minecraft`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
