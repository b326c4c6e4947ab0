//! Tag documents and the vanilla harvest tag names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag document from `tags/**/<name>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagJson {
    #[serde(default)]
    pub replace: bool,
    pub values: Vec<String>,
}

impl TagJson {
    /// A non-replacing tag over already-qualified ids.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replace: false,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A non-replacing tag over bare names, qualified with `namespace`.
    pub fn namespaced<I, S>(namespace: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| format!("{namespace}:{}", name.as_ref())),
        )
    }
}

/// Harvest tools with a vanilla `mineable/<tool>` block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Axe,
    Hoe,
    Pickaxe,
    Shovel,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Axe, Tool::Hoe, Tool::Pickaxe, Tool::Shovel];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Axe => "axe",
            Tool::Hoe => "hoe",
            Tool::Pickaxe => "pickaxe",
            Tool::Shovel => "shovel",
        }
    }

    /// Tag file path below `tags/blocks`, without extension.
    pub fn tag_file(&self) -> String {
        format!("mineable/{}", self.as_str())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mining levels with a vanilla `needs_<level>_tool` block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiningLevel {
    Stone,
    Iron,
    Diamond,
}

impl MiningLevel {
    pub const ALL: [MiningLevel; 3] = [MiningLevel::Stone, MiningLevel::Iron, MiningLevel::Diamond];

    pub fn as_str(&self) -> &'static str {
        match self {
            MiningLevel::Stone => "stone",
            MiningLevel::Iron => "iron",
            MiningLevel::Diamond => "diamond",
        }
    }

    /// Tag file path below `tags/blocks`, without extension.
    pub fn tag_file(&self) -> String {
        format!("needs_{}_tool", self.as_str())
    }
}

impl fmt::Display for MiningLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
