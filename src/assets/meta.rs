//! `pack.mcmeta` documents.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Resource format for 1.20.x clients. Callers targeting other engine
/// versions pass their own format number.
pub const DEFAULT_PACK_FORMAT: u32 = 15;

/// A `pack.mcmeta` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSection {
    pub pack_format: u32,
    pub description: PackDescription,
}

/// Either a plain string or a translatable component with a fallback for
/// clients missing the language entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackDescription {
    Plain(String),
    Translated { translate: String, fallback: String },
}

impl PackDescription {
    pub fn plain(text: &str) -> Self {
        PackDescription::Plain(text.to_string())
    }
}

impl PackMeta {
    pub fn new(pack_format: u32, description: PackDescription) -> Self {
        Self {
            pack: PackSection {
                pack_format,
                description,
            },
        }
    }

    /// Metadata for a generated pack: the description is a translation key
    /// derived from the namespace, with a plain-text fallback.
    pub fn generated(namespace: &str, pack_format: u32) -> Self {
        Self::new(
            pack_format,
            PackDescription::Translated {
                translate: format!("{namespace}.metadata.description"),
                fallback: "Resources generated by packwright.".to_string(),
            },
        )
    }

    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
