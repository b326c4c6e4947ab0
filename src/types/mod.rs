//! Shared types used throughout the library.

mod identifier;

pub use identifier::{ResourceId, DEFAULT_NAMESPACE};

use serde::{Deserialize, Serialize};

/// The two top-level categories a pack can serve, mirroring the engine's
/// client-resource / server-data split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Client resources: blockstates, models, textures.
    Assets,
    /// Server data: loot tables, tags.
    Data,
}

impl ResourceCategory {
    /// Both categories in order.
    pub const ALL: [ResourceCategory; 2] = [ResourceCategory::Assets, ResourceCategory::Data];

    /// The directory name this category lives under inside `resources/`.
    pub fn directory(&self) -> &'static str {
        match self {
            ResourceCategory::Assets => "assets",
            ResourceCategory::Data => "data",
        }
    }

    /// Parse from a directory name.
    pub fn from_directory(s: &str) -> Option<Self> {
        match s {
            "assets" => Some(ResourceCategory::Assets),
            "data" => Some(ResourceCategory::Data),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directory())
    }
}

/// Uppercase the first character, as pack display names are shown in the GUI.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
