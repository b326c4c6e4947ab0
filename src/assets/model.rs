//! Block and item model documents.
//!
//! Generated models are thin wrappers over the vanilla cube templates: a
//! parent reference plus the texture slots that template expects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which vanilla cube template a generated block model extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeKind {
    /// Same texture on all six faces.
    All,
    /// One side texture, one texture for both ends.
    Column,
    /// Distinct side, bottom and top textures.
    BottomTop,
}

impl CubeKind {
    /// The vanilla parent model backing this template.
    pub fn parent(&self) -> &'static str {
        match self {
            CubeKind::All => "minecraft:block/cube_all",
            CubeKind::Column => "minecraft:block/cube_column",
            CubeKind::BottomTop => "minecraft:block/cube_bottom_top",
        }
    }
}

/// A model document from `models/block/<name>.json` or
/// `models/item/<name>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub textures: BTreeMap<String, String>,
}

impl ModelJson {
    /// A cube with the same texture on every face.
    pub fn cube_all(texture: &str) -> Self {
        Self::with_parent(CubeKind::All.parent()).texture("all", texture)
    }

    /// A pillar cube with a side texture and a shared end texture.
    pub fn cube_column(side: &str, end: &str) -> Self {
        Self::with_parent(CubeKind::Column.parent())
            .texture("side", side)
            .texture("end", end)
    }

    /// A cube with distinct side, bottom and top textures.
    pub fn cube_bottom_top(side: &str, bottom: &str, top: &str) -> Self {
        Self::with_parent(CubeKind::BottomTop.parent())
            .texture("side", side)
            .texture("bottom", bottom)
            .texture("top", top)
    }

    /// A cube template with extra face textures derived by suffix: `Column`
    /// reuses `<texture>_top` for both ends, `BottomTop` adds `_bottom` and
    /// `_top`.
    pub fn cube(kind: CubeKind, texture: &str) -> Self {
        match kind {
            CubeKind::All => Self::cube_all(texture),
            CubeKind::Column => Self::cube_column(texture, &format!("{texture}_top")),
            CubeKind::BottomTop => Self::cube_bottom_top(
                texture,
                &format!("{texture}_bottom"),
                &format!("{texture}_top"),
            ),
        }
    }

    /// An item model that only points at its parent, typically the
    /// corresponding block model.
    pub fn item(parent: &str) -> Self {
        Self::with_parent(parent)
    }

    fn with_parent(parent: &str) -> Self {
        Self {
            parent: Some(parent.to_string()),
            textures: BTreeMap::new(),
        }
    }

    fn texture(mut self, slot: &str, location: &str) -> Self {
        self.textures.insert(slot.to_string(), location.to_string());
        self
    }
}
