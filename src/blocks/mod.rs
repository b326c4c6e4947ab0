//! Block descriptors.
//!
//! Plain-data stand-ins for engine block settings: enough for a host to
//! describe pillar-style blocks, carry their strength presets around, and
//! mark blocks as transparent for render-layer decisions. No registration
//! with any engine happens here.

use crate::types::ResourceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Stone,
    Metal,
    Wood,
    Soil,
    Glass,
    Plant,
}

impl Material {
    /// Sound group a plain `of(material)` settings starts with.
    pub fn default_sounds(&self) -> SoundGroup {
        match self {
            Material::Stone => SoundGroup::Stone,
            Material::Metal => SoundGroup::Metal,
            Material::Wood => SoundGroup::Wood,
            Material::Soil => SoundGroup::Gravel,
            Material::Glass => SoundGroup::Glass,
            Material::Plant => SoundGroup::Grass,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundGroup {
    Stone,
    Metal,
    Wood,
    Grass,
    Glass,
    Gravel,
    Sand,
}

/// Fluent block settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    pub material: Material,
    pub hardness: f32,
    pub resistance: f32,
    pub requires_tool: bool,
    pub sounds: SoundGroup,
}

impl BlockSettings {
    pub fn of(material: Material) -> Self {
        Self {
            material,
            hardness: 0.0,
            resistance: 0.0,
            requires_tool: false,
            sounds: material.default_sounds(),
        }
    }

    pub fn strength(mut self, hardness: f32, resistance: f32) -> Self {
        self.hardness = hardness;
        self.resistance = resistance;
        self
    }

    /// One value for both hardness and resistance.
    pub fn strength_uniform(self, strength: f32) -> Self {
        self.strength(strength, strength)
    }

    pub fn requires_tool(mut self) -> Self {
        self.requires_tool = true;
        self
    }

    pub fn sounds(mut self, sounds: SoundGroup) -> Self {
        self.sounds = sounds;
        self
    }
}

/// A pillar-style block: an id plus its settings, with the requires-tool
/// preset the convenience constructors apply.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarBlock {
    id: ResourceId,
    settings: BlockSettings,
}

impl PillarBlock {
    pub fn new(
        id: ResourceId,
        material: Material,
        hardness: f32,
        resistance: f32,
        sounds: SoundGroup,
    ) -> Self {
        Self::from_settings(
            id,
            BlockSettings::of(material)
                .requires_tool()
                .strength(hardness, resistance)
                .sounds(sounds),
        )
    }

    pub fn with_strength(
        id: ResourceId,
        material: Material,
        strength: f32,
        sounds: SoundGroup,
    ) -> Self {
        Self::from_settings(
            id,
            BlockSettings::of(material)
                .requires_tool()
                .strength_uniform(strength)
                .sounds(sounds),
        )
    }

    pub fn from_settings(id: ResourceId, settings: BlockSettings) -> Self {
        Self { id, settings }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn settings(&self) -> &BlockSettings {
        &self.settings
    }

    /// Register into a block list, keeping the chain going.
    pub fn add_to(self, list: &mut Vec<PillarBlock>) -> Self {
        list.push(self.clone());
        self
    }

    /// Mark this block transparent.
    pub fn transparent(self, transparent: &mut TransparentBlocks) -> Self {
        transparent.add(self.id.clone());
        self
    }
}

/// Blocks whose faces should render on a transparent layer. Consulted by
/// rendering hosts, only maintained here.
#[derive(Debug, Clone, Default)]
pub struct TransparentBlocks {
    blocks: BTreeSet<ResourceId>,
}

impl TransparentBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ResourceId) -> bool {
        self.blocks.insert(id)
    }

    pub fn remove(&mut self, id: &ResourceId) -> bool {
        self.blocks.remove(id)
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.blocks.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceId> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruby() -> ResourceId {
        ResourceId::new("mymod", "ruby_pillar").unwrap()
    }

    #[test]
    fn test_settings_fluent_chain() {
        let settings = BlockSettings::of(Material::Stone)
            .requires_tool()
            .strength(5.0, 6.0)
            .sounds(SoundGroup::Metal);

        assert_eq!(settings.material, Material::Stone);
        assert_eq!(settings.hardness, 5.0);
        assert_eq!(settings.resistance, 6.0);
        assert!(settings.requires_tool);
        assert_eq!(settings.sounds, SoundGroup::Metal);
    }

    #[test]
    fn test_settings_default_sounds_follow_material() {
        assert_eq!(BlockSettings::of(Material::Wood).sounds, SoundGroup::Wood);
        assert_eq!(BlockSettings::of(Material::Soil).sounds, SoundGroup::Gravel);
    }

    #[test]
    fn test_pillar_presets() {
        let pillar = PillarBlock::new(ruby(), Material::Metal, 5.0, 6.0, SoundGroup::Metal);
        assert!(pillar.settings().requires_tool);
        assert_eq!(pillar.settings().hardness, 5.0);
        assert_eq!(pillar.settings().resistance, 6.0);

        let uniform = PillarBlock::with_strength(ruby(), Material::Stone, 3.0, SoundGroup::Stone);
        assert_eq!(uniform.settings().hardness, 3.0);
        assert_eq!(uniform.settings().resistance, 3.0);
    }

    #[test]
    fn test_pillar_chains_into_registries() {
        let mut blocks = Vec::new();
        let mut transparent = TransparentBlocks::new();

        let pillar = PillarBlock::with_strength(ruby(), Material::Glass, 0.3, SoundGroup::Glass)
            .add_to(&mut blocks)
            .transparent(&mut transparent);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], pillar);
        assert!(transparent.contains(pillar.id()));
    }

    #[test]
    fn test_transparent_blocks_set_semantics() {
        let mut transparent = TransparentBlocks::new();
        assert!(transparent.add(ruby()));
        assert!(!transparent.add(ruby()));
        assert_eq!(transparent.len(), 1);

        assert!(transparent.remove(&ruby()));
        assert!(transparent.is_empty());
    }

    #[test]
    fn test_settings_serde_lowercase() {
        let json = serde_json::to_value(BlockSettings::of(Material::Stone)).unwrap();
        assert_eq!(json["material"], "stone");
        assert_eq!(json["sounds"], "stone");
    }
}
