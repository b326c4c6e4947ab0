//! Blockstate definitions.
//!
//! Maps block property combinations to model variants. Generated blockstates
//! use the single catch-all variant; parsing also accepts the weighted-array
//! form vanilla and mods emit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A blockstate document from `blockstates/<block>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blockstate {
    pub variants: BTreeMap<String, VariantList>,
}

impl Blockstate {
    /// The shape the generator emits: one default variant covering every
    /// property combination.
    pub fn single(model: &str) -> Self {
        let mut variants = BTreeMap::new();
        variants.insert(String::new(), VariantList::Single(ModelVariant::new(model)));
        Self { variants }
    }

    pub fn with_variant(mut self, key: &str, variant: ModelVariant) -> Self {
        self.variants
            .insert(key.to_string(), VariantList::Single(variant));
        self
    }
}

/// One model or a weighted list of candidate models for a variant key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantList {
    Single(ModelVariant),
    Weighted(Vec<ModelVariant>),
}

impl VariantList {
    pub fn variants(&self) -> Vec<&ModelVariant> {
        match self {
            VariantList::Single(variant) => vec![variant],
            VariantList::Weighted(variants) => variants.iter().collect(),
        }
    }
}

/// A model reference with optional rotation and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVariant {
    pub model: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub uvlock: bool,
    #[serde(default = "default_weight", skip_serializing_if = "is_default_weight")]
    pub weight: u32,
}

impl ModelVariant {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            x: 0,
            y: 0,
            uvlock: false,
            weight: default_weight(),
        }
    }

    pub fn with_rotation(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_weight() -> u32 {
    1
}

fn is_default_weight(value: &u32) -> bool {
    *value == default_weight()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variant_shape() {
        let blockstate = Blockstate::single("mymod:block/ruby_block");
        let json = serde_json::to_value(&blockstate).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "variants": {
                    "": { "model": "mymod:block/ruby_block" }
                }
            })
        );
    }

    #[test]
    fn test_parse_weighted_variants() {
        let json = r#"{
            "variants": {
                "": [
                    { "model": "minecraft:block/stone" },
                    { "model": "minecraft:block/stone_mirrored", "weight": 2 }
                ]
            }
        }"#;

        let blockstate: Blockstate = serde_json::from_str(json).unwrap();
        let variants = blockstate.variants[""].variants();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].weight, 1);
        assert_eq!(variants[1].weight, 2);
    }

    #[test]
    fn test_parse_rotation() {
        let json = r#"{
            "variants": {
                "axis=x": { "model": "minecraft:block/oak_log", "x": 90, "y": 90 }
            }
        }"#;

        let blockstate: Blockstate = serde_json::from_str(json).unwrap();
        let variants = blockstate.variants["axis=x"].variants();
        assert_eq!(variants[0].x, 90);
        assert_eq!(variants[0].y, 90);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let blockstate = Blockstate::default()
            .with_variant("axis=y", ModelVariant::new("mymod:block/pillar"))
            .with_variant(
                "axis=x",
                ModelVariant::new("mymod:block/pillar").with_rotation(90, 90),
            );

        let json = serde_json::to_string(&blockstate).unwrap();
        let parsed: Blockstate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, blockstate);
    }
}
