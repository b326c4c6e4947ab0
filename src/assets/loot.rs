//! Loot table documents.

use crate::types::ResourceId;
use serde::{Deserialize, Serialize};

/// A loot table document from `loot_tables/blocks/<name>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
    #[serde(rename = "type")]
    pub kind: String,
    pub pools: Vec<LootPool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootPool {
    pub rolls: f32,
    pub bonus_rolls: f32,
    pub entries: Vec<LootEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<LootCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootCondition {
    pub condition: String,
}

impl LootTable {
    /// The vanilla self-drop table: the block drops its own item, provided
    /// the explosion that broke it did not destroy the drop.
    pub fn block_drop(id: &ResourceId) -> Self {
        Self {
            kind: "minecraft:block".to_string(),
            pools: vec![LootPool {
                rolls: 1.0,
                bonus_rolls: 0.0,
                entries: vec![LootEntry {
                    kind: "minecraft:item".to_string(),
                    name: id.to_string(),
                }],
                conditions: vec![LootCondition {
                    condition: "minecraft:survives_explosion".to_string(),
                }],
            }],
        }
    }
}
