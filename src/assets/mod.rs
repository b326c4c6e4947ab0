//! Asset JSON documents.
//!
//! Serde document types for everything the generator writes: blockstates,
//! block/item models, loot tables, tags and pack metadata. String maps are
//! ordered so emitted files are deterministic.

pub mod blockstate;
pub mod loot;
pub mod meta;
pub mod model;
pub mod tag;

pub use blockstate::{Blockstate, ModelVariant, VariantList};
pub use loot::{LootCondition, LootEntry, LootPool, LootTable};
pub use meta::{PackDescription, PackMeta, PackSection, DEFAULT_PACK_FORMAT};
pub use model::{CubeKind, ModelJson};
pub use tag::{MiningLevel, TagJson, Tool};

use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a document to pretty JSON and write it, creating parent
/// directories as needed. Existing files are overwritten whole; generated
/// documents are never merged or diffed.
pub(crate) fn write_json_file(path: &Path, document: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/mymod/tags/blocks/ruby.json");

        write_json_file(&path, &TagJson::new(["mymod:ruby_block"])).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: TagJson = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.values, vec!["mymod:ruby_block"]);
        assert!(contents.ends_with('\n'));
    }
}
