//! # Packwright
//!
//! A Rust library for generating Minecraft resource packs and serving them
//! back to a resource-loading pipeline.
//!
//! ## Overview
//!
//! This library lays out namespaced resource/data pack trees on disk
//! (blockstates, block and item models, loot tables, tags, textures, pack
//! metadata), gated by a per-namespace lock flag so user edits survive
//! relaunches, and serves a generated tree back through the [`PackSource`]
//! lookup contract. A small block-descriptor layer covers pillar blocks and
//! transparency marking.
//!
//! ## Quick Start
//!
//! ```ignore
//! use packwright::{
//!     CubeKind, PackMeta, PackRegistry, PackSource, ProviderConfig, ResourcePackBuilder,
//!     TextureKind, DEFAULT_PACK_FORMAT,
//! };
//!
//! let mut config = ProviderConfig::new("run/config/mymod", "mymod");
//! let mut registry = PackRegistry::new();
//!
//! // Generate the pack tree (first run only; later runs skip generation)
//! let pack = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
//!     .create_blockstate("ruby_block")
//!     .create_block_models("ruby_block", "ruby_block", CubeKind::All)
//!     .create_block_drop_loot_table("ruby_block")
//!     .create_placeholder_texture(TextureKind::Block, "ruby_block")
//!     .source(&mut registry, PackMeta::generated("mymod", DEFAULT_PACK_FORMAT));
//!
//! // Serve it back
//! let meta = pack.open_root(&["pack.mcmeta"]).unwrap();
//! ```

pub mod error;
pub mod types;
pub mod assets;
pub mod config;
pub mod registry;
pub mod generator;
pub mod pack;
pub mod blocks;
pub mod export;

// Re-export main types for convenience
pub use assets::{
    Blockstate, CubeKind, LootTable, MiningLevel, ModelJson, PackDescription, PackMeta, TagJson,
    Tool, DEFAULT_PACK_FORMAT,
};
pub use blocks::{BlockSettings, Material, PillarBlock, SoundGroup, TransparentBlocks};
pub use config::{PropertiesFile, ProviderConfig};
pub use error::{PackError, Result};
pub use export::export_zip;
pub use generator::{ResourcePackBuilder, TextureKind};
pub use pack::{DirectoryPack, PackSource, ResourceSupplier};
pub use registry::{PackDescriptor, PackRegistry};
pub use types::{ResourceCategory, ResourceId, DEFAULT_NAMESPACE};

/// Open a generated pack as a [`DirectoryPack`] with freshly synthesized
/// metadata.
pub fn open_pack<P: AsRef<std::path::Path>>(
    packs_root: P,
    namespace: &str,
    pack_format: u32,
) -> DirectoryPack {
    DirectoryPack::new(
        namespace,
        packs_root,
        PackMeta::generated(namespace, pack_format),
        None,
    )
}
