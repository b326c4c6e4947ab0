//! Packwright CLI
//!
//! Generate, inspect and bundle Minecraft resource packs.

use clap::{Parser, Subcommand};
use packwright::{
    export_zip, open_pack, CubeKind, MiningLevel, PackDescription, PackMeta, PackRegistry,
    PackSource, ProviderConfig, ResourceCategory, ResourcePackBuilder, TextureKind, Tool,
    DEFAULT_PACK_FORMAT,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packwright")]
#[command(author, version, about = "Generate and bundle Minecraft resource packs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a resource pack from a JSON manifest
    Generate {
        /// Manifest file describing the pack and its blocks
        #[arg(short, long)]
        manifest: PathBuf,

        /// Provider directory; packs land under <root>/resourcepacks
        #[arg(short, long)]
        root: PathBuf,
    },

    /// Show information about a generated pack
    Info {
        /// Provider directory; packs live under <root>/resourcepacks
        #[arg(short, long)]
        root: PathBuf,

        /// Pack namespace
        #[arg(short, long)]
        namespace: String,

        /// Pack format number for the synthesized metadata
        #[arg(long, default_value_t = DEFAULT_PACK_FORMAT)]
        pack_format: u32,
    },

    /// Bundle a generated pack into a distributable .zip
    ExportZip {
        /// Provider directory; packs live under <root>/resourcepacks
        #[arg(short, long)]
        root: PathBuf,

        /// Pack namespace
        #[arg(short, long)]
        namespace: String,

        /// Output archive path
        #[arg(short, long)]
        output: PathBuf,

        /// Pack format number for a synthesized pack.mcmeta
        #[arg(long, default_value_t = DEFAULT_PACK_FORMAT)]
        pack_format: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { manifest, root } => {
            generate(&manifest, &root)?;
        }
        Commands::Info {
            root,
            namespace,
            pack_format,
        } => {
            show_pack_info(&root, &namespace, pack_format)?;
        }
        Commands::ExportZip {
            root,
            namespace,
            output,
            pack_format,
        } => {
            let pack = open_pack(root.join("resourcepacks"), &namespace, pack_format);
            let entries = export_zip(&pack, &output)?;
            println!("Exported {} entries to {:?}", entries, output);
        }
    }

    Ok(())
}

fn generate(manifest_path: &PathBuf, root: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading manifest from {:?}...", manifest_path);
    let manifest: PackManifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    println!("  {} blocks for namespace {}", manifest.blocks.len(), manifest.namespace);

    let mut config = ProviderConfig::new(root, &manifest.namespace);
    let mut registry = PackRegistry::new();
    let mut builder = ResourcePackBuilder::new(
        &mut config,
        &mut registry,
        &manifest.namespace,
        manifest.icon_url.as_deref(),
    );

    for block in &manifest.blocks {
        let texture = block.texture.as_deref().unwrap_or(&block.name);
        builder = builder
            .create_blockstate(&block.name)
            .create_block_models(&block.name, texture, block.cube);
        if block.drops_self {
            builder = builder.create_block_drop_loot_table(&block.name);
        }
        if block.global_tag {
            builder = builder.create_global_tag(&block.name);
        }
        if let Some(url) = &block.texture_url {
            builder = builder.create_texture(TextureKind::Block, url, texture);
        } else if block.placeholder_texture {
            builder = builder.create_placeholder_texture(TextureKind::Block, texture);
        }
    }

    // Tool and level tags rewrite whole files, so collect names up front.
    for tool in Tool::ALL {
        let names = names_with(&manifest.blocks, |block| block.tool == Some(tool));
        if !names.is_empty() {
            builder = builder.create_required_tool_tag(tool, &names);
        }
    }
    for level in MiningLevel::ALL {
        let names = names_with(&manifest.blocks, |block| block.mining_level == Some(level));
        if !names.is_empty() {
            builder = builder.create_mining_level_tag(level, &names);
        }
    }

    let meta = match &manifest.description {
        Some(text) => PackMeta::new(manifest.pack_format, PackDescription::plain(text)),
        None => PackMeta::generated(&manifest.namespace, manifest.pack_format),
    };
    let pack = builder.source(&mut registry, meta);

    println!("Generated pack at {:?}", pack.base());
    for category in ResourceCategory::ALL {
        let namespaces = pack.namespaces(category);
        for namespace in &namespaces {
            println!(
                "  {}/{}: {} resources",
                category.directory(),
                namespace,
                count_resources(&pack, category, namespace)
            );
        }
    }

    Ok(())
}

fn show_pack_info(
    root: &PathBuf,
    namespace: &str,
    pack_format: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let pack = open_pack(root.join("resourcepacks"), namespace, pack_format);

    println!("Pack: {} ({:?})", pack.display_name(), pack.base());
    match pack.metadata_section("pack") {
        Some(section) => println!("  Metadata: {}", section),
        None => println!("  Metadata: none"),
    }

    for category in ResourceCategory::ALL {
        let namespaces = pack.namespaces(category);
        println!("  {} namespaces: {:?}", category.directory(), namespaces);
        for namespace in &namespaces {
            println!(
                "    {}: {} resources",
                namespace,
                count_resources(&pack, category, namespace)
            );
        }
    }

    Ok(())
}

fn names_with<'a>(blocks: &'a [BlockEntry], keep: impl Fn(&BlockEntry) -> bool) -> Vec<&'a str> {
    blocks
        .iter()
        .filter(|block| keep(block))
        .map(|block| block.name.as_str())
        .collect()
}

fn count_resources(
    pack: &packwright::DirectoryPack,
    category: ResourceCategory,
    namespace: &str,
) -> usize {
    let mut count = 0;
    pack.find_resources(category, namespace, "", &mut |_, _| count += 1);
    count
}

// Manifest format
#[derive(serde::Deserialize)]
struct PackManifest {
    namespace: String,
    #[serde(default = "default_pack_format")]
    pack_format: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon_url: Option<String>,
    #[serde(default)]
    blocks: Vec<BlockEntry>,
}

#[derive(serde::Deserialize)]
struct BlockEntry {
    name: String,
    /// Texture name; defaults to the block name.
    #[serde(default)]
    texture: Option<String>,
    #[serde(default = "default_cube")]
    cube: CubeKind,
    /// Remote texture to download.
    #[serde(default)]
    texture_url: Option<String>,
    /// Write the checkerboard stand-in when no URL is given.
    #[serde(default)]
    placeholder_texture: bool,
    #[serde(default)]
    tool: Option<Tool>,
    #[serde(default)]
    mining_level: Option<MiningLevel>,
    #[serde(default = "default_true")]
    drops_self: bool,
    #[serde(default)]
    global_tag: bool,
}

fn default_pack_format() -> u32 {
    DEFAULT_PACK_FORMAT
}

fn default_cube() -> CubeKind {
    CubeKind::All
}

fn default_true() -> bool {
    true
}
