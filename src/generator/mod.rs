//! Resource pack generation.
//!
//! [`ResourcePackBuilder`] drives one pack's generation, gated by the
//! provider's persisted lock flag: on first construction it lays out the pack
//! root and every chained call writes one artifact; once the flag is set,
//! construction and chained calls leave the tree alone so user edits survive
//! relaunches. Failures inside the chain are logged and skipped, never
//! propagated to the host.

pub mod fetch;

use crate::assets::{self, Blockstate, CubeKind, LootTable, MiningLevel, ModelJson, PackMeta, TagJson, Tool};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::pack::DirectoryPack;
use crate::registry::{PackDescriptor, PackRegistry};
use crate::types::{ResourceCategory, ResourceId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which texture directory an image lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    Block,
    Item,
}

impl TextureKind {
    pub fn directory(&self) -> &'static str {
        match self {
            TextureKind::Block => "block",
            TextureKind::Item => "item",
        }
    }
}

/// Generates one namespaced resource pack under a provider's
/// `resourcepacks/` directory.
pub struct ResourcePackBuilder {
    namespace: String,
    packs_root: PathBuf,
    root: PathBuf,
    generate: bool,
}

impl ResourcePackBuilder {
    /// Register a pack for `namespace` and, unless its lock flag is already
    /// set, wipe and recreate the pack root. The flag is persisted as set
    /// afterwards, so the next construction skips generation.
    ///
    /// With `icon_url` set, the icon is downloaded to `resources/pack.png`
    /// unless that file already exists; on failure the pack is hidden and
    /// falls back to the engine default icon.
    pub fn new(
        config: &mut ProviderConfig,
        registry: &mut PackRegistry,
        namespace: &str,
        icon_url: Option<&str>,
    ) -> Self {
        let namespace = namespace.to_lowercase();
        let packs_root = config.packs_root();
        let root = packs_root.join(&namespace);
        registry.register(config.id(), PackDescriptor::new(&namespace, &root));

        let lock_key = format!("{namespace}ResourceLocked");
        let generate = !config.bool_option(&lock_key, false);

        if generate {
            config.clean_resources(&namespace);
            if let Err(error) = create_pack_root(&root) {
                log::warn!("Failed to create pack root {}: {error}", root.display());
            }
            config.set_bool_option(&lock_key, true);
            log::info!("Generated resources for \"{namespace}\"");
        } else {
            log::info!("Resources for \"{namespace}\" already exist, skipping generation");
        }

        let builder = Self {
            namespace,
            packs_root,
            root,
            generate,
        };
        match icon_url {
            Some(url) => builder.create_pack_icon(registry, url),
            None => registry.note_no_icon(&builder.namespace),
        }
        builder
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The pack root, the directory holding `resources/`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Blockstate with a single catch-all variant pointing at
    /// `<ns>:block/<name>`.
    pub fn create_blockstate(self, name: &str) -> Self {
        if self.generate {
            let model = format!("{}:block/{name}", self.namespace);
            self.write_document(
                self.assets_dir().join("blockstates").join(json_file(name)),
                &Blockstate::single(&model),
            );
        }
        self
    }

    /// Block model per `cube` plus the item model parented to it.
    pub fn create_block_models(self, name: &str, texture: &str, cube: CubeKind) -> Self {
        if self.generate {
            let models = self.assets_dir().join("models");
            self.write_document(
                models.join("block").join(json_file(name)),
                &ModelJson::cube(cube, &format!("{}:block/{texture}", self.namespace)),
            );
            self.write_document(
                models.join("item").join(json_file(name)),
                &ModelJson::item(&format!("{}:block/{name}", self.namespace)),
            );
        }
        self
    }

    /// Vanilla self-drop loot table for the block named `name`.
    pub fn create_block_drop_loot_table(self, name: &str) -> Self {
        if self.generate {
            match ResourceId::new(&self.namespace, name) {
                Ok(id) => self.write_document(
                    self.data_dir().join("loot_tables/blocks").join(json_file(name)),
                    &LootTable::block_drop(&id),
                ),
                Err(error) => log::error!("Skipping loot table for invalid block name: {error}"),
            }
        }
        self
    }

    /// Common `c` tag for blocks and items, values `["<ns>:<name>"]`.
    pub fn create_global_tag(self, name: &str) -> Self {
        if self.generate {
            let tag = TagJson::namespaced(&self.namespace, [name]);
            let common = self.category_root(ResourceCategory::Data).join("c/tags");
            self.write_document(common.join("blocks").join(json_file(name)), &tag);
            self.write_document(common.join("items").join(json_file(name)), &tag);
        }
        self
    }

    /// `minecraft:mineable/<tool>` tag over `names`. The whole file is
    /// rewritten; pass every name the tag should hold.
    pub fn create_required_tool_tag(self, tool: Tool, names: &[&str]) -> Self {
        if self.generate {
            self.write_vanilla_block_tag(&tool.tag_file(), names);
        }
        self
    }

    /// `minecraft:needs_<level>_tool` tag over `names`, same rewrite
    /// semantics as [`Self::create_required_tool_tag`].
    pub fn create_mining_level_tag(self, level: MiningLevel, names: &[&str]) -> Self {
        if self.generate {
            self.write_vanilla_block_tag(&level.tag_file(), names);
        }
        self
    }

    /// Download a texture into `textures/{block,item}/<name>.png`. An
    /// existing file is never overwritten, and bytes that do not decode as an
    /// image are dropped.
    pub fn create_texture(self, kind: TextureKind, url: &str, name: &str) -> Self {
        if self.generate {
            match fetch::fetch_bytes(url) {
                Ok(bytes) => self.write_texture(kind, &bytes, name),
                Err(error) => log::warn!("Failed to fetch texture \"{name}\": {error}"),
            }
        }
        self
    }

    /// Same write path as [`Self::create_texture`], from in-memory bytes.
    pub fn create_texture_from(self, kind: TextureKind, bytes: &[u8], name: &str) -> Self {
        if self.generate {
            self.write_texture(kind, bytes, name);
        }
        self
    }

    /// Write the magenta/black checkerboard as a stand-in texture.
    pub fn create_placeholder_texture(self, kind: TextureKind, name: &str) -> Self {
        if self.generate {
            match fetch::placeholder_png() {
                Ok(bytes) => self.write_texture(kind, &bytes, name),
                Err(error) => log::warn!("Failed to encode placeholder \"{name}\": {error}"),
            }
        }
        self
    }

    /// Escape hatch: write a custom document at `relative_path` below the
    /// pack's `resources` directory.
    pub fn write_json(self, relative_path: &str, document: &impl Serialize) -> Self {
        if self.generate {
            self.write_document(self.root.join("resources").join(relative_path), document);
        }
        self
    }

    /// Hide this pack from user-facing pack screens.
    pub fn hide(self, registry: &mut PackRegistry) -> Self {
        registry.hide(&self.namespace);
        self
    }

    /// Finish the chain: build the read-side pack over this tree and record
    /// it as built.
    pub fn source(self, registry: &mut PackRegistry, meta: PackMeta) -> DirectoryPack {
        registry.note_built(&self.namespace);
        DirectoryPack::new(&self.namespace, &self.packs_root, meta, None)
    }

    fn category_root(&self, category: ResourceCategory) -> PathBuf {
        self.root.join("resources").join(category.directory())
    }

    fn assets_dir(&self) -> PathBuf {
        self.category_root(ResourceCategory::Assets).join(&self.namespace)
    }

    fn data_dir(&self) -> PathBuf {
        self.category_root(ResourceCategory::Data).join(&self.namespace)
    }

    fn write_document(&self, path: PathBuf, document: &impl Serialize) {
        if let Err(error) = assets::write_json_file(&path, document) {
            log::warn!("Failed to write {}: {error}", path.display());
        }
    }

    /// Tags that must live in the `minecraft` namespace to take effect.
    fn write_vanilla_block_tag(&self, tag_file: &str, names: &[&str]) {
        self.write_document(
            self.category_root(ResourceCategory::Data)
                .join("minecraft/tags/blocks")
                .join(json_file(tag_file)),
            &TagJson::namespaced(&self.namespace, names),
        );
    }

    fn write_texture(&self, kind: TextureKind, bytes: &[u8], name: &str) {
        let path = self
            .assets_dir()
            .join("textures")
            .join(kind.directory())
            .join(ensure_extension(name, ".png"));
        if path.exists() {
            return;
        }
        if let Err(error) = fetch::validate_image(bytes).and_then(|_| write_bytes(&path, bytes)) {
            log::warn!("Failed to create texture {}: {error}", path.display());
        }
    }

    fn create_pack_icon(&self, registry: &mut PackRegistry, url: &str) {
        let icon_path = self.root.join("resources/pack.png");
        if icon_path.exists() {
            return;
        }
        if let Err(error) = self.download_icon(&icon_path, url) {
            log::warn!(
                "Failed to create pack icon for \"{}\", falling back to the default icon: {error}",
                self.namespace
            );
            registry.note_no_icon(&self.namespace);
            registry.hide(&self.namespace);
        }
    }

    fn download_icon(&self, icon_path: &Path, url: &str) -> Result<()> {
        let bytes = fetch::fetch_bytes(url)?;
        fetch::validate_image(&bytes)?;
        write_bytes(icon_path, &bytes)
    }
}

fn create_pack_root(root: &Path) -> std::io::Result<()> {
    for category in ResourceCategory::ALL {
        fs::create_dir_all(root.join("resources").join(category.directory()))?;
    }
    Ok(())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn json_file(name: &str) -> String {
    ensure_extension(name, ".json")
}

fn ensure_extension(name: &str, extension: &str) -> String {
    if name.ends_with(extension) {
        name.to_string()
    } else {
        format!("{name}{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PackDescription;

    fn setup(dir: &Path) -> (ProviderConfig, PackRegistry) {
        (ProviderConfig::new(dir, "provider"), PackRegistry::new())
    }

    #[test]
    fn test_first_construction_creates_tree_and_locks() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "MyMod", None);

        assert_eq!(builder.namespace(), "mymod");
        assert!(builder.root().join("resources/assets").is_dir());
        assert!(builder.root().join("resources/data").is_dir());
        assert!(registry.find("provider", "mymod").is_some());
        assert!(!registry.has_icon("mymod"));

        let properties = fs::read_to_string(config.properties_path()).unwrap();
        assert!(properties.contains("mymodResourceLocked = true"));
    }

    #[test]
    fn test_locked_construction_performs_no_writes() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (mut config, mut registry) = setup(dir.path());
            ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None);
        }
        let sentinel = dir
            .path()
            .join("resourcepacks/mymod/resources/assets/sentinel.txt");
        fs::write(&sentinel, "user edit").unwrap();
        let properties_before =
            fs::read_to_string(dir.path().join("provider.properties")).unwrap();

        // Simulates a relaunch: fresh config, flag already persisted.
        let (mut config, mut registry) = setup(dir.path());
        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_blockstate("ruby_block");

        assert!(sentinel.exists());
        assert!(!builder.root().join("resources/assets/mymod").exists());
        let properties_after = fs::read_to_string(dir.path().join("provider.properties")).unwrap();
        assert_eq!(properties_after, properties_before);
    }

    #[test]
    fn test_cleared_flag_regenerates_from_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());
        ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None);

        let sentinel = dir
            .path()
            .join("resourcepacks/mymod/resources/assets/sentinel.txt");
        fs::write(&sentinel, "stale").unwrap();
        config.set_bool_option("mymodResourceLocked", false);

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None);

        assert!(!sentinel.exists());
        assert!(builder.root().join("resources/assets").is_dir());
        assert!(config.bool_option("mymodResourceLocked", false));
    }

    #[test]
    fn test_create_blockstate_shape() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_blockstate("ruby_block");

        let path = builder
            .root()
            .join("resources/assets/mymod/blockstates/ruby_block.json");
        let parsed: Blockstate =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, Blockstate::single("mymod:block/ruby_block"));
    }

    #[test]
    fn test_create_block_models_writes_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_block_models("ruby_block", "ruby_block", CubeKind::All);

        let models = builder.root().join("resources/assets/mymod/models");
        let block: ModelJson =
            serde_json::from_str(&fs::read_to_string(models.join("block/ruby_block.json")).unwrap())
                .unwrap();
        assert_eq!(block, ModelJson::cube_all("mymod:block/ruby_block"));

        let item: ModelJson =
            serde_json::from_str(&fs::read_to_string(models.join("item/ruby_block.json")).unwrap())
                .unwrap();
        assert_eq!(item, ModelJson::item("mymod:block/ruby_block"));
    }

    #[test]
    fn test_create_loot_table_and_tags() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_block_drop_loot_table("ruby_block")
            .create_global_tag("ruby_block")
            .create_required_tool_tag(Tool::Pickaxe, &["ruby_block"])
            .create_mining_level_tag(MiningLevel::Iron, &["ruby_block"]);

        let data = builder.root().join("resources/data");
        let loot: LootTable = serde_json::from_str(
            &fs::read_to_string(data.join("mymod/loot_tables/blocks/ruby_block.json")).unwrap(),
        )
        .unwrap();
        let id = ResourceId::new("mymod", "ruby_block").unwrap();
        assert_eq!(loot, LootTable::block_drop(&id));

        for tag_path in [
            "c/tags/blocks/ruby_block.json",
            "c/tags/items/ruby_block.json",
            "minecraft/tags/blocks/mineable/pickaxe.json",
            "minecraft/tags/blocks/needs_iron_tool.json",
        ] {
            let tag: TagJson =
                serde_json::from_str(&fs::read_to_string(data.join(tag_path)).unwrap()).unwrap();
            assert_eq!(tag.values, vec!["mymod:ruby_block"]);
            assert!(!tag.replace);
        }
    }

    #[test]
    fn test_invalid_loot_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_block_drop_loot_table("Bad Name");

        assert!(!builder
            .root()
            .join("resources/data/mymod/loot_tables")
            .exists());
    }

    #[test]
    fn test_texture_write_skips_existing_and_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());
        let bytes = fetch::placeholder_png().unwrap();

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_texture_from(TextureKind::Block, &bytes, "ruby");

        let path = builder
            .root()
            .join("resources/assets/mymod/textures/block/ruby.png");
        assert!(path.exists());

        // A second write with different contents must not overwrite.
        let before = fs::read(&path).unwrap();
        let _ = builder.create_texture_from(TextureKind::Block, b"different", "ruby.png");
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_texture_rejects_non_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_texture_from(TextureKind::Item, b"not an image", "bogus");

        assert!(!builder
            .root()
            .join("resources/assets/mymod/textures/item/bogus.png")
            .exists());
    }

    #[test]
    fn test_placeholder_texture_written() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_placeholder_texture(TextureKind::Block, "missing");

        let path = builder
            .root()
            .join("resources/assets/mymod/textures/block/missing.png");
        fetch::validate_image(&fs::read(path).unwrap()).unwrap();
    }

    #[test]
    fn test_failed_icon_download_hides_pack() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(
            &mut config,
            &mut registry,
            "mymod",
            Some("not a valid url"),
        );

        assert!(registry.is_hidden("mymod"));
        assert!(!registry.has_icon("mymod"));
        assert!(!builder.root().join("resources/pack.png").exists());
    }

    #[test]
    fn test_existing_icon_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (mut config, mut registry) = setup(dir.path());
            ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None);
        }
        let icon = dir.path().join("resourcepacks/mymod/resources/pack.png");
        fs::write(&icon, fetch::placeholder_png().unwrap()).unwrap();

        let (mut config, mut registry) = setup(dir.path());
        ResourcePackBuilder::new(&mut config, &mut registry, "mymod", Some("not a valid url"));

        // The icon on disk short-circuits the fetch, so the bad URL is never hit.
        assert!(!registry.is_hidden("mymod"));
        assert!(icon.exists());
    }

    #[test]
    fn test_write_json_escape_hatch() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let builder = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .write_json(
                "assets/mymod/lang/en_us.json",
                &serde_json::json!({ "mymod.metadata.description": "My Mod" }),
            );

        let path = builder
            .root()
            .join("resources/assets/mymod/lang/en_us.json");
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed["mymod.metadata.description"], "My Mod");
    }

    #[test]
    fn test_source_records_built_pack() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, mut registry) = setup(dir.path());

        let pack = ResourcePackBuilder::new(&mut config, &mut registry, "mymod", None)
            .create_blockstate("ruby_block")
            .hide(&mut registry)
            .source(
                &mut registry,
                PackMeta::new(15, PackDescription::plain("test pack")),
            );

        assert!(registry.is_built("mymod"));
        assert!(registry.is_hidden("mymod"));
        assert_eq!(crate::pack::PackSource::id(&pack), "mymod");
    }
}
