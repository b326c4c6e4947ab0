//! Provider configuration.
//!
//! Each provider owns a configuration directory holding a `.properties` file
//! with its options and a `resourcepacks/` directory with every pack it
//! generates. Option reads go back to disk first, so values edited by hand
//! between runs win over in-memory state.

pub mod properties;

pub use properties::PropertiesFile;

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ProviderConfig {
    id: String,
    dir: PathBuf,
    properties: PropertiesFile,
}

impl ProviderConfig {
    pub fn new(dir: impl Into<PathBuf>, id: &str) -> Self {
        let mut config = Self {
            id: id.to_string(),
            dir: dir.into(),
            properties: PropertiesFile::new(),
        };
        if let Err(error) = config.read_properties() {
            log::warn!(
                "Failed to read {}: {error}",
                config.properties_path().display()
            );
        }
        config
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn properties_path(&self) -> PathBuf {
        self.dir.join(format!("{}.properties", self.id))
    }

    /// Directory all generated packs live under.
    pub fn packs_root(&self) -> PathBuf {
        self.dir.join("resourcepacks")
    }

    pub fn properties(&self) -> &PropertiesFile {
        &self.properties
    }

    /// Reload options from disk. Values present on disk win; keys only known
    /// in memory are kept.
    pub fn read_properties(&mut self) -> Result<()> {
        let loaded = PropertiesFile::load(&self.properties_path())?;
        for (key, value) in loaded.iter() {
            self.properties.set(key, value);
        }
        Ok(())
    }

    pub fn write_properties(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.properties
            .save(&self.properties_path(), &format!("{} properties", self.id))
    }

    /// Current value of a boolean option, persisting `default` when the
    /// option is absent. Read and write failures are logged, never fatal.
    pub fn bool_option(&mut self, key: &str, default: bool) -> bool {
        if let Err(error) = self.read_properties() {
            log::warn!(
                "Failed to read {}: {error}",
                self.properties_path().display()
            );
        }
        match self.properties.bool_value(key) {
            Some(value) => value,
            None => {
                self.set_bool_option(key, default);
                default
            }
        }
    }

    /// Set and persist a boolean option. Write failures are logged.
    pub fn set_bool_option(&mut self, key: &str, value: bool) {
        self.properties.set_bool(key, value);
        if let Err(error) = self.write_properties() {
            log::warn!(
                "Failed to write {}: {error}",
                self.properties_path().display()
            );
        }
    }

    /// Delete a generated pack root so it can be rebuilt from scratch.
    pub fn clean_resources(&self, namespace: &str) {
        let root = self.packs_root().join(namespace);
        if !root.exists() {
            return;
        }
        if let Err(error) = fs::remove_dir_all(&root) {
            log::warn!("Failed to clean {}: {error}", root.display());
        }
    }
}
