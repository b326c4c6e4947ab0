//! Pack sources.
//!
//! The read-side contract for serving a pack's files to a resource-loading
//! pipeline, plus the byte suppliers lookups hand back.

pub mod directory;

pub use directory::DirectoryPack;

use crate::types::{ResourceCategory, ResourceId};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Lazily-openable bytes for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSupplier {
    File(PathBuf),
    Inline(Vec<u8>),
}

impl ResourceSupplier {
    /// Open the resource for streaming.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            ResourceSupplier::File(path) => Ok(Box::new(File::open(path)?)),
            ResourceSupplier::Inline(bytes) => Ok(Box::new(io::Cursor::new(bytes.clone()))),
        }
    }

    /// Read the resource whole.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            ResourceSupplier::File(path) => std::fs::read(path),
            ResourceSupplier::Inline(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Read-side contract of a resource pack: enough for a loading pipeline to
/// enumerate namespaces, look up files and read pack metadata.
pub trait PackSource {
    /// Stable pack id, typically the namespace.
    fn id(&self) -> &str;

    /// Name shown on pack screens.
    fn display_name(&self) -> String;

    /// Open one namespaced resource, `None` when absent.
    fn open(&self, category: ResourceCategory, id: &ResourceId) -> Option<ResourceSupplier>;

    /// Open a file at the pack root, such as `pack.mcmeta` or `pack.png`.
    fn open_root(&self, segments: &[&str]) -> Option<ResourceSupplier>;

    /// Visit every resource under `prefix` for one namespace.
    fn find_resources(
        &self,
        category: ResourceCategory,
        namespace: &str,
        prefix: &str,
        visitor: &mut dyn FnMut(ResourceId, ResourceSupplier),
    );

    /// Namespaces with content for a category.
    fn namespaces(&self, category: ResourceCategory) -> BTreeSet<String>;

    /// One section of the pack metadata, `None` when the pack does not carry
    /// it.
    fn metadata_section(&self, key: &str) -> Option<serde_json::Value>;
}
