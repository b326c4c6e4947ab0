//! Directory-backed packs.
//!
//! Serves a generated `resourcepacks/<ns>/resources` tree through the
//! [`PackSource`] contract: containment-checked path resolution, namespace
//! discovery with per-category memoization, and synthesized root metadata.

use super::{PackSource, ResourceSupplier};
use crate::assets::PackMeta;
use crate::types::{capitalize, ResourceCategory, ResourceId};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

pub struct DirectoryPack {
    namespace: String,
    base: PathBuf,
    meta: PackMeta,
    fallback_icon: Option<PathBuf>,
    namespace_cache: RefCell<NamespaceCache>,
}

#[derive(Default)]
struct NamespaceCache {
    assets: Option<BTreeSet<String>>,
    data: Option<BTreeSet<String>>,
}

impl NamespaceCache {
    fn slot(&mut self, category: ResourceCategory) -> &mut Option<BTreeSet<String>> {
        match category {
            ResourceCategory::Assets => &mut self.assets,
            ResourceCategory::Data => &mut self.data,
        }
    }
}

impl DirectoryPack {
    /// A pack over `<packs_root>/<namespace>/resources`. `fallback_icon` is
    /// served for `pack.png` when the tree carries none, typically an icon
    /// bundled with the providing application.
    pub fn new(
        namespace: &str,
        packs_root: impl AsRef<Path>,
        meta: PackMeta,
        fallback_icon: Option<PathBuf>,
    ) -> Self {
        let namespace = namespace.to_lowercase();
        let base = packs_root.as_ref().join(&namespace).join("resources");
        let base = normalize(&std::path::absolute(&base).unwrap_or(base));
        Self {
            namespace,
            base,
            meta,
            fallback_icon,
            namespace_cache: RefCell::new(NamespaceCache::default()),
        }
    }

    /// The `resources` directory this pack serves.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn meta(&self) -> &PackMeta {
        &self.meta
    }

    /// Resolve a `/`-separated name against the pack base. Returns the path
    /// only when it still lies inside the base after lexical normalization
    /// and exists on disk, so `../` never escapes the pack.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let resolved = normalize(&self.base.join(name));
        if resolved.starts_with(&self.base) && resolved.exists() {
            Some(resolved)
        } else {
            None
        }
    }

    fn scan_namespaces(&self, category: ResourceCategory) -> BTreeSet<String> {
        let root = self.base.join(category.directory());
        let mut namespaces = BTreeSet::new();
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            // A category the pack has no content for is not an error.
            Err(_) => return namespaces,
        };
        for entry in entries.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            match file_name.to_str() {
                Some(name) if is_valid_namespace_dir(name) => {
                    namespaces.insert(name.to_string());
                }
                _ => log::error!(
                    "Invalid namespace directory {:?} in {}",
                    file_name,
                    root.display()
                ),
            }
        }
        namespaces
    }
}

impl PackSource for DirectoryPack {
    fn id(&self) -> &str {
        &self.namespace
    }

    fn display_name(&self) -> String {
        capitalize(&self.namespace)
    }

    fn open(&self, category: ResourceCategory, id: &ResourceId) -> Option<ResourceSupplier> {
        self.resolve(&format!(
            "{}/{}/{}",
            category.directory(),
            id.namespace(),
            id.path()
        ))
        .map(ResourceSupplier::File)
    }

    fn open_root(&self, segments: &[&str]) -> Option<ResourceSupplier> {
        match segments.join("/").as_str() {
            "pack.mcmeta" => match self.meta.to_json() {
                Ok(json) => Some(ResourceSupplier::Inline(json.into_bytes())),
                Err(error) => {
                    log::error!("Failed to serialize pack.mcmeta: {error}");
                    None
                }
            },
            "pack.png" => {
                let generated = self.base.join("pack.png");
                if generated.is_file() {
                    return Some(ResourceSupplier::File(generated));
                }
                match &self.fallback_icon {
                    Some(path) if path.is_file() => Some(ResourceSupplier::File(path.clone())),
                    // None tells the host to use its default icon.
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn find_resources(
        &self,
        category: ResourceCategory,
        namespace: &str,
        prefix: &str,
        visitor: &mut dyn FnMut(ResourceId, ResourceSupplier),
    ) {
        let namespace_root = self.base.join(category.directory()).join(namespace);
        let start = if prefix.is_empty() {
            namespace_root.clone()
        } else {
            namespace_root.join(prefix)
        };
        if !start.is_dir() {
            return;
        }

        let result = visit_files(&start, &mut |path| {
            let Ok(relative) = path.strip_prefix(&namespace_root) else {
                return;
            };
            let name = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            match ResourceId::new(namespace, &name) {
                Ok(id) => visitor(id, ResourceSupplier::File(path.to_path_buf())),
                Err(error) => {
                    log::error!("Skipping resource {}: {error}", path.display());
                }
            }
        });
        if let Err(error) = result {
            log::error!("Failed to walk {}: {error}", start.display());
        }
    }

    fn namespaces(&self, category: ResourceCategory) -> BTreeSet<String> {
        let mut cache = self.namespace_cache.borrow_mut();
        if let Some(cached) = cache.slot(category) {
            return cached.clone();
        }
        let scanned = self.scan_namespaces(category);
        *cache.slot(category) = Some(scanned.clone());
        scanned
    }

    fn metadata_section(&self, key: &str) -> Option<serde_json::Value> {
        if key != "pack" {
            return None;
        }
        serde_json::to_value(&self.meta.pack).ok()
    }
}

pub(crate) fn visit_files(dir: &Path, visit: &mut dyn FnMut(&Path)) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit_files(&path, visit)?;
        } else {
            visit(&path);
        }
    }
    Ok(())
}

/// Lexical normalization: `.` dropped, `..` pops the previous component. No
/// filesystem access, so symlinks are deliberately not resolved.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            component => normalized.push(component),
        }
    }
    normalized
}

/// Namespace directories must match `[a-z0-9-_]+`.
fn is_valid_namespace_dir(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
}
