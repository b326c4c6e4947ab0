//! Registry of generated packs.
//!
//! One object the host owns instead of scattered global state: which
//! namespaces have generated packs per provider, which packs are hidden from
//! pack screens, which have no icon, and which have been turned into live
//! pack sources.

use crate::types::capitalize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// A generated pack known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDescriptor {
    namespace: String,
    root: PathBuf,
}

impl PackDescriptor {
    pub fn new(namespace: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.to_string(),
            root: root.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The pack root, the directory holding `resources/`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Capitalized namespace, as shown on pack screens.
    pub fn display_name(&self) -> String {
        capitalize(&self.namespace)
    }
}

#[derive(Debug, Default)]
pub struct PackRegistry {
    packs: BTreeMap<String, Vec<PackDescriptor>>,
    hidden: BTreeSet<String>,
    no_icon: BTreeSet<String>,
    built: BTreeSet<String>,
}

impl PackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated pack under a provider id. Re-registering a
    /// namespace replaces the previous descriptor.
    pub fn register(&mut self, provider_id: &str, descriptor: PackDescriptor) {
        let packs = self.packs.entry(provider_id.to_string()).or_default();
        packs.retain(|pack| !pack.namespace.eq_ignore_ascii_case(&descriptor.namespace));
        packs.push(descriptor);
    }

    /// All packs registered by a provider, in registration order.
    pub fn packs(&self, provider_id: &str) -> &[PackDescriptor] {
        self.packs
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up one of a provider's packs by namespace, case-insensitively.
    pub fn find(&self, provider_id: &str, namespace: &str) -> Option<&PackDescriptor> {
        self.packs(provider_id)
            .iter()
            .find(|pack| pack.namespace.eq_ignore_ascii_case(namespace))
    }

    /// Hide a pack from user-facing pack screens. Names are stored in
    /// display form.
    pub fn hide(&mut self, namespace: &str) {
        self.hidden.insert(capitalize(namespace));
    }

    pub fn is_hidden(&self, namespace: &str) -> bool {
        self.hidden.contains(&capitalize(namespace))
    }

    /// Display names of hidden packs.
    pub fn hidden(&self) -> &BTreeSet<String> {
        &self.hidden
    }

    /// Record that a pack was created without an icon URL.
    pub fn note_no_icon(&mut self, namespace: &str) {
        self.no_icon.insert(namespace.to_string());
    }

    pub fn has_icon(&self, namespace: &str) -> bool {
        !self.no_icon.contains(namespace)
    }

    /// Namespaces created without an icon.
    pub fn no_icon(&self) -> &BTreeSet<String> {
        &self.no_icon
    }

    /// Record that a pack has been turned into a live pack source.
    pub fn note_built(&mut self, id: &str) {
        self.built.insert(id.to_string());
    }

    pub fn is_built(&self, id: &str) -> bool {
        self.built.contains(id)
    }

    pub fn built(&self) -> &BTreeSet<String> {
        &self.built
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let mut registry = PackRegistry::new();
        registry.register("provider", PackDescriptor::new("mymod", "/packs/mymod"));

        assert!(registry.find("provider", "MyMod").is_some());
        assert!(registry.find("provider", "othermod").is_none());
        assert!(registry.find("unknown", "mymod").is_none());
    }

    #[test]
    fn test_register_replaces_namespace() {
        let mut registry = PackRegistry::new();
        registry.register("provider", PackDescriptor::new("mymod", "/old"));
        registry.register("provider", PackDescriptor::new("mymod", "/new"));

        assert_eq!(registry.packs("provider").len(), 1);
        assert_eq!(
            registry.find("provider", "mymod").unwrap().root(),
            Path::new("/new")
        );
    }

    #[test]
    fn test_providers_are_separate() {
        let mut registry = PackRegistry::new();
        registry.register("alpha", PackDescriptor::new("mymod", "/a"));
        registry.register("beta", PackDescriptor::new("mymod", "/b"));

        assert_eq!(registry.packs("alpha").len(), 1);
        assert_eq!(registry.find("beta", "mymod").unwrap().root(), Path::new("/b"));
    }

    #[test]
    fn test_hidden_names_are_display_form() {
        let mut registry = PackRegistry::new();
        registry.hide("mymod");

        assert!(registry.is_hidden("mymod"));
        assert!(registry.hidden().contains("Mymod"));
    }

    #[test]
    fn test_icon_and_built_bookkeeping() {
        let mut registry = PackRegistry::new();
        registry.register("provider", PackDescriptor::new("mymod", "/packs/mymod"));

        assert!(registry.has_icon("mymod"));
        registry.note_no_icon("mymod");
        assert!(!registry.has_icon("mymod"));
        assert!(registry.no_icon().contains("mymod"));

        assert!(!registry.is_built("mymod"));
        registry.note_built("mymod");
        assert!(registry.is_built("mymod"));
    }
}
