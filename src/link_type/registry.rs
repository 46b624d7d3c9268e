//! Link type registry.
//!
//! [`LinkTypeRegistry`] is a plain keyed collection that remembers
//! registration order. [`SharedRegistry`] publishes one immutable registry
//! at a time through `arc-swap`: readers take lock-free snapshots, and
//! registration clones, inserts and swaps under a single writer lock.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::LinkType;

/// Registration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("link type `{0}` is already registered")]
    Duplicate(String),

    #[error("link type key must not be empty")]
    EmptyKey,
}

// ============================================================================
// LinkTypeRegistry
// ============================================================================

/// Link types keyed by name, in registration order.
#[derive(Clone, Default)]
pub struct LinkTypeRegistry {
    order: Vec<String>,
    by_key: FxHashMap<String, Arc<dyn LinkType>>,
}

impl LinkTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        key: impl Into<String>,
        link_type: impl LinkType + 'static,
    ) -> Result<(), RegistryError> {
        self.register_arc(key, Arc::new(link_type))
    }

    /// Register a shared link type. Duplicate keys are rejected.
    pub fn register_arc(
        &mut self,
        key: impl Into<String>,
        link_type: Arc<dyn LinkType>,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if self.by_key.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }
        self.order.push(key.clone());
        self.by_key.insert(key, link_type);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn LinkType>> {
        self.by_key.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(key, link type)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn LinkType>)> {
        self.order
            .iter()
            .filter_map(|key| self.by_key.get(key).map(|lt| (key.as_str(), lt)))
    }

    /// Keys grouped by untranslated display group.
    ///
    /// Groups appear in the order of their first member; members keep
    /// registration order.
    pub fn groups(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for (key, link_type) in self.iter() {
            let group = link_type.group();
            match groups.iter_mut().find(|(name, _)| *name == group) {
                Some((_, keys)) => keys.push(key),
                None => groups.push((group, vec![key])),
            }
        }
        groups
    }
}

impl fmt::Debug for LinkTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.order).finish()
    }
}

// ============================================================================
// SharedRegistry
// ============================================================================

/// Copy-on-write handle to the current registry.
pub struct SharedRegistry {
    current: ArcSwap<LinkTypeRegistry>,
    writer: Mutex<()>,
}

impl SharedRegistry {
    pub fn new(registry: LinkTypeRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            writer: Mutex::new(()),
        }
    }

    /// The registry as of now. Later registrations do not affect it.
    #[inline]
    pub fn snapshot(&self) -> Arc<LinkTypeRegistry> {
        self.current.load_full()
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn LinkType>> {
        self.current.load().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.current.load().contains(key)
    }

    /// Register a link type and publish the new registry.
    pub fn register(
        &self,
        key: impl Into<String>,
        link_type: impl LinkType + 'static,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        let _guard = self.writer.lock();

        let mut next = LinkTypeRegistry::clone(&self.current.load());
        next.register(key.clone(), link_type)?;
        self.current.store(Arc::new(next));

        crate::debug!("registry"; "registered link type `{}`", key);
        Ok(())
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(LinkTypeRegistry::default())
    }
}

impl fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry")
            .field(&*self.current.load())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_type::{ElementLinkType, InputLinkType};

    #[test]
    fn test_register_and_lookup() {
        let mut registry = LinkTypeRegistry::new();
        registry.register("url", InputLinkType::url("URL")).unwrap();
        registry.register("email", InputLinkType::email("Mail")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("url"));
        assert_eq!(registry.get("email").unwrap().name(), "Mail");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_and_empty_keys_rejected() {
        let mut registry = LinkTypeRegistry::new();
        registry.register("url", InputLinkType::url("URL")).unwrap();

        assert_eq!(
            registry.register("url", InputLinkType::url("Other")),
            Err(RegistryError::Duplicate("url".into()))
        );
        assert_eq!(
            registry.register(" ", InputLinkType::url("Blank")),
            Err(RegistryError::EmptyKey)
        );
        assert_eq!(registry.get("url").unwrap().name(), "URL");
    }

    #[test]
    fn test_keys_keep_registration_order() {
        let mut registry = LinkTypeRegistry::new();
        for key in ["tel", "url", "email"] {
            registry.register(key, InputLinkType::new(key)).unwrap();
        }
        assert_eq!(registry.keys().collect::<Vec<_>>(), ["tel", "url", "email"]);
    }

    #[test]
    fn test_groups() {
        let mut registry = LinkTypeRegistry::new();
        registry.register("url", InputLinkType::url("URL")).unwrap();
        registry.register("entry", ElementLinkType::new("Entry", "entry")).unwrap();
        registry.register("email", InputLinkType::email("Mail")).unwrap();

        let groups = registry.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], ("Common", vec!["url", "email"]));
        assert_eq!(groups[1], ("Content", vec!["entry"]));
    }

    #[test]
    fn test_shared_registry_copy_on_write() {
        let shared = SharedRegistry::default();
        let before = shared.snapshot();

        shared.register("url", InputLinkType::url("URL")).unwrap();

        assert!(before.is_empty());
        assert!(shared.contains("url"));
        assert_eq!(shared.snapshot().len(), 1);
        assert!(matches!(
            shared.register("url", InputLinkType::url("URL")),
            Err(RegistryError::Duplicate(_))
        ));
        assert_eq!(shared.snapshot().len(), 1);
    }

    #[test]
    fn test_shared_registry_concurrent_registration() {
        let shared = Arc::new(SharedRegistry::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    shared
                        .register(format!("kind-{i}"), InputLinkType::new("Custom"))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.snapshot().len(), 8);
    }
}
