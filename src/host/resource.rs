//! Resource lookup for resource-linking link types.
//!
//! A link to an entry, category or asset stores only an opaque
//! [`ResourceId`]. Turning it into something with a title and URL is the
//! host content system's job, reached through [`ResourceResolver`].

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque reference into the host content system.
///
/// Host content systems often store integer ids, so both `"12"` and `12`
/// deserialize to the same id. Ids always serialize as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(id) => Self(id),
            Repr::Unsigned(id) => Self(id.to_string()),
            Repr::Signed(id) => Self(id.to_string()),
        })
    }
}

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank ids never resolve.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A resolved resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHandle {
    /// Resource kind (`entry`, `category`, `asset`, ...).
    pub kind: String,
    pub id: ResourceId,
    /// Human readable title, used as link text.
    pub title: String,
    /// Public URL, if the resource has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Site the resource belongs to; `None` means every site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// Looks up a resource by kind and id.
///
/// Returns `None` when the resource is missing, deleted or disabled.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, kind: &str, id: &ResourceId, site: Option<&str>) -> Option<ResourceHandle>;
}

/// Resolver that knows no resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn resolve(&self, _: &str, _: &ResourceId, _: Option<&str>) -> Option<ResourceHandle> {
        None
    }
}

/// One row of a static resource table (see `[[resources]]` in the config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(flatten)]
    pub handle: ResourceHandle,
    /// Disabled resources resolve like deleted ones.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl From<ResourceHandle> for ResourceRecord {
    fn from(handle: ResourceHandle) -> Self {
        Self {
            handle,
            enabled: true,
        }
    }
}

/// In-memory resolver keyed by `(kind, id)`.
///
/// A record scoped to the requested site is preferred over an unscoped one.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    by_key: FxHashMap<(String, ResourceId), Vec<ResourceRecord>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Later records with the same kind, id and site shadow earlier ones.
    pub fn insert(&mut self, record: ResourceRecord) {
        let key = (record.handle.kind.clone(), record.handle.id.clone());
        let rows = self.by_key.entry(key).or_default();
        rows.retain(|row| row.handle.site != record.handle.site);
        rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.by_key.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl FromIterator<ResourceRecord> for StaticResolver {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for record in iter {
            resolver.insert(record);
        }
        resolver
    }
}

impl ResourceResolver for StaticResolver {
    fn resolve(&self, kind: &str, id: &ResourceId, site: Option<&str>) -> Option<ResourceHandle> {
        if id.is_blank() {
            return None;
        }
        let rows = self.by_key.get(&(kind.to_owned(), id.clone()))?;

        let scoped = site.and_then(|site| {
            rows.iter()
                .find(|row| row.handle.site.as_deref() == Some(site))
        });
        let record = scoped.or_else(|| rows.iter().find(|row| row.handle.site.is_none()))?;

        record.enabled.then(|| record.handle.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, id: &str, title: &str, site: Option<&str>) -> ResourceRecord {
        ResourceHandle {
            kind: kind.into(),
            id: id.into(),
            title: title.into(),
            url: Some(format!("/{title}")),
            site: site.map(Into::into),
        }
        .into()
    }

    #[test]
    fn test_id_accepts_numbers() {
        let id: ResourceId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ResourceId::new("12"));
        let id: ResourceId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(id, ResourceId::new("12"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }

    #[test]
    fn test_resolve_by_kind_and_id() {
        let resolver: StaticResolver = [
            record("entry", "1", "about", None),
            record("category", "1", "news", None),
        ]
        .into_iter()
        .collect();

        let entry = resolver.resolve("entry", &"1".into(), None).unwrap();
        assert_eq!(entry.title, "about");
        let category = resolver.resolve("category", &"1".into(), None).unwrap();
        assert_eq!(category.title, "news");
        assert!(resolver.resolve("asset", &"1".into(), None).is_none());
        assert!(resolver.resolve("entry", &"2".into(), None).is_none());
    }

    #[test]
    fn test_site_scoped_record_preferred() {
        let resolver: StaticResolver = [
            record("entry", "7", "global", None),
            record("entry", "7", "dutch", Some("nl")),
        ]
        .into_iter()
        .collect();

        let id = ResourceId::from(7);
        assert_eq!(resolver.resolve("entry", &id, Some("nl")).unwrap().title, "dutch");
        assert_eq!(resolver.resolve("entry", &id, Some("fr")).unwrap().title, "global");
        assert_eq!(resolver.resolve("entry", &id, None).unwrap().title, "global");
    }

    #[test]
    fn test_disabled_and_blank_do_not_resolve() {
        let mut disabled = record("entry", "3", "hidden", None);
        disabled.enabled = false;
        let resolver: StaticResolver = [disabled].into_iter().collect();

        assert!(resolver.resolve("entry", &"3".into(), None).is_none());
        assert!(resolver.resolve("entry", &" ".into(), None).is_none());
    }

    #[test]
    fn test_insert_shadows_same_site() {
        let mut resolver = StaticResolver::new();
        resolver.insert(record("entry", "1", "old", None));
        resolver.insert(record("entry", "1", "new", None));
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("entry", &"1".into(), None).unwrap().title, "new");
    }
}
