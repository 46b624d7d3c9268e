//! `[[resources]]` table configuration.
//!
//! A static content table backing the default resource resolver.
//!
//! # Example
//!
//! ```toml
//! [[resources]]
//! kind = "entry"
//! id = "42"
//! title = "About us"
//! url = "https://example.com/about"
//! site = "en"          # Optional: only resolves for this site
//! enabled = true       # Optional: disabled rows resolve as missing
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::host::{ResourceRecord, StaticResolver};

/// Rows of the `[[resources]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable(pub Vec<ResourceRecord>);

impl ResourceTable {
    pub const PATH: FieldPath = FieldPath::new("resources");

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.0.iter()
    }

    /// Resolver over these rows.
    pub fn resolver(&self) -> StaticResolver {
        self.0.iter().cloned().collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for record in &self.0 {
            let handle = &record.handle;
            if handle.kind.trim().is_empty() || handle.id.is_blank() {
                diag.error(
                    Self::PATH,
                    format!("resource `{}` needs both `kind` and `id`", handle.title),
                );
                continue;
            }
            let key = (
                handle.kind.as_str(),
                handle.id.as_str(),
                handle.site.as_deref(),
            );
            if !seen.insert(key) {
                diag.error_with_hint(
                    Self::PATH,
                    format!(
                        "duplicate resource {} `{}`{}",
                        handle.kind,
                        handle.id,
                        handle
                            .site
                            .as_deref()
                            .map(|site| format!(" on site `{site}`"))
                            .unwrap_or_default()
                    ),
                    "each (kind, id, site) may appear once",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::host::{ResourceId, ResourceResolver};

    const TABLE: &str = r#"
[[resources]]
kind = "entry"
id = "1"
title = "Home"
url = "https://example.com/"

[[resources]]
kind = "entry"
id = "1"
title = "Accueil"
url = "https://example.com/fr/"
site = "fr"

[[resources]]
kind = "asset"
id = "7"
title = "Brochure"
enabled = false
"#;

    #[test]
    fn test_parse_resources() {
        let config = test_parse_config(TABLE);
        assert_eq!(config.resources.len(), 3);

        let asset = &config.resources.0[2];
        assert!(!asset.enabled);
        assert_eq!(asset.handle.url, None);
        assert!(config.resources.0[0].enabled);
    }

    #[test]
    fn test_resolver_honours_site_and_enabled() {
        let config = test_parse_config(TABLE);
        let resolver = config.resources.resolver();
        let one = ResourceId::new("1");

        let fr = resolver.resolve("entry", &one, Some("fr")).unwrap();
        assert_eq!(fr.title, "Accueil");
        let en = resolver.resolve("entry", &one, Some("en")).unwrap();
        assert_eq!(en.title, "Home");
        assert!(resolver.resolve("asset", &ResourceId::new("7"), None).is_none());
    }

    #[test]
    fn test_duplicates_reported() {
        let config = test_parse_config(&format!(
            "{TABLE}\n[[resources]]\nkind = \"entry\"\nid = \"1\"\ntitle = \"Again\"\n"
        ));
        let mut diag = ConfigDiagnostics::new();
        config.resources.validate(&mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].message, "duplicate resource entry `1`");
    }

    #[test]
    fn test_blank_id_reported() {
        let config =
            test_parse_config("[[resources]]\nkind = \"entry\"\nid = \" \"\ntitle = \"Nameless\"\n");
        let mut diag = ConfigDiagnostics::new();
        config.resources.validate(&mut diag);
        assert_eq!(
            diag.errors()[0].message,
            "resource `Nameless` needs both `kind` and `id`"
        );
    }
}
