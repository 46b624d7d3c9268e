//! Link field configuration from `ctalink.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── field      # [field]
//! │   ├── resources  # [[resources]]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # LinkConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                    | Purpose                                   |
//! |----------------------------|-------------------------------------------|
//! | `[field]`                  | Flags, offered types, per-type settings   |
//! | `[site]`                   | Site used when the owner names none       |
//! | `[[resources]]`            | Resources the default resolver knows      |
//! | `[translations.<domain>]`  | Strings for the default localizer         |

pub mod section;
pub mod types;
mod util;

pub use section::{FieldConfig, ResourceTable, SiteSectionConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::LinkContext;
use crate::host::{LINK_DOMAIN, MapLocalizer, SITE_DOMAIN};
use crate::link_type::{LinkTypeRegistry, SharedRegistry};
use crate::log;

/// Default config file name.
pub const CONFIG_FILE: &str = "ctalink.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing ctalink.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// The link field
    #[serde(default)]
    pub field: FieldConfig,

    /// Site selection
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Static resource table
    #[serde(default)]
    pub resources: ResourceTable,

    /// `domain -> key -> translation`
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl LinkConfig {
    pub const TRANSLATIONS: FieldPath = FieldPath::new("translations");

    /// Read, parse and validate the config at `path`.
    pub fn load(path: &Path, registry: &LinkTypeRegistry) -> Result<Self, ConfigError> {
        let mut config = Self::from_path(path)?;
        config.config_path = path.to_path_buf();
        config.validate(registry)?;

        crate::debug!(
            "config";
            "loaded {} ({} types offered, {} resources)",
            path.display(),
            config.field.allowed_types(registry).len(),
            config.resources.len()
        );
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warn"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate against the link types in `registry`.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, registry: &LinkTypeRegistry) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.field.validate(registry, &mut diag);
        self.site.validate(&mut diag);
        self.resources.validate(&mut diag);

        for domain in self.translations.keys() {
            if domain != LINK_DOMAIN && domain != SITE_DOMAIN {
                diag.warn(
                    Self::TRANSLATIONS,
                    format!("domain `{domain}` is never looked up"),
                );
            }
        }

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Localizer over `[translations]`.
    pub fn localizer(&self) -> MapLocalizer {
        MapLocalizer::new(self.translations.clone())
    }

    /// Resolution context over `registry` with this config's collaborators.
    pub fn context(&self, registry: Arc<SharedRegistry>) -> LinkContext {
        let cx = LinkContext::new(registry)
            .with_localizer(self.localizer())
            .with_resolver(self.resources.resolver());
        match &self.site.current {
            Some(site) => cx.with_current_site(site.clone()),
            None => cx,
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> LinkConfig {
    let (parsed, ignored) = LinkConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
