//! Per-type settings.
//!
//! Settings live on the field, not on the link type: one link type
//! instance serves many fields. The effective settings for a call are the
//! type's declared defaults overlaid by the field's explicit values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LinkType;

/// Settings for one link type on one field.
///
/// Unset fields mean "no opinion" so that overlaying keeps the lower
/// layer's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTypeSettings {
    /// Accept any non-empty value without syntax checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_validation: Option<bool>,

    /// Kind-specific settings.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkTypeSettings {
    pub fn validation_disabled(&self) -> bool {
        self.disable_validation.unwrap_or(false)
    }

    /// Builder for the common case.
    pub fn with_disable_validation(mut self, disable: bool) -> Self {
        self.disable_validation = Some(disable);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// `self` with every value set in `overrides` replaced.
    pub fn overlay(mut self, overrides: &LinkTypeSettings) -> Self {
        if overrides.disable_validation.is_some() {
            self.disable_validation = overrides.disable_validation;
        }
        for (key, value) in &overrides.extra {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }
}

/// Source of effective settings for a link type, typically a field.
pub trait SettingsProvider {
    fn link_type_settings(&self, key: &str, link_type: &dyn LinkType) -> LinkTypeSettings;
}

/// Provider with no field overrides: every type gets its declared defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredDefaults;

impl SettingsProvider for DeclaredDefaults {
    fn link_type_settings(&self, _key: &str, link_type: &dyn LinkType) -> LinkTypeSettings {
        link_type.default_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_replaces_only_set_values() {
        let mut defaults = LinkTypeSettings::default().with_disable_validation(false);
        defaults.extra.insert("sources".into(), json!("*"));
        defaults.extra.insert("custom_query".into(), json!(false));

        let mut field = LinkTypeSettings::default();
        field.extra.insert("sources".into(), json!(["section:news"]));

        let merged = defaults.overlay(&field);
        assert!(!merged.validation_disabled());
        assert_eq!(merged.get("sources"), Some(&json!(["section:news"])));
        assert_eq!(merged.get("custom_query"), Some(&json!(false)));
    }

    #[test]
    fn test_overlay_disable_validation() {
        let defaults = LinkTypeSettings::default().with_disable_validation(false);
        let field = LinkTypeSettings::default().with_disable_validation(true);
        assert!(defaults.overlay(&field).validation_disabled());
    }

    #[test]
    fn test_unset_means_enabled() {
        assert!(!LinkTypeSettings::default().validation_disabled());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let settings: LinkTypeSettings =
            toml::from_str("disable_validation = true\nsources = \"*\"").unwrap();
        assert!(settings.validation_disabled());
        assert_eq!(settings.get("sources"), Some(&json!("*")));
    }
}
