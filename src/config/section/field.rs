//! `[field]` section configuration.
//!
//! Describes one link field: its handle, the link types it offers and
//! per-type settings overrides.
//!
//! # Example
//!
//! ```toml
//! [field]
//! handle = "cta"                  # Form name prefix
//! default_text = "Read more"      # Fallback text (translated in the `site` domain)
//! allow_custom_text = true
//! allow_target = true
//! allow_class = false
//! types = ["url", "entry", "email"]   # Empty = every registered type
//!
//! [field.settings.email]
//! disable_validation = true
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{Link, LinkContext, RawValue};
use crate::link_type::{
    InputDescriptor, LinkType, LinkTypeRegistry, LinkTypeSettings, SettingsProvider,
};

/// One link field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field handle, used for input ids and names.
    pub handle: String,

    /// Fallback link text key.
    pub default_text: String,

    pub allow_custom_text: bool,
    pub allow_target: bool,
    pub allow_class: bool,

    /// Offered link type keys, in display order.
    pub types: Vec<String>,

    /// Per-type overrides of the declared defaults.
    pub settings: BTreeMap<String, LinkTypeSettings>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            handle: "link".to_owned(),
            default_text: String::new(),
            allow_custom_text: false,
            allow_target: false,
            allow_class: false,
            types: Vec::new(),
            settings: BTreeMap::new(),
        }
    }
}

impl FieldConfig {
    pub const HANDLE: FieldPath = FieldPath::new("field.handle");
    pub const TYPES: FieldPath = FieldPath::new("field.types");
    pub const SETTINGS: FieldPath = FieldPath::new("field.settings");

    /// Link type keys this field offers.
    ///
    /// Every registered type when `types` is empty; otherwise the
    /// configured keys that are registered, in configured order.
    pub fn allowed_types(&self, registry: &LinkTypeRegistry) -> Vec<String> {
        if self.types.is_empty() {
            return registry.keys().map(str::to_owned).collect();
        }
        self.types
            .iter()
            .filter(|key| registry.contains(key))
            .cloned()
            .collect()
    }

    /// A link of `link_type` carrying this field's flags and default text.
    pub fn link(&self, link_type: impl Into<String>, value: impl Into<RawValue>) -> Link {
        let mut link = Link::new(link_type, value).with_default_text(self.default_text.clone());
        link.allow_custom_text = self.allow_custom_text;
        link.allow_target = self.allow_target;
        link.allow_class = self.allow_class;
        link
    }

    /// One input descriptor per allowed type, with `link` as the current value.
    pub fn input_descriptors(&self, link: &Link, cx: &LinkContext) -> Vec<InputDescriptor> {
        let registry = cx.registry().snapshot();
        self.allowed_types(&registry)
            .iter()
            .filter_map(|key| {
                let link_type = registry.get(key)?;
                let settings = self.link_type_settings(key, link_type.as_ref());
                Some(link_type.input_descriptor(key, &self.handle, &settings, link, cx))
            })
            .collect()
    }

    pub fn validate(&self, registry: &LinkTypeRegistry, diag: &mut ConfigDiagnostics) {
        if self.handle.trim().is_empty() {
            diag.error_with_hint(
                Self::HANDLE,
                "handle must not be empty",
                "set `handle = \"link\"`",
            );
        }

        for key in &self.types {
            if !registry.contains(key) {
                diag.error_with_hint(
                    Self::TYPES,
                    format!("unknown link type `{key}`"),
                    known_types_hint(registry),
                );
            }
        }

        for key in self.settings.keys() {
            if !registry.contains(key) {
                diag.error_with_hint(
                    Self::SETTINGS,
                    format!("settings for unknown link type `{key}`"),
                    known_types_hint(registry),
                );
            } else if !self.types.is_empty() && !self.types.contains(key) {
                diag.warn(
                    Self::SETTINGS,
                    format!("settings for `{key}` have no effect, the type is not offered"),
                );
            }
        }
    }
}

impl SettingsProvider for FieldConfig {
    fn link_type_settings(&self, key: &str, link_type: &dyn LinkType) -> LinkTypeSettings {
        let defaults = link_type.default_settings();
        match self.settings.get(key) {
            Some(overrides) => defaults.overlay(overrides),
            None => defaults,
        }
    }
}

fn known_types_hint(registry: &LinkTypeRegistry) -> String {
    let keys: Vec<&str> = registry.keys().collect();
    format!("registered types: {}", keys.join(", "))
}
