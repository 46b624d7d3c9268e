//! Link types: the per-kind strategies behind a [`Link`](crate::Link).
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `registry` | Keyed, ordered collection + copy-on-write handle |
//! | `settings` | Per-field, per-type settings and their merging   |
//! | `input`    | Free text kinds: url, email, tel, custom         |
//! | `element`  | Resource kinds: entry, category, asset, user     |
//! | `defaults` | The built-in registry                            |
//!
//! A link type is shared by every field that uses it, so it holds only
//! immutable configuration. Field settings are passed into each call.

mod defaults;
mod descriptor;
mod element;
mod input;
mod registry;
mod settings;


use std::fmt;

use thiserror::Error;

use crate::core::{Link, LinkContext, RawValue};
use crate::host::{LINK_DOMAIN, ResourceHandle};

pub use defaults::{URL_TYPE, builtin_link_types, default_registry};
pub use descriptor::InputDescriptor;
pub use element::ElementLinkType;
pub use input::{InputKind, InputLinkType};
pub use registry::{LinkTypeRegistry, RegistryError, SharedRegistry};
pub use settings::{DeclaredDefaults, LinkTypeSettings, SettingsProvider};

/// Display group used when a link type names none.
pub const DEFAULT_GROUP: &str = "Common";

/// A rejected link value: a message plus its parameters.
///
/// `message` is already translated; `key` is the untranslated source
/// string for callers that localize on their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub key: String,
    pub message: String,
    pub params: Vec<(String, String)>,
}

impl ValidationError {
    /// Build an error, translating `key` in the link domain.
    pub fn new(cx: &LinkContext, key: &str) -> Self {
        Self {
            key: key.to_owned(),
            message: cx.translate(LINK_DOMAIN, key, &[]),
            params: Vec::new(),
        }
    }
}

/// Behavior of one link kind.
pub trait LinkType: Send + Sync + fmt::Debug {
    /// Untranslated display name.
    fn name(&self) -> &str;

    /// Untranslated display group.
    fn group(&self) -> &str {
        DEFAULT_GROUP
    }

    fn display_name(&self, cx: &LinkContext) -> String {
        cx.translate(LINK_DOMAIN, self.name(), &[])
    }

    fn display_group(&self, cx: &LinkContext) -> String {
        cx.translate(LINK_DOMAIN, self.group(), &[])
    }

    /// Settings this kind assumes when a field says nothing.
    fn default_settings(&self) -> LinkTypeSettings {
        LinkTypeSettings::default()
    }

    /// Type-specific text, `None` to defer to the link's default text.
    fn text(&self, link: &Link, cx: &LinkContext) -> Option<String>;

    /// Resolved URL, `None` exactly when [`is_empty`](Self::is_empty) is true.
    fn url(&self, link: &Link, cx: &LinkContext) -> Option<String>;

    /// Referenced resource. Only resource kinds return one.
    fn element(&self, _link: &Link, _cx: &LinkContext) -> Option<ResourceHandle> {
        None
    }

    fn has_element(&self, link: &Link, cx: &LinkContext) -> bool {
        self.element(link, cx).is_some()
    }

    fn is_empty(&self, link: &Link, cx: &LinkContext) -> bool;

    /// Check the link's value. `None` means valid.
    ///
    /// Empty links and links whose settings disable validation are valid.
    fn validate_value(
        &self,
        settings: &LinkTypeSettings,
        link: &Link,
        cx: &LinkContext,
    ) -> Option<ValidationError>;

    /// Coerce a submitted raw value into the shape this kind stores.
    fn normalize_value(&self, raw: RawValue) -> RawValue {
        raw
    }

    /// Describe the form input for this kind on field `handle`.
    fn input_descriptor(
        &self,
        key: &str,
        handle: &str,
        settings: &LinkTypeSettings,
        link: &Link,
        cx: &LinkContext,
    ) -> InputDescriptor;
}
