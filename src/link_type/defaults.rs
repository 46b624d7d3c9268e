//! Built-in link types.

use std::sync::Arc;

use super::{ElementLinkType, InputLinkType, LinkType, LinkTypeRegistry};

/// Key of the plain URL type. Links of this type with a target get
/// `rel="noopener"`.
pub const URL_TYPE: &str = "url";

/// Built-in link types in display order.
pub fn builtin_link_types() -> Vec<(&'static str, Arc<dyn LinkType>)> {
    vec![
        builtin(URL_TYPE, InputLinkType::url("URL")),
        builtin("custom", InputLinkType::new("Custom")),
        builtin("email", InputLinkType::email("Mail")),
        builtin("tel", InputLinkType::tel("Telephone")),
        builtin("entry", ElementLinkType::new("Entry", "entry")),
        builtin("category", ElementLinkType::new("Category", "category")),
        builtin("asset", ElementLinkType::new("Asset", "asset")),
        builtin("user", ElementLinkType::new("User", "user")),
    ]
}

fn builtin(
    key: &'static str,
    link_type: impl LinkType + 'static,
) -> (&'static str, Arc<dyn LinkType>) {
    (key, Arc::new(link_type))
}

/// Registry holding [`builtin_link_types`].
pub fn default_registry() -> LinkTypeRegistry {
    let mut registry = LinkTypeRegistry::new();
    for (key, link_type) in builtin_link_types() {
        if let Err(err) = registry.register_arc(key, link_type) {
            crate::debug!("registry"; "skipping built-in: {}", err);
        }
    }
    registry
}
