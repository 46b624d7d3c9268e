//! Resource link types.
//!
//! The stored value is a [`ResourceId`]; title and URL come from the
//! host's resource resolver at resolution time. A reference that no
//! longer resolves (deleted, disabled, no public URL) makes the link empty.

use serde_json::Value;

use super::{InputDescriptor, LinkType, LinkTypeSettings, ValidationError};
use crate::core::{Link, LinkContext, RawValue};
use crate::host::{LINK_DOMAIN, ResourceHandle, ResourceId};

/// Display group of the built-in resource kinds.
pub const CONTENT_GROUP: &str = "Content";

/// Link to a resource of one kind (`entry`, `category`, `asset`, ...).
#[derive(Debug, Clone)]
pub struct ElementLinkType {
    name: String,
    group: String,
    kind: String,
    placeholder: Option<String>,
}

impl ElementLinkType {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: CONTENT_GROUP.to_owned(),
            kind: kind.into(),
            placeholder: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Placeholder key, translated in the link domain.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Resource kind passed to the resolver.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl LinkType for ElementLinkType {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn text(&self, link: &Link, cx: &LinkContext) -> Option<String> {
        self.element(link, cx)
            .map(|handle| handle.title)
            .filter(|title| !title.trim().is_empty())
    }

    fn url(&self, link: &Link, cx: &LinkContext) -> Option<String> {
        self.element(link, cx)?
            .url
            .filter(|url| !url.trim().is_empty())
    }

    fn element(&self, link: &Link, cx: &LinkContext) -> Option<ResourceHandle> {
        let id = link.value.as_reference()?;
        let site = link.owner_site(cx);
        let handle = cx.resolve(&self.kind, id, site.as_deref());
        if handle.is_none() {
            crate::debug!("resolve"; "{} `{}` not found", self.kind, id);
        }
        handle
    }

    fn is_empty(&self, link: &Link, cx: &LinkContext) -> bool {
        self.url(link, cx).is_none()
    }

    fn validate_value(
        &self,
        _settings: &LinkTypeSettings,
        _link: &Link,
        _cx: &LinkContext,
    ) -> Option<ValidationError> {
        // A reference has no syntax to check.
        None
    }

    fn normalize_value(&self, raw: RawValue) -> RawValue {
        let id = match raw {
            RawValue::Reference { id } => Some(id),
            RawValue::Text(text) => id_from_str(&text),
            RawValue::Other(value) => id_from_json(&value),
            RawValue::Null => None,
        };
        id.map_or(RawValue::Null, RawValue::from)
    }

    fn input_descriptor(
        &self,
        key: &str,
        handle: &str,
        _settings: &LinkTypeSettings,
        link: &Link,
        cx: &LinkContext,
    ) -> InputDescriptor {
        let mut desc = InputDescriptor::for_field(key, handle, link, || {
            link.value
                .as_reference()
                .map(ResourceId::to_string)
                .unwrap_or_default()
        });
        desc.placeholder = self
            .placeholder
            .as_deref()
            .map(|p| cx.translate(LINK_DOMAIN, p, &[]));
        desc
    }
}

fn id_from_str(text: &str) -> Option<ResourceId> {
    let text = text.trim();
    (!text.is_empty()).then(|| ResourceId::new(text))
}

/// Numbers, strings, or the first entry of a selection list.
fn id_from_json(value: &Value) -> Option<ResourceId> {
    match value {
        Value::Number(n) => Some(ResourceId::new(n.to_string())),
        Value::String(s) => id_from_str(s),
        Value::Array(items) => items.first().and_then(id_from_json),
        Value::Object(map) => map.get("id").and_then(id_from_json),
        _ => None,
    }
}
