//! The link value object.
//!
//! A [`Link`] is plain data: a type key, a raw value and presentation
//! flags. Every type-specific question is delegated to the [`LinkType`]
//! registered under the key; the link itself only layers the
//! cross-cutting overrides (custom text, target, class) on top.
//!
//! # Resolution
//!
//! | Accessor   | Unknown type | Known type                                  |
//! |------------|--------------|---------------------------------------------|
//! | `text`     | default text | custom text > type text > default text      |
//! | `url`      | `None`       | type url                                    |
//! | `is_empty` | `true`       | type emptiness                              |
//! | `render`   | `None`       | anchor tag, `None` when url is `None`       |
//! | `validate` | valid        | type validation with merged settings        |

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::render::{LinkContent, Markup};
use super::{LinkContext, OwnerRef, RawValue};
use crate::host::{Attributes, LINK_DOMAIN, ResourceHandle, SITE_DOMAIN};
use crate::link_type::{LinkType, SettingsProvider, URL_TYPE, ValidationError};

/// A link field value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Registered link type key.
    #[serde(rename = "type")]
    pub link_type: String,

    /// Payload, interpreted by the link type.
    pub value: RawValue,

    pub allow_custom_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,

    pub allow_target: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub allow_class: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Fallback text key, translated in the `site` domain.
    pub default_text: String,

    #[serde(skip)]
    owner: Option<OwnerRef>,
}

impl Link {
    pub fn new(link_type: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            link_type: link_type.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Allow custom text and set it.
    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        self.allow_custom_text = true;
        self.custom_text = Some(text.into());
        self
    }

    /// Allow a target override and set it.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.allow_target = true;
        self.target = Some(target.into());
        self
    }

    /// Allow a class override and set it.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.allow_class = true;
        self.class = Some(class.into());
        self
    }

    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    pub fn with_owner(mut self, owner: OwnerRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn set_owner(&mut self, owner: Option<OwnerRef>) {
        self.owner = owner;
    }

    pub const fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    /// Site of the owner, falling back to the context's current site.
    pub fn owner_site(&self, cx: &LinkContext) -> Option<String> {
        self.owner
            .as_ref()
            .and_then(OwnerRef::site)
            .or_else(|| cx.current_site().map(str::to_owned))
    }

    /// The link type registered under this link's key.
    pub fn resolve_type(&self, cx: &LinkContext) -> Option<Arc<dyn LinkType>> {
        cx.link_type(&self.link_type)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Display text: custom text, then the type's text, then the
    /// translated default text.
    pub fn text(&self, cx: &LinkContext) -> String {
        self.text_with(self.resolve_type(cx).as_deref(), cx)
    }

    fn text_with(&self, link_type: Option<&dyn LinkType>, cx: &LinkContext) -> String {
        if self.allow_custom_text
            && let Some(text) = non_blank(self.custom_text.as_deref())
        {
            return text.to_owned();
        }

        if let Some(text) = link_type.and_then(|lt| lt.text(self, cx)) {
            return text;
        }

        cx.translate(SITE_DOMAIN, &self.default_text, &[])
    }

    pub fn url(&self, cx: &LinkContext) -> Option<String> {
        self.resolve_type(cx)?.url(self, cx)
    }

    /// URL or empty string.
    pub fn to_url_string(&self, cx: &LinkContext) -> String {
        self.url(cx).unwrap_or_default()
    }

    /// Target override, when allowed and set.
    pub fn target(&self) -> Option<&str> {
        if self.allow_target {
            non_blank(self.target.as_deref())
        } else {
            None
        }
    }

    /// Class override, when allowed and set.
    pub fn class(&self) -> Option<&str> {
        if self.allow_class {
            non_blank(self.class.as_deref())
        } else {
            None
        }
    }

    pub fn element(&self, cx: &LinkContext) -> Option<ResourceHandle> {
        self.resolve_type(cx)?.element(self, cx)
    }

    pub fn has_element(&self, cx: &LinkContext) -> bool {
        self.resolve_type(cx)
            .is_some_and(|lt| lt.has_element(self, cx))
    }

    pub fn is_empty(&self, cx: &LinkContext) -> bool {
        self.resolve_type(cx).is_none_or(|lt| lt.is_empty(self, cx))
    }

    /// Copy of this link with its value coerced into the shape its type expects.
    ///
    /// Links of unknown type are returned unchanged.
    pub fn normalized(&self, cx: &LinkContext) -> Self {
        let mut link = self.clone();
        if let Some(link_type) = self.resolve_type(cx) {
            link.value = link_type.normalize_value(self.value.clone());
        }
        link
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate against the field's settings for this link's type.
    ///
    /// Links of unknown type are always valid.
    pub fn validate(
        &self,
        cx: &LinkContext,
        field: &impl SettingsProvider,
    ) -> Option<ValidationError> {
        let link_type = self.resolve_type(cx)?;
        let settings = field.link_type_settings(&self.link_type, link_type.as_ref());
        link_type.validate_value(&settings, self, cx)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render an anchor tag.
    ///
    /// Returns `None` when there is nothing to link to. Serializer
    /// failures produce a degraded [`Markup`] instead of an error.
    ///
    /// ```ignore
    /// link.render(&cx, "Imprint");
    /// link.render(&cx, Attributes::new().with("text", "Imprint").with("class", "btn"));
    /// ```
    pub fn render(&self, cx: &LinkContext, content: impl Into<LinkContent>) -> Option<Markup> {
        let link_type = self.resolve_type(cx)?;
        let url = link_type.url(self, cx)?;
        let mut text = self.text_with(Some(link_type.as_ref()), cx);

        let mut attrs = Attributes::new().with("href", url);
        if let Some(target) = self.target() {
            attrs.set("target", target);
        }
        if let Some(class) = self.class() {
            attrs.set("class", class);
        }

        match content.into() {
            LinkContent::Default => {}
            LinkContent::Text(replacement) => text = replacement,
            LinkContent::Attributes(mut caller) => {
                if let Some(replacement) = caller.remove("text") {
                    text = replacement;
                }
                caller.fill_from(&attrs);
                attrs = caller;
            }
        }

        if self.link_type == URL_TYPE && self.target().is_some() {
            attrs.set("rel", "noopener");
        }

        let markup = match cx.serializer().tag("a", &text, &attrs) {
            Ok(html) => Markup::new(html),
            Err(err) => {
                crate::debug!("render"; "link `{}` degraded: {}", self.link_type, err);
                let name = link_type.display_name(cx);
                let message = cx.translate(
                    LINK_DOMAIN,
                    "Error: Could not render the link `{name}`.",
                    &[("name", &name)],
                );
                Markup::degraded(&message, err)
            }
        };
        Some(markup)
    }
}

/// `Some(s)` unless `s` is missing or whitespace only.
fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        HtmlSerializer, MapLocalizer, RenderError, ResourceHandle, ResourceRecord, StaticResolver,
    };
    use crate::link_type::DeclaredDefaults;

    fn cx() -> LinkContext {
        LinkContext::default()
    }

    #[test]
    fn test_custom_text_wins_when_allowed() {
        let link = Link::new("url", "https://example.com")
            .with_default_text("Read more")
            .with_custom_text("Visit");
        assert_eq!(link.text(&cx()), "Visit");

        let mut disallowed = link.clone();
        disallowed.allow_custom_text = false;
        assert_eq!(disallowed.text(&cx()), "Read more");
    }

    #[test]
    fn test_blank_custom_text_falls_through() {
        let link = Link::new("url", "https://example.com")
            .with_default_text("Read more")
            .with_custom_text("   ");
        assert_eq!(link.text(&cx()), "Read more");
    }

    #[test]
    fn test_default_text_is_translated() {
        let mut localizer = MapLocalizer::default();
        localizer.insert(SITE_DOMAIN, "Read more", "Lees meer");
        let cx = cx().with_localizer(localizer);

        let link = Link::new("email", "a@b.com").with_default_text("Read more");
        assert_eq!(link.text(&cx), "Lees meer");
    }

    #[test]
    fn test_element_title_beats_default_text() {
        let resolver: StaticResolver = [ResourceRecord::from(ResourceHandle {
            kind: "entry".into(),
            id: "42".into(),
            title: "About us".into(),
            url: Some("https://example.com/about".into()),
            site: None,
        })]
        .into_iter()
        .collect();
        let cx = cx().with_resolver(resolver);

        let link = Link::new("entry", RawValue::reference("42")).with_default_text("Read more");
        assert_eq!(link.text(&cx), "About us");
        assert_eq!(link.url(&cx).as_deref(), Some("https://example.com/about"));
        assert!(link.has_element(&cx));
        assert_eq!(link.element(&cx).unwrap().id.as_str(), "42");
    }

    #[test]
    fn test_target_and_class_need_permission() {
        let mut link = Link::new("url", "https://example.com")
            .with_target("_blank")
            .with_class("btn");
        assert_eq!(link.target(), Some("_blank"));
        assert_eq!(link.class(), Some("btn"));

        link.allow_target = false;
        link.allow_class = false;
        assert_eq!(link.target(), None);
        assert_eq!(link.class(), None);

        let blank = Link::new("url", "x").with_target("");
        assert_eq!(blank.target(), None);
    }

    #[test]
    fn test_unknown_type_degrades() {
        let link = Link::new("does-not-exist", "https://example.com").with_default_text("Read more");
        let cx = cx();

        assert!(link.is_empty(&cx));
        assert_eq!(link.url(&cx), None);
        assert_eq!(link.to_url_string(&cx), "");
        assert_eq!(link.text(&cx), "Read more");
        assert!(!link.has_element(&cx));
        assert!(link.element(&cx).is_none());
        assert!(link.render(&cx, LinkContent::Default).is_none());
        assert!(link.render(&cx, "Click").is_none());
        assert!(link.validate(&cx, &DeclaredDefaults).is_none());
    }

    #[test]
    fn test_render_plain() {
        let link = Link::new("url", "https://example.com").with_default_text("Read more");
        let markup = link.render(&cx(), LinkContent::Default).unwrap();
        assert_eq!(
            markup.as_str(),
            "<a href=\"https://example.com\">Read more</a>"
        );
    }

    #[test]
    fn test_render_empty_link_is_none() {
        let link = Link::new("url", "   ");
        assert!(link.render(&cx(), "Click").is_none());
    }

    #[test]
    fn test_render_text_replacement() {
        let link = Link::new("email", "a@b.com");
        let markup = link.render(&cx(), "Mail <us>").unwrap();
        assert_eq!(
            markup.as_str(),
            "<a href=\"mailto:a@b.com\">Mail &lt;us&gt;</a>"
        );
    }

    #[test]
    fn test_render_noopener_only_with_target() {
        let cx = cx();
        let with_target = Link::new("url", "https://example.com").with_target("_blank");
        let markup = with_target.render(&cx, "Go").unwrap();
        assert!(markup.as_str().contains("target=\"_blank\""));
        assert!(markup.as_str().contains("rel=\"noopener\""));

        let without = Link::new("url", "https://example.com");
        let markup = without.render(&cx, "Go").unwrap();
        assert!(!markup.as_str().contains("rel="));
    }

    #[test]
    fn test_render_noopener_only_for_url_type() {
        let link = Link::new("email", "a@b.com").with_target("_blank");
        let markup = link.render(&cx(), "Go").unwrap();
        assert!(markup.as_str().contains("target=\"_blank\""));
        assert!(!markup.as_str().contains("rel="));
    }

    #[test]
    fn test_render_caller_attributes_win() {
        let mut link = Link::new("url", "https://example.com").with_class("stored");
        link.allow_class = false;

        let attrs = Attributes::new().with("text", "Click").with("class", "btn");
        let markup = link.render(&cx(), attrs).unwrap();
        assert_eq!(
            markup.as_str(),
            "<a class=\"btn\" href=\"https://example.com\">Click</a>"
        );
        assert!(!markup.as_str().contains("stored"));
    }

    #[test]
    fn test_render_caller_href_overrides_url() {
        let link = Link::new("url", "https://example.com");
        let attrs = Attributes::new().with("href", "/elsewhere");
        let markup = link.render(&cx(), attrs).unwrap();
        assert!(markup.as_str().contains("href=\"/elsewhere\""));
        assert!(!markup.as_str().contains("example.com"));
    }

    #[test]
    fn test_render_serializer_failure_is_soft() {
        struct Broken;
        impl HtmlSerializer for Broken {
            fn tag(&self, _: &str, _: &str, _: &Attributes) -> Result<String, RenderError> {
                Err(RenderError::Other("template missing".into()))
            }
        }

        let cx = cx().with_serializer(Broken);
        let link = Link::new("url", "https://example.com").with_custom_text("Go");
        let markup = link.render(&cx, LinkContent::Default).unwrap();

        assert!(markup.is_degraded());
        assert!(markup.as_str().contains("Could not render the link `URL`"));
        // Text and url resolution are unaffected.
        assert_eq!(link.text(&cx), "Go");
        assert_eq!(link.url(&cx).as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_owner_site_fallback() {
        let cx = cx().with_current_site("default");
        let link = Link::new("url", "https://example.com");
        assert_eq!(link.owner_site(&cx).as_deref(), Some("default"));
        assert!(link.owner().is_none());
    }

    #[test]
    fn test_normalized_coerces_value() {
        let cx = cx();
        let link = Link::new("url", RawValue::Other(serde_json::json!(12)));
        assert_eq!(link.normalized(&cx).value, RawValue::text(""));

        let entry = Link::new("entry", "42");
        assert_eq!(entry.normalized(&cx).value, RawValue::reference("42"));

        let unknown = Link::new("nope", RawValue::Other(serde_json::json!(12)));
        assert_eq!(unknown.normalized(&cx).value, unknown.value);
    }

    #[test]
    fn test_serde_round_trip_keeps_type_and_value() {
        let link = Link::new("tel", "+32 478 00 00")
            .with_custom_text("Call us")
            .with_target("_self")
            .with_default_text("Contact");

        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"type\":\"tel\""));
        let back: Link = serde_json::from_str(&json).unwrap();

        assert_eq!(back.link_type, "tel");
        assert_eq!(back.value, RawValue::text("+32 478 00 00"));
        assert!(back.allow_custom_text);
        assert_eq!(back.custom_text.as_deref(), Some("Call us"));
        assert_eq!(back.target.as_deref(), Some("_self"));
        assert_eq!(back.default_text, "Contact");
        assert!(back.owner().is_none());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let link: Link = serde_json::from_str(r#"{"type":"entry","value":{"id":"9"}}"#).unwrap();
        assert_eq!(link.value, RawValue::reference("9"));
        assert!(!link.allow_target);
        assert_eq!(link.default_text, "");
    }

    #[test]
    fn test_numeric_reference_resolves() {
        let cx = cx().with_resolver(StaticResolver::from_iter([ResourceRecord::from(
            ResourceHandle {
                kind: "entry".into(),
                id: 1u64.into(),
                title: "Home".into(),
                url: Some("/".into()),
                site: None,
            },
        )]));

        let link: Link = serde_json::from_str(r#"{"type":"entry","value":{"id":1}}"#).unwrap();
        assert_eq!(link.value, RawValue::reference("1"));
        assert!(!link.is_empty(&cx));
        assert_eq!(link.url(&cx).as_deref(), Some("/"));
        assert_eq!(link.normalized(&cx).value, RawValue::reference("1"));
    }
}
