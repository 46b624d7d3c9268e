//! Free text link types.
//!
//! One implementation covers plain URLs, email addresses, phone numbers
//! and unchecked custom values; [`InputKind`] selects the URL scheme, the
//! syntax check and the HTML input type.

use std::sync::LazyLock;

use regex::Regex;

use super::{InputDescriptor, LinkType, LinkTypeSettings, ValidationError};
use crate::core::{Link, LinkContext, RawValue};
use crate::host::LINK_DOMAIN;

/// Sub-kind of a free text link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Url,
    Email,
    Tel,
}

impl InputKind {
    /// HTML input type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }

    /// Scheme prepended to the raw value to form the URL.
    const fn scheme(self) -> &'static str {
        match self {
            Self::Url => "",
            Self::Email => "mailto:",
            Self::Tel => "tel:",
        }
    }

    /// Placeholder that replaces any configured one.
    const fn fixed_placeholder(self) -> Option<&'static str> {
        match self {
            Self::Url => Some("https://"),
            Self::Email => Some("test@example.com"),
            Self::Tel => None,
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Url => is_valid_url(value),
            Self::Email => is_valid_email(value),
            Self::Tel => RE_TEL.is_match(value),
        }
    }

    const fn error_key(self) -> &'static str {
        match self {
            Self::Url => "Please enter a valid url.",
            Self::Email => "Please enter a valid email address.",
            Self::Tel => "Please enter a valid phone number.",
        }
    }
}

/// Free text link type.
#[derive(Debug, Clone)]
pub struct InputLinkType {
    name: String,
    group: String,
    kind: Option<InputKind>,
    placeholder: Option<String>,
}

impl InputLinkType {
    /// Unchecked text link, used verbatim as URL.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: super::DEFAULT_GROUP.to_owned(),
            kind: None,
            placeholder: None,
        }
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name).with_kind(InputKind::Url)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name).with_kind(InputKind::Email)
    }

    pub fn tel(name: impl Into<String>) -> Self {
        Self::new(name).with_kind(InputKind::Tel)
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = Some(kind);
        self
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

    pub const fn kind(&self) -> Option<InputKind> {
        self.kind
    }

    /// Trimmed text value, `None` when blank or not text.
    fn value<'a>(&self, link: &'a Link) -> Option<&'a str> {
        link.value
            .as_text()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl LinkType for InputLinkType {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn default_settings(&self) -> LinkTypeSettings {
        LinkTypeSettings::default().with_disable_validation(false)
    }

    fn text(&self, _link: &Link, _cx: &LinkContext) -> Option<String> {
        None
    }

    fn url(&self, link: &Link, _cx: &LinkContext) -> Option<String> {
        let value = self.value(link)?;
        let scheme = self.kind.map_or("", InputKind::scheme);
        Some(format!("{scheme}{value}"))
    }

    fn is_empty(&self, link: &Link, _cx: &LinkContext) -> bool {
        self.value(link).is_none()
    }

    fn validate_value(
        &self,
        settings: &LinkTypeSettings,
        link: &Link,
        cx: &LinkContext,
    ) -> Option<ValidationError> {
        let value = self.value(link)?;
        if settings.validation_disabled() {
            return None;
        }

        let kind = self.kind?;
        if kind.accepts(value) {
            None
        } else {
            Some(ValidationError::new(cx, kind.error_key()))
        }
    }

    fn normalize_value(&self, raw: RawValue) -> RawValue {
        match raw {
            RawValue::Text(text) => RawValue::Text(text),
            _ => RawValue::Text(String::new()),
        }
    }

    fn input_descriptor(
        &self,
        key: &str,
        handle: &str,
        settings: &LinkTypeSettings,
        link: &Link,
        cx: &LinkContext,
    ) -> InputDescriptor {
        let mut desc = InputDescriptor::for_field(key, handle, link, || {
            link.value.as_text().unwrap_or_default().to_owned()
        });

        if !settings.validation_disabled() {
            desc.input_kind = self.kind.map(|kind| kind.as_str().to_owned());
        }

        desc.placeholder = match self.kind.and_then(InputKind::fixed_placeholder) {
            Some(fixed) => Some(fixed.to_owned()),
            None => self
                .placeholder
                .as_deref()
                .map(|p| cx.translate(LINK_DOMAIN, p, &[])),
        };

        desc
    }
}

// ============================================================================
// Syntax checks
// ============================================================================

/// Digits, `+ ( ) # . /`, whitespace and the letters of `ext` and `-`.
static RE_TEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()#./ \t\r\n\x0B\x0Cext-]+$").unwrap());

static RE_EMAIL_LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$").unwrap()
});

static RE_DOMAIN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").unwrap());

/// `local@domain` with a dotted domain of valid labels.
fn is_valid_email(value: &str) -> bool {
    if value.len() > 254 {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    local.len() <= 64
        && RE_EMAIL_LOCAL.is_match(local)
        && domain.contains('.')
        && domain.split('.').all(|label| RE_DOMAIN_LABEL.is_match(label))
}

/// Schemes that are complete without a host.
const HOSTLESS_SCHEMES: [&str; 3] = ["mailto", "news", "file"];

/// Absolute URI with a host, unless the scheme is one of [`HOSTLESS_SCHEMES`].
fn is_valid_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match url::Url::parse(value) {
        Ok(url) => url.host().is_some() || HOSTLESS_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}
