//! HTML serialization for link tags.
//!
//! Provides:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - [`Attributes`] - ordered tag attributes with override semantics
//! - [`HtmlSerializer`] - the tag-building seam, with [`HtmlTag`] as default

use std::borrow::Cow;
use std::fmt::Write;

use thiserror::Error;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Tag and attribute names: ASCII letters first, then letters, digits, `-`, `_`, `:`, `.`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

// =============================================================================
// Attributes
// =============================================================================

/// Ordered set of tag attributes.
///
/// Insertion order is preserved on output; setting an existing name
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Add every attribute of `other` that is not already present.
    ///
    /// Existing values win.
    pub fn fill_from(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            if !self.contains(name) {
                self.entries.push((name.to_owned(), value.to_owned()));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

// =============================================================================
// Serializer
// =============================================================================

/// Errors raised while serializing a tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid tag name `{0}`")]
    TagName(String),

    #[error("invalid attribute name `{0}`")]
    AttributeName(String),

    #[error("render failed: {0}")]
    Other(String),
}

/// Turns a tag name, text content and attributes into markup.
///
/// Implementations must escape both content and attribute values.
pub trait HtmlSerializer: Send + Sync {
    fn tag(&self, name: &str, content: &str, attrs: &Attributes) -> Result<String, RenderError>;
}

/// Default serializer producing `<name attr="value">content</name>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTag;

impl HtmlSerializer for HtmlTag {
    fn tag(&self, name: &str, content: &str, attrs: &Attributes) -> Result<String, RenderError> {
        if !is_valid_name(name) {
            return Err(RenderError::TagName(name.to_owned()));
        }

        let mut html = String::with_capacity(content.len() + 16 * (attrs.len() + 1));
        html.push('<');
        html.push_str(name);
        for (attr, value) in attrs.iter() {
            if !is_valid_name(attr) {
                return Err(RenderError::AttributeName(attr.to_owned()));
            }
            // Writing into a String cannot fail.
            let _ = write!(html, " {attr}=\"{}\"", escape_attr(value));
        }
        html.push('>');
        html.push_str(&escape(content));
        html.push_str("</");
        html.push_str(name);
        html.push('>');
        Ok(html)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("normal"), "normal");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_attributes_set_replaces_in_place() {
        let mut attrs = Attributes::new().with("href", "/a").with("class", "x");
        attrs.set("href", "/b");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("href", "/b"), ("class", "x")]);
    }

    #[test]
    fn test_attributes_fill_from_keeps_existing() {
        let mut caller = Attributes::new().with("class", "btn");
        let computed = Attributes::new().with("href", "/a").with("class", "link");
        caller.fill_from(&computed);
        assert_eq!(caller.get("class"), Some("btn"));
        assert_eq!(caller.get("href"), Some("/a"));
        assert_eq!(caller.len(), 2);
    }

    #[test]
    fn test_attributes_remove() {
        let mut attrs: Attributes = [("text", "Click"), ("id", "x")].into_iter().collect();
        assert_eq!(attrs.remove("text").as_deref(), Some("Click"));
        assert_eq!(attrs.remove("text"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_tag_escapes_content_and_attributes() {
        let attrs = Attributes::new().with("href", "/search?a=1&b=\"2\"");
        let html = HtmlTag.tag("a", "<Tom & Jerry>", &attrs).unwrap();
        assert_eq!(
            html,
            "<a href=\"/search?a=1&amp;b=&quot;2&quot;\">&lt;Tom &amp; Jerry&gt;</a>"
        );
    }

    #[test]
    fn test_tag_rejects_bad_names() {
        assert_eq!(
            HtmlTag.tag("a b", "", &Attributes::new()),
            Err(RenderError::TagName("a b".into()))
        );
        let attrs = Attributes::new().with("on\"click", "x");
        assert!(matches!(
            HtmlTag.tag("a", "", &attrs),
            Err(RenderError::AttributeName(_))
        ));
    }

    #[test]
    fn test_tag_empty_content() {
        assert_eq!(HtmlTag.tag("p", "", &Attributes::new()).unwrap(), "<p></p>");
    }
}
