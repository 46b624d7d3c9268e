//! Rendering inputs and outputs for link tags.

use std::fmt;

use crate::host::html::escape;
use crate::host::{Attributes, RenderError};

/// What the caller passes to [`Link::render`](super::Link::render).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkContent {
    /// Use the link's own text and attributes.
    #[default]
    Default,
    /// Replace the link text.
    Text(String),
    /// Extra attributes. A `text` entry replaces the link text; every other
    /// entry overrides the computed attribute of the same name.
    Attributes(Attributes),
}

impl From<&str> for LinkContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for LinkContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Attributes> for LinkContent {
    fn from(attrs: Attributes) -> Self {
        Self::Attributes(attrs)
    }
}

impl<T: Into<LinkContent>> From<Option<T>> for LinkContent {
    fn from(content: Option<T>) -> Self {
        content.map_or(Self::Default, Into::into)
    }
}

/// Rendered markup.
///
/// When the serializer fails the markup is a visible error fragment and
/// [`failure`](Self::failure) carries the cause, so callers that care can
/// tell a degraded render from a real one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    html: String,
    failure: Option<RenderError>,
}

impl Markup {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            failure: None,
        }
    }

    /// Error fragment standing in for markup that could not be produced.
    pub fn degraded(message: &str, failure: RenderError) -> Self {
        Self {
            html: format!("<p class=\"error\">{}</p>", escape(message)),
            failure: Some(failure),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    pub const fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    pub const fn failure(&self) -> Option<&RenderError> {
        self.failure.as_ref()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_conversions() {
        assert_eq!(LinkContent::from("Go"), LinkContent::Text("Go".into()));
        assert_eq!(LinkContent::from(None::<&str>), LinkContent::Default);
        let attrs = Attributes::new().with("class", "btn");
        assert_eq!(
            LinkContent::from(Some(attrs.clone())),
            LinkContent::Attributes(attrs)
        );
    }

    #[test]
    fn test_degraded_markup_is_escaped() {
        let markup = Markup::degraded("bad <tag>", RenderError::Other("boom".into()));
        assert!(markup.is_degraded());
        assert_eq!(markup.as_str(), "<p class=\"error\">bad &lt;tag&gt;</p>");
        assert_eq!(markup.failure(), Some(&RenderError::Other("boom".into())));
    }

    #[test]
    fn test_plain_markup() {
        let markup = Markup::new("<a href=\"/\">Home</a>");
        assert!(!markup.is_degraded());
        assert_eq!(markup.to_string(), "<a href=\"/\">Home</a>");
    }
}
