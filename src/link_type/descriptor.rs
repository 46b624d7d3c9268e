//! Form input descriptors.
//!
//! Link types never build form markup. They describe the input and a
//! template collaborator turns the description into HTML.

use serde::Serialize;

use crate::core::{Link, LinkContext, Markup};
use crate::host::{LINK_DOMAIN, RenderError};

/// Data needed to render one link type's input on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputDescriptor {
    /// `{handle}-{key}`
    pub id: String,
    /// `{handle}[{key}]`
    pub name: String,
    /// Current value, empty unless this type is the link's active type.
    pub value: String,
    /// HTML input type, absent when the browser must not validate.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Link type key this input belongs to.
    pub link_type: String,
    /// Whether this is the link's active type.
    pub selected: bool,
}

impl InputDescriptor {
    /// Identity and selection for `key` on field `handle`; `value` is used
    /// only when `link` is of this type.
    pub fn for_field(key: &str, handle: &str, link: &Link, value: impl FnOnce() -> String) -> Self {
        let selected = link.link_type == key;
        Self {
            id: format!("{handle}-{key}"),
            name: format!("{handle}[{key}]"),
            value: if selected { value() } else { String::new() },
            input_kind: None,
            placeholder: None,
            link_type: key.to_owned(),
            selected,
        }
    }

    /// Render through a template, falling back to an error fragment.
    ///
    /// `name` is the display name reported in the fragment.
    pub fn render_with<F>(&self, cx: &LinkContext, name: &str, template: F) -> Markup
    where
        F: FnOnce(&Self) -> Result<String, RenderError>,
    {
        match template(self) {
            Ok(html) => Markup::new(html),
            Err(err) => {
                crate::debug!("render"; "input `{}` degraded: {}", self.id, err);
                let message = cx.translate(
                    LINK_DOMAIN,
                    "Error: Could not render the template for the field `{name}`.",
                    &[("name", name)],
                );
                Markup::degraded(&message, err)
            }
        }
    }
}
