//! Raw link payload.

use serde::{Deserialize, Serialize};

use crate::host::ResourceId;

/// The stored value of a link, interpreted only by its link type.
///
/// Text kinds expect [`RawValue::Text`], resource kinds expect
/// [`RawValue::Reference`]. Anything else is kept verbatim as
/// [`RawValue::Other`] so a round trip through storage is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Null,
    Text(String),
    Reference {
        id: ResourceId,
    },
    Other(serde_json::Value),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn reference(id: impl Into<ResourceId>) -> Self {
        Self::Reference { id: id.into() }
    }

    /// The string payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The referenced id, if this is a reference.
    pub fn as_reference(&self) -> Option<&ResourceId> {
        match self {
            Self::Reference { id } => Some(id),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ResourceId> for RawValue {
    fn from(id: ResourceId) -> Self {
        Self::Reference { id }
    }
}
