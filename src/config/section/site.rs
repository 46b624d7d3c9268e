//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! current = "en"     # Site used when a link's owner names none
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Current site handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl SiteSectionConfig {
    pub const CURRENT: FieldPath = FieldPath::new("site.current");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.current.as_deref().is_some_and(|s| s.trim().is_empty()) {
            diag.error_with_hint(
                Self::CURRENT,
                "site handle must not be blank",
                "remove `current` to resolve without a site",
            );
        }
    }
}
