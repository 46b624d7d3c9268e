//! Translation lookup.
//!
//! Keys are the source-language strings themselves. A missing translation
//! never fails: the key comes back with its `{param}` placeholders filled.

use std::collections::BTreeMap;

/// Domain for strings owned by the link field (type names, messages).
pub const LINK_DOMAIN: &str = "link";

/// Domain for site-authored strings such as the default link text.
pub const SITE_DOMAIN: &str = "site";

/// Named parameters substituted into `{name}` placeholders.
pub type Params<'a> = &'a [(&'a str, &'a str)];

/// Translates a key within a domain.
///
/// Must not fail; unknown keys fall back to the key itself.
pub trait Localizer: Send + Sync {
    fn translate(&self, domain: &str, key: &str, params: Params<'_>) -> String;
}

/// Returns every key untranslated, with parameters interpolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLocalizer;

impl Localizer for PassthroughLocalizer {
    fn translate(&self, _domain: &str, key: &str, params: Params<'_>) -> String {
        interpolate(key, params)
    }
}

/// Table-backed localizer: `domain -> key -> translation`.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    domains: BTreeMap<String, BTreeMap<String, String>>,
}

impl MapLocalizer {
    pub fn new(domains: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { domains }
    }

    /// Add a single translation.
    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

impl Localizer for MapLocalizer {
    fn translate(&self, domain: &str, key: &str, params: Params<'_>) -> String {
        let message = self
            .domains
            .get(domain)
            .and_then(|table| table.get(key))
            .map_or(key, String::as_str);
        interpolate(message, params)
    }
}

/// Replace `{name}` placeholders with their values.
///
/// Placeholders without a matching parameter are left as written.
pub fn interpolate(message: &str, params: Params<'_>) -> String {
    if params.is_empty() || !message.contains('{') {
        return message.to_owned();
    }

    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_key() {
        assert_eq!(
            PassthroughLocalizer.translate(SITE_DOMAIN, "Read more", &[]),
            "Read more"
        );
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Field `{name}` failed", &[("name", "Email")]),
            "Field `Email` failed"
        );
        assert_eq!(interpolate("{a}{b}", &[("a", "1"), ("b", "2")]), "12");
        assert_eq!(interpolate("keep {unknown}", &[("a", "1")]), "keep {unknown}");
        assert_eq!(interpolate("open { brace", &[("a", "1")]), "open { brace");
    }

    #[test]
    fn test_map_localizer_lookup_and_fallback() {
        let mut loc = MapLocalizer::default();
        loc.insert(SITE_DOMAIN, "Read more", "Lees meer");

        assert_eq!(loc.translate(SITE_DOMAIN, "Read more", &[]), "Lees meer");
        // Other domain: untranslated
        assert_eq!(loc.translate(LINK_DOMAIN, "Read more", &[]), "Read more");
        assert_eq!(loc.translate(SITE_DOMAIN, "Missing", &[]), "Missing");
    }
}
