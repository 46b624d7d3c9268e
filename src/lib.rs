//! CTA link fields.
//!
//! A [`Link`] is a small value object: a link type key, a raw value and a
//! few presentation flags. Everything type-specific (text, URL, emptiness,
//! validation, form input) is answered by the [`LinkType`] registered
//! under the key, so new kinds plug in without touching [`Link`].
//!
//! | Module      | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `core`      | `Link`, its raw value, owner and render result    |
//! | `link_type` | Link type contract, registry, built-in kinds      |
//! | `host`      | Localizer, resource resolver, HTML serializer     |
//! | `config`    | `ctalink.toml`: field settings, resources, i18n   |
//! | `cli`       | The `ctalink` command                             |
//! | `logger`    | `log!` / `debug!` output                          |
//!
//! ```ignore
//! let cx = LinkContext::default();
//! let link = Link::new("email", "hello@example.com").with_default_text("Mail us");
//!
//! assert_eq!(link.url(&cx).as_deref(), Some("mailto:hello@example.com"));
//! let html = link.render(&cx, LinkContent::Default);
//! ```

pub mod logger;

pub mod cli;
pub mod config;
pub mod core;
pub mod host;
pub mod link_type;

pub use crate::core::{Link, LinkContent, LinkContext, Markup, Owner, OwnerRef, RawValue};
pub use crate::link_type::{
    LinkType, LinkTypeRegistry, SharedRegistry, ValidationError, default_registry,
};
