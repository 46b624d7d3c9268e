//! Core types: the link value object and what it resolves against.

mod context;
mod link;
mod owner;
mod render;
mod value;

pub use context::LinkContext;
pub use link::Link;
pub use owner::{Owner, OwnerRef};
pub use render::{LinkContent, Markup};
pub use value::RawValue;
