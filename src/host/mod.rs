//! Host collaborators.
//!
//! Link resolution itself is pure. Everything that reaches outside of it
//! goes through one of these seams:
//!
//! | Trait              | Purpose                                    | Default                |
//! |--------------------|--------------------------------------------|------------------------|
//! | [`ResourceResolver`] | id -> entry / category / asset handle    | [`NoResources`]        |
//! | [`Localizer`]      | translated strings, never fails            | [`PassthroughLocalizer`] |
//! | [`HtmlSerializer`] | escaped tag markup                         | [`HtmlTag`]            |

pub mod html;
mod localize;
mod resource;

pub use html::{Attributes, HtmlSerializer, HtmlTag, RenderError};
pub use localize::{
    LINK_DOMAIN, Localizer, MapLocalizer, Params, PassthroughLocalizer, SITE_DOMAIN, interpolate,
};
pub use resource::{
    NoResources, ResourceHandle, ResourceId, ResourceRecord, ResourceResolver, StaticResolver,
};
