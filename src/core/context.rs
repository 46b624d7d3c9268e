//! Resolution context: registry plus host collaborators.

use std::fmt;
use std::sync::Arc;

use crate::host::{
    HtmlSerializer, HtmlTag, Localizer, NoResources, Params, PassthroughLocalizer, ResourceHandle,
    ResourceId, ResourceResolver,
};
use crate::link_type::{LinkType, SharedRegistry, default_registry};

/// Everything a [`Link`](super::Link) needs besides its own fields.
///
/// Cheap to clone; all parts are shared.
#[derive(Clone)]
pub struct LinkContext {
    registry: Arc<SharedRegistry>,
    localizer: Arc<dyn Localizer>,
    resolver: Arc<dyn ResourceResolver>,
    serializer: Arc<dyn HtmlSerializer>,
    current_site: Option<String>,
}

impl LinkContext {
    /// Context over `registry` with passthrough translation, no resources
    /// and the default HTML serializer.
    pub fn new(registry: Arc<SharedRegistry>) -> Self {
        Self {
            registry,
            localizer: Arc::new(PassthroughLocalizer),
            resolver: Arc::new(NoResources),
            serializer: Arc::new(HtmlTag),
            current_site: None,
        }
    }

    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Arc::new(localizer);
        self
    }

    pub fn with_resolver(mut self, resolver: impl ResourceResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_serializer(mut self, serializer: impl HtmlSerializer + 'static) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    /// Site used when a link's owner does not name one.
    pub fn with_current_site(mut self, site: impl Into<String>) -> Self {
        self.current_site = Some(site.into());
        self
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Look up a link type. Unknown keys are `None`, never an error.
    pub fn link_type(&self, key: &str) -> Option<Arc<dyn LinkType>> {
        self.registry.get(key)
    }

    pub fn translate(&self, domain: &str, key: &str, params: Params<'_>) -> String {
        self.localizer.translate(domain, key, params)
    }

    pub fn resolve(
        &self,
        kind: &str,
        id: &ResourceId,
        site: Option<&str>,
    ) -> Option<ResourceHandle> {
        self.resolver.resolve(kind, id, site)
    }

    pub fn serializer(&self) -> &dyn HtmlSerializer {
        self.serializer.as_ref()
    }

    pub fn current_site(&self) -> Option<&str> {
        self.current_site.as_deref()
    }
}

impl Default for LinkContext {
    /// Context over the built-in link types.
    fn default() -> Self {
        Self::new(Arc::new(SharedRegistry::new(default_registry())))
    }
}

impl fmt::Debug for LinkContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkContext")
            .field("registry", &self.registry)
            .field("current_site", &self.current_site)
            .finish_non_exhaustive()
    }
}
