//! Non-owning back reference from a link to the content it is attached to.

use std::fmt;
use std::sync::{Arc, Weak};

/// The entity a link value belongs to (an entry, a page, a global set...).
pub trait Owner: Send + Sync {
    /// Site the owner is rendered for, if it knows.
    fn site(&self) -> Option<String>;
}

/// Weak handle to an [`Owner`].
///
/// Holding it never keeps the owner alive; once the owner is dropped the
/// link behaves as if it had no owner.
#[derive(Clone)]
pub struct OwnerRef(Weak<dyn Owner>);

impl OwnerRef {
    pub fn new<T: Owner + 'static>(owner: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(owner);
        Self(weak)
    }

    pub fn upgrade(&self) -> Option<Arc<dyn Owner>> {
        self.0.upgrade()
    }

    /// Site of the owner, `None` if it is gone or has no site.
    pub fn site(&self) -> Option<String> {
        self.upgrade().and_then(|owner| owner.site())
    }
}

impl fmt::Debug for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerRef")
            .field("alive", &(self.0.strong_count() > 0))
            .finish()
    }
}
