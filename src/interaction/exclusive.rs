use tracing::trace;

/// Tracks the single UI element (dropdown, menu) allowed to be open at a time.
///
/// Hosts own one registry per view and pass it to whatever opens elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusiveElementRegistry {
    active: Option<String>,
}

impl ExclusiveElementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `id` the active element.
    ///
    /// Returns the previously active element, which the caller must close.
    /// Re-registering the active element returns `None`.
    pub fn register(&mut self, id: impl Into<String>) -> Option<String> {
        let id = id.into();
        if self.active.as_deref() == Some(id.as_str()) {
            return None;
        }
        trace!(element = %id, previous = ?self.active, "activate exclusive element");
        self.active.replace(id)
    }

    /// Clears the active element only when it is `id`. Returns `true` when cleared.
    pub fn unregister(&mut self, id: &str) -> bool {
        if self.is_active(id) {
            self.active = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Drops the active element, returning it so the caller can close it.
    pub fn clear(&mut self) -> Option<String> {
        self.active.take()
    }
}
