//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the contact inbox behind a trait object so tests can swap in a
//! failing or recording implementation.

use std::sync::Arc;

use crate::services::inbox::ContactInbox;

/// Clone is required by Axum; the inbox is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub inbox: Arc<dyn ContactInbox>,
}

impl AppState {
    #[must_use]
    pub fn new(inbox: Arc<dyn ContactInbox>) -> Self {
        Self { inbox }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::inbox::MemoryInbox;

    /// `AppState` backed by a fresh in-memory inbox; the inbox is returned
    /// too so tests can inspect what was delivered.
    #[must_use]
    pub fn test_app_state(capacity: usize) -> (AppState, Arc<MemoryInbox>) {
        let inbox = Arc::new(MemoryInbox::new(capacity));
        (AppState::new(inbox.clone()), inbox)
    }
}
