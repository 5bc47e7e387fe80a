//! Generated element ids for accessibility wiring.
//!
//! DESIGN
//! ======
//! `App` provides one `IdScope` per render. Ids are handed out in render
//! order, and the server and the hydrating client walk the same tree, so a
//! label/control pair rendered on the server keeps its linkage once the
//! client takes over.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::use_context;

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

/// Monotonic id source shared through context.
#[derive(Clone, Debug, Default)]
pub struct IdScope {
    next: Arc<AtomicUsize>,
}

impl IdScope {
    /// Return the next id in this scope, e.g. `":c0:"`.
    #[must_use]
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!(":c{n}:")
    }
}

/// Next id from the ambient `IdScope`, or from a fresh scope when rendered
/// outside `App`.
pub fn use_id() -> String {
    use_context::<IdScope>().unwrap_or_default().next_id()
}
