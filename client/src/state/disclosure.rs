//! Show/hide state for a disclosure widget (the mobile navigation menu).

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Visibility of a disclosure plus the id its controlling button points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    pub id: String,
    pub is_visible: bool,
}

impl DisclosureState {
    /// Collapsed disclosure controlling the element with `id`.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self { id, is_visible: false }
    }

    pub fn toggle(&mut self) {
        self.is_visible = !self.is_visible;
    }

    /// Value for the button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_visible { "true" } else { "false" }
    }
}
