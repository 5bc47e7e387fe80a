//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `disclosure`, `contact`) so individual
//! components depend only on the small model they render. Every model is
//! owned by one component instance; nothing is global.

pub mod contact;
pub mod disclosure;
pub mod nav;
