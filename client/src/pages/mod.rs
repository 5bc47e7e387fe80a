//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-level layout and delegates rendering details to
//! `components`.

pub mod contact;
pub mod home;
