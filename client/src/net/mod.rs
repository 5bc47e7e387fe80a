//! Networking modules for the contact action round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` makes the HTTP call to the server action and `types` defines the
//! shared wire schema used by both sides.

pub mod api;
pub mod types;
