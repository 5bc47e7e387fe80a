//! Domain services behind the HTTP routes.
//!
//! `contact` validates submissions and produces the action result; `inbox`
//! receives accepted messages.

pub mod contact;
pub mod inbox;
