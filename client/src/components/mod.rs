//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the contact form. Each owns only its
//! own local state; pages compose them.

pub mod contact_form;
pub mod icons;
pub mod navigation;
pub mod text_field;
