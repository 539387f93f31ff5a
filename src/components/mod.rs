//! Reusable UI components.

pub mod auth_form;
pub mod field_input;
