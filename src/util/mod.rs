//! Utility helpers shared across the auth UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and input rules from
//! component logic to keep both testable without a DOM.

pub mod constraints;
pub mod motion;
