//! Client-side state for the auth form.
//!
//! DESIGN
//! ======
//! `auth_form` holds the state machine and field records; `fields` holds
//! the per-input metadata the view and the constraint checks share.

pub mod auth_form;
pub mod fields;
