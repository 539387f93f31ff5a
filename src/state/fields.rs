//! Input metadata for each form field: DOM id, label, input type, and
//! whether the browser treats it as required.
//!
//! The view renders inputs straight from this table and the constraint
//! checks read the same `required`/`input_kind` values, so the rendered
//! attributes and the core's own validation cannot drift apart.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use super::auth_form::{Field, LoginField, Mode, RegisterField};

/// Login inputs in render order.
pub const LOGIN_FIELDS: [Field; 2] = [
    Field::Login(LoginField::Email),
    Field::Login(LoginField::Password),
];

/// Register inputs in render order.
pub const REGISTER_FIELDS: [Field; 5] = [
    Field::Register(RegisterField::FullName),
    Field::Register(RegisterField::Email),
    Field::Register(RegisterField::PhoneNumber),
    Field::Register(RegisterField::Password),
    Field::Register(RegisterField::ConfirmPassword),
];

/// The HTML `type` of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Password,
}

impl InputKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Password => "password",
        }
    }
}

impl Mode {
    /// Fields mounted while this mode is active, in render order.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => &LOGIN_FIELDS,
            Self::Register => &REGISTER_FIELDS,
        }
    }
}

impl Field {
    /// Element id, also used as the input `name`.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Login(LoginField::Email) => "email",
            Self::Login(LoginField::Password) => "password",
            Self::Register(RegisterField::FullName) => "fullName",
            Self::Register(RegisterField::Email) => "registerEmail",
            Self::Register(RegisterField::PhoneNumber) => "phoneNumber",
            Self::Register(RegisterField::Password) => "registerPassword",
            Self::Register(RegisterField::ConfirmPassword) => "confirmPassword",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login(LoginField::Email) | Self::Register(RegisterField::Email) => "Email",
            Self::Login(LoginField::Password) | Self::Register(RegisterField::Password) => {
                "Password"
            }
            Self::Register(RegisterField::FullName) => "Full name",
            Self::Register(RegisterField::PhoneNumber) => "Phone number",
            Self::Register(RegisterField::ConfirmPassword) => "Confirm password",
        }
    }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Login(LoginField::Email) | Self::Register(RegisterField::Email) => {
                InputKind::Email
            }
            Self::Login(LoginField::Password)
            | Self::Register(RegisterField::Password | RegisterField::ConfirmPassword) => {
                InputKind::Password
            }
            Self::Register(RegisterField::FullName) => InputKind::Text,
            Self::Register(RegisterField::PhoneNumber) => InputKind::Tel,
        }
    }

    /// Every register input is required; login inputs are not.
    #[must_use]
    pub fn required(self) -> bool {
        matches!(self, Self::Register(_))
    }

    #[must_use]
    pub fn autocomplete(self) -> &'static str {
        match self {
            Self::Login(LoginField::Email) | Self::Register(RegisterField::Email) => "email",
            Self::Login(LoginField::Password) => "current-password",
            Self::Register(RegisterField::Password | RegisterField::ConfirmPassword) => {
                "new-password"
            }
            Self::Register(RegisterField::FullName) => "name",
            Self::Register(RegisterField::PhoneNumber) => "tel",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Login(LoginField::Email) | Self::Register(RegisterField::Email) => {
                "you@example.com"
            }
            Self::Register(RegisterField::FullName) => "Ada Lovelace",
            Self::Register(RegisterField::PhoneNumber) => "+1 555 0100",
            Self::Login(LoginField::Password)
            | Self::Register(RegisterField::Password | RegisterField::ConfirmPassword) => "",
        }
    }
}
