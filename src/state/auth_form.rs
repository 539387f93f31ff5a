//! Dual-mode auth form state: which view is active and the field records
//! behind both views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthForm` component holds one `AuthFormState` in an `RwSignal` and
//! routes every input, switch, and submit event through the methods here.
//! Nothing in this module touches the DOM, so the whole state machine is
//! exercised by plain unit tests.
//!
//! INVARIANTS
//! ==========
//! - Exactly one `Mode` is active; switching never touches either field record.
//! - Fields are never cleared implicitly, not on switch and not after submit.
//! - Password confirmation is not compared; a mismatch is handed off as-is.
//! - `violation` holds the last blocked submit only until the next accepted
//!   submit or mode switch. Recording or clearing it never touches a field.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use serde::Serialize;

use crate::util::constraints::{self, ConstraintViolation};

/// Which of the two form views is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Heading shown above the active view.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Register => "Create your account",
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Register",
        }
    }

    /// Prompt text and link label offering the other mode.
    #[must_use]
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Register"),
            Self::Register => ("Already have an account?", "Sign in"),
        }
    }

    /// Lowercase name, used for CSS modifiers and log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// Field keys of the login record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

/// Field keys of the register record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterField {
    FullName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

/// A field identifier scoped to the mode that owns it.
///
/// Login and register both have an `Email` and a `Password`; the variant keeps
/// them apart so an update can only ever land in one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Login(LoginField),
    Register(RegisterField),
}

impl Field {
    /// The mode whose record owns this field.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Self::Login(_) => Mode::Login,
            Self::Register(_) => Mode::Register,
        }
    }
}

impl From<LoginField> for Field {
    fn from(field: LoginField) -> Self {
        Self::Login(field)
    }
}

impl From<RegisterField> for Field {
    fn from(field: RegisterField) -> Self {
        Self::Register(field)
    }
}

/// Values of the login view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    #[must_use]
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Values of the register view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFields {
    #[must_use]
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FullName => &self.full_name,
            RegisterField::Email => &self.email,
            RegisterField::PhoneNumber => &self.phone_number,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::FullName => &mut self.full_name,
            RegisterField::Email => &mut self.email,
            RegisterField::PhoneNumber => &mut self.phone_number,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// The active mode's record, as handed to the submit handler.
///
/// Serializes with a `mode` tag next to the camelCase field names, ready to be
/// posted as JSON by whichever backend handler is wired in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Submission {
    Login(LoginFields),
    Register(RegisterFields),
}

impl Submission {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Login(_) => Mode::Login,
            Self::Register(_) => Mode::Register,
        }
    }

    /// Value of `field`, or `None` when the field belongs to the other mode.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        match (self, field) {
            (Self::Login(fields), Field::Login(key)) => Some(fields.get(key)),
            (Self::Register(fields), Field::Register(key)) => Some(fields.get(key)),
            _ => None,
        }
    }
}

/// State owned by one mounted auth form.
///
/// Both records live side by side behind the `mode` discriminant so the
/// inactive view keeps whatever the user typed into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: Mode,
    pub login: LoginFields,
    pub register: RegisterFields,
    /// Constraint that blocked the last submit, rendered under the form.
    pub violation: Option<ConstraintViolation>,
}

impl AuthFormState {
    /// Flip to the other view and return the new mode.
    ///
    /// A pending violation belongs to the view being left, so it is dropped.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.violation = None;
        log::debug!("auth form switched to {}", self.mode.as_str());
        self.mode
    }

    /// Show `mode`. Requesting the mode that is already active changes nothing.
    pub fn show(&mut self, mode: Mode) {
        if self.mode != mode {
            self.toggle_mode();
        }
    }

    /// Replace one field's value, leaving every other field untouched.
    ///
    /// Any string is accepted, including the empty string. The view only mounts
    /// inputs for the active mode, so in practice `field` belongs to it.
    pub fn update(&mut self, field: impl Into<Field>, value: impl Into<String>) {
        let field = field.into();
        if field.mode() != self.mode {
            log::debug!("auth form updated inactive {} field", field.mode().as_str());
        }
        let slot = match field {
            Field::Login(key) => self.login.slot_mut(key),
            Field::Register(key) => self.register.slot_mut(key),
        };
        *slot = value.into();
    }

    /// Current value of `field`, whichever mode owns it.
    #[must_use]
    pub fn value(&self, field: impl Into<Field>) -> &str {
        match field.into() {
            Field::Login(key) => self.login.get(key),
            Field::Register(key) => self.register.get(key),
        }
    }

    /// Snapshot of the active mode's record.
    #[must_use]
    pub fn submission(&self) -> Submission {
        match self.mode {
            Mode::Login => Submission::Login(self.login.clone()),
            Mode::Register => Submission::Register(self.register.clone()),
        }
    }

    /// Whether the pending violation points at `field`.
    #[must_use]
    pub fn is_invalid(&self, field: impl Into<Field>) -> bool {
        let field = field.into();
        self.violation.is_some_and(|v| v.field() == field)
    }

    /// Check the active record and, when it passes, hand it to `handler`.
    ///
    /// The handler is the boundary to the authentication backend; it is not
    /// called at all when a constraint fails. The outcome is kept in
    /// `violation`: set on a blocked submit, cleared on an accepted one.
    /// Fields are left as they are in both outcomes.
    ///
    /// # Errors
    ///
    /// Returns the first `ConstraintViolation` in field order.
    pub fn submit<F, T>(&mut self, handler: F) -> Result<T, ConstraintViolation>
    where
        F: FnOnce(Submission) -> T,
    {
        let submission = self.submission();
        self.violation = constraints::check(&submission).err();
        if let Some(violation) = self.violation {
            log::debug!("auth form submit blocked: {violation}");
            return Err(violation);
        }
        log::debug!("auth form {} submission handed off", self.mode.as_str());
        Ok(handler(submission))
    }
}
