//! Input constraints checked before a submission leaves the form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rendered inputs carry `required` and `type="email"`, so the browser
//! already blocks a bad submit. These checks apply the same rules inside the
//! core so the submit boundary holds without a DOM and the first failure can
//! be rendered under the form.
//!
//! Only two rules exist: a required field must be non-empty, and a non-empty
//! email field must look like an email address. `tel` is free-form and the
//! confirm-password field is not compared with the password.

#[cfg(test)]
#[path = "constraints_test.rs"]
mod constraints_test;

use crate::state::auth_form::{Field, Submission};
use crate::state::fields::InputKind;

/// Characters allowed in the local part besides ASCII letters and digits.
const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_LABEL_LEN: usize = 63;

/// A field value that fails its input constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("{} is required.", .field.label())]
    ValueMissing { field: Field },
    #[error("{} must be a valid email address.", .field.label())]
    TypeMismatch { field: Field },
}

impl ConstraintViolation {
    /// The offending field.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::ValueMissing { field } | Self::TypeMismatch { field } => field,
        }
    }
}

/// Check every field of the submission in render order.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check(submission: &Submission) -> Result<(), ConstraintViolation> {
    submission.mode().fields().iter().try_for_each(|&field| {
        check_field(field, submission.value(field).unwrap_or_default())
    })
}

/// Check a single value against the constraints of `field`.
///
/// Email values are trimmed of surrounding ASCII whitespace first, the way
/// the browser sanitizes `type="email"` inputs.
///
/// # Errors
///
/// `ValueMissing` for an empty required field, `TypeMismatch` for a
/// non-empty malformed email.
pub fn check_field(field: Field, value: &str) -> Result<(), ConstraintViolation> {
    let kind = field.input_kind();
    let value = match kind {
        InputKind::Email => value.trim_matches(|c: char| c.is_ascii_whitespace()),
        InputKind::Text | InputKind::Tel | InputKind::Password => value,
    };

    if value.is_empty() {
        return if field.required() {
            Err(ConstraintViolation::ValueMissing { field })
        } else {
            Ok(())
        };
    }

    if kind == InputKind::Email && !is_valid_email(value) {
        return Err(ConstraintViolation::TypeMismatch { field });
    }

    Ok(())
}

/// Whether `value` is an email address by the HTML `type="email"` grammar.
///
/// The domain needs no dot (`a@b` passes), each label is 1 to 63 letters,
/// digits, or hyphens and cannot start or end with a hyphen. Non-ASCII
/// domain characters are accepted since the browser punycode-encodes them
/// before checking; the length limit then counts characters, not the
/// encoded form.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
        && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.chars().count())
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii())
        && !label.starts_with('-')
        && !label.ends_with('-')
}
