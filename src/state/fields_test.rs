use super::*;
use std::collections::HashSet;

fn all_fields() -> impl Iterator<Item = Field> {
    LOGIN_FIELDS.into_iter().chain(REGISTER_FIELDS)
}

// =============================================================
// Mode field sets
// =============================================================

#[test]
fn mode_fields_belong_to_that_mode() {
    for mode in [Mode::Login, Mode::Register] {
        assert!(mode.fields().iter().all(|f| f.mode() == mode));
    }
}

#[test]
fn register_fields_render_in_form_order() {
    let ids = Mode::Register
        .fields()
        .iter()
        .map(|f| f.dom_id())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        ["fullName", "registerEmail", "phoneNumber", "registerPassword", "confirmPassword"]
    );
}

#[test]
fn dom_ids_are_unique_across_both_views() {
    let ids = all_fields().map(Field::dom_id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), LOGIN_FIELDS.len() + REGISTER_FIELDS.len());
}

// =============================================================
// Input attributes
// =============================================================

#[test]
fn only_register_fields_are_required() {
    assert!(LOGIN_FIELDS.iter().all(|f| !f.required()));
    assert!(REGISTER_FIELDS.iter().all(|f| f.required()));
}

#[test]
fn input_kinds_match_field_purpose() {
    assert_eq!(Field::from(LoginField::Email).input_kind(), InputKind::Email);
    assert_eq!(Field::from(RegisterField::Email).input_kind(), InputKind::Email);
    assert_eq!(Field::from(RegisterField::PhoneNumber).input_kind(), InputKind::Tel);
    assert_eq!(Field::from(RegisterField::FullName).input_kind(), InputKind::Text);
    assert_eq!(
        Field::from(RegisterField::ConfirmPassword).input_kind(),
        InputKind::Password
    );
}

#[test]
fn input_kind_strings_are_html_types() {
    assert_eq!(InputKind::Text.as_str(), "text");
    assert_eq!(InputKind::Email.as_str(), "email");
    assert_eq!(InputKind::Tel.as_str(), "tel");
    assert_eq!(InputKind::Password.as_str(), "password");
}

#[test]
fn password_autocomplete_differs_between_modes() {
    assert_eq!(Field::from(LoginField::Password).autocomplete(), "current-password");
    assert_eq!(Field::from(RegisterField::Password).autocomplete(), "new-password");
}

#[test]
fn every_field_has_a_label() {
    assert!(all_fields().all(|f| !f.label().is_empty()));
}
