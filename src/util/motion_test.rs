#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn card_class_carries_mode_modifier() {
    assert_eq!(
        card_class(Mode::Login, true),
        "auth-card auth-card--login"
    );
    assert_eq!(
        card_class(Mode::Register, true),
        "auth-card auth-card--register"
    );
}

#[test]
fn card_class_animates_only_without_reduced_motion() {
    assert!(card_class(Mode::Login, false).ends_with(" auth-card--animated"));
    assert!(!card_class(Mode::Login, true).contains("animated"));
}

#[test]
fn view_class_drops_enter_transition_for_reduced_motion() {
    assert_eq!(view_class(true), "auth-view");
    assert_eq!(view_class(false), "auth-view auth-view--enter");
}
