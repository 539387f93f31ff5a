//! Reduced-motion preference and the view classes it gates.
//!
//! The preference comes from the `(prefers-reduced-motion: reduce)` media
//! query. It is read once on the client and handed to the form as a plain
//! signal; the form never writes it and no state transition depends on it.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders with motion enabled. The client corrects the value
//! after hydration, which only swaps a CSS class.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use leptos::prelude::ReadSignal;

use crate::state::auth_form::Mode;

#[cfg(feature = "hydrate")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Context wrapper for the read-only reduced-motion signal.
#[derive(Clone, Copy, Debug)]
pub struct ReducedMotion(pub ReadSignal<bool>);

/// Read the reduced-motion preference from the browser.
///
/// Returns `false` outside a browser or when the media query is unsupported.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Class list for the auth card.
#[must_use]
pub fn card_class(mode: Mode, reduced_motion: bool) -> String {
    let mut class = format!("auth-card auth-card--{}", mode.as_str());
    if !reduced_motion {
        class.push_str(" auth-card--animated");
    }
    class
}

/// Class list for the view body that is remounted on every switch.
#[must_use]
pub fn view_class(reduced_motion: bool) -> &'static str {
    if reduced_motion {
        "auth-view"
    } else {
        "auth-view auth-view--enter"
    }
}
