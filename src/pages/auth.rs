//! Auth page hosting the dual-mode form.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::auth_form::Submission;
use crate::util::motion::ReducedMotion;

/// Auth page — centers the form and wires its submit boundary.
///
/// No backend is connected yet; accepted submissions are logged by mode only,
/// never with their field values.
#[component]
pub fn AuthPage() -> impl IntoView {
    let ReducedMotion(reduced_motion) = expect_context::<ReducedMotion>();

    let on_submit = Callback::new(move |submission: Submission| {
        log::info!("{} submission reached the auth boundary", submission.mode().as_str());
    });

    view! {
        <div class="auth-page">
            <AuthForm reduced_motion=reduced_motion on_submit=on_submit/>
        </div>
    }
}
