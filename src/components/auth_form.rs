//! Dual-mode auth form: a login view and a register view in one card.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component owns the only mutable state on the page. Inputs write into
//! `AuthFormState`, the switch link flips its mode, and submit runs the
//! constraint checks before handing the active record to `on_submit`.
//! What happens after the hand-off (network call, navigation) belongs to the
//! caller.

use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::state::auth_form::{AuthFormState, Submission};
use crate::util::motion;

/// Auth card with a mode switch and one submit boundary per mode.
///
/// `reduced_motion` only selects CSS classes. Without `on_submit` an accepted
/// submit is swallowed after the default form navigation is prevented.
#[component]
pub fn AuthForm(
    #[prop(into)] reduced_motion: Signal<bool>,
    #[prop(optional)] on_submit: Option<Callback<Submission>>,
) -> impl IntoView {
    let state = RwSignal::new(AuthFormState::default());

    // Keystrokes must not remount the inputs, so views depend on the mode only.
    let mode = Memo::new(move |_| state.with(|s| s.mode));
    let violation = Memo::new(move |_| state.with(|s| s.violation));

    // The handler runs after the state write is released so it may read the form.
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = state.try_update(|s| s.submit(|submission| submission));
        if let (Some(Ok(submission)), Some(handler)) = (accepted, on_submit) {
            handler.run(submission);
        }
    };

    let on_switch = move |_| {
        let target = mode.get_untracked().toggled();
        state.update(|s| s.show(target));
    };

    let fields_view = move || {
        let mode = mode.get();
        view! {
            <div class=move || motion::view_class(reduced_motion.get()) data-mode=mode.as_str()>
                {mode
                    .fields()
                    .iter()
                    .map(|&field| view! { <FieldInput field=field state=state/> })
                    .collect::<Vec<_>>()}
            </div>
        }
    };

    view! {
        <div class=move || motion::card_class(mode.get(), reduced_motion.get())>
            <h1 class="auth-card__title">{move || mode.get().title()}</h1>
            <form class="auth-form" on:submit=on_form_submit>
                {fields_view}
                <Show when=move || violation.with(Option::is_some)>
                    <p id="auth-form-error" class="auth-form__error" role="alert">
                        {move || violation.get().map(|v| v.to_string()).unwrap_or_default()}
                    </p>
                </Show>
                <button class="btn btn--primary auth-form__submit" type="submit">
                    {move || mode.get().submit_label()}
                </button>
            </form>
            <p class="auth-switch">
                {move || mode.get().switch_prompt().0}
                " "
                <button class="auth-switch__link" type="button" on:click=on_switch>
                    {move || mode.get().switch_prompt().1}
                </button>
            </p>
        </div>
    }
}
