//! One labelled input bound to a single form field.

use leptos::prelude::*;

use crate::state::auth_form::{AuthFormState, Field};

/// Input for `field`, reading from and writing to the shared form state.
///
/// The `type`, `required`, and `autocomplete` attributes come from the field
/// metadata so the browser applies the same constraints as the core.
#[component]
pub fn FieldInput(field: Field, state: RwSignal<AuthFormState>) -> impl IntoView {
    let value = move || state.with(|s| s.value(field).to_owned());
    let invalid = Memo::new(move |_| state.with(|s| s.is_invalid(field)));

    view! {
        <label class="auth-field" for=field.dom_id()>
            <span class="auth-field__label">{field.label()}</span>
            <input
                id=field.dom_id()
                name=field.dom_id()
                class="auth-field__input"
                type=field.input_kind().as_str()
                autocomplete=field.autocomplete()
                placeholder=field.placeholder()
                required=field.required()
                aria-invalid=move || if invalid.get() { "true" } else { "false" }
                aria-describedby=move || invalid.get().then_some("auth-form-error")
                prop:value=value
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    state.update(|s| s.update(field, next));
                }
            />
        </label>
    }
}
