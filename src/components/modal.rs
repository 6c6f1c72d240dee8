//! Modal Shell
//!
//! Overlay frame shared by the edit forms. Hiding only toggles visibility,
//! the form inside keeps its values.

use leptos::prelude::*;

use crate::error::FormErrors;

#[component]
pub fn Modal(
    title: Signal<String>,
    show: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || if show.get() { "modal show" } else { "modal" }>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button type="button" class="close" on:click=move |_| show.set(false)>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Inline message for one form field, if validation flagged it
#[component]
pub fn FieldError(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field).map(|message| {
                let message = message.to_string();
                view! { <div class="field-error">{message}</div> }
            })
        })
    }
}
