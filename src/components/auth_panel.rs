//! Credential Components
//!
//! Header status indicator and the credential verification modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, AppContext};
use crate::forms::AuthForm;
use crate::store::{use_app_store, AdminStateStoreFields, AdminStore};
use crate::view::AuthIndicator;

use super::modal::Modal;

/// Fetch credential status and update the header indicator
pub fn refresh_auth(ctx: AppContext, store: AdminStore) {
    let api = ctx.api();
    spawn_local(async move {
        let result = api.auth_status().await;
        if let Err(e) = &result {
            log::warn!("credential status check failed: {}", e);
        }
        *store.auth().write() = AuthIndicator::from_result(&result);
    });
}

/// Connected dot plus description
#[component]
pub fn AuthStatusBadge(on_configure: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="auth-status">
            <span class=move || {
                if store.auth().get().connected { "status-dot connected" } else { "status-dot" }
            }></span>
            <span class="status-text">{move || store.auth().get().text}</span>
            <button class="btn btn-secondary" on:click=move |_| on_configure.run(())>
                "API Settings"
            </button>
        </div>
    }
}

#[component]
pub fn AuthModal(show: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(AuthForm::default());
    let verifying = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if verifying.get_untracked() {
            return;
        }
        verifying.set(true);
        let current = form.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let outcome = actions::verify_credentials(&api, &ctx.notifier, &current).await;
            if outcome.should_reload() {
                show.set(false);
                refresh_auth(ctx, store);
            }
            verifying.set(false);
        });
    };

    view! {
        <Modal title=Signal::derive(|| "Marketplace API Credentials".to_string()) show=show>
            <form class="modal-form" on:submit=on_submit>
                <label>"API Key"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.api_key.clone())
                        on:input=move |ev| form.update(|f| f.api_key = event_target_value(&ev))
                    />
                </label>
                <label>"Secret Key"
                    <input
                        type="password"
                        required
                        prop:value=move || form.with(|f| f.secret_key.clone())
                        on:input=move |ev| form.update(|f| f.secret_key = event_target_value(&ev))
                    />
                </label>
                <label>"Salt Key"
                    <input
                        type="password"
                        required
                        prop:value=move || form.with(|f| f.salt_key.clone())
                        on:input=move |ev| form.update(|f| f.salt_key = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| show.set(false)>
                        "Close"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || verifying.get()>
                        {move || if verifying.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
