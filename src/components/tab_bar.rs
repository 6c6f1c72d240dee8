//! Tab Bar Component
//!
//! Switches between the products, orders and categories panels.

use leptos::prelude::*;

use crate::state::Tab;
use crate::store::{use_app_store, AdminStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav-tabs">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || store.view().get().tab == tab;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| store.view().write().switch_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
