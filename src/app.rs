//! Storefront Admin App
//!
//! Header, notice banner, tab bar and the active resource panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    refresh_auth, AuthModal, AuthStatusBadge, CategoriesPanel, NoticeBanner, OrdersPanel, ProductsPanel, TabBar,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::state::Tab;
use crate::store::{AdminState, AdminStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AdminState::new());
    let ctx = AppContext::new(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let auth_show = RwSignal::new(false);

    // Credential status on mount
    refresh_auth(ctx, store);

    // Page changes must not remount the panel
    let active_tab = Memo::new(move |_| store.view().get().tab);

    view! {
        <div class="container">
            <header class="header">
                <h1>"Storefront Admin"</h1>
                <AuthStatusBadge on_configure=Callback::new(move |_| auth_show.set(true)) />
            </header>

            <NoticeBanner />
            <TabBar />

            {move || match active_tab.get() {
                Tab::Products => view! { <ProductsPanel /> }.into_any(),
                Tab::Orders => view! { <OrdersPanel /> }.into_any(),
                Tab::Categories => view! { <CategoriesPanel /> }.into_any(),
            }}

            <AuthModal show=auth_show />
        </div>
    }
}
