//! Notice Banner Component
//!
//! The single transient notification at the top of the page.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.notifier.current().map(|notice| {
            view! {
                <div class=notice.kind.css() role="status">
                    <span class="alert-icon">{notice.kind.icon()}</span>
                    " "
                    {notice.message}
                    <button class="alert-close" on:click=move |_| ctx.notifier.dismiss()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
