//! Pagination Bar Component

use leptos::prelude::*;

use crate::view::{PageLabel, Pagination};

#[component]
pub fn PaginationBar(
    pagination: Pagination,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            {pagination.buttons.into_iter().map(|button| {
                let text = match button.label {
                    PageLabel::Prev => "‹".to_string(),
                    PageLabel::Number(n) => n.to_string(),
                    PageLabel::Next => "›".to_string(),
                };
                // Numbered buttons for the current page are inert but not greyed out
                let disabled = button.target.is_none() && !button.active;
                view! {
                    <button
                        class=if button.active { "active" } else { "" }
                        disabled=disabled
                        on:click=move |_| {
                            if let Some(page) = button.target {
                                on_select.run(page);
                            }
                        }
                    >
                        {text}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
