//! Orders Panel
//!
//! Order listing with status filter and per-row fulfilment actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::OrderFilter;
use crate::context::use_app_context;
use crate::dialogs::BrowserDialogs;
use crate::loader::{GenerationCounter, LoadState};
use crate::models::{Order, Page};
use crate::state::Tab;
use crate::store::{use_app_store, AdminStateStoreFields};
use crate::view::{render_orders_table, TableView};

use super::pagination_bar::PaginationBar;

#[derive(Debug, Clone, Copy)]
enum OrderAction {
    Ship,
    Cancel,
    Refund,
}

fn filter_label(filter: OrderFilter) -> &'static str {
    match filter {
        OrderFilter::All => "All",
        OrderFilter::Pending => "Pending",
        OrderFilter::Shipped => "Shipped",
        OrderFilter::Cancelled => "Cancelled",
        OrderFilter::Refunded => "Refunded",
    }
}

#[component]
pub fn OrdersPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (state, set_state) = signal(LoadState::<Page<Order>>::Loading);
    let generations = StoredValue::new(GenerationCounter::default());
    let filter = RwSignal::new(OrderFilter::All);

    Effect::new(move |_| {
        let view = store.view().get();
        let filter = filter.get();
        if view.tab != Tab::Orders {
            return;
        }
        let page = view.page;
        let mut counter = generations.get_value();
        let ticket = counter.begin();
        generations.set_value(counter);

        set_state.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_orders(page, filter).await;
            if !generations.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping stale orders page {} ({})", page, filter.as_str());
                return;
            }
            match &result {
                Ok(loaded) => log::info!("loaded {} orders (filter {})", loaded.items.len(), filter.as_str()),
                Err(e) => log::warn!("orders load failed: {}", e),
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    let run = move |action: OrderAction, id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            let outcome = match action {
                OrderAction::Ship => actions::ship_order(&api, &BrowserDialogs, &ctx.notifier, id).await,
                OrderAction::Cancel => actions::cancel_order(&api, &BrowserDialogs, &ctx.notifier, id).await,
                OrderAction::Refund => actions::refund_order(&api, &BrowserDialogs, &ctx.notifier, id).await,
            };
            if outcome.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let sync = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            if actions::sync_all(&api, &ctx.notifier, Tab::Orders).await.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let on_filter = move |ev: web_sys::Event| {
        filter.set(OrderFilter::parse(&event_target_value(&ev)));
        store.view().write().goto(1);
    };

    let on_page = Callback::new(move |page: u32| store.view().write().goto(page));

    view! {
        <section class="tab-content active" id="orders">
            <div class="section-header">
                <h2>"Orders"</h2>
                <div class="section-actions">
                    <select
                        class="filter-select"
                        prop:value=move || filter.get().as_str()
                        on:change=on_filter
                    >
                        {OrderFilter::ALL.into_iter().map(|f| {
                            view! { <option value=f.as_str()>{filter_label(f)}</option> }
                        }).collect_view()}
                    </select>
                    <button class="btn btn-secondary" on:click=sync>"Sync"</button>
                </div>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="loading"><p>"Loading orders..."</p></div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="alert alert-danger">{message}</div>
                }.into_any(),
                LoadState::Ready(page) => match render_orders_table(&page) {
                    TableView::Empty => view! {
                        <div class="alert alert-warning">"No orders yet"</div>
                    }.into_any(),
                    TableView::Rows { rows, pagination } => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Buyer"</th>
                                    <th>"Total"</th>
                                    <th>"Status"</th>
                                    <th>"Order Date"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| {
                                    let id = row.id;
                                    let acts = row.actions;
                                    let badge_class = row.badge.css();
                                    view! {
                                        <tr>
                                            <td>{row.id}</td>
                                            <td>{row.buyer}</td>
                                            <td>{row.total}</td>
                                            <td><span class=badge_class>{row.badge.label}</span></td>
                                            <td>{row.date}</td>
                                            <td>
                                                {acts.ship.then(|| view! {
                                                    <button class="btn btn-primary" on:click=move |_| run(OrderAction::Ship, id)>
                                                        "Ship"
                                                    </button>
                                                })}
                                                {acts.cancel.then(|| view! {
                                                    <button class="btn btn-danger" on:click=move |_| run(OrderAction::Cancel, id)>
                                                        "Cancel"
                                                    </button>
                                                })}
                                                {acts.refund.then(|| view! {
                                                    <button class="btn btn-secondary" on:click=move |_| run(OrderAction::Refund, id)>
                                                        "Refund"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        {pagination.map(|p| view! { <PaginationBar pagination=p on_select=on_page /> })}
                    }.into_any(),
                },
            }}
        </section>
    }
}
