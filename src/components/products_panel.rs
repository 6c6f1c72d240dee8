//! Products Panel
//!
//! Product listing with pagination, sync, and the create/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::dialogs::BrowserDialogs;
use crate::error::FormErrors;
use crate::forms::{FormMode, ProductForm};
use crate::loader::{GenerationCounter, LoadState};
use crate::models::{Page, Product, ProductStatus};
use crate::state::Tab;
use crate::store::{use_app_store, AdminStateStoreFields};
use crate::view::{render_products_table, TableView};

use super::modal::{FieldError, Modal};
use super::pagination_bar::PaginationBar;

#[component]
pub fn ProductsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (state, set_state) = signal(LoadState::<Page<Product>>::Loading);
    let generations = StoredValue::new(GenerationCounter::default());

    // Modal state
    let show_modal = RwSignal::new(false);
    let form = RwSignal::new(ProductForm::blank());

    // Load whenever page or revision changes
    Effect::new(move |_| {
        let view = store.view().get();
        if view.tab != Tab::Products {
            return;
        }
        let page = view.page;
        let mut counter = generations.get_value();
        let ticket = counter.begin();
        generations.set_value(counter);

        set_state.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_products(page).await;
            if !generations.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping stale products page {}", page);
                return;
            }
            match &result {
                Ok(loaded) => log::info!("loaded {} products (page {}/{})", loaded.items.len(), loaded.page, loaded.pages),
                Err(e) => log::warn!("products load failed: {}", e),
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    let show_product_modal = move |record: Option<Product>| {
        form.set(match record {
            Some(product) => ProductForm::from_record(&product),
            None => ProductForm::blank(),
        });
        show_modal.set(true);
    };

    let delete = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            let outcome = actions::delete_product(&api, &BrowserDialogs, &ctx.notifier, id).await;
            if outcome.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let sync = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            if actions::sync_all(&api, &ctx.notifier, Tab::Products).await.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let on_page = Callback::new(move |page: u32| store.view().write().goto(page));

    view! {
        <section class="tab-content active" id="products">
            <div class="section-header">
                <h2>"Products"</h2>
                <div class="section-actions">
                    <button class="btn btn-secondary" on:click=sync>"Sync"</button>
                    <button class="btn btn-primary" on:click=move |_| show_product_modal(None)>
                        "New Product"
                    </button>
                </div>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="loading"><p>"Loading products..."</p></div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="alert alert-danger">{message}</div>
                }.into_any(),
                LoadState::Ready(page) => match render_products_table(&page) {
                    TableView::Empty => view! {
                        <div class="alert alert-warning">"No products yet"</div>
                    }.into_any(),
                    TableView::Rows { rows, pagination } => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Title"</th>
                                    <th>"Price"</th>
                                    <th>"Stock"</th>
                                    <th>"Status"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| {
                                    let id = row.id;
                                    let record = row.record.clone();
                                    let badge_class = row.badge.css();
                                    view! {
                                        <tr>
                                            <td>{row.id}</td>
                                            <td>{row.title}</td>
                                            <td>{row.price}</td>
                                            <td>{row.stock}</td>
                                            <td><span class=badge_class>{row.badge.label}</span></td>
                                            <td>{row.created}</td>
                                            <td>
                                                <button
                                                    class="btn btn-primary"
                                                    title="Edit"
                                                    on:click=move |_| show_product_modal(Some(record.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <button class="btn btn-danger" title="Delete" on:click=move |_| delete(id)>
                                                    "Delete"
                                                </button>
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

            <ProductModal show=show_modal form=form />
        </section>
    }
}

#[component]
fn ProductModal(show: RwSignal<bool>, form: RwSignal<ProductForm>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let errors = RwSignal::new(FormErrors::default());
    let saving = RwSignal::new(false);

    // Fresh validation state each time the modal opens
    Effect::new(move |_| {
        if show.get() {
            errors.set(FormErrors::default());
        }
    });

    let title = Signal::derive(move || match form.with(|f| f.mode()) {
        FormMode::Create => "New Product".to_string(),
        FormMode::Edit(id) => format!("Edit Product #{}", id),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let current = form.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let result = actions::submit_product(&api, &ctx.notifier, &current).await;
            errors.set(FormErrors::after_submit(&result));
            if result.is_ok_and(|outcome| outcome.should_reload()) {
                show.set(false);
                store.view().write().reload();
            }
            saving.set(false);
        });
    };

    view! {
        <Modal title=title show=show>
            <form class="modal-form" on:submit=on_submit>
                <label>"Title"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="title" />

                <label>"Description"
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <label>"Price"
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="price" />

                <label>"Stock"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || form.with(|f| f.stock.clone())
                        on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="stock" />

                <label>"Status"
                    <select
                        prop:value=move || form.with(|f| f.status.as_str().to_string())
                        on:change=move |ev| form.update(|f| f.status = ProductStatus::from(event_target_value(&ev)))
                    >
                        <option value="online">"Online"</option>
                        <option value="offline">"Offline"</option>
                    </select>
                </label>

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| show.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
