//! Categories Panel
//!
//! Category listing and the create/edit modal with its parent selector.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::dialogs::BrowserDialogs;
use crate::error::FormErrors;
use crate::forms::{CategoryForm, FormMode};
use crate::loader::{GenerationCounter, LoadState};
use crate::models::{Category, Page};
use crate::state::Tab;
use crate::store::{use_app_store, AdminStateStoreFields};
use crate::view::{render_categories_table, TableView};

use super::modal::{FieldError, Modal};
use super::pagination_bar::PaginationBar;

#[component]
pub fn CategoriesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (state, set_state) = signal(LoadState::<Page<Category>>::Loading);
    let generations = StoredValue::new(GenerationCounter::default());

    let show_modal = RwSignal::new(false);
    let form = RwSignal::new(CategoryForm::blank());

    Effect::new(move |_| {
        let view = store.view().get();
        if view.tab != Tab::Categories {
            return;
        }
        let page = view.page;
        let mut counter = generations.get_value();
        let ticket = counter.begin();
        generations.set_value(counter);

        set_state.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_categories(page).await;
            if !generations.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping stale categories page {}", page);
                return;
            }
            match &result {
                Ok(loaded) => {
                    log::info!("loaded {} categories", loaded.items.len());
                    // Parent selector only ever sees the last loaded set
                    *store.category_options().write() = loaded.items.clone();
                }
                Err(e) => log::warn!("categories load failed: {}", e),
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    let show_category_modal = move |record: Option<Category>| {
        form.set(match record {
            Some(category) => CategoryForm::from_record(&category),
            None => CategoryForm::blank(),
        });
        show_modal.set(true);
    };

    let delete = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            let outcome = actions::delete_category(&api, &BrowserDialogs, &ctx.notifier, id).await;
            if outcome.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let sync = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            if actions::sync_all(&api, &ctx.notifier, Tab::Categories).await.should_reload() {
                store.view().write().reload();
            }
        });
    };

    let on_page = Callback::new(move |page: u32| store.view().write().goto(page));

    view! {
        <section class="tab-content active" id="categories">
            <div class="section-header">
                <h2>"Categories"</h2>
                <div class="section-actions">
                    <button class="btn btn-secondary" on:click=sync>"Sync"</button>
                    <button class="btn btn-primary" on:click=move |_| show_category_modal(None)>
                        "New Category"
                    </button>
                </div>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="loading"><p>"Loading categories..."</p></div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="alert alert-danger">{message}</div>
                }.into_any(),
                LoadState::Ready(page) => match render_categories_table(&page) {
                    TableView::Empty => view! {
                        <div class="alert alert-warning">"No categories yet"</div>
                    }.into_any(),
                    TableView::Rows { rows, pagination } => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Parent"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| {
                                    let id = row.id;
                                    let record = row.record.clone();
                                    view! {
                                        <tr>
                                            <td>{row.id}</td>
                                            <td>{row.name}</td>
                                            <td>{row.parent}</td>
                                            <td>{row.created}</td>
                                            <td>
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| show_category_modal(Some(record.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <button class="btn btn-danger" on:click=move |_| delete(id)>
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

            <CategoryModal show=show_modal form=form />
        </section>
    }
}

#[component]
fn CategoryModal(show: RwSignal<bool>, form: RwSignal<CategoryForm>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let errors = RwSignal::new(FormErrors::default());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if show.get() {
            errors.set(FormErrors::default());
        }
    });

    let title = Signal::derive(move || match form.with(|f| f.mode()) {
        FormMode::Create => "New Category".to_string(),
        FormMode::Edit(id) => format!("Edit Category #{}", id),
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
            let result = actions::submit_category(&api, &ctx.notifier, &current).await;
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
                <label>"Name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="name" />

                <label>"Parent"
                    <select
                        prop:value=move || form.with(|f| f.parent_id.clone())
                        on:change=move |ev| form.update(|f| f.parent_id = event_target_value(&ev))
                    >
                        <option value="">"(none)"</option>
                        <For
                            each=move || store.category_options().get()
                            key=|c| c.id
                            children=move |c| {
                                view! { <option value=c.id.to_string()>{c.name}</option> }
                            }
                        />
                    </select>
                </label>
                <FieldError errors=errors field="parent_id" />

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
