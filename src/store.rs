//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Category;
use crate::state::ViewState;
use crate::view::AuthIndicator;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AdminState {
    /// Active tab and page
    pub view: ViewState,
    /// Categories from the last categories load; feeds the parent selector
    pub category_options: Vec<Category>,
    /// Header credential indicator
    pub auth: AuthIndicator,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            view: ViewState::default(),
            category_options: Vec::new(),
            auth: AuthIndicator::checking(),
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the app store from context
pub fn use_app_store() -> AdminStore {
    expect_context::<AdminStore>()
}
