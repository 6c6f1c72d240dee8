//! View Models
//!
//! Pure functions from fetched data to the structures the components draw.
//! Nothing in here touches the DOM.

mod auth;
mod format;
mod pagination;
mod tables;

pub use auth::AuthIndicator;
pub use pagination::{PageLabel, Pagination};
pub use tables::{render_categories_table, render_orders_table, render_products_table, TableView};
