//! UI Components
//!
//! Leptos components for the admin page.

mod auth_panel;
mod categories_panel;
mod modal;
mod notice_banner;
mod orders_panel;
mod pagination_bar;
mod products_panel;
mod tab_bar;

pub use auth_panel::{refresh_auth, AuthModal, AuthStatusBadge};
pub use categories_panel::CategoriesPanel;
pub use notice_banner::NoticeBanner;
pub use orders_panel::OrdersPanel;
pub use products_panel::ProductsPanel;
pub use tab_bar::TabBar;
