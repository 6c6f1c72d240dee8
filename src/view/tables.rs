//! Table view models for products, categories and orders

use crate::models::{Category, Order, OrderStatus, Page, Product, ProductStatus};

use super::format::{format_date, format_money};
use super::pagination::{build_pagination, Pagination};

/// Either the empty notice or rows plus an optional pager
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<R> {
    Empty,
    Rows {
        rows: Vec<R>,
        /// Present only when there is more than one page
        pagination: Option<Pagination>,
    },
}

impl<R> TableView<R> {
    fn build<T>(page: &Page<T>, row: impl Fn(&T) -> R) -> Self {
        if page.items.is_empty() {
            return TableView::Empty;
        }
        TableView::Rows {
            rows: page.items.iter().map(row).collect(),
            pagination: (page.pages > 1).then(|| build_pagination(page.page, page.pages)),
        }
    }
}

/// Status pill: CSS class plus text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: String,
}

impl Badge {
    pub fn css(&self) -> String {
        format!("status-badge {}", self.class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub stock: String,
    pub badge: Badge,
    pub created: String,
    /// Handed to the edit modal as-is
    pub record: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: u32,
    pub name: String,
    pub parent: String,
    pub created: String,
    pub record: Category,
}

/// Which row actions an order offers in its current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderActions {
    pub ship: bool,
    pub cancel: bool,
    pub refund: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: u32,
    pub buyer: String,
    pub total: String,
    pub badge: Badge,
    pub date: String,
    pub actions: OrderActions,
}

fn product_badge(status: ProductStatus) -> Badge {
    let class = match status {
        ProductStatus::Online => "status-online",
        ProductStatus::Offline => "status-offline",
    };
    Badge { class, label: status.as_str().to_string() }
}

fn order_badge(status: &OrderStatus) -> Badge {
    let class = match status {
        OrderStatus::Shipped => "status-shipped",
        OrderStatus::Cancelled | OrderStatus::Refunded => "status-offline",
        OrderStatus::Pending | OrderStatus::Other(_) => "status-pending",
    };
    Badge { class, label: status.label().to_string() }
}

fn order_actions(status: &OrderStatus) -> OrderActions {
    match status {
        OrderStatus::Pending | OrderStatus::Other(_) => OrderActions { ship: true, cancel: true, refund: false },
        OrderStatus::Shipped => OrderActions { refund: true, ..Default::default() },
        OrderStatus::Cancelled | OrderStatus::Refunded => OrderActions::default(),
    }
}

pub fn render_products_table(page: &Page<Product>) -> TableView<ProductRow> {
    TableView::build(page, |p| ProductRow {
        id: p.id,
        title: p.title.clone(),
        price: p.price.map(format_money).unwrap_or_else(|| "-".to_string()),
        stock: p.stock.to_string(),
        badge: product_badge(p.status),
        created: format_date(p.created_at.as_deref()),
        record: p.clone(),
    })
}

/// Parent names resolve against this page only; anything else shows `-`.
pub fn render_categories_table(page: &Page<Category>) -> TableView<CategoryRow> {
    let parent_name = |parent_id: Option<u32>| {
        parent_id
            .and_then(|pid| page.items.iter().find(|c| c.id == pid))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string())
    };
    TableView::build(page, |c| CategoryRow {
        id: c.id,
        name: c.name.clone(),
        parent: parent_name(c.parent_id),
        created: format_date(c.created_at.as_deref()),
        record: c.clone(),
    })
}

pub fn render_orders_table(page: &Page<Order>) -> TableView<OrderRow> {
    TableView::build(page, |o| OrderRow {
        id: o.id,
        buyer: o
            .buyer_name
            .clone()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "-".to_string()),
        total: format_money(o.total_amount.unwrap_or(0.0)),
        badge: order_badge(&o.status),
        date: format_date(o.order_date.as_deref()),
        actions: order_actions(&o.status),
    })
}
