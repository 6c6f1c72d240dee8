//! Frontend Models
//!
//! Data structures mirroring the storefront API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Product listing status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ProductStatus {
    Online,
    #[default]
    Offline,
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        if raw == "online" {
            ProductStatus::Online
        } else {
            ProductStatus::Offline
        }
    }
}

/// Synced rows may carry `"status": null`; those list as offline
impl From<Option<String>> for ProductStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(ProductStatus::from).unwrap_or_default()
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Online => "online",
            ProductStatus::Offline => "offline",
        }
    }
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Order lifecycle status; unknown values are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Cancelled,
    Refunded,
    Other(String),
}

impl From<Option<String>> for OrderStatus {
    fn from(raw: Option<String>) -> Self {
        let raw = raw.unwrap_or_default();
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "shipped" => OrderStatus::Shipped,
            "cancelled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Other(String::new())
    }
}

impl OrderStatus {
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Other(raw) => raw,
        }
    }
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: u32,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub order_date: Option<String>,
}

/// One page of a resource listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub pages: u32,
}

impl<T> Page<T> {
    /// Build a page, forcing `1 <= page <= pages`
    pub fn new(items: Vec<T>, page: u32, pages: u32) -> Self {
        let pages = pages.max(1);
        Self {
            items,
            page: page.clamp(1, pages),
            pages,
        }
    }
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
}

impl From<ProductList> for Page<Product> {
    fn from(list: ProductList) -> Self {
        Page::new(list.products, list.page, list.pages)
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
}

impl From<CategoryList> for Page<Category> {
    fn from(list: CategoryList) -> Self {
        Page::new(list.categories, list.page, list.pages)
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
}

impl From<OrderList> for Page<Order> {
    fn from(list: OrderList) -> Self {
        Page::new(list.orders, list.page, list.pages)
    }
}

/// Stored marketplace credential state
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub has_credentials: bool,
    #[serde(default)]
    pub credentials_valid: bool,
    #[serde(default)]
    pub api_key_preview: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResult {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncReport {
    #[serde(default)]
    pub synced_count: u64,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub parent_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
    pub salt_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_decodes() {
        let raw = r#"{"products":[{"id":1,"title":"Widget","price":9.99,"stock":5,"status":"online","created_at":"2024-01-01T00:00:00Z"}],"page":1,"pages":1}"#;
        let page: Page<Product> = serde_json::from_str::<ProductList>(raw).unwrap().into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Widget");
        assert_eq!(page.items[0].status, ProductStatus::Online);
        assert_eq!(page.items[0].description, None);
    }

    #[test]
    fn test_unknown_product_status_is_offline() {
        let raw = r#"{"id":2,"title":"Gadget","price":null,"stock":0,"status":"draft"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.status, ProductStatus::Offline);
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_null_status_and_stock_still_decode() {
        let raw = r#"{"products":[
            {"id":1,"title":"Widget","price":9.99,"stock":5,"status":null},
            {"id":2,"title":"Gadget","price":1,"stock":null,"status":"online"}
        ],"page":1,"pages":1}"#;
        let page: Page<Product> = serde_json::from_str::<ProductList>(raw).unwrap().into();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, ProductStatus::Offline);
        assert_eq!(page.items[0].stock, 5);
        assert_eq!(page.items[1].status, ProductStatus::Online);
        assert_eq!(page.items[1].stock, 0);
    }

    #[test]
    fn test_order_status_keeps_unknown_values() {
        let raw = r#"{"id":9,"status":"awaiting_payment"}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.status, OrderStatus::Other("awaiting_payment".to_string()));
        assert_eq!(order.total_amount, None);

        let order: Order = serde_json::from_str(r#"{"id":9,"status":null}"#).unwrap();
        assert_eq!(order.status.label(), "");
    }

    #[test]
    fn test_category_list_without_paging_fields() {
        let raw = r#"{"categories":[{"id":1,"name":"Root","parent_id":null}]}"#;
        let page: Page<Category> = serde_json::from_str::<CategoryList>(raw).unwrap().into();
        assert_eq!((page.page, page.pages), (1, 1));
    }

    #[test]
    fn test_page_is_clamped() {
        let page = Page::new(Vec::<u32>::new(), 0, 0);
        assert_eq!((page.page, page.pages), (1, 1));
        let page = Page::new(vec![1u32], 7, 3);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_product_draft_serializes_status_lowercase() {
        let draft = ProductDraft {
            title: "Widget".into(),
            description: String::new(),
            price: 9.5,
            stock: 3,
            status: ProductStatus::Online,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["status"], "online");
        assert_eq!(json["stock"], 3);
    }
}
