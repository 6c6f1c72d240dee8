//! Order Endpoints

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{Order, OrderList, Page, SyncReport};

use super::{list_path, ApiClient, ApiRequest, Transport};

/// Status filter for the order listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Shipped,
    Cancelled,
    Refunded,
}

impl OrderFilter {
    pub const ALL: [OrderFilter; 5] = [
        OrderFilter::All,
        OrderFilter::Pending,
        OrderFilter::Shipped,
        OrderFilter::Cancelled,
        OrderFilter::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderFilter::All => "all",
            OrderFilter::Pending => "pending",
            OrderFilter::Shipped => "shipped",
            OrderFilter::Cancelled => "cancelled",
            OrderFilter::Refunded => "refunded",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == raw)
            .unwrap_or_default()
    }
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ShipArgs<'a> {
    tracking_number: &'a str,
}

#[derive(Serialize)]
struct CancelArgs<'a> {
    reason: &'a str,
}

#[derive(Serialize)]
struct RefundArgs<'a> {
    refund_reason: &'a str,
}

// ========================
// Commands
// ========================

impl<T: Transport> ApiClient<T> {
    pub async fn list_orders(&self, page: u32, filter: OrderFilter) -> ApiResult<Page<Order>> {
        let mut path = list_path("orders", page);
        if filter != OrderFilter::All {
            path.push_str("&status=");
            path.push_str(filter.as_str());
        }
        let list: OrderList = self.fetch(ApiRequest::get(path)).await?;
        Ok(list.into())
    }

    pub async fn ship_order(&self, id: u32, tracking_number: &str) -> ApiResult<()> {
        let request = ApiRequest::post(format!("/api/orders/{}/ship", id))
            .json(&ShipArgs { tracking_number })?;
        self.execute(request).await
    }

    pub async fn cancel_order(&self, id: u32, reason: &str) -> ApiResult<()> {
        let request = ApiRequest::post(format!("/api/orders/{}/cancel", id))
            .json(&CancelArgs { reason })?;
        self.execute(request).await
    }

    pub async fn refund_order(&self, id: u32, refund_reason: &str) -> ApiResult<()> {
        let request = ApiRequest::post(format!("/api/orders/{}/refund", id))
            .json(&RefundArgs { refund_reason })?;
        self.execute(request).await
    }

    pub async fn sync_orders(&self) -> ApiResult<SyncReport> {
        self.fetch(ApiRequest::post("/api/orders/sync")).await
    }
}

#[cfg(test)]
mod tests {
    use super::OrderFilter;
    use crate::api::testing::RecordingTransport;
    use crate::api::ApiClient;
    use futures::executor::block_on;

    #[test]
    fn test_filter_is_appended_to_query() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"success","data":{"orders":[],"page":1,"pages":0}}"#);
        transport.respond(r#"{"status":"success","data":{"orders":[],"page":2,"pages":3}}"#);
        let api = ApiClient::new(transport);

        block_on(api.list_orders(1, OrderFilter::All)).unwrap();
        let page = block_on(api.list_orders(2, OrderFilter::Shipped)).unwrap();
        assert_eq!(page.page, 2);

        let paths: Vec<String> = api.transport().calls().into_iter().map(|(_, p)| p).collect();
        assert_eq!(
            paths,
            vec![
                "/api/orders?page=1&page_size=10".to_string(),
                "/api/orders?page=2&page_size=10&status=shipped".to_string(),
            ]
        );
    }

    #[test]
    fn test_cancel_order_body() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"success"}"#);
        let api = ApiClient::new(transport);
        block_on(api.cancel_order(5, "test")).unwrap();
        let request = &api.transport().requests()[0];
        assert_eq!(request.path, "/api/orders/5/cancel");
        assert_eq!(request.body, Some(serde_json::json!({"reason": "test"})));
    }

    #[test]
    fn test_filter_parse_defaults_to_all() {
        assert_eq!(OrderFilter::parse("refunded"), OrderFilter::Refunded);
        assert_eq!(OrderFilter::parse("bogus"), OrderFilter::All);
    }
}
