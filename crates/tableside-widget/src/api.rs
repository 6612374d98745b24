//! # Order Gateway
//!
//! The HTTP client side of the backend contract: order submission plus the
//! waiter-service calls of the order-status view.
//!
//! ## Wire Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Backend Endpoints                                  │
//! │                                                                         │
//! │  POST /order                                                            │
//! │    { "table_id": 12,                                                    │
//! │      "items": [ { "id": 1, "name": "Pizza", "price": 30.0,             │
//! │                   "quantity": 2, "totalPrice": 60.0,                    │
//! │                   "customization": "" } ] }                             │
//! │    ──► { "order_id": 88, "status": "Order placed" }                     │
//! │                                                                         │
//! │  POST /call_waiter/<order_id>                                           │
//! │    ──► { "status": "success" }                                          │
//! │    ──► 403 within the 3-minute cooldown                                 │
//! │                                                                         │
//! │  POST /request_bill/<order_id>                                          │
//! │    { "payment_method": "card" }                                         │
//! │    ──► { "status": "success", "message": "..." }                        │
//! │                                                                         │
//! │  Amounts are decimal currency units on the wire; item fields are        │
//! │  camelCase. The backend recomputes totals (and the customization        │
//! │  surcharge) server-side from the submitted items.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tableside_core::cart::{Cart, LineItem};
use tableside_core::types::{OrderId, TableId};

use crate::config::ApiConfig;
use crate::error::OrderApiError;

// =============================================================================
// Wire Types
// =============================================================================

/// One submitted cart line, in the backend's camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Menu item id.
    pub id: i64,

    /// Dish name at time of adding.
    pub name: String,

    /// Unit price in decimal currency units.
    pub price: f64,

    /// Units merged into this line.
    pub quantity: i64,

    /// Accumulated, surcharge-free line total in decimal currency units.
    pub total_price: f64,

    /// Customization text; empty string when absent. The backend derives
    /// its surcharge from this field.
    pub customization: String,
}

impl From<&LineItem> for OrderLine {
    fn from(line: &LineItem) -> Self {
        OrderLine {
            id: line.item_id.0,
            name: line.name.clone(),
            price: line.unit_price.as_major_f64(),
            quantity: line.quantity,
            total_price: line.line_total.as_major_f64(),
            customization: line.customization.clone(),
        }
    }
}

/// POST body for the order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Table the guest ordered from.
    pub table_id: TableId,

    /// Full item sequence, cart insertion order.
    pub items: Vec<OrderLine>,
}

impl OrderRequest {
    /// Builds the wire payload for a cart.
    pub fn from_cart(table_id: TableId, cart: &Cart) -> Self {
        OrderRequest {
            table_id,
            items: cart.items().iter().map(OrderLine::from).collect(),
        }
    }
}

/// Success response of the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Backend-assigned order id; keys the order-status view.
    pub order_id: OrderId,

    /// Human-readable status line.
    pub status: String,
}

/// Acknowledgement shape of the waiter-service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterAck {
    /// "success" on the happy path.
    pub status: String,

    /// Optional human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Gateway Trait
// =============================================================================

/// Seam between the controller and the backend.
///
/// The controller is generic over this trait so the submit flow is testable
/// with an in-memory gateway; production hosts use [`HttpOrderApi`].
pub trait OrderGateway {
    /// Submits an order. One request, no retry; callers decide what to do
    /// with the result.
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, OrderApiError>;

    /// Calls a waiter to the table of an existing order.
    async fn call_waiter(&self, order_id: OrderId) -> Result<WaiterAck, OrderApiError>;

    /// Requests the bill for an existing order.
    async fn request_bill(
        &self,
        order_id: OrderId,
        payment_method: &str,
    ) -> Result<WaiterAck, OrderApiError>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// `reqwest`-backed [`OrderGateway`].
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: reqwest::Client,
    config: ApiConfig,
}

/// POST body for the bill request endpoint.
#[derive(Debug, Serialize)]
struct BillRequest<'a> {
    payment_method: &'a str,
}

impl HttpOrderApi {
    /// Creates a gateway with the request timeout from `config`.
    pub fn new(config: ApiConfig) -> Result<Self, OrderApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(HttpOrderApi { client, config })
    }

    /// Joins an endpoint path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Maps a non-success response to a typed error.
    fn check_status(status: StatusCode) -> Result<(), OrderApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(OrderApiError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }
}

impl OrderGateway for HttpOrderApi {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, OrderApiError> {
        let url = self.endpoint("/order");
        debug!(table_id = %order.table_id, items = order.items.len(), "submitting order");

        let response = self.client.post(&url).json(order).send().await?;
        Self::check_status(response.status())?;

        let receipt: OrderReceipt = response.json().await?;
        info!(order_id = %receipt.order_id, "order placed");
        Ok(receipt)
    }

    async fn call_waiter(&self, order_id: OrderId) -> Result<WaiterAck, OrderApiError> {
        let url = self.endpoint(&format!("/call_waiter/{}", order_id));
        debug!(%order_id, "calling waiter");

        let response = self.client.post(&url).send().await?;

        // The backend enforces a 3-minute cooldown between calls
        if response.status() == StatusCode::FORBIDDEN {
            return Err(OrderApiError::WaiterCooldown);
        }
        Self::check_status(response.status())?;

        Ok(response.json().await?)
    }

    async fn request_bill(
        &self,
        order_id: OrderId,
        payment_method: &str,
    ) -> Result<WaiterAck, OrderApiError> {
        let url = self.endpoint(&format!("/request_bill/{}", order_id));
        debug!(%order_id, payment_method, "requesting bill");

        let response = self
            .client
            .post(&url)
            .json(&BillRequest { payment_method })
            .send()
            .await?;
        Self::check_status(response.status())?;

        Ok(response.json().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tableside_core::money::Money;
    use tableside_core::types::ItemId;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", Money::from_minor(3000), "");
        cart.add_item(ItemId(1), "Pizza", Money::from_minor(3000), "");
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");
        cart
    }

    #[test]
    fn test_order_request_wire_shape() {
        let request = OrderRequest::from_cart(TableId(12), &sample_cart());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "table_id": 12,
                "items": [
                    {
                        "id": 1,
                        "name": "Pizza",
                        "price": 30.0,
                        "quantity": 2,
                        "totalPrice": 60.0,
                        "customization": ""
                    },
                    {
                        "id": 2,
                        "name": "Burger",
                        "price": 20.0,
                        "quantity": 1,
                        "totalPrice": 20.0,
                        "customization": "extra cheese"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_receipt_wire_shape() {
        let receipt: OrderReceipt =
            serde_json::from_value(json!({ "order_id": 88, "status": "Order placed" })).unwrap();

        assert_eq!(receipt.order_id, OrderId(88));
        assert_eq!(receipt.status, "Order placed");
    }

    #[test]
    fn test_waiter_ack_message_is_optional() {
        let bare: WaiterAck = serde_json::from_value(json!({ "status": "success" })).unwrap();
        assert_eq!(bare.status, "success");
        assert!(bare.message.is_none());

        let detailed: WaiterAck = serde_json::from_value(
            json!({ "status": "success", "message": "Bill requested" }),
        )
        .unwrap();
        assert_eq!(detailed.message.as_deref(), Some("Bill requested"));
    }

    #[test]
    fn test_bill_request_wire_shape() {
        let value = serde_json::to_value(BillRequest {
            payment_method: "card",
        })
        .unwrap();
        assert_eq!(value, json!({ "payment_method": "card" }));
    }

    #[test]
    fn test_endpoint_joining() {
        let api = HttpOrderApi::new(ApiConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(api.endpoint("/order"), "http://localhost:5000/order");

        let api = HttpOrderApi::new(ApiConfig::new("https://orders.example.com")).unwrap();
        assert_eq!(
            api.endpoint("/call_waiter/88"),
            "https://orders.example.com/call_waiter/88"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(HttpOrderApi::check_status(StatusCode::OK).is_ok());
        let err = HttpOrderApi::check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert!(matches!(
            err,
            OrderApiError::UnexpectedStatus { status: 500 }
        ));
    }
}
