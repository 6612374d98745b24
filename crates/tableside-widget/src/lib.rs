//! # tableside-widget: Cart Widget Runtime
//!
//! The runtime half of the Tableside table-ordering widget: a controller
//! that owns cart state for one page view, the traits it consumes from its
//! host, and the HTTP gateway that submits finished orders.
//!
//! ## Module Organization
//! ```text
//! tableside_widget/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── controller.rs   ◄─── CartController: add/remove/render/toggle/submit
//! ├── ports.rs        ◄─── HostPage trait (the injected page surface)
//! ├── api.rs          ◄─── OrderGateway trait + HttpOrderApi + wire types
//! ├── config.rs       ◄─── ApiConfig (base URL, timeout, env overrides)
//! ├── error.rs        ◄─── OrderApiError / WidgetError
//! └── telemetry.rs    ◄─── tracing-subscriber setup for hosts
//! ```
//!
//! ## Wiring It Up
//! ```rust,ignore
//! use tableside_widget::{ApiConfig, CartController, HttpOrderApi};
//!
//! tableside_widget::telemetry::init_tracing();
//!
//! let gateway = HttpOrderApi::new(ApiConfig::from_env())?;
//! let mut widget = CartController::new(gateway, page);
//!
//! widget.add_item(&menu_item);          // tap on a dish
//! widget.toggle_visibility();           // tap on the cart toggle
//! widget.submit_order().await?;         // tap on "place order"
//! ```
//!
//! The host supplies `page`, an implementation of
//! [`ports::HostPage`] - everything the widget needs from the surrounding
//! page (the rendering sink, the confirmation dialog, the location path).
//! Tests drive the controller with an in-memory page and gateway; no UI and
//! no network involved.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod telemetry;

pub use api::{HttpOrderApi, OrderGateway, OrderLine, OrderReceipt, OrderRequest, WaiterAck};
pub use config::ApiConfig;
pub use controller::{CartController, SubmitOutcome, ATTENTION_PULSE};
pub use error::{OrderApiError, WidgetError};
pub use ports::HostPage;
