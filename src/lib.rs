//! travelwise-rs: travel-search tools backed by the Amadeus Self-Service APIs
//!
//! This library exposes flight, hotel, and transfer searches as named tools
//! with JSON parameters and a single JSON response shape, built around an
//! offer-resolution core: parameter normalization, traveler-count validation,
//! a two-stage hotel pipeline, and a stable error taxonomy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use travelwise_rs::{AmadeusClient, AmadeusConfig, FlightSearchTool, ToolRouter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Arc::new(AmadeusClient::new(AmadeusConfig::from_env()?));
//!
//!     let mut router = ToolRouter::new();
//!     router.register_tool(FlightSearchTool::new(gateway));
//!
//!     let response = router
//!         .dispatch(
//!             "search_flight_offers",
//!             serde_json::json!({
//!                 "originLocationCode": "SYD",
//!                 "destinationLocationCode": "BKK",
//!                 "departureDate": "2025-05-02",
//!                 "adults": 1
//!             }),
//!         )
//!         .await;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod schemas;
pub mod services;
pub mod tools;
pub mod types;

pub use core::{ParamMap, ToolRouter, TravelerCounts};
pub use error::{Result, ToolError};
pub use services::{AmadeusClient, AmadeusConfig, Endpoint, GatewayError, TravelGateway};
pub use tools::{FlightSearchTool, HotelSearchTool, Tool, TransferSearchTool};
pub use types::{
    format_response, FlightSearchParams, HotelSearchParams, ToolOutcome, TransferSearchParams,
    TravelClass,
};

#[cfg(feature = "cli")]
pub mod cli;
