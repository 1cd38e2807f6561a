//! Upstream gateway: the capability interface over the travel-commerce API
//! and its Amadeus Self-Service implementation

pub mod amadeus;
pub mod gateway;

pub use amadeus::{AmadeusClient, AmadeusConfig};
pub use gateway::{Endpoint, GatewayError, TravelGateway};
