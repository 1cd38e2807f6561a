use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::core::params::ParamMap;
use crate::error::ToolError;

/// Upstream endpoints reachable through the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Flight Offers Search
    FlightOffers,
    /// Hotel List: hotels by city code
    HotelsByCity,
    /// Hotel Search: priced offers for a set of hotel IDs
    HotelOffers,
}

impl Endpoint {
    /// REST path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::FlightOffers => "/v2/shopping/flight-offers",
            Endpoint::HotelsByCity => "/v1/reference-data/locations/hotels/by-city",
            Endpoint::HotelOffers => "/v3/shopping/hotel-offers",
        }
    }
}

/// Typed failure raised by the gateway on non-success
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The upstream reported "no such resource" for the queried lookup
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Any other structured upstream failure
    #[error("upstream returned {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Token acquisition failed
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The request never produced a structured upstream response
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<GatewayError> for ToolError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(detail) => ToolError::UpstreamNotFound(detail),
            GatewayError::Api { status, detail } => ToolError::UpstreamApi { status, detail },
            GatewayError::Auth(detail) => ToolError::Internal(format!("authentication: {detail}")),
            GatewayError::Transport(detail) => ToolError::Internal(format!("transport: {detail}")),
        }
    }
}

/// Capability interface over the external travel-commerce API
///
/// Implementations own authentication and transport; callers supply only the
/// endpoint and the already-normalized parameters. The handle is long-lived
/// and safe for concurrent use across overlapping invocations.
#[async_trait]
pub trait TravelGateway: Send + Sync {
    async fn get(&self, endpoint: Endpoint, params: &ParamMap) -> Result<Value, GatewayError>;
}
