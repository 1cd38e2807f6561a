use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use super::tool::{parse_params, Tool};
use crate::core::hotels::resolve_city_offers;
use crate::core::validate::TravelerCounts;
use crate::error::Result;
use crate::services::gateway::TravelGateway;
use crate::types::params::HotelSearchParams;
use crate::types::response::ToolOutcome;

const TOOL_NAME: &str = "search_hotel_offers";

/// Hotel offers search: resolves a city to candidate hotels, then prices them
pub struct HotelSearchTool {
    gateway: Arc<dyn TravelGateway>,
}

impl HotelSearchTool {
    pub fn new(gateway: Arc<dyn TravelGateway>) -> Self {
        Self { gateway }
    }
}

impl fmt::Debug for HotelSearchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotelSearchTool").finish_non_exhaustive()
    }
}

impl Tool for HotelSearchTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Search priced hotel offers in a city for a check-in/check-out date range"
    }

    fn parameters_schema(&self) -> Value {
        crate::schemas::params_schema::<HotelSearchParams>()
    }

    fn execute(
        &self,
        parameters: Value,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ToolOutcome>> + Send + '_>> {
        Box::pin(async move {
            let params: HotelSearchParams = parse_params(TOOL_NAME, parameters)?;

            TravelerCounts::adults_only(params.adults_or_default()).validate()?;

            resolve_city_offers(self.gateway.as_ref(), &params).await
        })
    }
}
