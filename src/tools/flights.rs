use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use super::tool::{parse_params, Tool};
use crate::core::params::ParamMap;
use crate::core::validate::TravelerCounts;
use crate::error::Result;
use crate::services::gateway::{Endpoint, TravelGateway};
use crate::types::params::{FlightSearchParams, DEFAULT_FLIGHT_MAX};
use crate::types::response::ToolOutcome;

const TOOL_NAME: &str = "search_flight_offers";

/// Flight offers search against the Amadeus Flight Offers Search API
pub struct FlightSearchTool {
    gateway: Arc<dyn TravelGateway>,
}

impl FlightSearchTool {
    pub fn new(gateway: Arc<dyn TravelGateway>) -> Self {
        Self { gateway }
    }
}

impl fmt::Debug for FlightSearchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightSearchTool").finish_non_exhaustive()
    }
}

/// Build the minimal outgoing request from the caller's sparse parameters
fn build_request(params: &FlightSearchParams) -> ParamMap {
    let mut request = ParamMap::new();
    request
        .set("originLocationCode", params.origin_location_code.as_str())
        .set(
            "destinationLocationCode",
            params.destination_location_code.as_str(),
        )
        .set("departureDate", params.departure_date.as_str())
        .set("adults", params.adults)
        .set("max", params.max.unwrap_or(DEFAULT_FLIGHT_MAX));

    request
        .set_opt_str("returnDate", params.return_date.as_deref())
        .set_opt("children", params.children)
        .set_opt("infants", params.infants)
        .set_opt("travelClass", params.travel_class.map(|class| class.as_str()))
        .set_opt_str(
            "includedAirlineCodes",
            params.included_airline_codes.as_deref(),
        )
        .set_opt_str(
            "excludedAirlineCodes",
            params.excluded_airline_codes.as_deref(),
        )
        .set_opt("nonStop", params.non_stop)
        .set_opt_str("currencyCode", params.currency_code.as_deref())
        .set_opt("maxPrice", params.max_price);

    request
}

impl Tool for FlightSearchTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Search flight offers between two locations for given dates and travelers"
    }

    fn parameters_schema(&self) -> Value {
        crate::schemas::params_schema::<FlightSearchParams>()
    }

    fn execute(
        &self,
        parameters: Value,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ToolOutcome>> + Send + '_>> {
        Box::pin(async move {
            let params: FlightSearchParams = parse_params(TOOL_NAME, parameters)?;

            TravelerCounts::new(params.adults, params.children, params.infants).validate()?;

            let request = build_request(&params);
            let payload = self.gateway.get(Endpoint::FlightOffers, &request).await?;

            let is_empty = payload
                .get("data")
                .and_then(Value::as_array)
                .map(|data| data.is_empty())
                .unwrap_or(false);

            if is_empty {
                return Ok(ToolOutcome::Empty(format!(
                    "No flight offers found from {} to {} on {}",
                    params.origin_location_code,
                    params.destination_location_code,
                    params.departure_date
                )));
            }

            Ok(ToolOutcome::Data(payload))
        })
    }
}
