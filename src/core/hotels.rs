use serde_json::Value;
use tracing::debug;

use crate::core::params::ParamMap;
use crate::error::{Result, ToolError};
use crate::services::gateway::{Endpoint, GatewayError, TravelGateway};
use crate::types::params::HotelSearchParams;
use crate::types::response::ToolOutcome;

/// Resolve a city code and date range into priced hotel offers.
///
/// The upstream has no single endpoint from "city" to "priced offers", so
/// this runs two dependent calls: the city lookup yields candidate hotel
/// IDs, and one batched offers call prices all retained IDs at once. The
/// caller's `max` bound applies to the candidate list, not the offer count;
/// upstream may price fewer hotels than were queried.
pub async fn resolve_city_offers(
    gateway: &dyn TravelGateway,
    request: &HotelSearchParams,
) -> Result<ToolOutcome> {
    let city = request.city_code.as_str();

    let mut lookup_params = ParamMap::new();
    lookup_params.set("cityCode", city);
    lookup_params.set_opt("radius", request.radius);

    let lookup = match gateway.get(Endpoint::HotelsByCity, &lookup_params).await {
        Ok(payload) => payload,
        Err(GatewayError::NotFound(_)) => {
            return Err(ToolError::UpstreamNotFound(format!(
                "No hotels found in city code: {city}"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    let candidates = lookup
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if candidates.is_empty() {
        return Err(ToolError::UpstreamNotFound(format!(
            "No hotels found in city code: {city}"
        )));
    }

    // Truncate before extracting IDs: the bound limits how many candidates
    // are priced, in upstream order, with no re-ranking.
    let bound = request.candidate_bound();
    let truncated: Vec<&Value> = candidates.iter().take(bound).collect();

    let hotel_ids: Vec<&str> = truncated
        .iter()
        .filter_map(|candidate| candidate.get("hotelId").and_then(Value::as_str))
        .filter(|id| !id.is_empty())
        .collect();

    if hotel_ids.is_empty() {
        return Err(ToolError::UpstreamNotFound(format!(
            "Found {} hotels in city code: {city}, but none had usable hotel IDs",
            truncated.len()
        )));
    }

    debug!(
        city,
        candidates = candidates.len(),
        priced = hotel_ids.len(),
        "resolved hotel candidates"
    );

    let mut offer_params = ParamMap::new();
    offer_params
        .set("hotelIds", hotel_ids.join(","))
        .set("checkInDate", request.check_in_date.as_str())
        .set("checkOutDate", request.check_out_date.as_str())
        .set("adults", request.adults_or_default())
        .set("currency", request.currency_or_default());

    let offers = gateway.get(Endpoint::HotelOffers, &offer_params).await?;

    let has_offers = offers
        .get("data")
        .and_then(Value::as_array)
        .map(|data| !data.is_empty())
        .unwrap_or(false);

    if !has_offers {
        // Valid, successful-but-empty outcome: the hotels exist but nothing
        // is bookable for the requested dates.
        return Ok(ToolOutcome::Empty(format!(
            "Hotels were found in city code: {city}, but none have available offers for the requested dates"
        )));
    }

    Ok(ToolOutcome::Data(offers))
}
