use serde::{Deserialize, Serialize};

/// Default adult count for hotel searches when the caller omits one
pub const DEFAULT_HOTEL_ADULTS: u32 = 2;

/// Upper bound on hotel candidates resolved per search
pub const MAX_HOTEL_CANDIDATES: usize = 10;

/// Default result cap for flight searches
pub const DEFAULT_FLIGHT_MAX: u32 = 5;

/// Default currency code passed through to the upstream
pub const DEFAULT_CURRENCY: &str = "USD";

/// Cabin classes recognized by the flight offers endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// Upstream spelling of the cabin class
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::PremiumEconomy => "PREMIUM_ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

/// Parameters for the flight offers search tool
///
/// Field names serialize in the exact casing the Amadeus Flight Offers Search
/// API expects; optional fields left unset never reach the outgoing request.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchParams {
    /// IATA code of the departure city/airport (e.g. "SYD")
    pub origin_location_code: String,
    /// IATA code of the destination city/airport (e.g. "BKK")
    pub destination_location_code: String,
    /// Departure date in ISO 8601 format (YYYY-MM-DD)
    pub departure_date: String,
    /// Number of adult travelers (age 12+), 1-9
    pub adults: u32,
    /// Return date for round trips, ISO 8601
    #[serde(default)]
    pub return_date: Option<String>,
    /// Number of child travelers (age 2-11)
    #[serde(default)]
    pub children: Option<u32>,
    /// Number of infant travelers (age <= 2)
    #[serde(default)]
    pub infants: Option<u32>,
    /// Minimum cabin quality for the whole itinerary
    #[serde(default)]
    pub travel_class: Option<TravelClass>,
    /// Comma-separated IATA airline codes to include
    #[serde(default)]
    pub included_airline_codes: Option<String>,
    /// Comma-separated IATA airline codes to exclude
    #[serde(default)]
    pub excluded_airline_codes: Option<String>,
    /// Restrict results to flights with no stops
    #[serde(default)]
    pub non_stop: Option<bool>,
    /// ISO 4217 currency code for prices
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Maximum price per traveler, no decimals
    #[serde(default)]
    pub max_price: Option<u32>,
    /// Maximum number of offers to return
    #[serde(default)]
    pub max: Option<u32>,
}

/// Parameters for the hotel offers search tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchParams {
    /// IATA city code to search in (e.g. "PAR")
    pub city_code: String,
    /// Check-in date, ISO 8601 (YYYY-MM-DD)
    pub check_in_date: String,
    /// Check-out date, ISO 8601 (YYYY-MM-DD)
    pub check_out_date: String,
    /// Number of adult guests per room, defaults to 2
    #[serde(default)]
    pub adults: Option<u32>,
    /// Search radius around the city center, in kilometers
    #[serde(default)]
    pub radius: Option<u32>,
    /// Maximum number of hotels to price, defaults to 10 (capped at 10)
    #[serde(default)]
    pub max: Option<usize>,
    /// ISO 4217 currency code for prices, defaults to USD
    #[serde(default)]
    pub currency: Option<String>,
}

impl HotelSearchParams {
    /// Adult count with the documented default applied
    pub fn adults_or_default(&self) -> u32 {
        self.adults.unwrap_or(DEFAULT_HOTEL_ADULTS)
    }

    /// Candidate bound with the documented default and hard cap applied
    pub fn candidate_bound(&self) -> usize {
        self.max
            .unwrap_or(MAX_HOTEL_CANDIDATES)
            .min(MAX_HOTEL_CANDIDATES)
            .max(1)
    }

    /// Currency with the documented default applied
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

/// Parameters for the car hire / transfer search tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferSearchParams {
    /// Pickup location (address, airport code, or landmark)
    pub start_location: String,
    /// Drop-off location (address, airport code, or landmark)
    pub end_location: String,
    /// Transfer date, ISO 8601 (YYYY-MM-DD)
    #[serde(default)]
    pub transfer_date: Option<String>,
    /// Number of passengers
    #[serde(default)]
    pub passengers: Option<u32>,
    /// ISO 4217 currency code for the estimate
    #[serde(default)]
    pub currency: Option<String>,
}
