pub mod params;
pub mod response;

pub use params::{FlightSearchParams, HotelSearchParams, TransferSearchParams, TravelClass};
pub use response::{format_response, ToolOutcome};
