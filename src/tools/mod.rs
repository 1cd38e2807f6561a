//! Tools module containing the tool abstraction and the travel-search tools

pub mod flights;
pub mod hotels;
pub mod tool;
pub mod transfers;

pub use flights::FlightSearchTool;
pub use hotels::HotelSearchTool;
pub use tool::{Tool, ToolRegistry};
pub use transfers::TransferSearchTool;
