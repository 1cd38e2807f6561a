pub mod hotels;
pub mod params;
pub mod router;
pub mod validate;

pub use params::ParamMap;
pub use router::ToolRouter;
pub use validate::TravelerCounts;
