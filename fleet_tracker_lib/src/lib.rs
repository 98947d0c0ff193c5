pub mod coordinate;
pub mod distance;
pub mod location_report;
pub mod validation;
pub mod vehicle;

pub use validation::{ValidationError, ValidationReason};
