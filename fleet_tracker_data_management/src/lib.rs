use fleet_tracker_lib::{vehicle::VehicleId, ValidationError};
use thiserror::Error;

mod fleet;
mod vehicle_registry;

pub use fleet::*;
pub use vehicle_registry::*;

pub const NOT_FOUND_MESSAGE: &str = "The vehicle id given ID was not found!";

/// Licenses the vehicle service starts out with.
pub const SEED_LICENSES: [&str; 3] = ["12-AA-32", "43-BB-23", "45-CC-23"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound(VehicleId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
