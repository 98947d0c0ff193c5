use std::sync::Arc;

use fleet_tracker_lib::{
    location_report::LocationReport,
    vehicle::{License, Vehicle, VehicleId},
};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{Fleet, RegistryError};

/// Shared handle to the in-memory fleet.
///
/// Every operation holds the lock for its whole lookup, validate, mutate
/// sequence, so only one mutation is ever in flight. Lookups run before body
/// validation: an unknown id is reported as not found even when the body is
/// also invalid.
#[derive(Clone, Default)]
pub struct VehicleRegistry {
    fleet: Arc<Mutex<Fleet>>,
}

impl VehicleRegistry {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet: Arc::new(Mutex::new(fleet)),
        }
    }

    pub fn seeded() -> Result<Self, RegistryError> {
        Ok(Self::new(Fleet::seeded()?))
    }

    pub async fn list_all(&self) -> Vec<Vehicle> {
        self.fleet.lock().await.list_all().to_vec()
    }

    pub async fn get_by_id(&self, id: VehicleId) -> Result<Vehicle, RegistryError> {
        self.fleet.lock().await.get(id).cloned()
    }

    pub async fn create(&self, body: &Value) -> Result<Vehicle, RegistryError> {
        let license = License::from_json(body)?;

        let mut fleet = self.fleet.lock().await;
        let vehicle = fleet.create(license).clone();
        tracing::info!("Created vehicle {} with license {}", vehicle.id, vehicle.license.as_str());

        Ok(vehicle)
    }

    pub async fn update_license(&self, id: VehicleId, body: &Value) -> Result<Vehicle, RegistryError> {
        let mut fleet = self.fleet.lock().await;
        fleet.get(id)?;
        let license = License::from_json(body)?;

        let vehicle = fleet.update_license(id, license)?.clone();
        tracing::info!("Vehicle {} now has license {}", id, vehicle.license.as_str());

        Ok(vehicle)
    }

    pub async fn delete(&self, id: VehicleId) -> Result<Vehicle, RegistryError> {
        let vehicle = self.fleet.lock().await.delete(id)?;
        tracing::info!("Deleted vehicle {}", id);
        Ok(vehicle)
    }

    pub async fn notify(&self, id: VehicleId, body: &Value) -> Result<Vehicle, RegistryError> {
        let mut fleet = self.fleet.lock().await;
        fleet.get(id)?;
        let report = LocationReport::from_json(body)?;

        let vehicle = fleet.notify(id, report)?.clone();
        if let Some(latest) = vehicle.locations.latest() {
            tracing::debug!(
                "Vehicle {} at ({}, {}) on {}, {} locations kept",
                id,
                latest.position.latitude(),
                latest.position.longitude(),
                latest.timestamp,
                vehicle.locations.len()
            );
        }

        Ok(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_tracker_lib::{ValidationError, ValidationReason};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn notification(day: u32) -> Value {
        json!({ "latitude": 55.0, "longitude": 12.0, "timestamp": format!("2024-03-{day:02}") })
    }

    #[tokio::test]
    async fn create_checks_license_length() {
        let registry = VehicleRegistry::default();

        let rejected = registry.create(&json!({ "license": "1234567" })).await;
        let created = registry.create(&json!({ "license": "12345678" })).await.unwrap();

        assert_eq!(rejected, Err(RegistryError::Validation(ValidationError::new("license", ValidationReason::TooShort(8)))));
        assert_eq!(created.id, 1);
        assert_eq!(registry.list_all().await, vec![created]);
    }

    #[tokio::test]
    async fn not_found_beats_invalid_license() {
        let registry = VehicleRegistry::seeded().unwrap();

        let result = registry.update_license(42, &json!({ "license": "short" })).await;

        assert_eq!(result, Err(RegistryError::NotFound(42)));
    }

    #[tokio::test]
    async fn not_found_beats_invalid_notification() {
        let registry = VehicleRegistry::seeded().unwrap();

        let result = registry.notify(42, &json!({ "latitude": 500 })).await;

        assert_eq!(result, Err(RegistryError::NotFound(42)));
    }

    #[tokio::test]
    async fn invalid_update_leaves_vehicle_untouched() {
        let registry = VehicleRegistry::seeded().unwrap();
        let before = registry.get_by_id(1).await.unwrap();

        let result = registry.update_license(1, &json!({ "license": "123456789" })).await;

        assert!(matches!(result, Err(RegistryError::Validation(_))));
        assert_eq!(registry.get_by_id(1).await, Ok(before));
    }

    #[tokio::test]
    async fn delete_then_fetch_is_not_found() {
        let registry = VehicleRegistry::seeded().unwrap();

        let deleted = registry.delete(3).await.unwrap();

        assert_eq!(deleted.license.as_str(), "45-CC-23");
        assert_eq!(registry.get_by_id(3).await, Err(RegistryError::NotFound(3)));
    }

    #[tokio::test]
    async fn keeps_the_ten_latest_reports() {
        let registry = VehicleRegistry::seeded().unwrap();
        for day in 1..=11 {
            registry.notify(2, &notification(day)).await.unwrap();
        }

        let vehicle = registry.get_by_id(2).await.unwrap();
        let days: Vec<_> = vehicle.locations.iter().map(|report| report.timestamp.format("%d").to_string()).collect();

        assert_eq!(days, (2..=11).rev().map(|day| format!("{day:02}")).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let registry = VehicleRegistry::default();
        let handle = registry.clone();

        handle.create(&json!({ "license": "SHARED-1" })).await.unwrap();

        assert_eq!(registry.list_all().await.len(), 1);
    }
}
