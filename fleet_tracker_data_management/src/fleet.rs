use fleet_tracker_lib::{
    location_report::LocationReport,
    vehicle::{License, Vehicle, VehicleId},
    ValidationError,
};

use crate::{RegistryError, SEED_LICENSES};

/// The vehicles known to the service, in creation order.
///
/// Ids come from a counter that only ever grows, so an id freed by a delete is
/// never handed out again.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    next_id: VehicleId,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            next_id: 1,
        }
    }

    /// A fleet holding the three vehicles the service boots with.
    pub fn seeded() -> Result<Self, ValidationError> {
        let mut fleet = Self::new();
        for license in SEED_LICENSES {
            fleet.create(License::new(license)?);
        }
        Ok(fleet)
    }

    pub fn list_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Result<&Vehicle, RegistryError> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    fn get_mut(&mut self, id: VehicleId) -> Result<&mut Vehicle, RegistryError> {
        self.vehicles
            .iter_mut()
            .find(|vehicle| vehicle.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn create(&mut self, license: License) -> &Vehicle {
        let id = self.next_id;
        self.next_id += 1;

        self.vehicles.push(Vehicle::new(id, license));
        &self.vehicles[self.vehicles.len() - 1]
    }

    pub fn update_license(&mut self, id: VehicleId, license: License) -> Result<&Vehicle, RegistryError> {
        let vehicle = self.get_mut(id)?;
        vehicle.license = license;
        Ok(&*vehicle)
    }

    pub fn notify(&mut self, id: VehicleId, report: LocationReport) -> Result<&Vehicle, RegistryError> {
        let vehicle = self.get_mut(id)?;
        vehicle.record_location(report);
        Ok(&*vehicle)
    }

    pub fn delete(&mut self, id: VehicleId) -> Result<Vehicle, RegistryError> {
        let index = self
            .vehicles
            .iter()
            .position(|vehicle| vehicle.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        Ok(self.vehicles.remove(index))
    }
}
