use fleet_tracker_data_management::VehicleRegistry;

pub struct ServerState {
    // The only mutable state of the vehicle service. Cloning the registry shares it.
    pub registry: VehicleRegistry,
}

impl ServerState {
    pub fn new(registry: VehicleRegistry) -> Self {
        Self { registry }
    }
}
