use std::net::{IpAddr, SocketAddr};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const PROXIMITY_SERVICE: &str = "proximity";
pub const PROXIMITY_DEFAULT_PORT: u16 = 3050;

pub const VEHICLE_SERVICE: &str = "vehicles";
pub const VEHICLE_DEFAULT_PORT: u16 = 3000;

/// Startup settings of one service.
///
/// Sources, later ones winning: built-in defaults, an optional file named
/// after the service (`vehicles.toml`, `proximity.yaml`, ...) and environment
/// variables such as `PORT` or `LOG_FILE`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    host: IpAddr,
    port: u16,
    log_file: Option<String>,
    seed_vehicles: bool,
}

impl ServiceConfig {
    pub fn load(service: &str, default_port: u16) -> Result<Self, ConfigError> {
        Self::load_from(service, default_port, Environment::default())
    }

    pub fn load_from(service: &str, default_port: u16, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .set_default("seed_vehicles", true)?
            .add_source(File::with_name(service).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    pub fn seed_vehicles(&self) -> bool {
        self.seed_vehicles
    }
}
