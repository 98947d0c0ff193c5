pub mod api_error;
pub mod config;
pub mod json_body;
pub mod logging;
pub mod proximity_endpoint;
pub mod server_state;
pub mod vehicle_endpoint;
