pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod weather;
