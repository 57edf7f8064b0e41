pub mod app_config;
pub mod config;
pub mod filter;
pub mod ranking;
pub mod schools;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::filter;
pub use ranking::{flat_plane_distance, rank};
pub use schools::{Coordinates, LocationState, RankedRecord, SchoolId, SchoolRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
