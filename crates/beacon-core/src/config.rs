use crate::app_config::{AppConfig, Environment};
use crate::schools::Coordinates;
use crate::ConfigError;

pub const DEFAULT_DIRECTORY_URL: &str = "https://api.sendbeacon.com/team/schools/";
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: &str = "4000";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BEACON_ENV", "development"))?;
    let log_level = or_default("BEACON_LOG_LEVEL", "info");
    let directory_url = or_default("BEACON_DIRECTORY_URL", DEFAULT_DIRECTORY_URL);
    let request_timeout_secs = parse_u64("BEACON_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BEACON_USER_AGENT", "beacon/0.1 (school-directory)");
    let geolocation_timeout_ms =
        parse_u64("BEACON_GEOLOCATION_TIMEOUT_MS", DEFAULT_GEOLOCATION_TIMEOUT_MS)?;
    let geolocation_high_accuracy = parse_bool("BEACON_GEOLOCATION_HIGH_ACCURACY", "true")?;

    let position = match lookup("BEACON_POSITION") {
        Ok(raw) if !raw.trim().is_empty() => {
            Some(parse_position(&raw).map_err(|reason| invalid("BEACON_POSITION", reason))?)
        }
        _ => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        directory_url,
        request_timeout_secs,
        user_agent,
        geolocation_timeout_ms,
        geolocation_high_accuracy,
        position,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BEACON_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse a `"lat,lng"` pair into validated [`Coordinates`].
///
/// # Errors
///
/// Returns a human-readable reason when the pair is malformed or out of range.
pub fn parse_position(raw: &str) -> Result<Coordinates, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got '{raw}'"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("latitude: {e}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("longitude: {e}"))?;
    Coordinates::new(lat, lng).ok_or_else(|| format!("coordinates out of range: {lat},{lng}"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
