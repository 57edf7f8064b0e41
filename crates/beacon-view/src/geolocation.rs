//! Acquisition of the user's current position.
//!
//! A [`PositionSource`] stands in for the platform's "current position"
//! capability. [`GeolocationProvider`] bounds each request with a timeout and
//! folds every failure into [`LocationState::Unavailable`].

use std::future::Future;
use std::time::Duration;

use beacon_core::{AppConfig, Coordinates, LocationState};
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(4000);

/// Options passed along with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PositionOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enable_high_accuracy: config.geolocation_high_accuracy,
            timeout: Duration::from_millis(config.geolocation_timeout_ms),
        }
    }
}

/// Failure reported by a position source, using the platform error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error({code}): {message}")]
pub struct PositionError {
    pub code: u16,
    pub message: String,
}

impl PositionError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    #[must_use]
    pub fn permission_denied() -> Self {
        Self {
            code: Self::PERMISSION_DENIED,
            message: "User denied Geolocation".to_string(),
        }
    }

    #[must_use]
    pub fn position_unavailable(message: impl Into<String>) -> Self {
        Self {
            code: Self::POSITION_UNAVAILABLE,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self {
            code: Self::TIMEOUT,
            message: "Timeout expired".to_string(),
        }
    }
}

/// The platform capability that answers "where am I".
pub trait PositionSource {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, PositionError>>;
}

/// A source that answers immediately with a fixed outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticPosition {
    Fixed(Coordinates),
    Denied,
}

impl PositionSource for StaticPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        match self {
            StaticPosition::Fixed(coords) => Ok(*coords),
            StaticPosition::Denied => Err(PositionError::permission_denied()),
        }
    }
}

/// Wraps an optional [`PositionSource`]; `None` means the capability is absent.
pub struct GeolocationProvider<P> {
    source: Option<P>,
    options: PositionOptions,
}

impl<P: PositionSource> GeolocationProvider<P> {
    #[must_use]
    pub fn new(source: Option<P>, options: PositionOptions) -> Self {
        Self { source, options }
    }

    #[must_use]
    pub fn source(&self) -> Option<&P> {
        self.source.as_ref()
    }

    /// Issues one position request and resolves it to a terminal state.
    ///
    /// Never fails: absence, errors, and timeouts all yield
    /// [`LocationState::Unavailable`] and are logged.
    pub async fn request_location(&self) -> LocationState {
        let Some(source) = &self.source else {
            tracing::debug!("geolocation capability absent");
            return LocationState::Unavailable;
        };

        let request = source.current_position(&self.options);
        let result = match tokio::time::timeout(self.options.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(PositionError::timeout()),
        };

        match result {
            Ok(coords) => {
                tracing::debug!("geolocation resolved");
                LocationState::Available(coords)
            }
            Err(err) => {
                tracing::warn!(code = err.code, message = %err.message, "geolocation request failed");
                LocationState::Unavailable
            }
        }
    }
}
