//! Location-aware directory view: geolocation, the view-state reducer, and
//! the single-task event loop that drives it.

pub mod geolocation;
pub mod runtime;
pub mod state;

pub use geolocation::{
    GeolocationProvider, PositionError, PositionOptions, PositionSource, StaticPosition,
};
pub use runtime::{UserInput, ViewRuntime};
pub use state::{DirectoryStatus, Effect, Event, ViewState};
