//! # traymap
//!
//! An index-synchronization engine for mobile map screens that show nearby
//! points of interest both as map markers and as a horizontally scrolling
//! card tray.
//!
//! The engine keeps the two views pointed at the same item: scrolling the
//! tray produces debounced camera recenter commands, tapping a marker
//! produces a scroll-to command for the tray, and the same scroll offset
//! drives a continuous per-marker emphasis scale. Rendering, networking and
//! platform UI are external collaborators; this crate only turns events
//! into commands.

pub mod animation;
pub mod core;
pub mod data;
pub mod prelude;
pub mod sync;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{Platform, SyncConfig},
    geo::{LatLng, Region},
    poi::{PointOfInterest, PointSet},
};

pub use crate::sync::{
    commands::SyncCommand,
    controller::TrayMapController,
    emphasis::EmphasisInterpolator,
    events::TrayEvent,
    scroll::ScrollToMapSync,
    visibility::{TrayVisibility, VisibilityToggle},
};

pub use crate::animation::easing::EasingType;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TrayMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TrayMapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Error type alias for convenience
pub type Error = TrayMapError;
