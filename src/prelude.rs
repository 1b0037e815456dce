//! Prelude module for common traymap types
//!
//! Re-exports the most commonly used types for easy importing with
//! `use traymap::prelude::*;`

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

pub use crate::data::places::{PlaceResult, PlacesResponse};

pub use crate::{Error as TrayMapError, Result};

pub use instant::Instant;
pub use std::time::Duration;
