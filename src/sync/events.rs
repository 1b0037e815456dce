use serde::{Deserialize, Serialize};

/// Input events the synchronization engine reacts to.
///
/// All events are processed on one logical thread, strictly in arrival
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrayEvent {
    /// Continuous horizontal scroll offset of the card tray, emitted once
    /// per rendered frame while the tray moves
    OffsetChanged { offset: f64 },
    /// Tap on a map marker, identified by its stable point-of-interest id
    MarkerTapped { index: usize },
    /// Tap on the map background (not on a marker or card)
    BackgroundTapped,
    /// Screen teardown; no command may be emitted afterwards
    Detach,
}

impl TrayEvent {
    /// The scroll offset carried by this event, if any
    pub fn offset(&self) -> Option<f64> {
        match self {
            TrayEvent::OffsetChanged { offset } => Some(*offset),
            _ => None,
        }
    }

    /// Checks if this is a discrete tap event
    pub fn is_tap(&self) -> bool {
        matches!(
            self,
            TrayEvent::MarkerTapped { .. } | TrayEvent::BackgroundTapped
        )
    }
}
