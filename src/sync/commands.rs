use crate::core::geo::Region;
use std::time::Duration;

/// Commands the engine emits to its collaborators.
///
/// Animations behind these commands are fire-and-forget: a later command
/// simply supersedes the visual target, and the presentation layer is
/// responsible for retargeting smoothly.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncCommand {
    /// Recenter the camera on a point, preserving the current zoom via the
    /// region's deltas. Consumed by the camera collaborator.
    Recenter { region: Region, duration: Duration },
    /// Scroll the card tray to a horizontal offset. Consumed by the tray
    /// collaborator.
    ScrollTo { offset_x: f64 },
}

impl SyncCommand {
    pub fn is_recenter(&self) -> bool {
        matches!(self, SyncCommand::Recenter { .. })
    }

    pub fn is_scroll_to(&self) -> bool {
        matches!(self, SyncCommand::ScrollTo { .. })
    }
}
