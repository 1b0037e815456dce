use crate::{
    core::{config::SyncConfig, geo::Region, poi::PointSet},
    sync::commands::SyncCommand,
};
use instant::Instant;
use std::time::Duration;

/// Owned debounce timer handle with cancel-and-restart semantics.
///
/// The deadline lives in the owner's state rather than in a per-call
/// closure, so restarting always cancels the previous window and at most
/// one window is pending at any time. Cancelling a timer that already
/// fired is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending window and starts a new one
    pub fn restart(&mut self, now: Instant, window: Duration) {
        self.deadline = Some(now + window);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once per armed window, when `now` has reached the
    /// deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Maps the tray's continuous scroll offset to discrete, debounced camera
/// recenter commands, and marker taps to immediate tray scroll-to commands.
///
/// `active_index` is the last index the camera was actually recentered on;
/// it is meaningless while the point set is empty. A candidate index only
/// becomes active once the offset signal has been quiet for the debounce
/// window, collapsing the per-frame update burst of a drag into a single
/// decision.
#[derive(Debug)]
pub struct ScrollToMapSync {
    config: SyncConfig,
    active_index: usize,
    pending_index: Option<usize>,
    timer: DebounceTimer,
    attached: bool,
}

impl ScrollToMapSync {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            active_index: 0,
            pending_index: None,
            timer: DebounceTimer::new(),
            attached: true,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn pending_index(&self) -> Option<usize> {
        self.pending_index
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Discrete index a raw offset resolves to, clamped to the point set.
    /// Returns None for an empty set.
    pub fn candidate_index(&self, raw_offset: f64, points: &PointSet) -> Option<usize> {
        let last = points.last_index()?;
        let raw = (raw_offset / self.config.item_width + self.config.bias_fraction).floor();
        if raw <= 0.0 {
            Some(0)
        } else {
            Some((raw as usize).min(last))
        }
    }

    /// Feeds one offset sample. Stores the candidate as the pending index
    /// and restarts the debounce window; the decision is committed by a
    /// later `poll`.
    pub fn on_offset_changed(&mut self, raw_offset: f64, points: &PointSet, now: Instant) {
        if !self.attached {
            return;
        }
        let Some(candidate) = self.candidate_index(raw_offset, points) else {
            return;
        };
        self.pending_index = Some(candidate);
        self.timer.restart(now, self.config.debounce);
    }

    /// Fires the debounce timer if its window has elapsed. Emits a recenter
    /// command when the pending index differs from the active one; a pending
    /// index the point set no longer covers is dropped silently.
    pub fn poll(&mut self, points: &PointSet, region: &Region, now: Instant) -> Option<SyncCommand> {
        if !self.attached || !self.timer.fire(now) {
            return None;
        }
        let pending = self.pending_index.take()?;
        if pending == self.active_index {
            return None;
        }
        let Some(point) = points.point(pending) else {
            log::debug!("dropping recenter: index {pending} no longer in point set");
            return None;
        };

        self.active_index = pending;
        Some(SyncCommand::Recenter {
            region: region.with_center(point.coordinate),
            duration: self.config.recenter_duration,
        })
    }

    /// Marker tap: emits an immediate scroll-to command for the tray.
    ///
    /// Bypasses the debounce pipeline and does not touch `active_index`;
    /// the offset events produced by the resulting scroll converge on the
    /// same index naturally.
    pub fn on_marker_selected(&self, index: usize, points: &PointSet) -> Option<SyncCommand> {
        if !self.attached {
            return None;
        }
        if points.point(index).is_none() {
            log::warn!("ignoring tap on marker {index}: not in point set");
            return None;
        }

        let mut offset_x = index as f64 * self.config.item_width
            + index as f64 * self.config.item_spacing;
        if self.config.platform.uses_leading_inset() {
            offset_x -= self.config.leading_inset;
        }
        Some(SyncCommand::ScrollTo { offset_x })
    }

    /// Discards index state referencing a previous point-set generation
    pub fn reset(&mut self) {
        self.active_index = 0;
        self.pending_index = None;
        self.timer.cancel();
    }

    /// Teardown: cancels the pending timer and suppresses all further
    /// emissions
    pub fn detach(&mut self) {
        self.timer.cancel();
        self.pending_index = None;
        self.attached = false;
        log::debug!("scroll sync detached");
    }
}
