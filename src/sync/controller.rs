use crate::{
    core::{config::SyncConfig, geo::Region, poi::{PointOfInterest, PointSet}},
    sync::{
        commands::SyncCommand,
        emphasis::EmphasisInterpolator,
        events::TrayEvent,
        scroll::ScrollToMapSync,
        visibility::{TrayVisibility, VisibilityToggle},
    },
};
use instant::Instant;

/// Single-threaded event router composing the whole synchronization engine
/// for one map screen.
///
/// Events are handled strictly in arrival order; the host feeds offset and
/// tap events into `handle_event` and calls `poll` once per frame to let
/// the debounce timer fire. Commands are returned to the caller, which
/// forwards them to the camera and tray collaborators.
pub struct TrayMapController {
    points: PointSet,
    region: Region,
    scroll: ScrollToMapSync,
    emphasis: EmphasisInterpolator,
    visibility: VisibilityToggle,
    last_offset: f64,
    attached: bool,
}

impl TrayMapController {
    pub fn new(config: SyncConfig, initial_region: Region) -> Self {
        let emphasis = EmphasisInterpolator::new(&config);
        let visibility = VisibilityToggle::new(config.hidden_extent, config.toggle_duration);
        Self {
            points: PointSet::new(),
            region: initial_region,
            scroll: ScrollToMapSync::new(config),
            emphasis,
            visibility,
            last_offset: 0.0,
            attached: true,
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn active_index(&self) -> usize {
        self.scroll.active_index()
    }

    pub fn tray_visibility(&self) -> TrayVisibility {
        self.visibility.state()
    }

    /// Camera collaborator reports its current region here, so recenter
    /// commands preserve the live zoom level
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Installs a fresh search-result batch, replacing all points.
    ///
    /// Index state from the previous generation is discarded: any pending
    /// recenter would target an index that is no longer meaningful.
    pub fn replace_points(&mut self, points: Vec<PointOfInterest>) -> usize {
        let kept = self.points.replace_all(points);
        self.scroll.reset();
        kept
    }

    /// Processes one event, returning the commands it produced immediately.
    /// Debounced recenter commands surface later through `poll`.
    pub fn handle_event(&mut self, event: TrayEvent, now: Instant) -> Vec<SyncCommand> {
        if !self.attached {
            return Vec::new();
        }

        let mut commands = Vec::new();
        match event {
            TrayEvent::OffsetChanged { offset } => {
                self.last_offset = offset;
                self.scroll.on_offset_changed(offset, &self.points, now);
            }
            TrayEvent::MarkerTapped { index } => {
                if let Some(command) = self.scroll.on_marker_selected(index, &self.points) {
                    commands.push(command);
                }
            }
            TrayEvent::BackgroundTapped => {
                self.visibility.toggle(now);
            }
            TrayEvent::Detach => {
                self.detach();
            }
        }
        commands
    }

    /// Fires the debounce timer if due. Call once per frame.
    pub fn poll(&mut self, now: Instant) -> Option<SyncCommand> {
        if !self.attached {
            return None;
        }
        self.scroll.poll(&self.points, &self.region, now)
    }

    /// Convenience wrapper over `handle_event` using the current time
    pub fn handle_event_now(&mut self, event: TrayEvent) -> Vec<SyncCommand> {
        self.handle_event(event, Instant::now())
    }

    /// Convenience wrapper over `poll` using the current time
    pub fn poll_now(&mut self) -> Option<SyncCommand> {
        self.poll(Instant::now())
    }

    /// Emphasis scale for every marker at the current scroll offset; all
    /// rest-scale while the tray is hidden
    pub fn marker_scales(&self) -> Vec<f64> {
        self.emphasis
            .scales(self.last_offset, self.points.len(), self.visibility.state())
    }

    /// Vertical translate offset of the tray at `now`
    pub fn tray_offset(&self, now: Instant) -> f64 {
        self.visibility.translate_offset(now)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Teardown: cancels the pending debounce timer and detaches the offset
    /// listener; no command is emitted afterwards
    pub fn detach(&mut self) {
        self.scroll.detach();
        self.attached = false;
        log::debug!("tray map controller detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use std::time::Duration;

    fn sample_points(n: usize) -> Vec<PointOfInterest> {
        (0..n)
            .map(|i| {
                PointOfInterest::new(
                    i,
                    LatLng::new(i as f64, -(i as f64)),
                    format!("poi {i}"),
                    "street".into(),
                )
            })
            .collect()
    }

    fn controller() -> TrayMapController {
        let mut controller = TrayMapController::new(
            SyncConfig::default().with_item_width(300.0),
            Region::new(LatLng::new(0.0, 0.0), 0.04, 0.05),
        );
        controller.replace_points(sample_points(3));
        controller
    }

    #[test]
    fn test_offset_event_drives_debounced_recenter() {
        let mut controller = controller();
        let t0 = Instant::now();

        assert!(controller
            .handle_event(TrayEvent::OffsetChanged { offset: 330.0 }, t0)
            .is_empty());
        assert_eq!(controller.poll(t0), None);

        let command = controller.poll(t0 + Duration::from_millis(10));
        assert!(matches!(command, Some(SyncCommand::Recenter { .. })));
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn test_marker_tap_emits_immediate_scroll_to() {
        let mut controller = controller();
        let commands =
            controller.handle_event(TrayEvent::MarkerTapped { index: 2 }, Instant::now());

        assert_eq!(commands.len(), 1);
        assert!(commands[0].is_scroll_to());
    }

    #[test]
    fn test_background_tap_toggles_tray_and_gates_emphasis() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.handle_event(TrayEvent::OffsetChanged { offset: 300.0 }, t0);
        assert_eq!(controller.marker_scales(), vec![1.0, 1.5, 1.0]);

        controller.handle_event(TrayEvent::BackgroundTapped, t0);
        assert_eq!(controller.tray_visibility(), TrayVisibility::Hidden);
        assert_eq!(controller.marker_scales(), vec![1.0, 1.0, 1.0]);

        controller.handle_event(TrayEvent::BackgroundTapped, t0 + Duration::from_millis(100));
        assert_eq!(controller.tray_visibility(), TrayVisibility::Shown);
    }

    #[test]
    fn test_replace_points_discards_pending_state() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.handle_event(TrayEvent::OffsetChanged { offset: 660.0 }, t0);
        controller.replace_points(sample_points(1));

        assert_eq!(controller.poll(t0 + Duration::from_secs(1)), None);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn test_detach_suppresses_everything() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.handle_event(TrayEvent::OffsetChanged { offset: 330.0 }, t0);
        controller.handle_event(TrayEvent::Detach, t0);

        assert!(!controller.is_attached());
        assert_eq!(controller.poll(t0 + Duration::from_secs(1)), None);
        assert!(controller
            .handle_event(TrayEvent::MarkerTapped { index: 1 }, t0)
            .is_empty());
    }
}
