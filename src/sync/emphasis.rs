use crate::{
    animation::easing::lerp,
    core::{
        config::SyncConfig,
        constants::{EMPHASIS_PEAK_SCALE, EMPHASIS_REST_SCALE},
    },
    sync::visibility::TrayVisibility,
};

/// Produces the continuous per-marker emphasis scale as a function of the
/// tray's scroll offset.
///
/// For item `i` the breakpoints `(i-1)·w`, `i·w`, `(i+1)·w` map to scales
/// `1.0, 1.5, 1.0`; between breakpoints the scale is linearly interpolated
/// and outside them it clamps to the rest scale. The mapping is a pure
/// function of `(raw_offset, index)`, so it never drifts from the scroll
/// position even when frames are dropped.
#[derive(Debug, Clone)]
pub struct EmphasisInterpolator {
    item_width: f64,
    rest_scale: f64,
    peak_scale: f64,
}

impl EmphasisInterpolator {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            item_width: config.item_width,
            rest_scale: EMPHASIS_REST_SCALE,
            peak_scale: EMPHASIS_PEAK_SCALE,
        }
    }

    /// Scale for the marker at `index`, ignoring tray visibility
    pub fn scale_for(&self, raw_offset: f64, index: usize) -> f64 {
        let center = index as f64 * self.item_width;
        if raw_offset <= center {
            // Rising edge from the previous item's breakpoint
            let t = ((raw_offset - (center - self.item_width)) / self.item_width).clamp(0.0, 1.0);
            lerp(self.rest_scale, self.peak_scale, t)
        } else {
            // Falling edge toward the next item's breakpoint
            let t = ((raw_offset - center) / self.item_width).clamp(0.0, 1.0);
            lerp(self.peak_scale, self.rest_scale, t)
        }
    }

    /// Scale for the marker at `index`, forced to the rest scale while the
    /// tray is hidden
    pub fn visible_scale_for(
        &self,
        raw_offset: f64,
        index: usize,
        visibility: TrayVisibility,
    ) -> f64 {
        match visibility {
            TrayVisibility::Shown => self.scale_for(raw_offset, index),
            TrayVisibility::Hidden => self.rest_scale,
        }
    }

    /// Scales for every marker in a set of `len` items
    pub fn scales(&self, raw_offset: f64, len: usize, visibility: TrayVisibility) -> Vec<f64> {
        (0..len)
            .map(|index| self.visible_scale_for(raw_offset, index, visibility))
            .collect()
    }
}
