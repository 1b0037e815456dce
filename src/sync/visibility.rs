use crate::animation::easing::{lerp, EasingType};
use instant::Instant;
use std::time::Duration;

/// Logical visibility of the card tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayVisibility {
    Shown,
    Hidden,
}

impl TrayVisibility {
    pub fn toggled(self) -> TrayVisibility {
        match self {
            TrayVisibility::Shown => TrayVisibility::Hidden,
            TrayVisibility::Hidden => TrayVisibility::Shown,
        }
    }
}

/// Two-state animated show/hide controller for the card tray.
///
/// The logical state flips immediately on every toggle; the animation is a
/// presentation detail layered on top. A toggle mid-animation restarts the
/// easing from the current shown fraction, so a second tap reverses
/// smoothly instead of snapping.
#[derive(Debug, Clone)]
pub struct VisibilityToggle {
    state: TrayVisibility,
    hidden_extent: f64,
    duration: Duration,
    easing: EasingType,
    from_fraction: f64,
    started: Option<Instant>,
}

impl VisibilityToggle {
    pub fn new(hidden_extent: f64, duration: Duration) -> Self {
        Self {
            state: TrayVisibility::Shown,
            hidden_extent,
            duration,
            easing: EasingType::Smooth,
            from_fraction: 1.0,
            started: None,
        }
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn state(&self) -> TrayVisibility {
        self.state
    }

    /// Flips the logical state and retargets the animation from the current
    /// progress
    pub fn toggle(&mut self, now: Instant) {
        self.from_fraction = self.shown_fraction(now);
        self.state = self.state.toggled();
        self.started = Some(now);
    }

    /// Fraction of the tray currently shown, in [0, 1]; 1.0 means fully on
    /// screen
    pub fn shown_fraction(&self, now: Instant) -> f64 {
        let target = match self.state {
            TrayVisibility::Shown => 1.0,
            TrayVisibility::Hidden => 0.0,
        };
        let Some(started) = self.started else {
            return target;
        };
        if self.duration.is_zero() {
            return target;
        }

        let elapsed = now.saturating_duration_since(started);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        lerp(self.from_fraction, target, self.easing.apply(t))
    }

    /// Vertical translate offset for the tray: 0 when fully shown,
    /// `hidden_extent` when fully hidden
    pub fn translate_offset(&self, now: Instant) -> f64 {
        self.hidden_extent * (1.0 - self.shown_fraction(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => now.saturating_duration_since(started) < self.duration,
            None => false,
        }
    }
}
