//! Configuration for the tray/map synchronization engine
//!
//! The bias fraction and debounce window are tuned constants whose optimal
//! values are display- and device-dependent, so they live here as
//! configuration rather than as literals in the sync code.

use crate::core::constants::*;
use std::time::Duration;

/// Host platform, as far as scroll geometry is concerned. Platforms with
/// iOS-style content insets include the leading inset in the scroll
/// coordinate system; padding-based platforms do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Whether scroll-to targets must be adjusted by the leading inset
    pub fn uses_leading_inset(self) -> bool {
        matches!(self, Platform::Ios)
    }
}

/// Tunable parameters for the synchronization engine
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Fixed on-screen width of one card
    pub item_width: f64,
    /// Horizontal gap between adjacent cards
    pub item_spacing: f64,
    /// Fraction of an item's width after which it counts as reached
    pub bias_fraction: f64,
    /// Quiet window before a pending index is committed
    pub debounce: Duration,
    /// Camera recenter animation duration
    pub recenter_duration: Duration,
    /// Tray show/hide animation duration
    pub toggle_duration: Duration,
    /// Leading content inset, applied on platforms that use one
    pub leading_inset: f64,
    /// Tray height plus margin, the distance the tray travels when hidden
    pub hidden_extent: f64,
    pub platform: Platform,
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_width(mut self, item_width: f64) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    pub fn with_bias_fraction(mut self, bias_fraction: f64) -> Self {
        self.bias_fraction = bias_fraction;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_leading_inset(mut self, leading_inset: f64) -> Self {
        self.leading_inset = leading_inset;
        self
    }

    pub fn with_hidden_extent(mut self, hidden_extent: f64) -> Self {
        self.hidden_extent = hidden_extent;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_CARD_WIDTH,
            item_spacing: DEFAULT_CARD_SPACING,
            bias_fraction: DEFAULT_BIAS_FRACTION,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            recenter_duration: Duration::from_millis(DEFAULT_RECENTER_DURATION_MS),
            toggle_duration: Duration::from_millis(DEFAULT_TOGGLE_DURATION_MS),
            leading_inset: DEFAULT_LEADING_INSET,
            hidden_extent: DEFAULT_CARD_HEIGHT + DEFAULT_TRAY_MARGIN,
            platform: Platform::Android,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SyncConfig::default();

        assert_eq!(config.item_width, 300.0);
        assert_eq!(config.bias_fraction, 0.3);
        assert_eq!(config.debounce, Duration::from_millis(10));
        assert_eq!(config.recenter_duration, Duration::from_millis(350));
        assert_eq!(config.toggle_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_builder_methods() {
        let config = SyncConfig::new()
            .with_item_width(260.0)
            .with_item_spacing(16.0)
            .with_debounce(Duration::from_millis(25))
            .with_platform(Platform::Ios);

        assert_eq!(config.item_width, 260.0);
        assert_eq!(config.item_spacing, 16.0);
        assert_eq!(config.debounce, Duration::from_millis(25));
        assert!(config.platform.uses_leading_inset());
    }

    #[test]
    fn test_platform_inset_applicability() {
        assert!(Platform::Ios.uses_leading_inset());
        assert!(!Platform::Android.uses_leading_inset());
    }
}
