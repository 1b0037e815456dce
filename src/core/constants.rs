/// Default on-screen width of one tray card, in the same linear unit as the
/// scroll offset
pub const DEFAULT_CARD_WIDTH: f64 = 300.0;

/// Default card height, used to derive the tray's hidden extent
pub const DEFAULT_CARD_HEIGHT: f64 = 220.0;

/// Default horizontal gap between adjacent cards
pub const DEFAULT_CARD_SPACING: f64 = 20.0;

/// Default leading content inset on platforms that apply one
pub const DEFAULT_LEADING_INSET: f64 = 20.0;

/// Extra margin below the tray when sliding it out of view
pub const DEFAULT_TRAY_MARGIN: f64 = 10.0;

/// An item counts as reached once scroll has progressed this fraction past
/// its leading edge
pub const DEFAULT_BIAS_FRACTION: f64 = 0.3;

/// Window the scroll offset must stay quiet before a recenter is committed
pub const DEFAULT_DEBOUNCE_MS: u64 = 10;

/// Camera recenter animation duration
pub const DEFAULT_RECENTER_DURATION_MS: u64 = 350;

/// Tray show/hide animation duration
pub const DEFAULT_TOGGLE_DURATION_MS: u64 = 500;

/// Marker scale when its card is not centered
pub const EMPHASIS_REST_SCALE: f64 = 1.0;

/// Marker scale when its card is exactly centered
pub const EMPHASIS_PEAK_SCALE: f64 = 1.5;
