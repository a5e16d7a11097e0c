//! Fixed tunables for every controller.
//!
//! The engine exposes no configuration surface: thresholds, margins,
//! durations, and clamp values are compile-time constants, and the marker
//! classes are semantic hooks whose appearance is owned by the host's CSS.

/// Reveal targets trigger once 6% of the element is visible.
pub const REVEAL_THRESHOLD: f32 = 0.06;
/// Bottom of the reveal observation box is pulled up by 32px so elements
/// trigger slightly before full entry.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = -32.0;

/// Stagger containers trigger at a coarser 4% visibility.
pub const STAGGER_THRESHOLD: f32 = 0.04;
pub const STAGGER_BOTTOM_MARGIN_PX: f32 = -16.0;

/// Counters start once half of the element is visible.
pub const COUNTER_THRESHOLD: f32 = 0.5;
/// Count-up duration in seconds.
pub const COUNTER_DURATION: f32 = 1.2;

/// Scrollspy activation band: 80px below the viewport top down to 45% of the
/// viewport height (the bottom 55% is excluded).
pub const SPY_TOP_MARGIN_PX: f32 = -80.0;
pub const SPY_BOTTOM_MARGIN_FRACTION: f32 = -0.55;

/// Hero parallax: shift = min(scroll_y * FACTOR, MAX) pixels.
pub const PARALLAX_FACTOR: f32 = 0.05;
pub const PARALLAX_MAX_PX: f32 = 8.0;

/// Card entrance: opacity 0 -> 1, scale CARD_ENTER_SCALE_FROM -> 1.
pub const CARD_ENTER_MS: f32 = 220.0;
pub const CARD_ENTER_SCALE_FROM: f32 = 0.97;
/// Card exit fade before the display state is removed.
pub const CARD_EXIT_MS: f32 = 140.0;

/// Tilt rotation ceiling in degrees and forward lift in pixels.
pub const TILT_STRENGTH_DEG: f32 = 7.0;
pub const TILT_LIFT_PX: f32 = 6.0;
/// Fast linear follow while the pointer is tracking.
pub const TILT_FOLLOW_MS: f32 = 80.0;
/// Slow settle back to neutral on pointer leave.
pub const TILT_SETTLE_MS: f32 = 500.0;

/// Marker class applied by reveal and stagger triggers; never removed.
pub const CLASS_VISIBLE: &str = "is-visible";
/// Marker class for the active nav link and the active filter control.
pub const CLASS_ACTIVE: &str = "is-active";

/// Filter key matching every card.
pub const FILTER_ALL: &str = "all";

/// Control points of the expo-out timing curve, cubic-bezier(0.16, 1, 0.3, 1).
pub const EXPO_OUT_BEZIER: [f32; 4] = [0.16, 1.0, 0.3, 1.0];
