//! Shared numeric constants for gesture thresholds, history, and timers.

use std::time::Duration;

// ── Gesture classification ──────────────────────────────────────

/// Maximum normalized thumb-tip to index-tip distance that reads as a pinch.
/// Tuned against the tracking model's jitter, not derived.
pub const PINCH_MAX_DIST: f64 = 0.05;

/// Minimum sidecar confidence score for a detected hand to be accepted.
pub const MIN_HAND_SCORE: f32 = 0.5;

// ── History ─────────────────────────────────────────────────────

/// Raster snapshots retained for undo/redo; oldest evicted past this.
pub const HISTORY_CAP: usize = 50;

// ── Timers ──────────────────────────────────────────────────────

/// How long an open palm must be held before the clear prompt fires.
pub const CLEAR_HOLD: Duration = Duration::from_millis(1000);

/// Quiet period before the gesture reminder affordance is shown.
pub const IDLE_REMINDER: Duration = Duration::from_secs(10);

// ── Brush ───────────────────────────────────────────────────────

/// Erase strokes sweep this many times wider than the brush.
pub const ERASE_WIDTH_FACTOR: f64 = 2.0;

/// Default brush color, matching the UI's initial swatch.
pub const DEFAULT_BRUSH_COLOR: &str = "#00ff88";

/// Default brush width in canvas pixels.
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;
