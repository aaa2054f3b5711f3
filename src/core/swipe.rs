//! Swipe geometry: extent, background fade and the release decision.
//!
//! Offsets are in px and never positive.  `0` is fully closed; the row is
//! fully open at `extent` (≤ 0).

use super::action::SwipeAction;

/// Where the row sits in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Closed,
    /// Pointer is down and moving the foreground.
    Dragging,
    /// Released; animating toward `open`.
    Settling { open: bool },
    Open,
}

/// Total distance the foreground may travel.  An explicit override wins;
/// otherwise the negated sum of action widths.
pub fn swipe_extent(actions: &[SwipeAction], max_swipe: Option<f64>) -> f64 {
    match max_swipe {
        Some(m) => m,
        None => -actions.iter().map(SwipeAction::resolved_width).sum::<f64>(),
    }
}

/// Background opacity for a given offset.
///
/// Linear over `[extent / 2, 0] → [1, 0]`, clamped outside that range.
pub fn background_opacity(offset: f64, extent: f64) -> f64 {
    let half = extent / 2.0;
    if half == 0.0 || offset >= 0.0 {
        return 0.0;
    }
    (offset / half).clamp(0.0, 1.0)
}

/// Target offset after the pointer is released at `offset`: fully open when
/// dragged past half the extent, otherwise closed.
pub fn settle_target(offset: f64, extent: f64) -> f64 {
    if offset < extent / 2.0 {
        extent
    } else {
        0.0
    }
}

/// Map a raw drag position onto the constrained range with elastic bleed.
///
/// Inside `[min, max]` the raw value passes through; past a bound only
/// `elastic` of the overshoot is applied.
pub fn apply_elastic(raw: f64, min: f64, max: f64, elastic: f64) -> f64 {
    if raw < min {
        min + (raw - min) * elastic
    } else if raw > max {
        max + (raw - max) * elastic
    } else {
        raw
    }
}
