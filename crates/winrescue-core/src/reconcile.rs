//! Geometry reconciliation: decides whether a window is visible on the
//! current monitors and, if not, where it should go.
//!
//! Everything here is a pure function of its inputs, so the whole
//! decision path can be tested without a desktop.

use serde::Serialize;

use crate::config::PolicyConfig;
use crate::{Monitor, Rect, Topology, WindowRecord};

/// Why a window needs to be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// The window does not intersect any monitor.
    OutOfBounds,
    /// The window overhangs its target monitor by more than the margin.
    PartiallyOutside,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::PartiallyOutside => f.write_str("partially outside"),
        }
    }
}

/// The reconciler's verdict for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Where the window should end up. Equal to the current rectangle,
    /// below the size floor or not, when no move is needed.
    pub rect: Rect,
    pub needs_move: bool,
    /// Id of the monitor the window was matched to.
    pub target: usize,
    /// Set whenever `needs_move` is true.
    pub reason: Option<Reason>,
}

/// Decides whether `window` must move and computes its corrected rectangle.
pub fn reconcile(window: &WindowRecord, topology: &Topology, policy: &PolicyConfig) -> Placement {
    let rect = window.rect;
    let monitors = topology.monitors();

    let reason = if is_out_of_bounds(&rect, monitors) {
        Some(Reason::OutOfBounds)
    } else {
        None
    };

    let target = select_target(&rect, topology);

    let reason = reason.or_else(|| {
        exceeds(&rect, &target.rect, policy.margin).then_some(Reason::PartiallyOutside)
    });

    match reason {
        Some(reason) => Placement {
            rect: clamp(&rect, &target.rect, policy),
            needs_move: true,
            target: target.id,
            reason: Some(reason),
        },
        None => Placement {
            rect,
            needs_move: false,
            target: target.id,
            reason: None,
        },
    }
}

/// A window is out of bounds when it shares no area with any monitor.
pub fn is_out_of_bounds(rect: &Rect, monitors: &[Monitor]) -> bool {
    !monitors.iter().any(|m| rect.intersects(&m.rect))
}

/// Picks the monitor holding the largest share of the window.
///
/// Ties go to the monitor enumerated first. A window that overlaps no
/// monitor is assigned to the primary.
pub fn select_target<'a>(rect: &Rect, topology: &'a Topology) -> &'a Monitor {
    let mut best: Option<(&Monitor, i64)> = None;

    for monitor in topology.monitors() {
        let area = rect.intersection_area(&monitor.rect);
        if area > 0 && best.is_none_or(|(_, a)| area > a) {
            best = Some((monitor, area));
        }
    }

    best.map_or_else(|| topology.primary(), |(m, _)| m)
}

/// Whether any edge of `rect` extends past `bounds` by more than `margin`.
pub fn exceeds(rect: &Rect, bounds: &Rect, margin: i32) -> bool {
    rect.x < bounds.x - margin
        || rect.y < bounds.y - margin
        || rect.right() > bounds.right() + margin
        || rect.bottom() > bounds.bottom() + margin
}

/// Shrinks and translates `rect` so it fits inside `bounds`.
///
/// The size is kept when it fits; otherwise it is reduced to the bounds
/// minus the shrink insets. The size floor applies last and wins over
/// the bounds on monitors smaller than the floor.
pub fn clamp(rect: &Rect, bounds: &Rect, policy: &PolicyConfig) -> Rect {
    let mut width = rect.width;
    let mut height = rect.height;

    if width > bounds.width {
        width = bounds.width - policy.shrink_width;
    }
    if height > bounds.height {
        height = bounds.height - policy.shrink_height;
    }
    let width = width.max(policy.min_width);
    let height = height.max(policy.min_height);

    let x = fit_axis(rect.x, width, bounds.x, bounds.right(), policy.edge_inset);
    let y = fit_axis(rect.y, height, bounds.y, bounds.bottom(), policy.edge_inset);

    Rect::new(x, y, width, height)
}

/// Positions a span of `len` starting at `start` inside `[lo, hi)`.
fn fit_axis(start: i32, len: i32, lo: i32, hi: i32, inset: i32) -> i32 {
    let mut pos = start;
    if pos < lo {
        pos = lo + inset;
    }
    if pos + len > hi {
        pos = hi - len - inset;
    }
    // Spans within `inset` of the full extent can be pushed past `lo`.
    pos.max(lo)
}
