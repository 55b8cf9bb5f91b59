use serde::Serialize;

use crate::{DesktopResult, Monitor, Rect};

/// An eligible top-level window captured during enumeration.
///
/// Only visible, unowned, titled windows with a non-degenerate
/// rectangle become records; the platform enumerator filters the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowRecord {
    /// Opaque OS handle.
    pub handle: usize,
    /// Title text, used for diagnostics only.
    pub title: String,
    /// Visible frame in screen coordinates.
    pub rect: Rect,
    pub minimized: bool,
}

impl WindowRecord {
    pub fn new(handle: usize, title: impl Into<String>, rect: Rect) -> Self {
        Self {
            handle,
            title: title.into(),
            rect,
            minimized: false,
        }
    }
}

/// Why enumeration left a top-level window out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The desktop shell window.
    Shell,
    Hidden,
    /// Dialogs and tool windows owned by another window.
    Owned,
    /// Empty or whitespace-only title.
    Untitled,
    /// The frame query failed or returned an empty rectangle.
    NoFrame,
}

/// Applies the enumeration filters in order, each a terminal skip.
///
/// Returns the frame to record when the window is eligible.
pub fn eligible_frame(
    is_shell: bool,
    visible: bool,
    has_owner: bool,
    title: &str,
    frame: DesktopResult<Rect>,
) -> Result<Rect, Skip> {
    if is_shell {
        return Err(Skip::Shell);
    }
    if !visible {
        return Err(Skip::Hidden);
    }
    if has_owner {
        return Err(Skip::Owned);
    }
    if title.trim().is_empty() {
        return Err(Skip::Untitled);
    }
    match frame {
        Ok(rect) if !rect.is_degenerate() => Ok(rect),
        _ => Err(Skip::NoFrame),
    }
}

/// Platform boundary used by the reconciliation engine.
///
/// Each platform crate (e.g. `winrescue-windows`) provides its own
/// implementation; tests use an in-memory one.
pub trait Desktop {
    /// Returns the active monitors in OS enumeration order.
    fn monitors(&self) -> DesktopResult<Vec<Monitor>>;

    /// Enumerates eligible top-level windows in OS order.
    ///
    /// Windows that disappear while being inspected are skipped. An error
    /// means the enumeration primitive itself failed.
    fn windows(&self) -> DesktopResult<Vec<WindowRecord>>;

    /// Re-reads the current rectangle of a window.
    fn window_rect(&self, handle: usize) -> DesktopResult<Rect>;

    /// Restores the window if it is minimized.
    ///
    /// Returns `true` when a restore was actually performed.
    fn restore(&self, handle: usize) -> DesktopResult<bool>;

    /// Moves and resizes the window so its visible frame matches `rect`.
    fn set_rect(&self, handle: usize, rect: &Rect) -> DesktopResult<()>;
}
