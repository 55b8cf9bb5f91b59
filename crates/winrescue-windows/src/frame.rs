use std::mem;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;
use winrescue_core::Rect;

/// The invisible border widths around a window.
///
/// On Windows 10/11, windows have invisible drop-shadow borders that
/// `GetWindowRect` includes but are not visually part of the window.
/// Typical values are ~7px left/right/bottom and 0px top.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BorderOffset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BorderOffset {
    /// Widens a visible-frame rectangle into the outer window rectangle
    /// `SetWindowPos` expects.
    pub fn expand(&self, rect: &Rect) -> Rect {
        Rect::new(
            rect.x - self.left,
            rect.y - self.top,
            rect.width + self.left + self.right,
            rect.height + self.top + self.bottom,
        )
    }
}

/// Returns the raw outer rectangle, invisible borders included.
///
/// Fails when the handle no longer refers to a window.
pub fn window_rect(hwnd: HWND) -> windows::core::Result<RECT> {
    let mut rect = RECT::default();
    // SAFETY: GetWindowRect writes into a RECT we own.
    unsafe { GetWindowRect(hwnd, &mut rect)? };
    Ok(rect)
}

/// Returns the visible bounds of a window using DWM extended frame bounds.
///
/// Falls back to `GetWindowRect` if DWM is unavailable.
pub fn visible_rect(hwnd: HWND) -> windows::core::Result<RECT> {
    let mut frame = RECT::default();
    // SAFETY: DWMWA_EXTENDED_FRAME_BOUNDS writes exactly one RECT.
    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut frame as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };

    if result.is_err() {
        return window_rect(hwnd);
    }
    Ok(frame)
}

/// Computes the invisible border widths by comparing `GetWindowRect`
/// (includes borders) with `DWMWA_EXTENDED_FRAME_BOUNDS` (visible area).
pub fn border_offset(hwnd: HWND) -> windows::core::Result<BorderOffset> {
    let outer = window_rect(hwnd)?;
    let frame = visible_rect(hwnd)?;

    Ok(offset_between(&outer, &frame))
}

fn offset_between(outer: &RECT, frame: &RECT) -> BorderOffset {
    BorderOffset {
        left: frame.left - outer.left,
        top: frame.top - outer.top,
        right: outer.right - frame.right,
        bottom: outer.bottom - frame.bottom,
    }
}

/// Converts a Win32 `RECT` (edges) into a [`Rect`] (origin and size).
pub fn to_rect(rc: &RECT) -> Rect {
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}
