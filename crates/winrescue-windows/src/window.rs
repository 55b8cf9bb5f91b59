use windows::Win32::Foundation::{ERROR_INVALID_WINDOW_HANDLE, HWND};
use windows::Win32::UI::WindowsAndMessaging::{
    GW_OWNER, GetWindow, GetWindowTextLengthW, GetWindowTextW, IsIconic, IsWindowVisible,
    SW_RESTORE, SWP_NOACTIVATE, SWP_NOZORDER, SetWindowPos, ShowWindow,
};
use winrescue_core::{DesktopError, DesktopResult, Rect};

use crate::frame;

/// A top-level window, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle owned by the OS; another process can
/// destroy the window at any time, so every query is fallible or
/// degrades to a neutral answer.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the handle as a pointer-sized integer.
    pub fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the window title, or an empty string if it has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW only read the
        // window text into a buffer we own.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    /// Returns the visible frame in screen coordinates.
    pub fn rect(&self) -> DesktopResult<Rect> {
        let frame = frame::visible_rect(self.hwnd).map_err(|_| self.vanished())?;
        Ok(frame::to_rect(&frame))
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    pub fn is_minimized(&self) -> bool {
        // SAFETY: IsIconic is a simple query.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    /// Whether another window owns this one (dialogs, tool palettes).
    pub fn has_owner(&self) -> bool {
        // SAFETY: GetWindow only reads the window relationship.
        matches!(unsafe { GetWindow(self.hwnd, GW_OWNER) }, Ok(owner) if !owner.is_invalid())
    }

    /// Restores the window if minimized. Returns whether it was.
    pub fn restore(&self) -> DesktopResult<bool> {
        // Confirms the handle is still live before touching show state.
        frame::window_rect(self.hwnd).map_err(|_| self.vanished())?;

        if !self.is_minimized() {
            return Ok(false);
        }
        // SAFETY: ShowWindow with a valid HWND; the return value is the
        // previous visibility, not a success flag.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
        }
        if self.is_minimized() {
            return Err(DesktopError::MutationDenied {
                handle: self.handle(),
                reason: "window stayed minimized".into(),
            });
        }
        Ok(true)
    }

    /// Moves the window so that its visible frame lands on `rect`.
    pub fn set_rect(&self, rect: &Rect) -> DesktopResult<()> {
        // Compensate for invisible borders so the visible portion
        // lands exactly at the requested position and size.
        let border = frame::border_offset(self.hwnd).map_err(|_| self.vanished())?;
        let outer = border.expand(rect);

        winrescue_core::log_debug!(
            "set_rect 0x{:X}: target {} outer {} border(L:{} T:{} R:{} B:{})",
            self.handle(),
            rect,
            outer,
            border.left,
            border.top,
            border.right,
            border.bottom
        );

        // SAFETY: SetWindowPos with a live HWND.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                outer.x,
                outer.y,
                outer.width,
                outer.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| {
            if e.code() == ERROR_INVALID_WINDOW_HANDLE.to_hresult() {
                self.vanished()
            } else {
                DesktopError::MutationDenied {
                    handle: self.handle(),
                    reason: e.message(),
                }
            }
        })
    }

    fn vanished(&self) -> DesktopError {
        DesktopError::WindowVanished(self.handle())
    }
}
