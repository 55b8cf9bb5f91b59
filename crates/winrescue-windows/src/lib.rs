//! Win32 implementation of the winrescue [`Desktop`](winrescue_core::Desktop).
//!
//! Empty on other platforms.
#![cfg(windows)]

/// `Desktop` implementation tying the modules below together.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Top-level window enumeration and eligibility filtering.
pub mod enumerate;

/// Visible frame bounds and invisible border offsets.
pub mod frame;

/// Display monitor enumeration.
pub mod monitor;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Win32Desktop;
pub use enumerate::enumerate_windows;
pub use window::Window;
