use winrescue_core::config::MonitorBounds;
use winrescue_core::{Desktop, DesktopResult, Monitor, Rect, WindowRecord};

use crate::window::Window;
use crate::{enumerate, monitor};

/// The live Win32 desktop.
#[derive(Debug, Clone, Copy)]
pub struct Win32Desktop {
    bounds: MonitorBounds,
}

impl Win32Desktop {
    /// Creates the desktop and opts the process into per-monitor DPI
    /// awareness so every coordinate is in physical pixels.
    pub fn new(bounds: MonitorBounds) -> Self {
        crate::dpi::enable_dpi_awareness();
        Self { bounds }
    }
}

impl Desktop for Win32Desktop {
    fn monitors(&self) -> DesktopResult<Vec<Monitor>> {
        let infos = monitor::enumerate_monitors()?;
        Ok(infos.iter().map(|m| m.to_monitor(self.bounds)).collect())
    }

    fn windows(&self) -> DesktopResult<Vec<WindowRecord>> {
        enumerate::enumerate_windows()
    }

    fn window_rect(&self, handle: usize) -> DesktopResult<Rect> {
        Window::from_raw(handle).rect()
    }

    fn restore(&self, handle: usize) -> DesktopResult<bool> {
        Window::from_raw(handle).restore()
    }

    fn set_rect(&self, handle: usize, rect: &Rect) -> DesktopResult<()> {
        Window::from_raw(handle).set_rect(rect)
    }
}
