//! In-memory desktop used by the engine tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::{Desktop, DesktopError, DesktopResult, Monitor, Rect, WindowRecord};

#[derive(Default)]
pub(crate) struct FakeDesktop {
    pub monitors: Vec<Monitor>,
    pub windows: RefCell<Vec<WindowRecord>>,
    /// Rectangle a minimized window takes once restored.
    pub restored_rects: HashMap<usize, Rect>,
    /// Handles whose moves are refused.
    pub denied: HashSet<usize>,
    /// Minimized handles that refuse to restore and stay minimized.
    pub restore_denied: HashSet<usize>,
    /// Handles destroyed after enumeration.
    pub vanished: HashSet<usize>,
    pub fail_enumeration: bool,
    pub restore_calls: Cell<usize>,
    pub move_calls: Cell<usize>,
}

impl FakeDesktop {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self {
            monitors,
            ..Default::default()
        }
    }

    /// Single 1920x1080 primary monitor at the origin.
    pub fn single() -> Self {
        Self::new(vec![Monitor::new(0, Rect::new(0, 0, 1920, 1080), true)])
    }

    pub fn with_window(self, window: WindowRecord) -> Self {
        self.windows.borrow_mut().push(window);
        self
    }

    pub fn rect_of(&self, handle: usize) -> Rect {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.rect)
            .unwrap_or(Rect::new(0, 0, 0, 0))
    }

    pub fn total_calls(&self) -> usize {
        self.restore_calls.get() + self.move_calls.get()
    }

    fn check_alive(&self, handle: usize) -> DesktopResult<()> {
        let known = self.windows.borrow().iter().any(|w| w.handle == handle);
        if !known || self.vanished.contains(&handle) {
            return Err(DesktopError::WindowVanished(handle));
        }
        Ok(())
    }
}

impl Desktop for FakeDesktop {
    fn monitors(&self) -> DesktopResult<Vec<Monitor>> {
        Ok(self.monitors.clone())
    }

    fn windows(&self) -> DesktopResult<Vec<WindowRecord>> {
        if self.fail_enumeration {
            return Err(DesktopError::EnumerationFailed("access denied".into()));
        }
        Ok(self.windows.borrow().clone())
    }

    fn window_rect(&self, handle: usize) -> DesktopResult<Rect> {
        self.check_alive(handle)?;
        Ok(self.rect_of(handle))
    }

    fn restore(&self, handle: usize) -> DesktopResult<bool> {
        self.check_alive(handle)?;
        self.restore_calls.set(self.restore_calls.get() + 1);

        let mut windows = self.windows.borrow_mut();
        let Some(w) = windows.iter_mut().find(|w| w.handle == handle) else {
            return Err(DesktopError::WindowVanished(handle));
        };
        if !w.minimized {
            return Ok(false);
        }
        if self.restore_denied.contains(&handle) {
            return Err(DesktopError::MutationDenied {
                handle,
                reason: "window is still minimized".into(),
            });
        }
        w.minimized = false;
        if let Some(rect) = self.restored_rects.get(&handle) {
            w.rect = *rect;
        }
        Ok(true)
    }

    fn set_rect(&self, handle: usize, rect: &Rect) -> DesktopResult<()> {
        self.check_alive(handle)?;
        if self.denied.contains(&handle) {
            return Err(DesktopError::MutationDenied {
                handle,
                reason: "access denied".into(),
            });
        }
        self.move_calls.set(self.move_calls.get() + 1);

        if let Some(w) = self
            .windows
            .borrow_mut()
            .iter_mut()
            .find(|w| w.handle == handle)
        {
            w.rect = *rect;
        }
        Ok(())
    }
}
