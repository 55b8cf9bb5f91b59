use std::mem;

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::core::BOOL;
use winrescue_core::config::MonitorBounds;
use winrescue_core::{DesktopError, DesktopResult, Monitor, Rect};

use crate::frame::to_rect;

/// `MONITORINFO::dwFlags` bit set on the primary display.
const MONITORINFOF_PRIMARY: u32 = 1;

/// A display as reported by `GetMonitorInfoW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Position in enumeration order.
    pub id: usize,
    /// Full display bounds.
    pub bounds: Rect,
    /// Bounds minus the taskbar and docked toolbars.
    pub work_area: Rect,
    pub is_primary: bool,
}

impl MonitorInfo {
    /// Snapshot using the requested rectangle as the monitor bounds.
    pub fn to_monitor(&self, bounds: MonitorBounds) -> Monitor {
        let rect = match bounds {
            MonitorBounds::Monitor => self.bounds,
            MonitorBounds::WorkArea => self.work_area,
        };
        Monitor::new(self.id, rect, self.is_primary)
    }
}

/// Lists every active display monitor.
///
/// Monitors whose info query fails are skipped. An empty list is a
/// valid answer (e.g. a headless session); the caller decides on a
/// fallback.
pub fn enumerate_monitors() -> DesktopResult<Vec<MonitorInfo>> {
    let mut handles: Vec<HMONITOR> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously and calls our
    // callback once per monitor. The Vec outlives the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut handles as *mut Vec<HMONITOR> as isize),
        )
    };
    if !ok.as_bool() {
        return Err(DesktopError::TopologyUnavailable(
            "EnumDisplayMonitors failed".into(),
        ));
    }

    let monitors = handles
        .into_iter()
        .filter_map(query_monitor)
        .enumerate()
        .map(|(id, (bounds, work_area, is_primary))| MonitorInfo {
            id,
            bounds,
            work_area,
            is_primary,
        })
        .collect();
    Ok(monitors)
}

/// Collects monitor handles; info is queried after enumeration ends.
unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec<HMONITOR> passed by enumerate_monitors().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    BOOL(1) // TRUE: keep enumerating
}

/// Returns (bounds, work area, primary) for one monitor handle.
fn query_monitor(monitor: HMONITOR) -> Option<(Rect, Rect, bool)> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !success.as_bool() {
        winrescue_core::log_warn!("GetMonitorInfoW failed for monitor {:?}", monitor.0);
        return None;
    }

    Some((
        to_rect(&info.rcMonitor),
        to_rect(&info.rcWork),
        info.dwFlags & MONITORINFOF_PRIMARY != 0,
    ))
}
