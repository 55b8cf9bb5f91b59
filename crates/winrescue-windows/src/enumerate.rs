use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetShellWindow};
use windows::core::BOOL;
use winrescue_core::{DesktopError, DesktopResult, Skip, WindowRecord, eligible_frame};

use crate::window::Window;

/// State threaded through the `EnumWindows` callback.
struct Collector {
    shell: HWND,
    records: Vec<WindowRecord>,
}

/// Enumerates eligible top-level windows in z-order.
///
/// Eligible means: not the desktop shell window, visible, unowned,
/// titled, and with a non-degenerate frame. Windows that vanish while
/// being inspected are skipped. Only a failure of `EnumWindows` itself is
/// reported as an error.
pub fn enumerate_windows() -> DesktopResult<Vec<WindowRecord>> {
    let mut collector = Collector {
        // SAFETY: GetShellWindow takes no arguments and may return null.
        shell: unsafe { GetShellWindow() },
        records: Vec::new(),
    };

    // SAFETY: EnumWindows runs synchronously and calls our callback for
    // each top-level window. The Collector outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut collector as *mut Collector as isize),
        )
    }
    .map_err(|e| DesktopError::EnumerationFailed(e.message()))?;

    Ok(collector.records)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Collector passed by enumerate_windows().
    let collector = unsafe { &mut *(lparam.0 as *mut Collector) };

    if let Some(record) = inspect(hwnd, collector.shell) {
        collector.records.push(record);
    }

    BOOL(1)
}

/// Gathers what the filters need and builds a record for eligible windows.
fn inspect(hwnd: HWND, shell: HWND) -> Option<WindowRecord> {
    let window = Window::new(hwnd);
    let title = window.title();

    match eligible_frame(
        hwnd == shell,
        window.is_visible(),
        window.has_owner(),
        &title,
        window.rect(),
    ) {
        Ok(rect) => Some(WindowRecord {
            handle: window.handle(),
            title,
            rect,
            minimized: window.is_minimized(),
        }),
        Err(Skip::NoFrame) => {
            winrescue_core::log_debug!("Skipping \"{title}\": no usable frame");
            None
        }
        Err(_) => None,
    }
}
