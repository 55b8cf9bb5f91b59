use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without this, Windows virtualizes window and monitor coordinates to
/// the primary monitor's DPI, so a window on a scaled secondary display
/// would be reported at the wrong position and could be misjudged as
/// off-screen.
///
/// Must be called before the first monitor or window query.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext only changes process state.
    // It fails harmlessly when awareness was already set by a manifest.
    if unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }.is_err()
    {
        winrescue_core::log_debug!("DPI awareness already set for this process");
    }
}
