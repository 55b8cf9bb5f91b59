//! One reconciliation pass over the live desktop.

use crate::config::Config;
use crate::mutator::Mutator;
use crate::reconcile::{self, Placement};
use crate::{Desktop, DesktopError, Rect, Topology, WindowRecord};

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Eligible windows seen.
    pub scanned: usize,
    /// Windows actually moved.
    pub moved: usize,
    /// Windows that would have moved (simulate mode only).
    pub would_move: usize,
    /// Minimized windows restored.
    pub restored: usize,
    /// Windows whose restore or move the OS refused, or that vanished.
    pub failed: usize,
}

/// What happened to a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Already visible; nothing to do.
    Unchanged,
    Moved,
    /// Simulate mode: a move was computed but not applied.
    WouldMove,
    /// The OS refused to restore or move the window.
    Failed,
    /// The window disappeared mid-pass.
    Vanished,
}

/// Per-window record kept for the operator report.
#[derive(Debug, Clone)]
pub struct WindowOutcome {
    pub handle: usize,
    pub title: String,
    /// Rectangle the decision was based on.
    pub before: Rect,
    /// `None` when the window vanished or could not be restored.
    pub placement: Option<Placement>,
    pub status: Status,
}

/// Result of a completed pass.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub topology: Topology,
    pub outcomes: Vec<WindowOutcome>,
    pub summary: RunSummary,
}

/// Runs reconciliation passes against a [`Desktop`].
///
/// Holds no state between passes; running twice in a row converges.
pub struct Driver<'a> {
    desktop: &'a dyn Desktop,
    config: &'a Config,
    simulate: bool,
}

impl<'a> Driver<'a> {
    pub fn new(desktop: &'a dyn Desktop, config: &'a Config, simulate: bool) -> Self {
        Self {
            desktop,
            config,
            simulate,
        }
    }

    /// Reads the current monitor layout.
    pub fn topology(&self) -> Topology {
        Topology::resolve(self.desktop.monitors(), &self.config.monitors)
    }

    /// Runs one full pass.
    ///
    /// Fails only when window enumeration itself fails, in which case
    /// no window is touched.
    pub fn run(&self) -> Result<RunReport, DesktopError> {
        let topology = self.topology();
        log_topology(&topology);

        let windows = self.desktop.windows().inspect_err(|e| {
            crate::log_error!("{e}");
        })?;

        let mutator = Mutator::new(self.desktop, self.simulate);
        let mut summary = RunSummary::default();
        let mut outcomes = Vec::with_capacity(windows.len());
        let total = windows.len();

        for (i, window) in windows.into_iter().enumerate() {
            summary.scanned += 1;
            crate::log_debug!(
                "[{}/{}] 0x{:X} \"{}\" at {}",
                i + 1,
                total,
                window.handle,
                window.title,
                window.rect
            );
            let outcome = self.process(window, &topology, &mutator, &mut summary);
            outcomes.push(outcome);
        }

        if self.simulate {
            crate::log_info!(
                "Simulated pass: {} window(s) scanned, {} would move",
                summary.scanned,
                summary.would_move
            );
        } else {
            crate::log_info!(
                "Pass complete: {} window(s) scanned, {} moved",
                summary.scanned,
                summary.moved
            );
        }

        Ok(RunReport {
            topology,
            outcomes,
            summary,
        })
    }

    /// Restores, reconciles and (unless simulating) moves one window.
    fn process(
        &self,
        mut window: WindowRecord,
        topology: &Topology,
        mutator: &Mutator<'_>,
        summary: &mut RunSummary,
    ) -> WindowOutcome {
        let restored = match mutator.restore_if_minimized(&window) {
            Ok(restored) => restored,
            Err(DesktopError::WindowVanished(_)) => return vanished(window, summary),
            Err(e) => {
                // Still minimized: the rectangle is the parking spot, not
                // a real position.
                crate::log_warn!("Could not restore \"{}\": {e}", window.title);
                summary.failed += 1;
                return WindowOutcome {
                    handle: window.handle,
                    title: window.title,
                    before: window.rect,
                    placement: None,
                    status: Status::Failed,
                };
            }
        };

        if restored {
            summary.restored += 1;
            // The minimized rectangle is the off-screen parking spot.
            match self.desktop.window_rect(window.handle) {
                Ok(rect) if !rect.is_degenerate() => {
                    window.rect = rect;
                    window.minimized = false;
                }
                _ => return vanished(window, summary),
            }
        }

        let placement = reconcile::reconcile(&window, topology, &self.config.policy);

        let status = match placement.reason {
            None => Status::Unchanged,
            Some(reason) => {
                crate::log_info!(
                    "\"{}\" (0x{:X}) is {reason} at {}",
                    window.title,
                    window.handle,
                    window.rect
                );
                let applied = mutator.apply_placement(window.handle, &placement);
                if mutator.is_simulated() {
                    summary.would_move += 1;
                    Status::WouldMove
                } else if applied {
                    summary.moved += 1;
                    Status::Moved
                } else {
                    summary.failed += 1;
                    Status::Failed
                }
            }
        };

        WindowOutcome {
            handle: window.handle,
            title: window.title,
            before: window.rect,
            placement: Some(placement),
            status,
        }
    }
}

fn vanished(window: WindowRecord, summary: &mut RunSummary) -> WindowOutcome {
    crate::log_warn!(
        "Window 0x{:X} \"{}\" vanished, skipping",
        window.handle,
        window.title
    );
    summary.failed += 1;
    WindowOutcome {
        handle: window.handle,
        title: window.title,
        before: window.rect,
        placement: None,
        status: Status::Vanished,
    }
}

fn log_topology(topology: &Topology) {
    for m in topology.monitors() {
        crate::log_debug!(
            "Monitor {}: {}{}",
            m.id,
            m.rect,
            if m.is_primary { " (primary)" } else { "" }
        );
    }
    crate::log_debug!("Virtual desktop: {}", topology.virtual_desktop());
}
