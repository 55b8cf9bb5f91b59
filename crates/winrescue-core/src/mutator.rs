use crate::reconcile::Placement;
use crate::{Desktop, DesktopResult, WindowRecord};

/// Applies show-state and geometry changes to windows.
///
/// In simulate mode nothing reaches the [`Desktop`]: restores report
/// `false` and placements are only logged.
pub struct Mutator<'a> {
    desktop: &'a dyn Desktop,
    simulate: bool,
}

impl<'a> Mutator<'a> {
    pub fn new(desktop: &'a dyn Desktop, simulate: bool) -> Self {
        Self { desktop, simulate }
    }

    pub fn is_simulated(&self) -> bool {
        self.simulate
    }

    /// Restores the window from the minimized state.
    ///
    /// Called for every eligible window, whether or not it needs a move.
    /// Returns `true` when the window was actually restored.
    pub fn restore_if_minimized(&self, window: &WindowRecord) -> DesktopResult<bool> {
        if self.simulate {
            if window.minimized {
                crate::log_info!("Would restore minimized window 0x{:X}", window.handle);
            }
            return Ok(false);
        }
        let restored = self.desktop.restore(window.handle)?;
        if restored {
            crate::log_info!("Restored minimized window 0x{:X}", window.handle);
        }
        Ok(restored)
    }

    /// Moves the window to the placement's rectangle.
    ///
    /// Returns `true` only when the window was actually moved. A
    /// placement that needs no move, simulate mode, and a refused move
    /// all return `false`; refusals are logged as warnings.
    pub fn apply_placement(&self, handle: usize, placement: &Placement) -> bool {
        if !placement.needs_move {
            return false;
        }
        if self.simulate {
            crate::log_info!("Would move 0x{:X} to {}", handle, placement.rect);
            return false;
        }
        match self.desktop.set_rect(handle, &placement.rect) {
            Ok(()) => {
                crate::log_info!("Moved 0x{:X} to {}", handle, placement.rect);
                true
            }
            Err(e) => {
                crate::log_warn!("Could not move 0x{:X}: {e}", handle);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::reconcile::Reason;
    use crate::testing::FakeDesktop;

    fn placement(needs_move: bool) -> Placement {
        Placement {
            rect: Rect::new(10, 10, 400, 300),
            needs_move,
            target: 0,
            reason: needs_move.then_some(Reason::OutOfBounds),
        }
    }

    fn minimized(handle: usize) -> WindowRecord {
        WindowRecord {
            minimized: true,
            ..WindowRecord::new(handle, "Mail", Rect::new(-32000, -32000, 160, 28))
        }
    }

    #[test]
    fn placement_without_move_does_not_touch_desktop() {
        // Arrange
        let desktop = FakeDesktop::single().with_window(WindowRecord::new(
            1,
            "Editor",
            Rect::new(0, 0, 500, 500),
        ));
        let mutator = Mutator::new(&desktop, false);

        // Act
        let moved = mutator.apply_placement(1, &placement(false));

        // Assert
        assert!(!moved);
        assert_eq!(desktop.move_calls.get(), 0);
    }

    #[test]
    fn placement_moves_window() {
        let desktop = FakeDesktop::single().with_window(WindowRecord::new(
            1,
            "Editor",
            Rect::new(3000, 0, 400, 300),
        ));
        let mutator = Mutator::new(&desktop, false);

        assert!(mutator.apply_placement(1, &placement(true)));
        assert_eq!(desktop.rect_of(1), Rect::new(10, 10, 400, 300));
    }

    #[test]
    fn refused_move_reports_not_moved() {
        // Arrange
        let mut desktop = FakeDesktop::single().with_window(WindowRecord::new(
            7,
            "Elevated",
            Rect::new(3000, 0, 400, 300),
        ));
        desktop.denied.insert(7);
        let mutator = Mutator::new(&desktop, false);

        // Act
        let moved = mutator.apply_placement(7, &placement(true));

        // Assert
        assert!(!moved);
        assert_eq!(desktop.rect_of(7), Rect::new(3000, 0, 400, 300));
    }

    #[test]
    fn restore_reports_whether_window_was_minimized() {
        let desktop = FakeDesktop::single()
            .with_window(minimized(1))
            .with_window(WindowRecord::new(2, "Editor", Rect::new(0, 0, 500, 500)));
        let mutator = Mutator::new(&desktop, false);

        assert!(mutator.restore_if_minimized(&minimized(1)).unwrap());
        assert!(
            !mutator
                .restore_if_minimized(&WindowRecord::new(2, "Editor", Rect::new(0, 0, 500, 500)))
                .unwrap()
        );
        assert_eq!(desktop.restore_calls.get(), 2);
    }

    #[test]
    fn simulate_mode_makes_no_calls() {
        // Arrange
        let desktop = FakeDesktop::single().with_window(minimized(1));
        let mutator = Mutator::new(&desktop, true);

        // Act
        let restored = mutator.restore_if_minimized(&minimized(1)).unwrap();
        let moved = mutator.apply_placement(1, &placement(true));

        // Assert
        assert!(mutator.is_simulated());
        assert!(!restored);
        assert!(!moved);
        assert_eq!(desktop.total_calls(), 0);
    }
}
