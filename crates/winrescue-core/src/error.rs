use thiserror::Error;

/// Result alias for calls that cross the platform boundary.
pub type DesktopResult<T> = Result<T, DesktopError>;

/// Failures reported by a [`Desktop`](crate::Desktop) implementation.
///
/// Only [`DesktopError::EnumerationFailed`] ends a pass. Everything else
/// is recovered per window or per topology query.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// The monitor query failed or returned nothing usable.
    #[error("monitor topology unavailable: {0}")]
    TopologyUnavailable(String),

    /// The window handle became invalid while the pass was running.
    #[error("window 0x{0:X} no longer exists")]
    WindowVanished(usize),

    /// The OS refused to change the window's show state or position.
    #[error("window 0x{handle:X} could not be updated: {reason}")]
    MutationDenied { handle: usize, reason: String },

    /// The top-level window enumeration itself failed.
    #[error("window enumeration failed: {0}")]
    EnumerationFailed(String),
}
