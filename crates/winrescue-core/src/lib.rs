pub mod config;
pub mod driver;
pub mod error;
pub mod log;
pub mod monitor;
pub mod mutator;
pub mod reconcile;
pub mod rect;
pub mod window;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use driver::{Driver, RunReport, RunSummary, Status, WindowOutcome};
pub use error::{DesktopError, DesktopResult};
pub use monitor::{Monitor, Topology};
pub use mutator::Mutator;
pub use reconcile::{Placement, Reason, reconcile};
pub use rect::Rect;
pub use window::{Desktop, Skip, WindowRecord, eligible_frame};
