mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for winrescue.
///
/// Loaded from `~/.config/winrescue/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reconciliation thresholds and insets.
    pub policy: PolicyConfig,
    /// How monitor bounds are read.
    pub monitors: MonitorConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Thresholds used when deciding whether and where to move a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Pixels a window may overhang its monitor before it is corrected.
    pub margin: i32,
    /// Distance kept from the monitor edge when a window is pushed back.
    pub edge_inset: i32,
    /// Width removed from the monitor width when a window must shrink.
    pub shrink_width: i32,
    /// Height removed from the monitor height when a window must shrink.
    pub shrink_height: i32,
    /// Smallest width a corrected window may have.
    pub min_width: i32,
    /// Smallest height a corrected window may have.
    pub min_height: i32,
}

/// Which monitor rectangle windows are reconciled against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonitorBounds {
    /// Full monitor bounds, taskbar included.
    #[default]
    Monitor,
    /// Work area only, taskbar and docked toolbars excluded.
    WorkArea,
}

/// Monitor query settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub bounds: MonitorBounds,
    /// Width of the synthetic monitor used when none are reported.
    pub fallback_width: i32,
    /// Height of the synthetic monitor used when none are reported.
    pub fallback_height: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            margin: 5,
            edge_inset: 10,
            shrink_width: 40,
            shrink_height: 60,
            min_width: 100,
            min_height: 80,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            bounds: MonitorBounds::Monitor,
            fallback_width: 1920,
            fallback_height: 1080,
        }
    }
}

impl Config {
    /// Clamps policy and monitor values to safe ranges.
    ///
    /// Prevents negative insets, zero-sized floors, and fallback
    /// monitors too small to hold a corrected window.
    pub fn validate(&mut self) {
        let p = &mut self.policy;
        p.margin = p.margin.clamp(0, 200);
        p.edge_inset = p.edge_inset.clamp(0, 200);
        p.shrink_width = p.shrink_width.clamp(0, 1000);
        p.shrink_height = p.shrink_height.clamp(0, 1000);
        p.min_width = p.min_width.clamp(1, 2000);
        p.min_height = p.min_height.clamp(1, 2000);

        let m = &mut self.monitors;
        m.fallback_width = m.fallback_width.clamp(640, 16384);
        m.fallback_height = m.fallback_height.clamp(480, 16384);
    }
}

#[cfg(test)]
mod tests;
