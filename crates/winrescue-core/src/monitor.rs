//! Monitor snapshots and the per-pass topology built from them.

use serde::Serialize;

use crate::config::MonitorConfig;
use crate::{DesktopResult, Rect};

/// One active display, as seen at the start of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Monitor {
    /// Position in the OS enumeration order.
    pub id: usize,
    /// Bounds used for reconciliation (full monitor or work area).
    pub rect: Rect,
    pub is_primary: bool,
}

impl Monitor {
    pub fn new(id: usize, rect: Rect, is_primary: bool) -> Self {
        Self {
            id,
            rect,
            is_primary,
        }
    }
}

/// The monitor layout for a single reconciliation pass.
///
/// Always holds at least one monitor: an empty or failed query is
/// replaced by a synthetic primary monitor at the origin.
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    monitors: Vec<Monitor>,
    virtual_desktop: Rect,
    primary: usize,
    synthetic: bool,
}

impl Topology {
    /// Builds the topology from a monitor query result.
    ///
    /// Never fails. When the query errored or reported no usable
    /// monitors, a single default monitor is synthesized and a warning
    /// is logged.
    pub fn resolve(query: DesktopResult<Vec<Monitor>>, config: &MonitorConfig) -> Self {
        let monitors: Vec<Monitor> = match query {
            Ok(list) => list.into_iter().filter(|m| !m.rect.is_degenerate()).collect(),
            Err(e) => {
                crate::log_warn!("Monitor query failed: {e}");
                Vec::new()
            }
        };

        if monitors.is_empty() {
            crate::log_warn!(
                "No monitors reported, assuming a single {}x{} display",
                config.fallback_width,
                config.fallback_height
            );
            return Self::fallback(config);
        }

        Self::from_monitors(monitors)
    }

    /// Builds the topology from a non-empty monitor list.
    fn from_monitors(monitors: Vec<Monitor>) -> Self {
        let virtual_desktop = monitors
            .iter()
            .skip(1)
            .fold(monitors[0].rect, |acc, m| acc.union(&m.rect));
        let primary = monitors.iter().position(|m| m.is_primary).unwrap_or(0);

        Self {
            monitors,
            virtual_desktop,
            primary,
            synthetic: false,
        }
    }

    fn fallback(config: &MonitorConfig) -> Self {
        let rect = Rect::new(0, 0, config.fallback_width, config.fallback_height);
        Self {
            monitors: vec![Monitor::new(0, rect, true)],
            virtual_desktop: rect,
            primary: 0,
            synthetic: true,
        }
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Union bounding box of every monitor.
    pub fn virtual_desktop(&self) -> Rect {
        self.virtual_desktop
    }

    /// The primary monitor, or the first one if none is flagged.
    pub fn primary(&self) -> &Monitor {
        &self.monitors[self.primary]
    }

    /// Whether the monitor list was synthesized because the OS reported none.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DesktopError;

    fn dual() -> Vec<Monitor> {
        vec![
            Monitor::new(0, Rect::new(0, 0, 1920, 1080), true),
            Monitor::new(1, Rect::new(1920, -200, 2560, 1440), false),
        ]
    }

    #[test]
    fn virtual_desktop_is_union_of_monitors() {
        // Arrange / Act
        let topology = Topology::resolve(Ok(dual()), &MonitorConfig::default());

        // Assert
        assert_eq!(
            topology.virtual_desktop(),
            Rect::from_edges(0, -200, 4480, 1240)
        );
        assert!(!topology.is_synthetic());
    }

    #[test]
    fn primary_is_the_flagged_monitor() {
        let mut monitors = dual();
        monitors[0].is_primary = false;
        monitors[1].is_primary = true;

        let topology = Topology::resolve(Ok(monitors), &MonitorConfig::default());

        assert_eq!(topology.primary().id, 1);
    }

    #[test]
    fn primary_defaults_to_first_when_none_flagged() {
        let mut monitors = dual();
        monitors[0].is_primary = false;

        let topology = Topology::resolve(Ok(monitors), &MonitorConfig::default());

        assert_eq!(topology.primary().id, 0);
    }

    #[test]
    fn zero_monitors_fall_back_to_default_display() {
        // Act
        let topology = Topology::resolve(Ok(Vec::new()), &MonitorConfig::default());

        // Assert
        assert!(topology.is_synthetic());
        assert_eq!(topology.monitors().len(), 1);
        assert_eq!(topology.primary().rect, Rect::new(0, 0, 1920, 1080));
        assert_eq!(topology.virtual_desktop(), Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn failed_query_falls_back_to_default_display() {
        let query = Err(DesktopError::TopologyUnavailable("access denied".into()));

        let topology = Topology::resolve(query, &MonitorConfig::default());

        assert!(topology.is_synthetic());
        assert!(topology.primary().is_primary);
    }

    #[test]
    fn degenerate_monitors_are_ignored() {
        let monitors = vec![Monitor::new(0, Rect::new(0, 0, 0, 0), true)];

        let topology = Topology::resolve(Ok(monitors), &MonitorConfig::default());

        assert!(topology.is_synthetic());
    }

    #[test]
    fn fallback_size_is_configurable() {
        let config = MonitorConfig {
            fallback_width: 1280,
            fallback_height: 720,
            ..Default::default()
        };

        let topology = Topology::resolve(Ok(Vec::new()), &config);

        assert_eq!(topology.primary().rect, Rect::new(0, 0, 1280, 720));
    }
}
