use clap::Args;

use winrescue_core::{Driver, RunReport, Status, WindowOutcome, config};

/// Arguments for the `fix` subcommand.
#[derive(Args)]
pub struct FixArgs {
    /// Report what would move without touching any window
    #[arg(long, short = 'n')]
    simulate: bool,
    /// Print every window, and echo the detailed log to stderr
    #[arg(long, short)]
    verbose: bool,
}

pub fn execute(args: &FixArgs) {
    let config = config::load();
    winrescue_core::log::init(&config.logging, args.verbose);

    let desktop = super::require_desktop(&config);
    let driver = Driver::new(desktop.as_ref(), &config, args.simulate);

    let report = match driver.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("No windows were processed.");
            std::process::exit(1);
        }
    };

    if report.topology.is_synthetic() {
        let primary = report.topology.primary().rect;
        println!(
            "Warning: no monitors reported, assuming a {}x{} display.",
            primary.width, primary.height
        );
    }

    for outcome in &report.outcomes {
        if outcome.status == Status::Unchanged && !args.verbose {
            continue;
        }
        println!("{}", describe(outcome));
    }

    println!("\n{}", summary_line(&report, args.simulate));
}

/// One human-readable line per window decision.
fn describe(outcome: &WindowOutcome) -> String {
    let who = format!("\"{}\" (0x{:X})", outcome.title, outcome.handle);
    let reason = outcome
        .placement
        .and_then(|p| p.reason)
        .map(|r| r.to_string())
        .unwrap_or_default();
    let target = outcome
        .placement
        .map(|p| p.rect.to_string())
        .unwrap_or_default();

    match outcome.status {
        Status::Unchanged => format!("  ok       {who} at {}", outcome.before),
        Status::Moved => format!("  moved    {who}: {reason}, moved to {target}"),
        Status::WouldMove => format!("  would    {who}: {reason}, would move to {target}"),
        Status::Failed if outcome.placement.is_none() => {
            format!("  failed   {who}: could not be restored from minimized")
        }
        Status::Failed => format!("  failed   {who}: {reason}, could not be moved"),
        Status::Vanished => format!("  skipped  {who}: closed during the pass"),
    }
}

fn summary_line(report: &RunReport, simulate: bool) -> String {
    let s = &report.summary;
    let mut line = if simulate {
        format!(
            "{} window(s) scanned, {} would move (simulation, nothing was changed)",
            s.scanned, s.would_move
        )
    } else {
        format!("{} window(s) scanned, {} moved", s.scanned, s.moved)
    };
    if s.restored > 0 {
        line.push_str(&format!(", {} restored from minimized", s.restored));
    }
    if s.failed > 0 {
        line.push_str(&format!(", {} failed", s.failed));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use winrescue_core::config::MonitorConfig;
    use winrescue_core::{Placement, Reason, Rect, RunSummary, Topology};

    fn outcome(status: Status) -> WindowOutcome {
        WindowOutcome {
            handle: 0x1A2B,
            title: "Budget.xlsx".into(),
            before: Rect::new(2000, 100, 400, 400),
            placement: Some(Placement {
                rect: Rect::new(1510, 100, 400, 400),
                needs_move: true,
                target: 0,
                reason: Some(Reason::OutOfBounds),
            }),
            status,
        }
    }

    fn report(summary: RunSummary) -> RunReport {
        RunReport {
            topology: Topology::resolve(Ok(Vec::new()), &MonitorConfig::default()),
            outcomes: Vec::new(),
            summary,
        }
    }

    #[test]
    fn moved_line_names_reason_and_target() {
        let line = describe(&outcome(Status::Moved));

        assert_eq!(
            line,
            "  moved    \"Budget.xlsx\" (0x1A2B): out of bounds, moved to 1510/100/400/400"
        );
    }

    #[test]
    fn simulated_line_says_would_move() {
        let line = describe(&outcome(Status::WouldMove));

        assert!(line.contains("would move to 1510/100/400/400"));
    }

    #[test]
    fn vanished_line_has_no_placement() {
        let mut o = outcome(Status::Vanished);
        o.placement = None;

        assert!(describe(&o).contains("closed during the pass"));
    }

    #[test]
    fn refused_restore_line_has_no_target() {
        let mut o = outcome(Status::Failed);
        o.placement = None;

        assert!(describe(&o).contains("could not be restored from minimized"));
    }

    #[test]
    fn summary_reports_scanned_and_moved() {
        // Arrange
        let summary = RunSummary {
            scanned: 12,
            moved: 3,
            failed: 1,
            ..Default::default()
        };

        // Act
        let line = summary_line(&report(summary), false);

        // Assert
        assert_eq!(line, "12 window(s) scanned, 3 moved, 1 failed");
    }

    #[test]
    fn simulated_summary_reports_would_move() {
        let summary = RunSummary {
            scanned: 5,
            would_move: 2,
            ..Default::default()
        };

        let line = summary_line(&report(summary), true);

        assert!(line.starts_with("5 window(s) scanned, 2 would move"));
    }
}
