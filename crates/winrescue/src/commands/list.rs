use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use winrescue_core::{Placement, Topology, WindowRecord, config, reconcile};

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Lists eligible windows with the decision `fix` would make.
///
/// Read-only: minimized windows are shown at their minimized position.
pub fn execute(args: &ListArgs) {
    let config = config::load();
    winrescue_core::log::init(&config.logging, false);

    let desktop = super::require_desktop(&config);
    let topology = Topology::resolve(desktop.monitors(), &config.monitors);

    let windows = match desktop.windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let rows: Vec<(WindowRecord, Placement)> = windows
        .into_iter()
        .map(|w| {
            let placement = reconcile(&w, &topology, &config.policy);
            (w, placement)
        })
        .collect();

    if args.json {
        print_json(&rows);
    } else {
        print_table(&rows);
    }
}

fn print_table(rows: &[(WindowRecord, Placement)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("Monitor").set_alignment(CellAlignment::Right),
            Cell::new("Decision"),
        ]);

    let mut offscreen = 0;
    for (window, placement) in rows {
        let rect = window.rect;
        if placement.needs_move {
            offscreen += 1;
        }
        table.add_row(vec![
            Cell::new(format!("0x{:X}", window.handle)),
            Cell::new(&window.title),
            Cell::new(rect.x).set_alignment(CellAlignment::Right),
            Cell::new(rect.y).set_alignment(CellAlignment::Right),
            Cell::new(rect.width).set_alignment(CellAlignment::Right),
            Cell::new(rect.height).set_alignment(CellAlignment::Right),
            Cell::new(placement.target).set_alignment(CellAlignment::Right),
            Cell::new(decision(window, placement)),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found, {offscreen} need moving", rows.len());
}

fn decision(window: &WindowRecord, placement: &Placement) -> String {
    let mut text = match placement.reason {
        Some(reason) => format!("{reason} -> {}", placement.rect),
        None => "ok".to_string(),
    };
    if window.minimized {
        text.push_str(" (minimized)");
    }
    text
}

fn print_json(rows: &[(WindowRecord, Placement)]) {
    let entries: Vec<_> = rows
        .iter()
        .map(|(window, placement)| {
            serde_json::json!({
                "window": window,
                "placement": placement,
            })
        })
        .collect();

    match serde_json::to_string_pretty(&entries) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: could not encode window list: {e}"),
    }
}
