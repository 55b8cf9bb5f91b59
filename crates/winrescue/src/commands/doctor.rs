use winrescue_core::config::{self, MonitorBounds};
use winrescue_core::{Config, Topology};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

pub fn execute() {
    println!();
    check_config_dir();
    let config = check_config_file();
    check_monitors(&config);
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => {
            println!(
                "  {WARN} Config directory not found ({}), run `winrescue init`",
                dir.display()
            );
        }
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

/// Reports on `config.toml` and returns the configuration in effect.
fn check_config_file() -> Config {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return Config::default();
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return Config::default();
    }
    match config::try_load() {
        Ok(config) => {
            println!("  {OK} config.toml is valid");
            config
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            Config::default()
        }
    }
}

fn check_monitors(config: &Config) {
    let Some(desktop) = super::open_desktop(config) else {
        println!("  {WARN} Monitor checks need a Windows desktop session");
        return;
    };

    let query = desktop.monitors();
    let query_failed = query.as_ref().err().map(|e| e.to_string());
    let topology = Topology::resolve(query, &config.monitors);

    if let Some(e) = query_failed {
        println!("  {FAIL} Could not enumerate monitors: {e}");
    }
    if topology.is_synthetic() {
        println!("  {FAIL} No monitors detected (a default display would be assumed)");
        return;
    }

    let kind = match config.monitors.bounds {
        MonitorBounds::Monitor => "bounds",
        MonitorBounds::WorkArea => "work area",
    };
    println!(
        "  {OK} {} monitor(s) detected, using {kind}",
        topology.monitors().len()
    );
    for m in topology.monitors() {
        let r = &m.rect;
        println!(
            "       Monitor {}: {}x{} at ({}, {}){}",
            m.id,
            r.width,
            r.height,
            r.x,
            r.y,
            if m.is_primary { " primary" } else { "" }
        );
    }
    let vd = topology.virtual_desktop();
    println!(
        "       Virtual desktop: {}x{} at ({}, {})",
        vd.width, vd.height, vd.x, vd.y
    );
}
