pub mod doctor;
pub mod fix;
pub mod init;
pub mod list;

use winrescue_core::{Config, Desktop};

/// Opens the live desktop or exits when this platform has none.
pub fn require_desktop(config: &Config) -> Box<dyn Desktop> {
    match open_desktop(config) {
        Some(desktop) => desktop,
        None => {
            eprintln!("Error: this command needs a Windows desktop session.");
            std::process::exit(1);
        }
    }
}

#[cfg(windows)]
pub fn open_desktop(config: &Config) -> Option<Box<dyn Desktop>> {
    Some(Box::new(winrescue_windows::Win32Desktop::new(
        config.monitors.bounds,
    )))
}

#[cfg(not(windows))]
pub fn open_desktop(_config: &Config) -> Option<Box<dyn Desktop>> {
    None
}
