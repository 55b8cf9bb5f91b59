/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `winrescue init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# winrescue configuration
# Location: ~/.config/winrescue/config.toml

[policy]
# Pixels a window may hang past its monitor edge before it is pulled back.
margin = 5
# Distance in pixels kept from the monitor edge after a window is moved.
edge_inset = 10
# When a window is wider than its monitor, it is resized to the monitor
# width minus this many pixels.
shrink_width = 40
# When a window is taller than its monitor, it is resized to the monitor
# height minus this many pixels.
shrink_height = 60
# Corrected windows are never made smaller than this.
min_width = 100
min_height = 80

[monitors]
# Rectangle windows must fit into:
# "monitor": the full display bounds.
# "work-area": the display minus the taskbar and docked toolbars.
bounds = "monitor"
# Size of the display assumed when the system reports no monitors.
fallback_width = 1920
fallback_height = 1080

[logging]
# Enable file logging to ~/.config/winrescue/logs/winrescue.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
