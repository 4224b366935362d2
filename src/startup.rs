// Startup module - displays banner and module loading status
//
// Runs before the TUI takes over the screen (or stays on stdout in
// headless mode). The same module list is also traced so it shows up in
// the System Logs overlay.

use crate::config::{Config, APP_DESCRIPTION, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module loading status
pub fn print_startup(config: &Config) {
    use colors::*;

    // Banner
    println!();
    println!("  {BOLD}{CYAN}tenantui{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}{APP_DESCRIPTION}{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    // Module loading
    println!("  {DIM}Loading modules...{RESET}");

    for module in get_module_status(config) {
        print_module_status(&module);
    }

    println!();
}

/// Get status of all modules based on config
fn get_module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "context",
            enabled: true, // Core, always on
            description: "Tenant ID distribution",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "Rotating JSON logs",
        },
        ModuleStatus {
            name: "clipboard",
            enabled: config.enable_tui,
            description: "Paste/copy support",
        },
    ]
}

/// Print a single module's status
fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Trace the same boot sequence so it appears in the System Logs overlay
pub fn log_startup(config: &Config) {
    tracing::info!("tenantui v{} - {}", VERSION, APP_DESCRIPTION);

    for module in get_module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("Ready. Paste a tenant UUID to get started.");
}
