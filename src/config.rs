//! Configuration for the tenant console
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tenantui/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The tenant identifier itself is deliberately absent here: it lives only
//! in the running shell and is never persisted.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static root metadata, set once at startup (window title, banner).
pub const APP_TITLE: &str = "Enterprise RAG Platform";
pub const APP_DESCRIPTION: &str = "Multi-Tenant RAG System";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// Theme name: "Dark", "Light", "Nord", "Solarized"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_tui: true,
            theme: "Dark".to_string(),
            use_theme_background: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set: "trace".."error"
    pub level: String,

    /// Also write JSON logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "tenantui.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tenantui/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tenantui").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Serialize to the config file template.
    ///
    /// Hand-written rather than derived so every key carries its comment
    /// and stays discoverable.
    pub fn to_toml(&self) -> String {
        format!(
            "# tenantui configuration\n\
             # Delete this file to regenerate it with defaults.\n\
             \n\
             # Theme: \"Dark\", \"Light\", \"Nord\", \"Solarized\"\n\
             theme = {theme:?}\n\
             \n\
             # Use the theme's background color (false = terminal default)\n\
             use_theme_background = {bg}\n\
             \n\
             [logging]\n\
             # Default level when RUST_LOG is not set: trace, debug, info, warn, error\n\
             level = {level:?}\n\
             # Also write JSON logs to rotating files\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n\
             file_prefix = {file_prefix:?}\n\
             # Rotation: \"hourly\", \"daily\", \"never\"\n\
             file_rotation = {rotation:?}\n",
            theme = self.theme,
            bg = self.use_theme_background,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Load file config if it exists
    ///
    /// A broken config fails fast with a clear error instead of silently
    /// falling back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, delete the file and restart tenantui.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("TENANTUI_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Theme: env > file > default
        let theme = std::env::var("TENANTUI_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Use theme background: file > default
        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        // Logging: file > defaults, field by field
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .unwrap_or(defaults.logging.file_rotation),
        };

        Self {
            enable_tui,
            theme,
            use_theme_background,
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back as a FileConfig. Catches
    /// TOML syntax errors in to_toml().
    #[test]
    fn default_config_roundtrips_through_toml() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        assert_eq!(file.theme.as_deref(), Some("Dark"));
        assert_eq!(file.use_theme_background, Some(true));

        let logging = file.logging.expect("logging section should be present");
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
        assert_eq!(logging.file_rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn partial_file_parses() {
        let file: FileConfig = toml::from_str("theme = \"Nord\"").unwrap();
        assert_eq!(file.theme.as_deref(), Some("Nord"));
        assert!(file.logging.is_none());
    }

    #[test]
    fn rotation_parses_lowercase() {
        let file: FileConfig = toml::from_str("[logging]\nfile_rotation = \"hourly\"").unwrap();
        assert_eq!(
            file.logging.unwrap().file_rotation,
            Some(LogRotation::Hourly)
        );
    }

    #[test]
    fn rotation_display_names() {
        assert_eq!(LogRotation::Hourly.as_str(), "hourly");
        assert_eq!(LogRotation::Daily.as_str(), "daily");
        assert_eq!(LogRotation::Never.as_str(), "never");
    }

    #[test]
    fn template_documents_every_section() {
        let toml_str = Config::default().to_toml();
        assert!(toml_str.contains("theme ="));
        assert!(toml_str.contains("use_theme_background ="));
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("file_rotation ="));
    }
}
