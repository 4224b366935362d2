// TUI application state
//
// The App is the shell: it mounts the tenant provider before any component
// is wired, owns the provider for the whole session, and keeps the
// per-frame snapshot that render code reads. Dropping the App tears the
// slot down with it.

use super::components::header::Header;
use super::components::status_panel::StatusPanel;
use super::theme::ThemeKind;
use crate::config::Config;
use crate::context::{ContextError, TenantHandle, TenantProvider};
use crate::logging::LogBuffer;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Debounce window for action chords (Ctrl+L, Ctrl+T, ...)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Main application state for the TUI
pub struct App {
    /// Owns the tenant slot; components only hold handles derived from it
    _provider: TenantProvider,

    /// The shell's own read handle
    pub tenant: TenantHandle,

    /// Editable tenant ID control (header bar)
    pub header: Header,

    /// Binary status presentation
    pub status_panel: StatusPanel,

    /// Snapshot of the slot value, refreshed by sync() before every draw
    pub tenant_value: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the system-logs overlay is visible
    pub show_logs: bool,

    /// Current color theme
    pub theme_kind: ThemeKind,

    /// Paint the theme's background color (vs terminal default)
    pub use_theme_background: bool,

    /// Log buffer for the logs overlay
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Last action chord and when it fired (for debouncing)
    last_chord: Option<(KeyCode, Instant)>,

    /// Slot version seen by the last sync (change detection for tracing)
    last_seen_version: u64,
}

impl App {
    /// Build the shell: provider first, then every consumer.
    ///
    /// The only way a [`ContextError`] escapes here is a wiring mistake
    /// (a component mounted against a dead handle); it is propagated so
    /// the process fails loudly during development.
    pub fn mount(log_buffer: LogBuffer, config: &Config) -> Result<Self, ContextError> {
        let provider = TenantProvider::mount();
        let tenant = provider.handle();

        let header = Header::mount(provider.handle())?;
        let status_panel = StatusPanel::mount(&tenant)?;
        let tenant_value = tenant.read()?.value();

        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, falling back to default", config.theme);
            ThemeKind::default()
        });

        Ok(Self {
            _provider: provider,
            tenant,
            header,
            status_panel,
            tenant_value,
            should_quit: false,
            show_logs: false,
            theme_kind,
            use_theme_background: config.use_theme_background,
            log_buffer,
            start_time: Instant::now(),
            last_chord: None,
            last_seen_version: 0,
        })
    }

    /// Refresh the per-frame snapshot from the slot.
    ///
    /// Runs before every draw, so each mutation is observed by all readers
    /// on the frame that follows it.
    pub fn sync(&mut self) -> Result<(), ContextError> {
        let binding = self.tenant.read()?;

        let version = binding.version();
        if version != self.last_seen_version {
            self.last_seen_version = version;
            tracing::trace!("Tenant ID changed (v{version})");
        }

        self.tenant_value = binding.value();
        self.header.clamp_cursor(&self.tenant_value);
        Ok(())
    }

    /// Resolved colors for the current theme
    pub fn theme(&self) -> super::theme::Theme {
        self.theme_kind.theme()
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
    }

    /// Toggle the system-logs overlay
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Check if an action chord should be debounced.
    /// Returns true if the chord fired too recently and should be ignored.
    /// Different chords never block each other.
    pub fn should_debounce_chord(&mut self, code: KeyCode) -> bool {
        let now = Instant::now();
        if let Some((last_code, last_time)) = self.last_chord {
            if last_code == code && now.duration_since(last_time) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_chord = Some((code, now));
        false
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::status_panel::{variant, StatusVariant};

    fn app() -> App {
        App::mount(LogBuffer::new(), &Config::default()).unwrap()
    }

    #[test]
    fn fresh_shell_shows_the_warning_variant() {
        let mut app = app();
        app.sync().unwrap();
        assert_eq!(app.tenant_value, "");
        assert_eq!(variant(&app.tenant_value), StatusVariant::Warning);
    }

    #[test]
    fn snapshot_follows_the_slot() {
        let mut app = app();
        app.tenant.read().unwrap().set("t-1");
        app.sync().unwrap();
        assert_eq!(app.tenant_value, "t-1");
        assert_eq!(variant(&app.tenant_value), StatusVariant::Authenticated);
    }

    #[test]
    fn same_chord_is_debounced_different_chords_are_not() {
        let mut app = app();
        assert!(!app.should_debounce_chord(KeyCode::Char('l')));
        assert!(app.should_debounce_chord(KeyCode::Char('l')));
        assert!(!app.should_debounce_chord(KeyCode::Char('t')));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "not-a-theme".to_string(),
            ..Config::default()
        };
        let app = App::mount(LogBuffer::new(), &config).unwrap();
        assert_eq!(app.theme_kind, ThemeKind::default());
    }
}
