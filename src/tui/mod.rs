// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup (raw mode, alternate screen, title)
// - Event loop (keyboard input, timer ticks)
// - Layered key dispatch: global chords first, then the input control
//
// Every loop iteration re-reads the tenant slot before drawing, so a
// mutation made while handling one event is visible to every component on
// the next frame.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::{self, Config};
use crate::context::ContextError;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
/// The window title is the static app metadata, set once here.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(config::APP_TITLE))
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Mount the shell: provider first, then every consumer
    let mut app = App::mount(log_buffer, &config)?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration syncs the frame snapshot from the tenant slot, draws,
/// then waits for whichever comes first: a key event or the redraw tick.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Read the slot before painting - mutations from the previous
        // event land here, ahead of the draw
        app.sync()?;

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            key = poll_key() => {
                if let Some(key) = key {
                    handle_key_event(app, key)?;
                }
            }

            // Periodic tick so uptime and incoming log lines stay fresh
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Poll the terminal briefly for a key event
async fn poll_key() -> Option<KeyEvent> {
    if event::poll(Duration::from_millis(10)).unwrap_or(false) {
        if let Ok(Event::Key(key)) = event::read() {
            return Some(key);
        }
    }
    None
}

/// Handle keyboard input
/// Layered dispatch: global chords -> input control
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Result<(), ContextError> {
    if key_event.kind != KeyEventKind::Press {
        return Ok(());
    }

    if handle_global_keys(app, &key_event)? {
        return Ok(());
    }

    // Everything else belongs to the input: the control is always enabled
    // and every edit writes through the tenant slot
    app.header.handle_key(key_event)?;
    Ok(())
}

/// Handle global chords - returns true if handled
///
/// Chords are Ctrl-modified so plain characters always reach the input.
/// Ctrl+V is deliberately NOT global: paste is an edit and lives in the
/// input control.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> Result<bool, ContextError> {
    let code = key_event.code;

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            // Quit
            KeyCode::Char('q') | KeyCode::Char('c') => {
                if !app.should_debounce_chord(code) {
                    app.should_quit = true;
                }
                return Ok(true);
            }
            // Logs overlay
            KeyCode::Char('l') => {
                if !app.should_debounce_chord(code) {
                    app.toggle_logs();
                }
                return Ok(true);
            }
            // Theme cycling
            KeyCode::Char('t') => {
                if !app.should_debounce_chord(code) {
                    app.next_theme();
                }
                return Ok(true);
            }
            // Copy the tenant ID to the clipboard
            KeyCode::Char('y') => {
                if !app.should_debounce_chord(code) {
                    let value = app.tenant.read()?.value();
                    match clipboard::copy_to_clipboard(&value) {
                        Ok(()) => tracing::info!("Tenant ID copied to clipboard"),
                        Err(e) => tracing::warn!("Clipboard copy failed: {e:#}"),
                    }
                }
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }

    if code == KeyCode::Esc {
        if !app.should_debounce_chord(code) {
            app.should_quit = true;
        }
        return Ok(true);
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::status_panel::{variant, StatusVariant};
    use crate::tui::theme::ThemeKind;

    fn app() -> App {
        App::mount(LogBuffer::new(), &Config::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chord(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// The full §typing flow: warning on mount, then the slot tracks every
    /// keystroke and the panel flips on the first character.
    #[test]
    fn typing_updates_slot_and_status_per_keystroke() {
        let mut app = app();
        app.sync().unwrap();
        assert_eq!(variant(&app.tenant_value), StatusVariant::Warning);

        let mut expected = String::new();
        for c in "abc-123".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c))).unwrap();
            app.sync().unwrap();
            expected.push(c);

            assert_eq!(app.tenant_value, expected);
            // Authenticated from the very first character on
            assert_eq!(variant(&app.tenant_value), StatusVariant::Authenticated);
        }
    }

    #[test]
    fn backspacing_to_empty_restores_the_warning() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('x'))).unwrap();
        app.sync().unwrap();
        assert_eq!(variant(&app.tenant_value), StatusVariant::Authenticated);

        handle_key_event(&mut app, press(KeyCode::Backspace)).unwrap();
        app.sync().unwrap();
        assert_eq!(app.tenant_value, "");
        assert_eq!(variant(&app.tenant_value), StatusVariant::Warning);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, chord('q')).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_l_toggles_the_logs_overlay() {
        let mut app = app();
        assert!(!app.show_logs);
        handle_key_event(&mut app, chord('l')).unwrap();
        assert!(app.show_logs);

        // A second press inside the debounce window is ignored
        handle_key_event(&mut app, chord('l')).unwrap();
        assert!(app.show_logs);
    }

    #[test]
    fn ctrl_t_cycles_the_theme() {
        let mut app = app();
        let before = app.theme_kind;
        handle_key_event(&mut app, chord('t')).unwrap();
        assert_eq!(app.theme_kind, before.next());
    }

    #[test]
    fn quit_chords_do_not_reach_the_input() {
        let mut app = app();
        handle_key_event(&mut app, chord('q')).unwrap();
        app.sync().unwrap();
        assert_eq!(app.tenant_value, "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut release = press(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;

        handle_key_event(&mut app, release).unwrap();
        app.sync().unwrap();
        assert_eq!(app.tenant_value, "");
    }
}
