// Logs panel component
//
// Renders the tail of the in-memory log buffer, color-coded by level.
// Toggled with Ctrl+L; always follows the newest entries (no scroll state,
// the buffer itself is bounded).

use crate::logging::{LogEntry, LogLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let viewport = area.height.saturating_sub(2) as usize; // border rows
    let start = entries.len().saturating_sub(viewport);

    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry))
                .style(Style::default().fg(level_color(&entry.level, theme)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:<5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn level_color(level: &LogLevel, theme: &Theme) -> ratatui::style::Color {
    match level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug => theme.log_debug,
        LogLevel::Trace => theme.log_trace,
    }
}
