// UI rendering logic
//
// The single screen: header with the tenant ID input on top, welcome copy
// and the status panel in the middle, key hints at the bottom, plus the
// optional logs overlay. Layout and widgets are rebuilt on every frame.

use super::app::App;
use super::components::{logs_panel, status_bar};
use super::layout::Breakpoint;
use super::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Welcome copy (from the product landing page)
const WELCOME_HEADING: &str = "Welcome to the Multi-Tenant Knowledge Base";
const WELCOME_SUBLINE: &str = "Upload documents and chat with your isolated data.";

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();

    if app.use_theme_background {
        let base = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
        f.render_widget(base, f.area());
    }

    // Three vertical sections: header (3), body (rest), status bar (2)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with the input
            Constraint::Min(8),    // Body - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    app.header.render(f, chunks[0], &app.tenant_value, &theme);
    draw_body(f, chunks[1], app, &theme);
    status_bar::render(f, chunks[2], app, &theme);
}

/// Body: welcome copy + status panel, with the logs overlay below when open
fn draw_body(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let (main, logs) = if app.show_logs {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (rows[0], Some(rows[1]))
    } else {
        (area, None)
    };

    draw_welcome(f, main, app, theme);

    if let Some(logs_area) = logs {
        logs_panel::render(f, logs_area, &app.log_buffer.get_all(), theme);
    }
}

fn draw_welcome(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let bp = Breakpoint::from_width(area.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),   // top spacer
            Constraint::Length(1), // heading
            Constraint::Length(1), // subline
            Constraint::Length(1), // gap
            Constraint::Length(4), // status panel
            Constraint::Fill(2),   // bottom spacer
        ])
        .split(area);

    let heading = Paragraph::new(WELCOME_HEADING)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD));
    f.render_widget(heading, rows[1]);

    // Subline fits only on wider terminals
    if bp.at_least(Breakpoint::Normal) {
        let subline = Paragraph::new(WELCOME_SUBLINE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted));
        f.render_widget(subline, rows[2]);
    }

    let panel_area = centered(rows[4], area.width.saturating_sub(4).min(64), 4);
    app.status_panel
        .render(f, panel_area, &app.tenant_value, theme);
}

/// A rect of at most `width` x `height`, horizontally centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_the_area() {
        let area = Rect::new(0, 0, 100, 10);
        let rect = centered(area, 64, 4);
        assert_eq!(rect.width, 64);
        assert_eq!(rect.x, 18);
        assert!(rect.x + rect.width <= area.width);
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 40, 3);
        let rect = centered(area, 64, 4);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.x, 0);
    }
}
