// Status bar component
//
// Renders uptime, the active theme, and key hints at the bottom.
// Adapts to terminal width: full labels when wide, compact chords when not.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ {} │ Ctrl+V paste │ Ctrl+Y copy │ Ctrl+L logs │ Ctrl+T theme │ Ctrl+Q quit",
            app.uptime(),
            app.theme_kind.name(),
        )
    } else {
        format!(" {} │ ^V ^Y ^L ^T ^Q", app.uptime())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
