// Status panel component
//
// Presents the binary tenant status: a warning while no tenant ID is set,
// the authenticated message once one is. Pure presentation - the branch
// has no side effects and embeds the value exactly as entered.

use crate::context::{ContextError, TenantHandle};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The two mutually exclusive presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    /// Empty value: direct the user to the input above
    Warning,
    /// Non-empty value: show it verbatim
    Authenticated,
}

/// Which variant a value renders as. Empty string means warning,
/// anything else - including whitespace - is authenticated.
pub fn variant(value: &str) -> StatusVariant {
    if value.is_empty() {
        StatusVariant::Warning
    } else {
        StatusVariant::Authenticated
    }
}

/// The status line for a value, with the exact literals of the product UI.
pub fn status_message(value: &str) -> String {
    match variant(value) {
        StatusVariant::Warning => "⚠️ No Tenant ID set. Please enter a UUID above.".to_string(),
        StatusVariant::Authenticated => format!("✅ Authenticated as Tenant: {value}"),
    }
}

/// Read-side presentation of the tenant context.
pub struct StatusPanel;

impl StatusPanel {
    /// Wire the panel to the tenant context.
    ///
    /// Fails with [`ContextError::MissingProvider`] when no provider is
    /// mounted, before the panel ever renders.
    pub fn mount(tenant: &TenantHandle) -> Result<Self, ContextError> {
        tenant.read()?;
        Ok(Self)
    }

    /// Render the status block. `value` is the per-frame snapshot.
    pub fn render(&self, f: &mut Frame, area: Rect, value: &str, theme: &Theme) {
        let color = match variant(value) {
            StatusVariant::Warning => theme.status_warn,
            StatusVariant::Authenticated => theme.status_ok,
        };

        let lines = vec![
            Line::from(Span::styled(
                "System Status:",
                Style::default()
                    .fg(theme.fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                status_message(value),
                Style::default().fg(color),
            )),
        ];

        let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        f.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TenantProvider;

    #[test]
    fn empty_value_is_warning() {
        assert_eq!(variant(""), StatusVariant::Warning);
        assert_eq!(
            status_message(""),
            "⚠️ No Tenant ID set. Please enter a UUID above."
        );
    }

    #[test]
    fn any_non_empty_value_is_authenticated() {
        assert_eq!(variant("1234"), StatusVariant::Authenticated);
        assert_eq!(variant(" "), StatusVariant::Authenticated);

        assert_eq!(
            status_message("1234"),
            "✅ Authenticated as Tenant: 1234"
        );
        let uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(
            status_message(uuid),
            format!("✅ Authenticated as Tenant: {uuid}")
        );
    }

    #[test]
    fn value_is_embedded_verbatim() {
        // No trimming or normalization of the displayed value
        assert_eq!(
            status_message("  spaced  "),
            "✅ Authenticated as Tenant:   spaced  "
        );
    }

    #[test]
    fn same_value_twice_keeps_the_same_variant() {
        let provider = TenantProvider::mount();
        let binding = provider.handle().read().unwrap();

        binding.set("tenant-a");
        let first = variant(&binding.value());
        binding.set("tenant-a");
        assert_eq!(variant(&binding.value()), first);
    }

    #[test]
    fn mount_without_provider_fails() {
        let err = StatusPanel::mount(&TenantHandle::detached()).err();
        assert_eq!(err, Some(ContextError::MissingProvider));
    }
}
