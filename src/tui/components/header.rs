// Header component - brand plus the tenant ID input
//
// The input is two-way bound to the tenant context: it renders whatever
// the slot currently holds, and every edit keystroke reads the value,
// applies the edit, and writes the result straight back. No debouncing,
// no trimming, no format checks - the UUID hint in the placeholder is
// exactly that, a hint.

use crate::context::{ContextError, TenantHandle};
use crate::tui::clipboard;
use crate::tui::components::Handled;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Brand text shown left of the input (from the product header)
const BRAND: &str = " Enterprise RAG 🤖";

/// Placeholder shown while the value is empty
const PLACEHOLDER: &str = "Paste UUID here...";

/// The editable tenant identifier control.
///
/// Holds the write-side handle to the tenant context plus purely local UI
/// state (the cursor). The value itself is never cached here; the slot is
/// the single source of truth.
pub struct Header {
    tenant: TenantHandle,
    /// Cursor position as a char index into the value
    cursor: usize,
}

impl Header {
    /// Wire the control to the tenant context.
    ///
    /// Fails with [`ContextError::MissingProvider`] when no provider is
    /// mounted, before the control ever renders.
    pub fn mount(tenant: TenantHandle) -> Result<Self, ContextError> {
        tenant.read()?;
        Ok(Self { tenant, cursor: 0 })
    }

    /// Keep the cursor inside the value (called once per frame).
    pub fn clamp_cursor(&mut self, value: &str) {
        let chars = value.chars().count();
        if self.cursor > chars {
            self.cursor = chars;
        }
    }

    /// Handle a key event aimed at the input.
    ///
    /// Every content edit goes through the slot setter immediately, one
    /// `set` per keystroke. Cursor movement is local and writes nothing.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Handled, ContextError> {
        let binding = self.tenant.read()?;
        let value = binding.value();
        let chars = value.chars().count();

        // Ctrl+V: paste clipboard text at the cursor as a single edit
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('v') = key.code {
                match clipboard::paste_from_clipboard() {
                    Ok(text) => {
                        let mut next = value.clone();
                        next.insert_str(byte_index(&value, self.cursor), &text);
                        binding.set(next);
                        self.cursor += text.chars().count();
                    }
                    Err(e) => tracing::warn!("Clipboard paste failed: {e:#}"),
                }
                return Ok(Handled::Yes);
            }
            return Ok(Handled::No);
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = value.clone();
                next.insert(byte_index(&value, self.cursor), c);
                binding.set(next);
                self.cursor += 1;
                Ok(Handled::Yes)
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let mut next = value.clone();
                    next.remove(byte_index(&value, self.cursor - 1));
                    binding.set(next);
                    self.cursor -= 1;
                }
                Ok(Handled::Yes)
            }
            KeyCode::Delete => {
                if self.cursor < chars {
                    let mut next = value.clone();
                    next.remove(byte_index(&value, self.cursor));
                    binding.set(next);
                }
                Ok(Handled::Yes)
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Ok(Handled::Yes)
            }
            KeyCode::Right => {
                if self.cursor < chars {
                    self.cursor += 1;
                }
                Ok(Handled::Yes)
            }
            KeyCode::Home => {
                self.cursor = 0;
                Ok(Handled::Yes)
            }
            KeyCode::End => {
                self.cursor = chars;
                Ok(Handled::Yes)
            }
            _ => Ok(Handled::No),
        }
    }

    /// Render brand and input; places the terminal cursor inside the input.
    ///
    /// `value` is the per-frame snapshot read by the shell before drawing.
    pub fn render(&self, f: &mut Frame, area: Rect, value: &str, theme: &Theme) {
        let bp = Breakpoint::from_width(area.width);

        // Brand fits only on wider terminals; measured in display cells
        // because of the emoji
        let brand_width = if bp.at_least(Breakpoint::Normal) {
            BRAND.width() as u16 + 2
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(brand_width), Constraint::Min(20)])
            .split(area);

        if brand_width > 0 {
            let brand = Paragraph::new(BRAND)
                .style(
                    Style::default()
                        .fg(theme.brand)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().borders(Borders::ALL).border_style(
                    Style::default().fg(theme.border),
                ));
            f.render_widget(brand, chunks[0]);
        }

        let input_area = chunks[1];
        let inner_width = input_area.width.saturating_sub(2); // border columns

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(" Current Tenant ID ");

        let input = if value.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(theme.muted))
                .block(input_block)
        } else {
            let cursor = self.cursor.min(value.chars().count());
            let (window, _) = visible_window(value, cursor, inner_width);
            Paragraph::new(window)
                .style(Style::default().fg(theme.input_text))
                .block(input_block)
        };
        f.render_widget(input, input_area);

        // Terminal cursor: after the last visible char before the caret
        let cursor = self.cursor.min(value.chars().count());
        let (_, cursor_col) = visible_window(value, cursor, inner_width);
        f.set_cursor_position(Position::new(
            input_area.x + 1 + cursor_col,
            input_area.y + 1,
        ));
    }
}

/// Byte offset of the `char_idx`-th character of `value`.
fn byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Horizontal scroll window for the input.
///
/// Returns the substring to display and the cursor's column within it,
/// measured in display cells so wide characters (emoji, CJK) line up.
/// The window always keeps the cursor visible.
fn visible_window(value: &str, cursor: usize, width: u16) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }
    let max = width as usize;
    let chars: Vec<char> = value.chars().collect();

    // Walk back from the cursor until the prefix fills the window,
    // reserving one cell for the caret itself.
    let mut start = cursor.min(chars.len());
    let mut used = 0usize;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        start -= 1;
    }
    let cursor_col = used as u16;

    // Extend forward from the window start until out of cells
    let mut end = start;
    let mut total = 0usize;
    while end < chars.len() {
        let w = chars[end].width().unwrap_or(0);
        if total + w > max {
            break;
        }
        total += w;
        end += 1;
    }

    (chars[start..end].iter().collect(), cursor_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TenantProvider;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(header: &mut Header, s: &str) {
        for c in s.chars() {
            header.handle_key(press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn mount_without_provider_fails() {
        let err = Header::mount(TenantHandle::detached()).err();
        assert_eq!(err, Some(ContextError::MissingProvider));
    }

    #[test]
    fn every_keystroke_writes_through() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();
        let reader = provider.handle();

        // After each keystroke the slot holds the prefix typed so far
        let mut expected = String::new();
        for c in "abc-123".chars() {
            header.handle_key(press(KeyCode::Char(c))).unwrap();
            expected.push(c);
            assert_eq!(reader.read().unwrap().value(), expected);
        }
    }

    #[test]
    fn whitespace_is_preserved_verbatim() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();

        type_str(&mut header, "  abc  ");
        assert_eq!(provider.handle().read().unwrap().value(), "  abc  ");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();

        type_str(&mut header, "abcd");
        header.handle_key(press(KeyCode::Backspace)).unwrap();
        assert_eq!(provider.handle().read().unwrap().value(), "abc");

        // Move left and delete from the middle
        header.handle_key(press(KeyCode::Left)).unwrap();
        header.handle_key(press(KeyCode::Backspace)).unwrap();
        assert_eq!(provider.handle().read().unwrap().value(), "ac");
    }

    #[test]
    fn delete_removes_at_cursor() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();

        type_str(&mut header, "abc");
        header.handle_key(press(KeyCode::Home)).unwrap();
        header.handle_key(press(KeyCode::Delete)).unwrap();
        assert_eq!(provider.handle().read().unwrap().value(), "bc");
    }

    #[test]
    fn cursor_movement_writes_nothing() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();
        let binding = provider.handle().read().unwrap();

        type_str(&mut header, "xy");
        let version = binding.version();

        header.handle_key(press(KeyCode::Left)).unwrap();
        header.handle_key(press(KeyCode::Home)).unwrap();
        header.handle_key(press(KeyCode::End)).unwrap();
        assert_eq!(binding.version(), version);
    }

    #[test]
    fn edits_in_the_middle_respect_utf8() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();

        type_str(&mut header, "日本語");
        header.handle_key(press(KeyCode::Left)).unwrap();
        header.handle_key(press(KeyCode::Char('x'))).unwrap();
        assert_eq!(provider.handle().read().unwrap().value(), "日本x語");
    }

    #[test]
    fn handle_key_after_provider_drop_is_fatal() {
        let provider = TenantProvider::mount();
        let mut header = Header::mount(provider.handle()).unwrap();
        drop(provider);

        let err = header.handle_key(press(KeyCode::Char('a'))).err();
        assert_eq!(err, Some(ContextError::MissingProvider));
    }

    #[test]
    fn visible_window_keeps_cursor_in_view() {
        // 10 chars wide, value longer than the window
        let value = "0123456789abcdef";
        let (window, col) = visible_window(value, 16, 10);
        assert!(window.len() <= 10);
        assert!(window.ends_with("def"));
        assert!(col < 10);

        // Cursor at start shows the head of the value
        let (window, col) = visible_window(value, 0, 10);
        assert!(window.starts_with("0123"));
        assert_eq!(col, 0);
    }

    #[test]
    fn visible_window_counts_wide_chars() {
        // Each CJK char occupies two cells
        let value = "日本語";
        let (_, col) = visible_window(value, 3, 20);
        assert_eq!(col, 6);
    }
}
