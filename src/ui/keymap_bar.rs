//! Keymap help bar UI component.

use crate::app::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: Focus, colors: &ThemeColors) {
    let keymap_text = match focus {
        Focus::Groups => {
            "Tab:interval | ↑↓/jk:groups | ←→/hl:bar | s:scale | T:theme | q:quit"
        }
        Focus::Months => {
            "Tab:groups | ↑↓/jk:interval | ←→/hl:bar | s:scale | T:theme | q:quit"
        }
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
