//! User interface rendering.

mod bar_chart;
mod keymap_bar;
mod status_bar;
mod text;
mod theme;
mod widget;

use crate::app::App;
use ratatui::Frame;

pub use text::render_text;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    widget::draw_widget(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_title_prompt_result_and_chart() {
        let app = App::new(&WidgetConfig::default());
        let screen = render(&app, 120, 40);
        assert!(screen.contains("The Power of Multiplication"));
        assert!(screen.contains("If I start"));
        assert!(screen.contains("[ 1 ]"));
        assert!(screen.contains("[ 3 ]"));
        assert!(screen.contains("After 10 years: 1,099,511.63 million groups"));
        assert!(screen.contains("Number of Groups"));
        assert!(screen.contains("Year 10"));
        assert!(screen.contains("1099511.6M"));
    }

    #[test]
    fn renders_spanish_widget() {
        let app = App::new(&WidgetConfig::default().with_language("es"));
        let screen = render(&app, 120, 40);
        assert!(screen.contains("El Poder de la Multiplicación"));
        assert!(screen.contains("Número de Grupos"));
    }

    #[test]
    fn renders_in_a_tiny_terminal() {
        let app = App::new(&WidgetConfig::default());
        let screen = render(&app, 20, 6);
        assert!(!screen.is_empty());
    }
}
