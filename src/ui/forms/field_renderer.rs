//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field is drawn this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldLook<'a> {
    pub is_active: bool,
    pub is_multiline: bool,
    /// Error message shown under the field, if any
    pub error: Option<&'a str>,
}

/// Border colour: errors win over focus
pub fn border_color(look: &FieldLook) -> Color {
    match (look.error.is_some(), look.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Draw a bordered text field with its label on the top edge and any error
/// message on the bottom edge
pub fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, look: FieldLook) {
    let style = if look.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = Span::styled(
        if look.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if look.is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, style), cursor]))
    };

    let border_style = Style::default().fg(border_color(&look));
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = look.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, help: &str) {
    let help_text = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help_text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_error_border_wins_over_focus() {
        let look = FieldLook {
            is_active: true,
            error: Some("This field is required"),
            ..Default::default()
        };
        assert_eq!(border_color(&look), Color::Red);
    }

    #[test]
    fn test_focus_border_without_error() {
        let look = FieldLook {
            is_active: true,
            ..Default::default()
        };
        assert_eq!(border_color(&look), Color::Cyan);
        assert_eq!(border_color(&FieldLook::default()), Color::DarkGray);
    }

    #[test]
    fn test_error_message_on_bottom_border() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let look = FieldLook {
                    error: Some("This field is required"),
                    ..Default::default()
                };
                draw_field(frame, frame.area(), "Email Address", "", look);
            })
            .unwrap();
        assert!(row(&terminal, 0).contains("Email Address"));
        assert!(row(&terminal, 2).contains("This field is required"));
    }

    #[test]
    fn test_value_is_drawn() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                draw_field(frame, frame.area(), "First Name", "Ada", FieldLook::default())
            })
            .unwrap();
        assert!(row(&terminal, 1).contains("Ada"));
    }
}
