//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; a disabled button is dimmed even when focused
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = button_styles(is_focused, is_enabled);

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

fn button_styles(is_focused: bool, is_enabled: bool) -> (Style, Style) {
    if !is_enabled {
        let dim = Style::default().fg(Color::DarkGray);
        return (dim, dim.add_modifier(Modifier::ITALIC));
    }
    if is_focused {
        let cyan = Style::default().fg(Color::Cyan);
        (cyan, cyan.add_modifier(Modifier::BOLD))
    } else {
        (Style::default().fg(Color::Gray), Style::default())
    }
}
