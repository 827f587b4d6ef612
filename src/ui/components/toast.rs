//! Success acknowledgment overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TOAST_TITLE: &str = "Message Sent!";
pub const TOAST_BODY: &str = "Thanks for completing the form. We'll be in touch soon!";

/// Content and sizing of the toast
pub struct ToastConfig<'a> {
    pub title: &'a str,
    pub message: &'a str,
    /// Hint spans shown under the message
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
    /// Whether the toast currently holds focus
    pub focused: bool,
}

impl Default for ToastConfig<'_> {
    fn default() -> Self {
        Self {
            title: TOAST_TITLE,
            message: TOAST_BODY,
            hint: Some(vec![
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(" to dismiss"),
            ]),
            max_width: 48,
            focused: true,
        }
    }
}

/// Where a toast of this content lands: top-centred within `area`
pub fn toast_area(area: Rect, config: &ToastConfig) -> Rect {
    let padding = 4u16;
    let max_line_width = config.max_width.saturating_sub(padding) as usize;
    let lines = wrap_text(config.message, max_line_width);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + padding + 2)
        .min(config.max_width)
        .min(area.width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + lines.len() as u16 + hint_lines + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

/// Draw the toast over whatever is underneath
pub fn render_toast(frame: &mut Frame, area: Rect, config: ToastConfig) {
    let toast = toast_area(area, &config);
    let max_line_width = config.max_width.saturating_sub(4) as usize;

    frame.render_widget(Clear, toast);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(
        wrap_text(config.message, max_line_width)
            .into_iter()
            .map(Line::from),
    );
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let border_color = if config.focused {
        Color::Cyan
    } else {
        Color::Green
    };
    let widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(widget, toast);
}

/// Greedy word wrap; blank input lines are kept
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + word.chars().count() + 1 > max_width
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
