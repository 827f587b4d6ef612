//! Contact form screen
//!
//! Everything drawn here is read back from the page the controller mutates:
//! values, checked flags, `selected` containers, error regions and the submit
//! control's label and disabled state.

use super::field_renderer::{draw_field, draw_help_text, FieldLook};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{
    Document, FieldId, FormController, Page, ERROR_CLASS, SELECTED_CLASS, SR_ONLY_CLASS,
};
use crate::ui::components::{render_button, render_toast, ToastConfig};
use crate::ui::layout::FormLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole form, the status line and the toast when it is showing
pub fn draw_contact_form(frame: &mut Frame, layout: &FormLayout, form: &FormController<Page>) {
    let doc = form.document();
    let bindings = form.bindings();
    let focused = doc.focused();

    let outer = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(outer, layout.form);

    for field in FieldId::TEXT {
        let (Some(input), Some(area)) = (bindings.input(field), layout.text_field(field)) else {
            continue;
        };
        let error = shown_error(form, field);
        let value = doc.value(input);
        let look = FieldLook {
            is_active: focused.as_ref() == Some(input),
            is_multiline: field.is_multiline(),
            error: error.as_deref(),
        };
        draw_field(frame, area, field.label(), &value, look);
    }

    draw_query_type(frame, layout, form);
    draw_consent(frame, layout.consent, form);

    render_button(
        frame,
        layout.submit,
        &doc.text(&bindings.submit),
        focused.as_ref() == Some(&bindings.submit),
        !doc.is_disabled(&bindings.submit),
    );

    let help = format!(
        "Tab/Shift+Tab: move | ←/→: choose | Space: toggle | {SUBMIT_SHORTCUT}: submit | Ctrl+C: quit"
    );
    draw_help_text(frame, layout.help, &help);

    draw_status_bar(frame, layout.status, form);

    if form.toast_visible() {
        render_toast(
            frame,
            layout.form,
            ToastConfig {
                focused: focused.as_ref() == Some(&bindings.toast),
                ..Default::default()
            },
        );
    }
}

/// Error text currently shown for `field`
fn shown_error(form: &FormController<Page>, field: FieldId) -> Option<String> {
    let doc = form.document();
    let bindings = form.bindings();
    if !doc.has_class(bindings.target(field), ERROR_CLASS) {
        return None;
    }
    let text = doc.text(&bindings.region(field));
    (!text.is_empty()).then_some(text)
}

fn draw_query_type(frame: &mut Frame, layout: &FormLayout, form: &FormController<Page>) {
    let doc = form.document();
    let group = &form.bindings().query_type;
    let focused = doc.focused();
    let error = shown_error(form, FieldId::QueryType);

    let mut block = Block::default()
        .title(format!(" {} ", FieldId::QueryType.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if error.is_some() {
            Color::Red
        } else {
            Color::DarkGray
        }));
    if let Some(message) = &error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
    }
    frame.render_widget(block, layout.query_group);

    for (option, area) in group.options.iter().zip(&layout.options) {
        let marker = if doc.is_checked(&option.input) {
            "(•)"
        } else {
            "( )"
        };
        let mut style = if doc.has_class(&option.container, SELECTED_CLASS) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if focused.as_ref() == Some(&option.input) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let line = Line::from(Span::styled(format!(" {marker} {}", option.label), style));
        frame.render_widget(Paragraph::new(line), *area);
    }
}

fn draw_consent(frame: &mut Frame, area: Rect, form: &FormController<Page>) {
    let doc = form.document();
    let consent = &form.bindings().consent;
    let is_focused = doc.focused().as_ref() == Some(&consent.input);
    let error = shown_error(form, FieldId::Consent);

    let marker = if doc.is_checked(&consent.input) {
        "[x]"
    } else {
        "[ ]"
    };
    let style = if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let border = match (&error, is_focused) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(message) = &error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
    }

    let line = Line::from(Span::styled(
        format!(" {marker} {} *", FieldId::Consent.label()),
        style,
    ));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Latest live announcement, else the submission state
fn draw_status_bar(frame: &mut Frame, area: Rect, form: &FormController<Page>) {
    let doc = form.document();
    let latest = doc
        .elements_with_class(SR_ONLY_CLASS)
        .last()
        .map(|id| doc.text(id));

    let line = match latest {
        Some(text) => Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(Color::Yellow)),
            Span::raw(text),
        ]),
        None => Line::from(Span::styled(
            format!(" {}", form.lifecycle().label()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
