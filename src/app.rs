//! Application state and input dispatch

use crate::config::FormConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{Document, FormController, Page};
use crate::ui::layout::{FormLayout, Hit};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// The contact form and the page it drives
    pub form: FormController<Page>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance with the first field focused
    pub fn new(config: &FormConfig) -> Self {
        let bindings = config.bindings();
        let page = Page::from_bindings(&bindings);
        let mut form = FormController::new(page, bindings, config.settings());

        let first = form.bindings().first_name.clone();
        form.focus(&first);

        Self {
            form,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Layout for the given frame area
    pub fn layout(&self, area: Rect) -> FormLayout {
        FormLayout::new(area, self.form.bindings().query_type.options.len())
    }

    fn current_layout(&self) -> FormLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        self.layout(Rect::new(0, 0, width, height))
    }

    /// Fire due timers
    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if Self::is_submit_shortcut(&key) {
            self.form.submit(now);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.form.handle_escape();
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ => self.handle_focused_key(key, now),
        }
    }

    /// Ctrl+S everywhere, or the platform modifier with Enter
    fn is_submit_shortcut(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Enter => key.modifiers.contains(SUBMIT_MODIFIER),
            _ => false,
        }
    }

    /// Keys that depend on which element holds focus
    fn handle_focused_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(focused) = self.form.document().focused() else {
            return;
        };
        let bindings = self.form.bindings();

        if focused == bindings.toast {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.form.dismiss_toast();
            }
            return;
        }

        if let Some(index) = bindings.option_index(&focused) {
            match key.code {
                KeyCode::Char(' ') => self.form.select_query_type(index),
                KeyCode::Enter => {
                    self.form.submit(now);
                }
                code => {
                    self.form.handle_group_key(index, code);
                }
            }
            return;
        }

        if focused == bindings.consent.input {
            match key.code {
                KeyCode::Char(' ') => self.form.toggle_consent(),
                KeyCode::Enter => {
                    self.form.submit(now);
                }
                _ => {}
            }
            return;
        }

        if focused == bindings.submit {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.press_submit(now);
            }
            return;
        }

        if let Some(field) = bindings.text_field_of(&focused) {
            match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.form.type_char(c);
                }
                KeyCode::Backspace => {
                    self.form.backspace();
                }
                KeyCode::Enter if field.is_multiline() => {
                    self.form.type_char('\n');
                }
                KeyCode::Enter => {
                    self.form.submit(now);
                }
                _ => {}
            }
        }
    }

    /// Activate the submit control unless it is disabled
    fn press_submit(&mut self, now: Instant) {
        let submit = &self.form.bindings().submit;
        if self.form.document().is_disabled(submit) {
            tracing::debug!("Submit control is disabled");
            return;
        }
        self.form.submit(now);
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        let layout = self.current_layout();

        if self.form.toast_visible()
            && layout.toast().contains(Position::new(mouse.column, mouse.row))
        {
            self.form.dismiss_toast();
            return;
        }

        match layout.hit(mouse.column, mouse.row) {
            Some(Hit::Field(field)) => {
                if let Some(input) = self.form.bindings().input(field).cloned() {
                    self.form.focus(&input);
                }
            }
            Some(Hit::QueryOption(index)) => self.form.click_option(index),
            Some(Hit::Consent) => self.form.click_consent(),
            Some(Hit::Submit) => {
                let submit = self.form.bindings().submit.clone();
                if !self.form.document().is_disabled(&submit) {
                    self.form.focus(&submit);
                    self.form.submit(now);
                }
            }
            None => {}
        }
    }
}
