//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout(frame.area());
    forms::draw_contact_form(frame, &layout, &app.form);
}
