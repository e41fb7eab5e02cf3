pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::Frame;

use crate::app::{AppState, ViewState};

pub use terminal::{AppTerminal as Terminal, TerminalGuard};
use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    match &state.view {
        ViewState::Loading => screens::status::render_loading(frame, area, &theme),
        ViewState::Error(message) => screens::status::render_error(frame, area, message, &theme),
        ViewState::Ready => screens::home::render(frame, area, state, &theme),
    }
}
