use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Left,
    Right,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    match key.code {
        KeyCode::Esc => AppAction::Quit,
        KeyCode::Tab | KeyCode::Down => AppAction::NextField,
        KeyCode::BackTab | KeyCode::Up => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}
