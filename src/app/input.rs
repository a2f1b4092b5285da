use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Submit,
    Quit,
    AddEntry,
    RemoveEntry,
    NextEntry,
    PrevEntry,
    ResetStatus,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('a') | KeyCode::Char('A') => KeyCommand::AddEntry,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::RemoveEntry,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyCommand::NextEntry,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevEntry,
        KeyCode::Esc => KeyCommand::ResetStatus,
        _ => KeyCommand::Edit(*key),
    }
}
