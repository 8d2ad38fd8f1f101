use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Type(char),
    Backspace,
    Submit,
    SwitchFocus,
    Up,
    Down,
    Flip,
    MarkKnown,
    None,
}

pub fn map_event(ev: Event, focus: Focus) -> Action {
    let Event::Key(KeyEvent { code, modifiers, kind, .. }) = ev else {
        return Action::None;
    };
    if kind == KeyEventKind::Release {
        return Action::None;
    }

    match (code, modifiers) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::SwitchFocus,
        (KeyCode::Enter, _) => Action::Submit,
        _ => match focus {
            Focus::Topic => match code {
                KeyCode::Char(c) => Action::Type(c),
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Down => Action::SwitchFocus,
                _ => Action::None,
            },
            Focus::Cards => match code {
                KeyCode::Up => Action::Up,
                KeyCode::Down | KeyCode::Char('j') => Action::Down,
                KeyCode::Char(' ') | KeyCode::Char('f') => Action::Flip,
                KeyCode::Char('k') => Action::MarkKnown,
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
        },
    }
}
