//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Action;
use super::state::Focus;

/// Map a key press to an action for the given focus.
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('g') => Some(Action::Generate),
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('n') => Some(Action::Next),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrevious),
        _ => {}
    }

    match focus {
        Focus::Topic => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::TopicPrevious),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::TopicNext),
            KeyCode::Enter => Some(Action::Generate),
            _ => None,
        },
        Focus::Options => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Char(' ') => Some(Action::ToggleOption),
            KeyCode::Enter => Some(Action::Submit),
            _ => None,
        },
        Focus::SystemPrompt | Focus::KnowledgeBase | Focus::AdditionalAnswer => match key.code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Enter => Some(Action::Input('\n')),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        },
    }
}
