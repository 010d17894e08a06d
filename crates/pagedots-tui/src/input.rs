use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevPage,
    NextPage,
    SelectPage(usize), // 1-9: select directly, bypassing the pager
    CycleStyle,
    ToggleInteractive,
    MoreIndicators,
    FewerIndicators,
    GrowRadius,
    ShrinkRadius,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help, except quit
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Paging
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,

        // Direct selection, 1-based on the keyboard
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectPage(c as usize - '1' as usize)
        }

        // Indicator settings
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::CycleStyle,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::ToggleInteractive,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => {
            Action::MoreIndicators
        }
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::FewerIndicators,
        (KeyCode::Char(']'), KeyModifiers::NONE) => Action::GrowRadius,
        (KeyCode::Char('['), KeyModifiers::NONE) => Action::ShrinkRadius,

        // Help
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Esc, _) => Action::ExitMode,

        _ => Action::None,
    }
}
