//! Key mapping for each navigator mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Command issued while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    /// Enter the selected directory.
    Confirm,

    /// Switch to search mode.
    Search,
    /// Clear the filter and the status line.
    ClearFilter,
    /// Collect the current directory and reveal it.
    Collect,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    Quit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to a browsing action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            (KeyCode::Esc, _) => KeyAction::ClearFilter,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                KeyAction::JumpToBottom
            }
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            (KeyCode::Enter, _) => KeyAction::Confirm,

            // Search
            (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::Search,
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => KeyAction::Search,

            // Collect & open
            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Collect,
            (KeyCode::Char('R'), KeyModifiers::NONE | KeyModifiers::SHIFT) => KeyAction::Collect,

            // UI toggles
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// Input while the search prompt is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Append a character to the query.
    Insert(char),
    /// Remove the last character of the query.
    Backspace,
    /// Leave search mode, keeping the query.
    Finish,
    Quit,
    None,
}

impl SearchAction {
    /// Convert a key event to a search action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => SearchAction::Quit,
            (KeyCode::Esc, _) | (KeyCode::Enter, _) => SearchAction::Finish,
            (KeyCode::Backspace, _) => SearchAction::Backspace,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => SearchAction::Insert(c),
            _ => SearchAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "Enter", description: "Enter directory" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
            ],
        },
        HelpSection {
            title: "Filter",
            bindings: vec![
                KeyBinding { keys: "/ Ctrl-w", description: "Start typing a filter" },
                KeyBinding { keys: "Enter/Esc", description: "Stop typing, keep filter" },
                KeyBinding { keys: "Esc", description: "Clear filter and status" },
            ],
        },
        HelpSection {
            title: "Commands",
            bindings: vec![
                KeyBinding { keys: "r", description: "Collect & open folder" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q Ctrl-c", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_browsing_commands_are_reachable() {
        let cases = [
            (key(KeyCode::Up, KeyModifiers::NONE), KeyAction::MoveUp),
            (key(KeyCode::Char('j'), KeyModifiers::NONE), KeyAction::MoveDown),
            (key(KeyCode::Enter, KeyModifiers::NONE), KeyAction::Confirm),
            (key(KeyCode::Char('w'), KeyModifiers::CONTROL), KeyAction::Search),
            (key(KeyCode::Char('/'), KeyModifiers::NONE), KeyAction::Search),
            (key(KeyCode::Esc, KeyModifiers::NONE), KeyAction::ClearFilter),
            (key(KeyCode::Char('r'), KeyModifiers::NONE), KeyAction::Collect),
            (key(KeyCode::Char('R'), KeyModifiers::SHIFT), KeyAction::Collect),
            (key(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit),
            (key(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit),
        ];
        for (event, expected) in cases {
            assert_eq!(KeyAction::from_key_event(event), expected, "{event:?}");
        }
    }

    #[test]
    fn test_search_keys_are_text() {
        assert_eq!(
            SearchAction::from_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            SearchAction::Insert('q')
        );
        assert_eq!(
            SearchAction::from_key_event(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            SearchAction::Insert('R')
        );
        assert_eq!(
            SearchAction::from_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            SearchAction::Finish
        );
        assert_eq!(
            SearchAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            SearchAction::Quit
        );
        assert_eq!(
            SearchAction::from_key_event(key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            SearchAction::None
        );
    }
}
