//! Keyboard accelerators.
//!
//! Maps key events to the editor's menu actions. Only plain Ctrl (optionally
//! with Shift) plus a letter counts as an accelerator, so regular typing
//! never triggers one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Menu action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Open,
    Save,
    Find,
    Replace,
    Quit,
}

impl Shortcut {
    /// Accelerator table, in menu order
    pub const ALL: [Shortcut; 5] = [
        Shortcut::Open,
        Shortcut::Save,
        Shortcut::Find,
        Shortcut::Replace,
        Shortcut::Quit,
    ];

    /// Letter pressed together with Ctrl
    pub fn key(self) -> char {
        match self {
            Shortcut::Open => 'o',
            Shortcut::Save => 's',
            Shortcut::Find => 'f',
            Shortcut::Replace => 'h',
            Shortcut::Quit => 'q',
        }
    }

    /// Accelerator text shown next to menu items
    pub fn label(self) -> &'static str {
        match self {
            Shortcut::Open => "Ctrl+O",
            Shortcut::Save => "Ctrl+S",
            Shortcut::Find => "Ctrl+F",
            Shortcut::Replace => "Ctrl+H",
            Shortcut::Quit => "Ctrl+Q",
        }
    }
}

/// Resolve a key event to its shortcut, if any.
pub fn shortcut_for(key: KeyEvent) -> Option<Shortcut> {
    let mut modifiers = key.modifiers;
    modifiers.remove(KeyModifiers::SHIFT);
    if modifiers != KeyModifiers::CONTROL {
        return None;
    }

    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    let ch = ch.to_ascii_lowercase();
    Shortcut::ALL.into_iter().find(|shortcut| shortcut.key() == ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_letters() {
        assert_eq!(shortcut_for(ctrl('o')), Some(Shortcut::Open));
        assert_eq!(shortcut_for(ctrl('s')), Some(Shortcut::Save));
        assert_eq!(shortcut_for(ctrl('f')), Some(Shortcut::Find));
        assert_eq!(shortcut_for(ctrl('h')), Some(Shortcut::Replace));
        assert_eq!(shortcut_for(ctrl('q')), Some(Shortcut::Quit));
    }

    #[test]
    fn test_ctrl_shift_uppercase() {
        let key = KeyEvent::new(
            KeyCode::Char('F'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(shortcut_for(key), Some(Shortcut::Find));
        assert_eq!(shortcut_for(ctrl('S')), Some(Shortcut::Save));
    }

    #[test]
    fn test_not_shortcuts() {
        // Plain typing
        assert_eq!(
            shortcut_for(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)),
            None
        );
        // Other modifiers
        assert_eq!(
            shortcut_for(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            shortcut_for(KeyEvent::new(
                KeyCode::Char('f'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )),
            None
        );
        // Unbound letter and non-character keys
        assert_eq!(shortcut_for(ctrl('x')), None);
        assert_eq!(
            shortcut_for(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_labels_match_keys() {
        for shortcut in Shortcut::ALL {
            let expected = format!("Ctrl+{}", shortcut.key().to_ascii_uppercase());
            assert_eq!(shortcut.label(), expected);
        }
    }
}
