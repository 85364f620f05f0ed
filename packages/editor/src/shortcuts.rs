//! Keyboard shortcuts for history navigation.
//!
//! Ctrl+Z / Cmd+Z undo. Ctrl+Y, Ctrl+Shift+Z and Cmd+Shift+Z redo.

use serde::{Deserialize, Serialize};

/// A key press with its modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn key(key: char) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            key,
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            key,
            meta: true,
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCommand {
    Undo,
    Redo,
}

impl HistoryCommand {
    pub fn from_chord(chord: &KeyChord) -> Option<Self> {
        if !(chord.ctrl || chord.meta) || chord.alt {
            return None;
        }

        match (chord.key.to_ascii_lowercase(), chord.shift) {
            ('z', false) => Some(HistoryCommand::Undo),
            ('z', true) => Some(HistoryCommand::Redo),
            ('y', false) if chord.ctrl => Some(HistoryCommand::Redo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_chords() {
        assert_eq!(
            HistoryCommand::from_chord(&KeyChord::ctrl('z')),
            Some(HistoryCommand::Undo)
        );
        assert_eq!(
            HistoryCommand::from_chord(&KeyChord::meta('z')),
            Some(HistoryCommand::Undo)
        );
    }

    #[test]
    fn test_redo_chords() {
        assert_eq!(
            HistoryCommand::from_chord(&KeyChord::ctrl('y')),
            Some(HistoryCommand::Redo)
        );
        assert_eq!(
            HistoryCommand::from_chord(&KeyChord::ctrl('Z').with_shift()),
            Some(HistoryCommand::Redo)
        );
        assert_eq!(
            HistoryCommand::from_chord(&KeyChord::meta('z').with_shift()),
            Some(HistoryCommand::Redo)
        );
    }

    #[test]
    fn test_unmodified_keys_ignored() {
        assert_eq!(HistoryCommand::from_chord(&KeyChord::key('z')), None);
        assert_eq!(HistoryCommand::from_chord(&KeyChord::ctrl('x')), None);
    }
}
