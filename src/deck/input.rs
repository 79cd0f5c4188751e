// SPDX-License-Identifier: MPL-2.0
//! Maps raw keyboard input to deck commands.

use iced::keyboard::{self, key::Named};

/// Commands shared by every input source (controls, keys, swipes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the next slide.
    Advance,
    /// Show the previous slide.
    Retreat,
    /// Collapse every expanded panel and note.
    CollapseAll,
}

/// Returns the command bound to `key`, if any.
///
/// `ArrowRight` and `Space` advance, `ArrowLeft` retreats and `Escape`
/// collapses all expanded panels.
#[must_use]
pub fn command_for_key(key: &keyboard::Key) -> Option<Command> {
    match key {
        keyboard::Key::Named(Named::ArrowRight | Named::Space) => Some(Command::Advance),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Command::Retreat),
        keyboard::Key::Named(Named::Escape) => Some(Command::CollapseAll),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_navigate() {
        assert_eq!(
            command_for_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Command::Advance)
        );
        assert_eq!(
            command_for_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Command::Retreat)
        );
    }

    #[test]
    fn space_advances() {
        assert_eq!(
            command_for_key(&keyboard::Key::Named(Named::Space)),
            Some(Command::Advance)
        );
    }

    #[test]
    fn escape_collapses() {
        assert_eq!(
            command_for_key(&keyboard::Key::Named(Named::Escape)),
            Some(Command::CollapseAll)
        );
    }

    #[test]
    fn other_keys_are_unbound() {
        assert_eq!(command_for_key(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(
            command_for_key(&keyboard::Key::Character("n".into())),
            None
        );
    }
}
