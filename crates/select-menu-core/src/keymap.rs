use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// Abstract menu commands resolved from key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Activate,
    Select,
    Deselect,
    Close,
}

/// Key bindings for menu interaction.
///
/// Plain characters are reserved for the filter input, so the non-arrow
/// alternates use ctrl chords (`Ctrl-p`/`Ctrl-n`). Right/Left are the
/// directional select/deselect shortcuts: they act on the highlighted row
/// without moving the highlight.
#[derive(Clone, Debug)]
pub struct MenuBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
    pub select: Vec<KeyEvent>,
    pub deselect: Vec<KeyEvent>,
    pub close: Vec<KeyEvent>,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyEvent::new(KeyCode::Up), key_ctrl('p')],
            down: vec![KeyEvent::new(KeyCode::Down), key_ctrl('n')],
            activate: vec![KeyEvent::new(KeyCode::Enter)],
            select: vec![KeyEvent::new(KeyCode::Right)],
            deselect: vec![KeyEvent::new(KeyCode::Left)],
            close: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl MenuBindings {
    pub fn command_for(&self, key: &KeyEvent) -> Option<MenuCommand> {
        if self.up.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Up);
        }
        if self.down.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Down);
        }
        if self.activate.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Activate);
        }
        if self.select.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Select);
        }
        if self.deselect.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Deselect);
        }
        if self.close.iter().any(|p| key_event_matches(p, key)) {
            return Some(MenuCommand::Close);
        }
        None
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers {
        shift: false,
        ctrl: true,
        alt: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_require_exact_modifiers() {
        let bindings = MenuBindings::default();
        assert_eq!(
            bindings.command_for(&KeyEvent::new(KeyCode::Up)),
            Some(MenuCommand::Up)
        );
        assert_eq!(bindings.command_for(&key_ctrl('n')), Some(MenuCommand::Down));
        // Plain 'n' belongs to the filter input, not navigation.
        assert_eq!(bindings.command_for(&key_char('n')), None);
    }
}
