/// Latched keyboard state fed by the host's key-down / key-up events.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Restarts the run, but only while the game is over.
    Confirm,
}

impl Key {
    /// Map a DOM-style key name onto a game key.  Unknown names yield `None`
    /// and are meant to be dropped by the caller.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Fire),
            "Enter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// `left`/`right` are level-triggered latches read at the start of each tick.
/// `Fire` and `Confirm` are edge-triggered: holding the key down (or the OS
/// repeating it) produces a single press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    fire_held: bool,
    confirm_held: bool,
}

impl InputState {
    /// Latch `key` as held.  Returns `true` only on the up→down transition.
    pub fn key_down(&mut self, key: Key) -> bool {
        let slot = self.slot(key);
        let pressed = !*slot;
        *slot = true;
        pressed
    }

    pub fn key_up(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire_held,
            Key::Confirm => self.confirm_held,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Fire => &mut self.fire_held,
            Key::Confirm => &mut self.confirm_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_maps_known_keys() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), Some(Key::Fire));
        assert_eq!(Key::from_name("Enter"), Some(Key::Confirm));
    }

    #[test]
    fn from_name_ignores_unknown_keys() {
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name("x"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn direction_latch_follows_down_and_up() {
        let mut input = InputState::default();
        input.key_down(Key::Left);
        assert!(input.left);
        assert!(!input.right);
        input.key_up(Key::Left);
        assert!(!input.left);
    }

    #[test]
    fn fire_is_edge_triggered() {
        let mut input = InputState::default();
        assert!(input.key_down(Key::Fire));
        // Auto-repeat while held
        assert!(!input.key_down(Key::Fire));
        assert!(!input.key_down(Key::Fire));
        input.key_up(Key::Fire);
        assert!(input.key_down(Key::Fire));
    }

    #[test]
    fn key_up_without_down_is_harmless() {
        let mut input = InputState::default();
        input.key_up(Key::Right);
        assert_eq!(input, InputState::default());
    }
}
