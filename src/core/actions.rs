//! Key-to-action routing.
//!
//! Translates a keyboard event into a `SlideAction` using the configured
//! key combos, with the combo-string format shared with the config file
//! ("space", "left", "ctrl+c", "q", ...). Digits jump straight to a topic.

use crate::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the presentation should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    /// Switch between overview and detail view
    Toggle,
    /// Move selection backward (detail view only)
    Prev,
    /// Move selection forward (detail view only)
    Next,
    /// Open detail view at a specific topic index (clamped)
    Jump(usize),
    /// Leave the presentation
    Exit,
    /// Key not bound to anything
    None,
}

/// Convert a key event to the combo-string format used in the config file.
///
/// Modifiers are prefixed in a fixed order ("ctrl+", "alt+", "shift+");
/// shift is only spelled out for non-character keys, since shifted characters
/// already arrive as their shifted form.
pub fn key_event_to_string(key: &KeyEvent) -> String {
    let mut combo = String::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        combo.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        combo.push_str("alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        combo.push_str("shift+");
    }

    match key.code {
        KeyCode::Char(' ') => combo.push_str("space"),
        KeyCode::Char(c) => combo.push(c.to_ascii_lowercase()),
        KeyCode::Left => combo.push_str("left"),
        KeyCode::Right => combo.push_str("right"),
        KeyCode::Up => combo.push_str("up"),
        KeyCode::Down => combo.push_str("down"),
        KeyCode::Enter => combo.push_str("enter"),
        KeyCode::Esc => combo.push_str("esc"),
        KeyCode::Tab => combo.push_str("tab"),
        KeyCode::BackTab => combo.push_str("backtab"),
        KeyCode::Backspace => combo.push_str("backspace"),
        KeyCode::Home => combo.push_str("home"),
        KeyCode::End => combo.push_str("end"),
        KeyCode::PageUp => combo.push_str("pageup"),
        KeyCode::PageDown => combo.push_str("pagedown"),
        KeyCode::F(n) => combo.push_str(&format!("f{}", n)),
        _ => combo.push_str("unknown"),
    }

    combo
}

/// Route a key event to a `SlideAction` using the configured combos.
pub fn route_key(key: &KeyEvent, keys: &KeyConfig) -> SlideAction {
    // Unmodified digits select a topic directly (1 = first topic)
    if key.modifiers.is_empty() {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            return SlideAction::Jump(c as usize - '1' as usize);
        }
    }

    let combo = key_event_to_string(key);

    if keys.exit.iter().any(|k| k == &combo) {
        SlideAction::Exit
    } else if keys.toggle.iter().any(|k| k == &combo) {
        SlideAction::Toggle
    } else if keys.prev.iter().any(|k| k == &combo) {
        SlideAction::Prev
    } else if keys.next.iter().any(|k| k == &combo) {
        SlideAction::Next
    } else {
        SlideAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn combo_strings() {
        assert_eq!(key_event_to_string(&key(KeyCode::Char(' '))), "space");
        assert_eq!(key_event_to_string(&key(KeyCode::Esc)), "esc");
        assert_eq!(key_event_to_string(&key(KeyCode::Left)), "left");
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl+c"
        );
    }

    #[test]
    fn default_bindings_route() {
        let keys = KeyConfig::default();
        assert_eq!(route_key(&key(KeyCode::Char(' ')), &keys), SlideAction::Toggle);
        assert_eq!(route_key(&key(KeyCode::Left), &keys), SlideAction::Prev);
        assert_eq!(route_key(&key(KeyCode::Right), &keys), SlideAction::Next);
        assert_eq!(route_key(&key(KeyCode::Esc), &keys), SlideAction::Exit);
        assert_eq!(route_key(&key(KeyCode::Char('q')), &keys), SlideAction::Exit);
        assert_eq!(route_key(&key(KeyCode::Char('x')), &keys), SlideAction::None);
    }

    #[test]
    fn digits_jump_zero_based() {
        let keys = KeyConfig::default();
        assert_eq!(route_key(&key(KeyCode::Char('1')), &keys), SlideAction::Jump(0));
        assert_eq!(route_key(&key(KeyCode::Char('4')), &keys), SlideAction::Jump(3));
    }

    #[test]
    fn modified_digit_does_not_jump() {
        let keys = KeyConfig::default();
        let ev = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert_eq!(route_key(&ev, &keys), SlideAction::None);
    }
}
