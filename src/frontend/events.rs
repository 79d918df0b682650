//! Frontend-agnostic input events.
//!
//! The TUI translates its native crossterm stream into this enum so the core
//! only handles one event shape.

use crossterm::event::KeyEvent;

/// Events emitted by a frontend towards the core.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn event_creation() {
        let key_event =
            FrontendEvent::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(matches!(key_event, FrontendEvent::Key(_)));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));
    }
}
