//! The interactive slide state machine.
//!
//! Holds the view mode (overview, detail, closed) and the selected topic
//! index for one deck. State changes only through the handlers below; the
//! selection is clamped on every path, so no out-of-bounds index is ever
//! observable. `render` is a pure function of the state and the deck.

use crate::catalog::Deck;
use crate::core::actions::SlideAction;
use crate::core::frame::{Emphasis, Frame};

/// Coarse display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Topic listing (initial state)
    Overview,
    /// One topic shown in full
    Detail,
    /// Terminal state; the host stops the event loop
    Closed,
}

/// State machine for one deck.
pub struct Presentation {
    deck: Deck,
    mode: ViewMode,
    /// Points at a topic; meaningful in Detail, retained across Overview
    selection: usize,
}

impl Presentation {
    /// Start in overview with the first topic selected.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            mode: ViewMode::Overview,
            selection: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// False once the machine has reached `Closed`.
    pub fn is_running(&self) -> bool {
        self.mode != ViewMode::Closed
    }

    /// Apply a routed action. Returns true if the state changed and the
    /// host should redraw.
    pub fn apply(&mut self, action: SlideAction) -> bool {
        match action {
            SlideAction::Toggle => self.on_toggle(),
            SlideAction::Prev => self.on_direction(-1),
            SlideAction::Next => self.on_direction(1),
            SlideAction::Jump(index) => self.on_jump(index),
            SlideAction::Exit => self.on_exit(),
            SlideAction::None => false,
        }
    }

    /// Switch between overview and detail. No-op once closed.
    pub fn on_toggle(&mut self) -> bool {
        match self.mode {
            ViewMode::Overview => {
                self.mode = ViewMode::Detail;
                self.clamp_selection();
                true
            }
            ViewMode::Detail => {
                self.mode = ViewMode::Overview;
                true
            }
            ViewMode::Closed => false,
        }
    }

    /// Step the selection by `delta` while in detail view, saturating at the
    /// deck bounds. Silent no-op in overview and after close.
    pub fn on_direction(&mut self, delta: i32) -> bool {
        if self.mode != ViewMode::Detail {
            return false;
        }

        let last = self.deck.topic_count().saturating_sub(1);
        let next = if delta < 0 {
            self.selection.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.selection.saturating_add(delta as usize).min(last)
        };

        if next == self.selection {
            return false;
        }
        self.selection = next;
        true
    }

    /// Open detail view at topic `index`, clamped to the deck. No-op once
    /// closed.
    pub fn on_jump(&mut self, index: usize) -> bool {
        if self.mode == ViewMode::Closed {
            return false;
        }

        let last = self.deck.topic_count().saturating_sub(1);
        let clamped = index.min(last);
        let changed = self.mode != ViewMode::Detail || self.selection != clamped;
        self.mode = ViewMode::Detail;
        self.selection = clamped;
        changed
    }

    /// Enter the terminal state. Every later transition is a no-op.
    pub fn on_exit(&mut self) -> bool {
        if self.mode == ViewMode::Closed {
            return false;
        }
        self.mode = ViewMode::Closed;
        true
    }

    fn clamp_selection(&mut self) {
        let last = self.deck.topic_count().saturating_sub(1);
        if self.selection > last {
            self.selection = last;
        }
    }

    /// Produce the frame for the current state. Pure: no I/O, no state
    /// change.
    pub fn render(&self) -> Frame {
        match self.mode {
            ViewMode::Overview => self.render_overview(),
            ViewMode::Detail => self.render_detail(),
            ViewMode::Closed => Frame::new(),
        }
    }

    fn render_overview(&self) -> Frame {
        let mut frame = Frame::new();
        frame.push(self.deck.title.clone(), Emphasis::Title);
        frame.push(self.deck.tagline.clone(), Emphasis::Tagline);
        frame.blank();

        for (index, topic) in self.deck.topics.iter().enumerate() {
            let marker = if index == self.selection { "\u{25b6} " } else { "  " };
            let emphasis = if index == self.selection {
                Emphasis::Accent
            } else {
                Emphasis::Body
            };
            frame.push(format!("{}{}. {}", marker, index + 1, topic.title), emphasis);
        }

        frame.blank();
        frame.push(
            "SPACE open topic | LEFT/RIGHT switch | 1-9 jump | ESC exit",
            Emphasis::Hint,
        );
        frame
    }

    fn render_detail(&self) -> Frame {
        let mut frame = Frame::new();
        frame.push(self.deck.title.clone(), Emphasis::Title);

        // Selection is clamped on every mutation, so the topic exists
        if let Some(topic) = self.deck.topic(self.selection) {
            frame.push(
                format!(
                    "{} ({}/{})",
                    topic.title,
                    self.selection + 1,
                    self.deck.topic_count()
                ),
                Emphasis::Heading,
            );
            frame.blank();
            for line in &topic.body {
                frame.push(line.clone(), Emphasis::Body);
            }
        }

        frame.blank();
        frame.push(
            "SPACE back to overview | LEFT/RIGHT switch topic | ESC exit",
            Emphasis::Hint,
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Deck, Topic};

    fn three_topic_deck() -> Deck {
        Deck {
            name: "test".to_string(),
            title: "Test Deck".to_string(),
            tagline: "three topics".to_string(),
            topics: vec![
                Topic::new("a", "A", &["alpha body"]),
                Topic::new("b", "B", &["beta body"]),
                Topic::new("c", "C", &["gamma body"]),
            ],
        }
    }

    #[test]
    fn starts_in_overview() {
        let p = Presentation::new(three_topic_deck());
        assert_eq!(p.mode(), ViewMode::Overview);
        assert_eq!(p.selection(), 0);
    }

    #[test]
    fn toggle_alternates_starting_from_overview() {
        let mut p = Presentation::new(three_topic_deck());
        for round in 0..4 {
            p.on_toggle();
            let expected = if round % 2 == 0 {
                ViewMode::Detail
            } else {
                ViewMode::Overview
            };
            assert_eq!(p.mode(), expected);
        }
    }

    #[test]
    fn direction_is_noop_in_overview() {
        let mut p = Presentation::new(three_topic_deck());
        assert!(!p.on_direction(1));
        assert!(!p.on_direction(-1));
        assert_eq!(p.mode(), ViewMode::Overview);
        assert_eq!(p.selection(), 0);
    }

    #[test]
    fn direction_saturates_at_both_ends() {
        let mut p = Presentation::new(three_topic_deck());
        p.on_toggle();

        // topic_count steps forward from 0 lands on the last topic
        for _ in 0..3 {
            p.on_direction(1);
        }
        assert_eq!(p.selection(), 2);

        // ...and stays there
        assert!(!p.on_direction(1));
        assert_eq!(p.selection(), 2);

        for _ in 0..5 {
            p.on_direction(-1);
        }
        assert_eq!(p.selection(), 0);
        assert!(!p.on_direction(-1));
    }

    #[test]
    fn selection_always_in_bounds() {
        let mut p = Presentation::new(three_topic_deck());
        p.on_toggle();
        for delta in [1, 1, 1, 1, -1, 1, -1, -1, -1, -1, 1] {
            p.on_direction(delta);
            assert!(p.selection() < p.deck().topic_count());
        }
    }

    #[test]
    fn jump_clamps_and_opens_detail() {
        let mut p = Presentation::new(three_topic_deck());
        assert!(p.on_jump(7));
        assert_eq!(p.mode(), ViewMode::Detail);
        assert_eq!(p.selection(), 2);

        assert!(p.on_jump(0));
        assert_eq!(p.selection(), 0);
    }

    #[test]
    fn exit_is_terminal_from_any_state() {
        let mut p = Presentation::new(three_topic_deck());
        p.on_toggle(); // Detail
        assert!(p.on_exit());
        assert_eq!(p.mode(), ViewMode::Closed);
        assert!(!p.is_running());

        // every subsequent transition is a no-op
        assert!(!p.on_toggle());
        assert!(!p.on_direction(1));
        assert!(!p.on_jump(1));
        assert!(!p.on_exit());
        assert_eq!(p.mode(), ViewMode::Closed);
    }

    #[test]
    fn spec_scenario_three_topics() {
        let mut p = Presentation::new(three_topic_deck());
        assert_eq!(p.mode(), ViewMode::Overview);

        p.on_toggle();
        assert_eq!(p.mode(), ViewMode::Detail);
        assert_eq!(p.selection(), 0);
        assert!(p.render().contains("alpha body"));

        p.on_direction(1);
        assert_eq!(p.selection(), 1);
        assert!(p.render().contains("beta body"));

        for _ in 0..5 {
            p.on_direction(1);
        }
        assert_eq!(p.selection(), 2);
        assert!(p.render().contains("gamma body"));

        p.on_toggle();
        assert_eq!(p.mode(), ViewMode::Overview);
        let frame = p.render();
        for title in ["A", "B", "C"] {
            assert!(frame.contains(title));
        }
        // titles only, no body text in the overview
        assert!(!frame.contains("alpha body"));

        p.on_exit();
        assert_eq!(p.mode(), ViewMode::Closed);
        assert!(p.render().is_empty());
    }

    #[test]
    fn overview_marks_selected_topic() {
        let mut p = Presentation::new(three_topic_deck());
        p.on_jump(1);
        p.on_toggle();
        let frame = p.render();
        assert!(frame.contains("\u{25b6} 2. B"));
    }

    #[test]
    fn apply_routes_all_actions() {
        let mut p = Presentation::new(three_topic_deck());
        assert!(p.apply(SlideAction::Toggle));
        assert!(p.apply(SlideAction::Next));
        assert!(p.apply(SlideAction::Prev));
        assert!(!p.apply(SlideAction::None));
        assert!(p.apply(SlideAction::Exit));
        assert!(!p.is_running());
    }
}
