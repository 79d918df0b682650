//! Built-in content decks.
//!
//! A deck is an ordered set of topics (title plus body lines) covering one
//! theological/etymological subject. All content is constructed once at
//! startup and never mutated; the presentation core only ever borrows it.

use serde::Serialize;

pub mod categorical;
pub mod defects;
pub mod divine_name;
pub mod michael;
pub mod warrior;

/// A named unit of static display content.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    /// Stable identifier, unique within a deck
    pub key: String,
    /// Short title shown in the overview listing
    pub title: String,
    /// Full text shown in the detail view, one entry per display line
    pub body: Vec<String>,
}

impl Topic {
    pub fn new(key: &str, title: &str, body: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            body: body.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// An ordered, immutable collection of topics.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    /// Identifier used on the command line (e.g. "categorical")
    pub name: String,
    /// Display title rendered at the top of every frame
    pub title: String,
    /// One-line subtitle shown in the overview
    pub tagline: String,
    pub topics: Vec<Topic>,
}

impl Deck {
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }
}

/// The full set of built-in decks.
#[derive(Debug, Clone)]
pub struct Catalog {
    decks: Vec<Deck>,
}

impl Catalog {
    /// Build every built-in deck. Called once at process start.
    pub fn builtin() -> Self {
        Self {
            decks: vec![
                categorical::deck(),
                divine_name::deck(),
                michael::deck(),
                defects::deck(),
                warrior::deck(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn names(&self) -> Vec<&str> {
        self.decks.iter().map(|d| d.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_decks_are_well_formed() {
        let catalog = Catalog::builtin();
        assert!(!catalog.decks().is_empty());

        for deck in catalog.decks() {
            assert!(!deck.name.is_empty());
            assert!(!deck.topics.is_empty(), "deck '{}' has no topics", deck.name);

            let mut keys = HashSet::new();
            for topic in &deck.topics {
                assert!(!topic.title.is_empty());
                assert!(!topic.body.is_empty(), "topic '{}' has no body", topic.key);
                assert!(
                    keys.insert(topic.key.as_str()),
                    "duplicate topic key '{}' in deck '{}'",
                    topic.key,
                    deck.name
                );
            }
        }
    }

    #[test]
    fn deck_names_are_unique() {
        let catalog = Catalog::builtin();
        let names = catalog.names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("categorical").is_some());
        assert!(catalog.get("no-such-deck").is_none());
    }
}
