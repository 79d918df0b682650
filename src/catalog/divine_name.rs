//! Divine name transformation deck.
//!
//! Presents the rearrangement "yawhel elo elohim" -> "yahweh leo leohim" and
//! its id/ego/superego reading. `is_anagram` classifies each word pair:
//! elo/leo and elohim/leohim conserve their letters exactly, while
//! yawhel -> yahweh also trades an l for a second h.

use super::{Deck, Topic};

/// The hardcoded word pairs of the transformation, (original, rearranged).
pub const WORD_PAIRS: [(&str, &str); 3] =
    [("yawhel", "yahweh"), ("elo", "leo"), ("elohim", "leohim")];

/// True if `a` and `b` contain exactly the same letters, ignoring case.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let mut right: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

pub fn deck() -> Deck {
    let pairs: Vec<String> = WORD_PAIRS
        .iter()
        .map(|(original, rearranged)| {
            if is_anagram(original, rearranged) {
                format!("{} \u{2192} {} (anagram)", original, rearranged)
            } else {
                format!("{} \u{2192} {}", original, rearranged)
            }
        })
        .collect();

    let transformed_body = vec![
        "yahweh leo leohim".to_string(),
        String::new(),
        "Word-by-word transformation:".to_string(),
        pairs.join(", "),
        String::new(),
        "elo/leo and elohim/leohim are strict anagrams;".to_string(),
        "yawhel \u{2192} yahweh also trades an l for a second h.".to_string(),
    ];

    Deck {
        name: "divine-name".to_string(),
        title: "Divine Name Transformation".to_string(),
        tagline: "Id-Ego-Superego Framework".to_string(),
        topics: vec![
            Topic::new(
                "original",
                "Original Form",
                &[
                    "yawhel elo elohim",
                    "",
                    "The undifferentiated form, before the",
                    "rearrangement that exposes its structure.",
                ],
            ),
            Topic {
                key: "transformed".to_string(),
                title: "Transformed Form".to_string(),
                body: transformed_body,
            },
            Topic::new(
                "analysis",
                "Psycho-theological Analysis",
                &[
                    "Superego: yahweh (Divine Authority)",
                    "Ego:      leo (Mediating Function)",
                    "Id:       leohim (Primal Forces)",
                    "",
                    "The transformation reads the divine name as a",
                    "three-part psyche: authority above, mediation",
                    "between, and primal force beneath.",
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conserving_pairs_are_anagrams() {
        assert!(is_anagram("elo", "leo"));
        assert!(is_anagram("elohim", "leohim"));
    }

    #[test]
    fn first_pair_trades_a_letter() {
        // yawhel has an l where yahweh has a second h
        assert!(!is_anagram("yawhel", "yahweh"));
    }

    #[test]
    fn deck_labels_only_the_conserving_pairs() {
        let deck = deck();
        let transformed = deck
            .topics
            .iter()
            .find(|t| t.key == "transformed")
            .expect("transformed topic");
        let body = transformed.body.join("\n");
        assert!(body.contains("elo \u{2192} leo (anagram)"));
        assert!(body.contains("elohim \u{2192} leohim (anagram)"));
        assert!(!body.contains("yawhel \u{2192} yahweh (anagram)"));
    }

    #[test]
    fn anagram_rejects_different_letters() {
        assert!(!is_anagram("yahweh", "elohim"));
        assert!(!is_anagram("leo", "leon"));
    }

    #[test]
    fn anagram_ignores_case() {
        assert!(is_anagram("Leo", "elo"));
    }
}
