//! Pushforward/pullback duality deck.
//!
//! Maps the covariant/contravariant functor pair onto the Maitreya and
//! Messiah figures: forward projection toward future enlightenment versus
//! backward reference to ancient covenant.

use super::{Deck, Topic};

pub fn deck() -> Deck {
    Deck {
        name: "categorical".to_string(),
        title: "Categorical Theology".to_string(),
        tagline: "Pushforward \u{2194} Pullback :: Maitreya \u{2194} Messiah".to_string(),
        topics: vec![
            Topic::new(
                "pushforward",
                "Pushforward (Covariant) \u{2014} Maitreya",
                &[
                    "Maitreya \u{2014} the future Buddha",
                    "Direction: Present \u{2192} Future",
                    "Projects the current state forward, preserving the",
                    "direction of temporal flow.",
                    "",
                    "\u{2022} Covariant functor",
                    "\u{2022} Preserves direction",
                    "\u{2022} Teaches dharma in a degenerate age",
                    "\u{2022} Hope oriented toward future completion",
                    "",
                    "Example: current practice \u{2192} future enlightenment",
                ],
            ),
            Topic::new(
                "pullback",
                "Pullback (Contravariant) \u{2014} Messiah",
                &[
                    "Messiah \u{2014} prophetic fulfillment",
                    "Direction: Future \u{2190} Past",
                    "References fulfillment back to origins, reversing",
                    "direction to validate prophecy.",
                    "",
                    "\u{2022} Contravariant functor",
                    "\u{2022} Reverses direction",
                    "\u{2022} References ancient covenants",
                    "\u{2022} Present fulfillment of past promises",
                    "",
                    "Example: current redemption \u{2190} ancient covenant",
                ],
            ),
            Topic::new(
                "duality",
                "Categorical Duality \u{2014} Temporal Mediation",
                &[
                    "Both concepts mediate between temporal states,",
                    "but in opposite directions:",
                    "",
                    "Maitreya (pushforward):",
                    "  pushes dharma forward into the future,",
                    "  covariant with time's arrow.",
                    "",
                    "Messiah (pullback):",
                    "  pulls prophecy backward from the past,",
                    "  contravariant validation of history.",
                    "",
                    "Together: a complete eschatological framework",
                    "for hope across religious traditions.",
                ],
            ),
        ],
    }
}
