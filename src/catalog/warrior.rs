//! Warrior deity correspondence deck: Erlang Shen and Archangel Michael as
//! two manifestations of one archetype, related by an identity functor.

use super::{Deck, Topic};

pub fn deck() -> Deck {
    Deck {
        name: "warrior".to_string(),
        title: "Warrior Deity Correspondence".to_string(),
        tagline: "\u{4e8c}\u{90ce}\u{795e} \u{2194} Archangel Michael \u{2014} Identity Functor".to_string(),
        topics: vec![
            Topic::new(
                "erlang",
                "\u{4e8c}\u{90ce}\u{795e} (Erlang Shen)",
                &[
                    "Tradition: Chinese (Taoist/Folk)",
                    "",
                    "\u{2022} Three-eyed warrior god",
                    "\u{2022} Defeats demons",
                    "\u{2022} Controls floods",
                    "\u{2022} Celestial hound companion",
                    "\u{2022} Maintains cosmic order",
                ],
            ),
            Topic::new(
                "michael",
                "Archangel Michael",
                &[
                    "Tradition: Abrahamic (Judaism/Christianity/Islam)",
                    "",
                    "\u{2022} Chief of heavenly armies",
                    "\u{2022} Defeats Satan and demons",
                    "\u{2022} Warrior angel protector",
                    "\u{2022} Defender of divine order",
                    "\u{2022} Guardian of the faithful",
                ],
            ),
            Topic::new(
                "identity",
                "Identity Functor",
                &[
                    "The identity functor preserves essential",
                    "properties across different cultural contexts.",
                    "",
                    "Categorical correspondence:",
                    "1. Warrior archetype: both are divine warriors",
                    "2. Protective function: both defend against evil",
                    "3. Active intervention: both engage in cosmic battles",
                    "4. Maintaining order: both uphold divine/cosmic law",
                ],
            ),
        ],
    }
}
