//! Archangel Michael deck: etymology, scriptural references, theological
//! roles, the Michelangelo naming relationship, and the cross-tradition view.

use super::{Deck, Topic};

/// Key scriptural references, (citation, summary).
pub const BIBLICAL_REFERENCES: [(&str, &str); 5] = [
    (
        "Daniel 10:13",
        "Michael as 'one of the chief princes' helping Daniel",
    ),
    (
        "Daniel 12:1",
        "Michael as the great prince who protects Daniel's people",
    ),
    (
        "Jude 1:9",
        "Michael the archangel disputes with the devil over Moses' body",
    ),
    (
        "Revelation 12:7-9",
        "Michael and his angels fight the dragon (Satan)",
    ),
    ("Quran 2:98", "Michael (M\u{12b}k\u{101}l) is among the angels"),
];

pub fn deck() -> Deck {
    let references: Vec<String> = BIBLICAL_REFERENCES
        .iter()
        .map(|(citation, summary)| format!("{} \u{2014} {}", citation, summary))
        .collect();

    let mut reference_body = vec!["Ancient textual references:".to_string(), String::new()];
    reference_body.extend(references);

    Deck {
        name: "michael".to_string(),
        title: "Archangel Michael".to_string(),
        tagline: "Who is like God?".to_string(),
        topics: vec![
            Topic::new(
                "etymology",
                "Name Etymology",
                &[
                    "MICHAEL (\u{5de}\u{5bf}\u{5d9}\u{5db}\u{5b8}\u{5d0}\u{5b5}\u{5dc} \u{2014} Mikha'el)",
                    "",
                    "Hebrew: \"Who is like God?\"",
                    "\u{2022} Mi = who",
                    "\u{2022} Kha = like, as",
                    "\u{2022} El = God",
                    "",
                    "A rhetorical question asserting that nothing is",
                    "comparable to God. It contrasts Lucifer's \"I will",
                    "be like the Most High\" with Michael's implied",
                    "answer: no one.",
                ],
            ),
            Topic {
                key: "references".to_string(),
                title: "Scriptural References".to_string(),
                body: reference_body,
            },
            Topic::new(
                "roles",
                "Theological Roles",
                &[
                    "Divine Warrior \u{2014} commander of the heavenly armies",
                    "  against evil (Christian/Jewish)",
                    "Dragon Slayer \u{2014} defeats the dragon and casts him",
                    "  from heaven (Revelation)",
                    "Psychopomp \u{2014} guides souls on their journey to",
                    "  heaven (Catholic/Orthodox)",
                    "Protector of Israel \u{2014} guardian and advocate for",
                    "  the people of Israel (Jewish)",
                    "Weigher of Souls \u{2014} judge at the last judgment",
                ],
            ),
            Topic::new(
                "michelangelo",
                "Michael and Michelangelo",
                &[
                    "Michelangelo = \"Michael Angel\" (Michele + Angelo).",
                    "The artist was named AFTER the archangel, not the",
                    "other way around.",
                    "",
                    "Timeline:",
                    "3rd c. BCE   Book of Enoch mentions Michael",
                    "2nd c. BCE   Book of Daniel, Michael as protector",
                    "1st c. CE    New Testament references (Jude, Revelation)",
                    "7th c. CE    Quran mentions M\u{12b}k\u{101}l",
                    "1475 CE      Michelangelo Buonarroti born",
                    "1508-1512    Sistine Chapel ceiling painted",
                    "",
                    "The biblical figure predates the artist by more",
                    "than 1,600 years.",
                ],
            ),
            Topic::new(
                "traditions",
                "Across Traditions",
                &[
                    "Judaism \u{2014} advocate for Israel, associated with",
                    "  Chesed (loving-kindness)",
                    "Christianity \u{2014} leader of God's army, weigher of",
                    "  souls, feast on September 29 (Michaelmas)",
                    "Islam \u{2014} M\u{12b}k\u{101}\u{2be}\u{12b}l, provider of nourishment,",
                    "  associated with mercy rather than judgment",
                    "Eastern Orthodox \u{2014} Archistrategos, supreme",
                    "  commander of the heavenly hosts",
                    "",
                    "Common themes: divine authority, protection of",
                    "the faithful, opposition to evil, mediation",
                    "between realms.",
                ],
            ),
        ],
    }
}
