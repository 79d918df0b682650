//! Topological defects deck.
//!
//! Classifies defects by dimension (monopole, vortex, domain wall, texture)
//! with a theological reading of each, plus the homotopy group that protects
//! its stability.

use super::{Deck, Topic};

/// Dimensionality of a topological defect in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectDimension {
    /// 0D defect (monopole)
    Point,
    /// 1D defect (vortex/string)
    Line,
    /// 2D defect (domain wall)
    Surface,
    /// 3D defect (texture)
    Volume,
}

/// The homotopy group governing a defect's stability.
pub fn homotopy_group(dimension: DefectDimension) -> &'static str {
    match dimension {
        DefectDimension::Point => "\u{3c0}\u{2082}(S\u{b2}) = \u{2124} (monopole charge quantized)",
        DefectDimension::Line => "\u{3c0}\u{2081}(S\u{b9}) = \u{2124} (winding number quantized)",
        DefectDimension::Surface => "\u{3c0}\u{2080}(discrete) (distinguishes phases)",
        DefectDimension::Volume => "\u{3c0}\u{2083}(S\u{b3}) = \u{2124} (texture can be classified)",
    }
}

fn defect_topic(
    key: &str,
    title: &str,
    concept: &str,
    symmetry_broken: &str,
    stability: &str,
    dimension: DefectDimension,
    properties: &[&str],
) -> Topic {
    let mut body = vec![
        format!("Theological concept: {}", concept),
        format!("Symmetry broken: {}", symmetry_broken),
        format!("Stability: {}", stability),
        format!("Homotopy group: {}", homotopy_group(dimension)),
        String::new(),
        "Properties:".to_string(),
    ];
    body.extend(properties.iter().map(|p| format!("\u{2022} {}", p)));
    Topic {
        key: key.to_string(),
        title: title.to_string(),
        body,
    }
}

pub fn deck() -> Deck {
    Deck {
        name: "defects".to_string(),
        title: "Topological Defects".to_string(),
        tagline: "Symmetry breaking in a theological framework".to_string(),
        topics: vec![
            defect_topic(
                "monopole",
                "Monopole (0D) \u{2014} The Incarnation",
                "The Incarnation",
                "Breaking of absolute divine unity",
                "Topologically protected \u{2014} stable configuration",
                DefectDimension::Point,
                &[
                    "Point-like manifestation of the infinite",
                    "Breaks transcendence-immanence symmetry",
                    "Stable singularity in spacetime",
                    "Divine concentrated at a point",
                    "Cannot be removed by continuous transformation",
                ],
            ),
            defect_topic(
                "vortex",
                "Vortex/String (1D) \u{2014} Prophetic Lineage",
                "Prophetic Lineage",
                "Breaking of eternal present",
                "Protected by winding number (homotopy group)",
                DefectDimension::Line,
                &[
                    "One-dimensional line through time",
                    "Spiritual circulation around axis",
                    "Connects past and future",
                    "Winding number represents tradition depth",
                    "Cannot be unwound continuously",
                ],
            ),
            defect_topic(
                "wall",
                "Domain Wall (2D) \u{2014} Denominational Boundaries",
                "Denominational Boundaries",
                "Breaking of universal church",
                "Semi-stable \u{2014} can evolve or annihilate",
                DefectDimension::Surface,
                &[
                    "Surface separating different traditions",
                    "Marks theological phase transition",
                    "Energy barrier to cross denominations",
                    "Can merge or annihilate with antiwall",
                    "Represents historical schisms",
                ],
            ),
            defect_topic(
                "texture",
                "Texture (3D) \u{2014} Doctrinal Interpretation Space",
                "Doctrinal Interpretation Space",
                "Breaking of unified interpretation",
                "Metastable \u{2014} can decay to vacuum",
                DefectDimension::Volume,
                &[
                    "Volume-filling configuration",
                    "Gradual variation across space",
                    "Represents hermeneutical complexity",
                    "No sharp boundaries",
                    "Maps out interpretation landscape",
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homotopy_groups_match_dimension() {
        assert!(homotopy_group(DefectDimension::Point).contains("\u{3c0}\u{2082}"));
        assert!(homotopy_group(DefectDimension::Line).contains("\u{3c0}\u{2081}"));
        assert!(homotopy_group(DefectDimension::Surface).contains("\u{3c0}\u{2080}"));
        assert!(homotopy_group(DefectDimension::Volume).contains("\u{3c0}\u{2083}"));
    }

    #[test]
    fn every_topic_lists_its_homotopy_group() {
        for topic in deck().topics {
            assert!(topic.body.iter().any(|line| line.starts_with("Homotopy group:")));
        }
    }
}
