//! Slide colors.
//!
//! The theme stores hex color strings (what the config file holds) and
//! resolves them to `ratatui` colors per emphasis level, falling back to a
//! sane default when a hex string is malformed.

use crate::core::Emphasis;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Convert hex string ("#rrggbb") to a ratatui Color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    // byte-indexed below, so multibyte input must be rejected up front
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Convert a ratatui Color back to its hex representation.
pub fn color_to_hex(color: &Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => "#ffffff".to_string(),
    }
}

/// Colors for each emphasis level, stored as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideTheme {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_body")]
    pub body: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_hint")]
    pub hint: String,
    #[serde(default = "default_border")]
    pub border: String,
}

fn default_title() -> String {
    "#ffffff".to_string()
}
fn default_tagline() -> String {
    "#b0c4de".to_string()
}
fn default_heading() -> String {
    "#ffd700".to_string()
}
fn default_body() -> String {
    "#e0ffff".to_string()
}
fn default_accent() -> String {
    "#00ffff".to_string()
}
fn default_hint() -> String {
    "#808080".to_string()
}
fn default_border() -> String {
    "#4682b4".to_string()
}

impl Default for SlideTheme {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            heading: default_heading(),
            body: default_body(),
            accent: default_accent(),
            hint: default_hint(),
            border: default_border(),
        }
    }
}

impl SlideTheme {
    /// Resolve the color for an emphasis level, white on a malformed hex.
    pub fn color(&self, emphasis: Emphasis) -> Color {
        let hex = match emphasis {
            Emphasis::Title => &self.title,
            Emphasis::Tagline => &self.tagline,
            Emphasis::Heading => &self.heading,
            Emphasis::Body => &self.body,
            Emphasis::Accent => &self.accent,
            Emphasis::Hint => &self.hint,
        };
        hex_to_color(hex).unwrap_or(Color::White)
    }

    pub fn border_color(&self) -> Color {
        hex_to_color(&self.border).unwrap_or(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = hex_to_color("#4682b4").unwrap();
        assert_eq!(color, Color::Rgb(0x46, 0x82, 0xb4));
        assert_eq!(color_to_hex(&color), "#4682b4");
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(hex_to_color("#fff").is_none());
        assert!(hex_to_color("not-a-color").is_none());
        assert!(hex_to_color("#gggggg").is_none());
    }

    #[test]
    fn multibyte_hex_rejected_without_panic() {
        // 4 bytes, fails the length check
        assert!(hex_to_color("\u{20ac}a").is_none());
        // 6 bytes, would pass a byte-length check but must not be sliced
        assert!(hex_to_color("\u{20ac}\u{20ac}").is_none());
        assert!(hex_to_color("\u{20ac}abc").is_none());
    }

    #[test]
    fn malformed_theme_color_falls_back_to_white() {
        let theme = SlideTheme {
            body: "nope".to_string(),
            ..SlideTheme::default()
        };
        assert_eq!(theme.color(Emphasis::Body), Color::White);
        // well-formed entries still resolve to their RGB value
        assert_eq!(theme.color(Emphasis::Title), Color::Rgb(0xff, 0xff, 0xff));
    }
}
