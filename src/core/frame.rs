//! Rendered output model.
//!
//! A `Frame` is the complete content to display for one state: ordered text
//! lines, each tagged with a coarse emphasis so the frontend can pick colors
//! from the theme. Frames carry no terminal types; drawing is the frontend's
//! job.

/// Layout hint for a line, mapped to a theme color by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Deck title at the top of every frame
    Title,
    /// Deck tagline / subtitle
    Tagline,
    /// Topic title
    Heading,
    /// Regular content text
    Body,
    /// Highlighted entry (the selected topic in the overview)
    Accent,
    /// Key help at the bottom of the frame
    Hint,
}

/// One display line with its emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub text: String,
    pub emphasis: Emphasis,
}

impl FrameLine {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// The rendered content for the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, emphasis: Emphasis) {
        self.lines.push(FrameLine::new(text, emphasis));
    }

    pub fn blank(&mut self) {
        self.lines.push(FrameLine::new("", Emphasis::Body));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendition of the frame, one line per entry.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}
