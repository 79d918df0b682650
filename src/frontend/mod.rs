//! Display abstraction.
//!
//! The `Frontend` trait separates drawing from the presentation core: the
//! core produces a `Frame`, a frontend polls input and draws the frame.

pub mod events;
pub mod tui;

use crate::core::Frame;
use crate::theme::SlideTheme;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Interface every display collaborator implements.
pub trait Frontend {
    /// Return all pending input events, converted to `FrontendEvent`.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw a frame with the given theme.
    fn render(&mut self, frame: &Frame, theme: &SlideTheme) -> Result<()>;

    /// Restore the terminal/window before the application exits.
    fn cleanup(&mut self) -> Result<()>;

    /// Current drawing area in character cells.
    fn size(&self) -> (u16, u16);
}
