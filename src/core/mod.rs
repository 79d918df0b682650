//! Presentation core.
//!
//! State machine and frame construction only; no terminal I/O in here.
//! The core mutates its own state in response to routed actions, frontends
//! read the produced frames and draw them.

pub mod actions;
pub mod frame;
pub mod presentation;

pub use actions::SlideAction;
pub use frame::{Emphasis, Frame, FrameLine};
pub use presentation::{Presentation, ViewMode};
