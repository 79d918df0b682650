//! Terminal frontend using ratatui.
//!
//! Initializes raw mode plus the alternate screen, converts crossterm events
//! to `FrontendEvent`, and draws the core's frames as a centered paragraph.
//! Startup failures surface immediately with context; cleanup also runs on
//! drop so a panic does not leave the terminal raw.

use crate::core::{Emphasis, Frame};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::SlideTheme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::time::Duration;

pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
}

impl TuiFrontend {
    /// Set up the terminal. Fails fast with a clear message when the
    /// display is unavailable (e.g. not a tty).
    pub fn new(poll_timeout: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode (is this a terminal?)")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout,
        })
    }

    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Key press only; repeats and releases are not navigation
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key(key_event))
            }
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }

    fn line_style(emphasis: Emphasis, theme: &SlideTheme) -> Style {
        let style = Style::default().fg(theme.color(emphasis));
        match emphasis {
            Emphasis::Title | Emphasis::Heading => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, frame: &Frame, theme: &SlideTheme) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();

            let lines: Vec<Line> = frame
                .lines
                .iter()
                .map(|l| {
                    Line::styled(l.text.clone(), Self::line_style(l.emphasis, theme))
                })
                .collect();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()));

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });

            f.render_widget(paragraph, area);
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Restore the terminal even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
