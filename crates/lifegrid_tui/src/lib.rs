pub mod renderer;
pub mod surface;
pub mod widget;

pub use renderer::Renderer;
pub use surface::{PixelBuffer, RenderSurface};
pub use widget::SurfaceWidget;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Owns the terminal while the interactive front-end runs.
///
/// `init` switches to the alternate screen with raw mode and mouse capture
/// so clicks reach the app. The terminal is restored once, by `exit` or on
/// drop, and only if `init` ran.
pub struct Tui<B: Backend = CrosstermBackend<Stdout>> {
    pub terminal: Terminal<B>,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()))
    }
}

impl<B: Backend> Tui<B> {
    pub fn with_backend(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            active: false,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn init(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.active = true;
        enable_raw_mode()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Full terminal area, used to size the render surface before the
    /// first frame.
    pub fn area(&self) -> Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}
