//! Interactive terminal session for entering indicators.
//!
//! The screen is split in two: a side panel with the entry form and a main
//! area with the entries table, the per-category summary and the final grade.
//! Results are recomputed from the session on every frame.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ecoscore::tui::SessionExplorer;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let mut explorer = SessionExplorer::new(PathBuf::from("out.xlsx"), Duration::from_millis(100))?;
//! let session = explorer.run()?;
//! println!("{} indicators entered", session.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod form;
pub mod render;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::observability::set_tui_active;
use crate::session::Session;
use app::FormApp;

/// Session TUI manager
pub struct SessionExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: Option<FormApp>,
    tick_rate: Duration,
}

impl SessionExplorer {
    /// Take over the terminal for a fresh session
    pub fn new(export_path: PathBuf, tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: Some(FormApp::new(export_path)),
            tick_rate,
        })
    }

    /// Run the event loop until the user quits, returning the session
    pub fn run(&mut self) -> Result<Session> {
        let Some(mut app) = self.app.take() else {
            return Ok(Session::new());
        };

        loop {
            self.terminal.draw(|f| app.render(f))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases as separate events
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if app.handle_key(key)? {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(app.into_session())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for SessionExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
