//! Interactive dashboard shell.
//!
//! The event loop is single-threaded and synchronous: it blocks on terminal
//! events with a redraw tick, applies each event to the [`App`] state, and
//! redraws. Terminal raw mode and the alternate screen are owned by a guard
//! that restores them unconditionally, including on unwind.

mod app;
mod map;
mod render;

use std::io::{self, Stdout};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::source::DataSet;

pub use app::{App, ORDERS_SECTION, SECTIONS};
pub use map::map_view;

/// Owns the terminal for the lifetime of the dashboard.
///
/// Raw mode and the alternate screen are acquired on construction and
/// released in `Drop`, so every exit path - clean quit, draw error, panic
/// unwind - restores the operator's shell.
#[derive(Debug)]
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            // Leave the shell usable if only half the setup succeeded.
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the dashboard until the operator quits.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event polling fails.
pub fn run(config: &Config, data: DataSet) -> Result<()> {
    let mut guard = TerminalGuard::acquire()?;
    let mut app = App::new(data, config.viewport());
    let tick_rate = config.tick_rate();

    debug!("Dashboard started");
    loop {
        guard.terminal.draw(|f| render::draw(f, &app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                // Resize is handled by the next draw; other events are noise.
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    debug!("Dashboard stopped");

    Ok(())
}
