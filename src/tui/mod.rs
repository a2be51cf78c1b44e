//! Terminal UI for tic-tac-toe.
//!
//! Every key press is handled as one synchronous transition
//! (read state, validate, mutate, re-derive status, redraw), so the
//! rendered status can never disagree with the board.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::game::Position;
pub use app::App;

/// Runs the TUI until the player quits.
pub fn run() -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err:?}");
    }

    res
}

/// Draw/handle loop. Returns when the player quits.
fn run_game<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut app = App::new();

    loop {
        let snapshot = app.snapshot();
        let status = app.status_line();
        terminal.draw(|frame| ui::draw(frame, &snapshot, app.cursor(), &status))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            debug!(code = ?key.code, "Key pressed");

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("Player quit");
                    return Ok(());
                }
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                KeyCode::Char(c @ '1'..='9') => {
                    // Cells are numbered 1-9 in row-major order.
                    let index = c as usize - '1' as usize;
                    if let Some(pos) = Position::from_index(index) {
                        app.set_cursor(pos);
                        app.place(pos);
                    }
                }
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.set_cursor(input::move_cursor(app.cursor(), key.code));
                }
                _ => {}
            }
        }
    }
}
