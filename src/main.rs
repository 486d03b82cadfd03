//! Terminal sliding-block puzzle runner (default binary).
//!
//! `play` runs the game in the terminal with crossterm input and the
//! framebuffer renderer; `print` writes the generated puzzle as JSON.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;

use tui_slide::config::{AppConfig, Command, USAGE};
use tui_slide::core::{generate_with_seed, resolve_seed, GameSnapshot, GameState};
use tui_slide::event_log::EventLog;
use tui_slide::input::{handle_key_event, should_quit};
use tui_slide::session::Session;
use tui_slide::term::{GameView, TerminalRenderer, Viewport};
use tui_slide::types::{Mode, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::load(&args)?;

    match config.command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Print => print_puzzle(&config),
        Command::Play => {
            let log = EventLog::from_path(config.log_path.as_deref())?;
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, Session::new(&config, log));

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

#[derive(Serialize)]
struct PrintedPuzzle {
    seed: u32,
    mode: Mode,
    target_operations: u32,
    operations_performed: u32,
    attempts: u32,
    board: Vec<String>,
    state: GameSnapshot,
}

fn print_puzzle(config: &AppConfig) -> Result<()> {
    let puzzle = generate_with_seed(resolve_seed(config.seed, config.date), config.mode);
    let state = GameState::from_puzzle(&puzzle).snapshot();
    let out = PrintedPuzzle {
        seed: puzzle.seed,
        mode: puzzle.mode,
        target_operations: puzzle.target_operations,
        operations_performed: puzzle.operations_performed,
        attempts: puzzle.attempts,
        board: state.board_rows(),
        state,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run<W: std::io::Write>(term: &mut TerminalRenderer, mut session: Session<W>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.state.snapshot_into(&mut snap);
        let fb = view.render(&snap, Some(session.cursor.cell()), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
