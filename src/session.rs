//! Play session: the current puzzle, the edge cursor and the event log,
//! driven by [`GameAction`]s.
//!
//! This is the glue between input and the core. It owns no terminal state,
//! so it can be driven directly from tests.

use std::io::Write;

use crate::config::AppConfig;
use crate::core::{generate_with_seed, GameState, GeneratedPuzzle, PuzzleDate};
use crate::event_log::{EventLog, LogRecord};
use crate::input::EdgeCursor;
use crate::types::{GameAction, Mode, SLIDE_FLASH_MS};

/// Where the current seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Fixed(u32),
    Daily(PuzzleDate),
}

impl SeedSource {
    /// Same precedence as [`crate::core::resolve_seed`]: a non-zero seed
    /// wins, then the date, then today.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.seed {
            Some(seed) if seed != 0 => SeedSource::Fixed(seed),
            _ => SeedSource::Daily(config.date.unwrap_or_else(PuzzleDate::today)),
        }
    }

    pub fn seed(&self) -> u32 {
        match self {
            SeedSource::Fixed(seed) => *seed,
            SeedSource::Daily(date) => date.seed(),
        }
    }

    /// The following puzzle: next day, or the next non-zero seed.
    pub fn advance(&self) -> Self {
        match self {
            SeedSource::Fixed(seed) => SeedSource::Fixed(seed.checked_add(1).unwrap_or(1)),
            SeedSource::Daily(date) => SeedSource::Daily(date.next_day()),
        }
    }
}

pub struct Session<W: Write> {
    pub mode: Mode,
    pub source: SeedSource,
    pub puzzle: GeneratedPuzzle,
    pub state: GameState,
    pub cursor: EdgeCursor,
    log: EventLog<W>,
    flash_ms: u32,
}

impl<W: Write> Session<W> {
    pub fn new(config: &AppConfig, log: EventLog<W>) -> Self {
        let source = SeedSource::from_config(config);
        let puzzle = generate_with_seed(source.seed(), config.mode);
        let state = GameState::from_puzzle(&puzzle);
        let mut session = Self {
            mode: config.mode,
            source,
            puzzle,
            state,
            cursor: EdgeCursor::new(config.mode),
            log,
            flash_ms: 0,
        };
        session.log_generated();
        session
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::CursorNext => self.cursor.next(),
            GameAction::CursorPrev => self.cursor.prev(),
            GameAction::Push => self.push(),
            GameAction::Retry => {
                self.state.retry();
                self.flash_ms = 0;
                self.log.record(&LogRecord::Retry {
                    retry_count: self.state.retry_count,
                });
            }
            GameAction::SwitchMode => {
                self.mode = self.mode.toggled();
                self.cursor.set_mode(self.mode);
                self.log.record(&LogRecord::ModeSwitch { mode: self.mode });
                self.regenerate();
            }
            GameAction::NextPuzzle => {
                self.source = self.source.advance();
                self.regenerate();
            }
        }
    }

    /// Advance the slide highlight by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.flash_ms == 0 {
            return;
        }
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
        if self.flash_ms == 0 {
            self.state.set_animating(false);
        }
    }

    fn push(&mut self) {
        let (row, col) = self.cursor.cell();
        let Some(report) = self.state.push_from_edge(row, col) else {
            return;
        };

        if !report.moved.is_empty() {
            self.state.set_animating(true);
            self.flash_ms = SLIDE_FLASH_MS;
        }

        self.log.record(&LogRecord::Push {
            cell: (row, col),
            direction: report.direction,
            chain_len: report.chain_len,
            moved: report.moved.len(),
            move_count: self.state.move_count,
            status: report.status,
        });
    }

    fn regenerate(&mut self) {
        self.puzzle = generate_with_seed(self.source.seed(), self.mode);
        self.state = GameState::from_puzzle(&self.puzzle);
        self.flash_ms = 0;
        self.log_generated();
    }

    fn log_generated(&mut self) {
        self.log.record(&LogRecord::PuzzleGenerated {
            mode: self.puzzle.mode,
            seed: self.puzzle.seed,
            target_operations: self.puzzle.target_operations,
            operations_performed: self.puzzle.operations_performed,
            attempts: self.puzzle.attempts,
        });
    }

    pub fn into_log(self) -> EventLog<W> {
        self.log
    }
}
