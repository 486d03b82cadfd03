//! JSON-lines event log.
//!
//! One JSON object per line, tagged by `event`. Logging never interrupts
//! play: the first write failure is reported on stderr and the log is
//! switched off.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{Direction, GameStatus, Mode};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    PuzzleGenerated {
        mode: Mode,
        seed: u32,
        target_operations: u32,
        operations_performed: u32,
        attempts: u32,
    },
    Push {
        cell: (i8, i8),
        direction: Direction,
        chain_len: usize,
        moved: usize,
        move_count: u32,
        status: GameStatus,
    },
    Retry {
        retry_count: u32,
    },
    ModeSwitch {
        mode: Mode,
    },
}

#[derive(Serialize)]
struct Line<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    /// Open `path` if given, otherwise a log that drops everything.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn to_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = Line {
            ts_ms: now_ms(),
            record,
        };
        let written = serde_json::to_writer(&mut self.buf, &line)
            .map_err(anyhow::Error::from)
            .and_then(|_| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                out.flush()?;
                Ok(())
            });

        if let Err(e) = written {
            eprintln!("[log] event log disabled: {}", e);
            self.out = None;
        }
    }

    /// Hand back the writer (tests read what was logged).
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
