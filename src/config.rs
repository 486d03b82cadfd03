//! Runtime configuration from the environment and command line.
//!
//! Environment variables give defaults, flags override them:
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `SLIDE_MODE` | `--mode` | `normal` or `hard` |
//! | `SLIDE_SEED` | `--seed` | explicit puzzle seed |
//! | - | `--date` | `YYYY-MM-DD` daily puzzle |
//! | `SLIDE_LOG_PATH` | `--log` | JSON-lines event log file |

use anyhow::{anyhow, Result};

use crate::core::PuzzleDate;
use crate::types::Mode;

pub const USAGE: &str = "\
usage: tui-slide [play|print] [--mode normal|hard] [--seed N] [--date YYYY-MM-DD] [--log PATH]

  play    play the puzzle in the terminal (default)
  print   print the generated puzzle as JSON and exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Play,
    Print,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub command: Command,
    pub mode: Mode,
    pub seed: Option<u32>,
    pub date: Option<PuzzleDate>,
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Defaults from the process environment, then `args` (without argv[0]).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env_with(|k| std::env::var(k).ok()).with_args(args)
    }

    /// Environment defaults. Unparseable values are ignored.
    pub fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Self {
        let mode = get("SLIDE_MODE")
            .and_then(|s| Mode::from_str(&s))
            .unwrap_or_default();
        let seed = get("SLIDE_SEED").and_then(|s| s.trim().parse::<u32>().ok());
        let log_path = get("SLIDE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            command: Command::Play,
            mode,
            seed,
            date: None,
            log_path,
        }
    }

    /// Apply command-line arguments on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        if let Some(first) = args.first() {
            match first.as_str() {
                "play" => i = 1,
                "print" => {
                    self.command = Command::Print;
                    i = 1;
                }
                _ => {}
            }
        }

        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => {
                    self.command = Command::Help;
                }
                "--mode" => {
                    let v = flag_value(args, &mut i, "--mode")?;
                    self.mode =
                        Mode::from_str(v).ok_or_else(|| anyhow!("unknown mode: {}", v))?;
                }
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--date" => {
                    let v = flag_value(args, &mut i, "--date")?;
                    let date = PuzzleDate::parse(v)
                        .ok_or_else(|| anyhow!("invalid --date value (want YYYY-MM-DD): {}", v))?;
                    self.date = Some(date);
                }
                "--log" => {
                    let v = flag_value(args, &mut i, "--log")?;
                    self.log_path = Some(v.to_string());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        Ok(self)
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
