//! RNG module - seeded LCG and daily seeds
//!
//! The generator draws from a linear congruential generator whose sequence is
//! fully determined by a `u32` seed, so a puzzle is reproducible from
//! `(seed, mode)` alone on every platform.
//!
//! When no seed is given the seed is the local calendar date as `YYYYMMDD`,
//! giving one stable puzzle per day.

use chrono::{Datelike, Local, NaiveDate};

/// 2^32 as a float, the LCG modulus.
const MODULUS: f64 = 4_294_967_296.0;

/// Linear congruential generator, Numerical Recipes constants.
///
/// The state is a plain owned value: each generator run owns its own RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a new RNG with the given seed. Zero is a valid state.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the raw state
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32 with a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / MODULUS
    }

    /// `floor(next_f64() * len)`, an index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_f64() * len as f64) as usize
    }

}

/// A calendar date used to derive the daily seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PuzzleDate {
    /// Build a date, rejecting impossible days and years outside `1..=9999`.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        Self::new(year, month, day)
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// The daily seed, the date read as the decimal number `YYYYMMDD`.
    pub fn seed(&self) -> u32 {
        self.year as u32 * 10_000 + self.month * 100 + self.day
    }

    /// The following calendar day. The last representable day maps to itself.
    pub fn next_day(&self) -> Self {
        self.naive()
            .and_then(|d| d.succ_opt())
            .and_then(|d| Self::new(d.year(), d.month(), d.day()))
            .unwrap_or(*self)
    }

    fn naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for PuzzleDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl std::fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Pick the generator seed: an explicit non-zero seed wins, then the given
/// date, then today's date.
///
/// A zero seed counts as "no seed", so `Some(0)` falls through to the date.
pub fn resolve_seed(seed: Option<u32>, date: Option<PuzzleDate>) -> u32 {
    match seed {
        Some(s) if s != 0 => s,
        _ => date.unwrap_or_else(PuzzleDate::today).seed(),
    }
}
