//! Time windows, document lifespans, and timestamp conversion.
//!
//! All timestamps are `i64`. Wall-clock inputs are converted to epoch
//! milliseconds. Windows are half-open: `[start, end)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TesseraError, TesseraResult};

/// Conversion into an engine timestamp.
pub trait IntoTime {
    fn into_time(self) -> i64;
}

impl IntoTime for i64 {
    fn into_time(self) -> i64 {
        self
    }
}

impl IntoTime for i32 {
    fn into_time(self) -> i64 {
        self as i64
    }
}

impl IntoTime for u32 {
    fn into_time(self) -> i64 {
        self as i64
    }
}

impl IntoTime for DateTime<Utc> {
    fn into_time(self) -> i64 {
        self.timestamp_millis()
    }
}

/// A half-open time range `[start, end)` restricting which entities are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    start: i64,
    end: i64,
}

impl Window {
    /// Create a window. Fails with `InvalidWindow` when `start > end`.
    /// `start == end` is a valid, empty window.
    pub fn new<T: IntoTime>(start: T, end: T) -> TesseraResult<Self> {
        let (start, end) = (start.into_time(), end.into_time());
        if start > end {
            return Err(TesseraError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Everything up to and including `time`.
    pub fn at<T: IntoTime>(time: T) -> Self {
        Self {
            start: i64::MIN,
            end: time.into_time().saturating_add(1),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, time: i64) -> bool {
        self.start <= time && time < self.end
    }

    /// Whether the half-open range `[start, end)` shares an instant with
    /// this window. Empty ranges overlap nothing.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start.max(self.start) < end.min(self.end)
    }
}

/// Temporal validity of a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Lifespan {
    /// Valid whenever the owning entity exists.
    #[default]
    Inherited,
    /// Valid over `[start, end)`.
    Interval { start: i64, end: i64 },
    /// Valid at a single point in time.
    Event { time: i64 },
}

impl Lifespan {
    pub fn overlaps(&self, window: &Window) -> bool {
        match *self {
            Self::Inherited => true,
            Self::Interval { start, end } => window.overlaps(start, end),
            Self::Event { time } => window.contains(time),
        }
    }
}
