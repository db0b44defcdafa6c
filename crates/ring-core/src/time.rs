//! Simulation time bounds.
//!
//! Times are simulator seconds.  A scenario always has a start; the end is
//! optional and, when absent, no upper bound is emitted at all.

use std::fmt;

use crate::{RingError, RingResult};

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// Begin/end of the simulation run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub begin: f64,
    pub end: Option<f64>,
}

impl TimeWindow {
    /// Build a window from raw config values.
    ///
    /// A missing `begin` is a configuration error; `end`, when present, must
    /// not precede `begin`.
    pub fn from_config(begin: Option<f64>, end: Option<f64>) -> RingResult<Self> {
        let begin = begin.ok_or_else(|| RingError::Config("start_time not supplied".into()))?;
        if !begin.is_finite() {
            return Err(RingError::invalid("start_time", format!("must be finite, got {begin}")));
        }
        if let Some(e) = end {
            if !e.is_finite() || e < begin {
                return Err(RingError::invalid(
                    "end_time",
                    format!("must be a finite time not before start_time {begin}, got {e}"),
                ));
            }
        }
        Ok(Self { begin, end })
    }

    /// `true` if the run has an explicit end.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// Activity interval of a rerouter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub begin: f64,
    pub end: f64,
}

impl Interval {
    /// Horizon used for "active for the whole run".
    pub const HORIZON: f64 = 10_000_000.0;

    /// `[0, HORIZON]`: active from time 0 for any realistic run length.
    pub const fn whole_run() -> Self {
        Self { begin: 0.0, end: Self::HORIZON }
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.begin && t <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}
