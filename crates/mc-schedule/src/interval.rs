//! Run intervals and the ordered schedule.

use mc_core::{ConfigError, ConfigResult};

// ── RunInterval ───────────────────────────────────────────────────────────────

/// A half-open simulated time window `[start, end)`, in nanoseconds.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunInterval {
    pub start: f64,
    pub end:   f64,
}

impl RunInterval {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }
}

// ── RunSchedule ───────────────────────────────────────────────────────────────

/// Strictly ordered, non-overlapping run intervals.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunSchedule {
    intervals: Vec<RunInterval>,
}

impl RunSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from `(start, end)` pairs, appending in order.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> ConfigResult<Self> {
        let mut schedule = Self::new();
        for &(start, end) in pairs {
            schedule.append_interval(start, end)?;
        }
        Ok(schedule)
    }

    /// Append `[start, end)` after the current last interval.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidInterval`] if the interval is empty or reversed
    /// (`end ≤ start`), not finite, negative, or starts before the previous
    /// interval ends.
    pub fn append_interval(&mut self, start: f64, end: f64) -> ConfigResult<()> {
        let fail = |reason: String| ConfigError::InvalidInterval { start, end, reason };

        if !(start.is_finite() && end.is_finite()) {
            return Err(fail("bounds must be finite".into()));
        }
        if start < 0.0 {
            return Err(fail("start must not be negative".into()));
        }
        if end <= start {
            return Err(fail("end must be greater than start".into()));
        }
        if let Some(prev) = self.intervals.last() {
            if start < prev.end {
                return Err(fail(format!(
                    "overlaps the previous interval [{}, {})",
                    prev.start, prev.end
                )));
            }
        }
        self.intervals.push(RunInterval { start, end });
        Ok(())
    }

    pub fn intervals(&self) -> &[RunInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of interval lengths; gaps are not counted.
    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(RunInterval::duration).sum()
    }

    /// Start of the first interval to end of the last, gaps included.
    pub fn span(&self) -> Option<RunInterval> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some(RunInterval { start: first.start, end: last.end })
    }

    /// Index of the interval containing `time`, or `None` if `time` falls in
    /// a gap or outside the schedule.
    pub fn interval_at(&self, time: f64) -> Option<usize> {
        // First interval whose end is beyond `time`; sorted by construction.
        let idx = self.intervals.partition_point(|iv| iv.end <= time);
        self.intervals
            .get(idx)
            .filter(|iv| iv.contains(time))
            .map(|_| idx)
    }

    /// Fail with [`ConfigError::EmptySchedule`] if no interval was appended.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.intervals.is_empty() {
            Err(ConfigError::EmptySchedule)
        } else {
            Ok(())
        }
    }
}
