//! CSV run-interval loader.
//!
//! # CSV format
//!
//! One row per interval, in run order.  Each bound is a quantity: a number
//! followed by an optional unit symbol from the unit registry.  A bare
//! number is taken as nanoseconds.
//!
//! ```csv
//! start,end
//! 0 s,2 s
//! 2 s,3 s
//! ```
//!
//! Rows are appended one by one, so an out-of-order or overlapping row fails
//! with the same `InvalidInterval` error as a programmatic append.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mc_core::parse_quantity;

use crate::{RunSchedule, ScheduleError};

#[derive(Deserialize)]
struct IntervalRecord {
    start: String,
    end:   String,
}

/// Load a [`RunSchedule`] from a CSV file.
pub fn load_intervals_csv(path: &Path) -> Result<RunSchedule, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_intervals_reader(file)
}

/// Like [`load_intervals_csv`] but accepts any `Read` source.
pub fn load_intervals_reader<R: Read>(reader: R) -> Result<RunSchedule, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut schedule = RunSchedule::new();

    for (row, result) in csv_reader.deserialize::<IntervalRecord>().enumerate() {
        let rec = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let start = parse_quantity(&rec.start)
            .map_err(|e| ScheduleError::Parse(format!("row {row} start: {e}")))?;
        let end = parse_quantity(&rec.end)
            .map_err(|e| ScheduleError::Parse(format!("row {row} end: {e}")))?;
        schedule.append_interval(start, end)?;
    }

    Ok(schedule)
}
