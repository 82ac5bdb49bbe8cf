//! `mc-schedule` — the run timeline.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`interval`]  | `RunInterval`, `RunSchedule`                              |
//! | [`loader`]    | `load_intervals_csv`, `load_intervals_reader`             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Ordering model
//!
//! A run is a sequence of half-open intervals `[start, end)` in nanoseconds.
//! Each interval is non-empty and starts no earlier than the previous one
//! ended:
//!
//! ```text
//! start_i < end_i ≤ start_{i+1}
//! ```
//!
//! Gaps between intervals are allowed and simply are not simulated.  The
//! invariant is enforced on every append, so a `RunSchedule` is always
//! sorted and lookups can binary-search.

pub mod error;
pub mod interval;
pub mod loader;


pub use error::{ScheduleError, ScheduleResult};
pub use interval::{RunInterval, RunSchedule};
pub use loader::{load_intervals_csv, load_intervals_reader};
