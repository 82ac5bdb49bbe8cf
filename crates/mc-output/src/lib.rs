//! `mc-output` — getting a descriptor to an engine and results back out.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`job`]      | `EngineJob`: the descriptor plus derived run data, as JSON   |
//! | [`engine`]   | `ProcessEngine` (external program), `DryRunEngine`          |
//! | [`sink`]     | `RecordSink` trait, `ActorCsvSink` (one row per accepted step)|
//! | [`reader`]   | `CsvTableReader`, a `ResultReader` for `ActorCsvSink` files  |
//! | [`observer`] | `ManifestObserver`: writes `(actor, path)` for each handoff   |
//!
//! # Actor output layout
//!
//! One CSV file per recording actor.  The header row is the actor's
//! attribute list in declaration order; each following row is one event
//! record accepted by the actor's whole filter chain.  Vector values are
//! written as three space-separated components; an attribute missing from a
//! record is written as an empty cell.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mc_output::{DryRunEngine, ManifestObserver};
//!
//! let mut engine = DryRunEngine::new("run/job.json");
//! let mut manifest = ManifestObserver::create("run/outputs.csv")?;
//! let outputs = mc_sim::run(&sim, &mut engine, &mut reader, &mut manifest)?;
//! manifest.finish()?;
//! ```

pub mod engine;
pub mod error;
pub mod job;
pub mod observer;
pub mod reader;
pub mod sink;


pub use engine::{DryRunEngine, ProcessEngine};
pub use error::{OutputError, OutputResult};
pub use job::{EngineJob, write_job_json};
pub use observer::ManifestObserver;
pub use reader::{ActorTable, CsvTableReader};
pub use sink::{ActorCsvSink, RecordSink};
