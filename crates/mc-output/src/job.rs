//! The JSON job file handed to an external engine.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use mc_sim::{OutputRef, SimulationDescriptor};
use mc_source::Source;

use crate::OutputResult;

/// Descriptor plus the values an engine would otherwise have to re-derive.
#[derive(Serialize, Debug)]
pub struct EngineJob<'d> {
    pub descriptor:         &'d SimulationDescriptor,
    /// Names of the sources to simulate under the combination policy.
    pub active_sources:     Vec<&'d str>,
    /// `None` leaves seeding to the engine.
    pub thread_seeds:       Option<Vec<u64>>,
    pub expected_primaries: f64,
    pub expected_outputs:   Vec<OutputRef>,
}

impl<'d> EngineJob<'d> {
    pub fn new(descriptor: &'d SimulationDescriptor) -> Self {
        Self {
            descriptor,
            active_sources:     descriptor.active_sources().into_iter().map(Source::name).collect(),
            thread_seeds:       descriptor.thread_seeds(),
            expected_primaries: descriptor.expected_primaries(),
            expected_outputs:   descriptor.expected_outputs(),
        }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the job for `descriptor` to `path`, creating parent directories.
pub fn write_job_json(descriptor: &SimulationDescriptor, path: &Path) -> OutputResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &EngineJob::new(descriptor))?;
    out.flush()?;
    debug!(path = %path.display(), "wrote engine job");
    Ok(())
}
