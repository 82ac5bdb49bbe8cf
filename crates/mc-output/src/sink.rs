//! Per-actor record output.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use mc_actor::{Actor, ActorPipeline, EventRecord};
use mc_sim::SimulationDescriptor;

use crate::{OutputError, OutputResult};

/// Destination for the event records one actor sees.
pub trait RecordSink {
    /// Offer one record; returns whether it passed the filter chain and was
    /// written.
    fn write_record(&mut self, record: &EventRecord) -> OutputResult<bool>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Writes the records accepted by one actor's filter chain as CSV rows.
pub struct ActorCsvSink<'d> {
    pipeline: &'d ActorPipeline,
    actor:    &'d Actor,
    writer:   Writer<File>,
    written:  u64,
    rejected: u64,
    finished: bool,
}

impl<'d> ActorCsvSink<'d> {
    /// Open the actor's declared output path and write the header row.
    pub fn create(descriptor: &'d SimulationDescriptor, actor: &str) -> OutputResult<Self> {
        let declared = recording_actor(descriptor, actor)?
            .output()
            .ok_or_else(|| OutputError::NotRecording(actor.to_owned()))?;
        Self::create_at(descriptor, actor, declared)
    }

    /// Like [`create`](Self::create) but writes to `path`.
    pub fn create_at(
        descriptor: &'d SimulationDescriptor,
        actor:      &str,
        path:       &Path,
    ) -> OutputResult<Self> {
        let actor = recording_actor(descriptor, actor)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut writer = Writer::from_path(path)?;
        writer.write_record(actor.attributes().iter().map(|a| a.as_str()))?;
        debug!(actor = actor.name(), path = %path.display(), "opened actor output");

        Ok(Self {
            pipeline: descriptor.pipeline(),
            actor,
            writer,
            written:  0,
            rejected: 0,
            finished: false,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

impl RecordSink for ActorCsvSink<'_> {
    fn write_record(&mut self, record: &EventRecord) -> OutputResult<bool> {
        if !self.pipeline.accepts(self.actor, record) {
            self.rejected += 1;
            return Ok(false);
        }
        let row = self
            .actor
            .project(record)
            .into_iter()
            .map(|cell| cell.map(ToString::to_string).unwrap_or_default());
        self.writer.write_record(row)?;
        self.written += 1;
        Ok(true)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        debug!(actor = self.actor.name(), rows = self.written, rejected = self.rejected, "closed actor output");
        Ok(())
    }
}

fn recording_actor<'d>(descriptor: &'d SimulationDescriptor, name: &str) -> OutputResult<&'d Actor> {
    let actor = descriptor
        .actor(name)
        .ok_or_else(|| OutputError::UnknownActor(name.to_owned()))?;
    if !actor.kind().records_steps() {
        return Err(OutputError::NotRecording(name.to_owned()));
    }
    Ok(actor)
}
