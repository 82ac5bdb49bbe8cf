//! Records every handed-off output in a CSV manifest.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use mc_sim::{OutputRef, RunObserver};

use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that appends one `actor,path` row per output forwarded
/// to the result reader.
///
/// Errors from the writer are stored internally because `RunObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error] or call [`finish`][Self::finish].
pub struct ManifestObserver {
    writer:     Writer<File>,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl ManifestObserver {
    /// Create (or truncate) the manifest at `path` and write its header.
    pub fn create(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["actor", "path"])?;
        Ok(Self { writer, rows: 0, last_error: None })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the manifest, reporting the first error seen during the run.
    pub fn finish(mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl RunObserver for ManifestObserver {
    fn on_output(&mut self, output: &OutputRef) {
        let path = output.path.to_string_lossy();
        let result = self
            .writer
            .write_record([output.actor.as_str(), path.as_ref()])
            .map_err(OutputError::from);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }
}
