//! [`TransportEngine`] implementations.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use mc_sim::{EngineExecutionError, EngineResult, SimulationDescriptor, TransportEngine};

use crate::write_job_json;

// ── ProcessEngine ─────────────────────────────────────────────────────────────

/// Runs an external engine program on a JSON job file.
///
/// The program is invoked as `program [args…] <job_path>` and waited for.
/// A non-zero exit status fails the run with the program's stderr as the
/// diagnostic, byte for byte (lossily decoded as UTF-8).
#[derive(Clone, Debug)]
pub struct ProcessEngine {
    program:  PathBuf,
    args:     Vec<String>,
    job_path: PathBuf,
}

impl ProcessEngine {
    pub fn new(program: impl Into<PathBuf>, job_path: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), job_path: job_path.into() }
    }

    /// Extra arguments placed before the job path.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn job_path(&self) -> &std::path::Path {
        &self.job_path
    }
}

impl TransportEngine for ProcessEngine {
    fn name(&self) -> &str {
        "process"
    }

    fn execute(
        &mut self,
        descriptor: &SimulationDescriptor,
    ) -> Result<EngineResult, EngineExecutionError> {
        write_job_json(descriptor, &self.job_path)
            .map_err(|e| EngineExecutionError::new(format!("cannot write engine job: {e}")))?;

        debug!(program = %self.program.display(), job = %self.job_path.display(), "spawning engine");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.job_path)
            .output()
            .map_err(|e| {
                EngineExecutionError::new(format!(
                    "cannot start {}: {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            return Err(EngineExecutionError::new(String::from_utf8_lossy(&output.stderr)));
        }
        Ok(EngineResult::expected(descriptor))
    }
}

// ── DryRunEngine ──────────────────────────────────────────────────────────────

/// Writes the job file and reports the declared outputs without simulating
/// anything.
#[derive(Clone, Debug)]
pub struct DryRunEngine {
    job_path: PathBuf,
}

impl DryRunEngine {
    pub fn new(job_path: impl Into<PathBuf>) -> Self {
        Self { job_path: job_path.into() }
    }
}

impl TransportEngine for DryRunEngine {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn execute(
        &mut self,
        descriptor: &SimulationDescriptor,
    ) -> Result<EngineResult, EngineExecutionError> {
        write_job_json(descriptor, &self.job_path)
            .map_err(|e| EngineExecutionError::new(format!("cannot write engine job: {e}")))?;
        info!(job = %self.job_path.display(), "dry run: engine not started");
        Ok(EngineResult::expected(descriptor))
    }
}
