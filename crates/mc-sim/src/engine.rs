//! The transport-engine boundary.

use std::path::PathBuf;

use tracing::{error, info};

use crate::{EngineExecutionError, RunObserver, SimulationDescriptor};

/// One output file and the actor that produced it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputRef {
    pub actor: String,
    pub path:  PathBuf,
}

/// What a successful engine run produced.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineResult {
    pub outputs: Vec<OutputRef>,
}

impl EngineResult {
    pub fn new(outputs: Vec<OutputRef>) -> Self {
        Self { outputs }
    }

    /// The outputs `descriptor` declares, assuming the engine wrote them all.
    pub fn expected(descriptor: &SimulationDescriptor) -> Self {
        Self::new(descriptor.expected_outputs())
    }
}

/// An external Monte-Carlo transport engine.
///
/// `execute` blocks until the engine finishes.  The descriptor is only
/// borrowed for the call.
pub trait TransportEngine {
    /// Short name used in log output.
    fn name(&self) -> &str {
        "engine"
    }

    fn execute(
        &mut self,
        descriptor: &SimulationDescriptor,
    ) -> Result<EngineResult, EngineExecutionError>;
}

/// Run `descriptor` on `engine` exactly once.
///
/// Engine failures are returned as-is; nothing is retried.
pub fn execute<E, O>(
    engine:     &mut E,
    descriptor: &SimulationDescriptor,
    observer:   &mut O,
) -> Result<EngineResult, EngineExecutionError>
where
    E: TransportEngine + ?Sized,
    O: RunObserver,
{
    info!(
        engine   = engine.name(),
        threads  = descriptor.flags().thread_count,
        seed     = %descriptor.flags().rng.seed,
        expected = descriptor.expected_primaries(),
        "starting transport engine"
    );
    observer.on_execute_start(descriptor);

    match engine.execute(descriptor) {
        Ok(result) => {
            info!(engine = engine.name(), outputs = result.outputs.len(), "engine finished");
            observer.on_execute_end(&result);
            Ok(result)
        }
        Err(e) => {
            error!(engine = engine.name(), diagnostic = %e.diagnostic, "engine failed");
            Err(e)
        }
    }
}
