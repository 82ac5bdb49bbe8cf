//! `mc-sim` — assembles a validated simulation and drives one engine run.
//!
//! # Run lifecycle
//!
//! ```text
//! SimulationBuilder            registration: eager name/reference checks
//!   │ assemble()               geometry → sources → physics → actors
//!   ▼                          → intervals → run flags; first failure wins
//! SimulationDescriptor         immutable
//!   │ execute(engine, …)       one blocking call, never retried
//!   ▼
//! EngineResult                 one OutputRef per recording actor
//!   │ handoff(reader, …)       (output_path, actor_name) pass-through
//!   ▼
//! ResultReader::Output
//! ```
//!
//! [`run`] chains the three steps for callers that do not need the
//! intermediate values.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_sim::{NoopObserver, SimulationBuilder};
//!
//! let mut sim = SimulationBuilder::new();
//! sim.add_source(source)?;
//! sim.append_interval(0.0, 2.0 * SECOND)?;
//! let outputs = mc_sim::run(&sim, &mut engine, &mut reader, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod flags;
pub mod handoff;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::SimulationBuilder;
pub use descriptor::SimulationDescriptor;
pub use engine::{EngineResult, OutputRef, TransportEngine, execute};
pub use error::{AssemblyError, AssemblyStage, EngineExecutionError, SimError, SimResult};
pub use flags::{RunFlags, SourceCombination, Visualization, VisualizationBackend};
pub use handoff::{ResultReader, handoff};
pub use observer::{NoopObserver, RunObserver};

/// Assemble `builder`, execute the descriptor on `engine`, and forward every
/// output to `reader`.
///
/// The engine is not called if assembly fails, and the reader is not called
/// if the engine fails.
pub fn run<E, R, O>(
    builder:  &SimulationBuilder,
    engine:   &mut E,
    reader:   &mut R,
    observer: &mut O,
) -> SimResult<Vec<R::Output>>
where
    E: TransportEngine + ?Sized,
    R: ResultReader,
    O: RunObserver,
{
    let descriptor = builder.assemble()?;
    observer.on_assembled(&descriptor);
    let result = execute(engine, &descriptor, observer)?;
    Ok(handoff(&result, reader, observer))
}
