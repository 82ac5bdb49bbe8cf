//! Run observer trait for progress reporting.

use crate::{EngineResult, OutputRef, SimulationDescriptor};

/// Callbacks invoked by [`run`][crate::run], [`execute`][crate::execute] and
/// [`handoff`][crate::handoff].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait RunObserver {
    /// Called once `assemble()` has produced a descriptor.
    fn on_assembled(&mut self, _descriptor: &SimulationDescriptor) {}

    /// Called immediately before the engine is invoked.
    fn on_execute_start(&mut self, _descriptor: &SimulationDescriptor) {}

    /// Called after the engine returned successfully.
    fn on_execute_end(&mut self, _result: &EngineResult) {}

    /// Called for each output just before it is forwarded to the reader.
    fn on_output(&mut self, _output: &OutputRef) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
