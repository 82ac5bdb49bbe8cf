//! Forwarding engine outputs to an external reader.

use std::path::Path;

use tracing::debug;

use crate::{EngineResult, RunObserver};

/// Consumer of one actor output file.  Decoding the file is entirely up to
/// the implementor.
pub trait ResultReader {
    type Output;

    fn read(&mut self, output_path: &Path, actor_name: &str) -> Self::Output;
}

/// Pass each `(output_path, actor_name)` of `result` to `reader`, in output
/// order, and collect what it returns.
pub fn handoff<R, O>(result: &EngineResult, reader: &mut R, observer: &mut O) -> Vec<R::Output>
where
    R: ResultReader,
    O: RunObserver,
{
    result
        .outputs
        .iter()
        .map(|output| {
            debug!(actor = %output.actor, path = %output.path.display(), "forwarding output");
            observer.on_output(output);
            reader.read(&output.path, &output.actor)
        })
        .collect()
}
