use std::fmt;

use mc_core::ConfigError;
use thiserror::Error;

/// Validation stage at which assembly stopped.  Stages run in declaration
/// order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AssemblyStage {
    Geometry,
    Sources,
    Physics,
    Actors,
    Intervals,
    RunFlags,
}

impl AssemblyStage {
    pub fn as_str(self) -> &'static str {
        match self {
            AssemblyStage::Geometry  => "geometry",
            AssemblyStage::Sources   => "sources",
            AssemblyStage::Physics   => "physics",
            AssemblyStage::Actors    => "actors",
            AssemblyStage::Intervals => "run intervals",
            AssemblyStage::RunFlags  => "run flags",
        }
    }
}

impl fmt::Display for AssemblyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First validation failure found by `assemble()`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{stage} check failed: {source}")]
pub struct AssemblyError {
    pub stage:  AssemblyStage,
    #[source]
    pub source: ConfigError,
}

/// Failure reported by the transport engine.  `diagnostic` is the engine's
/// own message, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{diagnostic}")]
pub struct EngineExecutionError {
    pub diagnostic: String,
}

impl EngineExecutionError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self { diagnostic: diagnostic.into() }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("assembly failed: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("transport engine failed: {0}")]
    Engine(#[from] EngineExecutionError),
}

pub type SimResult<T> = Result<T, SimError>;
