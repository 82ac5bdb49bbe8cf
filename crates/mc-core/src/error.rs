//! Configuration error taxonomy.
//!
//! Every builder operation in the `mc-*` crates reports malformed input
//! eagerly through [`ConfigError`].  The assembler in `mc-sim` wraps the first
//! one it finds in an `AssemblyError`; nothing is dropped or patched up.

use std::fmt;

use thiserror::Error;

/// The registration namespaces in which names must be unique.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Namespace {
    Volume,
    Source,
    Filter,
    Actor,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Volume => "volume",
            Namespace::Source => "source",
            Namespace::Filter => "filter",
            Namespace::Actor  => "actor",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A malformed piece of simulation configuration.
///
/// Messages name the offending entity and the violated invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{namespace} name {name:?} is already registered")]
    DuplicateName { namespace: Namespace, name: String },

    #[error("volume {volume:?}: parent {parent:?} is not registered")]
    UnknownParent { volume: String, parent: String },

    #[error("unknown unit symbol {0:?}")]
    UnknownUnit(String),

    #[error("unknown physics constructor {0:?}")]
    UnknownConstructor(String),

    #[error("source {name:?}: {reason}")]
    InvalidSource { name: String, reason: String },

    #[error("run interval [{start}, {end}): {reason}")]
    InvalidInterval { start: f64, end: f64, reason: String },

    #[error("{namespace} {name:?} referenced by {referrer:?} is not registered")]
    UnknownReference {
        namespace: Namespace,
        name:      String,
        referrer:  String,
    },

    #[error("unknown actor attribute {0:?}")]
    UnknownAttribute(String),

    #[error("unknown particle {0:?}")]
    UnknownParticle(String),

    #[error("volume {name:?}: {reason}")]
    InvalidVolume { name: String, reason: String },

    #[error("filter {name:?}: {reason}")]
    InvalidFilter { name: String, reason: String },

    #[error("actor {name:?}: {reason}")]
    InvalidActor { name: String, reason: String },

    #[error("physics configuration: {0}")]
    InvalidPhysics(String),

    #[error("run flags: {0}")]
    InvalidRunFlags(String),

    #[error("run schedule must contain at least one interval")]
    EmptySchedule,

    #[error("simulation needs at least one source")]
    NoSource,

    #[error("malformed quantity {0:?}: expected a number optionally followed by a unit symbol")]
    MalformedQuantity(String),
}

/// Shorthand result type for all configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
