//! Scoring actors.

use std::fmt;
use std::path::{Path, PathBuf};

use mc_core::{ActorId, FilterId, VolumeId};

use crate::{Attribute, AttributeValue, EventRecord};

/// What an actor records.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    /// One row per step entering the mother volume.
    PhaseSpace,
    /// One row per step with energy deposited in the mother volume.
    Hits,
    /// Run-level counters; records no attributes.
    SimulationStatistics,
}

impl ActorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::PhaseSpace           => "PhaseSpaceActor",
            ActorKind::Hits                 => "HitsActor",
            ActorKind::SimulationStatistics => "SimulationStatisticsActor",
        }
    }

    /// `true` for kinds that emit one row per accepted step.
    pub fn records_steps(self) -> bool {
        !matches!(self, ActorKind::SimulationStatistics)
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoring hook on one volume.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub(crate) id:         ActorId,
    pub(crate) name:       String,
    pub(crate) kind:       ActorKind,
    pub(crate) mother:     String,
    pub(crate) mother_id:  VolumeId,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) filters:    Vec<FilterId>,
    pub(crate) output:     Option<PathBuf>,
}

impl Actor {
    /// Where the engine writes this actor's result file.
    pub fn set_output(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(path.into());
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn mother(&self) -> &str {
        &self.mother
    }

    pub fn mother_id(&self) -> VolumeId {
        self.mother_id
    }

    /// Output columns, in declared order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attached filters, in attach order.
    pub fn filters(&self) -> &[FilterId] {
        &self.filters
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Project `record` onto this actor's columns.  Attributes absent from
    /// the record yield `None` in their column.
    pub fn project<'r>(&self, record: &'r EventRecord) -> Vec<Option<&'r AttributeValue>> {
        self.attributes.iter().map(|&a| record.get(a)).collect()
    }
}
