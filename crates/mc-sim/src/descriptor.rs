//! The immutable, validated simulation description.

use std::path::PathBuf;

use mc_actor::{Actor, ActorPipeline, Filter};
use mc_geometry::GeometryTree;
use mc_physics::PhysicsConfig;
use mc_schedule::RunSchedule;
use mc_source::Source;

use crate::{OutputRef, RunFlags, SourceCombination};

/// Everything the transport engine needs for one run.
///
/// Only [`SimulationBuilder::assemble`](crate::SimulationBuilder::assemble)
/// creates one, and nothing mutates it afterwards.  Every volume in
/// `geometry` has at least one placement.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationDescriptor {
    pub(crate) geometry:    GeometryTree,
    pub(crate) sources:     Vec<Source>,
    pub(crate) combination: SourceCombination,
    pub(crate) physics:     PhysicsConfig,
    pub(crate) pipeline:    ActorPipeline,
    pub(crate) schedule:    RunSchedule,
    pub(crate) flags:       RunFlags,
}

impl SimulationDescriptor {
    pub fn geometry(&self) -> &GeometryTree {
        &self.geometry
    }

    /// All registered sources, in registration order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn combination(&self) -> &SourceCombination {
        &self.combination
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn pipeline(&self) -> &ActorPipeline {
        &self.pipeline
    }

    pub fn schedule(&self) -> &RunSchedule {
        &self.schedule
    }

    pub fn flags(&self) -> &RunFlags {
        &self.flags
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of logical volumes, world included.
    pub fn volume_count(&self) -> usize {
        self.geometry.len()
    }

    /// Physical copies of volume `name`.
    pub fn placements_of(&self, name: &str) -> Option<usize> {
        self.geometry.volume(name).map(|v| v.placements().len())
    }

    /// Simulated time, gaps between intervals excluded.
    pub fn total_duration(&self) -> f64 {
        self.schedule.total_duration()
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.pipeline.actor(name)
    }

    /// Filter chain of actor `name`, in attach order.
    pub fn filters_of(&self, name: &str) -> Option<Vec<&Filter>> {
        let actor = self.pipeline.actor(name)?;
        Some(self.pipeline.chain(actor).collect())
    }

    /// Sources handed to the engine under the combination policy.
    pub fn active_sources(&self) -> Vec<&Source> {
        match &self.combination {
            SourceCombination::Concurrent => self.sources.iter().collect(),
            SourceCombination::Exclusive { active } => {
                self.sources.iter().filter(|s| s.name() == active).collect()
            }
        }
    }

    /// Expected number of primaries over all intervals, summed over the
    /// active sources.
    pub fn expected_primaries(&self) -> f64 {
        self.active_sources()
            .iter()
            .map(|source| {
                self.schedule
                    .intervals()
                    .iter()
                    .map(|iv| source.expected_decays(iv.start, iv.end))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Per-thread seeds, or `None` when the seed is left to the engine.
    pub fn thread_seeds(&self) -> Option<Vec<u64>> {
        self.flags.thread_seeds()
    }

    /// The output file each recording actor is expected to produce, in actor
    /// registration order.
    pub fn expected_outputs(&self) -> Vec<OutputRef> {
        self.pipeline
            .actors()
            .iter()
            .filter_map(|actor| {
                actor.output().map(|path| OutputRef {
                    actor: actor.name().to_owned(),
                    path:  PathBuf::from(path),
                })
            })
            .collect()
    }
}
