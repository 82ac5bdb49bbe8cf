//! Registration surface and the assembler.

use tracing::{debug, info};

use mc_actor::{Actor, ActorKind, ActorPipeline, Attribute, FilterKind};
use mc_core::{ConfigError, ConfigResult, FilterId, Namespace};
use mc_geometry::GeometryTree;
use mc_physics::PhysicsConfig;
use mc_schedule::RunSchedule;
use mc_source::{Source, SourceBuilder};

use crate::{AssemblyError, AssemblyStage, RunFlags, SimulationDescriptor, SourceCombination};

/// Collects every part of a simulation and assembles them into a
/// [`SimulationDescriptor`].
///
/// Registration methods check names and references eagerly; everything else
/// (sizes, materials, source fields, output paths, …) is checked by
/// [`assemble`](Self::assemble).
///
/// # Defaults
///
/// | Part             | Default                                  |
/// |------------------|------------------------------------------|
/// | geometry         | `world`: 3 m box of `G4_AIR`             |
/// | physics          | `QGSP_BERT_EMV`, no constructors, no cuts|
/// | run flags        | see [`RunFlags`]                         |
/// | multiple sources | [`SourceCombination::Concurrent`]        |
///
/// Sources, actors and run intervals have no default.
#[derive(Clone, Debug, Default)]
pub struct SimulationBuilder {
    geometry:    GeometryTree,
    sources:     Vec<SourceBuilder>,
    combination: SourceCombination,
    physics:     PhysicsConfig,
    pipeline:    ActorPipeline,
    schedule:    RunSchedule,
    flags:       RunFlags,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    pub fn geometry(&self) -> &GeometryTree {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryTree {
        &mut self.geometry
    }

    // ── Sources ───────────────────────────────────────────────────────────

    /// Register a source.  Its fields are validated at assembly.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateName`] if a source with the same name exists.
    pub fn add_source(&mut self, source: SourceBuilder) -> ConfigResult<()> {
        if self.sources.iter().any(|s| s.name() == source.name()) {
            return Err(ConfigError::DuplicateName {
                namespace: Namespace::Source,
                name:      source.name().to_owned(),
            });
        }
        debug!(source = source.name(), "registered source");
        self.sources.push(source);
        Ok(())
    }

    pub fn sources(&self) -> &[SourceBuilder] {
        &self.sources
    }

    pub fn set_source_combination(&mut self, combination: SourceCombination) -> &mut Self {
        self.combination = combination;
        self
    }

    // ── Physics ───────────────────────────────────────────────────────────

    pub fn physics_mut(&mut self) -> &mut PhysicsConfig {
        &mut self.physics
    }

    // ── Actors and filters ────────────────────────────────────────────────

    pub fn add_filter(&mut self, name: &str, kind: FilterKind) -> ConfigResult<FilterId> {
        self.pipeline.add_filter(name, kind)
    }

    /// Register an actor on the already registered volume `mother`.
    pub fn add_actor(
        &mut self,
        kind:       ActorKind,
        name:       &str,
        mother:     &str,
        attributes: Vec<Attribute>,
    ) -> ConfigResult<&mut Actor> {
        self.pipeline.add_actor(&self.geometry, kind, name, mother, attributes)
    }

    pub fn attach_filter(&mut self, actor: &str, filter: &str) -> ConfigResult<()> {
        self.pipeline.attach_filter(actor, filter)
    }

    pub fn pipeline(&self) -> &ActorPipeline {
        &self.pipeline
    }

    // ── Run intervals ─────────────────────────────────────────────────────

    pub fn append_interval(&mut self, start: f64, end: f64) -> ConfigResult<()> {
        self.schedule.append_interval(start, end)
    }

    /// Replace the run schedule, e.g. with one loaded from CSV.
    pub fn set_schedule(&mut self, schedule: RunSchedule) -> &mut Self {
        self.schedule = schedule;
        self
    }

    pub fn schedule(&self) -> &RunSchedule {
        &self.schedule
    }

    // ── Run flags ─────────────────────────────────────────────────────────

    pub fn flags(&self) -> &RunFlags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut RunFlags {
        &mut self.flags
    }

    // ── Assembly ──────────────────────────────────────────────────────────

    /// Validate everything and produce the immutable descriptor.
    ///
    /// Checks run in a fixed order: geometry, sources, physics, actors and
    /// filters, run intervals, run flags.  The first failure is returned,
    /// tagged with its stage.  The builder is left untouched, so assembling
    /// the same builder twice yields equal descriptors.
    pub fn assemble(&self) -> Result<SimulationDescriptor, AssemblyError> {
        let at = |stage| move |source| AssemblyError { stage, source };

        self.geometry.validate().map_err(at(AssemblyStage::Geometry))?;
        let sources = self.build_sources().map_err(at(AssemblyStage::Sources))?;
        self.physics.validate(&self.geometry).map_err(at(AssemblyStage::Physics))?;
        self.pipeline.validate(&self.geometry).map_err(at(AssemblyStage::Actors))?;
        self.schedule.validate().map_err(at(AssemblyStage::Intervals))?;
        self.flags.validate().map_err(at(AssemblyStage::RunFlags))?;

        let descriptor = SimulationDescriptor {
            geometry:    self.geometry.with_default_placements(),
            sources,
            combination: self.combination.clone(),
            physics:     self.physics.clone(),
            pipeline:    self.pipeline.clone(),
            schedule:    self.schedule.clone(),
            flags:       self.flags,
        };
        info!(
            volumes   = descriptor.volume_count(),
            sources   = descriptor.active_sources().len(),
            actors    = descriptor.pipeline().actors().len(),
            intervals = descriptor.schedule().len(),
            duration  = descriptor.total_duration(),
            "simulation assembled"
        );
        Ok(descriptor)
    }

    fn build_sources(&self) -> ConfigResult<Vec<Source>> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSource);
        }
        let sources = self
            .sources
            .iter()
            .map(|s| s.clone().build())
            .collect::<ConfigResult<Vec<_>>>()?;

        if let SourceCombination::Exclusive { active } = &self.combination {
            if !sources.iter().any(|s| s.name() == active) {
                return Err(ConfigError::UnknownReference {
                    namespace: Namespace::Source,
                    name:      active.clone(),
                    referrer:  "exclusive source combination".into(),
                });
            }
        }
        Ok(sources)
    }
}
