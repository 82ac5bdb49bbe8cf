//! Unit tests for mc-sim.

use std::path::{Path, PathBuf};

use mc_actor::{ActorKind, Attribute, FilterKind};
use mc_core::units::{BQ, CM, KEV, MM, SECOND};
use mc_core::{ConfigError, Namespace, Particle, RngConfig, RngEngine, RngSeed, Vec3};
use mc_geometry::{ShapeKind, WORLD};
use mc_source::{DirectionDistribution, EnergyDistribution, PositionDistribution, SourceBuilder};

use crate::{
    AssemblyStage, EngineExecutionError, EngineResult, OutputRef, ResultReader,
    SimulationBuilder, SimulationDescriptor, SourceCombination, TransportEngine,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CRYSTAL_TRANSLATIONS: [[f64; 3]; 8] = [
    [0.0, -50.0 * CM, 0.0],
    [0.0, -50.0 * CM, 10.0 * CM],
    [-20.0 * CM, -50.0 * CM, 0.0],
    [-20.0 * CM, -50.0 * CM, 10.0 * CM],
    [0.0, 50.0 * CM, 0.0],
    [0.0, 50.0 * CM, 10.0 * CM],
    [-20.0 * CM, 50.0 * CM, 0.0],
    [-20.0 * CM, 50.0 * CM, 10.0 * CM],
];

const PHASE_SPACE_COLUMNS: [&str; 11] = [
    "KineticEnergy",
    "Weight",
    "PostPosition",
    "PrePosition",
    "ParticleName",
    "PreDirection",
    "PostDirection",
    "TimeFromBeginOfEvent",
    "GlobalTime",
    "LocalTime",
    "EventPosition",
];

fn gamma_source(name: &str) -> SourceBuilder {
    SourceBuilder::new(name)
        .particle(Particle::Gamma)
        .position(PositionDistribution::sphere(10.0 * MM).translated([0.0, 0.0, -14.0 * CM]))
        .energy(EnergyDistribution::Mono(80.0 * KEV))
        .direction(DirectionDistribution::Momentum(Vec3::Z))
        .activity(200.0 * BQ)
}

/// The eight-crystal detector with a gamma phase-space actor and a
/// statistics actor, run for [0, 2 s) and [2 s, 3 s).
fn crystal_simulation() -> SimulationBuilder {
    let mut sim = SimulationBuilder::new();

    let crystal = sim
        .geometry_mut()
        .add_volume("Crystal", ShapeKind::Box, WORLD)
        .unwrap();
    crystal
        .set_size([20.0 * CM, 20.0 * CM, 10.0 * CM])
        .set_material("G4_CADMIUM_TELLURIDE");
    for t in CRYSTAL_TRANSLATIONS {
        crystal.add_placement(t);
    }

    sim.add_source(gamma_source("Default")).unwrap();
    sim.append_interval(0.0, 2.0 * SECOND).unwrap();
    sim.append_interval(2.0 * SECOND, 3.0 * SECOND).unwrap();

    sim.physics_mut()
        .select_physics_list("G4EmStandardPhysics")
        .enable_constructor("G4OpticalPhysics", true)
        .unwrap();

    let columns = Attribute::parse_list(&PHASE_SPACE_COLUMNS).unwrap();
    sim.add_actor(ActorKind::PhaseSpace, "PhaseSpace", "Crystal", columns)
        .unwrap()
        .set_output("Results/info.root");
    sim.add_filter("f", FilterKind::Particle(Particle::Gamma)).unwrap();
    sim.attach_filter("PhaseSpace", "f").unwrap();
    sim.add_actor(ActorKind::SimulationStatistics, "Stats", WORLD, Vec::new())
        .unwrap();

    sim
}

/// Engine double that counts calls and reports the declared outputs.
#[derive(Default)]
struct CountingEngine {
    calls: usize,
}

impl TransportEngine for CountingEngine {
    fn execute(
        &mut self,
        descriptor: &SimulationDescriptor,
    ) -> Result<EngineResult, EngineExecutionError> {
        self.calls += 1;
        Ok(EngineResult::expected(descriptor))
    }
}

struct FailingEngine {
    calls: usize,
}

impl TransportEngine for FailingEngine {
    fn execute(&mut self, _: &SimulationDescriptor) -> Result<EngineResult, EngineExecutionError> {
        self.calls += 1;
        Err(EngineExecutionError::new("G4Exception: material G4_UNOBTAINIUM not found"))
    }
}

/// Reader double recording every `(path, actor)` it was handed.
#[derive(Default)]
struct RecordingReader {
    seen: Vec<(PathBuf, String)>,
}

impl ResultReader for RecordingReader {
    type Output = usize;

    fn read(&mut self, output_path: &Path, actor_name: &str) -> usize {
        self.seen.push((output_path.to_path_buf(), actor_name.to_owned()));
        self.seen.len()
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembly {
    use super::*;

    #[test]
    fn crystal_scenario_assembles() {
        let d = crystal_simulation().assemble().unwrap();

        assert_eq!(d.volume_count(), 2);
        assert_eq!(d.placements_of("Crystal"), Some(8));
        assert_eq!(d.total_duration(), 3.0 * SECOND);
        assert_eq!(d.schedule().len(), 2);

        let phase_space = d.actor("PhaseSpace").unwrap();
        assert_eq!(phase_space.attributes().len(), 11);
        assert_eq!(phase_space.mother(), "Crystal");
        let chain = d.filters_of("PhaseSpace").unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(*chain[0].kind(), FilterKind::Particle(Particle::Gamma));

        assert_eq!(d.physics().physics_list(), "G4EmStandardPhysics");
        assert!(d.physics().is_enabled(mc_physics::PhysicsConstructor::Optical));
        assert_eq!(d.active_sources().len(), 1);
        assert!((d.expected_primaries() - 600.0).abs() < 1e-6);
    }

    #[test]
    fn repeated_assembly_is_identical() {
        let sim = crystal_simulation();
        let first = sim.assemble().unwrap();
        let second = sim.assemble().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unplaced_volume_gets_one_copy() {
        let mut sim = crystal_simulation();
        sim.geometry_mut()
            .add_volume("Shield", ShapeKind::Box, WORLD)
            .unwrap()
            .set_size([1.0 * CM, 1.0 * CM, 1.0 * CM])
            .set_material("G4_Pb");
        let d = sim.assemble().unwrap();
        assert_eq!(d.placements_of("Shield"), Some(1));
        // The builder's own tree is not modified.
        assert!(sim.geometry().volume("Shield").unwrap().placements().is_empty());
    }

    #[test]
    fn empty_schedule_fails_at_interval_stage() {
        let mut sim = crystal_simulation();
        sim.set_schedule(mc_schedule::RunSchedule::new());
        let err = sim.assemble().unwrap_err();
        assert_eq!(err.stage, AssemblyStage::Intervals);
        assert_eq!(err.source, ConfigError::EmptySchedule);
    }

    #[test]
    fn no_source_fails() {
        let mut sim = SimulationBuilder::new();
        sim.append_interval(0.0, 1.0).unwrap();
        let err = sim.assemble().unwrap_err();
        assert_eq!(err.stage, AssemblyStage::Sources);
        assert_eq!(err.source, ConfigError::NoSource);
    }

    #[test]
    fn first_failing_stage_wins() {
        let mut sim = crystal_simulation();
        // Physics and geometry both broken: geometry is checked first.
        sim.physics_mut().set_production_cut("Nowhere", 1.0 * MM);
        sim.geometry_mut().add_volume("Bare", ShapeKind::Sphere, WORLD).unwrap();
        assert_eq!(sim.assemble().unwrap_err().stage, AssemblyStage::Geometry);

        let mut sim = crystal_simulation();
        sim.physics_mut().set_production_cut("Nowhere", 1.0 * MM);
        sim.flags_mut().thread_count = 0;
        assert_eq!(sim.assemble().unwrap_err().stage, AssemblyStage::Physics);
    }

    #[test]
    fn invalid_source_reported_at_source_stage() {
        let mut sim = crystal_simulation();
        sim.add_source(gamma_source("Weak").activity(0.0)).unwrap();
        let err = sim.assemble().unwrap_err();
        assert_eq!(err.stage, AssemblyStage::Sources);
        assert!(matches!(err.source, ConfigError::InvalidSource { ref name, .. } if name == "Weak"));
    }

    #[test]
    fn missing_actor_output_reported_at_actor_stage() {
        let mut sim = crystal_simulation();
        sim.add_actor(ActorKind::Hits, "Hits", "Crystal", vec![Attribute::TotalEnergyDeposit])
            .unwrap();
        assert_eq!(sim.assemble().unwrap_err().stage, AssemblyStage::Actors);
    }

    #[test]
    fn zero_threads_fail_at_flag_stage() {
        let mut sim = crystal_simulation();
        sim.flags_mut().thread_count = 0;
        let err = sim.assemble().unwrap_err();
        assert_eq!(err.stage, AssemblyStage::RunFlags);
        assert!(matches!(err.source, ConfigError::InvalidRunFlags(_)));
    }
}

// ── Registration ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;
    use crate::{NoopObserver, SimError, SimResult, execute};

    #[test]
    fn duplicate_source_fails() {
        let mut sim = crystal_simulation();
        let err = sim.add_source(gamma_source("Default")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateName { namespace: Namespace::Source, name: "Default".into() }
        );
        assert_eq!(sim.sources().len(), 1);
    }

    #[test]
    fn actor_on_unknown_mother_fails_before_engine() {
        let script = |sim: &mut SimulationBuilder, engine: &mut CountingEngine| -> SimResult<()> {
            sim.add_actor(ActorKind::PhaseSpace, "Lost", "Unknown", vec![Attribute::KineticEnergy])?;
            let descriptor = sim.assemble()?;
            execute(engine, &descriptor, &mut NoopObserver)?;
            Ok(())
        };

        let mut sim = crystal_simulation();
        let mut engine = CountingEngine::default();
        let err = script(&mut sim, &mut engine).unwrap_err();

        assert!(matches!(
            err,
            SimError::Config(ConfigError::UnknownReference {
                namespace: Namespace::Volume,
                ref name,
                ..
            }) if name == "Unknown"
        ));
        assert_eq!(engine.calls, 0);
        assert!(sim.pipeline().actor("Lost").is_none());
    }

    #[test]
    fn default_flags_follow_engine_defaults() {
        let sim = SimulationBuilder::new();
        let flags = sim.flags();
        assert_eq!(flags.verbosity, 1);
        assert_eq!(flags.thread_count, 1);
        assert!(!flags.visualization.enabled);
        assert_eq!(flags.visualization.backend.as_str(), "vrml");
        assert_eq!(flags.rng, RngConfig::new(RngEngine::MersenneTwister, RngSeed::Auto));
        assert_eq!(sim.geometry().len(), 1);
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sources {
    use super::*;

    #[test]
    fn concurrent_sources_add_primaries() {
        let mut sim = crystal_simulation();
        sim.add_source(gamma_source("Second")).unwrap();
        let d = sim.assemble().unwrap();
        assert_eq!(d.active_sources().len(), 2);
        assert!((d.expected_primaries() - 1200.0).abs() < 1e-6);
    }

    #[test]
    fn exclusive_source_selects_one() {
        let mut sim = crystal_simulation();
        sim.add_source(gamma_source("Second")).unwrap();
        sim.set_source_combination(SourceCombination::Exclusive { active: "Second".into() });
        let d = sim.assemble().unwrap();
        let active = d.active_sources();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name(), "Second");
        assert_eq!(d.sources().len(), 2);
    }

    #[test]
    fn exclusive_source_must_exist() {
        let mut sim = crystal_simulation();
        sim.set_source_combination(SourceCombination::Exclusive { active: "Missing".into() });
        let err = sim.assemble().unwrap_err();
        assert_eq!(err.stage, AssemblyStage::Sources);
        assert!(matches!(
            err.source,
            ConfigError::UnknownReference { namespace: Namespace::Source, .. }
        ));
    }

    #[test]
    fn explicit_seed_derives_thread_seeds() {
        let mut sim = crystal_simulation();
        assert_eq!(sim.assemble().unwrap().thread_seeds(), None);

        sim.flags_mut().thread_count = 4;
        sim.flags_mut().rng.seed = RngSeed::Explicit(123_456);
        let seeds = sim.assemble().unwrap().thread_seeds().unwrap();
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds, sim.assemble().unwrap().thread_seeds().unwrap());
    }
}

// ── Execution and handoff ─────────────────────────────────────────────────────

#[cfg(test)]
mod execution {
    use super::*;
    use crate::{NoopObserver, RunObserver, SimError, execute, handoff, run};

    #[test]
    fn engine_called_once_and_outputs_forwarded() {
        let sim = crystal_simulation();
        let mut engine = CountingEngine::default();
        let mut reader = RecordingReader::default();

        let outputs = run(&sim, &mut engine, &mut reader, &mut NoopObserver).unwrap();

        assert_eq!(engine.calls, 1);
        assert_eq!(outputs, vec![1]);
        assert_eq!(
            reader.seen,
            vec![(PathBuf::from("Results/info.root"), "PhaseSpace".to_owned())]
        );
    }

    #[test]
    fn assembly_failure_skips_engine() {
        let mut sim = crystal_simulation();
        sim.set_schedule(mc_schedule::RunSchedule::new());
        let mut engine = CountingEngine::default();
        let mut reader = RecordingReader::default();

        let err = run(&sim, &mut engine, &mut reader, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Assembly(_)));
        assert_eq!(engine.calls, 0);
        assert!(reader.seen.is_empty());
    }

    #[test]
    fn engine_diagnostic_passed_through_verbatim() {
        let d = crystal_simulation().assemble().unwrap();
        let mut engine = FailingEngine { calls: 0 };
        let err = execute(&mut engine, &d, &mut NoopObserver).unwrap_err();
        assert_eq!(err.diagnostic, "G4Exception: material G4_UNOBTAINIUM not found");
        assert_eq!(err.to_string(), err.diagnostic);
        assert_eq!(engine.calls, 1);
    }

    #[test]
    fn engine_failure_skips_reader() {
        let sim = crystal_simulation();
        let mut engine = FailingEngine { calls: 0 };
        let mut reader = RecordingReader::default();
        let err = run(&sim, &mut engine, &mut reader, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Engine(_)));
        assert_eq!(engine.calls, 1);
        assert!(reader.seen.is_empty());
    }

    #[test]
    fn handoff_is_pass_through() {
        let result = EngineResult::new(vec![
            OutputRef { actor: "A".into(), path: "a.csv".into() },
            OutputRef { actor: "B".into(), path: "b.csv".into() },
        ]);
        let mut reader = RecordingReader::default();
        let out = handoff(&result, &mut reader, &mut NoopObserver);
        assert_eq!(out, vec![1, 2]);
        assert_eq!(reader.seen[1], (PathBuf::from("b.csv"), "B".to_owned()));
    }

    #[test]
    fn observer_sees_lifecycle() {
        #[derive(Default)]
        struct Log(Vec<&'static str>);
        impl RunObserver for Log {
            fn on_assembled(&mut self, _: &SimulationDescriptor) {
                self.0.push("assembled");
            }
            fn on_execute_start(&mut self, _: &SimulationDescriptor) {
                self.0.push("start");
            }
            fn on_execute_end(&mut self, _: &EngineResult) {
                self.0.push("end");
            }
            fn on_output(&mut self, _: &OutputRef) {
                self.0.push("output");
            }
        }

        let mut log = Log::default();
        run(
            &crystal_simulation(),
            &mut CountingEngine::default(),
            &mut RecordingReader::default(),
            &mut log,
        )
        .unwrap();
        assert_eq!(log.0, vec!["assembled", "start", "end", "output"]);
    }
}
