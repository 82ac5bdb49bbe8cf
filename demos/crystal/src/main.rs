//! `crystal` — 80 keV gammas onto an array of eight CdTe crystals.
//!
//! A 10 mm spherical gamma source sits 14 cm below the origin and fires
//! along +z at 200 Bq for two run intervals ([0, 2 s) and [2 s, 3 s)).  A
//! phase-space actor records gamma steps in the crystals; a statistics actor
//! covers the world.
//!
//! The descriptor is written to `Results/job.json` and handed to a dry-run
//! engine, so no transport happens here; the outputs an engine would write
//! are forwarded to the reader and listed in `Results/outputs.csv`.
//!
//! Run with:
//!   cargo run -p crystal

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mc_actor::{ActorKind, Attribute, FilterKind};
use mc_core::units::{BQ, CM, KEV, M, MM, SECOND};
use mc_core::{Particle, RngEngine, RngSeed, Vec3};
use mc_geometry::{ShapeKind, WORLD};
use mc_output::{DryRunEngine, ManifestObserver};
use mc_physics::PhysicsConstructor;
use mc_sim::{ResultReader, SimulationBuilder, VisualizationBackend};
use mc_source::{DirectionDistribution, EnergyDistribution, PositionDistribution, SourceBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const RESULTS_DIR: &str = "Results";

/// Crystal copies: two 2×2 blocks at y = ±50 cm.
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

const PHASE_SPACE_ATTRIBUTES: [&str; 11] = [
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

// ── Result reader ─────────────────────────────────────────────────────────────

/// Stand-in for an external result reader: reports what it was handed.
struct AnnouncingReader;

impl ResultReader for AnnouncingReader {
    type Output = ();

    fn read(&mut self, output_path: &Path, actor_name: &str) {
        info!(actor = actor_name, path = %output_path.display(), "result ready for reading");
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

fn build_simulation() -> Result<SimulationBuilder> {
    let mut sim = SimulationBuilder::new();

    // Run flags.
    let flags = sim.flags_mut();
    flags.verbosity = 1;
    flags.visualization.enabled = true;
    flags.visualization.backend = VisualizationBackend::Vrml;
    flags.thread_count = 1;
    flags.rng.engine = RngEngine::MersenneTwister;
    flags.rng.seed = RngSeed::Auto;

    // Geometry.
    sim.geometry_mut()
        .world_mut()
        .set_size([3.0 * M, 3.0 * M, 3.0 * M])
        .set_material("G4_AIR");
    let crystal = sim.geometry_mut().add_volume("Crystal", ShapeKind::Box, WORLD)?;
    crystal
        .set_size([20.0 * CM, 20.0 * CM, 10.0 * CM])
        .set_material("G4_CADMIUM_TELLURIDE");
    for translation in CRYSTAL_TRANSLATIONS {
        crystal.add_placement(translation);
    }

    // Source.
    sim.add_source(
        SourceBuilder::new("Default")
            .particle(Particle::Gamma)
            .position(PositionDistribution::sphere(10.0 * MM).translated([0.0, 0.0, -14.0 * CM]))
            .energy(EnergyDistribution::Mono(80.0 * KEV))
            .direction(DirectionDistribution::Momentum(Vec3::Z))
            .activity(200.0 * BQ),
    )?;

    // Run timing.
    sim.append_interval(0.0, 2.0 * SECOND)?;
    sim.append_interval(2.0 * SECOND, 3.0 * SECOND)?;

    // Physics.
    sim.physics_mut()
        .select_physics_list("G4EmStandardPhysics")
        .set_constructor(PhysicsConstructor::Optical, true);

    // Detector.
    let attributes = Attribute::parse_list(&PHASE_SPACE_ATTRIBUTES)?;
    sim.add_actor(ActorKind::PhaseSpace, "PhaseSpace", "Crystal", attributes)?
        .set_output(Path::new(RESULTS_DIR).join("info.root"));
    sim.add_filter("f", FilterKind::Particle(Particle::Gamma))?;
    sim.attach_filter("PhaseSpace", "f")?;

    sim.add_actor(ActorKind::SimulationStatistics, "Stats", WORLD, Vec::new())?;

    Ok(sim)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    let sim = build_simulation()?;

    let results = Path::new(RESULTS_DIR);
    let mut engine = DryRunEngine::new(results.join("job.json"));
    let mut manifest = ManifestObserver::create(results.join("outputs.csv"))?;

    let forwarded = mc_sim::run(&sim, &mut engine, &mut AnnouncingReader, &mut manifest)?;
    manifest.finish()?;

    info!(outputs = forwarded.len(), "done");
    Ok(())
}
