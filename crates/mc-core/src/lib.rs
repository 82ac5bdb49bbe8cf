//! `mc-core` — foundational types for the `rust_mc` simulation-configuration
//! framework.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`units`]     | `UnitRegistry`, `resolve`, `parse_quantity`, constants  |
//! | [`vector`]    | `Vec3`, `Rotation`                                      |
//! | [`ids`]       | `VolumeId`, `FilterId`, `ActorId`                       |
//! | [`particle`]  | `Particle` names understood by the transport engine     |
//! | [`rng`]       | `RngEngine`, `RngSeed`, `RngConfig`, `SeedStream`       |
//! | [`error`]     | `ConfigError`, `ConfigResult`, `Namespace`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `mc-output` for descriptor export.             |

pub mod error;
pub mod ids;
pub mod particle;
pub mod rng;
pub mod units;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult, Namespace};
pub use ids::{ActorId, FilterId, VolumeId};
pub use particle::Particle;
pub use rng::{RngConfig, RngEngine, RngSeed, SeedStream};
pub use units::{UnitRegistry, parse_quantity};
pub use vector::{Rotation, Vec3};
