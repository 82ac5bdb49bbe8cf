//! `mc-source` — primary-particle source descriptors.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`distribution`] | `PositionDistribution`, `EnergyDistribution`, `DirectionDistribution` |
//! | [`source`]       | `Source`, `SourceBuilder`                                |
//!
//! A [`Source`] can only be obtained from [`SourceBuilder::build`], which
//! runs every check, so holding a `Source` means holding a valid one.
//!
//! # Example
//!
//! ```rust
//! use mc_core::Particle;
//! use mc_core::units::{BQ, CM, KEV, MM};
//! use mc_source::{DirectionDistribution, EnergyDistribution, PositionDistribution, SourceBuilder};
//!
//! let source = SourceBuilder::new("Default")
//!     .particle(Particle::Gamma)
//!     .position(PositionDistribution::sphere(10.0 * MM).translated([0.0, 0.0, -14.0 * CM]))
//!     .energy(EnergyDistribution::Mono(80.0 * KEV))
//!     .direction(DirectionDistribution::Momentum([0.0, 0.0, 1.0].into()))
//!     .activity(200.0 * BQ)
//!     .build()
//!     .unwrap();
//! assert_eq!(source.name(), "Default");
//! ```

pub mod distribution;
pub mod source;


pub use distribution::{
    DirectionDistribution, EnergyDistribution, PositionDistribution, PositionShape, SpectrumLine,
};
pub use source::{MOMENTUM_TOLERANCE, Source, SourceBuilder};
