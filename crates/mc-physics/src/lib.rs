//! `mc-physics` — physics model selection.
//!
//! | Module           | Contents                                  |
//! |------------------|-------------------------------------------|
//! | [`constructor`]  | `PhysicsConstructor` (closed set)         |
//! | [`config`]       | `PhysicsConfig`, `ProductionCut`          |

pub mod config;
pub mod constructor;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_PHYSICS_LIST, PhysicsConfig, ProductionCut};
pub use constructor::PhysicsConstructor;
