//! `mc-geometry` — the detector geometry tree.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`shape`]  | `ShapeKind`, `Dimensions`                                 |
//! | [`volume`] | `Volume`, `Placement`                                     |
//! | [`tree`]   | `GeometryTree`, the `world` root                          |
//!
//! # Tree model
//!
//! Volumes form a tree rooted at the pre-registered `world` volume.  A child
//! can only name a parent that is already registered, so the registration
//! order is a topological order and no cycle can ever form.
//!
//! Each volume owns an ordered list of [`Placement`]s; the number of
//! placements is the number of physical copies.  Placements carry only a
//! translation and a rotation, so every copy of a volume shares its shape,
//! size and material by construction.

pub mod shape;
pub mod tree;
pub mod volume;

#[cfg(test)]
mod tests;

pub use shape::{Dimensions, ShapeKind};
pub use tree::{GeometryTree, WORLD};
pub use volume::{Placement, Volume};
