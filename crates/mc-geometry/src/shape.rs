//! Solid shapes and their size parameters.

use std::fmt;

use mc_core::Vec3;

/// The solid type of a volume, chosen at registration time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Rectangular box.
    Box,
    /// Solid or hollow sphere.
    Sphere,
    /// Solid or hollow cylinder along z.
    Tubs,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Box    => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Tubs   => "Tubs",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size parameters, in millimetres.  The variant must match the volume's
/// [`ShapeKind`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimensions {
    /// Full edge lengths along x, y, z.
    Box { size: Vec3 },
    Sphere { rmin: f64, rmax: f64 },
    /// `half_z` is half the cylinder height.
    Tubs { rmin: f64, rmax: f64, half_z: f64 },
}

impl Dimensions {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Dimensions::Box { .. }    => ShapeKind::Box,
            Dimensions::Sphere { .. } => ShapeKind::Sphere,
            Dimensions::Tubs { .. }   => ShapeKind::Tubs,
        }
    }

    /// Describe the first invalid parameter, if any.
    pub(crate) fn problem(&self) -> Option<String> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            Dimensions::Box { size } => (!(positive(size.x) && positive(size.y) && positive(size.z)))
                .then(|| format!("box size {size} must be positive in every axis")),
            Dimensions::Sphere { rmin, rmax } => check_radii(rmin, rmax),
            Dimensions::Tubs { rmin, rmax, half_z } => check_radii(rmin, rmax).or_else(|| {
                (!positive(half_z)).then(|| format!("tubs half length {half_z} must be positive"))
            }),
        }
    }
}

fn check_radii(rmin: f64, rmax: f64) -> Option<String> {
    if !(rmax.is_finite() && rmax > 0.0) {
        Some(format!("outer radius {rmax} must be positive"))
    } else if !(rmin >= 0.0 && rmin < rmax) {
        Some(format!("inner radius {rmin} must lie in [0, {rmax})"))
    } else {
        None
    }
}
