//! Position, energy, and direction distributions of emitted primaries.

use mc_core::{Rotation, Vec3};

// ── Position ──────────────────────────────────────────────────────────────────

/// Region from which primaries are emitted, in the source's local frame.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionShape {
    Point,
    /// Uniform inside a sphere.
    Sphere { radius: f64 },
    /// Uniform inside a box with full edge lengths `size`.
    Box { size: Vec3 },
    /// Uniform on a disc in the local xy plane.
    Disc { radius: f64 },
}

/// Emission region plus its placement in the world.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionDistribution {
    pub shape:       PositionShape,
    pub translation: Vec3,
    pub rotation:    Rotation,
}

impl PositionDistribution {
    pub fn new(shape: PositionShape) -> Self {
        Self { shape, translation: Vec3::ZERO, rotation: Rotation::IDENTITY }
    }

    pub fn point() -> Self {
        Self::new(PositionShape::Point)
    }

    pub fn sphere(radius: f64) -> Self {
        Self::new(PositionShape::Sphere { radius })
    }

    pub fn cuboid(size: impl Into<Vec3>) -> Self {
        Self::new(PositionShape::Box { size: size.into() })
    }

    pub fn disc(radius: f64) -> Self {
        Self::new(PositionShape::Disc { radius })
    }

    pub fn translated(mut self, translation: impl Into<Vec3>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub(crate) fn problem(&self) -> Option<String> {
        if !self.translation.is_finite() {
            return Some(format!("position translation {} is not finite", self.translation));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match self.shape {
            PositionShape::Point => None,
            PositionShape::Sphere { radius } | PositionShape::Disc { radius } => {
                (!positive(radius)).then(|| format!("position radius {radius} must be positive"))
            }
            PositionShape::Box { size } => (!(positive(size.x) && positive(size.y) && positive(size.z)))
                .then(|| format!("position box size {size} must be positive in every axis")),
        }
    }
}

// ── Energy ────────────────────────────────────────────────────────────────────

/// One discrete line of an emission spectrum.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumLine {
    /// Kinetic energy in MeV.
    pub energy: f64,
    /// Relative intensity; need not be normalized.
    pub weight: f64,
}

/// Kinetic-energy distribution of emitted primaries.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyDistribution {
    /// Every primary has the same energy.
    Mono(f64),
    /// Discrete lines sampled by relative weight.
    Spectrum(Vec<SpectrumLine>),
}

impl EnergyDistribution {
    /// Build a spectrum from parallel energy and weight lists.
    ///
    /// Returns `None` when the lists differ in length.
    pub fn lines(energies: &[f64], weights: &[f64]) -> Option<Self> {
        (energies.len() == weights.len()).then(|| {
            EnergyDistribution::Spectrum(
                energies
                    .iter()
                    .zip(weights)
                    .map(|(&energy, &weight)| SpectrumLine { energy, weight })
                    .collect(),
            )
        })
    }

    /// Intensity-weighted mean energy.
    pub fn mean(&self) -> f64 {
        match self {
            EnergyDistribution::Mono(e) => *e,
            EnergyDistribution::Spectrum(lines) => {
                let total: f64 = lines.iter().map(|l| l.weight).sum();
                if total > 0.0 {
                    lines.iter().map(|l| l.energy * l.weight).sum::<f64>() / total
                } else {
                    0.0
                }
            }
        }
    }

    pub(crate) fn problem(&self) -> Option<String> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match self {
            EnergyDistribution::Mono(e) => {
                (!positive(*e)).then(|| format!("mono energy {e} must be positive"))
            }
            EnergyDistribution::Spectrum(lines) => {
                if lines.is_empty() {
                    return Some("energy spectrum has no lines".into());
                }
                if let Some(l) = lines.iter().find(|l| !positive(l.energy)) {
                    return Some(format!("spectrum energy {} must be positive", l.energy));
                }
                if let Some(l) = lines.iter().find(|l| !(l.weight.is_finite() && l.weight >= 0.0)) {
                    return Some(format!("spectrum weight {} must be non-negative", l.weight));
                }
                (lines.iter().map(|l| l.weight).sum::<f64>() <= 0.0)
                    .then(|| "spectrum weights sum to zero".into())
            }
        }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Emission direction of primaries.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionDistribution {
    /// Every primary travels along this unit vector.
    Momentum(Vec3),
    /// Uniform over the full sphere.
    Isotropic,
    /// Every primary is aimed at this world-frame point.
    Focused { point: Vec3 },
}
