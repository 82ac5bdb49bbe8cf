//! The `Source` descriptor and its fluent builder.

use std::f64::consts::LN_2;

use mc_core::{ConfigError, ConfigResult, Particle};

use crate::{DirectionDistribution, EnergyDistribution, PositionDistribution};

/// Maximum deviation from unit length accepted for a momentum direction.
pub const MOMENTUM_TOLERANCE: f64 = 1e-6;

// ── Source ────────────────────────────────────────────────────────────────────

/// A validated primary-particle source.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Source {
    name:      String,
    particle:  Particle,
    position:  PositionDistribution,
    energy:    EnergyDistribution,
    direction: DirectionDistribution,
    /// Decays per nanosecond at t = 0.
    activity:  f64,
    half_life: Option<f64>,
}

impl Source {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn particle(&self) -> Particle {
        self.particle
    }

    pub fn position(&self) -> &PositionDistribution {
        &self.position
    }

    pub fn energy(&self) -> &EnergyDistribution {
        &self.energy
    }

    pub fn direction(&self) -> &DirectionDistribution {
        &self.direction
    }

    pub fn activity(&self) -> f64 {
        self.activity
    }

    pub fn half_life(&self) -> Option<f64> {
        self.half_life
    }

    /// Expected number of decays in `[start, end)`, both measured from t = 0.
    ///
    /// Without a half-life the activity is constant; with one it decays
    /// exponentially from its t = 0 value.
    pub fn expected_decays(&self, start: f64, end: f64) -> f64 {
        if end <= start {
            return 0.0;
        }
        match self.half_life {
            None => self.activity * (end - start),
            Some(t_half) => {
                let tau = t_half / LN_2;
                self.activity * tau * ((-start / tau).exp() - (-end / tau).exp())
            }
        }
    }
}

// ── SourceBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`Source`].
///
/// # Required inputs
///
/// | Method          | Meaning                                 |
/// |-----------------|-----------------------------------------|
/// | `.particle(p)`  | Primary particle type                   |
/// | `.position(d)`  | Emission region                         |
/// | `.energy(d)`    | Kinetic-energy distribution             |
/// | `.direction(d)` | Emission direction                      |
/// | `.activity(a)`  | Activity at t = 0 (must be > 0)         |
///
/// `.half_life(t)` is optional; without it the activity is constant.
#[derive(Clone, Debug)]
pub struct SourceBuilder {
    name:      String,
    particle:  Option<Particle>,
    position:  Option<PositionDistribution>,
    energy:    Option<EnergyDistribution>,
    direction: Option<DirectionDistribution>,
    activity:  Option<f64>,
    half_life: Option<f64>,
}

impl SourceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            particle:  None,
            position:  None,
            energy:    None,
            direction: None,
            activity:  None,
            half_life: None,
        }
    }

    pub fn particle(mut self, particle: Particle) -> Self {
        self.particle = Some(particle);
        self
    }

    pub fn position(mut self, position: PositionDistribution) -> Self {
        self.position = Some(position);
        self
    }

    pub fn energy(mut self, energy: EnergyDistribution) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn direction(mut self, direction: DirectionDistribution) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn activity(mut self, activity: f64) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn half_life(mut self, half_life: f64) -> Self {
        self.half_life = Some(half_life);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check every field without consuming the builder.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSource`] when a required field is unset, the
    /// activity is not strictly positive, a distribution parameter is out of
    /// range, or a momentum direction is not unit length within
    /// [`MOMENTUM_TOLERANCE`].
    pub fn validate(&self) -> ConfigResult<()> {
        let fail = |reason: String| ConfigError::InvalidSource { name: self.name.clone(), reason };

        if self.name.trim().is_empty() {
            return Err(fail("source name is empty".into()));
        }
        if self.particle.is_none() {
            return Err(fail("particle is not set".into()));
        }

        let position = self.position.as_ref().ok_or_else(|| fail("position is not set".into()))?;
        if let Some(reason) = position.problem() {
            return Err(fail(reason));
        }

        let energy = self.energy.as_ref().ok_or_else(|| fail("energy is not set".into()))?;
        if let Some(reason) = energy.problem() {
            return Err(fail(reason));
        }

        match self.direction.ok_or_else(|| fail("direction is not set".into()))? {
            DirectionDistribution::Momentum(m) if !m.is_unit(MOMENTUM_TOLERANCE) => {
                return Err(fail(format!(
                    "momentum direction {m} has length {} (must be 1 within {MOMENTUM_TOLERANCE})",
                    m.norm()
                )));
            }
            DirectionDistribution::Focused { point } if !point.is_finite() => {
                return Err(fail(format!("focus point {point} is not finite")));
            }
            _ => {}
        }

        match self.activity {
            None => return Err(fail("activity is not set".into())),
            Some(a) if !(a.is_finite() && a > 0.0) => {
                return Err(fail(format!("activity {a} must be strictly positive")));
            }
            Some(_) => {}
        }

        if let Some(t) = self.half_life {
            if !(t.is_finite() && t > 0.0) {
                return Err(fail(format!("half-life {t} must be strictly positive")));
            }
        }
        Ok(())
    }

    /// Validate and produce the immutable [`Source`].
    pub fn build(self) -> ConfigResult<Source> {
        self.validate()?;
        let fail = |reason: &str| ConfigError::InvalidSource {
            name:   self.name.clone(),
            reason: reason.to_owned(),
        };
        Ok(Source {
            particle:  self.particle.ok_or_else(|| fail("particle is not set"))?,
            position:  self.position.ok_or_else(|| fail("position is not set"))?,
            energy:    self.energy.ok_or_else(|| fail("energy is not set"))?,
            direction: self.direction.ok_or_else(|| fail("direction is not set"))?,
            activity:  self.activity.ok_or_else(|| fail("activity is not set"))?,
            half_life: self.half_life,
            name:      self.name,
        })
    }
}
