//! Predicates on an actor's event stream.

use std::fmt;

use mc_core::{ConfigError, ConfigResult, FilterId, Particle};

use crate::EventRecord;

/// What a filter matches, including its match value.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterKind {
    /// Accept steps of exactly this particle type.
    Particle(Particle),
    /// Accept steps whose kinetic energy lies in `[min, max]` (MeV).
    KineticEnergy { min: f64, max: f64 },
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Particle(_)          => "ParticleFilter",
            FilterKind::KineticEnergy { .. } => "KineticEnergyFilter",
        }
    }

    fn problem(&self) -> Option<String> {
        match *self {
            FilterKind::Particle(_) => None,
            FilterKind::KineticEnergy { min, max } => {
                (!(min >= 0.0 && min <= max && max.is_finite()))
                    .then(|| format!("energy window [{min}, {max}] must satisfy 0 <= min <= max"))
            }
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, registered predicate.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    id:   FilterId,
    name: String,
    kind: FilterKind,
}

impl Filter {
    pub(crate) fn new(id: FilterId, name: &str, kind: FilterKind) -> ConfigResult<Self> {
        let filter = Self { id, name: name.to_owned(), kind };
        filter.validate()?;
        Ok(filter)
    }

    pub fn id(&self) -> FilterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FilterKind {
        &self.kind
    }

    pub fn validate(&self) -> ConfigResult<()> {
        match self.kind.problem() {
            Some(reason) => Err(ConfigError::InvalidFilter { name: self.name.clone(), reason }),
            None => Ok(()),
        }
    }

    /// `true` if `record` passes this filter.  A record lacking the
    /// attribute the filter inspects is rejected.
    pub fn accepts(&self, record: &EventRecord) -> bool {
        match self.kind {
            FilterKind::Particle(p) => record.particle() == Some(p),
            FilterKind::KineticEnergy { min, max } => record
                .kinetic_energy()
                .is_some_and(|e| (min..=max).contains(&e)),
        }
    }
}
