//! Particle names shared by sources and particle filters.
//!
//! The string forms are the transport engine's particle-table names, so
//! `Particle::Electron` round-trips as `"e-"`.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// A primary or secondary particle type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Particle {
    Gamma,
    Electron,
    Positron,
    Proton,
    Neutron,
    Alpha,
    OpticalPhoton,
    /// Non-interacting test particle.
    Geantino,
}

impl Particle {
    pub const ALL: [Particle; 8] = [
        Particle::Gamma,
        Particle::Electron,
        Particle::Positron,
        Particle::Proton,
        Particle::Neutron,
        Particle::Alpha,
        Particle::OpticalPhoton,
        Particle::Geantino,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Particle::Gamma         => "gamma",
            Particle::Electron      => "e-",
            Particle::Positron      => "e+",
            Particle::Proton        => "proton",
            Particle::Neutron       => "neutron",
            Particle::Alpha         => "alpha",
            Particle::OpticalPhoton => "opticalphoton",
            Particle::Geantino      => "geantino",
        }
    }
}

impl FromStr for Particle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Particle::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownParticle(s.to_owned()))
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
