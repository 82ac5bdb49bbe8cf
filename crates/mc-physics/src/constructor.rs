//! Optional physics constructors layered on top of the base physics list.

use std::fmt;
use std::str::FromStr;

use mc_core::ConfigError;

/// The optional constructors the transport engine knows how to add.
///
/// Anything outside this set is rejected when the configuration is written,
/// not when the engine starts.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicsConstructor {
    Decay,
    RadioactiveDecay,
    Optical,
    EmDna,
}

impl PhysicsConstructor {
    pub const ALL: [PhysicsConstructor; 4] = [
        PhysicsConstructor::Decay,
        PhysicsConstructor::RadioactiveDecay,
        PhysicsConstructor::Optical,
        PhysicsConstructor::EmDna,
    ];

    /// Engine-side class name.
    pub fn as_str(self) -> &'static str {
        match self {
            PhysicsConstructor::Decay            => "G4DecayPhysics",
            PhysicsConstructor::RadioactiveDecay => "G4RadioactiveDecayPhysics",
            PhysicsConstructor::Optical          => "G4OpticalPhysics",
            PhysicsConstructor::EmDna            => "G4EmDNAPhysics",
        }
    }
}

impl FromStr for PhysicsConstructor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhysicsConstructor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownConstructor(s.to_owned()))
    }
}

impl fmt::Display for PhysicsConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
