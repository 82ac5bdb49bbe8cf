//! Recordable per-step attributes.

use std::fmt;
use std::str::FromStr;

use mc_core::{ConfigError, ConfigResult, Vec3};

/// Generate the `Attribute` enum together with its name table.
macro_rules! attributes {
    ($($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        /// A column an actor can record for every accepted step.
        ///
        /// The string form is the engine-side attribute name.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Attribute {
            $($(#[$doc])* $variant,)+
        }

        impl Attribute {
            pub const ALL: &'static [Attribute] = &[$(Attribute::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Attribute::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

attributes! {
    /// Kinetic energy at the start of the step.
    KineticEnergy,
    PostKineticEnergy,
    Weight,
    PrePosition,
    PostPosition,
    PreDirection,
    PostDirection,
    ParticleName,
    PDGCode,
    TimeFromBeginOfEvent,
    GlobalTime,
    LocalTime,
    /// Vertex of the event's primary.
    EventPosition,
    EventID,
    TrackID,
    ParentID,
    TotalEnergyDeposit,
    TrackVolumeName,
}

impl Attribute {
    /// Parse an ordered list of attribute names, keeping the order.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> ConfigResult<Vec<Attribute>> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }
}

impl FromStr for Attribute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownAttribute(s.to_owned()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of one attribute for one step.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Real(f64),
    Int(i64),
    Vector(Vec3),
    Text(String),
}

impl AttributeValue {
    pub fn as_real(&self) -> Option<f64> {
        match self {
            AttributeValue::Real(v) => Some(*v),
            AttributeValue::Int(v)  => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    /// Plain text form used in delimited output; vectors are space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Real(v)   => write!(f, "{v}"),
            AttributeValue::Int(v)    => write!(f, "{v}"),
            AttributeValue::Vector(v) => write!(f, "{} {} {}", v.x, v.y, v.z),
            AttributeValue::Text(s)   => f.write_str(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Real(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<Vec3> for AttributeValue {
    fn from(v: Vec3) -> Self {
        AttributeValue::Vector(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_owned())
    }
}
