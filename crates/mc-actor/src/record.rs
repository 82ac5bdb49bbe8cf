//! Per-step event records evaluated by filters and projected by actors.

use std::collections::HashMap;

use mc_core::Particle;

use crate::{Attribute, AttributeValue};

/// One transported step, as the set of attribute values the engine reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventRecord {
    values: HashMap<Attribute, AttributeValue>,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: Attribute, value: impl Into<AttributeValue>) {
        self.values.insert(attribute, value.into());
    }

    pub fn get(&self, attribute: Attribute) -> Option<&AttributeValue> {
        self.values.get(&attribute)
    }

    /// The particle named by [`Attribute::ParticleName`], if present and known.
    pub fn particle(&self) -> Option<Particle> {
        self.get(Attribute::ParticleName)?.as_text()?.parse().ok()
    }

    /// Value of [`Attribute::KineticEnergy`] in MeV, if present.
    pub fn kinetic_energy(&self) -> Option<f64> {
        self.get(Attribute::KineticEnergy)?.as_real()
    }
}
