//! The physics configuration handed to the engine.

use std::collections::BTreeMap;

use tracing::debug;

use mc_core::{ConfigError, ConfigResult, Namespace};
use mc_geometry::GeometryTree;

use crate::PhysicsConstructor;

/// Reference physics list used when none is selected.
pub const DEFAULT_PHYSICS_LIST: &str = "QGSP_BERT_EMV";

/// Secondary-production range cut applied inside one volume, in millimetres.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionCut {
    pub volume: String,
    pub cut:    f64,
}

/// Base physics list, optional constructors, and production cuts.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsConfig {
    physics_list: String,
    /// Every member of [`PhysicsConstructor::ALL`] is present; all start off.
    constructors: BTreeMap<PhysicsConstructor, bool>,
    global_cut:   Option<f64>,
    volume_cuts:  Vec<ProductionCut>,
}

impl PhysicsConfig {
    pub fn new() -> Self {
        Self {
            physics_list: DEFAULT_PHYSICS_LIST.to_owned(),
            constructors: PhysicsConstructor::ALL.into_iter().map(|c| (c, false)).collect(),
            global_cut:   None,
            volume_cuts:  Vec::new(),
        }
    }

    // ── Builder operations ────────────────────────────────────────────────

    /// Replace the base physics list.  The last call wins.
    pub fn select_physics_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.physics_list = name.into();
        debug!(physics_list = %self.physics_list, "selected physics list");
        self
    }

    /// Turn the constructor with engine-side name `name` on or off.
    ///
    /// Idempotent.  Fails with [`ConfigError::UnknownConstructor`] for a name
    /// outside the supported set.
    pub fn enable_constructor(&mut self, name: &str, enabled: bool) -> ConfigResult<&mut Self> {
        let constructor: PhysicsConstructor = name.parse()?;
        Ok(self.set_constructor(constructor, enabled))
    }

    /// Typed form of [`enable_constructor`](Self::enable_constructor).
    pub fn set_constructor(&mut self, constructor: PhysicsConstructor, enabled: bool) -> &mut Self {
        self.constructors.insert(constructor, enabled);
        debug!(%constructor, enabled, "toggled physics constructor");
        self
    }

    /// Default range cut for every volume without its own.
    pub fn set_global_cut(&mut self, cut: f64) -> &mut Self {
        self.global_cut = Some(cut);
        self
    }

    /// Range cut for one volume.  A second call for the same volume replaces
    /// the first.  The volume is resolved at assembly.
    pub fn set_production_cut(&mut self, volume: impl Into<String>, cut: f64) -> &mut Self {
        let volume = volume.into();
        match self.volume_cuts.iter_mut().find(|c| c.volume == volume) {
            Some(existing) => existing.cut = cut,
            None => self.volume_cuts.push(ProductionCut { volume, cut }),
        }
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn physics_list(&self) -> &str {
        &self.physics_list
    }

    pub fn is_enabled(&self, constructor: PhysicsConstructor) -> bool {
        self.constructors.get(&constructor).copied().unwrap_or(false)
    }

    /// Enabled constructors in declaration order.
    pub fn enabled_constructors(&self) -> impl Iterator<Item = PhysicsConstructor> + '_ {
        self.constructors.iter().filter(|(_, on)| **on).map(|(c, _)| *c)
    }

    pub fn global_cut(&self) -> Option<f64> {
        self.global_cut
    }

    pub fn production_cuts(&self) -> &[ProductionCut] {
        &self.volume_cuts
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check the list name and cuts, resolving per-volume cuts against
    /// `geometry`.
    pub fn validate(&self, geometry: &GeometryTree) -> ConfigResult<()> {
        if self.physics_list.trim().is_empty() {
            return Err(ConfigError::InvalidPhysics("physics list name is empty".into()));
        }
        if let Some(cut) = self.global_cut {
            check_cut("global", cut)?;
        }
        for pc in &self.volume_cuts {
            if !geometry.contains(&pc.volume) {
                return Err(ConfigError::UnknownReference {
                    namespace: Namespace::Volume,
                    name:      pc.volume.clone(),
                    referrer:  "production cuts".into(),
                });
            }
            check_cut(&pc.volume, pc.cut)?;
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_cut(scope: &str, cut: f64) -> ConfigResult<()> {
    if cut.is_finite() && cut > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPhysics(format!("{scope} production cut {cut} must be positive")))
    }
}
