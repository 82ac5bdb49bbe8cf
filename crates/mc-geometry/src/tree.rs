//! The volume hierarchy.

use std::collections::HashMap;

use tracing::{debug, warn};

use mc_core::units::M;
use mc_core::{ConfigError, ConfigResult, Namespace, Vec3, VolumeId};

use crate::{ShapeKind, Volume};

/// Name of the root volume every tree starts with.
pub const WORLD: &str = "world";

/// Hierarchy of named volumes rooted at [`WORLD`].
///
/// Volumes are stored in registration order and indexed by [`VolumeId`];
/// `VolumeId(0)` is always the world.  A name index gives O(1) lookup by
/// name.  Volumes are never removed.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeometryTree {
    volumes: Vec<Volume>,
    #[cfg_attr(feature = "serde", serde(skip))]
    by_name: HashMap<String, VolumeId>,
}

impl GeometryTree {
    /// A tree holding only the world: a 3 m air cube.
    pub fn new() -> Self {
        let mut world = Volume::new(VolumeId(0), WORLD, ShapeKind::Box, None);
        world
            .set_size(Vec3::new(3.0 * M, 3.0 * M, 3.0 * M))
            .set_material("G4_AIR");
        Self {
            by_name: HashMap::from([(WORLD.to_owned(), VolumeId(0))]),
            volumes: vec![world],
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a new volume under `parent` and return it for configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateName`] if `name` is already registered.
    /// - [`ConfigError::UnknownParent`] if `parent` is neither `world` nor a
    ///   registered volume.
    pub fn add_volume(
        &mut self,
        name:   &str,
        shape:  ShapeKind,
        parent: &str,
    ) -> ConfigResult<&mut Volume> {
        if self.by_name.contains_key(name) {
            return Err(ConfigError::DuplicateName {
                namespace: Namespace::Volume,
                name:      name.to_owned(),
            });
        }
        let parent_id = self.id_of(parent).ok_or_else(|| ConfigError::UnknownParent {
            volume: name.to_owned(),
            parent: parent.to_owned(),
        })?;

        let id = VolumeId(self.volumes.len() as u32);
        debug!(volume = name, %shape, parent, "registered volume");
        self.by_name.insert(name.to_owned(), id);
        self.volumes.push(Volume::new(id, name, shape, Some(parent_id)));
        Ok(&mut self.volumes[id.index()])
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn id_of(&self, name: &str) -> Option<VolumeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, id: VolumeId) -> Option<&Volume> {
        self.volumes.get(id.index())
    }

    pub fn volume(&self, name: &str) -> Option<&Volume> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn volume_mut(&mut self, name: &str) -> Option<&mut Volume> {
        let id = self.id_of(name)?;
        self.volumes.get_mut(id.index())
    }

    pub fn world(&self) -> &Volume {
        &self.volumes[0]
    }

    pub fn world_mut(&mut self) -> &mut Volume {
        &mut self.volumes[0]
    }

    /// All volumes in registration order, world first.
    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.iter()
    }

    /// Direct children of `id`, in registration order.
    pub fn children(&self, id: VolumeId) -> impl Iterator<Item = &Volume> {
        self.volumes.iter().filter(move |v| v.parent() == Some(id))
    }

    /// Volume names from the world down to `id`.
    pub fn path(&self, id: VolumeId) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cur = self.get(id);
        while let Some(v) = cur {
            out.push(v.name());
            cur = v.parent().and_then(|p| self.get(p));
        }
        out.reverse();
        out
    }

    /// Total number of volumes, world included.  Never zero.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check every volume is reachable from the world and fully specified.
    ///
    /// Reachability holds by construction; the walk here bounds each parent
    /// chain by the volume count so a corrupted tree reports an error rather
    /// than looping.
    pub fn validate(&self) -> ConfigResult<()> {
        for volume in &self.volumes {
            if !self.reaches_world(volume) {
                return Err(invalid(volume, "not reachable from the world volume"));
            }
            if let Some(reason) = volume.problem() {
                return Err(invalid(volume, &reason));
            }
        }
        if !self.world().placements().is_empty() {
            return Err(invalid(self.world(), "the world volume cannot be placed"));
        }
        Ok(())
    }

    fn reaches_world(&self, volume: &Volume) -> bool {
        let mut cur = volume;
        for _ in 0..self.volumes.len() {
            match cur.parent() {
                None => return cur.id() == VolumeId(0),
                Some(p) if p.index() < cur.id().index() => match self.get(p) {
                    Some(next) => cur = next,
                    None => return false,
                },
                Some(_) => return false,
            }
        }
        false
    }

    /// Copy of the tree in which every non-world volume without an explicit
    /// placement receives one identity placement at its parent's origin.
    pub fn with_default_placements(&self) -> GeometryTree {
        let mut out = self.clone();
        for volume in out.volumes.iter_mut().skip(1) {
            if volume.ensure_placed() {
                warn!(volume = volume.name(), "no placement given; placing once at parent origin");
            }
        }
        out
    }
}

impl Default for GeometryTree {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(volume: &Volume, reason: &str) -> ConfigError {
    ConfigError::InvalidVolume { name: volume.name().to_owned(), reason: reason.to_owned() }
}
