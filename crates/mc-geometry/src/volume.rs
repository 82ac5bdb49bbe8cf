//! A single logical volume and its physical copies.

use mc_core::{Rotation, Vec3, VolumeId};

use crate::{Dimensions, ShapeKind};

/// Tolerance for the orthonormality check on placement rotations.
const ROTATION_TOLERANCE: f64 = 1e-6;

/// One physical copy of a volume inside its parent.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Offset from the parent's centre, in millimetres.
    pub translation: Vec3,
    pub rotation:    Rotation,
}

impl Placement {
    pub fn at(translation: impl Into<Vec3>) -> Self {
        Self { translation: translation.into(), rotation: Rotation::IDENTITY }
    }
}

/// A named logical volume.
///
/// Created by [`GeometryTree::add_volume`](crate::GeometryTree::add_volume);
/// the shape kind and parent are fixed at that point, everything else is set
/// through the fluent setters below.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume {
    id:         VolumeId,
    name:       String,
    shape:      ShapeKind,
    parent:     Option<VolumeId>,
    dimensions: Option<Dimensions>,
    material:   Option<String>,
    placements: Vec<Placement>,
}

impl Volume {
    pub(crate) fn new(id: VolumeId, name: &str, shape: ShapeKind, parent: Option<VolumeId>) -> Self {
        Self {
            id,
            name: name.to_owned(),
            shape,
            parent,
            dimensions: None,
            material:   None,
            placements: Vec::new(),
        }
    }

    // ── Fluent setters ────────────────────────────────────────────────────

    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> &mut Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Shorthand for `set_dimensions(Dimensions::Box { size })`.
    pub fn set_size(&mut self, size: impl Into<Vec3>) -> &mut Self {
        self.set_dimensions(Dimensions::Box { size: size.into() })
    }

    pub fn set_material(&mut self, material: impl Into<String>) -> &mut Self {
        self.material = Some(material.into());
        self
    }

    /// Append one un-rotated physical copy.
    pub fn add_placement(&mut self, translation: impl Into<Vec3>) -> &mut Self {
        self.placements.push(Placement::at(translation));
        self
    }

    /// Append one rotated physical copy.
    pub fn add_rotated_placement(
        &mut self,
        translation: impl Into<Vec3>,
        rotation:    Rotation,
    ) -> &mut Self {
        self.placements.push(Placement { translation: translation.into(), rotation });
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> VolumeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// `None` only for the world.
    pub fn parent(&self) -> Option<VolumeId> {
        self.parent
    }

    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Explicit placements, in insertion order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of physical copies.  A volume with no explicit placement is
    /// placed once at its parent's origin.
    pub fn copy_count(&self) -> usize {
        self.placements.len().max(1)
    }

    pub(crate) fn ensure_placed(&mut self) -> bool {
        if self.placements.is_empty() {
            self.placements.push(Placement::default());
            true
        } else {
            false
        }
    }

    /// First violated per-volume invariant, if any.
    pub(crate) fn problem(&self) -> Option<String> {
        let Some(dims) = &self.dimensions else {
            return Some("size is not set".into());
        };
        if dims.kind() != self.shape {
            return Some(format!(
                "{} dimensions given for a {} volume",
                dims.kind(),
                self.shape
            ));
        }
        if let Some(p) = dims.problem() {
            return Some(p);
        }
        match self.material.as_deref() {
            None => return Some("material is not set".into()),
            Some(m) if m.trim().is_empty() => return Some("material name is empty".into()),
            Some(_) => {}
        }
        self.placements.iter().enumerate().find_map(|(copy, p)| {
            if !p.translation.is_finite() {
                Some(format!("placement {copy} has a non-finite translation"))
            } else if !p.rotation.is_proper(ROTATION_TOLERANCE) {
                Some(format!("placement {copy} rotation is not a proper rotation matrix"))
            } else {
                None
            }
        })
    }
}
