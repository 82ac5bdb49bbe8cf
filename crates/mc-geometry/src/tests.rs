//! Unit tests for mc-geometry.

use mc_core::units::{CM, M, MM};
use mc_core::{ConfigError, Namespace, Rotation, Vec3};

use crate::{Dimensions, GeometryTree, ShapeKind, WORLD};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// World plus one fully specified 20×20×10 cm crystal.
fn crystal_tree() -> GeometryTree {
    let mut tree = GeometryTree::new();
    tree.add_volume("Crystal", ShapeKind::Box, WORLD)
        .unwrap()
        .set_size([20.0 * CM, 20.0 * CM, 10.0 * CM])
        .set_material("G4_CADMIUM_TELLURIDE");
    tree
}

// ── Registration ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;

    #[test]
    fn new_tree_has_default_world() {
        let tree = GeometryTree::new();
        assert_eq!(tree.len(), 1);
        let world = tree.world();
        assert_eq!(world.name(), WORLD);
        assert_eq!(world.material(), Some("G4_AIR"));
        assert_eq!(
            world.dimensions(),
            Some(&Dimensions::Box { size: Vec3::new(3.0 * M, 3.0 * M, 3.0 * M) })
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn child_of_world_registers() {
        let tree = crystal_tree();
        assert_eq!(tree.len(), 2);
        let crystal = tree.volume("Crystal").unwrap();
        assert_eq!(crystal.parent(), Some(tree.world().id()));
        assert_eq!(tree.path(crystal.id()), vec![WORLD, "Crystal"]);
    }

    #[test]
    fn unknown_parent_fails() {
        let mut tree = GeometryTree::new();
        let err = tree.add_volume("Pixel", ShapeKind::Box, "Crystal").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownParent { volume: "Pixel".into(), parent: "Crystal".into() }
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn parent_must_exist_before_child() {
        // Registering in the wrong order fails; the right order succeeds.
        let mut tree = GeometryTree::new();
        assert!(tree.add_volume("Inner", ShapeKind::Box, "Outer").is_err());
        tree.add_volume("Outer", ShapeKind::Box, WORLD).unwrap();
        tree.add_volume("Inner", ShapeKind::Box, "Outer").unwrap();
        let outer = tree.id_of("Outer").unwrap();
        let names: Vec<_> = tree.children(outer).map(|v| v.name()).collect();
        assert_eq!(names, ["Inner"]);
    }

    #[test]
    fn duplicate_name_fails_regardless_of_parent() {
        let mut tree = crystal_tree();
        let err = tree.add_volume("Crystal", ShapeKind::Sphere, "Crystal").unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateName { namespace: Namespace::Volume, name: "Crystal".into() }
        );
    }

    #[test]
    fn world_name_is_reserved() {
        let mut tree = GeometryTree::new();
        assert!(matches!(
            tree.add_volume(WORLD, ShapeKind::Box, WORLD),
            Err(ConfigError::DuplicateName { .. })
        ));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut tree = GeometryTree::new();
        for name in ["c", "a", "b"] {
            tree.add_volume(name, ShapeKind::Box, WORLD).unwrap();
        }
        let names: Vec<_> = tree.iter().map(|v| v.name()).collect();
        assert_eq!(names, [WORLD, "c", "a", "b"]);
    }
}

// ── Placements ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placements {
    use super::*;

    #[test]
    fn placement_count_is_copy_count() {
        let mut tree = crystal_tree();
        let crystal = tree.volume_mut("Crystal").unwrap();
        for i in 0..8 {
            crystal.add_placement([i as f64 * CM, -50.0 * CM, 0.0]);
        }
        let crystal = tree.volume("Crystal").unwrap();
        assert_eq!(crystal.placements().len(), 8);
        assert_eq!(crystal.copy_count(), 8);
        assert_eq!(crystal.placements()[3].translation, Vec3::new(30.0, -500.0, 0.0));
        assert_eq!(crystal.placements()[3].rotation, Rotation::IDENTITY);
    }

    #[test]
    fn unplaced_volume_counts_one_copy() {
        let tree = crystal_tree();
        assert_eq!(tree.volume("Crystal").unwrap().copy_count(), 1);
        assert!(tree.volume("Crystal").unwrap().placements().is_empty());

        let resolved = tree.with_default_placements();
        assert_eq!(resolved.volume("Crystal").unwrap().placements().len(), 1);
        assert!(resolved.world().placements().is_empty());
    }

    #[test]
    fn explicit_placements_untouched_by_defaults() {
        let mut tree = crystal_tree();
        tree.volume_mut("Crystal").unwrap().add_placement([1.0, 2.0, 3.0]);
        let resolved = tree.with_default_placements();
        assert_eq!(
            resolved.volume("Crystal").unwrap().placements()[0].translation,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn improper_rotation_fails_validation() {
        let mut tree = crystal_tree();
        let mirror = Rotation([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        tree.volume_mut("Crystal").unwrap().add_rotated_placement(Vec3::ZERO, mirror);
        assert!(matches!(tree.validate(), Err(ConfigError::InvalidVolume { .. })));
    }

    #[test]
    fn world_cannot_be_placed() {
        let mut tree = GeometryTree::new();
        tree.world_mut().add_placement(Vec3::ZERO);
        assert!(matches!(tree.validate(), Err(ConfigError::InvalidVolume { name, .. }) if name == WORLD));
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    fn reason(tree: &GeometryTree) -> String {
        match tree.validate() {
            Err(ConfigError::InvalidVolume { reason, .. }) => reason,
            other => panic!("expected InvalidVolume, got {other:?}"),
        }
    }

    #[test]
    fn fully_specified_tree_validates() {
        assert!(crystal_tree().validate().is_ok());
    }

    #[test]
    fn missing_size_fails() {
        let mut tree = GeometryTree::new();
        tree.add_volume("Bare", ShapeKind::Box, WORLD).unwrap().set_material("G4_WATER");
        assert!(reason(&tree).contains("size"));
    }

    #[test]
    fn missing_material_fails() {
        let mut tree = GeometryTree::new();
        tree.add_volume("Bare", ShapeKind::Box, WORLD).unwrap().set_size([1.0, 1.0, 1.0]);
        assert!(reason(&tree).contains("material"));
    }

    #[test]
    fn dimensions_must_match_shape() {
        let mut tree = GeometryTree::new();
        tree.add_volume("Ball", ShapeKind::Sphere, WORLD)
            .unwrap()
            .set_size([1.0, 1.0, 1.0])
            .set_material("G4_WATER");
        assert!(reason(&tree).contains("Sphere"));
    }

    #[test]
    fn non_positive_dimensions_fail() {
        let mut tree = GeometryTree::new();
        tree.add_volume("Flat", ShapeKind::Box, WORLD)
            .unwrap()
            .set_size([1.0, 0.0, 1.0])
            .set_material("G4_WATER");
        assert!(tree.validate().is_err());

        let mut tree = GeometryTree::new();
        tree.add_volume("Shell", ShapeKind::Sphere, WORLD)
            .unwrap()
            .set_dimensions(Dimensions::Sphere { rmin: 5.0 * MM, rmax: 5.0 * MM })
            .set_material("G4_WATER");
        assert!(reason(&tree).contains("inner radius"));
    }

    #[test]
    fn tubs_validates() {
        let mut tree = GeometryTree::new();
        tree.add_volume("Pipe", ShapeKind::Tubs, WORLD)
            .unwrap()
            .set_dimensions(Dimensions::Tubs { rmin: 0.0, rmax: 2.0 * CM, half_z: 5.0 * CM })
            .set_material("G4_Fe");
        assert!(tree.validate().is_ok());
    }
}
