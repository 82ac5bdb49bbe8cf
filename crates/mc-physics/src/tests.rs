//! Unit tests for mc-physics.

#[cfg(test)]
mod physics_list {
    use crate::{DEFAULT_PHYSICS_LIST, PhysicsConfig};

    #[test]
    fn default_list() {
        assert_eq!(PhysicsConfig::new().physics_list(), DEFAULT_PHYSICS_LIST);
    }

    #[test]
    fn selection_overwrites() {
        let mut cfg = PhysicsConfig::new();
        cfg.select_physics_list("QBBC");
        cfg.select_physics_list("G4EmStandardPhysics");
        assert_eq!(cfg.physics_list(), "G4EmStandardPhysics");
    }
}

#[cfg(test)]
mod constructors {
    use mc_core::ConfigError;

    use crate::{PhysicsConfig, PhysicsConstructor};

    #[test]
    fn all_start_disabled() {
        let cfg = PhysicsConfig::new();
        assert_eq!(cfg.enabled_constructors().count(), 0);
        for c in PhysicsConstructor::ALL {
            assert!(!cfg.is_enabled(c));
        }
    }

    #[test]
    fn enable_by_name() {
        let mut cfg = PhysicsConfig::new();
        cfg.enable_constructor("G4OpticalPhysics", true).unwrap();
        assert!(cfg.is_enabled(PhysicsConstructor::Optical));
        assert_eq!(cfg.enabled_constructors().collect::<Vec<_>>(), [PhysicsConstructor::Optical]);
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut cfg = PhysicsConfig::new();
        cfg.enable_constructor("G4DecayPhysics", true).unwrap();
        let once = cfg.clone();
        cfg.enable_constructor("G4DecayPhysics", true).unwrap();
        assert_eq!(cfg, once);
        cfg.enable_constructor("G4DecayPhysics", false).unwrap();
        assert!(!cfg.is_enabled(PhysicsConstructor::Decay));
    }

    #[test]
    fn unknown_constructor_fails() {
        let mut cfg = PhysicsConfig::new();
        let err = cfg.enable_constructor("G4WarpDrivePhysics", true).unwrap_err();
        assert_eq!(err, ConfigError::UnknownConstructor("G4WarpDrivePhysics".into()));
        assert_eq!(cfg, PhysicsConfig::new());
    }

    #[test]
    fn names_round_trip() {
        for c in PhysicsConstructor::ALL {
            assert_eq!(c.as_str().parse::<PhysicsConstructor>().unwrap(), c);
        }
    }
}

#[cfg(test)]
mod cuts {
    use mc_core::ConfigError;
    use mc_core::units::MM;
    use mc_geometry::{GeometryTree, ShapeKind, WORLD};

    use crate::PhysicsConfig;

    fn tree() -> GeometryTree {
        let mut tree = GeometryTree::new();
        tree.add_volume("Crystal", ShapeKind::Box, WORLD).unwrap();
        tree
    }

    #[test]
    fn cut_on_registered_volume_validates() {
        let mut cfg = PhysicsConfig::new();
        cfg.set_global_cut(0.7 * MM).set_production_cut("Crystal", 0.1 * MM);
        assert!(cfg.validate(&tree()).is_ok());
    }

    #[test]
    fn repeated_cut_replaces() {
        let mut cfg = PhysicsConfig::new();
        cfg.set_production_cut("Crystal", 1.0).set_production_cut("Crystal", 2.0);
        assert_eq!(cfg.production_cuts().len(), 1);
        assert_eq!(cfg.production_cuts()[0].cut, 2.0);
    }

    #[test]
    fn cut_on_unknown_volume_fails() {
        let mut cfg = PhysicsConfig::new();
        cfg.set_production_cut("Ghost", 1.0);
        assert!(matches!(
            cfg.validate(&tree()),
            Err(ConfigError::UnknownReference { name, .. }) if name == "Ghost"
        ));
    }

    #[test]
    fn non_positive_cut_fails() {
        let mut cfg = PhysicsConfig::new();
        cfg.set_global_cut(0.0);
        assert!(matches!(cfg.validate(&tree()), Err(ConfigError::InvalidPhysics(_))));
    }

    #[test]
    fn empty_list_name_fails() {
        let mut cfg = PhysicsConfig::new();
        cfg.select_physics_list("  ");
        assert!(matches!(cfg.validate(&tree()), Err(ConfigError::InvalidPhysics(_))));
    }
}
