//! Strongly typed index wrappers for registered entities.
//!
//! Every registry in the framework stores its entries in a `Vec` in insertion
//! order and hands out the position as a typed ID.  The inner integer is
//! `pub`, but callers should prefer [`index`](VolumeId::index) for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in the owning registry.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a volume in the geometry tree.  `VolumeId(0)` is the world.
    pub struct VolumeId(u32);
}

typed_id! {
    /// Index of a filter in the actor pipeline.
    pub struct FilterId(u32);
}

typed_id! {
    /// Index of an actor in the actor pipeline.
    pub struct ActorId(u32);
}
