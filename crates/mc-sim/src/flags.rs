//! Run flags and the multi-source policy.

use std::fmt;

use mc_core::{ConfigError, ConfigResult, RngConfig};

// ── Visualization ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualizationBackend {
    #[default]
    Vrml,
    Gdml,
    Qt,
}

impl VisualizationBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualizationBackend::Vrml => "vrml",
            VisualizationBackend::Gdml => "gdml",
            VisualizationBackend::Qt   => "qt",
        }
    }
}

impl fmt::Display for VisualizationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the engine should render the scene, and with what.  Rendering
/// itself happens in the engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visualization {
    pub enabled: bool,
    pub backend: VisualizationBackend,
}

// ── RunFlags ──────────────────────────────────────────────────────────────────

/// Engine-level switches passed through with the descriptor.
///
/// | Field           | Default                         |
/// |-----------------|---------------------------------|
/// | `verbosity`     | `1`                             |
/// | `visualization` | off, `vrml` backend             |
/// | `thread_count`  | `1`                             |
/// | `rng`           | `MersenneTwister`, `auto` seed  |
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunFlags {
    pub verbosity:     u32,
    pub visualization: Visualization,
    /// Engine worker threads; must be at least 1.
    pub thread_count:  usize,
    pub rng:           RngConfig,
}

impl Default for RunFlags {
    fn default() -> Self {
        Self {
            verbosity:     1,
            visualization: Visualization::default(),
            thread_count:  1,
            rng:           RngConfig::default(),
        }
    }
}

impl RunFlags {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.thread_count == 0 {
            return Err(ConfigError::InvalidRunFlags("thread count must be at least 1".into()));
        }
        Ok(())
    }

    /// Per-thread seeds derived from an explicit master seed.
    pub fn thread_seeds(&self) -> Option<Vec<u64>> {
        self.rng.thread_seeds(self.thread_count)
    }
}

// ── SourceCombination ─────────────────────────────────────────────────────────

/// How several registered sources share the run.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceCombination {
    /// Every source emits during every interval.
    #[default]
    Concurrent,
    /// Only the named source is handed to the engine.
    Exclusive { active: String },
}
