//! Physical unit registry.
//!
//! # Canonical system
//!
//! Every quantity handled by the framework is a plain `f64` expressed in the
//! transport engine's internal unit system:
//!
//! | Dimension | Canonical unit |
//! |-----------|----------------|
//! | length    | millimetre     |
//! | time      | nanosecond     |
//! | energy    | MeV            |
//! | angle     | radian         |
//!
//! Derived units follow from these: one becquerel is one decay per second,
//! i.e. `1 / SECOND` = 1e-9 per nanosecond.
//!
//! Configuration code multiplies by the constants below (`20.0 * CM`) or
//! resolves a symbol at run time with [`resolve`] / [`parse_quantity`].
//!
//! The symbol table is built once, on first access, and is read-only from
//! then on.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::{ConfigError, ConfigResult};

// ── Length ────────────────────────────────────────────────────────────────────

pub const MM: f64 = 1.0;
pub const NM: f64 = 1e-6 * MM;
pub const UM: f64 = 1e-3 * MM;
pub const CM: f64 = 10.0 * MM;
pub const M:  f64 = 1_000.0 * MM;
pub const KM: f64 = 1_000.0 * M;

// ── Time ──────────────────────────────────────────────────────────────────────

pub const NS:     f64 = 1.0;
pub const US:     f64 = 1e3 * NS;
pub const MS:     f64 = 1e6 * NS;
pub const SECOND: f64 = 1e9 * NS;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR:   f64 = 60.0 * MINUTE;

// ── Energy ────────────────────────────────────────────────────────────────────

pub const MEV: f64 = 1.0;
pub const EV:  f64 = 1e-6 * MEV;
pub const KEV: f64 = 1e-3 * MEV;
pub const GEV: f64 = 1e3 * MEV;
pub const TEV: f64 = 1e6 * MEV;

// ── Activity ──────────────────────────────────────────────────────────────────

pub const BQ:  f64 = 1.0 / SECOND;
pub const KBQ: f64 = 1e3 * BQ;
pub const MBQ: f64 = 1e6 * BQ;
pub const CI:  f64 = 3.7e10 * BQ;

// ── Angle ─────────────────────────────────────────────────────────────────────

pub const RAD:  f64 = 1.0;
pub const MRAD: f64 = 1e-3 * RAD;
pub const DEG:  f64 = PI / 180.0 * RAD;

const SYMBOLS: &[(&str, f64)] = &[
    ("nm", NM),
    ("um", UM),
    ("mm", MM),
    ("cm", CM),
    ("m", M),
    ("km", KM),
    ("ns", NS),
    ("us", US),
    ("ms", MS),
    ("s", SECOND),
    ("second", SECOND),
    ("min", MINUTE),
    ("h", HOUR),
    ("eV", EV),
    ("keV", KEV),
    ("MeV", MEV),
    ("GeV", GEV),
    ("TeV", TEV),
    ("Bq", BQ),
    ("kBq", KBQ),
    ("MBq", MBQ),
    ("Ci", CI),
    ("rad", RAD),
    ("mrad", MRAD),
    ("deg", DEG),
];

static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::build);

// ── UnitRegistry ──────────────────────────────────────────────────────────────

/// Process-wide mapping from unit symbol to canonical scale factor.
#[derive(Debug)]
pub struct UnitRegistry {
    table: HashMap<&'static str, f64>,
}

impl UnitRegistry {
    /// The shared registry, initialized on first use.
    pub fn global() -> &'static UnitRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        Self { table: SYMBOLS.iter().copied().collect() }
    }

    /// Scale factor of `symbol` relative to the canonical unit of its
    /// dimension.  Symbols are case-sensitive (`MeV` vs `meV`).
    pub fn resolve(&self, symbol: &str) -> ConfigResult<f64> {
        self.table
            .get(symbol)
            .copied()
            .ok_or_else(|| ConfigError::UnknownUnit(symbol.to_owned()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.table.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All registered symbols, sorted.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut out: Vec<_> = self.table.keys().copied().collect();
        out.sort_unstable();
        out
    }
}

/// Resolve `symbol` against the global registry.
pub fn resolve(symbol: &str) -> ConfigResult<f64> {
    UnitRegistry::global().resolve(symbol)
}

/// Parse a quantity such as `"2 s"`, `"80 keV"`, or a bare `"0"`.
///
/// A bare number is taken to be in canonical units already.
pub fn parse_quantity(text: &str) -> ConfigResult<f64> {
    let malformed = || ConfigError::MalformedQuantity(text.to_owned());

    let mut parts = text.split_whitespace();
    let value: f64 = parts
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;

    match (parts.next(), parts.next()) {
        (None, _) => Ok(value),
        (Some(symbol), None) => Ok(value * resolve(symbol)?),
        (Some(_), Some(_)) => Err(malformed()),
    }
}
