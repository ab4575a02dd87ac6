//! Run settings, read from a TOML parameter document.
//!
//! ```toml
//! basename = "bilayer"
//!
//! [bonding]
//! cutoff = 2.1
//!
//! [species]
//! drop = ["O"]
//!
//! [pbc]
//! enabled = true
//! lattice_x = 34.6
//! lattice_y = 40.0
//!
//! [rings]
//! max_size = 12
//!
//! [edits]
//! remove = [[971, 152]]
//! ```

use crate::network::Lattice;
use crate::{Error, Result, COMPOSITE_MIN_SIZE, COMPOSITE_THRESHOLD, MAX_RING_SIZE};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix for every output table.
    pub basename: String,
    pub bonding: Bonding,
    pub species: SpeciesFilter,
    pub pbc: Pbc,
    pub rings: RingSettings,
    pub edits: Edits,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            basename: "bilayer".to_owned(),
            bonding: Bonding::default(),
            species: SpeciesFilter::default(),
            pbc: Pbc::default(),
            rings: RingSettings::default(),
            edits: Edits::default(),
        }
    }
}
impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }
    /// Periodic cell, or [`Lattice::OPEN`] when PBC is disabled.
    pub fn lattice(&self) -> Lattice {
        if self.pbc.enabled {
            Lattice::new(self.pbc.lattice_x, self.pbc.lattice_y)
        } else {
            Lattice::OPEN
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bonding {
    /// Bond every pair closer than this; `None` or a non-positive value disables distance bonding.
    pub cutoff: Option<f64>,
}
impl Bonding {
    pub fn cutoff(&self) -> Option<f64> {
        self.cutoff.filter(|&c| c > 0.0)
    }
}

/// Which atom records become vertices.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeciesFilter {
    /// Species to skip.
    pub drop: Vec<String>,
    /// If non-empty, only these species are kept.
    pub keep: Vec<String>,
}
impl SpeciesFilter {
    pub fn accepts(&self, species: &str) -> bool {
        if self.drop.iter().any(|s| s == species) {
            return false;
        }
        self.keep.is_empty() || self.keep.iter().any(|s| s == species)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pbc {
    pub enabled: bool,
    pub lattice_x: f64,
    pub lattice_y: f64,
}

/// Ring search and composite filter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingSettings {
    /// Number of size buckets; rings have at most `max_size - 1` members.
    pub max_size: usize,
    pub composite_min_size: usize,
    pub composite_threshold: usize,
}
impl Default for RingSettings {
    fn default() -> Self {
        Self {
            max_size: MAX_RING_SIZE,
            composite_min_size: COMPOSITE_MIN_SIZE,
            composite_threshold: COMPOSITE_THRESHOLD,
        }
    }
}

/// Manual bond corrections applied before detection.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Edits {
    pub add: Vec<[usize; 2]>,
    pub remove: Vec<[usize; 2]>,
}
