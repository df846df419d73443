//! Viewer configuration.
//!
//! `ViewerConfig` carries the knobs a UI controller would otherwise hold as
//! loose state: default hand size, which sections feed the draw pool, the
//! shuffle seed, and life tracker defaults. It can be built in code with
//! builder methods or read from TOML:
//!
//! ```toml
//! hand_size = 6
//! include_side = true
//! seed = 42
//!
//! [life]
//! players = 2
//! starting_life = 8000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Which sections contribute to the draw pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSources {
    /// Add side deck copies to the pool.
    pub include_side: bool,
    /// Add extra deck copies to the pool.
    pub include_extra: bool,
}

/// Life tracker defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Number of tracked players (1-255).
    pub players: usize,
    /// Life total each player starts with.
    pub starting_life: i64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            players: 2,
            starting_life: 8000,
        }
    }
}

/// Complete viewer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Cards dealt by "draw hand".
    pub hand_size: usize,

    /// Include side deck copies in the pool.
    pub include_side: bool,

    /// Include extra deck copies in the pool.
    pub include_extra: bool,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Life tracker defaults.
    pub life: LifeConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            include_side: false,
            include_extra: false,
            seed: None,
            life: LifeConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(source)?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the default hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Include side deck copies in the pool.
    #[must_use]
    pub fn with_side(mut self) -> Self {
        self.include_side = true;
        self
    }

    /// Include extra deck copies in the pool.
    #[must_use]
    pub fn with_extra(mut self) -> Self {
        self.include_extra = true;
        self
    }

    /// Set life tracker defaults.
    #[must_use]
    pub fn with_life(mut self, players: usize, starting_life: i64) -> Self {
        self.life = LifeConfig {
            players,
            starting_life,
        };
        self
    }

    /// Pool sources described by this configuration.
    #[must_use]
    pub fn pool_sources(&self) -> PoolSources {
        PoolSources {
            include_side: self.include_side,
            include_extra: self.include_extra,
        }
    }
}
