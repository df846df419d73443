//! Core building blocks: errors, configuration, RNG.
//!
//! Nothing here knows about cards. Higher layers (`cards`, `deck`, `draw`)
//! depend on this module, never the other way around.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{LifeConfig, PoolSources, ViewerConfig};
pub use error::{DeckError, Result};
pub use rng::DeckRng;
