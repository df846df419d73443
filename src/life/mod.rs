//! Life-point tracking for the players at the table.

pub mod tracker;

pub use tracker::{LifeChange, LifeTracker, PlayerId};
