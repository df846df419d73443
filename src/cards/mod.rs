//! Card system: canonical records, normalization, and catalog.
//!
//! ## Key Types
//!
//! - `Card`: Canonical card record (name, quantity, type tags, stats, tags)
//! - `CardKey`: Card identity (explicit id, else name)
//! - `CardRef`: Shared reference to a card, used by sections and pools
//! - `CardCatalog`: Identity lookup for import

pub mod card;
pub mod catalog;
pub mod normalize;

pub use card::{Card, CardKey, CardRef, Kinds, LevelClass, TypeTags};
pub use catalog::CardCatalog;
pub use normalize::{normalize_card, MAX_QUANTITY};
