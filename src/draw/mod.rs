//! Draw/shuffle engine.
//!
//! ## Key Types
//!
//! - `DrawPool`: Quantity-expanded pool (bottom at index 0, top at the end)
//! - `DrawState`: Pool + hand + ledger for one deck
//! - `DrawnLedger`: Drawn copies per (section, identity)
//! - `ProjectedCard`: Card with its remaining (undrawn) quantity
//!
//! ## Lifecycle
//!
//! - Build: expand main (plus side/extra if enabled), shuffle
//! - Draw: pop from the top, count in the ledger; oversized draws clamp
//! - Return: hand card goes to the pool bottom, ledger count drops by one
//! - Reshuffle: rebuild everything from the deck
//! - Clear: empty hand and ledger, keep the remaining pool

pub mod engine;
pub mod ledger;
pub mod pool;
pub mod projection;

pub use engine::DrawState;
pub use ledger::{DrawnLedger, LedgerKey};
pub use pool::{DrawPool, PoolEntry, PoolPosition};
pub use projection::{project_deck, project_section, ProjectedCard, ProjectedRow};
