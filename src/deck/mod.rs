//! Decks: sections, JSON documents, and loading.
//!
//! ## Key Types
//!
//! - `SectionId`: Main, extra or side
//! - `Section`: Ordered cards of one section (persistent vector)
//! - `Deck`: Header plus three independent sections
//! - `DeckDocument`: Raw JSON form, normalized on ingest
//! - `LoadTracker` / `LoadTicket`: Stale-load detection

#[allow(clippy::module_inception)]
pub mod deck;
pub mod document;
pub mod loader;

pub use deck::{Deck, DeckId, Section, SectionId};
pub use document::{card_record, DeckDocument, SectionsDocument};
pub use loader::{load_path, load_reader, load_str, LoadTicket, LoadTracker};
