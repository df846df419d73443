//! # deck-viewer
//!
//! Core of a trading card game deck viewer: card normalization, filtering,
//! hand simulation, deck interchange and a life counter.
//!
//! ## Design Principles
//!
//! 1. **Tolerant Input**: Deck files come from many tools. Card records are
//!    normalized field by field and never rejected.
//!
//! 2. **Explicit Context**: All mutable state lives in a [`DeckSession`].
//!    There are no globals; tests build as many sessions as they like.
//!
//! 3. **Shared Snapshots**: Cards are `Arc`-shared and sections are
//!    persistent `im` vectors, so filtered views cost little to produce.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG
//! - `cards`: Normalized card records, identities, catalog
//! - `deck`: Sections, deck documents, loading with stale-result guard
//! - `filter`: Filter criteria and predicate evaluation
//! - `draw`: Draw pool, hand, drawn-card ledger, display projection
//! - `export`: Text listing and `.ydk` interchange
//! - `life`: Life-point tracker
//! - `session`: The context object tying the above together

pub mod core;
pub mod cards;
pub mod deck;
pub mod filter;
pub mod draw;
pub mod export;
pub mod life;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DeckError, Result,
    DeckRng,
    LifeConfig, PoolSources, ViewerConfig,
};

pub use crate::cards::{Card, CardCatalog, CardKey, CardRef, Kinds, LevelClass, normalize_card};

pub use crate::deck::{Deck, DeckDocument, DeckId, LoadTicket, LoadTracker, Section, SectionId};

pub use crate::filter::{CardPredicate, FilterCriteria, filter_deck, matches};

pub use crate::draw::{DrawPool, DrawState, DrawnLedger, PoolEntry, PoolPosition, ProjectedCard, ProjectedRow};

pub use crate::export::{ImportReport, UnknownCard, export_text, export_ydk, import_ydk};

pub use crate::life::{LifeChange, LifeTracker, PlayerId};

pub use crate::session::{DeckSession, DeckView, LoadOutcome, SectionView, ViewSummary};
