//! Deck session: the context object a UI controller owns.
//!
//! A session holds the active deck, the filter criteria, the draw state and
//! the life tracker. Every operation goes through it, so there is no hidden
//! module-level state and two sessions never interfere.
//!
//! ## Deck changes
//!
//! Installing a new deck (load or import) gives it a fresh [`DeckId`] and
//! drops the draw state, so pool, hand and ledger always belong to the
//! active deck. Failed loads and imports leave the session untouched.
//!
//! ## Usage
//!
//! ```
//! use deck_viewer::{DeckSession, ViewerConfig};
//!
//! let mut session = DeckSession::new(ViewerConfig::new().with_seed(1));
//! session.load_str(r#"{"name": "D", "sections": {"main": [
//!     {"name": "A", "qty": 3, "type": ["Monster"]},
//!     {"name": "B", "qty": 1, "type": ["Spell"]}
//! ]}}"#).unwrap();
//!
//! assert_eq!(session.draw(5).unwrap(), 4);
//! assert!(session.view().unwrap().sections.is_empty());
//! ```

pub mod view;

use std::path::Path;
use std::sync::Arc;

use crate::cards::{CardCatalog, CardRef};
use crate::core::{DeckError, DeckRng, PoolSources, Result, ViewerConfig};
use crate::deck::{self, Deck, DeckId, LoadTicket, LoadTracker};
use crate::draw::DrawState;
use crate::export::{self, ImportReport};
use crate::filter::{filter_deck, FilterCriteria};
use crate::life::LifeTracker;

pub use view::{DeckView, SectionSummary, SectionView, ViewSummary};

/// What happened to a completed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The deck is now active.
    Applied(DeckId),
    /// A newer load was started meanwhile; the result was discarded.
    Stale,
}

/// Session state for one deck view.
#[derive(Debug)]
pub struct DeckSession {
    config: ViewerConfig,
    rng: DeckRng,
    loads: LoadTracker,
    deck: Option<Arc<Deck>>,
    deck_id: DeckId,
    criteria: FilterCriteria,
    sources: PoolSources,
    draw: Option<DrawState>,
    life: LifeTracker,
}

impl DeckSession {
    /// Create a session with no deck.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let rng = config.seed.map_or_else(DeckRng::from_entropy, DeckRng::new);
        Self {
            rng,
            loads: LoadTracker::new(),
            deck: None,
            deck_id: DeckId::default(),
            criteria: FilterCriteria::default(),
            sources: config.pool_sources(),
            draw: None,
            life: LifeTracker::from_config(&config.life),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    // === Loading ===

    /// Start a load. Results of older tickets will be discarded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.issue()
    }

    /// Finish a load started with [`begin_load`](Self::begin_load).
    ///
    /// Stale tickets are discarded whatever their result. A failed current
    /// load returns the error and keeps the previous deck.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Deck>) -> Result<LoadOutcome> {
        if !self.loads.is_current(ticket) {
            log::debug!("Discarding stale load {:?}", ticket);
            return Ok(LoadOutcome::Stale);
        }
        match result {
            Ok(deck) => Ok(LoadOutcome::Applied(self.install(deck))),
            Err(e) => {
                log::warn!("Deck load failed, keeping current deck: {e}");
                Err(e)
            }
        }
    }

    /// Parse and install a deck in one step.
    pub fn load_str(&mut self, source: &str) -> Result<DeckId> {
        let ticket = self.begin_load();
        let result = deck::load_str(source);
        self.expect_applied(ticket, result)
    }

    /// Read, parse and install a deck file.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<DeckId> {
        let ticket = self.begin_load();
        let result = deck::load_path(path);
        self.expect_applied(ticket, result)
    }

    fn expect_applied(&mut self, ticket: LoadTicket, result: Result<Deck>) -> Result<DeckId> {
        match self.complete_load(ticket, result)? {
            LoadOutcome::Applied(id) => Ok(id),
            // The ticket was issued immediately before, nothing can supersede it.
            LoadOutcome::Stale => Err(DeckError::NoActiveDeck),
        }
    }

    fn install(&mut self, deck: Deck) -> DeckId {
        self.deck_id = DeckId(self.deck_id.0 + 1);
        log::info!(
            "Active deck {:?} by {:?} ({} copies) as {}",
            deck.name,
            deck.author,
            deck.total_copies(),
            self.deck_id
        );
        self.deck = Some(Arc::new(deck));
        self.draw = None;
        self.deck_id
    }

    /// The active deck.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_deref()
    }

    /// Id of the active deck.
    #[must_use]
    pub fn deck_id(&self) -> Option<DeckId> {
        self.deck.as_ref().map(|_| self.deck_id)
    }

    fn active(&self) -> Result<&Arc<Deck>> {
        self.deck.as_ref().ok_or(DeckError::NoActiveDeck)
    }

    // === Filtering ===

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the filter criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Filtered snapshot of the active deck (no projection).
    pub fn filtered(&self) -> Result<Deck> {
        Ok(filter_deck(self.active()?, &self.criteria))
    }

    /// Render model: filtered, projected, with hand.
    pub fn view(&self) -> Result<DeckView> {
        let deck = self.active()?;
        Ok(DeckView::build(deck, self.deck_id, &self.criteria, self.draw_state()))
    }

    // === Drawing ===

    /// Current draw state, if a pool was built for the active deck.
    #[must_use]
    pub fn draw_state(&self) -> Option<&DrawState> {
        self.draw.as_ref().filter(|d| d.deck_id() == self.deck_id)
    }

    /// Pool sources in effect.
    #[must_use]
    pub fn sources(&self) -> PoolSources {
        self.sources
    }

    fn draw_state_mut(&mut self) -> Result<&mut DrawState> {
        let deck = Arc::clone(self.active()?);
        let deck_id = self.deck_id;
        if self.draw.as_ref().is_some_and(|d| d.deck_id() != deck_id) {
            self.draw = None;
        }
        let sources = self.sources;
        let rng = &mut self.rng;
        Ok(self
            .draw
            .get_or_insert_with(|| DrawState::new(&deck, deck_id, sources, rng)))
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw(&mut self, count: usize) -> Result<usize> {
        Ok(self.draw_state_mut()?.draw(count))
    }

    /// Draw the configured hand size.
    pub fn draw_hand(&mut self) -> Result<usize> {
        let hand_size = self.config.hand_size;
        self.draw(hand_size)
    }

    /// Return a hand card to the pool.
    pub fn return_to_pool(&mut self, hand_index: usize) -> Option<CardRef> {
        self.draw.as_mut()?.return_to_pool(hand_index)
    }

    /// Fresh pool, empty hand, empty ledger.
    pub fn reshuffle(&mut self) -> Result<()> {
        let deck = Arc::clone(self.active()?);
        match self.draw.as_mut() {
            Some(draw) if draw.deck_id() == self.deck_id && draw.sources() == self.sources => {
                draw.reshuffle(&deck, &mut self.rng);
            }
            _ => {
                self.draw = Some(DrawState::new(&deck, self.deck_id, self.sources, &mut self.rng));
            }
        }
        Ok(())
    }

    /// Empty hand and ledger; the pool keeps its remaining cards.
    pub fn clear_hand(&mut self) {
        if let Some(draw) = self.draw.as_mut() {
            draw.clear();
        }
    }

    /// Toggle side deck copies in the pool. Rebuilds an existing pool.
    pub fn set_include_side(&mut self, include: bool) -> Result<()> {
        let sources = PoolSources {
            include_side: include,
            ..self.sources
        };
        self.set_sources(sources)
    }

    /// Toggle extra deck copies in the pool. Rebuilds an existing pool.
    pub fn set_include_extra(&mut self, include: bool) -> Result<()> {
        let sources = PoolSources {
            include_extra: include,
            ..self.sources
        };
        self.set_sources(sources)
    }

    fn set_sources(&mut self, sources: PoolSources) -> Result<()> {
        if sources == self.sources {
            return Ok(());
        }
        self.sources = sources;
        if self.draw.is_some() {
            self.reshuffle()?;
        }
        Ok(())
    }

    // === Export / import ===

    /// Plain-text list of the active deck.
    pub fn export_text(&self) -> Result<String> {
        Ok(export::export_text(self.active()?))
    }

    /// Interchange form of the active deck.
    pub fn export_ydk(&self) -> Result<String> {
        Ok(export::export_ydk(self.active()?))
    }

    /// Import an interchange file and make it the active deck.
    ///
    /// On error the active deck is unchanged.
    pub fn import_ydk(&mut self, source: &str, catalog: &CardCatalog) -> Result<ImportReport> {
        let report = export::import_ydk(source, catalog)?;
        self.loads.issue();
        self.install(report.deck.clone());
        Ok(report)
    }

    // === Life ===

    #[must_use]
    pub fn life(&self) -> &LifeTracker {
        &self.life
    }

    pub fn life_mut(&mut self) -> &mut LifeTracker {
        &mut self.life
    }
}
