//! Hand simulation state.
//!
//! `DrawState` owns one shuffled pool, the hand dealt from it, and the
//! ledger that mirrors the hand for display projection. It is bound to the
//! deck it was built from via [`DeckId`]; the session throws it away when
//! the active deck changes.

use super::ledger::DrawnLedger;
use super::pool::{DrawPool, PoolEntry, PoolPosition};
use crate::cards::CardRef;
use crate::core::{DeckRng, PoolSources};
use crate::deck::{Deck, DeckId};

/// Where returned cards go. Returned copies become drawable again but are
/// not guaranteed to restore their shuffle position.
const RETURN_POSITION: PoolPosition = PoolPosition::Bottom;

/// Pool, hand and ledger for one deck.
#[derive(Clone, Debug)]
pub struct DrawState {
    deck_id: DeckId,
    sources: PoolSources,
    pool: DrawPool,
    hand: Vec<PoolEntry>,
    ledger: DrawnLedger,
}

impl DrawState {
    /// Build and shuffle a fresh pool.
    ///
    /// Each construction shuffles with a forked RNG stream, so rebuilding
    /// never replays an earlier order.
    #[must_use]
    pub fn new(deck: &Deck, deck_id: DeckId, sources: PoolSources, rng: &mut DeckRng) -> Self {
        let mut pool = DrawPool::build(deck, sources);
        pool.shuffle(&mut rng.fork());
        log::debug!("Built pool of {} copies for {}", pool.len(), deck_id);
        Self {
            deck_id,
            sources,
            pool,
            hand: Vec::new(),
            ledger: DrawnLedger::new(),
        }
    }

    /// Deck this state was built from.
    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    /// Sections feeding the pool.
    #[must_use]
    pub fn sources(&self) -> PoolSources {
        self.sources
    }

    /// Draw up to `count` cards from the top of the pool.
    ///
    /// Requests larger than the pool draw what remains. Returns the number
    /// actually drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            let Some(entry) = self.pool.pop_top() else {
                break;
            };
            self.ledger.record_draw(entry.section, &entry.card);
            self.hand.push(entry);
            drawn += 1;
        }
        drawn
    }

    /// Return one hand card to the pool.
    ///
    /// Returns the card, or `None` if `hand_index` is out of range.
    pub fn return_to_pool(&mut self, hand_index: usize) -> Option<CardRef> {
        if hand_index >= self.hand.len() {
            return None;
        }
        let entry = self.hand.remove(hand_index);
        self.ledger.record_return(entry.section, &entry.card);
        let card = CardRef::clone(&entry.card);
        self.pool.insert(entry, RETURN_POSITION);
        Some(card)
    }

    /// Discard hand and pool, clear the ledger, and rebuild from `deck`.
    pub fn reshuffle(&mut self, deck: &Deck, rng: &mut DeckRng) {
        *self = Self::new(deck, self.deck_id, self.sources, rng);
    }

    /// Empty the hand and zero the ledger. The undrawn pool stays as is;
    /// cleared hand cards do not go back into it.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.ledger.clear();
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[PoolEntry] {
        &self.hand
    }

    #[must_use]
    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    #[must_use]
    pub fn ledger(&self) -> &DrawnLedger {
        &self.ledger
    }
}
