//! Quantity-expanded card pool.
//!
//! The pool is an ordered zone: index 0 is the bottom, the last index is the
//! top. Draws come off the top. Every copy of a card is the same shared
//! reference, tagged with the section it came from.

use serde::{Deserialize, Serialize};

use crate::cards::CardRef;
use crate::core::{DeckRng, PoolSources};
use crate::deck::{Deck, SectionId};

/// Position for inserting an entry into the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolPosition {
    /// Drawn next.
    Top,
    /// Drawn last.
    Bottom,
    /// Insert at specific index (0 = bottom). Clamped to the pool size.
    Index(usize),
}

/// One physical copy in the pool or hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    /// Section the copy belongs to.
    pub section: SectionId,
    /// Shared card reference.
    pub card: CardRef,
}

/// Flat multiset of card copies.
#[derive(Clone, Debug, Default)]
pub struct DrawPool {
    entries: Vec<PoolEntry>,
}

impl DrawPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the selected sections by quantity, in deck order (unshuffled).
    ///
    /// Main is always included; side and extra follow `sources`.
    #[must_use]
    pub fn build(deck: &Deck, sources: PoolSources) -> Self {
        let mut entries = Vec::new();
        for (id, section) in deck.sections() {
            let included = match id {
                SectionId::Main => true,
                SectionId::Extra => sources.include_extra,
                SectionId::Side => sources.include_side,
            };
            if !included {
                continue;
            }
            for card in section.iter() {
                for _ in 0..card.quantity {
                    entries.push(PoolEntry {
                        section: id,
                        card: CardRef::clone(card),
                    });
                }
            }
        }
        Self { entries }
    }

    /// Shuffle the whole pool.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.entries);
    }

    /// Add an entry at a position.
    pub fn insert(&mut self, entry: PoolEntry, position: PoolPosition) {
        match position {
            PoolPosition::Top => self.entries.push(entry),
            PoolPosition::Bottom => self.entries.insert(0, entry),
            PoolPosition::Index(i) => {
                let idx = i.min(self.entries.len());
                self.entries.insert(idx, entry);
            }
        }
    }

    /// Remove and return the top entry.
    pub fn pop_top(&mut self) -> Option<PoolEntry> {
        self.entries.pop()
    }

    /// The entry that would be drawn next.
    #[must_use]
    pub fn top(&self) -> Option<&PoolEntry> {
        self.entries.last()
    }

    /// Entries from bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Number of copies left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no copies are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use std::sync::Arc;

    fn deck() -> Deck {
        let mut deck = Deck::new("Test", "Tester");
        deck.push(SectionId::Main, Card::new("A", 3));
        deck.push(SectionId::Main, Card::new("B", 1));
        deck.push(SectionId::Extra, Card::new("E", 2));
        deck.push(SectionId::Side, Card::new("S", 1));
        deck
    }

    #[test]
    fn test_build_main_only() {
        let pool = DrawPool::build(&deck(), PoolSources::default());
        assert_eq!(pool.len(), 4);
        assert!(pool.entries().iter().all(|e| e.section == SectionId::Main));
    }

    #[test]
    fn test_build_with_sources() {
        let deck = deck();
        let side = PoolSources {
            include_side: true,
            include_extra: false,
        };
        assert_eq!(DrawPool::build(&deck, side).len(), 5);

        let all = PoolSources {
            include_side: true,
            include_extra: true,
        };
        assert_eq!(DrawPool::build(&deck, all).len(), 7);
    }

    #[test]
    fn test_copies_share_reference() {
        let pool = DrawPool::build(&deck(), PoolSources::default());
        let a: Vec<_> = pool.entries().iter().filter(|e| e.card.name == "A").collect();
        assert_eq!(a.len(), 3);
        assert!(Arc::ptr_eq(&a[0].card, &a[2].card));
    }

    #[test]
    fn test_pop_top_and_insert() {
        let mut pool = DrawPool::build(&deck(), PoolSources::default());
        // Unshuffled: [A, A, A, B], top is B.
        assert_eq!(pool.top().unwrap().card.name, "B");

        let b = pool.pop_top().unwrap();
        assert_eq!(b.card.name, "B");
        assert_eq!(pool.len(), 3);

        pool.insert(b.clone(), PoolPosition::Bottom);
        assert_eq!(pool.entries()[0].card.name, "B");

        pool.insert(b.clone(), PoolPosition::Index(99));
        assert_eq!(pool.top().unwrap().card.name, "B");
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_shuffle_keeps_multiset() {
        let mut deck = Deck::new("Big", "Tester");
        for i in 0..10 {
            deck.push(SectionId::Main, Card::new(format!("C{i}"), 2));
        }
        let mut pool = DrawPool::build(&deck, PoolSources::default());
        let before: Vec<String> = pool.entries().iter().map(|e| e.card.name.clone()).collect();

        pool.shuffle(&mut DeckRng::new(42));

        let mut after: Vec<String> = pool.entries().iter().map(|e| e.card.name.clone()).collect();
        assert_ne!(before, after);
        after.sort();
        let mut sorted_before = before.clone();
        sorted_before.sort();
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = DrawPool::new();
        assert!(pool.is_empty());
        assert!(pool.pop_top().is_none());
        assert!(pool.top().is_none());
    }
}
