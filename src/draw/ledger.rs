//! Drawn-count ledger.
//!
//! Counts copies currently considered "drawn" per (section, identity). The
//! deck itself is never modified; views subtract these counts at read time.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardKey};
use crate::deck::SectionId;

/// Ledger key. Sections stay independent: drawing a side copy never lowers
/// the main deck count of the same card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LedgerKey {
    pub section: SectionId,
    pub card: CardKey,
}

impl LedgerKey {
    fn of(section: SectionId, card: &Card) -> Self {
        Self {
            section,
            card: card.key(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawnLedger {
    counts: FxHashMap<LedgerKey, u32>,
}

impl DrawnLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one drawn copy.
    pub fn record_draw(&mut self, section: SectionId, card: &Card) {
        *self.counts.entry(LedgerKey::of(section, card)).or_insert(0) += 1;
    }

    /// Uncount one copy, floored at zero.
    pub fn record_return(&mut self, section: SectionId, card: &Card) {
        let key = LedgerKey::of(section, card);
        if let Some(count) = self.counts.get_mut(&key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
    }

    /// Copies of `card` drawn from `section`.
    #[must_use]
    pub fn drawn(&self, section: SectionId, card: &Card) -> u32 {
        self.counts
            .get(&LedgerKey::of(section, card))
            .copied()
            .unwrap_or(0)
    }

    /// Stored quantity minus drawn count, floored at zero.
    #[must_use]
    pub fn remaining(&self, section: SectionId, card: &Card) -> u32 {
        card.quantity.saturating_sub(self.drawn(section, card))
    }

    /// Total drawn copies across all keys.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_return() {
        let card = Card::new("A", 3).with_id("1");
        let mut ledger = DrawnLedger::new();

        ledger.record_draw(SectionId::Main, &card);
        ledger.record_draw(SectionId::Main, &card);
        assert_eq!(ledger.drawn(SectionId::Main, &card), 2);
        assert_eq!(ledger.remaining(SectionId::Main, &card), 1);

        ledger.record_return(SectionId::Main, &card);
        assert_eq!(ledger.remaining(SectionId::Main, &card), 2);
        assert_eq!(ledger.total(), 1);
    }

    #[test]
    fn test_return_floors_at_zero() {
        let card = Card::new("A", 1);
        let mut ledger = DrawnLedger::new();

        ledger.record_return(SectionId::Main, &card);
        assert_eq!(ledger.drawn(SectionId::Main, &card), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_sections_are_independent() {
        let card = Card::new("A", 2).with_id("1");
        let mut ledger = DrawnLedger::new();

        ledger.record_draw(SectionId::Side, &card);
        assert_eq!(ledger.remaining(SectionId::Main, &card), 2);
        assert_eq!(ledger.remaining(SectionId::Side, &card), 1);
    }

    #[test]
    fn test_remaining_never_underflows() {
        let card = Card::new("A", 1);
        let mut ledger = DrawnLedger::new();
        ledger.record_draw(SectionId::Main, &card);
        ledger.record_draw(SectionId::Main, &card);
        assert_eq!(ledger.remaining(SectionId::Main, &card), 0);

        ledger.clear();
        assert_eq!(ledger.total(), 0);
    }
}
