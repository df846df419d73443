//! Remaining-quantity projection.
//!
//! A read-time transform: stored quantity minus drawn count, with cards at
//! zero left out. Works on canonical or filtered sections alike.

use serde::Serialize;

use super::ledger::DrawnLedger;
use crate::cards::CardRef;
use crate::deck::{Deck, Section, SectionId};

/// A card with its projected quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedCard {
    pub card: CardRef,
    pub remaining: u32,
}

/// Compact summary row, used for serialized views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectedRow {
    pub id: Option<String>,
    pub name: String,
    pub remaining: u32,
    pub quantity: u32,
}

impl From<&ProjectedCard> for ProjectedRow {
    fn from(projected: &ProjectedCard) -> Self {
        Self {
            id: projected.card.id.clone(),
            name: projected.card.name.clone(),
            remaining: projected.remaining,
            quantity: projected.card.quantity,
        }
    }
}

/// Project one section.
#[must_use]
pub fn project_section(id: SectionId, section: &Section, ledger: &DrawnLedger) -> Vec<ProjectedCard> {
    section
        .iter()
        .filter_map(|card| {
            let remaining = ledger.remaining(id, card);
            (remaining > 0).then(|| ProjectedCard {
                card: CardRef::clone(card),
                remaining,
            })
        })
        .collect()
}

/// Project every section of a deck, in display order.
#[must_use]
pub fn project_deck(deck: &Deck, ledger: &DrawnLedger) -> Vec<(SectionId, Vec<ProjectedCard>)> {
    deck.sections()
        .map(|(id, section)| (id, project_section(id, section, ledger)))
        .collect()
}
