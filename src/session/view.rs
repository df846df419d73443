//! Render model.
//!
//! `DeckView` is what a renderer draws: the header, every non-empty section
//! after filtering and ledger projection, the current hand and the pool size.
//! It is rebuilt from scratch on each request.

use serde::Serialize;

use crate::core::PoolSources;
use crate::deck::{Deck, DeckId, SectionId};
use crate::draw::{project_section, DrawState, DrawnLedger, PoolEntry, ProjectedCard, ProjectedRow};
use crate::filter::{filter_deck, FilterCriteria};

/// One visible section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub section: SectionId,
    pub cards: Vec<ProjectedCard>,
}

impl SectionView {
    /// Sum of projected quantities.
    #[must_use]
    pub fn remaining_copies(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.remaining)).sum()
    }
}

/// Snapshot handed to the renderer.
#[derive(Clone, Debug)]
pub struct DeckView {
    pub deck_id: DeckId,
    pub name: String,
    pub author: String,
    pub style: Option<String>,
    /// Non-empty sections in display order.
    pub sections: Vec<SectionView>,
    /// Hand in draw order.
    pub hand: Vec<PoolEntry>,
    /// Undrawn copies, `None` before the first draw.
    pub pool_size: Option<usize>,
    /// Whether any filter predicate is active.
    pub filtered: bool,
}

impl DeckView {
    /// Filter, project and assemble a view.
    #[must_use]
    pub fn build(
        deck: &Deck,
        deck_id: DeckId,
        criteria: &FilterCriteria,
        draw: Option<&DrawState>,
    ) -> Self {
        let empty = DrawnLedger::new();
        let ledger = draw.map_or(&empty, DrawState::ledger);
        let visible = filter_deck(deck, criteria);

        let sections = visible
            .sections()
            .map(|(id, section)| SectionView {
                section: id,
                cards: project_section(id, section, ledger),
            })
            .filter(|view| !view.cards.is_empty())
            .collect();

        Self {
            deck_id,
            name: deck.name.clone(),
            author: deck.author.clone(),
            style: deck.style.clone(),
            sections,
            hand: draw.map(|d| d.hand().to_vec()).unwrap_or_default(),
            pool_size: draw.map(|d| d.pool().len()),
            filtered: !criteria.is_pass_through(),
        }
    }

    /// A visible section, if it has any cards.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.section == id)
    }

    /// Serializable summary.
    #[must_use]
    pub fn summary(&self, sources: PoolSources) -> ViewSummary {
        ViewSummary {
            name: self.name.clone(),
            author: self.author.clone(),
            sections: self
                .sections
                .iter()
                .map(|s| SectionSummary {
                    section: s.section,
                    copies: s.remaining_copies(),
                    cards: s.cards.iter().map(ProjectedRow::from).collect(),
                })
                .collect(),
            hand: self.hand.iter().map(|e| e.card.name.clone()).collect(),
            pool_size: self.pool_size,
            sources,
        }
    }
}

/// JSON-friendly view.
#[derive(Clone, Debug, Serialize)]
pub struct ViewSummary {
    pub name: String,
    pub author: String,
    pub sections: Vec<SectionSummary>,
    pub hand: Vec<String>,
    pub pool_size: Option<usize>,
    pub sources: PoolSources,
}

#[derive(Clone, Debug, Serialize)]
pub struct SectionSummary {
    pub section: SectionId,
    pub copies: u64,
    pub cards: Vec<ProjectedRow>,
}
