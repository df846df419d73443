//! Deck and section types.
//!
//! Sections are persistent vectors of shared card references, so cloning a
//! deck (or deriving a filtered snapshot) never copies card data.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRef};

/// One of the three named card groupings of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Main,
    Extra,
    Side,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 3] = [SectionId::Main, SectionId::Extra, SectionId::Side];

    /// Document key (`main`, `extra`, `side`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            SectionId::Main => "main",
            SectionId::Extra => "extra",
            SectionId::Side => "side",
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SectionId::Main => "Main Deck",
            SectionId::Extra => "Extra Deck",
            SectionId::Side => "Side Deck",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Ordered list of cards in one section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    cards: Vector<CardRef>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    pub fn push(&mut self, card: CardRef) {
        self.cards.push_back(card);
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardRef> {
        self.cards.get(index)
    }

    /// Iterate over cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of quantities (physical copies).
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.quantity)).sum()
    }

    /// Keep only cards matching a predicate, preserving order.
    #[must_use]
    pub fn filtered<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(|c| predicate(c)).cloned().collect()
    }
}

impl FromIterator<CardRef> for Section {
    fn from_iter<I: IntoIterator<Item = CardRef>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Generation number of an active deck within a session.
///
/// Each deck that becomes active gets a fresh id, so stale draw state can
/// be detected even when two loads produce equal decks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u64);

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// A deck: header plus three independent sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    pub author: String,

    /// Optional presentation hint carried through from the document.
    pub style: Option<String>,

    main: Section,
    extra: Section,
    side: Section,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Set the style hint.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Get a section.
    #[must_use]
    pub fn section(&self, id: SectionId) -> &Section {
        match id {
            SectionId::Main => &self.main,
            SectionId::Extra => &self.extra,
            SectionId::Side => &self.side,
        }
    }

    /// Get a mutable section.
    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        match id {
            SectionId::Main => &mut self.main,
            SectionId::Extra => &mut self.extra,
            SectionId::Side => &mut self.side,
        }
    }

    /// Replace a section.
    pub fn set_section(&mut self, id: SectionId, section: Section) {
        *self.section_mut(id) = section;
    }

    /// Append a card to a section.
    pub fn push(&mut self, id: SectionId, card: Card) {
        self.section_mut(id).push(card.shared());
    }

    /// Iterate over (SectionId, &Section) in display order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        SectionId::ALL.into_iter().map(move |id| (id, self.section(id)))
    }

    /// Sum of quantities over all sections.
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.sections().map(|(_, s)| s.total_copies()).sum()
    }

    /// Same header, each section replaced by `f(id, section)`.
    #[must_use]
    pub fn map_sections<F>(&self, mut f: F) -> Self
    where
        F: FnMut(SectionId, &Section) -> Section,
    {
        let mut out = Deck {
            name: self.name.clone(),
            author: self.author.clone(),
            style: self.style.clone(),
            ..Deck::default()
        };
        for id in SectionId::ALL {
            out.set_section(id, f(id, self.section(id)));
        }
        out
    }
}
