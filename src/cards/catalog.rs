//! Card catalog for identity lookup.
//!
//! Interchange files only list identities, so importing one needs a catalog
//! mapping each identity back to a full card. A catalog is usually built from
//! a known deck (or a larger card pool document) with [`CardCatalog::from_deck`].

use rustc_hash::FxHashMap;

use super::card::{Card, CardKey, CardRef};
use crate::deck::Deck;

/// Lookup table from card identity to card.
///
/// ## Example
///
/// ```
/// use deck_viewer::cards::{Card, CardCatalog, CardKey};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new("Pot of Greed", 1).with_id("55144522").shared());
///
/// let found = catalog.resolve("55144522").unwrap();
/// assert_eq!(found.name, "Pot of Greed");
/// assert!(catalog.get(&CardKey::Name("Pot of Greed".into())).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardKey, CardRef>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from every card of every section of a deck.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        let mut catalog = Self::new();
        for (_, section) in deck.sections() {
            for card in section.iter() {
                catalog.register(card.clone());
            }
        }
        catalog
    }

    /// Register a card under its identity.
    ///
    /// The first registration of an identity wins; returns `false` when the
    /// identity was already known.
    pub fn register(&mut self, card: CardRef) -> bool {
        let key = card.key();
        if self.cards.contains_key(&key) {
            return false;
        }
        self.cards.insert(key, card);
        true
    }

    /// Get a card by identity.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&CardRef> {
        self.cards.get(key)
    }

    /// Resolve an identity written as text: ids first, then names.
    #[must_use]
    pub fn resolve(&self, identity: &str) -> Option<&CardRef> {
        let identity = identity.trim();
        self.cards
            .get(&CardKey::Id(identity.to_string()))
            .or_else(|| self.cards.get(&CardKey::Name(identity.to_string())))
    }

    /// Check if an identity is registered.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRef>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
