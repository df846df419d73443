//! Filter engine.
//!
//! Evaluation order per card: kind toggles, level range, tag, free text.
//! A card is kept only if every active predicate passes.
//!
//! ```
//! use deck_viewer::cards::Card;
//! use deck_viewer::deck::{Deck, SectionId};
//! use deck_viewer::filter::{filter_deck, FilterCriteria};
//!
//! let mut deck = Deck::new("Test", "Tester");
//! deck.push(SectionId::Main, Card::new("A", 3).with_types(["Monster"]));
//! deck.push(SectionId::Main, Card::new("B", 1).with_types(["Spell"]));
//!
//! let filtered = filter_deck(&deck, &FilterCriteria::new().with_spells(false));
//! assert_eq!(filtered.section(SectionId::Main).total_copies(), 3);
//! ```

pub mod criteria;
pub mod engine;

pub use criteria::{CardPredicate, FilterCriteria};
pub use engine::{filter_deck, filter_section, matches};
