//! Predicate evaluation over deck snapshots.
//!
//! `filter_deck` is a pure function: the input deck is never touched and the
//! output keeps each section's original order. Cards are shared, not copied.

use super::criteria::{CardPredicate, FilterCriteria};
use crate::cards::Card;
use crate::deck::{Deck, Section};

impl CardPredicate {
    /// Evaluate this predicate against one card.
    #[must_use]
    pub fn evaluate(&self, card: &Card) -> bool {
        match self {
            CardPredicate::Kinds {
                monster,
                spell,
                trap,
            } => {
                let kinds = card.kinds();
                !((kinds.monster && !monster) || (kinds.spell && !spell) || (kinds.trap && !trap))
            }
            CardPredicate::LevelRange { min, max } => match card.level_value() {
                Some(value) => {
                    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
                }
                None => true,
            },
            CardPredicate::Tag(tag) => card.has_tag(tag),
            CardPredicate::Text(needle) => card.search_text().contains(needle.as_str()),
        }
    }
}

/// Check a card against every active predicate.
#[must_use]
pub fn matches(card: &Card, criteria: &FilterCriteria) -> bool {
    passes_all(card, &criteria.predicates())
}

fn passes_all(card: &Card, predicates: &[CardPredicate]) -> bool {
    predicates.iter().all(|p| p.evaluate(card))
}

/// Filter one section.
#[must_use]
pub fn filter_section(section: &Section, criteria: &FilterCriteria) -> Section {
    let predicates = criteria.predicates();
    if predicates.is_empty() {
        return section.clone();
    }
    section.filtered(|card| passes_all(card, &predicates))
}

/// Derive a snapshot containing only cards that satisfy the criteria.
#[must_use]
pub fn filter_deck(deck: &Deck, criteria: &FilterCriteria) -> Deck {
    let predicates = criteria.predicates();
    if predicates.is_empty() {
        return deck.clone();
    }
    deck.map_sections(|_, section| section.filtered(|card| passes_all(card, &predicates)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::LevelClass;
    use crate::deck::SectionId;

    fn deck() -> Deck {
        let mut deck = Deck::new("Test", "Tester");
        deck.push(
            SectionId::Main,
            Card::new("Goblin Zombie", 3)
                .with_id("1")
                .with_types(["Monster", "Zombie"])
                .with_level(LevelClass::Level(4))
                .with_attribute("DARK")
                .with_tag("searcher"),
        );
        deck.push(
            SectionId::Main,
            Card::new("Zombie World", 1)
                .with_id("2")
                .with_types(["Spell", "Field"])
                .with_description("All monsters become Zombie monsters."),
        );
        deck.push(
            SectionId::Main,
            Card::new("Call of the Haunted", 2)
                .with_id("3")
                .with_types(["Trap", "Continuous"]),
        );
        deck.push(
            SectionId::Extra,
            Card::new("Red-Eyes Zombie Dragon", 1)
                .with_id("4")
                .with_types(["Monster", "Xyz"])
                .with_level(LevelClass::Rank(6)),
        );
        deck.push(SectionId::Side, Card::new("Token", 1).with_types(["Token"]));
        deck
    }

    fn names(deck: &Deck, id: SectionId) -> Vec<String> {
        deck.section(id).iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_pass_through_is_identity() {
        let deck = deck();
        assert_eq!(filter_deck(&deck, &FilterCriteria::default()), deck);
    }

    #[test]
    fn test_kind_toggles() {
        let deck = deck();
        let criteria = FilterCriteria::new().with_spells(false).with_traps(false);
        let filtered = filter_deck(&deck, &criteria);

        assert_eq!(names(&filtered, SectionId::Main), vec!["Goblin Zombie"]);
        assert_eq!(names(&filtered, SectionId::Extra), vec!["Red-Eyes Zombie Dragon"]);
        // No recognized kind: never excluded by toggles.
        assert_eq!(names(&filtered, SectionId::Side), vec!["Token"]);
    }

    #[test]
    fn test_all_kinds_off_keeps_unknown_kinds() {
        let deck = deck();
        let criteria = FilterCriteria::new()
            .with_monsters(false)
            .with_spells(false)
            .with_traps(false);
        let filtered = filter_deck(&deck, &criteria);

        assert!(filtered.section(SectionId::Main).is_empty());
        assert_eq!(filtered.section(SectionId::Side).len(), 1);
    }

    #[test]
    fn test_level_range_uses_rank() {
        let deck = deck();
        let criteria = FilterCriteria::new().with_level_range(Some(5), Some(7));
        let filtered = filter_deck(&deck, &criteria);

        assert!(!names(&filtered, SectionId::Main).contains(&"Goblin Zombie".to_string()));
        assert_eq!(names(&filtered, SectionId::Extra), vec!["Red-Eyes Zombie Dragon"]);
        // Cards without a level value are not excluded by bounds.
        assert!(names(&filtered, SectionId::Main).contains(&"Zombie World".to_string()));
    }

    #[test]
    fn test_level_bounds_are_inclusive() {
        let card = Card::new("X", 1).with_level(LevelClass::Level(4));
        assert!(matches(&card, &FilterCriteria::new().with_level_range(Some(4), Some(4))));
        assert!(!matches(&card, &FilterCriteria::new().with_level_range(None, Some(3))));
        assert!(!matches(&card, &FilterCriteria::new().with_level_range(Some(5), None)));
    }

    #[test]
    fn test_tag_filter() {
        let deck = deck();
        let filtered = filter_deck(&deck, &FilterCriteria::new().with_tag("SEARCHER"));

        assert_eq!(names(&filtered, SectionId::Main), vec!["Goblin Zombie"]);
        assert!(filtered.section(SectionId::Extra).is_empty());
    }

    #[test]
    fn test_text_searches_all_fields() {
        let deck = deck();

        let by_type = filter_deck(&deck, &FilterCriteria::new().with_text("xyz"));
        assert_eq!(by_type.total_copies(), 1);

        let by_attribute = filter_deck(&deck, &FilterCriteria::new().with_text("dark"));
        assert_eq!(names(&by_attribute, SectionId::Main), vec!["Goblin Zombie"]);

        let by_desc = filter_deck(&deck, &FilterCriteria::new().with_text("become zombie"));
        assert_eq!(names(&by_desc, SectionId::Main), vec!["Zombie World"]);

        let by_name = filter_deck(&deck, &FilterCriteria::new().with_text("ZOMBIE"));
        assert_eq!(by_name.section(SectionId::Main).len(), 2);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let deck = deck();
        let before = deck.clone();
        let _ = filter_deck(&deck, &FilterCriteria::new().with_text("nothing matches this"));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_filter_section() {
        let deck = deck();
        let main = deck.section(SectionId::Main);
        let traps = filter_section(main, &FilterCriteria::new().with_monsters(false).with_spells(false));
        assert_eq!(traps.len(), 1);
        assert_eq!(traps.get(0).unwrap().name, "Call of the Haunted");
    }
}
