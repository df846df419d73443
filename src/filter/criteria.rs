//! Filter criteria and the predicates they expand to.
//!
//! `FilterCriteria` is the UI-facing shape: a text box, three kind toggles,
//! two level bounds and a tag picker. `predicates()` turns it into the list
//! of active [`CardPredicate`]s, in evaluation order. Inactive criteria
//! produce no predicate at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// User-facing filter state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Free-text substring. Blank means no text filter.
    pub text: String,

    /// Show monsters.
    pub monster: bool,
    /// Show spells.
    pub spell: bool,
    /// Show traps.
    pub trap: bool,

    /// Inclusive lower level/rank/link bound.
    pub level_min: Option<i64>,
    /// Inclusive upper level/rank/link bound.
    pub level_max: Option<i64>,

    /// Single function tag.
    pub tag: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            monster: true,
            spell: true,
            trap: true,
            level_min: None,
            level_max: None,
            tag: None,
        }
    }
}

/// One active check. Cards must pass every predicate of the criteria.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPredicate {
    /// Exclude cards of a kind whose toggle is off. Cards with no
    /// recognized kind always pass.
    Kinds { monster: bool, spell: bool, trap: bool },
    /// Level-class value within the closed interval.
    LevelRange { min: Option<i64>, max: Option<i64> },
    /// Normalized tag list contains this (lowercase) tag.
    Tag(String),
    /// Search text contains this (lowercase) needle.
    Text(String),
}

impl FilterCriteria {
    /// Criteria that keep every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Toggle monsters.
    #[must_use]
    pub fn with_monsters(mut self, shown: bool) -> Self {
        self.monster = shown;
        self
    }

    /// Toggle spells.
    #[must_use]
    pub fn with_spells(mut self, shown: bool) -> Self {
        self.spell = shown;
        self
    }

    /// Toggle traps.
    #[must_use]
    pub fn with_traps(mut self, shown: bool) -> Self {
        self.trap = shown;
        self
    }

    /// Set level bounds.
    #[must_use]
    pub fn with_level_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.level_min = min;
        self.level_max = max;
        self
    }

    /// Set the tag filter.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Active predicates in evaluation order: kind, level, tag, text.
    #[must_use]
    pub fn predicates(&self) -> SmallVec<[CardPredicate; 4]> {
        let mut predicates = SmallVec::new();

        if !(self.monster && self.spell && self.trap) {
            predicates.push(CardPredicate::Kinds {
                monster: self.monster,
                spell: self.spell,
                trap: self.trap,
            });
        }

        if self.level_min.is_some() || self.level_max.is_some() {
            predicates.push(CardPredicate::LevelRange {
                min: self.level_min,
                max: self.level_max,
            });
        }

        if let Some(tag) = self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            predicates.push(CardPredicate::Tag(tag.to_lowercase()));
        }

        let text = self.text.trim();
        if !text.is_empty() {
            predicates.push(CardPredicate::Text(text.to_lowercase()));
        }

        predicates
    }

    /// True when no predicate is active.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.predicates().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pass_through() {
        let criteria = FilterCriteria::default();
        assert!(criteria.monster && criteria.spell && criteria.trap);
        assert!(criteria.is_pass_through());
    }

    #[test]
    fn test_blank_text_and_tag_are_inactive() {
        let criteria = FilterCriteria::new().with_text("   ").with_tag(" ");
        assert!(criteria.is_pass_through());
    }

    #[test]
    fn test_predicate_order() {
        let criteria = FilterCriteria::new()
            .with_text(" Zombie ")
            .with_tag("Searcher")
            .with_level_range(Some(5), None)
            .with_spells(false);

        let predicates = criteria.predicates();
        assert_eq!(
            predicates.as_slice(),
            &[
                CardPredicate::Kinds {
                    monster: true,
                    spell: false,
                    trap: true
                },
                CardPredicate::LevelRange {
                    min: Some(5),
                    max: None
                },
                CardPredicate::Tag("searcher".into()),
                CardPredicate::Text("zombie".into()),
            ]
        );
    }

    #[test]
    fn test_serde_defaults() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"trap": false}"#).unwrap();
        assert!(criteria.monster);
        assert!(!criteria.trap);
        assert!(criteria.text.is_empty());
    }
}
