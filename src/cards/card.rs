//! Canonical card record.
//!
//! Every downstream component (filter, draw, export) works on `Card` only.
//! Raw JSON records are converted by [`crate::cards::normalize`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Shared card reference. Pool entries for the copies of one card all point
/// at the same `Card`.
pub type CardRef = Arc<Card>;

/// Ordered type tags, e.g. `["Monster", "Zombie", "Effect"]`.
///
/// SmallVec keeps the common case (up to 4 tags) off the heap.
pub type TypeTags = SmallVec<[String; 4]>;

/// Card identity: the explicit id when present, else the name.
///
/// Names are not guaranteed unique, so two different cards sharing a name and
/// lacking ids share an identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKey {
    /// Explicit identifier (passcode or database id), kept as text.
    Id(String),
    /// Fallback identity for cards without an id.
    Name(String),
}

impl CardKey {
    /// The raw identity text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardKey::Id(id) => id,
            CardKey::Name(name) => name,
        }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single level-class value of a card. At most one is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelClass {
    Level(i64),
    Rank(i64),
    Link(i64),
}

impl LevelClass {
    /// Numeric value used by range filters.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            LevelClass::Level(v) | LevelClass::Rank(v) | LevelClass::Link(v) => v,
        }
    }

    /// Field name this value came from.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            LevelClass::Level(_) => "level",
            LevelClass::Rank(_) => "rank",
            LevelClass::Link(_) => "link",
        }
    }
}

/// Recognized card kinds, derived from type tags.
///
/// A card may match several kinds ("Trap Monster") or none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Kinds {
    pub monster: bool,
    pub spell: bool,
    pub trap: bool,
}

impl Kinds {
    /// Scan tags case-insensitively for "monster", "spell" and "trap".
    pub fn from_type_tags<'a>(tags: impl IntoIterator<Item = &'a String>) -> Self {
        let mut kinds = Kinds::default();
        for tag in tags {
            let tag = tag.to_lowercase();
            kinds.monster |= tag.contains("monster");
            kinds.spell |= tag.contains("spell");
            kinds.trap |= tag.contains("trap");
        }
        kinds
    }

    /// No recognized kind.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        !(self.monster || self.spell || self.trap)
    }
}

/// Canonical card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Explicit identifier, if the source provided one.
    pub id: Option<String>,

    /// Display name.
    pub name: String,

    /// Copies in its section (always >= 1).
    pub quantity: u32,

    /// Ordered type tags.
    pub type_tags: TypeTags,

    /// Resolved level, rank or link value.
    pub level: Option<LevelClass>,

    pub attribute: Option<String>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub description: Option<String>,
    pub image: Option<String>,

    /// Lowercased "function" tags.
    pub tags: Vec<String>,
}

impl Card {
    /// Create a card with a name and quantity. Quantity is raised to 1.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity: quantity.max(1),
            type_tags: TypeTags::new(),
            level: None,
            attribute: None,
            attack: None,
            defense: None,
            description: None,
            image: None,
            tags: Vec::new(),
        }
    }

    /// Set the explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the type tags.
    #[must_use]
    pub fn with_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the level-class value.
    #[must_use]
    pub fn with_level(mut self, level: LevelClass) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a function tag (stored lowercase).
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.trim().to_lowercase());
        self
    }

    /// Card identity.
    #[must_use]
    pub fn key(&self) -> CardKey {
        match &self.id {
            Some(id) => CardKey::Id(id.clone()),
            None => CardKey::Name(self.name.clone()),
        }
    }

    /// Kinds matched by the type tags.
    #[must_use]
    pub fn kinds(&self) -> Kinds {
        Kinds::from_type_tags(&self.type_tags)
    }

    /// Numeric level-class value, if any.
    #[must_use]
    pub fn level_value(&self) -> Option<i64> {
        self.level.map(LevelClass::value)
    }

    /// Exact, case-insensitive tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.iter().any(|t| *t == needle)
    }

    /// Lowercased haystack for free-text search: name, joined type tags,
    /// attribute and description.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut text = self.name.clone();
        text.push(' ');
        text.push_str(&self.type_tags.join(" "));
        if let Some(attribute) = &self.attribute {
            text.push(' ');
            text.push_str(attribute);
        }
        if let Some(description) = &self.description {
            text.push(' ');
            text.push_str(description);
        }
        text.to_lowercase()
    }

    /// Wrap in a shared reference.
    #[must_use]
    pub fn shared(self) -> CardRef {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefers_id() {
        let card = Card::new("Zombie World", 1).with_id("4064256");
        assert_eq!(card.key(), CardKey::Id("4064256".into()));

        let unnamed = Card::new("Zombie World", 1);
        assert_eq!(unnamed.key(), CardKey::Name("Zombie World".into()));
        assert_eq!(unnamed.key().to_string(), "Zombie World");
    }

    #[test]
    fn test_quantity_floor() {
        assert_eq!(Card::new("A", 0).quantity, 1);
        assert_eq!(Card::new("A", 3).quantity, 3);
    }

    #[test]
    fn test_kinds() {
        let monster = Card::new("A", 1).with_types(["Monster", "Zombie"]);
        assert!(monster.kinds().monster);
        assert!(!monster.kinds().spell);

        let trap_monster = Card::new("B", 1).with_types(["Trap Card", "Continuous Monster"]);
        assert!(trap_monster.kinds().trap);
        assert!(trap_monster.kinds().monster);

        let token = Card::new("C", 1).with_types(["Token"]);
        assert!(token.kinds().is_unknown());
    }

    #[test]
    fn test_level_class() {
        let card = Card::new("A", 1).with_level(LevelClass::Rank(4));
        assert_eq!(card.level_value(), Some(4));
        assert_eq!(LevelClass::Link(2).field(), "link");
        assert_eq!(Card::new("B", 1).level_value(), None);
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let card = Card::new("A", 1).with_tag("Searcher");
        assert!(card.has_tag("searcher"));
        assert!(card.has_tag("SEARCHER"));
        assert!(!card.has_tag("search"));
    }

    #[test]
    fn test_search_text() {
        let card = Card::new("Goblin Zombie", 1)
            .with_types(["Monster", "Zombie"])
            .with_attribute("DARK")
            .with_description("When this card is sent to the GY");

        let text = card.search_text();
        assert!(text.contains("goblin zombie"));
        assert!(text.contains("monster zombie"));
        assert!(text.contains("dark"));
        assert!(text.contains("sent to the gy"));
    }
}
