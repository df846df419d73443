//! JSON deck document.
//!
//! ```json
//! {
//!   "name": "Zombie World",
//!   "author": "someone",
//!   "deckstyle": "dark",
//!   "sections": {
//!     "main":  [{ "id": 1, "name": "A", "qty": 3, "type": ["Monster"] }],
//!     "extra": [],
//!     "side":  []
//!   }
//! }
//! ```
//!
//! Card records stay as raw JSON values here; they only become [`Card`]s
//! through [`normalize_card`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deck::{Deck, SectionId};
use crate::cards::{normalize_card, Card};

/// Deck name used when a document has none.
pub const UNTITLED: &str = "Untitled Deck";

/// Raw deck document as found on disk or over the wire.
///
/// Every field may be missing or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deckstyle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<SectionsDocument>,
}

/// Raw card records per section. `null` and missing sections are empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsDocument {
    pub main: Option<Vec<Value>>,
    pub extra: Option<Vec<Value>>,
    pub side: Option<Vec<Value>>,
}

impl SectionsDocument {
    fn records(&self, id: SectionId) -> &[Value] {
        let records = match id {
            SectionId::Main => &self.main,
            SectionId::Extra => &self.extra,
            SectionId::Side => &self.side,
        };
        records.as_deref().unwrap_or(&[])
    }

    fn set_records(&mut self, id: SectionId, records: Vec<Value>) {
        let slot = match id {
            SectionId::Main => &mut self.main,
            SectionId::Extra => &mut self.extra,
            SectionId::Side => &mut self.side,
        };
        *slot = Some(records);
    }
}

impl DeckDocument {
    /// Normalize every record and build the canonical deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => UNTITLED.to_string(),
            Some(name) => name.to_string(),
        };
        let author = self.author.as_deref().map_or("", str::trim);
        let mut deck = Deck::new(name, author);
        deck.style = self.deckstyle.filter(|s| !s.trim().is_empty());
        let sections = self.sections.unwrap_or_default();
        for id in SectionId::ALL {
            for record in sections.records(id) {
                deck.push(id, normalize_card(record));
            }
        }
        deck
    }

    /// Project a canonical deck back into document form.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        let mut sections = SectionsDocument::default();
        for (id, section) in deck.sections() {
            sections.set_records(id, section.iter().map(|c| card_record(c)).collect());
        }
        Self {
            name: Some(deck.name.clone()),
            author: Some(deck.author.clone()),
            deckstyle: deck.style.clone(),
            sections: Some(sections),
        }
    }
}

/// Canonical card as a document record. Optional fields are omitted.
#[must_use]
pub fn card_record(card: &Card) -> Value {
    let mut fields = Map::new();
    if let Some(id) = &card.id {
        fields.insert("id".into(), Value::from(id.as_str()));
    }
    fields.insert("name".into(), Value::from(card.name.as_str()));
    fields.insert("qty".into(), Value::from(card.quantity));
    fields.insert(
        "type".into(),
        Value::from(card.type_tags.iter().map(String::as_str).collect::<Vec<_>>()),
    );
    if let Some(level) = card.level {
        fields.insert(level.field().into(), Value::from(level.value()));
    }
    let optional_text = [
        ("attribute", &card.attribute),
        ("desc", &card.description),
        ("img", &card.image),
    ];
    for (key, value) in optional_text {
        if let Some(value) = value {
            fields.insert(key.into(), Value::from(value.as_str()));
        }
    }
    if let Some(atk) = card.attack {
        fields.insert("atk".into(), Value::from(atk));
    }
    if let Some(def) = card.defense {
        fields.insert("def".into(), Value::from(def));
    }
    if !card.tags.is_empty() {
        fields.insert("function".into(), Value::from(card.tags.clone()));
    }
    Value::Object(fields)
}
