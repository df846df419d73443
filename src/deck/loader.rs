//! Deck loading and stale-load detection.
//!
//! Loading is a pure parse: it either yields a complete [`Deck`] or an error,
//! so callers never observe a half-applied deck.
//!
//! Several loads may be in flight at once (the user picks another deck before
//! the first fetch resolves). Each load takes a [`LoadTicket`] from a
//! [`LoadTracker`] when it starts; only the newest ticket may install its
//! result.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use super::document::DeckDocument;
use crate::core::Result;

/// Parse a deck from a JSON string.
pub fn load_str(source: &str) -> Result<Deck> {
    let start = Instant::now();
    let document: DeckDocument = serde_json::from_str(source)?;
    let deck = document.into_deck();
    log::debug!(
        "Parsed deck {:?}: {} copies in {}us.",
        deck.name,
        deck.total_copies(),
        start.elapsed().as_micros()
    );
    Ok(deck)
}

/// Parse a deck from any reader.
pub fn load_reader<R: Read>(reader: R) -> Result<Deck> {
    let document: DeckDocument = serde_json::from_reader(reader)?;
    Ok(document.into_deck())
}

/// Read and parse a deck file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Deck> {
    let path = path.as_ref();
    log::debug!("Loading deck from {}", path.display());
    let source = std::fs::read_to_string(path)?;
    load_str(&source)
}

/// Identifies one load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoadTicket(pub u64);

/// Issues load tickets and remembers the newest one.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    /// Create a tracker with no loads issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. Every earlier ticket becomes stale.
    pub fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// Whether `ticket` is the newest issued.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckError;
    use crate::deck::SectionId;

    const DECK: &str = r#"{
        "name": "Zombies",
        "author": "Tester",
        "sections": {
            "main": [{"id": 1, "name": "A", "qty": 3, "type": ["Monster"]}],
            "extra": [],
            "side": [{"name": "B", "type": "Trap"}]
        }
    }"#;

    #[test]
    fn test_load_str() {
        let deck = load_str(DECK).unwrap();
        assert_eq!(deck.name, "Zombies");
        assert_eq!(deck.section(SectionId::Main).total_copies(), 3);
        assert_eq!(deck.section(SectionId::Side).total_copies(), 1);
    }

    #[test]
    fn test_load_null_header_fields() {
        let deck = load_str(r#"{"name": null, "author": null, "sections": null}"#).unwrap();
        assert_eq!(deck.name, crate::deck::document::UNTITLED);
        assert_eq!(deck.author, "");
        assert_eq!(deck.total_copies(), 0);

        let deck = load_str(r#"{"name": "Zombies", "sections": {"main": null, "side": [{"name": "B"}]}}"#).unwrap();
        assert_eq!(deck.section(SectionId::Side).total_copies(), 1);
    }

    #[test]
    fn test_load_reader() {
        let deck = load_reader(DECK.as_bytes()).unwrap();
        assert_eq!(deck.author, "Tester");
    }

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, DECK).unwrap();

        assert_eq!(load_path(&path).unwrap().total_copies(), 4);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(load_str("{\"name\": "), Err(DeckError::Json(_))));
        assert!(matches!(load_str("[1, 2]"), Err(DeckError::Json(_))));
        assert!(matches!(
            load_path("/definitely/not/here.json"),
            Err(DeckError::Io(_))
        ));
    }

    #[test]
    fn test_tracker_only_newest_is_current() {
        let mut tracker = LoadTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(first < second);
    }
}
