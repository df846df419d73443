//! Structured interchange format, one line per physical copy.
//!
//! ```text
//! #created by deck-viewer
//! #main
//! 63665606
//! 63665606
//! 4064256
//! #extra
//! !side
//! =Token
//! ```
//!
//! A card with an id is written as the bare id. A card without one is
//! written as `=` followed by its name, and that form only ever resolves by
//! name, so a name can never be mistaken for an id, header or comment.
//! Bare lines written by other tools resolve by id first, then by name.
//! `#created by` lines are the only recognized comments.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardCatalog, CardKey, CardRef};
use crate::core::{DeckError, Result};
use crate::deck::{Deck, SectionId};

/// First line written by [`export_ydk`].
pub const CREATED_BY: &str = "#created by deck-viewer";

/// Name given to imported decks.
pub const IMPORTED_NAME: &str = "Imported Deck";

/// Prefix marking a name-only identity line.
pub const NAME_PREFIX: char = '=';

const COMMENT_PREFIX: &str = "#created by";

/// Section header line.
#[must_use]
pub const fn header(id: SectionId) -> &'static str {
    match id {
        SectionId::Main => "#main",
        SectionId::Extra => "#extra",
        SectionId::Side => "!side",
    }
}

fn parse_header(line: &str) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|&id| line.eq_ignore_ascii_case(header(id)))
}

fn is_comment(line: &str) -> bool {
    line.get(..COMMENT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(COMMENT_PREFIX))
}

/// Identity line for one copy of `card`.
fn identity_line(card: &Card) -> String {
    match card.key() {
        CardKey::Id(id) => id,
        CardKey::Name(name) => format!("{NAME_PREFIX}{name}"),
    }
}

fn resolve<'a>(catalog: &'a CardCatalog, line: &str) -> Option<&'a CardRef> {
    match line.strip_prefix(NAME_PREFIX) {
        Some(name) => catalog.get(&CardKey::Name(name.trim().to_string())),
        None => catalog.resolve(line),
    }
}

/// Render a deck in the interchange format.
#[must_use]
pub fn export_ydk(deck: &Deck) -> String {
    let mut lines = vec![CREATED_BY.to_string()];
    for (id, section) in deck.sections() {
        lines.push(header(id).to_string());
        for card in section.iter() {
            let line = identity_line(card);
            for _ in 0..card.quantity {
                lines.push(line.clone());
            }
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// An identity the catalog did not know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCard {
    /// 1-based line number.
    pub line: usize,
    /// Section the line appeared in, `None` before the first header.
    pub section: Option<SectionId>,
    pub identity: String,
}

/// Result of a successful import.
#[derive(Clone, Debug)]
pub struct ImportReport {
    pub deck: Deck,
    /// Dropped lines (unresolved identities and unrecognized `#` lines), in
    /// file order.
    pub unknown: Vec<UnknownCard>,
}

impl ImportReport {
    /// True when every identity resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Accumulates copies per section, first appearance order.
#[derive(Default)]
struct SectionBuilder {
    cards: Vec<Card>,
    index: FxHashMap<CardKey, usize>,
}

impl SectionBuilder {
    fn add_copy(&mut self, card: &Card) {
        let key = card.key();
        match self.index.get(&key) {
            Some(&i) => self.cards[i].quantity += 1,
            None => {
                let mut card = card.clone();
                card.quantity = 1;
                self.index.insert(key, self.cards.len());
                self.cards.push(card);
            }
        }
    }
}

/// Parse the interchange format, resolving identities through `catalog`.
///
/// Unknown identities and unrecognized `#` lines are reported, not fatal.
/// Structural problems (an identity before any section header, an unknown
/// `!` marker, no header at all) are errors.
pub fn import_ydk(source: &str, catalog: &CardCatalog) -> Result<ImportReport> {
    let mut builders: [SectionBuilder; 3] = Default::default();
    let mut current: Option<SectionId> = None;
    let mut unknown = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(id) = parse_header(line) {
            current = Some(id);
            continue;
        }
        if is_comment(line) {
            continue;
        }
        if line.starts_with('#') {
            log::warn!("Unrecognized line {line:?} at line {line_no}, dropped");
            unknown.push(UnknownCard {
                line: line_no,
                section: current,
                identity: line.to_string(),
            });
            continue;
        }
        if line.starts_with('!') {
            return Err(DeckError::import(line_no, format!("unknown section marker {line:?}")));
        }
        let Some(section) = current else {
            return Err(DeckError::import(line_no, "card listed before any section header"));
        };
        match resolve(catalog, line) {
            Some(card) => builders[section_slot(section)].add_copy(card),
            None => {
                log::warn!("Unknown card {line:?} at line {line_no}, dropped");
                unknown.push(UnknownCard {
                    line: line_no,
                    section: Some(section),
                    identity: line.to_string(),
                });
            }
        }
    }

    if current.is_none() {
        return Err(DeckError::import(1, "no section header found"));
    }

    let mut deck = Deck::new(IMPORTED_NAME, "");
    for id in SectionId::ALL {
        let builder = std::mem::take(&mut builders[section_slot(id)]);
        for card in builder.cards {
            deck.push(id, card);
        }
    }
    log::info!(
        "Imported {} copies, {} unknown",
        deck.total_copies(),
        unknown.len()
    );
    Ok(ImportReport { deck, unknown })
}

fn section_slot(id: SectionId) -> usize {
    match id {
        SectionId::Main => 0,
        SectionId::Extra => 1,
        SectionId::Side => 2,
    }
}
