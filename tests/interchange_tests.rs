//! Export and import tests.
//!
//! These tests check that both export formats carry card identities and
//! counts, and that the interchange format imports back into an
//! equivalent deck.

use deck_viewer::deck::load_str;
use deck_viewer::{
    export_text, export_ydk, import_ydk, CardCatalog, Deck, DeckDocument, DeckError, SectionId,
};

const DECK: &str = r#"{
    "name": "Zombies",
    "author": "Tester",
    "sections": {
        "main": [
            {"id": 63665606, "name": "Goblin Zombie", "qty": 3, "type": ["Monster", "Zombie"], "level": 4},
            {"id": 4064256, "name": "Zombie World", "qty": 1, "type": "Spell Card [Field]"},
            {"name": "Homebrew", "qty": 2, "type": ["Monster"]}
        ],
        "extra": [{"id": 12345, "name": "Big Fusion", "qty": 1, "type": ["Fusion Monster"], "level": 8}],
        "side": [{"id": 63665606, "name": "Goblin Zombie", "qty": 1, "type": ["Monster", "Zombie"]}]
    }
}"#;

fn deck() -> Deck {
    load_str(DECK).expect("Fixture should load")
}

fn counts(deck: &Deck, id: SectionId) -> Vec<(String, u32)> {
    deck.section(id)
        .iter()
        .map(|c| (c.key().to_string(), c.quantity))
        .collect()
}

#[test]
fn test_text_export_lists_sections() {
    let text = export_text(&deck());
    let expected = "Zombies\nby Tester\n\
        \nMain Deck (6)\n3x Goblin Zombie\n1x Zombie World\n2x Homebrew\n\
        \nExtra Deck (1)\n1x Big Fusion\n\
        \nSide Deck (1)\n1x Goblin Zombie\n";
    assert_eq!(text, expected);
}

#[test]
fn test_ydk_round_trips_identities_and_counts() {
    let deck = deck();
    let catalog = CardCatalog::from_deck(&deck);
    let report = import_ydk(&export_ydk(&deck), &catalog).unwrap();

    assert!(report.is_complete());
    for id in SectionId::ALL {
        assert_eq!(counts(&report.deck, id), counts(&deck, id), "{id}");
    }
}

/// Sections stay separate even when the same card appears in two of them.
#[test]
fn test_same_card_in_two_sections() {
    let deck = deck();
    let catalog = CardCatalog::from_deck(&deck);
    let report = import_ydk(&export_ydk(&deck), &catalog).unwrap();

    assert_eq!(report.deck.section(SectionId::Main).get(0).unwrap().quantity, 3);
    assert_eq!(report.deck.section(SectionId::Side).get(0).unwrap().quantity, 1);
}

/// Names that look like ids, comments or headers survive a round trip.
#[test]
fn test_ydk_round_trips_ambiguous_names() {
    let deck = load_str(
        r##"{"name": "Tricky", "sections": {"main": [
            {"name": "#1 Fan", "qty": 2},
            {"name": "12580477", "qty": 1},
            {"id": 12580477, "name": "Raigeki", "qty": 1},
            {"name": "!side", "qty": 1}
        ]}}"##,
    )
    .unwrap();
    let catalog = CardCatalog::from_deck(&deck);
    let report = import_ydk(&export_ydk(&deck), &catalog).unwrap();

    assert!(report.is_complete(), "{:?}", report.unknown);
    assert_eq!(report.deck.total_copies(), 5);
    assert_eq!(counts(&report.deck, SectionId::Main), counts(&deck, SectionId::Main));
}

#[test]
fn test_unknown_identities_are_reported() {
    let catalog = CardCatalog::from_deck(&deck());
    let source = "#main\n63665606\n99999999\n#extra\n!side\nNobody\n";
    let report = import_ydk(source, &catalog).unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.unknown.len(), 2);
    assert_eq!(report.unknown[0].line, 3);
    assert_eq!(report.unknown[1].section, Some(SectionId::Side));
    assert_eq!(report.deck.total_copies(), 1);
}

#[test]
fn test_malformed_import_is_an_error() {
    let catalog = CardCatalog::from_deck(&deck());

    let err = import_ydk("63665606\n#main\n", &catalog).unwrap_err();
    assert!(matches!(err, DeckError::Import { line: 1, .. }));

    let err = import_ydk("#main\n!bogus\n", &catalog).unwrap_err();
    assert!(matches!(err, DeckError::Import { line: 2, .. }));

    assert!(import_ydk("", &catalog).is_err());
}

#[test]
fn test_document_round_trip() {
    let deck = deck();
    let json = serde_json::to_string(&DeckDocument::from_deck(&deck)).unwrap();
    let reloaded = load_str(&json).unwrap();
    assert_eq!(reloaded, deck);
}
