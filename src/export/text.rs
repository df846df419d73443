//! Plain-text deck list.
//!
//! ```text
//! Zombies
//! by Tester
//!
//! Main Deck (4)
//! 3x Goblin Zombie
//! 1x Zombie World
//! ```
//!
//! Meant for pasting into chats and forums; empty sections are left out.

use std::fmt::Write;

use crate::deck::Deck;

/// Render a deck as a human-readable list.
#[must_use]
pub fn export_text(deck: &Deck) -> String {
    let mut out = String::new();
    out.push_str(&deck.name);
    out.push('\n');
    if !deck.author.is_empty() {
        let _ = writeln!(out, "by {}", deck.author);
    }

    for (id, section) in deck.sections().filter(|(_, s)| !s.is_empty()) {
        let _ = writeln!(out, "\n{} ({})", id.title(), section.total_copies());
        for card in section.iter() {
            let _ = writeln!(out, "{}x {}", card.quantity, card.name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::deck::SectionId;

    #[test]
    fn test_export_text() {
        let mut deck = Deck::new("Zombies", "Tester");
        deck.push(SectionId::Main, Card::new("Goblin Zombie", 3));
        deck.push(SectionId::Main, Card::new("Zombie World", 1));
        deck.push(SectionId::Side, Card::new("Token", 2));

        assert_eq!(
            export_text(&deck),
            "Zombies\nby Tester\n\nMain Deck (4)\n3x Goblin Zombie\n1x Zombie World\n\nSide Deck (2)\n2x Token\n"
        );
    }

    #[test]
    fn test_export_text_without_author_or_cards() {
        let deck = Deck::new("Empty", "");
        assert_eq!(export_text(&deck), "Empty\n");
    }
}
