//! Deck export and import.
//!
//! - `text`: human-readable list grouped by section (write-only)
//! - `ydk`: one identity per physical copy, grouped into `#main`, `#extra`
//!   and `!side`; can be imported back against a [`crate::cards::CardCatalog`]
//!
//! Neither format round-trips formatting exactly. Both round-trip card
//! identities and counts.

pub mod text;
pub mod ydk;

pub use text::export_text;
pub use ydk::{export_ydk, import_ydk, ImportReport, UnknownCard};
