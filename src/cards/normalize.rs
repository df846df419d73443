//! Raw card record normalization.
//!
//! Deck documents come from hand-edited JSON and older exporters, so the same
//! field shows up as `name`, `Name` or `NAME`, `type` is either an array or a
//! string such as `"Monster / Zombie / Effect"`, and numbers are sometimes
//! quoted. `normalize_card` folds all of that into one [`Card`] and never
//! fails: anything it cannot read is left out.

use serde_json::{Map, Value};

use super::card::{Card, LevelClass, TypeTags};

/// Name given to records that carry none.
pub const UNKNOWN_NAME: &str = "Unknown Card";

/// Largest copy count a record may claim. Larger values are clamped.
pub const MAX_QUANTITY: u32 = 99;

const TYPE_SEPARATORS: &[char] = &['/', ',', '|', '[', ']'];

/// Convert a raw JSON card record into a canonical card.
#[must_use]
pub fn normalize_card(raw: &Value) -> Card {
    let empty = Map::new();
    let fields = match raw {
        Value::Object(map) => map,
        _ => {
            log::warn!("card record is not an object, using defaults");
            &empty
        }
    };

    let name = field(fields, &["name"])
        .and_then(text)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let quantity = field(fields, &["qty", "quantity", "count"])
        .and_then(integer)
        .filter(|&n| n >= 1)
        .map_or(1, |n| {
            if n > i64::from(MAX_QUANTITY) {
                log::warn!("{name:?} claims {n} copies, clamped to {MAX_QUANTITY}");
                MAX_QUANTITY
            } else {
                n as u32
            }
        });

    let mut card = Card::new(name, quantity);
    card.id = field(fields, &["id"]).and_then(text);
    card.type_tags = field(fields, &["type", "types"]).map(type_tags).unwrap_or_default();
    card.level = level_class(fields);
    card.attribute = field(fields, &["attribute"]).and_then(text);
    card.attack = field(fields, &["atk", "attack"]).and_then(integer);
    card.defense = field(fields, &["def", "defense"]).and_then(integer);
    card.description = field(fields, &["desc", "description"]).and_then(text);
    card.image = field(fields, &["img", "image"]).and_then(text);
    card.tags = field(fields, &["function", "functions"])
        .map(function_tags)
        .unwrap_or_default();
    card
}

/// Case-insensitive lookup over a list of accepted names, first match wins.
fn field<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| {
        fields
            .iter()
            .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_null())
            .map(|(_, value)| value)
    })
}

/// Non-empty trimmed text. Numbers are rendered as text so numeric ids work.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer from a number or a string. Decimals truncate (`"2.0"` is 2).
/// Labelled values such as `"LINK-2"` yield their trailing digits; anything
/// else (`"?"`, `"4 stars"`) yields nothing.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Some(n);
            }
            if let Some(f) = s.parse::<f64>().ok().filter(|f| f.is_finite()) {
                return Some(f as i64);
            }
            let (_, digits) = s.split_at(s.find(|c: char| c.is_ascii_digit())?);
            if digits.chars().all(|c| c.is_ascii_digit()) {
                digits.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

fn type_tags(value: &Value) -> TypeTags {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        Value::String(s) => s
            .split(TYPE_SEPARATORS)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        _ => TypeTags::new(),
    }
}

fn function_tags(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    raw.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// First present of level, rank, link.
fn level_class(fields: &Map<String, Value>) -> Option<LevelClass> {
    if let Some(v) = field(fields, &["level"]).and_then(integer) {
        return Some(LevelClass::Level(v));
    }
    if let Some(v) = field(fields, &["rank"]).and_then(integer) {
        return Some(LevelClass::Rank(v));
    }
    field(fields, &["link", "linkval"])
        .and_then(integer)
        .map(LevelClass::Link)
}
