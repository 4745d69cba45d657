//! JSON vocabulary loading.
//!
//! Accepts an array of records shaped either like
//!
//! ```json
//! { "id": 4, "name": "파이리", "group": 1 }
//! ```
//!
//! or like the PokéAPI dump format
//!
//! ```json
//! { "id": 4, "korean_name": "파이리", "generation": "i", "english_name": "charmander" }
//! ```
//!
//! Groups may be numbers, decimal strings, or roman numerals (optionally prefixed with
//! `generation-`). Records are returned sorted by id.

use crate::graph::Entity;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: u32,
    #[serde(alias = "korean_name")]
    name: String,
    #[serde(alias = "generation")]
    group: RawGroup,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGroup {
    Number(u32),
    Text(String),
}

pub fn load_json(text: &str) -> Result<Vec<Entity>> {
    let mut records: Vec<RawRecord> = serde_json::from_str(text)?;
    records.sort_by_key(|r| r.id);

    let entities = records
        .into_iter()
        .map(|r| -> Result<Entity> {
            let group = match r.group {
                RawGroup::Number(n) => n,
                RawGroup::Text(ref s) => parse_group(s).ok_or_else(|| Error::InvalidGroup {
                    id: r.id,
                    value: s.clone(),
                })?,
            };
            Ok(Entity::new(r.id, r.name, group)?)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(entities = entities.len(), "loaded vocabulary");
    Ok(entities)
}

pub fn load_path(path: &Path) -> Result<Vec<Entity>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_json(&text)
}

/// Parses `"4"`, `"iv"`, `"IV"` or `"generation-iv"` into `4`.
pub fn parse_group(raw: &str) -> Option<u32> {
    let s = raw.trim();
    let s = s.strip_prefix("generation-").unwrap_or(s);
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    parse_roman(s)
}

fn parse_roman(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut total: u32 = 0;
    let mut prev: u32 = 0;
    for c in s.chars().rev() {
        let v = match c.to_ascii_lowercase() {
            'i' => 1,
            'v' => 5,
            'x' => 10,
            'l' => 50,
            'c' => 100,
            _ => return None,
        };
        if v < prev {
            total = total.checked_sub(v)?;
        } else {
            total = total.checked_add(v)?;
            prev = v;
        }
    }
    (total > 0).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_group_accepts_numbers_and_roman_numerals() {
        assert_eq!(parse_group("4"), Some(4));
        assert_eq!(parse_group(" 9 "), Some(9));
        assert_eq!(parse_group("i"), Some(1));
        assert_eq!(parse_group("iv"), Some(4));
        assert_eq!(parse_group("IX"), Some(9));
        assert_eq!(parse_group("generation-viii"), Some(8));
        assert_eq!(parse_group("generation-3"), Some(3));
    }

    #[test]
    fn parse_group_rejects_garbage() {
        assert_eq!(parse_group(""), None);
        assert_eq!(parse_group("generation-"), None);
        assert_eq!(parse_group("gen four"), None);
    }

    #[test]
    fn roman_numerals_that_overflow_are_rejected() {
        let huge = "c".repeat(42_949_673);
        assert_eq!(parse_roman(&huge), None);
        assert_eq!(parse_roman(&"c".repeat(42_949_672)), Some(4_294_967_200));
    }
}
