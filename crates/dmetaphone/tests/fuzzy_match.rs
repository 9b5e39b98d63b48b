//! Sounds-like search over a small country list with Spanish display names.
//!
//! Each display name is split into words, normalized, and encoded once; a
//! query matches a country when its code shares a primary or alternate with
//! any word of the country's name.

use dmetaphone::{DoubleMetaphone, PhoneticCode};
use dmetaphone_core::normalize::normalize_word;

const COUNTRIES: &[(&str, &str)] = &[
    ("DE", "Alemania"),
    ("BM", "Bermudas"),
    ("BR", "Brasil"),
    ("ES", "España"),
    ("GR", "Grecia"),
    ("JP", "Japón"),
    ("MM", "Myanmar (Birmania)"),
];

struct Index {
    entries: Vec<(&'static str, Vec<PhoneticCode>)>,
    encoder: DoubleMetaphone,
}

impl Index {
    fn build(countries: &[(&'static str, &'static str)]) -> Self {
        let encoder = DoubleMetaphone::new();
        let entries = countries
            .iter()
            .map(|&(id, name)| {
                let codes = name
                    .split(|c: char| !c.is_alphanumeric())
                    .filter(|token| !token.is_empty())
                    .map(|token| encoder.encode(&normalize_word(token)))
                    .collect();
                (id, codes)
            })
            .collect();
        Self { entries, encoder }
    }

    fn search(&self, query: &str) -> Vec<&'static str> {
        let wanted = self.encoder.encode(&normalize_word(query));
        self.entries
            .iter()
            .filter(|(_, codes)| codes.iter().any(|code| code.matches(&wanted)))
            .map(|&(id, _)| id)
            .collect()
    }
}

#[test]
fn birmania_finds_myanmar() {
    let index = Index::build(COUNTRIES);
    assert_eq!(index.search("Birmania"), ["MM"]);
    assert_eq!(index.search("Birmanía"), ["MM"]);
    assert_eq!(index.search("Birmanya"), ["MM"]);
    assert_eq!(index.search("myanmar"), ["MM"]);
}

#[test]
fn accented_names_are_found_without_accents() {
    let index = Index::build(COUNTRIES);
    assert_eq!(index.search("Japon"), ["JP"]);
    assert_eq!(index.search("Espana"), ["ES"]);
}

#[test]
fn misspellings_are_found() {
    let index = Index::build(COUNTRIES);
    assert_eq!(index.search("Brazil"), ["BR"]);
    assert_eq!(index.search("Grezia"), ["GR"]);
}

#[test]
fn unrelated_query_finds_nothing() {
    let index = Index::build(COUNTRIES);
    assert!(index.search("Noruega").is_empty());
    assert!(index.search("").is_empty());
}
