//! ISO 639 language codes.
//!
//! Input may be any ISO 639-1 two-letter code, ISO 639-2/B bibliographic
//! code or ISO 639-2/T terminology code. Every accepted form normalizes to
//! the terminology code, so `"de"`, `"ger"` and `"deu"` parse to the same
//! [`LanguageCode`].
//!
//! # Example
//!
//! ```
//! use iso_codes::LanguageCode;
//!
//! let german = LanguageCode::parse("DE");
//! assert_eq!(german.as_str(), "deu");
//! assert_eq!(german, LanguageCode::parse("ger"));
//! assert_eq!(german.to_iso639_1(), Some("de"));
//! assert_eq!(german.to_bibliographic(), "ger");
//! ```

mod tables;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, IsoCode};
use crate::error::{CodeKind, IsoError};

/// Lookup indexes over the static tables, built on first use.
struct LanguageIndex {
    two_letter: HashSet<&'static str>,
    bibliographic: HashSet<&'static str>,
    /// Terminology code to reference name.
    terminology: HashMap<&'static str, &'static str>,
    two_letter_to_t: HashMap<&'static str, &'static str>,
    b_to_t: HashMap<&'static str, &'static str>,
    t_to_two_letter: HashMap<&'static str, &'static str>,
    t_to_b: HashMap<&'static str, &'static str>,
}

impl LanguageIndex {
    fn build() -> Self {
        let index = Self {
            two_letter: tables::ISO_639_1.iter().copied().collect(),
            bibliographic: tables::ISO_639_2B.iter().copied().collect(),
            terminology: tables::ISO_639_2T.iter().copied().collect(),
            two_letter_to_t: tables::ISO_639_1_TO_2T.iter().copied().collect(),
            b_to_t: tables::ISO_639_2B_TO_2T.iter().copied().collect(),
            t_to_two_letter: tables::ISO_639_1_TO_2T
                .iter()
                .map(|&(two, t)| (t, two))
                .collect(),
            t_to_b: tables::ISO_639_2B_TO_2T
                .iter()
                .map(|&(b, t)| (t, b))
                .collect(),
        };
        tracing::debug!(
            two_letter = index.two_letter.len(),
            bibliographic = index.bibliographic.len(),
            terminology = index.terminology.len(),
            "indexed ISO 639 tables"
        );
        index
    }

    fn resolve(&self, code: &str) -> Option<&'static str> {
        match code.len() {
            2 => {
                let key = self.two_letter.get(code)?;
                self.two_letter_to_t.get(key).copied()
            }
            3 => {
                if let Some((&t, _)) = self.terminology.get_key_value(code) {
                    return Some(t);
                }
                let key = self.bibliographic.get(code)?;
                self.b_to_t.get(key).copied()
            }
            _ => None,
        }
    }
}

static INDEX: LazyLock<LanguageIndex> = LazyLock::new(LanguageIndex::build);

/// An ISO 639-2/T language code, or the undefined sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    /// The undefined sentinel.
    pub const UNDEFINED: LanguageCode = LanguageCode("");

    /// Parses a two- or three-letter language code, ignoring case.
    ///
    /// Two-letter codes map through the ISO 639-1 table. Three-letter codes
    /// are tried as terminology codes first, then as bibliographic codes.
    /// Anything else yields [`LanguageCode::UNDEFINED`].
    pub fn parse(input: &str) -> Self {
        let lower = input.to_lowercase();
        match INDEX.resolve(&lower) {
            Some(code) => LanguageCode(code),
            None => {
                tracing::trace!(input, "unrecognized language code");
                Self::UNDEFINED
            }
        }
    }

    /// Returns true unless this is the undefined sentinel.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    /// The canonical terminology code.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterates every ISO 639-2/T code in alphabetical order.
    pub fn all() -> impl Iterator<Item = LanguageCode> {
        tables::ISO_639_2T.iter().map(|&(code, _)| LanguageCode(code))
    }

    /// English reference name, empty for the sentinel.
    pub fn name(&self) -> &'static str {
        INDEX.terminology.get(self.0).copied().unwrap_or_default()
    }

    /// The ISO 639-1 code, if the language has one.
    pub fn to_iso639_1(&self) -> Option<&'static str> {
        INDEX.t_to_two_letter.get(self.0).copied()
    }

    /// The ISO 639-2/B code: the bibliographic variant where it differs,
    /// otherwise the terminology code itself.
    pub fn to_bibliographic(&self) -> &'static str {
        INDEX.t_to_b.get(self.0).copied().unwrap_or(self.0)
    }
}

impl IsoCode for LanguageCode {
    const KIND: CodeKind = CodeKind::Language;

    fn parse(input: &str) -> Self {
        LanguageCode::parse(input)
    }

    fn is_valid(&self) -> bool {
        LanguageCode::is_valid(self)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_text(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_codes_map_to_terminology() {
        assert_eq!(LanguageCode::parse("en").as_str(), "eng");
        assert_eq!(LanguageCode::parse("FR").as_str(), "fra");
        assert_eq!(LanguageCode::parse("zh").as_str(), "zho");
    }

    #[test]
    fn terminology_codes_are_returned_unchanged() {
        assert_eq!(LanguageCode::parse("deu").as_str(), "deu");
        assert_eq!(LanguageCode::parse("haw").as_str(), "haw");
    }

    #[test]
    fn bibliographic_codes_normalize() {
        assert_eq!(LanguageCode::parse("fre"), LanguageCode::parse("fra"));
        assert_eq!(LanguageCode::parse("GER").as_str(), "deu");
        assert_eq!(LanguageCode::parse("wel").as_str(), "cym");
    }

    #[test]
    fn other_lengths_and_unknown_codes_are_undefined() {
        for input in ["", "e", "english", "xx", "qqq", "en-US", " en"] {
            assert_eq!(LanguageCode::parse(input), LanguageCode::UNDEFINED, "{input}");
        }
    }

    #[test]
    fn every_cross_reference_targets_a_terminology_code() {
        for &(_, t) in tables::ISO_639_1_TO_2T.iter().chain(tables::ISO_639_2B_TO_2T) {
            assert!(INDEX.terminology.contains_key(t), "{t}");
        }
        for two in tables::ISO_639_1 {
            assert!(INDEX.two_letter_to_t.contains_key(two), "{two}");
        }
    }

    #[test]
    fn reverse_mappings() {
        let greek = LanguageCode::parse("gre");
        assert_eq!(greek.as_str(), "ell");
        assert_eq!(greek.to_iso639_1(), Some("el"));
        assert_eq!(greek.to_bibliographic(), "gre");

        let hawaiian = LanguageCode::parse("haw");
        assert_eq!(hawaiian.to_iso639_1(), None);
        assert_eq!(hawaiian.to_bibliographic(), "haw");
    }

    #[test]
    fn names() {
        assert_eq!(LanguageCode::parse("de").name(), "German");
        assert_eq!(LanguageCode::UNDEFINED.name(), "");
    }
}
