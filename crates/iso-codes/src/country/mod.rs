//! ISO 3166-1 alpha-2 country codes.
//!
//! Only the surface needed to validate region prefixes is provided: parse,
//! validity, the reference name and the shared adapters.

mod table;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, IsoCode};
use crate::error::{CodeKind, IsoError};

static COUNTRIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let map: HashMap<_, _> = table::ISO_3166_1.iter().copied().collect();
    tracing::debug!(count = map.len(), "indexed ISO 3166-1 codes");
    map
});

/// An ISO 3166-1 alpha-2 country code, or the undefined sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// The undefined sentinel.
    pub const UNDEFINED: CountryCode = CountryCode("");

    /// Parses an alpha-2 code, ignoring case.
    pub fn parse(input: &str) -> Self {
        let upper = input.to_uppercase();
        match COUNTRIES.get_key_value(upper.as_str()) {
            Some((&code, _)) => CountryCode(code),
            None => {
                tracing::trace!(input, "unrecognized country code");
                Self::UNDEFINED
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Short English name, empty for the sentinel.
    pub fn name(&self) -> &'static str {
        COUNTRIES.get(self.0).copied().unwrap_or_default()
    }

    /// Iterates every assigned alpha-2 code in alphabetical order.
    pub fn all() -> impl Iterator<Item = CountryCode> {
        table::ISO_3166_1.iter().map(|&(code, _)| CountryCode(code))
    }
}

impl IsoCode for CountryCode {
    const KIND: CodeKind = CodeKind::Country;

    fn parse(input: &str) -> Self {
        CountryCode::parse(input)
    }

    fn is_valid(&self) -> bool {
        CountryCode::is_valid(self)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for CountryCode {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_text(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(CountryCode::parse("us").as_str(), "US");
        assert_eq!(CountryCode::parse("De").name(), "Germany");
    }

    #[test]
    fn unknown_codes_are_undefined() {
        for input in ["", "ZZ", "USA", "U", "XK"] {
            assert!(!CountryCode::parse(input).is_valid(), "{input}");
        }
    }

    #[test]
    fn table_has_all_assigned_codes() {
        assert_eq!(CountryCode::all().count(), 249);
        assert_eq!(COUNTRIES.len(), 249);
    }
}
