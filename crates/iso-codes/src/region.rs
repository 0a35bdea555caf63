//! ISO 3166-2 country subdivision codes.
//!
//! A region code has the form `<country>-<subdivision>`. Only the shape and
//! the country prefix are checked; subdivision names are not validated.
//! Unlike currency and language codes the input is stored verbatim, without
//! case normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, IsoCode};
use crate::country::CountryCode;
use crate::error::{CodeKind, IsoError};

/// Validates the country prefix of a region code.
pub trait CountryLookup {
    /// Returns true if `code` is a known country code.
    fn is_known_country(&self, code: &str) -> bool;
}

/// [`CountryLookup`] backed by the builtin ISO 3166-1 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166Countries;

impl CountryLookup for Iso3166Countries {
    fn is_known_country(&self, code: &str) -> bool {
        CountryCode::parse(code).is_valid()
    }
}

/// An ISO 3166-2 region code, or the undefined sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// The undefined sentinel.
    pub const UNDEFINED: RegionCode = RegionCode(String::new());

    /// Parses a region code, validating the prefix against ISO 3166-1.
    pub fn parse(input: &str) -> Self {
        Self::parse_with(input, &Iso3166Countries)
    }

    /// Parses a region code, validating the prefix with `countries`.
    ///
    /// The input is split on the first `-`. Both parts must be non-empty and
    /// the first must be a known country; otherwise the result is
    /// [`RegionCode::UNDEFINED`].
    pub fn parse_with<L: CountryLookup + ?Sized>(input: &str, countries: &L) -> Self {
        let Some((country, subdivision)) = input.split_once('-') else {
            tracing::trace!(input, "region code without subdivision separator");
            return Self::UNDEFINED;
        };
        if subdivision.is_empty() || !countries.is_known_country(country) {
            tracing::trace!(input, "unrecognized region code");
            return Self::UNDEFINED;
        }
        RegionCode(input.to_string())
    }

    /// Returns true unless this is the undefined sentinel.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The country part resolved against the builtin ISO 3166-1 table, or
    /// [`CountryCode::UNDEFINED`] for the sentinel.
    ///
    /// A region accepted by [`RegionCode::parse_with`] under a custom
    /// [`CountryLookup`] may name a country the builtin table does not know;
    /// its `country()` is then undefined. Use [`RegionCode::country_prefix`]
    /// to read the prefix as given.
    pub fn country(&self) -> CountryCode {
        CountryCode::parse(self.country_prefix())
    }

    /// The part before the first `-`, verbatim. Empty for the sentinel.
    pub fn country_prefix(&self) -> &str {
        self.0.split_once('-').map_or("", |(country, _)| country)
    }

    /// The part after the first `-`, empty for the sentinel.
    pub fn subdivision(&self) -> &str {
        self.0
            .split_once('-')
            .map_or("", |(_, subdivision)| subdivision)
    }
}

impl IsoCode for RegionCode {
    const KIND: CodeKind = CodeKind::Region;

    fn parse(input: &str) -> Self {
        RegionCode::parse(input)
    }

    fn is_valid(&self) -> bool {
        RegionCode::is_valid(self)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_text(s)
    }
}

impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyNorway;

    impl CountryLookup for OnlyNorway {
        fn is_known_country(&self, code: &str) -> bool {
            code == "NO"
        }
    }

    #[test]
    fn splits_on_first_hyphen() {
        let region = RegionCode::parse("GB-ENG-X");
        assert!(region.is_valid());
        assert_eq!(region.country().as_str(), "GB");
        assert_eq!(region.subdivision(), "ENG-X");
    }

    #[test]
    fn keeps_input_case() {
        let region = RegionCode::parse("us-ca");
        assert_eq!(region.as_str(), "us-ca");
        assert_eq!(region.country().as_str(), "US");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "USCA", "-CA", "US-", "ZZ-1", "USA-CA"] {
            assert_eq!(RegionCode::parse(input), RegionCode::UNDEFINED, "{input}");
        }
    }

    #[test]
    fn sentinel_accessors() {
        assert_eq!(RegionCode::UNDEFINED.country(), CountryCode::UNDEFINED);
        assert_eq!(RegionCode::UNDEFINED.subdivision(), "");
        assert_eq!(RegionCode::UNDEFINED.country_prefix(), "");
    }

    #[test]
    fn custom_country_lookup() {
        assert!(RegionCode::parse_with("NO-03", &OnlyNorway).is_valid());
        assert!(!RegionCode::parse_with("SE-AB", &OnlyNorway).is_valid());
    }

    #[test]
    fn prefix_survives_custom_lookup() {
        struct Anything;

        impl CountryLookup for Anything {
            fn is_known_country(&self, _code: &str) -> bool {
                true
            }
        }

        let region = RegionCode::parse_with("xk-07", &Anything);
        assert!(region.is_valid());
        assert_eq!(region.country_prefix(), "xk");
        assert_eq!(region.subdivision(), "07");
        assert_eq!(region.country(), CountryCode::UNDEFINED);
    }
}
