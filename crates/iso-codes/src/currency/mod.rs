//! ISO 4217 currency codes.
//!
//! [`CurrencyCode`] wraps a normalized uppercase code from the ISO 4217 set.
//! Per-currency display rules live in [`CurrencyMetadata`]; codes without a
//! record fall back to [`CurrencyMetadata::fallback`], so symbol lookup and
//! formatting never fail.
//!
//! # Example
//!
//! ```
//! use iso_codes::{CurrencyCode, CurrencyFormatOptions};
//!
//! let usd = CurrencyCode::parse("usd");
//! assert!(usd.is_valid());
//! assert_eq!(usd.format(1234.5, &CurrencyFormatOptions::default()), "$1,234.50");
//! ```

mod format;
mod table;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, IsoCode};
use crate::error::{CodeKind, IsoError};

pub use format::{CurrencyFormatOptions, format_amount};

static CODE_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let set: HashSet<_> = table::ISO_4217_CODES.iter().copied().collect();
    tracing::debug!(count = set.len(), "indexed ISO 4217 codes");
    set
});

static METADATA: LazyLock<HashMap<&'static str, CurrencyMetadata<'static>>> =
    LazyLock::new(|| {
        let map: HashMap<_, _> = table::CURRENCY_METADATA
            .iter()
            .map(|record| (record.code, *record))
            .collect();
        tracing::debug!(count = map.len(), "indexed currency metadata");
        map
    });

/// Display and subunit rules for one currency.
///
/// Records in the static table borrow `'static` data. The fallback record
/// built for an unknown code borrows that code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMetadata<'a> {
    /// Alphabetic code this record describes.
    pub code: &'a str,
    /// ISO 4217 numeric code (0 when none is assigned).
    pub numeric: u16,
    /// English display name.
    pub name: &'a str,
    /// Primary symbol used in formatting.
    pub symbol: &'a str,
    /// Whether the symbol is placed before the amount.
    pub symbol_first: bool,
    /// Other symbols in common use. Informational only.
    pub alternate_symbols: &'a [&'a str],
    /// Separator between groups of three integer digits.
    pub thousands_separator: char,
    /// Separator between the integer and fractional part.
    pub decimal_mark: char,
    /// Name of the minor unit; empty when the currency has none.
    pub subunit: &'a str,
    /// Number of subunits per major unit.
    pub subunit_to_unit: u32,
    /// Digits rendered after the decimal mark.
    pub subunit_precision: u8,
    /// HTML entity for the symbol, if one is defined.
    pub html_entity: Option<&'a str>,
}

impl<'a> CurrencyMetadata<'a> {
    /// Synthetic record for a code without metadata.
    ///
    /// Uses the code as name and symbol (placed after the amount), comma
    /// grouping, a dot decimal mark and two-digit precision with no named
    /// subunit.
    pub fn fallback(code: &'a str) -> Self {
        Self {
            code,
            numeric: 0,
            name: code,
            symbol: code,
            symbol_first: false,
            alternate_symbols: &[],
            thousands_separator: ',',
            decimal_mark: '.',
            subunit: "",
            subunit_to_unit: 100,
            subunit_precision: 2,
            html_entity: None,
        }
    }

    /// Returns true if amounts carry a named fractional part.
    pub fn has_subunit(&self) -> bool {
        !self.subunit.is_empty()
    }
}

/// Looks up metadata for a raw code, falling back to the synthetic record.
///
/// The lookup is exact: callers pass an already normalized (uppercase) code.
pub fn metadata(code: &str) -> CurrencyMetadata<'_> {
    match METADATA.get(code) {
        Some(record) => *record,
        None => CurrencyMetadata::fallback(code),
    }
}

/// Returns the display symbol for a raw code, or the code itself when no
/// metadata exists.
pub fn symbol_for(code: &str) -> &str {
    metadata(code).symbol
}

/// An ISO 4217 currency code, or the undefined sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// The undefined sentinel.
    pub const UNDEFINED: CurrencyCode = CurrencyCode("");

    /// Parses a currency code, ignoring case.
    ///
    /// Only exact members of the ISO 4217 set are accepted; anything else
    /// (including surrounding whitespace) yields [`CurrencyCode::UNDEFINED`].
    pub fn parse(input: &str) -> Self {
        let upper = input.to_uppercase();
        match CODE_SET.get(upper.as_str()) {
            Some(&code) => CurrencyCode(code),
            None => {
                tracing::trace!(input, "unrecognized currency code");
                Self::UNDEFINED
            }
        }
    }

    /// Returns true unless this is the undefined sentinel.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterates every ISO 4217 code in alphabetical order.
    pub fn all() -> impl Iterator<Item = CurrencyCode> {
        table::ISO_4217_CODES.iter().copied().map(CurrencyCode)
    }

    /// Metadata for this code, or the synthetic fallback record.
    pub fn metadata(&self) -> CurrencyMetadata<'static> {
        metadata(self.0)
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    pub fn numeric(&self) -> u16 {
        self.metadata().numeric
    }

    /// Display symbol, or the code itself when no metadata exists.
    pub fn symbol(&self) -> &'static str {
        self.metadata().symbol
    }

    pub fn alternate_symbols(&self) -> &'static [&'static str] {
        self.metadata().alternate_symbols
    }

    pub fn html_entity(&self) -> Option<&'static str> {
        self.metadata().html_entity
    }

    pub fn subunit(&self) -> &'static str {
        self.metadata().subunit
    }

    pub fn subunit_to_unit(&self) -> u32 {
        self.metadata().subunit_to_unit
    }

    pub fn subunit_precision(&self) -> u8 {
        self.metadata().subunit_precision
    }

    /// Renders `amount` as a monetary string for this currency.
    pub fn format(&self, amount: f64, options: &CurrencyFormatOptions) -> String {
        format_amount(amount, self.0, options)
    }
}

impl IsoCode for CurrencyCode {
    const KIND: CodeKind = CodeKind::Currency;

    fn parse(input: &str) -> Self {
        CurrencyCode::parse(input)
    }

    fn is_valid(&self) -> bool {
        CurrencyCode::is_valid(self)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_text(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(CurrencyCode::parse("eur"), CurrencyCode::parse("EUR"));
        assert_eq!(CurrencyCode::parse("eUr").as_str(), "EUR");
    }

    #[test]
    fn parse_rejects_unknown_and_padded_input() {
        assert_eq!(CurrencyCode::parse("XYZ"), CurrencyCode::UNDEFINED);
        assert_eq!(CurrencyCode::parse(" USD"), CurrencyCode::UNDEFINED);
        assert_eq!(CurrencyCode::parse(""), CurrencyCode::UNDEFINED);
        assert!(!CurrencyCode::parse("US").is_valid());
    }

    #[test]
    fn metadata_only_codes_do_not_parse() {
        assert!(!CurrencyCode::parse("BTC").is_valid());
        assert_eq!(metadata("BTC").subunit_precision, 8);
    }

    #[test]
    fn every_metadata_record_is_unique() {
        assert_eq!(METADATA.len(), table::CURRENCY_METADATA.len());
        assert_eq!(CODE_SET.len(), table::ISO_4217_CODES.len());
    }

    #[test]
    fn symbol_falls_back_to_code() {
        assert_eq!(CurrencyCode::parse("USD").symbol(), "$");
        assert_eq!(CurrencyCode::parse("EUR").symbol(), "€");
        // ISO code without a metadata record
        assert_eq!(CurrencyCode::parse("CHE").symbol(), "CHE");
        assert_eq!(symbol_for("XYZ"), "XYZ");
    }

    #[test]
    fn every_record_has_a_symbol() {
        for record in table::CURRENCY_METADATA {
            assert!(!record.symbol.is_empty(), "{}", record.code);
        }
        assert_eq!(CurrencyCode::parse("UZS").symbol(), "soʻm");
    }

    #[test]
    fn accessors_read_metadata() {
        let kwd = CurrencyCode::parse("KWD");
        assert_eq!(kwd.numeric(), 414);
        assert_eq!(kwd.name(), "Kuwaiti Dinar");
        assert_eq!(kwd.subunit(), "Fils");
        assert_eq!(kwd.subunit_to_unit(), 1000);
        assert_eq!(kwd.subunit_precision(), 3);
        assert_eq!(kwd.alternate_symbols(), &["K.D."]);
        assert_eq!(CurrencyCode::parse("EUR").html_entity(), Some("&#x20AC;"));
        assert_eq!(CurrencyCode::parse("AED").html_entity(), None);
    }

    #[test]
    fn fallback_record_shape() {
        let record = CurrencyMetadata::fallback("XYZ");
        assert_eq!(record.name, "XYZ");
        assert_eq!(record.symbol, "XYZ");
        assert!(!record.symbol_first);
        assert!(!record.has_subunit());
        assert_eq!(record.thousands_separator, ',');
        assert_eq!(record.decimal_mark, '.');
        assert_eq!(record.subunit_precision, 2);
    }
}
