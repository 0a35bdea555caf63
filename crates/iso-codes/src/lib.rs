//! Typed ISO code lookups and formatting.
//!
//! This crate provides validated value types for three standards:
//!
//! - **ISO 4217** currencies ([`CurrencyCode`]) with locale-style monetary
//!   formatting ([`CurrencyFormatOptions`], [`format_amount`])
//! - **ISO 639** languages ([`LanguageCode`]), normalizing 639-1, 639-2/B
//!   and 639-2/T input to the terminology code
//! - **ISO 3166-2** regions ([`RegionCode`]), validated against the
//!   ISO 3166-1 country table ([`CountryCode`])
//!
//! # Parsing and validity
//!
//! `parse` never fails. Unrecognized input yields the type's `UNDEFINED`
//! sentinel, and callers check `is_valid()`. The interchange adapters
//! (`FromStr`, serde, [`StorageCodec`]) are the strict boundary and return
//! [`IsoError::InvalidCode`] instead.
//!
//! ```
//! use iso_codes::{CurrencyCode, IsoError, LanguageCode, RegionCode};
//!
//! assert!(!CurrencyCode::parse("ABC").is_valid());
//! assert!(matches!("ABC".parse::<CurrencyCode>(), Err(IsoError::InvalidCode { .. })));
//!
//! assert_eq!(LanguageCode::parse("fre"), LanguageCode::parse("fr"));
//! assert_eq!(RegionCode::parse("US-CA").country().as_str(), "US");
//! ```
//!
//! All lookup tables are immutable statics indexed lazily on first use and
//! may be read from any number of threads.

pub mod codec;
pub mod country;
pub mod currency;
pub mod error;
pub mod language;
pub mod region;

pub use codec::{IsoCode, StorageCodec, StorageValue, decode_text};
pub use country::CountryCode;
pub use currency::{CurrencyCode, CurrencyFormatOptions, CurrencyMetadata, format_amount};
pub use error::{CodeKind, IsoError, Result};
pub use language::LanguageCode;
pub use region::{CountryLookup, Iso3166Countries, RegionCode};
