//! Interchange adapters shared by every code type.
//!
//! Each code type is parsed totally (unknown input yields its undefined
//! sentinel), so validity is only enforced here, at the boundary where a
//! value enters from text or from a storage layer:
//!
//! - **Text**: `Display` renders the wrapped string, [`decode_text`] parses
//!   and rejects sentinel results.
//! - **Storage**: [`StorageCodec`] converts to and from a [`StorageValue`]
//!   scalar. Only `Text` and `Bytes` scalars can hold a code.
//!
//! # Example
//!
//! ```
//! use iso_codes::{CurrencyCode, StorageCodec, StorageValue};
//!
//! let stored = CurrencyCode::parse("eur").to_storage();
//! assert_eq!(stored, StorageValue::Text("EUR".to_string()));
//!
//! let loaded = CurrencyCode::from_storage(&StorageValue::Bytes(b"usd".to_vec())).unwrap();
//! assert_eq!(loaded.as_str(), "USD");
//! ```

use std::fmt;

use crate::error::{CodeKind, IsoError, Result};

/// Common surface of the ISO code value types.
pub trait IsoCode: Sized {
    /// Registry the code belongs to, used in decode errors.
    const KIND: CodeKind;

    /// Parses free-form input, returning the undefined sentinel on mismatch.
    fn parse(input: &str) -> Self;

    /// Returns true unless this is the undefined sentinel.
    fn is_valid(&self) -> bool;

    /// Returns the wrapped code string (empty for the sentinel).
    fn as_str(&self) -> &str;
}

/// Parses `text` and fails with [`IsoError::InvalidCode`] when it is not a
/// valid code of kind `T`.
pub fn decode_text<T: IsoCode>(text: &str) -> Result<T> {
    let code = T::parse(text);
    if code.is_valid() {
        Ok(code)
    } else {
        tracing::debug!(kind = %T::KIND, value = text, "rejected invalid code");
        Err(IsoError::invalid(T::KIND, text))
    }
}

/// A scalar as handed over by a storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    /// SQL `NULL` or an absent value.
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for StorageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageValue::Null => f.write_str("<nil>"),
            StorageValue::Integer(value) => write!(f, "{value}"),
            StorageValue::Float(value) => write!(f, "{value}"),
            StorageValue::Text(value) => f.write_str(value),
            StorageValue::Bytes(value) => f.write_str(&String::from_utf8_lossy(value)),
        }
    }
}

/// Conversion between a code type and a [`StorageValue`].
pub trait StorageCodec: Sized {
    /// Encodes the code as a text scalar.
    fn to_storage(&self) -> StorageValue;

    /// Decodes a stored scalar.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::InvalidCode`] when the scalar is not text, is not
    /// UTF-8, or does not parse to a valid code.
    fn from_storage(value: &StorageValue) -> Result<Self>;
}

impl<T: IsoCode> StorageCodec for T {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Text(self.as_str().to_string())
    }

    fn from_storage(value: &StorageValue) -> Result<Self> {
        let text = match value {
            StorageValue::Text(text) => Some(text.as_str()),
            StorageValue::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        };
        match text {
            Some(text) => {
                decode_text(text).map_err(|_| IsoError::invalid(T::KIND, value.to_string()))
            }
            None => {
                tracing::debug!(kind = %T::KIND, value = %value, "rejected non-text storage value");
                Err(IsoError::invalid(T::KIND, value.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrencyCode, LanguageCode, RegionCode};

    #[test]
    fn decode_text_rejects_sentinel() {
        let err = decode_text::<CurrencyCode>("ABC").unwrap_err();
        assert_eq!(err.to_string(), "iso: invalid ISO currency code 'ABC'");
    }

    #[test]
    fn storage_accepts_text_and_bytes() {
        let from_text = LanguageCode::from_storage(&StorageValue::Text("de".to_string())).unwrap();
        let from_bytes = LanguageCode::from_storage(&StorageValue::Bytes(b"ger".to_vec())).unwrap();
        assert_eq!(from_text, from_bytes);
        assert_eq!(from_text.as_str(), "deu");
    }

    #[test]
    fn storage_rejects_other_scalars() {
        let err = RegionCode::from_storage(&StorageValue::Integer(42)).unwrap_err();
        assert_eq!(
            err,
            IsoError::InvalidCode {
                kind: CodeKind::Region,
                value: "42".to_string(),
            }
        );
        assert!(CurrencyCode::from_storage(&StorageValue::Null).is_err());
        assert!(CurrencyCode::from_storage(&StorageValue::Bytes(vec![0xff, 0xfe])).is_err());
    }

    #[test]
    fn storage_encodes_sentinel_as_empty_text() {
        assert_eq!(
            CurrencyCode::UNDEFINED.to_storage(),
            StorageValue::Text(String::new())
        );
    }
}
