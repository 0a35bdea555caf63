//! Error types for decoding ISO codes at interchange boundaries.

use std::fmt;

use thiserror::Error;

/// The code registry a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// ISO 4217 currency code.
    Currency,
    /// ISO 639-1 / 639-2 (B or T) language code.
    Language,
    /// ISO 3166-2 country subdivision code.
    Region,
    /// ISO 3166-1 alpha-2 country code.
    Country,
}

impl CodeKind {
    /// Returns the registry name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Currency => "currency",
            CodeKind::Language => "639-1/2BT:2002 language",
            CodeKind::Region => "region",
            CodeKind::Country => "country",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when text or stored values do not decode to a valid code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IsoError {
    /// The raw value does not parse to a code of the given kind.
    #[error("iso: invalid ISO {kind} code '{value}'")]
    InvalidCode { kind: CodeKind, value: String },
}

impl IsoError {
    pub(crate) fn invalid(kind: CodeKind, value: impl Into<String>) -> Self {
        IsoError::InvalidCode {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, IsoError>;
