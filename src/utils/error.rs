use crate::domain::model::GtinKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// GS1 prefix ranges that are reserved and never valid for trade items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictedPrefix {
    /// GS1 Lite / restricted circulation: 02, 03, 04 and 2.
    #[serde(rename = "restricted prefix 02/04/2")]
    RestrictedCirculation,
    #[serde(rename = "coupon prefix 98-99")]
    Coupon98To99,
    #[serde(rename = "coupon prefix 05")]
    Coupon05,
}

impl RestrictedPrefix {
    pub fn reason(&self) -> &'static str {
        match self {
            RestrictedPrefix::RestrictedCirculation => "restricted prefix 02/04/2",
            RestrictedPrefix::Coupon98To99 => "coupon prefix 98-99",
            RestrictedPrefix::Coupon05 => "coupon prefix 05",
        }
    }
}

impl fmt::Display for RestrictedPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtinError {
    #[error("Invalid length: {length} (expected 8, 12, 13 or 14 digits)")]
    InvalidLength { length: usize },

    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    #[error("Invalid check digit: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: u8, found: u8 },

    #[error("GS1 {0}")]
    RestrictedPrefix(RestrictedPrefix),

    #[error("Unsupported GTIN kind: {kind}")]
    UnsupportedKind { kind: GtinKind },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

impl GtinError {
    /// The restriction behind a `RestrictedPrefix` failure, if that is what this is.
    pub fn restriction(&self) -> Option<RestrictedPrefix> {
        match self {
            GtinError::RestrictedPrefix(reason) => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GtinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_prefix_messages() {
        let err = GtinError::RestrictedPrefix(RestrictedPrefix::Coupon05);
        assert_eq!(err.to_string(), "GS1 coupon prefix 05");
        assert_eq!(err.restriction(), Some(RestrictedPrefix::Coupon05));
        assert_eq!(
            RestrictedPrefix::RestrictedCirculation.to_string(),
            "restricted prefix 02/04/2"
        );
    }

    #[test]
    fn test_other_errors_have_no_restriction() {
        let err = GtinError::InvalidLength { length: 9 };
        assert!(err.restriction().is_none());
        assert!(err.to_string().contains('9'));
    }
}
