use crate::core::{carrier, check_digit, normalize, prefix};
use crate::utils::error::{GtinError, RestrictedPrefix};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every GTIN can be written with this many digits using zero padding.
pub const GTIN_LENGTH: usize = 14;

/// GTIN category, decided by the length of the input it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GtinKind {
    #[serde(rename = "GTIN-8")]
    Gtin8,
    #[serde(rename = "GTIN-12")]
    Gtin12,
    #[serde(rename = "GTIN-13")]
    Gtin13,
    #[serde(rename = "GTIN-14")]
    Gtin14,
}

impl GtinKind {
    pub const ALL: [GtinKind; 4] = [
        GtinKind::Gtin8,
        GtinKind::Gtin12,
        GtinKind::Gtin13,
        GtinKind::Gtin14,
    ];

    /// Number of significant digits for this kind.
    pub fn digit_count(&self) -> usize {
        match self {
            GtinKind::Gtin8 => 8,
            GtinKind::Gtin12 => 12,
            GtinKind::Gtin13 => 13,
            GtinKind::Gtin14 => 14,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GtinKind::Gtin8 => "GTIN-8",
            GtinKind::Gtin12 => "GTIN-12",
            GtinKind::Gtin13 => "GTIN-13",
            GtinKind::Gtin14 => "GTIN-14",
        }
    }
}

impl fmt::Display for GtinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Barcode symbology a GTIN is most likely printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "ITF-14")]
    Itf14,
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "UPC-A")]
    UpcA,
    #[serde(rename = "EAN-8")]
    Ean8,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Carrier {
    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Itf14 => "ITF-14",
            Carrier::Ean13 => "EAN-13",
            Carrier::UpcA => "UPC-A",
            Carrier::Ean8 => "EAN-8",
            Carrier::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A GTIN right-aligned into 14 digits.
///
/// Index 0 is the most significant digit and index 13 the check digit. A slot
/// may hold 10, which stands for an ISBN `X` check character. The only way to
/// obtain a value is [`normalize`](crate::core::normalize::normalize) (or
/// `str::parse`), so the digits are never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gtin {
    kind: GtinKind,
    digits: [u8; GTIN_LENGTH],
}

impl Gtin {
    pub(crate) fn from_parts(kind: GtinKind, digits: [u8; GTIN_LENGTH]) -> Self {
        Self { kind, digits }
    }

    pub fn kind(&self) -> GtinKind {
        self.kind
    }

    pub fn digits(&self) -> &[u8; GTIN_LENGTH] {
        &self.digits
    }

    /// The trailing digit as supplied, not the computed one.
    pub fn check_digit(&self) -> u8 {
        self.digits[GTIN_LENGTH - 1]
    }

    /// Packaging level (1-8) or variable measure (9) indicator of a GTIN-14.
    pub fn indicator(&self) -> Option<u8> {
        match self.kind {
            GtinKind::Gtin14 => Some(self.digits[0]),
            _ => None,
        }
    }

    /// GTIN-13 in the 978/979 "Bookland" range, i.e. an ISBN-13.
    pub fn is_bookland(&self) -> bool {
        self.kind == GtinKind::Gtin13
            && self.digits[1] == 9
            && self.digits[2] == 7
            && matches!(self.digits[3], 8 | 9)
    }

    pub fn is_valid(&self) -> bool {
        check_digit::is_valid_check_digit(self)
    }

    pub fn is_legal(&self) -> bool {
        prefix::is_legal_prefix(self)
    }

    pub fn carrier(&self) -> Carrier {
        carrier::carrier_of(self)
    }

    pub fn report(&self) -> GtinReport {
        GtinReport {
            gtin: self.to_string(),
            kind: self.kind,
            carrier: self.carrier(),
            valid: self.is_valid(),
            legal: self.is_legal(),
            restriction: prefix::check_prefix(self).err().and_then(|e| e.restriction()),
        }
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            let ch = match d {
                10 => 'X',
                d => char::from(b'0' + d),
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize::normalize(s)
    }
}

/// Serializable summary of everything the crate can say about one GTIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GtinReport {
    pub gtin: String,
    pub kind: GtinKind,
    pub carrier: Carrier,
    pub valid: bool,
    pub legal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<RestrictedPrefix>,
}
