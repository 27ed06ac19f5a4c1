//! Parsing, validation and classification of Global Trade Item Numbers.
//!
//! GTIN-8, GTIN-12, GTIN-13 and GTIN-14 inputs are all normalized to 14
//! digits. The check digit, the GS1 prefix and the likely barcode carrier are
//! independent questions asked of the normalized value.
//!
//! ```
//! let gtin = gtin14::normalize("614141000012").unwrap();
//! assert_eq!(gtin.to_string(), "00614141000012");
//! assert!(gtin14::is_valid_check_digit(&gtin));
//! assert_eq!(gtin14::carrier_of(&gtin), gtin14::Carrier::UpcA);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::ValidationConfig;
pub use crate::core::{
    carrier::carrier_of,
    check_digit::{check_check_digit, compute_check_digit, is_valid_check_digit},
    classify::classify_type,
    normalize::normalize,
    parser::GtinParser,
    prefix::{check_prefix, is_legal_prefix},
};
pub use domain::model::{Carrier, Gtin, GtinKind, GtinReport, GTIN_LENGTH};
pub use utils::error::{GtinError, RestrictedPrefix, Result};
pub use utils::validation::Validate;
