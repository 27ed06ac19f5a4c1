use crate::domain::model::GtinKind;
use crate::utils::error::{GtinError, Result};

/// Maps an input to its GTIN kind by character count alone.
///
/// The characters themselves are not inspected here.
pub fn classify_type(input: &str) -> Result<GtinKind> {
    match input.chars().count() {
        8 => Ok(GtinKind::Gtin8),
        12 => Ok(GtinKind::Gtin12),
        13 => Ok(GtinKind::Gtin13),
        14 => Ok(GtinKind::Gtin14),
        length => {
            tracing::debug!("Rejected GTIN input of length {}", length);
            Err(GtinError::InvalidLength { length })
        }
    }
}
