use crate::domain::model::{Gtin, GTIN_LENGTH};
use crate::utils::error::{GtinError, Result};

// https://www.gs1.org/services/how-calculate-check-digit-manually
const WEIGHTS: [u32; GTIN_LENGTH - 1] = [3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3];

/// The check digit the first 13 digits call for.
pub fn compute_check_digit(gtin: &Gtin) -> u8 {
    let checksum: u32 = gtin
        .digits()
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    tracing::trace!("Weighted checksum of {} is {}", gtin, checksum);

    // Distance up to the next multiple of ten, zero when already on one.
    ((10 - checksum % 10) % 10) as u8
}

pub fn check_check_digit(gtin: &Gtin) -> Result<()> {
    let expected = compute_check_digit(gtin);
    let found = gtin.check_digit();
    if expected != found {
        tracing::debug!(
            "Check digit mismatch for {}: expected {}, found {}",
            gtin,
            expected,
            found
        );
        return Err(GtinError::CheckDigitMismatch { expected, found });
    }
    Ok(())
}

pub fn is_valid_check_digit(gtin: &Gtin) -> bool {
    check_check_digit(gtin).is_ok()
}
