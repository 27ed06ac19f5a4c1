use crate::core::classify::classify_type;
use crate::domain::model::{Gtin, GTIN_LENGTH};
use crate::utils::error::{GtinError, Result};

/// Value stored for the ISBN `X` check character.
pub const ISBN_X: u8 = 10;

/// Reads an 8, 12, 13 or 14 character string into a 14-digit [`Gtin`].
///
/// The input is right-aligned: its last character lands on the check digit
/// slot and the leading slots it does not reach stay zero. Accepts `0`-`9`
/// and `X` (value 10) anywhere in the input.
pub fn normalize(input: &str) -> Result<Gtin> {
    let kind = classify_type(input)?;
    let offset = GTIN_LENGTH - kind.digit_count();

    let mut digits = [0u8; GTIN_LENGTH];
    for (position, character) in input.chars().enumerate() {
        let value = digit_value(character).ok_or_else(|| {
            tracing::debug!(
                "Rejected {} input: invalid digit {:?} at position {}",
                kind,
                character,
                position
            );
            GtinError::InvalidDigit {
                character,
                position,
            }
        })?;
        digits[offset + position] = value;
    }

    Ok(Gtin::from_parts(kind, digits))
}

fn digit_value(character: char) -> Option<u8> {
    match character {
        '0'..='9' => Some(character as u8 - b'0'),
        'X' => Some(ISBN_X),
        _ => None,
    }
}
