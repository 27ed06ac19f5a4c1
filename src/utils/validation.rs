use crate::core::{check_digit, prefix};
use crate::domain::model::Gtin;
use crate::utils::error::{GtinError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Full validation: the check digit, then the GS1 prefix.
impl Validate for Gtin {
    fn validate(&self) -> Result<()> {
        check_digit::check_check_digit(self)?;
        prefix::check_prefix(self)
    }
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(GtinError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;
    use crate::utils::error::RestrictedPrefix;

    #[test]
    fn test_validate_gtin() {
        assert!(normalize("08719076050360").unwrap().validate().is_ok());
        assert!(matches!(
            normalize("08719076050361").unwrap().validate(),
            Err(GtinError::CheckDigitMismatch { .. })
        ));
        assert_eq!(
            normalize("5012345678900").unwrap().validate(),
            Err(GtinError::RestrictedPrefix(RestrictedPrefix::Coupon05))
        );
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("kinds", &[1]).is_ok());
        assert!(validate_non_empty::<u8>("kinds", &[]).is_err());
    }
}
