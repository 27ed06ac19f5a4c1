use crate::config::ValidationConfig;
use crate::core::normalize::normalize;
use crate::core::{check_digit, prefix};
use crate::domain::model::Gtin;
use crate::utils::error::{GtinError, Result};
use crate::utils::validation::Validate;

/// Runs the checks a [`ValidationConfig`] enables, in order, and stops at the
/// first failure.
#[derive(Debug, Clone, Default)]
pub struct GtinParser {
    config: ValidationConfig,
}

impl GtinParser {
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<Gtin> {
        let gtin = normalize(input)?;

        if !self.config.accepted_kinds.contains(&gtin.kind()) {
            tracing::debug!("{} not accepted by configuration", gtin.kind());
            return Err(GtinError::UnsupportedKind { kind: gtin.kind() });
        }

        if !self.config.allow_isbn_check_character {
            if let Some(position) = input.chars().position(|c| c == 'X') {
                tracing::debug!("ISBN check character disabled, rejecting {}", input);
                return Err(GtinError::InvalidDigit {
                    character: 'X',
                    position,
                });
            }
        }

        if self.config.check_digit {
            check_digit::check_check_digit(&gtin)?;
        }
        if self.config.check_prefix {
            prefix::check_prefix(&gtin)?;
        }

        tracing::debug!("Accepted {} {}", gtin.kind(), gtin);
        Ok(gtin)
    }
}
