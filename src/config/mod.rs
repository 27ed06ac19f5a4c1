use crate::domain::model::GtinKind;
use crate::utils::error::{GtinError, Result};
use crate::utils::validation::{validate_non_empty, Validate};
use serde::{Deserialize, Serialize};

/// Which checks [`GtinParser`](crate::core::parser::GtinParser) runs.
///
/// Every field is optional in TOML; by default every check runs and all four
/// kinds are accepted. A document narrowing that down:
///
/// ```toml
/// check_digit = true
/// check_prefix = false
/// allow_isbn_check_character = true
/// accepted_kinds = ["GTIN-13", "GTIN-14"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub check_digit: bool,
    pub check_prefix: bool,
    pub allow_isbn_check_character: bool,
    pub accepted_kinds: Vec<GtinKind>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_digit: true,
            check_prefix: true,
            allow_isbn_check_character: true,
            accepted_kinds: GtinKind::ALL.to_vec(),
        }
    }
}

impl ValidationConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| GtinError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GtinError::ConfigError {
            field: "toml_serialization".to_string(),
            message: e.to_string(),
        })
    }
}

impl Validate for ValidationConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("accepted_kinds", &self.accepted_kinds)
    }
}
