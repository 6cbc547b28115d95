// src/config.rs
//! Generator configuration, loadable from TOML.

use serde::Deserialize;

use crate::error::Result;
use crate::registry::Precedence;

pub const DEFAULT_PRANK: &str = "April Fools!";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Returned when no factory answers a role.
    pub default_prank: String,
    pub precedence: Precedence,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_prank: DEFAULT_PRANK.to_string(),
            precedence: Precedence::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config document. Missing keys fall back to their defaults;
    /// unknown keys are rejected.
    ///
    /// ```toml
    /// default_prank = "Gotcha!"
    /// precedence = "earliest-first"
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_is_default() {
        let cfg = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GeneratorConfig::default());
        assert_eq!(cfg.default_prank, "April Fools!");
        assert_eq!(cfg.precedence, Precedence::LatestFirst);
    }

    #[test]
    fn keys_override_defaults() {
        let cfg = GeneratorConfig::from_toml_str(
            "default_prank = \"Gotcha!\"\nprecedence = \"earliest-first\"\n",
        )
        .unwrap();
        assert_eq!(cfg.default_prank, "Gotcha!");
        assert_eq!(cfg.precedence, Precedence::EarliestFirst);
    }

    #[test]
    fn misspelled_key_is_a_config_error() {
        let err = GeneratorConfig::from_toml_str("default_prnk = \"Gotcha\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_precedence_is_a_config_error() {
        let err = GeneratorConfig::from_toml_str("precedence = \"random\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
