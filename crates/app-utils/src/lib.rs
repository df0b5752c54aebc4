//! # app-utils
//!
//! Utility modules for cipher policy documents and rule string sources.
//!
//! This crate provides non-core features:
//! - YAML cipher policy parsing
//! - Rule strings from the environment
//! - Process-wide builtin mechanism database

#![forbid(unsafe_code)]

pub mod error;

pub mod yaml {
    //! YAML cipher policy document parsing and serialization
    use crate::error::{Error, Result};
    use core_suites::{CipherPolicy, SelectionError};
    use serde::{Deserialize, Serialize};

    /// Trait for policy parsers (extensible to JSON, TOML, etc.)
    pub trait PolicyParser {
        /// Parse a policy from a string
        fn parse(&self, input: &str) -> std::result::Result<CipherPolicy, SelectionError>;
    }

    /// YAML parser implementation
    pub struct YamlParser;

    impl PolicyParser for YamlParser {
        fn parse(&self, input: &str) -> std::result::Result<CipherPolicy, SelectionError> {
            let policy: CipherPolicy = serde_yaml::from_str(input).map_err(|e| {
                SelectionError::SerializationError(format!("YAML parse error: {}", e))
            })?;
            policy.validate()?;
            Ok(policy)
        }
    }

    /// TOML parser implementation
    pub struct TomlParser;

    impl PolicyParser for TomlParser {
        fn parse(&self, input: &str) -> std::result::Result<CipherPolicy, SelectionError> {
            CipherPolicy::from_toml(input)
        }
    }

    /// Serialize a value to YAML
    pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
        serde_yaml::to_string(value).map_err(|e| Error::YamlParseError(e.to_string()))
    }

    /// Deserialize from YAML
    pub fn from_yaml<'a, T: Deserialize<'a>>(input: &'a str) -> Result<T> {
        serde_yaml::from_str(input).map_err(|e| Error::YamlParseError(e.to_string()))
    }
}

pub mod env {
    //! Rule strings provided through environment variables
    //!
    //! An unset variable is reported as `None` so the caller decides what to
    //! do; nothing here falls back to a default selection.

    use crate::error::{Error, Result};
    use core_suites::{MechanismDatabase, Selector};
    use std::env::VarError;

    /// Variable consulted by [`rule_string_from_default_env`]
    pub const DEFAULT_RULE_STRING_VAR: &str = "SUITESEL_CIPHER_SUITES";

    /// Read a rule string from `var`
    ///
    /// # Errors
    ///
    /// Returns `Error::Env` if the variable is set but not valid UTF-8
    pub fn rule_string_from_env(var: &str) -> Result<Option<String>> {
        match std::env::var(var) {
            Ok(value) => {
                tracing::debug!(var, rule = %value, "read cipher rule string from environment");
                Ok(Some(value))
            }
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::Env {
                var: var.to_string(),
            }),
        }
    }

    /// Read a rule string from [`DEFAULT_RULE_STRING_VAR`]
    ///
    /// # Errors
    ///
    /// Same as [`rule_string_from_env`]
    pub fn rule_string_from_default_env() -> Result<Option<String>> {
        rule_string_from_env(DEFAULT_RULE_STRING_VAR)
    }

    /// Build a selector from the rule string in `var`, if set
    ///
    /// # Errors
    ///
    /// `Error::Env` for a non-UTF-8 value, `Error::Selection` if the rule
    /// string does not parse or selects nothing
    pub fn selector_from_env(db: &MechanismDatabase, var: &str) -> Result<Option<Selector>> {
        rule_string_from_env(var)?
            .map(|rule| Selector::from_rule_string(db, &rule).map_err(Error::from))
            .transpose()
    }
}

pub mod database {
    //! Process-wide builtin mechanism database

    use core_suites::MechanismDatabase;
    use std::sync::OnceLock;

    static BUILTIN: OnceLock<MechanismDatabase> = OnceLock::new();

    /// Shared builtin catalog, built on first use
    pub fn builtin() -> &'static MechanismDatabase {
        BUILTIN.get_or_init(|| {
            let db = MechanismDatabase::builtin();
            tracing::debug!(entries = db.len(), "initialised builtin mechanism database");
            db
        })
    }
}

/// Re-export commonly used types
pub use error::{Error, Result};
pub use yaml::{PolicyParser, TomlParser, YamlParser};
