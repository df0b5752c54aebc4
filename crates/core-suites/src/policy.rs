//! Named cipher policies loaded from configuration documents

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::database::MechanismDatabase;
use crate::error::{Result, SelectionError};
use crate::selector::Selector;
use crate::{MAX_POLICY_NAME_LENGTH, MAX_RULE_STRING_LENGTH};

/// A named rule string, as stored in configuration
///
/// # Security
///
/// The `#[serde(try_from)]` attribute ensures all deserialized policies are
/// validated against the name and rule string limits. The rule string itself
/// is only parsed by [`selector`](Self::selector), against a database.
///
/// # Example
///
/// ```
/// use core_suites::{CipherPolicy, MechanismDatabase};
///
/// let policy = CipherPolicy::from_toml(r#"
///     name = "modern"
///     suites = "TLSv1.3:ECDHE+AESGCM:ECDHE+CHACHA20"
/// "#).unwrap();
///
/// let db = MechanismDatabase::builtin();
/// let selector = policy.selector(&db).unwrap();
/// assert_eq!(selector.names()[0], "TLS_AES_128_GCM_SHA256");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CipherPolicyRaw")]
pub struct CipherPolicy {
    name: String,
    suites: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Raw policy document, validated into [`CipherPolicy`]
#[derive(Debug, Clone, Deserialize)]
struct CipherPolicyRaw {
    name: String,
    suites: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CipherPolicyRaw> for CipherPolicy {
    type Error = SelectionError;

    fn try_from(raw: CipherPolicyRaw) -> Result<Self> {
        let policy = Self {
            name: raw.name,
            suites: raw.suites,
            description: raw.description,
        };
        policy.validate()?;
        Ok(policy)
    }
}

impl CipherPolicy {
    /// Create a policy
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate)
    pub fn new(name: impl Into<String>, suites: impl Into<String>) -> Result<Self> {
        let policy = Self {
            name: name.into(),
            suites: suites.into(),
            description: None,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Attach a human-readable description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Policy name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rule string
    #[must_use]
    pub fn suites(&self) -> &str {
        &self.suites
    }

    /// Optional description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Check the document limits
    ///
    /// # Errors
    ///
    /// * `SelectionError::NameTooLong` - name exceeds `MAX_POLICY_NAME_LENGTH`
    /// * `SelectionError::InvalidPolicy` - empty name or empty rule string
    /// * `SelectionError::RuleStringTooLong` - rule string exceeds `MAX_RULE_STRING_LENGTH`
    pub fn validate(&self) -> Result<()> {
        if self.name.len() > MAX_POLICY_NAME_LENGTH {
            return Err(SelectionError::NameTooLong {
                max: MAX_POLICY_NAME_LENGTH,
                length: self.name.len(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(SelectionError::InvalidPolicy(
                "Policy name cannot be empty".to_string(),
            ));
        }
        if self.suites.trim().is_empty() {
            return Err(SelectionError::InvalidPolicy(
                "Policy suites cannot be empty".to_string(),
            ));
        }
        if self.suites.len() > MAX_RULE_STRING_LENGTH {
            return Err(SelectionError::RuleStringTooLong {
                max: MAX_RULE_STRING_LENGTH,
                length: self.suites.len(),
            });
        }
        Ok(())
    }

    /// Evaluate the rule string against `db`
    ///
    /// # Errors
    ///
    /// Any parse error, or `SelectionError::EmptySelection`
    pub fn selector(&self, db: &MechanismDatabase) -> Result<Selector> {
        Selector::from_rule_string(db, &self.suites)
    }

    /// Deserialize a policy from TOML
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::TomlError` for malformed TOML or a document
    /// violating the limits
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let policy: Self = toml::from_str(toml_str)?;
        Ok(policy)
    }

    /// Serialize the policy to TOML
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::SerializationError` if TOML serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SelectionError::SerializationError(e.to_string()))
    }
}
