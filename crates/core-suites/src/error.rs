//! Error types for core-suites

use alloc::string::String;
use core::fmt;

/// Result type alias for selection operations
pub type Result<T> = core::result::Result<T, SelectionError>;

/// Reason a rule-string token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Empty segment between separators (e.g. `HIGH::MEDIUM`)
    EmptyToken,
    /// Bare word that is neither a keyword nor a suite name
    UnknownKeyword,
    /// More than one operator prefix (e.g. `+-kRSA`, `!!EXPORT`)
    ConflictingOperators,
    /// Operator or `+` conjunction with nothing after it
    MissingTerm,
    /// `@` directive other than `@STRENGTH`
    UnknownDirective,
    /// Too many `+`-joined terms in a single token
    TooManyTerms,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "empty token"),
            Self::UnknownKeyword => write!(f, "unknown keyword"),
            Self::ConflictingOperators => write!(f, "conflicting operator prefixes"),
            Self::MissingTerm => write!(f, "operator without a term"),
            Self::UnknownDirective => write!(f, "unknown directive"),
            Self::TooManyTerms => write!(f, "too many terms in one token"),
        }
    }
}

/// Errors that can occur while parsing rule strings or building selectors
#[derive(Debug)]
pub enum SelectionError {
    /// Malformed or unknown token in a rule string
    Parse {
        /// Offending token text
        token: String,
        /// Byte offset of the token in the rule string
        position: usize,
        /// Why the token was rejected
        reason: ParseErrorKind,
    },

    /// The evaluated rules accept no suite at all
    EmptySelection {
        /// Effective rule string that produced the empty result
        rule: String,
    },

    // ===== DoS Prevention Errors =====
    /// Rule string exceeds maximum length
    RuleStringTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        length: usize,
    },

    /// Rule string has more tokens than allowed
    TooManyRules {
        /// Maximum allowed rules
        max: usize,
        /// Attempted number of rules
        attempted: usize,
    },

    /// Predicate tree is nested deeper than allowed
    PredicateTooDeep {
        /// Maximum allowed depth
        max: usize,
    },

    // ===== Catalog Errors =====
    /// Two catalog entries share a standard or OpenSSL name
    DuplicateEntry(String),

    // ===== Policy Document Errors =====
    /// Invalid cipher policy document
    InvalidPolicy(String),

    /// Policy name exceeds maximum length
    NameTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual name length
        length: usize,
    },

    /// Serialization error
    SerializationError(String),

    /// TOML parsing error
    TomlError(toml::de::Error),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                token,
                position,
                reason,
            } => write!(
                f,
                "Invalid cipher rule token '{}' at position {}: {}",
                token, position, reason
            ),
            Self::EmptySelection { rule } => {
                write!(f, "Cipher rule '{}' selects no cipher suites", rule)
            }
            Self::RuleStringTooLong { max, length } => write!(
                f,
                "Cipher rule string exceeds maximum {} characters (length: {})",
                max, length
            ),
            Self::TooManyRules { max, attempted } => write!(
                f,
                "Cipher rule string exceeds maximum {} tokens (attempted: {})",
                max, attempted
            ),
            Self::PredicateTooDeep { max } => {
                write!(f, "Predicate exceeds maximum depth of {}", max)
            }
            Self::DuplicateEntry(name) => write!(f, "Duplicate catalog entry: {}", name),
            Self::InvalidPolicy(msg) => write!(f, "Invalid cipher policy: {}", msg),
            Self::NameTooLong { max, length } => write!(
                f,
                "Policy name exceeds maximum {} characters (length: {})",
                max, length
            ),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Self::TomlError(e) => write!(f, "TOML parsing error: {}", e),
        }
    }
}

impl From<toml::de::Error> for SelectionError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlError(err)
    }
}

impl core::error::Error for SelectionError {}
