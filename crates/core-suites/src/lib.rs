// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # core-suites
//!
//! Pure cipher suite selection engine with zero dependencies on crypto or network layers.
//!
//! This crate turns an OpenSSL-style rule string into a deterministic,
//! ordered, duplicate-free list of accepted suite names:
//! - Mechanism database (the fixed universe of known suites)
//! - Predicate algebra over suite attributes
//! - Rule string parser
//! - Selector builder and immutable selectors
//! - Named cipher policies (TOML)
//!
//! ```
//! use core_suites::{MechanismDatabase, Selector};
//!
//! let db = MechanismDatabase::builtin();
//! let selector = Selector::from_rule_string(&db, "HIGH:!aNULL:!kRSA:@STRENGTH").unwrap();
//!
//! assert!(selector.contains("ECDHE-RSA-AES256-GCM-SHA384"));
//! assert!(!selector.contains("AES128-SHA"));
//! ```
//!
//! ## Security
//!
//! - Strict limits on rule strings to prevent algorithmic DoS
//!   - MAX_RULE_STRING_LENGTH = 4096
//!   - MAX_RULES = 256
//!   - MAX_PREDICATE_DEPTH = 32
//! - No silent fallback: an unparsable or empty selection is an error

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
mod catalog;
pub mod database;
pub mod error;
pub mod keywords;
pub mod policy;
pub mod predicate;
pub mod rule;
pub mod selector;

pub use builder::SelectorBuilder;
pub use database::{
    Authentication, Digest, Encryption, Entry, KeyExchange, MechanismDatabase, Protocol, Strength,
};
/// Re-export commonly used types
pub use error::{ParseErrorKind, Result, SelectionError};
pub use policy::CipherPolicy;
pub use predicate::Predicate;
pub use rule::{Operation, Rule, RuleSet};
pub use selector::Selector;

/// Maximum length of a rule string in bytes (DoS mitigation)
pub const MAX_RULE_STRING_LENGTH: usize = 4096;

/// Maximum number of rules per rule string or builder (DoS mitigation)
pub const MAX_RULES: usize = 256;

/// Maximum number of `+`-joined terms in one token (DoS mitigation)
pub const MAX_TERMS_PER_TOKEN: usize = 16;

/// Maximum nesting depth of a predicate tree (DoS mitigation)
pub const MAX_PREDICATE_DEPTH: usize = 32;

/// Maximum length for policy name (DoS mitigation)
pub const MAX_POLICY_NAME_LENGTH: usize = 128;

/// Rule string used by [`Selector::openssl_default`]
pub const DEFAULT_RULE_STRING: &str = "DEFAULT";
