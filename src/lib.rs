// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # suite-policy
//!
//! Cipher suite selection from OpenSSL-style rule strings.
//!
//! This crate provides a unified API over the workspace members:
//!
//! - **Selection Engine**: mechanism database, predicate algebra, rule parser
//!   and selector builder, free of crypto and network dependencies
//! - **Policy Documents**: named cipher policies in TOML or YAML
//! - **Rule Sources**: rule strings from the environment
//!
//! ## Quick Start
//!
//! ```rust
//! use suite_policy::{MechanismDatabase, Selector};
//!
//! let db = MechanismDatabase::builtin();
//! let selector = Selector::from_rule_string(&db, "HIGH:!aNULL:-kRSA:@STRENGTH").unwrap();
//! for name in selector.names() {
//!     println!("{}", name);
//! }
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`suites`] - Selection engine (from `core-suites`)
//! - [`utils`] - YAML policies, environment rule strings and the shared
//!   builtin database (from `app-utils`)
//!
//! ## Security
//!
//! Rule strings are untrusted input. Parsing enforces length, token and
//! nesting limits, and an unusable rule string is always an error: there is
//! no silent fallback to a weaker default selection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Selection engine module.
///
/// Re-exports `core_suites` for rule parsing and suite selection.
pub mod suites {
    pub use core_suites::*;
}

/// Application utilities module.
///
/// Re-exports `app_utils` for policy documents and rule string sources.
pub mod utils {
    pub use app_utils::*;
}

// Convenience re-exports at root level
pub use core_suites::{CipherPolicy, MechanismDatabase, Predicate, SelectionError, Selector, SelectorBuilder};
