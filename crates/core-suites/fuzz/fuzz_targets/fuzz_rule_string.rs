//! Fuzz target for the rule string parser and selector builder
//!
//! This target bombards the parser with malicious rule strings, specifically:
//! - Long conjunction chains (`a+b+c+...`)
//! - Stacked operator prefixes and stray `@` directives
//! - Random binary data interpreted as strings
//!
//! The parser must return Ok or Err for every input, never panic, and any
//! selector it produces must be non-empty and duplicate-free.

#![no_main]

use core_suites::{MechanismDatabase, RuleSet, Selector};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

fuzz_target!(|data: &str| {
    let db = MechanismDatabase::builtin();

    if let Ok(rules) = RuleSet::parse(&db, data) {
        // Rendering must never panic, even for rules without a directive form
        let _ = rules.to_string();
    }

    if let Ok(selector) = Selector::from_rule_string(&db, data) {
        assert!(!selector.is_empty());
        let unique: BTreeSet<&str> = selector.iter().collect();
        assert_eq!(unique.len(), selector.len(), "duplicate suite in selection");
    }
});
