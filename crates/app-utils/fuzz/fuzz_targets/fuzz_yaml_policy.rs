//! Fuzz target for YamlParser::parse
//!
//! This target tests YAML cipher policy parsing with arbitrary strings to verify:
//! - serde_yaml handles malformed YAML without panicking
//! - CipherPolicy::validate() limits hold on every parsed policy
//! - Rule strings from parsed policies evaluate without panicking

#![no_main]

use app_utils::yaml::{PolicyParser, YamlParser};
use core_suites::{MechanismDatabase, SelectionError, MAX_POLICY_NAME_LENGTH, MAX_RULE_STRING_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let parser = YamlParser;

    // Try to parse arbitrary YAML - should NEVER panic
    match parser.parse(data) {
        Ok(policy) => {
            assert!(
                policy.name().len() <= MAX_POLICY_NAME_LENGTH,
                "Policy name exceeds MAX_POLICY_NAME_LENGTH"
            );
            assert!(
                policy.suites().len() <= MAX_RULE_STRING_LENGTH,
                "Rule string exceeds MAX_RULE_STRING_LENGTH"
            );
            assert!(policy.validate().is_ok(), "Parsed policy failed validation");

            // Evaluation may fail, but must not panic
            let db = MechanismDatabase::builtin();
            if let Ok(selector) = policy.selector(&db) {
                assert!(!selector.is_empty());
            }
        }
        Err(SelectionError::NameTooLong { length, max }) => assert!(length > max),
        Err(SelectionError::RuleStringTooLong { length, max }) => assert!(length > max),
        Err(_) => {
            // YAML parse errors are expected for most random input
        }
    }
});
