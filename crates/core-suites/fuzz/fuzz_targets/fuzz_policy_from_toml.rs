//! Fuzz target for CipherPolicy::from_toml
//!
//! This target tests that cipher policy deserialization handles arbitrary
//! TOML input without panicking, and that the document limits are enforced.

#![no_main]

use core_suites::{CipherPolicy, MAX_POLICY_NAME_LENGTH, MAX_RULE_STRING_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // CipherPolicy::from_toml should never panic on any input
    if let Ok(policy) = CipherPolicy::from_toml(data) {
        assert!(policy.name().len() <= MAX_POLICY_NAME_LENGTH, "Policy name exceeds limit");
        assert!(policy.suites().len() <= MAX_RULE_STRING_LENGTH, "Rule string exceeds limit");
        assert!(policy.validate().is_ok(), "Parsed policy failed validation");

        // Serialization of a valid policy must succeed
        assert!(policy.to_toml().is_ok());
    }
});
