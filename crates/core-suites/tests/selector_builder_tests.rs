//! Tests for the selector builder and selectors
//!
//! Operation semantics are checked against a small injected catalog so the
//! expected orderings can be written out by hand; the documented rule string
//! scenarios are also checked against the builtin catalog.

use core_suites::keywords::keyword;
use core_suites::{
    Authentication, Digest, Encryption, Entry, KeyExchange, MechanismDatabase, Predicate,
    Operation, Protocol, Rule, SelectionError, Selector, SelectorBuilder, Strength,
    MAX_PREDICATE_DEPTH, MAX_RULES,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

fn entry(
    name: &'static str,
    openssl_name: &'static str,
    key_exchange: KeyExchange,
    authentication: Authentication,
    encryption: Encryption,
    strength: Strength,
) -> Entry {
    Entry {
        name,
        openssl_name,
        id: 0,
        protocol: Protocol::TlsV1_2,
        key_exchange,
        authentication,
        encryption,
        digest: Digest::Sha256,
        export: strength == Strength::Export,
        strength,
        fips: false,
        key_bits: 128,
    }
}

/// A: high ECDHE, B: medium RSA, C: high RSA, D: export RSA, E: low anonymous DHE
fn fake_db() -> MechanismDatabase {
    use Authentication as Au;
    use Encryption as Enc;
    use KeyExchange as Kx;

    MechanismDatabase::from_entries(vec![
        entry("TLS_A", "A-1", Kx::Ecdhe, Au::Rsa, Enc::Aes128Gcm, Strength::High),
        entry("TLS_B", "B-1", Kx::Rsa, Au::Rsa, Enc::TripleDes, Strength::Medium),
        entry("TLS_C", "C-1", Kx::Rsa, Au::Rsa, Enc::Aes256, Strength::High),
        entry("TLS_D", "D-1", Kx::Rsa, Au::Rsa, Enc::Rc4, Strength::Export),
        entry("TLS_E", "E-1", Kx::Dhe, Au::Null, Enc::Des, Strength::Low),
    ])
    .unwrap()
}

fn select(db: &MechanismDatabase, rule: &str) -> Vec<&'static str> {
    Selector::from_rule_string(db, rule)
        .unwrap_or_else(|e| panic!("{}: {}", rule, e))
        .names()
        .to_vec()
}

fn hash_of(selector: &Selector) -> u64 {
    let mut hasher = DefaultHasher::new();
    selector.hash(&mut hasher);
    hasher.finish()
}

// ===== Operation semantics =====

#[test]
fn test_add_uses_canonical_order() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL"), ["TLS_A", "TLS_B", "TLS_C", "TLS_D", "TLS_E"]);
    assert_eq!(select(&db, "HIGH:MEDIUM"), ["TLS_A", "TLS_C", "TLS_B"]);
}

#[test]
fn test_add_does_not_duplicate_or_reorder() {
    let db = fake_db();
    assert_eq!(select(&db, "MEDIUM:ALL:MEDIUM"), ["TLS_B", "TLS_A", "TLS_C", "TLS_D", "TLS_E"]);
}

#[test]
fn test_remove_moves_matches_to_end() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:-kRSA"), ["TLS_A", "TLS_E", "TLS_B", "TLS_C", "TLS_D"]);
}

#[test]
fn test_remove_does_not_add() {
    let db = fake_db();
    assert_eq!(select(&db, "HIGH:-MEDIUM"), ["TLS_A", "TLS_C"]);
}

#[test]
fn test_add_after_remove_keeps_demoted_position() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:-kRSA:ALL"), select(&db, "ALL:-kRSA"));
    assert_eq!(select(&db, "ALL:-kRSA:kRSA"), select(&db, "ALL:-kRSA"));
}

#[test]
fn test_push_to_end_moves_then_appends() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:-kRSA:+HIGH"), ["TLS_E", "TLS_B", "TLS_D", "TLS_A", "TLS_C"]);
    assert_eq!(select(&db, "MEDIUM:+HIGH"), ["TLS_B", "TLS_A", "TLS_C"]);
    assert_eq!(select(&db, "+HIGH"), ["TLS_A", "TLS_C"]);
}

#[test]
fn test_delete_is_permanent() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:!EXPORT"), ["TLS_A", "TLS_B", "TLS_C", "TLS_E"]);
    assert_eq!(select(&db, "!EXPORT:ALL"), ["TLS_A", "TLS_B", "TLS_C", "TLS_E"]);
    assert_eq!(select(&db, "!kRSA:ALL:+kRSA:D-1"), ["TLS_A", "TLS_E"]);
}

#[test]
fn test_keep_only_intersects_without_excluding() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:&kRSA"), ["TLS_B", "TLS_C", "TLS_D"]);
    assert_eq!(select(&db, "ALL:&kRSA:ALL"), ["TLS_B", "TLS_C", "TLS_D", "TLS_A", "TLS_E"]);
}

#[test]
fn test_sort_by_strength_is_stable() {
    let db = fake_db();
    assert_eq!(select(&db, "ALL:@STRENGTH"), ["TLS_A", "TLS_C", "TLS_B", "TLS_E", "TLS_D"]);
    // Equal strengths keep their working-set order, not canonical order
    assert_eq!(select(&db, "TLS_C:ALL:@STRENGTH"), ["TLS_C", "TLS_A", "TLS_B", "TLS_E", "TLS_D"]);
}

#[test]
fn test_suite_names_select_single_entries() {
    let db = fake_db();
    assert_eq!(select(&db, "E-1:TLS_B:ALL"), ["TLS_E", "TLS_B", "TLS_A", "TLS_C", "TLS_D"]);
}

// ===== Vacuous rules =====

#[test]
fn test_always_false_rules_are_skipped() {
    let db = fake_db();
    let selector = SelectorBuilder::new(&db)
        .add(Predicate::True)
        .add(Predicate::strength(std::iter::empty()))
        .remove(Predicate::False)
        .delete(Predicate::False)
        .push_to_end(Predicate::name(std::iter::empty::<&str>()))
        .build()
        .unwrap();

    assert_eq!(selector.len(), db.len());
    assert_eq!(selector.rule(), "ALL");
}

#[test]
fn test_always_false_keep_only_empties_selection() {
    let db = fake_db();
    let result = SelectorBuilder::new(&db)
        .add(Predicate::True)
        .keep_only(Predicate::strength(std::iter::empty()))
        .build();
    assert!(matches!(result, Err(SelectionError::EmptySelection { .. })));

    let result = SelectorBuilder::new(&db)
        .add(Predicate::True)
        .keep_only(Predicate::False)
        .build();
    assert!(matches!(result, Err(SelectionError::EmptySelection { .. })));
}

#[test]
fn test_always_false_keep_only_is_not_vacuous() {
    assert!(!Rule::new(Operation::KeepOnly, Predicate::False).is_vacuous());
    assert!(Rule::new(Operation::Delete, Predicate::False).is_vacuous());
    assert!(!Rule::sort_by_strength().is_vacuous());
}

#[test]
fn test_keep_only_unknown_suite_name_is_ignored() {
    // Unknown names make their whole token a no-op, `&` included
    let db = MechanismDatabase::builtin();
    let full = Selector::from_rule_string(&db, "ALL").unwrap();

    for rule in ["ALL:&NO-SUCH-SUITE", "ALL:&kRSA+NO-SUCH-SUITE"] {
        let selector = Selector::from_rule_string(&db, rule).unwrap();
        assert_eq!(selector, full);
        assert_eq!(selector.rule(), "ALL");
    }
}

#[test]
fn test_build_with_trace_subscriber_installed() {
    // Exercise the debug and trace events emitted while folding rules
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let db = fake_db();
    let selector = SelectorBuilder::new(&db)
        .parse("ALL:!EXPORT:TLS_NOT_IN_CATALOG:@STRENGTH")
        .unwrap()
        .delete(Predicate::False)
        .build()
        .unwrap();

    assert_eq!(selector.rule(), "ALL:!EXPORT:@STRENGTH");
}

#[test]
fn test_always_true_add_respects_exclusions() {
    let db = fake_db();
    let selector = SelectorBuilder::new(&db)
        .delete(Predicate::export(true))
        .add(Predicate::True)
        .build()
        .unwrap();

    assert!(!selector.contains("TLS_D"));
    assert_eq!(selector.len(), 4);
}

// ===== Empty selections =====

#[test]
fn test_empty_selection_is_an_error() {
    let db = fake_db();
    match Selector::from_rule_string(&db, "!ALL") {
        Err(SelectionError::EmptySelection { rule }) => assert_eq!(rule, "!ALL"),
        other => panic!("Expected EmptySelection, got {:?}", other),
    }
    assert!(matches!(
        Selector::from_rule_string(&db, "ALL:!ALL:HIGH"),
        Err(SelectionError::EmptySelection { .. })
    ));
}

#[test]
fn test_builder_without_rules_is_empty() {
    let db = fake_db();
    assert!(matches!(
        SelectorBuilder::new(&db).build(),
        Err(SelectionError::EmptySelection { rule }) if rule.is_empty()
    ));
}

#[test]
fn test_only_unknown_names_is_empty_selection() {
    let db = fake_db();
    assert!(matches!(
        Selector::from_rule_string(&db, "TLS_UNKNOWN:NO-SUCH-SUITE"),
        Err(SelectionError::EmptySelection { .. })
    ));
}

#[test]
fn test_empty_selection_message_names_rule() {
    let db = fake_db();
    let err = Selector::from_rule_string(&db, "LOW:!kDHE").unwrap_err();
    assert_eq!(err.to_string(), "Cipher rule 'LOW:!kDHE' selects no cipher suites");
}

// ===== Limits =====

#[test]
fn test_builder_rule_limit() {
    let db = fake_db();
    let at_limit = SelectorBuilder::new(&db).rules((0..MAX_RULES).map(|_| {
        core_suites::Rule::new(core_suites::Operation::Add, Predicate::True)
    }));
    assert!(at_limit.clone().build().is_ok());

    let over = at_limit.add(Predicate::True);
    assert!(matches!(
        over.build(),
        Err(SelectionError::TooManyRules { attempted, .. }) if attempted == MAX_RULES + 1
    ));
}

#[test]
fn test_builder_depth_limit() {
    let db = fake_db();
    let nested = |levels: usize| (0..levels).fold(Predicate::False, |p, _| p.negate());

    // Depth MAX_PREDICATE_DEPTH, odd negation count: matches everything
    let ok = SelectorBuilder::new(&db)
        .add(Predicate::True)
        .keep_only(nested(MAX_PREDICATE_DEPTH - 1))
        .build();
    assert_eq!(ok.unwrap().len(), db.len());

    let too_deep = SelectorBuilder::new(&db)
        .add(Predicate::True)
        .keep_only(nested(MAX_PREDICATE_DEPTH))
        .build();
    assert!(matches!(too_deep, Err(SelectionError::PredicateTooDeep { .. })));
}

// ===== Selector =====

#[test]
fn test_selector_accessors() {
    let db = fake_db();
    let selector = Selector::from_rule_string(&db, "HIGH:MEDIUM").unwrap();

    assert_eq!(selector.len(), 3);
    assert!(!selector.is_empty());
    assert_eq!(selector.openssl_names(), ["A-1", "C-1", "B-1"]);
    assert_eq!(selector.iter().collect::<Vec<_>>(), ["TLS_A", "TLS_C", "TLS_B"]);
    assert!(selector.contains("TLS_B"));
    assert!(selector.contains("B-1"));
    assert!(!selector.contains("TLS_D"));
    assert_eq!(selector.rule(), "HIGH:MEDIUM");
    assert_eq!(selector.to_string(), "TLS_A:TLS_C:TLS_B");
}

#[test]
fn test_selector_equality_ignores_rule_text() {
    let db = fake_db();
    let parsed = Selector::from_rule_string(&db, "HIGH:MEDIUM").unwrap();
    let built = SelectorBuilder::new(&db)
        .add(Predicate::name(["TLS_A", "TLS_C"]))
        .add(keyword("MEDIUM").unwrap())
        .build()
        .unwrap();

    assert_ne!(parsed.rule(), built.rule());
    assert_eq!(parsed, built);
    assert_eq!(hash_of(&parsed), hash_of(&built));
}

#[test]
fn test_selector_order_matters_for_equality() {
    let db = fake_db();
    let a = Selector::from_rule_string(&db, "HIGH:MEDIUM").unwrap();
    let b = Selector::from_rule_string(&db, "MEDIUM:HIGH").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_effective_rule_skips_unknown_names() {
    let db = fake_db();
    let selector = Selector::from_rule_string(&db, "HIGH:NO-SUCH-SUITE:!EXP").unwrap();
    assert_eq!(selector.rule(), "HIGH:!EXPORT");
}

#[test]
fn test_evaluate_filters_supported_in_selector_order() {
    let db = fake_db();
    let selector = Selector::from_rule_string(&db, "ALL:@STRENGTH").unwrap();

    let enabled = selector.evaluate(vec!["D-1".to_string(), "TLS_C".to_string(), "B-1".to_string(), "X".to_string()]);
    assert_eq!(enabled, ["TLS_C", "TLS_B", "TLS_D"]);
    assert!(selector.evaluate(Vec::<&str>::new()).is_empty());
}

#[test]
fn test_selectors_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Selector>();
    assert_send_sync::<MechanismDatabase>();
}

// ===== Builtin catalog scenarios =====

#[test]
fn test_builtin_all_without_export() {
    let db = MechanismDatabase::builtin();
    let names = select(&db, "ALL:!EXPORT");
    let expected: Vec<&str> = db
        .entries()
        .iter()
        .filter(|e| !e.export)
        .map(|e| e.name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_builtin_high_then_medium() {
    let db = MechanismDatabase::builtin();
    let names = select(&db, "HIGH:MEDIUM");
    let by_strength = |strength: Strength| {
        db.entries()
            .iter()
            .filter(move |e| e.strength == strength)
            .map(|e| e.name)
    };
    let expected: Vec<&str> = by_strength(Strength::High)
        .chain(by_strength(Strength::Medium))
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_builtin_all_with_rsa_last() {
    let db = MechanismDatabase::builtin();
    let names = select(&db, "ALL:-kRSA");
    assert_eq!(names.len(), db.len());

    let (rsa, other): (Vec<&Entry>, Vec<&Entry>) = db
        .entries()
        .iter()
        .partition(|e| e.key_exchange == KeyExchange::Rsa);
    let expected: Vec<&str> = other.iter().chain(rsa.iter()).map(|e| e.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_builtin_delete_all_is_empty() {
    let db = MechanismDatabase::builtin();
    assert!(matches!(
        Selector::from_rule_string(&db, "!ALL"),
        Err(SelectionError::EmptySelection { .. })
    ));
}

#[test]
fn test_builtin_bogus_keyword() {
    let db = MechanismDatabase::builtin();
    match Selector::from_rule_string(&db, "BOGUSKEYWORD") {
        Err(SelectionError::Parse { token, position, .. }) => {
            assert_eq!(token, "BOGUSKEYWORD");
            assert_eq!(position, 0);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_builtin_strength_hierarchy() {
    let db = MechanismDatabase::builtin();
    let set = |rule: &str| select(&db, rule).into_iter().collect::<BTreeSet<_>>();

    let high = set("HIGH");
    let medium_up = set("HIGH:MEDIUM");
    let low_up = set("HIGH:MEDIUM:LOW");
    let all = set("ALL");

    assert!(high.is_subset(&medium_up));
    assert!(medium_up.is_subset(&low_up));
    assert!(low_up.is_subset(&all));
    assert!(set("MEDIUM").is_subset(&all));
    assert!(set("LOW").is_subset(&all));
}

#[test]
fn test_builtin_default_excludes_weak_suites() {
    let db = MechanismDatabase::builtin();
    let selector = Selector::openssl_default(&db).unwrap();

    for name in selector.iter() {
        let entry = db.lookup(name).unwrap();
        assert!(entry.strength >= Strength::Medium, "{}", name);
        assert_ne!(entry.encryption, Encryption::Rc4, "{}", name);
        assert_ne!(entry.authentication, Authentication::Null, "{}", name);
    }
    assert!(selector.contains("AES128-SHA"));
    assert!(selector.contains("DES-CBC3-SHA"));
    assert_eq!(selector.rule(), "DEFAULT");
}

#[test]
fn test_builtin_complement_of_default_partitions_catalog() {
    let db = MechanismDatabase::builtin();
    let default = select(&db, "DEFAULT");
    let complement = select(&db, "COMPLEMENTOFDEFAULT");
    assert_eq!(default.len() + complement.len(), db.len());
    assert!(default.iter().all(|name| !complement.contains(name)));
}
