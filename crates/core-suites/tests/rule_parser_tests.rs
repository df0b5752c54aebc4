//! Tests for the rule string parser

use core_suites::keywords::{self, keyword};
use core_suites::{
    MechanismDatabase, Operation, ParseErrorKind, Predicate, Rule, RuleSet, SelectionError,
    MAX_RULES, MAX_RULE_STRING_LENGTH, MAX_TERMS_PER_TOKEN,
};

fn parse(input: &str) -> Result<RuleSet, SelectionError> {
    RuleSet::parse(&MechanismDatabase::builtin(), input)
}

fn parse_error(input: &str) -> (String, usize, ParseErrorKind) {
    match parse(input) {
        Err(SelectionError::Parse {
            token,
            position,
            reason,
        }) => (token, position, reason),
        other => panic!("Expected parse error for {:?}, got {:?}", input, other),
    }
}

// ===== Operations =====

#[test]
fn test_bare_keyword_is_add() {
    let rules = parse("HIGH").unwrap();
    assert_eq!(rules.rules(), &[Rule::new(Operation::Add, keyword("HIGH").unwrap())]);
}

#[test]
fn test_prefixes_map_to_operations() {
    let rules = parse("ALL:+kRSA:-aECDSA:!EXPORT:&FIPS:@STRENGTH").unwrap();
    let operations: Vec<Operation> = rules.iter().map(|r| r.operation).collect();

    assert_eq!(
        operations,
        vec![
            Operation::Add,
            Operation::PushToEnd,
            Operation::Remove,
            Operation::Delete,
            Operation::KeepOnly,
            Operation::SortByStrength,
        ]
    );
    assert_eq!(rules.rules()[3].predicate, Predicate::export(true));
}

#[test]
fn test_source_order_is_preserved() {
    let rules = parse("MEDIUM:HIGH:LOW").unwrap();
    let predicates: Vec<&Predicate> = rules.iter().map(|r| &r.predicate).collect();
    assert_eq!(
        predicates,
        vec![
            &keyword("MEDIUM").unwrap(),
            &keyword("HIGH").unwrap(),
            &keyword("LOW").unwrap(),
        ]
    );
}

#[test]
fn test_conjunction_is_left_associative() {
    let rules = parse("kECDHE+aRSA+AESGCM").unwrap();
    let expected = keyword("kECDHE")
        .unwrap()
        .and(keyword("aRSA").unwrap())
        .and(keyword("AESGCM").unwrap());
    assert_eq!(rules.rules()[0].predicate, expected);
}

#[test]
fn test_whitespace_around_tokens_is_trimmed() {
    assert_eq!(parse(" HIGH : !aNULL ").unwrap(), parse("HIGH:!aNULL").unwrap());
}

#[test]
fn test_every_keyword_parses() {
    for word in keywords::KEYWORDS {
        let rules = parse(word).unwrap_or_else(|e| panic!("{}: {}", word, e));
        assert_eq!(rules.len(), 1);
    }
}

// ===== Suite names =====

#[test]
fn test_suite_name_by_alias_resolves_to_standard_name() {
    let rules = parse("AES128-SHA").unwrap();
    assert_eq!(
        rules.rules()[0].predicate,
        Predicate::name(["TLS_RSA_WITH_AES_128_CBC_SHA"])
    );
}

#[test]
fn test_unknown_suite_name_is_ignored() {
    let rules = parse("HIGH:NO-SUCH-SUITE:!TLS_FAKE_WITH_NOTHING").unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.to_string(), "HIGH");
}

#[test]
fn test_unknown_suite_name_voids_whole_conjunction() {
    let rules = parse("kRSA+NO-SUCH-SUITE").unwrap();
    assert!(rules.is_empty());
}

#[test]
fn test_only_unknown_names_parse_to_empty_rule_set() {
    assert!(parse("SSL_FAKE:TLS_FAKE").unwrap().is_empty());
}

// ===== Errors =====

#[test]
fn test_unknown_keyword_at_position_zero() {
    let (token, position, reason) = parse_error("BOGUSKEYWORD");
    assert_eq!(token, "BOGUSKEYWORD");
    assert_eq!(position, 0);
    assert_eq!(reason, ParseErrorKind::UnknownKeyword);
}

#[test]
fn test_error_position_is_byte_offset_of_token() {
    let (token, position, _) = parse_error("HIGH:!aNULL:BOGUS");
    assert_eq!(token, "BOGUS");
    assert_eq!(position, 12);

    let (token, position, _) = parse_error("HIGH:  BOGUS");
    assert_eq!(token, "BOGUS");
    assert_eq!(position, 7);
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(parse_error("high").2, ParseErrorKind::UnknownKeyword);
    assert_eq!(parse_error("@strength").2, ParseErrorKind::UnknownDirective);
}

#[test]
fn test_empty_segments_are_rejected() {
    assert_eq!(parse_error("").2, ParseErrorKind::EmptyToken);
    assert_eq!(parse_error("HIGH::MEDIUM"), (String::new(), 5, ParseErrorKind::EmptyToken));
    assert_eq!(parse_error("HIGH:").1, 5);
    assert_eq!(parse_error(":HIGH").1, 0);
    assert_eq!(parse_error("HIGH:   ").2, ParseErrorKind::EmptyToken);
}

#[test]
fn test_conflicting_prefixes_are_rejected() {
    for input in ["+-kRSA", "!!EXPORT", "-+HIGH", "&!FIPS", "-@STRENGTH"] {
        assert_eq!(
            parse_error(input).2,
            ParseErrorKind::ConflictingOperators,
            "{}",
            input
        );
    }
}

#[test]
fn test_operator_without_term_is_rejected() {
    for input in ["-", "!", "+", "&", "kRSA+", "kRSA++HIGH", "!+"] {
        let reason = parse_error(input).2;
        assert!(
            matches!(
                reason,
                ParseErrorKind::MissingTerm | ParseErrorKind::ConflictingOperators
            ),
            "{}: {:?}",
            input,
            reason
        );
    }
    assert_eq!(parse_error("kRSA+").2, ParseErrorKind::MissingTerm);
    assert_eq!(parse_error("-").2, ParseErrorKind::MissingTerm);
}

#[test]
fn test_unknown_directive_is_rejected() {
    let (token, _, reason) = parse_error("HIGH:@SECLEVEL=2");
    assert_eq!(token, "@SECLEVEL=2");
    assert_eq!(reason, ParseErrorKind::UnknownDirective);
}

#[test]
fn test_parsing_is_atomic() {
    // One bad token rejects the whole string, even after valid ones
    assert!(parse("HIGH:MEDIUM:BOGUS:LOW").is_err());
}

#[test]
fn test_error_message_names_token_and_position() {
    let err = parse("HIGH:BOGUS").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid cipher rule token 'BOGUS' at position 5: unknown keyword"
    );
}

// ===== Limits =====

#[test]
fn test_rule_string_length_limit() {
    let input = "A".repeat(MAX_RULE_STRING_LENGTH + 1);
    assert!(matches!(
        parse(&input),
        Err(SelectionError::RuleStringTooLong { max, length })
            if max == MAX_RULE_STRING_LENGTH && length == MAX_RULE_STRING_LENGTH + 1
    ));

    // At the limit the string is parsed (and rejected for its content)
    let input = "A".repeat(MAX_RULE_STRING_LENGTH);
    assert!(matches!(parse(&input), Err(SelectionError::Parse { .. })));
}

#[test]
fn test_token_count_limit() {
    let at_limit = vec!["HIGH"; MAX_RULES].join(":");
    assert_eq!(parse(&at_limit).unwrap().len(), MAX_RULES);

    let over = vec!["HIGH"; MAX_RULES + 1].join(":");
    assert!(matches!(
        parse(&over),
        Err(SelectionError::TooManyRules { attempted, .. }) if attempted == MAX_RULES + 1
    ));
}

#[test]
fn test_terms_per_token_limit() {
    let at_limit = vec!["HIGH"; MAX_TERMS_PER_TOKEN].join("+");
    assert!(parse(&at_limit).is_ok());

    let over = vec!["HIGH"; MAX_TERMS_PER_TOKEN + 1].join("+");
    assert_eq!(parse_error(&over).2, ParseErrorKind::TooManyTerms);
}

// ===== Rendering =====

#[test]
fn test_display_round_trips_canonical_input() {
    let input = "ALL:+kRSA:-aECDSA:!EXPORT:&FIPS:ECDHE+AESGCM:TLS_AES_128_GCM_SHA256:@STRENGTH";
    let rules = parse(input).unwrap();
    assert_eq!(rules.to_string(), input);
}

#[test]
fn test_display_uses_canonical_spellings() {
    let rules = parse("EXP:SHA:EDH:RSA:EECDH:ECDHE-RSA-AES128-GCM-SHA256").unwrap();
    assert_eq!(
        rules.to_string(),
        "EXPORT:SHA1:DHE:kRSA:ECDHE:TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"
    );
    assert_eq!(parse(&rules.to_string()).unwrap(), rules);
}

#[test]
fn test_rule_without_directive_form_is_described() {
    let rule = Rule::new(Operation::Delete, Predicate::True.negate());
    assert_eq!(rule.to_string(), "!{not (true)}");
}

#[test]
fn test_rule_set_from_rules() {
    let rules = RuleSet::from(vec![Rule::new(Operation::Add, Predicate::True), Rule::sort_by_strength()]);
    assert_eq!(rules.to_string(), "ALL:@STRENGTH");
    assert_eq!(rules.into_iter().count(), 2);
}
