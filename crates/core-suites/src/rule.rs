//! # Rule String Parser
//!
//! Converts an OpenSSL-style directive string into an ordered [`RuleSet`].
//!
//! ## Grammar
//!
//! ```text
//! rule-string ::= token (':' token)*
//! token       ::= '@STRENGTH' | [prefix] term ('+' term)*
//! prefix      ::= '+' | '-' | '!' | '&'
//! term        ::= keyword | suite-name
//! ```
//!
//! | Token | Operation |
//! |---|---|
//! | `X` | [`Operation::Add`] |
//! | `+X` | [`Operation::PushToEnd`] |
//! | `-X` | [`Operation::Remove`] |
//! | `!X` | [`Operation::Delete`] |
//! | `&X` | [`Operation::KeepOnly`] |
//! | `@STRENGTH` | [`Operation::SortByStrength`] |
//!
//! Inside a token, `+` between terms is a conjunction: `kECDHE+AESGCM`
//! matches suites with ECDHE key exchange *and* AES-GCM encryption.
//!
//! Terms that look like suite names but are absent from the database make
//! their token a no-op, so rule strings stay portable across catalogs.
//!
//! ## Security
//!
//! - Maximum rule string length: `MAX_RULE_STRING_LENGTH`
//! - Maximum number of tokens: `MAX_RULES`
//! - Maximum conjunction terms per token: `MAX_TERMS_PER_TOKEN`

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::database::MechanismDatabase;
use crate::error::{ParseErrorKind, Result, SelectionError};
use crate::keywords;
use crate::predicate::Predicate;
use crate::{MAX_RULES, MAX_RULE_STRING_LENGTH, MAX_TERMS_PER_TOKEN};

/// Token separator
pub const SEPARATOR: char = ':';

/// The only recognised `@` directive
pub const STRENGTH_DIRECTIVE: &str = "@STRENGTH";

/// What a rule does with the entries its predicate matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Append matches not yet selected and not deleted
    Add,
    /// Move selected matches to the end, then append new matches
    PushToEnd,
    /// Move selected matches to the end, keeping them selected
    Remove,
    /// Drop matches and forbid them for the rest of the rule string
    Delete,
    /// Drop every selected entry that does not match
    KeepOnly,
    /// Stable sort by descending strength class
    SortByStrength,
}

impl Operation {
    /// Rule-string prefix for this operation
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Add => "",
            Self::PushToEnd => "+",
            Self::Remove => "-",
            Self::Delete => "!",
            Self::KeepOnly => "&",
            Self::SortByStrength => "@",
        }
    }

    const fn from_prefix(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::PushToEnd),
            '-' => Some(Self::Remove),
            '!' => Some(Self::Delete),
            '&' => Some(Self::KeepOnly),
            _ => None,
        }
    }
}

/// A single (operation, predicate) directive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Operation to apply
    pub operation: Operation,
    /// Entries the operation applies to
    pub predicate: Predicate,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub const fn new(operation: Operation, predicate: Predicate) -> Self {
        Self {
            operation,
            predicate,
        }
    }

    /// The `@STRENGTH` rule
    #[must_use]
    pub const fn sort_by_strength() -> Self {
        Self::new(Operation::SortByStrength, Predicate::True)
    }

    /// True if this rule provably changes nothing
    ///
    /// An always-false `&` rule is not vacuous: it empties the selection.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        !matches!(
            self.operation,
            Operation::SortByStrength | Operation::KeepOnly
        ) && self.predicate.is_always_false()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operation == Operation::SortByStrength {
            return f.write_str(STRENGTH_DIRECTIVE);
        }
        f.write_str(self.operation.prefix())?;
        match self.predicate.to_directive() {
            Some(directive) => f.write_str(&directive),
            None => write!(f, "{{{}}}", self.predicate),
        }
    }
}

/// Ordered sequence of rules, in source order
///
/// # Example
///
/// ```
/// use core_suites::{MechanismDatabase, Operation, RuleSet};
///
/// let db = MechanismDatabase::builtin();
/// let rules = RuleSet::parse(&db, "HIGH:!aNULL:-kRSA:@STRENGTH").unwrap();
///
/// assert_eq!(rules.len(), 4);
/// assert_eq!(rules.rules()[1].operation, Operation::Delete);
/// assert_eq!(rules.to_string(), "HIGH:!aNULL:-kRSA:@STRENGTH");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse a rule string against a database
    ///
    /// Parsing is atomic: either every token is valid or an error naming the
    /// first bad token is returned.
    ///
    /// # Errors
    ///
    /// * `SelectionError::RuleStringTooLong` - input exceeds `MAX_RULE_STRING_LENGTH`
    /// * `SelectionError::TooManyRules` - more than `MAX_RULES` tokens
    /// * `SelectionError::Parse` - empty, unknown, or malformed token
    pub fn parse(db: &MechanismDatabase, input: &str) -> Result<Self> {
        // DoS prevention: limit rule string length
        if input.len() > MAX_RULE_STRING_LENGTH {
            return Err(SelectionError::RuleStringTooLong {
                max: MAX_RULE_STRING_LENGTH,
                length: input.len(),
            });
        }

        let token_count = input.split(SEPARATOR).count();
        if token_count > MAX_RULES {
            return Err(SelectionError::TooManyRules {
                max: MAX_RULES,
                attempted: token_count,
            });
        }

        let mut rules = Vec::with_capacity(token_count);
        let mut offset = 0;
        for segment in input.split(SEPARATOR) {
            let trimmed = segment.trim_start_matches(|c: char| c.is_ascii_whitespace());
            let position = offset + (segment.len() - trimmed.len());
            offset += segment.len() + SEPARATOR.len_utf8();

            let token = trimmed.trim_end_matches(|c: char| c.is_ascii_whitespace());
            if let Some(rule) = parse_token(db, token, position)? {
                rules.push(rule);
            }
        }

        Ok(Self { rules })
    }

    /// The rules, in application order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if there are no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in application order
    pub fn iter(&self) -> core::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = alloc::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = core::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// Parse one trimmed token; `Ok(None)` means the token names an unknown suite
fn parse_token(db: &MechanismDatabase, token: &str, position: usize) -> Result<Option<Rule>> {
    let error = |reason| SelectionError::Parse {
        token: token.to_string(),
        position,
        reason,
    };

    if token.is_empty() {
        return Err(error(ParseErrorKind::EmptyToken));
    }

    if token.starts_with('@') {
        return if token == STRENGTH_DIRECTIVE {
            Ok(Some(Rule::sort_by_strength()))
        } else {
            Err(error(ParseErrorKind::UnknownDirective))
        };
    }

    let (operation, body) = match token.chars().next().and_then(Operation::from_prefix) {
        Some(operation) => (operation, &token[1..]),
        None => (Operation::Add, token),
    };

    if body.is_empty() {
        return Err(error(ParseErrorKind::MissingTerm));
    }
    if body.starts_with(|c: char| Operation::from_prefix(c).is_some() || c == '@') {
        return Err(error(ParseErrorKind::ConflictingOperators));
    }

    let terms: Vec<&str> = body.split('+').collect();
    if terms.len() > MAX_TERMS_PER_TOKEN {
        return Err(error(ParseErrorKind::TooManyTerms));
    }

    let mut predicate: Option<Predicate> = None;
    let mut unknown_name = false;
    for term in terms {
        if term.is_empty() {
            return Err(error(ParseErrorKind::MissingTerm));
        }
        let Some(term_predicate) = parse_term(db, term).map_err(error)? else {
            unknown_name = true;
            continue;
        };
        predicate = Some(match predicate {
            None => term_predicate,
            Some(acc) => acc.and(term_predicate),
        });
    }

    if unknown_name {
        tracing::debug!(token, position, "ignoring rule token naming an unknown cipher suite");
        return Ok(None);
    }

    Ok(predicate.map(|predicate| Rule::new(operation, predicate)))
}

fn parse_term(
    db: &MechanismDatabase,
    term: &str,
) -> core::result::Result<Option<Predicate>, ParseErrorKind> {
    if let Some(predicate) = keywords::keyword(term) {
        return Ok(Some(predicate));
    }
    if keywords::looks_like_suite_name(term) {
        return Ok(db
            .lookup(term)
            .map(|entry| Predicate::name([entry.name])));
    }
    Err(ParseErrorKind::UnknownKeyword)
}
