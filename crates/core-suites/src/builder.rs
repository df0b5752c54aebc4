//! Selector builder: folds rules into an ordered suite list

use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::database::MechanismDatabase;
use crate::error::{Result, SelectionError};
use crate::predicate::Predicate;
use crate::rule::{Operation, Rule, RuleSet};
use crate::selector::Selector;
use crate::MAX_RULES;

/// Builder for [`Selector`] instances with a fluent API
///
/// Rules are recorded in call order and applied only by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use core_suites::{Authentication, KeyExchange, MechanismDatabase, Predicate, SelectorBuilder, Strength};
///
/// # fn example() -> Result<(), core_suites::SelectionError> {
/// let db = MechanismDatabase::builtin();
///
/// // Equivalent to "HIGH:-kRSA:!aNULL"
/// let selector = SelectorBuilder::new(&db)
///     .add(Predicate::strength([Strength::High]))
///     .remove(Predicate::key_exchange([KeyExchange::Rsa]))
///     .delete(Predicate::authentication([Authentication::Null]))
///     .build()?;
///
/// assert!(selector.contains("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"));
/// assert!(!selector.contains("TLS_DH_anon_WITH_AES_128_CBC_SHA"));
///
/// // The same selection, parsed
/// let parsed = SelectorBuilder::new(&db).parse("HIGH:-kRSA:!aNULL")?.build()?;
/// assert_eq!(selector, parsed);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SelectorBuilder<'db> {
    db: &'db MechanismDatabase,
    rules: Vec<Rule>,
}

impl<'db> SelectorBuilder<'db> {
    /// Create a builder over `db`
    #[must_use]
    pub const fn new(db: &'db MechanismDatabase) -> Self {
        Self {
            db,
            rules: Vec::new(),
        }
    }

    /// Append matching entries in canonical order
    #[must_use]
    pub fn add(self, predicate: Predicate) -> Self {
        self.rule(Rule::new(Operation::Add, predicate))
    }

    /// Move selected matches to the end, then append new matches
    #[must_use]
    pub fn push_to_end(self, predicate: Predicate) -> Self {
        self.rule(Rule::new(Operation::PushToEnd, predicate))
    }

    /// Move selected matches to the end without dropping them
    #[must_use]
    pub fn remove(self, predicate: Predicate) -> Self {
        self.rule(Rule::new(Operation::Remove, predicate))
    }

    /// Drop matches and forbid any later rule from adding them back
    #[must_use]
    pub fn delete(self, predicate: Predicate) -> Self {
        self.rule(Rule::new(Operation::Delete, predicate))
    }

    /// Drop every selected entry that does not match
    #[must_use]
    pub fn keep_only(self, predicate: Predicate) -> Self {
        self.rule(Rule::new(Operation::KeepOnly, predicate))
    }

    /// Stable sort by descending strength class
    #[must_use]
    pub fn sort_by_strength(self) -> Self {
        self.rule(Rule::sort_by_strength())
    }

    /// Append a single rule
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append rules in order
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Parse a rule string and append its rules
    ///
    /// # Errors
    ///
    /// Any error of [`RuleSet::parse`]
    pub fn parse(self, rule_string: &str) -> Result<Self> {
        let parsed = RuleSet::parse(self.db, rule_string)?;
        Ok(self.rules(parsed))
    }

    /// Apply the rules and freeze the result
    ///
    /// # Errors
    ///
    /// * `SelectionError::TooManyRules` - more than `MAX_RULES` rules
    /// * `SelectionError::PredicateTooDeep` - a predicate exceeds `MAX_PREDICATE_DEPTH`
    /// * `SelectionError::EmptySelection` - no suite survives the rules
    pub fn build(self) -> Result<Selector> {
        if self.rules.len() > MAX_RULES {
            return Err(SelectionError::TooManyRules {
                max: MAX_RULES,
                attempted: self.rules.len(),
            });
        }
        for rule in &self.rules {
            rule.predicate.check_depth()?;
        }

        let mut working = WorkingSet::new(self.db);
        let mut effective = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            if rule.is_vacuous() {
                tracing::debug!(%rule, "skipping vacuous rule");
                continue;
            }
            working.apply(&rule);
            tracing::trace!(%rule, selected = working.order.len(), "applied rule");
            effective.push(rule);
        }

        let rule = RuleSet::from(effective).to_string();
        if working.order.is_empty() {
            return Err(SelectionError::EmptySelection { rule });
        }

        let entries = self.db.entries();
        let selected = working.order.iter().filter_map(|&i| entries.get(i));
        Ok(Selector::new(selected, rule))
    }
}

/// Transient state of one build
///
/// `order` holds database indices; `present` mirrors membership of `order`
/// and `excluded` records everything a DELETE has matched.
struct WorkingSet<'db> {
    db: &'db MechanismDatabase,
    order: Vec<usize>,
    present: Vec<bool>,
    excluded: Vec<bool>,
}

impl<'db> WorkingSet<'db> {
    fn new(db: &'db MechanismDatabase) -> Self {
        Self {
            db,
            order: Vec::with_capacity(db.len()),
            present: alloc::vec![false; db.len()],
            excluded: alloc::vec![false; db.len()],
        }
    }

    fn matches(&self, index: usize, predicate: &Predicate) -> bool {
        self.db
            .entries()
            .get(index)
            .is_some_and(|entry| predicate.test(entry))
    }

    fn apply(&mut self, rule: &Rule) {
        let predicate = &rule.predicate;
        match rule.operation {
            Operation::Add => self.add(predicate),
            Operation::PushToEnd => {
                self.move_to_end(predicate);
                self.add(predicate);
            }
            Operation::Remove => self.move_to_end(predicate),
            Operation::Delete => self.delete(predicate),
            Operation::KeepOnly => self.retain(|set, i| set.matches(i, predicate)),
            Operation::SortByStrength => {
                let entries = self.db.entries();
                // sort_by_key is stable: equal strengths keep their order
                self.order
                    .sort_by_key(|&i| Reverse(entries.get(i).map(|e| e.strength)));
            }
        }
    }

    fn add(&mut self, predicate: &Predicate) {
        let db = self.db;
        for (i, entry) in db.entries().iter().enumerate() {
            if !self.present[i] && !self.excluded[i] && predicate.test(entry) {
                self.present[i] = true;
                self.order.push(i);
            }
        }
    }

    fn move_to_end(&mut self, predicate: &Predicate) {
        let (moved, mut kept): (Vec<usize>, Vec<usize>) = self
            .order
            .iter()
            .copied()
            .partition(|&i| self.matches(i, predicate));
        kept.extend(moved);
        self.order = kept;
    }

    fn delete(&mut self, predicate: &Predicate) {
        let db = self.db;
        for (i, entry) in db.entries().iter().enumerate() {
            if predicate.test(entry) {
                self.excluded[i] = true;
            }
        }
        self.retain(|set, i| !set.excluded[i]);
    }

    fn retain(&mut self, mut keep: impl FnMut(&Self, usize) -> bool) {
        let order = core::mem::take(&mut self.order);
        for i in order {
            if keep(self, i) {
                self.order.push(i);
            } else {
                self.present[i] = false;
            }
        }
    }
}
