//! Immutable, ordered result of a build

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::builder::SelectorBuilder;
use crate::database::{Entry, MechanismDatabase};
use crate::error::Result;
use crate::DEFAULT_RULE_STRING;

/// Final prioritised list of accepted suite names
///
/// Never empty, never contains duplicates, highest priority first. Two
/// selectors are equal iff their name sequences are equal in order; the
/// rule description does not take part in comparison.
///
/// # Example
///
/// ```
/// use core_suites::{MechanismDatabase, Selector};
///
/// let db = MechanismDatabase::builtin();
/// let selector = Selector::from_rule_string(&db, "ECDHE+AESGCM:@STRENGTH").unwrap();
///
/// assert_eq!(selector.names()[0], "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256");
/// assert_eq!(selector.openssl_names()[0], "ECDHE-ECDSA-AES128-GCM-SHA256");
/// assert_eq!(selector.rule(), "ECDHE+AESGCM:@STRENGTH");
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    names: Vec<&'static str>,
    openssl_names: Vec<&'static str>,
    rule: String,
}

impl Selector {
    pub(crate) fn new<'a>(entries: impl IntoIterator<Item = &'a Entry>, rule: String) -> Self {
        let (names, openssl_names) = entries
            .into_iter()
            .map(|entry| (entry.name, entry.openssl_name))
            .unzip();
        Self {
            names,
            openssl_names,
            rule,
        }
    }

    /// Parse and evaluate a rule string in one step
    ///
    /// # Errors
    ///
    /// Any parse error, or `SelectionError::EmptySelection`
    pub fn from_rule_string(db: &MechanismDatabase, rule_string: &str) -> Result<Self> {
        SelectorBuilder::new(db).parse(rule_string)?.build()
    }

    /// Selection for [`DEFAULT_RULE_STRING`]
    ///
    /// # Errors
    ///
    /// `SelectionError::EmptySelection` if `db` has no default-grade suite
    pub fn openssl_default(db: &MechanismDatabase) -> Result<Self> {
        Self::from_rule_string(db, DEFAULT_RULE_STRING)
    }

    /// Standard suite names, highest priority first
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// OpenSSL suite names, in the same order as [`names`](Self::names)
    #[must_use]
    pub fn openssl_names(&self) -> &[&'static str] {
        &self.openssl_names
    }

    /// Effective rule string that produced this selection
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Number of selected suites (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a built selector
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over standard names, highest priority first
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// True if `name` (standard or OpenSSL) is selected
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .iter()
            .chain(&self.openssl_names)
            .any(|selected| *selected == name)
    }

    /// Restrict the selection to the suites an engine supports
    ///
    /// `supported` may mix standard and OpenSSL names. The result keeps this
    /// selector's priority order and uses standard names.
    ///
    /// ```
    /// use core_suites::{MechanismDatabase, Selector};
    ///
    /// let db = MechanismDatabase::builtin();
    /// let selector = Selector::from_rule_string(&db, "kECDHE+AESGCM").unwrap();
    /// let enabled = selector.evaluate(["ECDHE-RSA-AES256-GCM-SHA384", "RC4-SHA"]);
    /// assert_eq!(enabled, ["TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"]);
    /// ```
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(
        &self,
        supported: impl IntoIterator<Item = S>,
    ) -> Vec<&'static str> {
        let supported: BTreeSet<String> = supported
            .into_iter()
            .map(|name| String::from(name.as_ref()))
            .collect();
        self.names
            .iter()
            .zip(&self.openssl_names)
            .filter(|(name, openssl)| {
                supported.contains(**name) || supported.contains(**openssl)
            })
            .map(|(name, _)| *name)
            .collect()
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for Selector {}

impl Hash for Selector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.names.hash(state);
    }
}

impl<'a> IntoIterator for &'a Selector {
    type Item = &'a &'static str;
    type IntoIter = core::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Colon-separated standard names
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
