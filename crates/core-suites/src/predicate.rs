//! # Predicate Algebra
//!
//! Boolean classifiers over catalog entries.
//!
//! A [`Predicate`] is a closed tree: one leaf variant per attribute family
//! (each holding the set of accepted values), a name leaf, the constants
//! `True`/`False`, and the `And`/`Or`/`Not` combinators.
//!
//! ## Constant folding
//!
//! [`Predicate::is_always_true`] and [`Predicate::is_always_false`] are
//! computed from the tree shape and the attribute domains, never by scanning
//! a database. They are sound for every catalog: an always-true predicate
//! matches every entry and an always-false predicate matches none. The
//! converse does not hold (`kRSA+aECDSA` matches nothing in practice but is
//! not structurally false).
//!
//! ## Example
//!
//! ```
//! use core_suites::{Encryption, KeyExchange, MechanismDatabase, Predicate};
//!
//! let db = MechanismDatabase::builtin();
//! let pfs_gcm = Predicate::key_exchange([KeyExchange::Ecdhe, KeyExchange::Dhe])
//!     & Predicate::encryption([Encryption::Aes128Gcm, Encryption::Aes256Gcm]);
//!
//! let entry = db.lookup("ECDHE-RSA-AES256-GCM-SHA384").unwrap();
//! assert!(pfs_gcm.test(entry));
//! assert!(!pfs_gcm.is_always_true());
//! assert!(!(!Predicate::True).test(entry));
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use core::fmt;
use core::ops;
use serde::{Deserialize, Serialize};

use crate::database::{Authentication, Digest, Encryption, Entry, KeyExchange, Protocol, Strength};
use crate::error::{Result, SelectionError};
use crate::keywords;
use crate::MAX_PREDICATE_DEPTH;

/// Domain of the boolean attribute families (export, FIPS)
const FLAGS: &[bool] = &[false, true];

/// Boolean classifier over a catalog [`Entry`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches every entry
    True,

    /// Matches no entry
    False,

    /// Protocol is one of the given versions
    Protocol(BTreeSet<Protocol>),

    /// Key exchange is one of the given algorithms
    KeyExchange(BTreeSet<KeyExchange>),

    /// Authentication is one of the given algorithms
    Authentication(BTreeSet<Authentication>),

    /// Bulk encryption is one of the given algorithms
    Encryption(BTreeSet<Encryption>),

    /// Digest is one of the given algorithms
    Digest(BTreeSet<Digest>),

    /// Strength class is one of the given classes
    Strength(BTreeSet<Strength>),

    /// Export flag is one of the given values
    Export(BTreeSet<bool>),

    /// FIPS flag is one of the given values
    Fips(BTreeSet<bool>),

    /// Standard suite name is one of the given names
    Name(BTreeSet<String>),

    /// Both operands must match
    And(Box<Predicate>, Box<Predicate>),

    /// At least one operand must match
    Or(Box<Predicate>, Box<Predicate>),

    /// Negates the operand
    Not(Box<Predicate>),
}

impl Predicate {
    // ===== Leaf constructors =====

    /// Match entries introduced in one of the given protocol versions
    #[must_use]
    pub fn protocol(values: impl IntoIterator<Item = Protocol>) -> Self {
        Self::Protocol(values.into_iter().collect())
    }

    /// Match entries using one of the given key exchange algorithms
    #[must_use]
    pub fn key_exchange(values: impl IntoIterator<Item = KeyExchange>) -> Self {
        Self::KeyExchange(values.into_iter().collect())
    }

    /// Match entries using one of the given authentication algorithms
    #[must_use]
    pub fn authentication(values: impl IntoIterator<Item = Authentication>) -> Self {
        Self::Authentication(values.into_iter().collect())
    }

    /// Match entries using one of the given bulk ciphers
    #[must_use]
    pub fn encryption(values: impl IntoIterator<Item = Encryption>) -> Self {
        Self::Encryption(values.into_iter().collect())
    }

    /// Match entries using one of the given digests
    #[must_use]
    pub fn digest(values: impl IntoIterator<Item = Digest>) -> Self {
        Self::Digest(values.into_iter().collect())
    }

    /// Match entries in one of the given strength classes
    #[must_use]
    pub fn strength(values: impl IntoIterator<Item = Strength>) -> Self {
        Self::Strength(values.into_iter().collect())
    }

    /// Match entries whose export flag equals `export`
    #[must_use]
    pub fn export(export: bool) -> Self {
        Self::Export(BTreeSet::from([export]))
    }

    /// Match entries whose FIPS flag equals `fips`
    #[must_use]
    pub fn fips(fips: bool) -> Self {
        Self::Fips(BTreeSet::from([fips]))
    }

    /// Match entries by standard suite name
    #[must_use]
    pub fn name<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::Name(names.into_iter().map(Into::into).collect())
    }

    // ===== Combinators =====

    /// Conjunction
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Disjunction
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Negation
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    // ===== Evaluation =====

    /// Test an entry against this predicate
    ///
    /// `And` and `Or` short-circuit: the right operand is not evaluated when
    /// the left one already decides the result.
    ///
    /// Evaluation recurses once per level. Run [`check_depth`](Self::check_depth)
    /// first on trees from untrusted sources; [`SelectorBuilder::build`] does.
    ///
    /// [`SelectorBuilder::build`]: crate::SelectorBuilder::build
    #[must_use]
    pub fn test(&self, entry: &Entry) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Protocol(set) => set.contains(&entry.protocol),
            Self::KeyExchange(set) => set.contains(&entry.key_exchange),
            Self::Authentication(set) => set.contains(&entry.authentication),
            Self::Encryption(set) => set.contains(&entry.encryption),
            Self::Digest(set) => set.contains(&entry.digest),
            Self::Strength(set) => set.contains(&entry.strength),
            Self::Export(set) => set.contains(&entry.export),
            Self::Fips(set) => set.contains(&entry.fips),
            Self::Name(set) => set.contains(entry.name),
            Self::And(left, right) => left.test(entry) && right.test(entry),
            Self::Or(left, right) => left.test(entry) || right.test(entry),
            Self::Not(inner) => !inner.test(entry),
        }
    }

    /// True if this predicate provably matches every entry of any catalog
    ///
    /// Trees deeper than `MAX_PREDICATE_DEPTH` are never provably anything.
    #[must_use]
    pub fn is_always_true(&self) -> bool {
        self.depth() <= MAX_PREDICATE_DEPTH && self.always_true()
    }

    /// True if this predicate provably matches no entry of any catalog
    ///
    /// Trees deeper than `MAX_PREDICATE_DEPTH` are never provably anything.
    #[must_use]
    pub fn is_always_false(&self) -> bool {
        self.depth() <= MAX_PREDICATE_DEPTH && self.always_false()
    }

    fn always_true(&self) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Protocol(set) => covers(set, Protocol::ALL),
            Self::KeyExchange(set) => covers(set, KeyExchange::ALL),
            Self::Authentication(set) => covers(set, Authentication::ALL),
            Self::Encryption(set) => covers(set, Encryption::ALL),
            Self::Digest(set) => covers(set, Digest::ALL),
            Self::Strength(set) => covers(set, Strength::ALL),
            Self::Export(set) | Self::Fips(set) => covers(set, FLAGS),
            // The name domain is open-ended
            Self::Name(_) => false,
            Self::And(left, right) => left.always_true() && right.always_true(),
            Self::Or(left, right) => left.always_true() || right.always_true(),
            Self::Not(inner) => inner.always_false(),
        }
    }

    fn always_false(&self) -> bool {
        match self {
            Self::True => false,
            Self::False => true,
            Self::Protocol(set) => set.is_empty(),
            Self::KeyExchange(set) => set.is_empty(),
            Self::Authentication(set) => set.is_empty(),
            Self::Encryption(set) => set.is_empty(),
            Self::Digest(set) => set.is_empty(),
            Self::Strength(set) => set.is_empty(),
            Self::Export(set) | Self::Fips(set) => set.is_empty(),
            Self::Name(set) => set.is_empty(),
            Self::And(left, right) => left.always_false() || right.always_false(),
            Self::Or(left, right) => left.always_false() && right.always_false(),
            Self::Not(inner) => inner.always_true(),
        }
    }

    /// Nesting depth of the tree (a leaf has depth 1)
    ///
    /// Computed iteratively so that hostile trees cannot overflow the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            match node {
                Self::And(left, right) | Self::Or(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                Self::Not(inner) => stack.push((inner, depth + 1)),
                _ => {}
            }
        }
        max
    }

    /// Reject trees deeper than `MAX_PREDICATE_DEPTH`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::PredicateTooDeep` if the limit is exceeded
    pub fn check_depth(&self) -> Result<()> {
        if self.depth() > MAX_PREDICATE_DEPTH {
            return Err(SelectionError::PredicateTooDeep {
                max: MAX_PREDICATE_DEPTH,
            });
        }
        Ok(())
    }

    /// Render this predicate in rule-string syntax
    ///
    /// Returns `None` for shapes the rule grammar cannot express (`Or`, `Not`
    /// outside of a keyword, multi-name sets). Whenever a directive is
    /// returned, parsing it yields a predicate equal to `self`.
    ///
    /// ```
    /// use core_suites::{KeyExchange, Predicate, Strength};
    ///
    /// let p = Predicate::key_exchange([KeyExchange::Rsa]).and(Predicate::strength([Strength::High]));
    /// assert_eq!(p.to_directive().as_deref(), Some("kRSA+HIGH"));
    /// assert_eq!(Predicate::True.negate().to_directive(), None);
    /// ```
    #[must_use]
    pub fn to_directive(&self) -> Option<String> {
        if self.depth() > MAX_PREDICATE_DEPTH {
            return None;
        }
        self.directive()
    }

    fn directive(&self) -> Option<String> {
        if let Some(keyword) = keywords::keyword_for(self) {
            return Some(keyword.to_string());
        }
        match self {
            Self::Name(names) if names.len() == 1 => names
                .iter()
                .next()
                .filter(|name| keywords::looks_like_suite_name(name))
                .cloned(),
            Self::And(left, right) => {
                let right = right.directive()?;
                // `a+b+c` parses left-associatively
                if right.contains('+') {
                    return None;
                }
                Some(format!("{}+{}", left.directive()?, right))
            }
            _ => None,
        }
    }
}

/// True if `set` contains every value of `domain`
fn covers<T: Ord>(set: &BTreeSet<T>, domain: &[T]) -> bool {
    domain.iter().all(|value| set.contains(value))
}

fn write_set<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    set: impl IntoIterator<Item = T>,
) -> fmt::Result {
    write!(f, "{} is one of (", label)?;
    for (i, value) in set.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    f.write_str(")")
}

impl Predicate {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Protocol(set) => write_set(f, "protocol", set),
            Self::KeyExchange(set) => write_set(f, "key exchange", set),
            Self::Authentication(set) => write_set(f, "authentication", set),
            Self::Encryption(set) => write_set(f, "encryption", set),
            Self::Digest(set) => write_set(f, "digest", set),
            Self::Strength(set) => write_set(f, "strength", set),
            Self::Export(set) => write_set(f, "export", set),
            Self::Fips(set) => write_set(f, "fips", set),
            Self::Name(set) => write_set(f, "name", set),
            Self::And(left, right) => {
                f.write_str("(")?;
                left.describe(f)?;
                f.write_str(") and (")?;
                right.describe(f)?;
                f.write_str(")")
            }
            Self::Or(left, right) => {
                f.write_str("(")?;
                left.describe(f)?;
                f.write_str(") or (")?;
                right.describe(f)?;
                f.write_str(")")
            }
            Self::Not(inner) => {
                f.write_str("not (")?;
                inner.describe(f)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth() > MAX_PREDICATE_DEPTH {
            return write!(f, "predicate nested deeper than {}", MAX_PREDICATE_DEPTH);
        }
        self.describe(f)
    }
}

impl ops::BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl ops::BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl ops::Not for Predicate {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}
