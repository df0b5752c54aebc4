//! Mechanism database: the fixed universe of known cipher suites
//!
//! Every suite is described by an immutable [`Entry`] carrying its
//! classification attributes. The database keeps entries in their catalog
//! declaration order, which is the canonical order used as tie-break by the
//! selector builder.
//!
//! The database is an ordinary value. Parsers and builders take it by
//! reference, so tests can inject small fake catalogs through
//! [`MechanismDatabase::from_entries`].

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{Result, SelectionError};

/// Protocol version a suite was introduced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// SSL 3.0
    SslV3,
    /// TLS 1.0
    TlsV1,
    /// TLS 1.2
    TlsV1_2,
    /// TLS 1.3
    TlsV1_3,
}

impl Protocol {
    /// Every protocol value, in ascending order
    pub const ALL: &'static [Self] = &[Self::SslV3, Self::TlsV1, Self::TlsV1_2, Self::TlsV1_3];
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SslV3 => "SSLv3",
            Self::TlsV1 => "TLSv1",
            Self::TlsV1_2 => "TLSv1.2",
            Self::TlsV1_3 => "TLSv1.3",
        })
    }
}

/// Key exchange algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyExchange {
    /// Static RSA key transport
    Rsa,
    /// Ephemeral finite-field Diffie-Hellman
    Dhe,
    /// Ephemeral elliptic-curve Diffie-Hellman
    Ecdhe,
    /// Pre-shared key
    Psk,
    /// Negotiated separately (TLS 1.3)
    Any,
}

impl KeyExchange {
    /// Every key exchange value
    pub const ALL: &'static [Self] = &[Self::Rsa, Self::Dhe, Self::Ecdhe, Self::Psk, Self::Any];
}

impl fmt::Display for KeyExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rsa => "RSA",
            Self::Dhe => "DHE",
            Self::Ecdhe => "ECDHE",
            Self::Psk => "PSK",
            Self::Any => "ANY",
        })
    }
}

/// Authentication algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Authentication {
    /// RSA signatures
    Rsa,
    /// DSA signatures
    Dss,
    /// ECDSA signatures
    Ecdsa,
    /// Pre-shared key
    Psk,
    /// Anonymous (no authentication)
    Null,
    /// Negotiated separately (TLS 1.3)
    Any,
}

impl Authentication {
    /// Every authentication value
    pub const ALL: &'static [Self] = &[
        Self::Rsa,
        Self::Dss,
        Self::Ecdsa,
        Self::Psk,
        Self::Null,
        Self::Any,
    ];
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rsa => "RSA",
            Self::Dss => "DSS",
            Self::Ecdsa => "ECDSA",
            Self::Psk => "PSK",
            Self::Null => "NULL",
            Self::Any => "ANY",
        })
    }
}

/// Bulk encryption algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Encryption {
    /// No encryption
    Null,
    /// RC4 stream cipher
    Rc4,
    /// RC2 in CBC mode
    Rc2,
    /// Single DES in CBC mode
    Des,
    /// Triple DES (EDE) in CBC mode
    TripleDes,
    /// IDEA in CBC mode
    Idea,
    /// SEED in CBC mode
    Seed,
    /// AES-128 in CBC mode
    Aes128,
    /// AES-256 in CBC mode
    Aes256,
    /// AES-128 in GCM mode
    Aes128Gcm,
    /// AES-256 in GCM mode
    Aes256Gcm,
    /// AES-128 in CCM mode
    Aes128Ccm,
    /// ChaCha20-Poly1305
    ChaCha20,
    /// Camellia-128 in CBC mode
    Camellia128,
    /// Camellia-256 in CBC mode
    Camellia256,
}

impl Encryption {
    /// Every encryption value
    pub const ALL: &'static [Self] = &[
        Self::Null,
        Self::Rc4,
        Self::Rc2,
        Self::Des,
        Self::TripleDes,
        Self::Idea,
        Self::Seed,
        Self::Aes128,
        Self::Aes256,
        Self::Aes128Gcm,
        Self::Aes256Gcm,
        Self::Aes128Ccm,
        Self::ChaCha20,
        Self::Camellia128,
        Self::Camellia256,
    ];
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "NULL",
            Self::Rc4 => "RC4",
            Self::Rc2 => "RC2",
            Self::Des => "DES",
            Self::TripleDes => "3DES",
            Self::Idea => "IDEA",
            Self::Seed => "SEED",
            Self::Aes128 => "AES128",
            Self::Aes256 => "AES256",
            Self::Aes128Gcm => "AES128GCM",
            Self::Aes256Gcm => "AES256GCM",
            Self::Aes128Ccm => "AES128CCM",
            Self::ChaCha20 => "CHACHA20",
            Self::Camellia128 => "CAMELLIA128",
            Self::Camellia256 => "CAMELLIA256",
        })
    }
}

/// Digest / MAC algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Digest {
    /// HMAC-MD5
    Md5,
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA256 (or SHA256 PRF)
    Sha256,
    /// HMAC-SHA384 (or SHA384 PRF)
    Sha384,
    /// Integrity provided by the AEAD cipher
    Aead,
}

impl Digest {
    /// Every digest value
    pub const ALL: &'static [Self] = &[Self::Md5, Self::Sha1, Self::Sha256, Self::Sha384, Self::Aead];
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Aead => "AEAD",
        })
    }
}

/// Coarse strength class, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// No confidentiality at all
    None,
    /// Export-grade (40/56-bit)
    Export,
    /// Low (single DES)
    Low,
    /// Medium (RC4, 3DES, SEED, IDEA)
    Medium,
    /// High (AES, ChaCha20, Camellia)
    High,
}

impl Strength {
    /// Every strength class, weakest first
    pub const ALL: &'static [Self] = &[Self::None, Self::Export, Self::Low, Self::Medium, Self::High];
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::Export => "EXPORT",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        })
    }
}

/// A single catalog entry
///
/// Entries are plain `'static` data; the builtin catalog is a constant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Standard (IANA) suite name, the identity of the entry
    pub name: &'static str,
    /// OpenSSL alias name
    pub openssl_name: &'static str,
    /// IANA code point
    pub id: u16,
    /// Protocol version the suite was introduced in
    pub protocol: Protocol,
    /// Key exchange algorithm
    pub key_exchange: KeyExchange,
    /// Authentication algorithm
    pub authentication: Authentication,
    /// Bulk encryption algorithm
    pub encryption: Encryption,
    /// Digest / MAC algorithm
    pub digest: Digest,
    /// Export-grade flag
    pub export: bool,
    /// Strength class
    pub strength: Strength,
    /// FIPS 140 approved combination
    pub fips: bool,
    /// Effective bulk key length in bits
    pub key_bits: u16,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} Kx={} Au={} Enc={} Mac={} {}{}",
            self.name,
            self.openssl_name,
            self.protocol,
            self.key_exchange,
            self.authentication,
            self.encryption,
            self.digest,
            self.strength,
            if self.export { " export" } else { "" }
        )
    }
}

/// Immutable catalog of known suites
///
/// # Example
///
/// ```
/// use core_suites::MechanismDatabase;
///
/// let db = MechanismDatabase::builtin();
/// let entry = db.lookup("ECDHE-RSA-AES128-GCM-SHA256").unwrap();
/// assert_eq!(entry.name, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
/// assert!(db.lookup("NOT-A-SUITE").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MechanismDatabase {
    entries: Vec<Entry>,
    /// Standard and OpenSSL names -> position in `entries`
    index: BTreeMap<&'static str, usize>,
}

impl MechanismDatabase {
    /// Build the compiled-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        let entries = catalog::BUILTIN.to_vec();
        let mut index = BTreeMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.insert(entry.name, i);
            index.insert(entry.openssl_name, i);
        }
        Self { entries, index }
    }

    /// Build a catalog from explicit entries, kept in the given order
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::DuplicateEntry` if a standard or OpenSSL name
    /// is used by two different entries.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (i, entry) in entries.iter().enumerate() {
            for name in [entry.name, entry.openssl_name] {
                match index.insert(name, i) {
                    Some(prev) if prev != i => {
                        return Err(SelectionError::DuplicateEntry(name.to_string()));
                    }
                    _ => {}
                }
            }
        }
        Ok(Self { entries, index })
    }

    /// Find an entry by standard or OpenSSL name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.index_of(name).and_then(|i| self.entries.get(i))
    }

    /// Canonical position of an entry, by standard or OpenSSL name
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// All entries in canonical order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MechanismDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}
