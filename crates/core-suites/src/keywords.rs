//! OpenSSL-style suite-class keywords
//!
//! Each keyword maps to a fixed [`Predicate`]. Aliases are listed after their
//! canonical spelling so that rendering a predicate back to a keyword always
//! picks the canonical one.

use crate::database::{Authentication, Digest, Encryption, KeyExchange, Protocol, Strength};
use crate::predicate::Predicate;

/// Every recognised keyword, canonical spellings first
pub const KEYWORDS: &[&str] = &[
    "ALL",
    "DEFAULT",
    "COMPLEMENTOFDEFAULT",
    "HIGH",
    "MEDIUM",
    "LOW",
    "EXPORT",
    "EXP",
    "eNULL",
    "NULL",
    "aNULL",
    "ADH",
    "AECDH",
    "FIPS",
    "SSLv3",
    "TLSv1",
    "TLSv1.2",
    "TLSv1.3",
    "kRSA",
    "RSA",
    "kDHE",
    "kEDH",
    "DHE",
    "EDH",
    "kECDHE",
    "kEECDH",
    "ECDHE",
    "EECDH",
    "kPSK",
    "PSK",
    "aRSA",
    "aDSS",
    "DSS",
    "aECDSA",
    "ECDSA",
    "aPSK",
    "RC4",
    "RC2",
    "DES",
    "3DES",
    "IDEA",
    "SEED",
    "AES",
    "AES128",
    "AES256",
    "AESGCM",
    "AESCCM",
    "CHACHA20",
    "CAMELLIA",
    "CAMELLIA128",
    "CAMELLIA256",
    "MD5",
    "SHA1",
    "SHA",
    "SHA256",
    "SHA384",
];

/// Suites a sensible default excludes: anonymous, unencrypted, weak, or RC4
fn complement_of_default() -> Predicate {
    Predicate::authentication([Authentication::Null])
        | Predicate::encryption([Encryption::Null])
        | Predicate::strength([Strength::None, Strength::Export, Strength::Low])
        | Predicate::encryption([Encryption::Rc4])
}

/// Resolve a keyword to its predicate
#[must_use]
pub fn keyword(word: &str) -> Option<Predicate> {
    use Encryption as Enc;
    use KeyExchange as Kx;

    let predicate = match word {
        "ALL" => Predicate::True,
        "DEFAULT" => !complement_of_default(),
        "COMPLEMENTOFDEFAULT" => complement_of_default(),
        "HIGH" => Predicate::strength([Strength::High]),
        "MEDIUM" => Predicate::strength([Strength::Medium]),
        "LOW" => Predicate::strength([Strength::Low]),
        "EXPORT" | "EXP" => Predicate::export(true),
        "eNULL" | "NULL" => Predicate::encryption([Enc::Null]),
        "aNULL" => Predicate::authentication([Authentication::Null]),
        "ADH" => Predicate::key_exchange([Kx::Dhe]) & Predicate::authentication([Authentication::Null]),
        "AECDH" => {
            Predicate::key_exchange([Kx::Ecdhe]) & Predicate::authentication([Authentication::Null])
        }
        "FIPS" => Predicate::fips(true),
        "SSLv3" => Predicate::protocol([Protocol::SslV3]),
        "TLSv1" => Predicate::protocol([Protocol::TlsV1]),
        "TLSv1.2" => Predicate::protocol([Protocol::TlsV1_2]),
        "TLSv1.3" => Predicate::protocol([Protocol::TlsV1_3]),
        "kRSA" | "RSA" => Predicate::key_exchange([Kx::Rsa]),
        "kDHE" | "kEDH" => Predicate::key_exchange([Kx::Dhe]),
        "DHE" | "EDH" => {
            Predicate::key_exchange([Kx::Dhe]) & !Predicate::authentication([Authentication::Null])
        }
        "kECDHE" | "kEECDH" => Predicate::key_exchange([Kx::Ecdhe]),
        "ECDHE" | "EECDH" => {
            Predicate::key_exchange([Kx::Ecdhe]) & !Predicate::authentication([Authentication::Null])
        }
        "kPSK" | "PSK" => Predicate::key_exchange([Kx::Psk]),
        "aRSA" => Predicate::authentication([Authentication::Rsa]),
        "aDSS" | "DSS" => Predicate::authentication([Authentication::Dss]),
        "aECDSA" | "ECDSA" => Predicate::authentication([Authentication::Ecdsa]),
        "aPSK" => Predicate::authentication([Authentication::Psk]),
        "RC4" => Predicate::encryption([Enc::Rc4]),
        "RC2" => Predicate::encryption([Enc::Rc2]),
        "DES" => Predicate::encryption([Enc::Des]),
        "3DES" => Predicate::encryption([Enc::TripleDes]),
        "IDEA" => Predicate::encryption([Enc::Idea]),
        "SEED" => Predicate::encryption([Enc::Seed]),
        "AES" => Predicate::encryption([
            Enc::Aes128,
            Enc::Aes256,
            Enc::Aes128Gcm,
            Enc::Aes256Gcm,
            Enc::Aes128Ccm,
        ]),
        "AES128" => Predicate::encryption([Enc::Aes128, Enc::Aes128Gcm, Enc::Aes128Ccm]),
        "AES256" => Predicate::encryption([Enc::Aes256, Enc::Aes256Gcm]),
        "AESGCM" => Predicate::encryption([Enc::Aes128Gcm, Enc::Aes256Gcm]),
        "AESCCM" => Predicate::encryption([Enc::Aes128Ccm]),
        "CHACHA20" => Predicate::encryption([Enc::ChaCha20]),
        "CAMELLIA" => Predicate::encryption([Enc::Camellia128, Enc::Camellia256]),
        "CAMELLIA128" => Predicate::encryption([Enc::Camellia128]),
        "CAMELLIA256" => Predicate::encryption([Enc::Camellia256]),
        "MD5" => Predicate::digest([Digest::Md5]),
        "SHA1" | "SHA" => Predicate::digest([Digest::Sha1]),
        "SHA256" => Predicate::digest([Digest::Sha256]),
        "SHA384" => Predicate::digest([Digest::Sha384]),
        _ => return None,
    };
    Some(predicate)
}

/// Canonical keyword whose predicate equals `predicate`, if any
#[must_use]
pub fn keyword_for(predicate: &Predicate) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .find(|word| keyword(word).as_ref() == Some(predicate))
}

/// True if a rule-string term names a specific suite rather than a keyword
///
/// OpenSSL names contain `-` (`ECDHE-RSA-AES128-GCM-SHA256`); standard names
/// start with `TLS_` or `SSL_`.
#[must_use]
pub fn looks_like_suite_name(term: &str) -> bool {
    term.contains('-') || term.starts_with("TLS_") || term.starts_with("SSL_")
}
