//! Builtin cipher suite catalog
//!
//! Declaration order (ascending IANA code point) is the canonical order.

use crate::database::{
    Authentication as Au, Digest as Mac, Encryption as Enc, Entry, KeyExchange as Kx,
    Protocol::{self, SslV3, TlsV1, TlsV1_2, TlsV1_3},
    Strength::{self, Export, High, Low, Medium},
};

#[allow(clippy::too_many_arguments)]
const fn suite(
    id: u16,
    name: &'static str,
    openssl_name: &'static str,
    protocol: Protocol,
    key_exchange: Kx,
    authentication: Au,
    encryption: Enc,
    digest: Mac,
    strength: Strength,
    fips: bool,
    key_bits: u16,
) -> Entry {
    Entry {
        name,
        openssl_name,
        id,
        protocol,
        key_exchange,
        authentication,
        encryption,
        digest,
        export: matches!(strength, Strength::Export),
        strength,
        fips,
        key_bits,
    }
}

const NONE: Strength = Strength::None;

#[rustfmt::skip]
pub(crate) const BUILTIN: &[Entry] = &[
    suite(0x0001, "TLS_RSA_WITH_NULL_MD5", "NULL-MD5", SslV3, Kx::Rsa, Au::Rsa, Enc::Null, Mac::Md5, NONE, false, 0),
    suite(0x0002, "TLS_RSA_WITH_NULL_SHA", "NULL-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Null, Mac::Sha1, NONE, false, 0),
    suite(0x0003, "TLS_RSA_EXPORT_WITH_RC4_40_MD5", "EXP-RC4-MD5", SslV3, Kx::Rsa, Au::Rsa, Enc::Rc4, Mac::Md5, Export, false, 40),
    suite(0x0004, "TLS_RSA_WITH_RC4_128_MD5", "RC4-MD5", SslV3, Kx::Rsa, Au::Rsa, Enc::Rc4, Mac::Md5, Medium, false, 128),
    suite(0x0005, "TLS_RSA_WITH_RC4_128_SHA", "RC4-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Rc4, Mac::Sha1, Medium, false, 128),
    suite(0x0006, "TLS_RSA_EXPORT_WITH_RC2_CBC_40_MD5", "EXP-RC2-CBC-MD5", SslV3, Kx::Rsa, Au::Rsa, Enc::Rc2, Mac::Md5, Export, false, 40),
    suite(0x0007, "TLS_RSA_WITH_IDEA_CBC_SHA", "IDEA-CBC-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Idea, Mac::Sha1, Medium, false, 128),
    suite(0x0008, "TLS_RSA_EXPORT_WITH_DES40_CBC_SHA", "EXP-DES-CBC-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Des, Mac::Sha1, Export, false, 40),
    suite(0x0009, "TLS_RSA_WITH_DES_CBC_SHA", "DES-CBC-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Des, Mac::Sha1, Low, false, 56),
    suite(0x000A, "TLS_RSA_WITH_3DES_EDE_CBC_SHA", "DES-CBC3-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::TripleDes, Mac::Sha1, Medium, true, 112),
    suite(0x0011, "TLS_DHE_DSS_EXPORT_WITH_DES40_CBC_SHA", "EXP-EDH-DSS-DES-CBC-SHA", SslV3, Kx::Dhe, Au::Dss, Enc::Des, Mac::Sha1, Export, false, 40),
    suite(0x0012, "TLS_DHE_DSS_WITH_DES_CBC_SHA", "EDH-DSS-DES-CBC-SHA", SslV3, Kx::Dhe, Au::Dss, Enc::Des, Mac::Sha1, Low, false, 56),
    suite(0x0013, "TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA", "EDH-DSS-DES-CBC3-SHA", SslV3, Kx::Dhe, Au::Dss, Enc::TripleDes, Mac::Sha1, Medium, true, 112),
    suite(0x0014, "TLS_DHE_RSA_EXPORT_WITH_DES40_CBC_SHA", "EXP-EDH-RSA-DES-CBC-SHA", SslV3, Kx::Dhe, Au::Rsa, Enc::Des, Mac::Sha1, Export, false, 40),
    suite(0x0015, "TLS_DHE_RSA_WITH_DES_CBC_SHA", "EDH-RSA-DES-CBC-SHA", SslV3, Kx::Dhe, Au::Rsa, Enc::Des, Mac::Sha1, Low, false, 56),
    suite(0x0016, "TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA", "EDH-RSA-DES-CBC3-SHA", SslV3, Kx::Dhe, Au::Rsa, Enc::TripleDes, Mac::Sha1, Medium, true, 112),
    suite(0x0017, "TLS_DH_anon_EXPORT_WITH_RC4_40_MD5", "EXP-ADH-RC4-MD5", SslV3, Kx::Dhe, Au::Null, Enc::Rc4, Mac::Md5, Export, false, 40),
    suite(0x0018, "TLS_DH_anon_WITH_RC4_128_MD5", "ADH-RC4-MD5", SslV3, Kx::Dhe, Au::Null, Enc::Rc4, Mac::Md5, Medium, false, 128),
    suite(0x001B, "TLS_DH_anon_WITH_3DES_EDE_CBC_SHA", "ADH-DES-CBC3-SHA", SslV3, Kx::Dhe, Au::Null, Enc::TripleDes, Mac::Sha1, Medium, false, 112),
    suite(0x002F, "TLS_RSA_WITH_AES_128_CBC_SHA", "AES128-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Aes128, Mac::Sha1, High, true, 128),
    suite(0x0032, "TLS_DHE_DSS_WITH_AES_128_CBC_SHA", "DHE-DSS-AES128-SHA", SslV3, Kx::Dhe, Au::Dss, Enc::Aes128, Mac::Sha1, High, true, 128),
    suite(0x0033, "TLS_DHE_RSA_WITH_AES_128_CBC_SHA", "DHE-RSA-AES128-SHA", SslV3, Kx::Dhe, Au::Rsa, Enc::Aes128, Mac::Sha1, High, true, 128),
    suite(0x0034, "TLS_DH_anon_WITH_AES_128_CBC_SHA", "ADH-AES128-SHA", SslV3, Kx::Dhe, Au::Null, Enc::Aes128, Mac::Sha1, High, false, 128),
    suite(0x0035, "TLS_RSA_WITH_AES_256_CBC_SHA", "AES256-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Aes256, Mac::Sha1, High, true, 256),
    suite(0x0039, "TLS_DHE_RSA_WITH_AES_256_CBC_SHA", "DHE-RSA-AES256-SHA", SslV3, Kx::Dhe, Au::Rsa, Enc::Aes256, Mac::Sha1, High, true, 256),
    suite(0x003B, "TLS_RSA_WITH_NULL_SHA256", "NULL-SHA256", TlsV1_2, Kx::Rsa, Au::Rsa, Enc::Null, Mac::Sha256, NONE, false, 0),
    suite(0x003C, "TLS_RSA_WITH_AES_128_CBC_SHA256", "AES128-SHA256", TlsV1_2, Kx::Rsa, Au::Rsa, Enc::Aes128, Mac::Sha256, High, true, 128),
    suite(0x003D, "TLS_RSA_WITH_AES_256_CBC_SHA256", "AES256-SHA256", TlsV1_2, Kx::Rsa, Au::Rsa, Enc::Aes256, Mac::Sha256, High, true, 256),
    suite(0x0041, "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA", "CAMELLIA128-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Camellia128, Mac::Sha1, High, false, 128),
    suite(0x0067, "TLS_DHE_RSA_WITH_AES_128_CBC_SHA256", "DHE-RSA-AES128-SHA256", TlsV1_2, Kx::Dhe, Au::Rsa, Enc::Aes128, Mac::Sha256, High, true, 128),
    suite(0x006B, "TLS_DHE_RSA_WITH_AES_256_CBC_SHA256", "DHE-RSA-AES256-SHA256", TlsV1_2, Kx::Dhe, Au::Rsa, Enc::Aes256, Mac::Sha256, High, true, 256),
    suite(0x0084, "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA", "CAMELLIA256-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Camellia256, Mac::Sha1, High, false, 256),
    suite(0x008C, "TLS_PSK_WITH_AES_128_CBC_SHA", "PSK-AES128-CBC-SHA", SslV3, Kx::Psk, Au::Psk, Enc::Aes128, Mac::Sha1, High, false, 128),
    suite(0x0096, "TLS_RSA_WITH_SEED_CBC_SHA", "SEED-SHA", SslV3, Kx::Rsa, Au::Rsa, Enc::Seed, Mac::Sha1, Medium, false, 128),
    suite(0x009C, "TLS_RSA_WITH_AES_128_GCM_SHA256", "AES128-GCM-SHA256", TlsV1_2, Kx::Rsa, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, High, true, 128),
    suite(0x009D, "TLS_RSA_WITH_AES_256_GCM_SHA384", "AES256-GCM-SHA384", TlsV1_2, Kx::Rsa, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, High, true, 256),
    suite(0x009E, "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256", "DHE-RSA-AES128-GCM-SHA256", TlsV1_2, Kx::Dhe, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, High, true, 128),
    suite(0x009F, "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384", "DHE-RSA-AES256-GCM-SHA384", TlsV1_2, Kx::Dhe, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, High, true, 256),
    suite(0x00A8, "TLS_PSK_WITH_AES_128_GCM_SHA256", "PSK-AES128-GCM-SHA256", TlsV1_2, Kx::Psk, Au::Psk, Enc::Aes128Gcm, Mac::Aead, High, false, 128),
    suite(0x1301, "TLS_AES_128_GCM_SHA256", "TLS_AES_128_GCM_SHA256", TlsV1_3, Kx::Any, Au::Any, Enc::Aes128Gcm, Mac::Aead, High, true, 128),
    suite(0x1302, "TLS_AES_256_GCM_SHA384", "TLS_AES_256_GCM_SHA384", TlsV1_3, Kx::Any, Au::Any, Enc::Aes256Gcm, Mac::Aead, High, true, 256),
    suite(0x1303, "TLS_CHACHA20_POLY1305_SHA256", "TLS_CHACHA20_POLY1305_SHA256", TlsV1_3, Kx::Any, Au::Any, Enc::ChaCha20, Mac::Aead, High, false, 256),
    suite(0x1304, "TLS_AES_128_CCM_SHA256", "TLS_AES_128_CCM_SHA256", TlsV1_3, Kx::Any, Au::Any, Enc::Aes128Ccm, Mac::Aead, High, true, 128),
    suite(0xC006, "TLS_ECDHE_ECDSA_WITH_NULL_SHA", "ECDHE-ECDSA-NULL-SHA", TlsV1, Kx::Ecdhe, Au::Ecdsa, Enc::Null, Mac::Sha1, NONE, false, 0),
    suite(0xC007, "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA", "ECDHE-ECDSA-RC4-SHA", TlsV1, Kx::Ecdhe, Au::Ecdsa, Enc::Rc4, Mac::Sha1, Medium, false, 128),
    suite(0xC009, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA", "ECDHE-ECDSA-AES128-SHA", TlsV1, Kx::Ecdhe, Au::Ecdsa, Enc::Aes128, Mac::Sha1, High, true, 128),
    suite(0xC00A, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA", "ECDHE-ECDSA-AES256-SHA", TlsV1, Kx::Ecdhe, Au::Ecdsa, Enc::Aes256, Mac::Sha1, High, true, 256),
    suite(0xC011, "TLS_ECDHE_RSA_WITH_RC4_128_SHA", "ECDHE-RSA-RC4-SHA", TlsV1, Kx::Ecdhe, Au::Rsa, Enc::Rc4, Mac::Sha1, Medium, false, 128),
    suite(0xC012, "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA", "ECDHE-RSA-DES-CBC3-SHA", TlsV1, Kx::Ecdhe, Au::Rsa, Enc::TripleDes, Mac::Sha1, Medium, true, 112),
    suite(0xC013, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA", "ECDHE-RSA-AES128-SHA", TlsV1, Kx::Ecdhe, Au::Rsa, Enc::Aes128, Mac::Sha1, High, true, 128),
    suite(0xC014, "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA", "ECDHE-RSA-AES256-SHA", TlsV1, Kx::Ecdhe, Au::Rsa, Enc::Aes256, Mac::Sha1, High, true, 256),
    suite(0xC018, "TLS_ECDH_anon_WITH_AES_128_CBC_SHA", "AECDH-AES128-SHA", TlsV1, Kx::Ecdhe, Au::Null, Enc::Aes128, Mac::Sha1, High, false, 128),
    suite(0xC02B, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256", "ECDHE-ECDSA-AES128-GCM-SHA256", TlsV1_2, Kx::Ecdhe, Au::Ecdsa, Enc::Aes128Gcm, Mac::Aead, High, true, 128),
    suite(0xC02C, "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384", "ECDHE-ECDSA-AES256-GCM-SHA384", TlsV1_2, Kx::Ecdhe, Au::Ecdsa, Enc::Aes256Gcm, Mac::Aead, High, true, 256),
    suite(0xC02F, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256", "ECDHE-RSA-AES128-GCM-SHA256", TlsV1_2, Kx::Ecdhe, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, High, true, 128),
    suite(0xC030, "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384", "ECDHE-RSA-AES256-GCM-SHA384", TlsV1_2, Kx::Ecdhe, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, High, true, 256),
    suite(0xCCA8, "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256", "ECDHE-RSA-CHACHA20-POLY1305", TlsV1_2, Kx::Ecdhe, Au::Rsa, Enc::ChaCha20, Mac::Aead, High, false, 256),
    suite(0xCCA9, "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256", "ECDHE-ECDSA-CHACHA20-POLY1305", TlsV1_2, Kx::Ecdhe, Au::Ecdsa, Enc::ChaCha20, Mac::Aead, High, false, 256),
    suite(0xCCAA, "TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256", "DHE-RSA-CHACHA20-POLY1305", TlsV1_2, Kx::Dhe, Au::Rsa, Enc::ChaCha20, Mac::Aead, High, false, 256),
];
