//! DER building blocks for the integration tests
//!
//! The fixtures are assembled TLV by TLV so every expected model value is
//! known exactly.

// each test binary uses its own subset of the helpers
#![allow(dead_code)]

use asn1_rs::Oid;

pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 128 {
        out.push(len as u8);
    } else if len < 256 {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
    out.extend_from_slice(content);
    out
}

pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

pub fn seq(parts: &[&[u8]]) -> Vec<u8> {
    tlv(0x30, &concat(parts))
}

pub fn set(parts: &[&[u8]]) -> Vec<u8> {
    tlv(0x31, &concat(parts))
}

/// Context-specific constructed tag `[n]`
pub fn ctx(n: u8, content: &[u8]) -> Vec<u8> {
    tlv(0xa0 | n, content)
}

/// Context-specific primitive tag `[n]`
pub fn ctx_prim(n: u8, content: &[u8]) -> Vec<u8> {
    tlv(0x80 | n, content)
}

pub fn oid(arcs: &[u64]) -> Vec<u8> {
    let oid = Oid::from(arcs).expect("valid oid");
    tlv(0x06, oid.as_bytes())
}

pub fn int(content: &[u8]) -> Vec<u8> {
    tlv(0x02, content)
}

pub fn boolean(value: bool) -> Vec<u8> {
    tlv(0x01, &[if value { 0xff } else { 0x00 }])
}

pub fn utf8(s: &str) -> Vec<u8> {
    tlv(0x0c, s.as_bytes())
}

pub fn printable(s: &str) -> Vec<u8> {
    tlv(0x13, s.as_bytes())
}

pub fn ia5(s: &str) -> Vec<u8> {
    tlv(0x16, s.as_bytes())
}

pub fn octet(content: &[u8]) -> Vec<u8> {
    tlv(0x04, content)
}

pub fn bit_string(unused: u8, payload: &[u8]) -> Vec<u8> {
    let mut content = vec![unused];
    content.extend_from_slice(payload);
    tlv(0x03, &content)
}

pub fn utc_time(s: &str) -> Vec<u8> {
    tlv(0x17, s.as_bytes())
}

/// `AttributeTypeAndValue` wrapped in its RDN SET
pub fn rdn(attr_oid: &[u64], value: &[u8]) -> Vec<u8> {
    set(&[&seq(&[&oid(attr_oid), value])])
}

/// A Name with a single CN component
pub fn cn_name(cn: &str) -> Vec<u8> {
    seq(&[&rdn(&[2, 5, 4, 3], &utf8(cn))])
}

/// AlgorithmIdentifier for sha256WithRSAEncryption
pub fn sha256_rsa_alg() -> Vec<u8> {
    seq(&[&oid(&[1, 2, 840, 113549, 1, 1, 11]), &[0x05, 0x00]])
}

/// A SubjectPublicKeyInfo holding a small RSA key (128-bit modulus, e=65537)
pub fn rsa_spki() -> Vec<u8> {
    let rsa_key = seq(&[
        &int(&concat(&[
            &[0x00],
            &[0xd6, 0x4c, 0x84, 0x3e, 0x64, 0x78, 0x95, 0xe5],
            &[0xa6, 0x0d, 0x0c, 0x81, 0xd8, 0x9a, 0xaf, 0xd1],
        ])),
        &int(&[0x01, 0x00, 0x01]),
    ]);
    seq(&[
        &seq(&[&oid(&[1, 2, 840, 113549, 1, 1, 1]), &[0x05, 0x00]]),
        &bit_string(0, &rsa_key),
    ])
}

/// An Extension TLV
pub fn extension(ext_oid: &[u64], critical: Option<bool>, value: &[u8]) -> Vec<u8> {
    match critical {
        Some(flag) => seq(&[&oid(ext_oid), &boolean(flag), &octet(value)]),
        None => seq(&[&oid(ext_oid), &octet(value)]),
    }
}

/// PEM-armor a DER blob
pub fn pem_armor(label: &str, der: &[u8]) -> String {
    let body = data_encoding::BASE64.encode(der);
    let mut out = format!("-----BEGIN {}-----\n", label);
    for chunk in body.as_bytes().chunks(64) {
        out.push_str(std::str::from_utf8(chunk).unwrap());
        out.push('\n');
    }
    out.push_str(&format!("-----END {}-----\n", label));
    out
}
