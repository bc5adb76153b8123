//! Generic bit-flag decoding for BIT STRING extensions
//!
//! Key Usage and Netscape Certificate Type both encode a small set of named
//! flags as a BIT STRING. Flags are tested high bit first (0x80 → 0x01) on
//! each byte, after masking off the unused low-order bits of the final byte.

use asn1_rs::Any;

use crate::der;
use crate::error::DecodeError;

// RFC 5280, 4.2.1.3, in declaration order
pub(crate) const KEY_USAGE_FLAGS: &[&str] = &[
    "Digital Signature",
    "Non Repudiation",
    "Key Encipherment",
    "Data Encipherment",
    "Key Agreement",
    "Key Cert Sign",
    "cRL Sign",
    "Encipher Only",
    "Decipher Only",
];

// bit-0 SSL client .. bit-7 Object Signing CA, per the Netscape extension spec
pub(crate) const NS_CERT_TYPE_FLAGS: &[&str] = &[
    "SSL client",
    "SSL server",
    "S/MIME",
    "Object Signing",
    "Reserved",
    "SSL CA",
    "S/MIME CA",
    "Object Signing CA",
];

/// Decode up to two payload bytes against a flag label table.
///
/// When the payload is exactly one byte, the low `unused_bits` bits of that
/// byte are masked off before testing; with exactly two bytes the mask applies
/// to the second byte instead, and only its 0x80 bit can name a ninth flag.
pub(crate) fn decode_bit_flags(
    payload: &[u8],
    unused_bits: usize,
    labels: &[&'static str],
) -> Vec<&'static str> {
    let mut byte1 = payload.first().copied().unwrap_or(0);
    let mut byte2 = payload.get(1).copied().unwrap_or(0);

    if payload.len() == 1 {
        byte1 = mask_unused(byte1, unused_bits);
    }
    if payload.len() == 2 {
        byte2 = mask_unused(byte2, unused_bits);
    }

    let mut flags = Vec::new();
    for (idx, label) in labels.iter().enumerate().take(8) {
        if byte1 & (0x80 >> idx) != 0 {
            flags.push(*label);
        }
    }
    if labels.len() > 8 && byte2 & 0x80 != 0 {
        flags.push(labels[8]);
    }
    flags
}

fn mask_unused(byte: u8, unused_bits: usize) -> u8 {
    (byte >> unused_bits) << unused_bits
}

/// Decode a Key Usage BIT STRING node.
pub(crate) fn decode_key_usage(input: &[u8]) -> Result<Vec<&'static str>, DecodeError> {
    let root = der::parse_root(input)?;
    decode_key_usage_node(&root)
}

/// Decode an already-parsed Key Usage BIT STRING node (also reached from the
/// CSR attribute converter).
pub(crate) fn decode_key_usage_node(any: &Any<'_>) -> Result<Vec<&'static str>, DecodeError> {
    let (unused, payload) = der::bit_string_parts(any)?;
    Ok(decode_bit_flags(payload, unused, KEY_USAGE_FLAGS))
}

/// Decode a Netscape Certificate Type BIT STRING node.
pub(crate) fn decode_ns_cert_type(input: &[u8]) -> Result<Vec<&'static str>, DecodeError> {
    let root = der::parse_root(input)?;
    let (unused, payload) = der::bit_string_parts(&root)?;
    Ok(decode_bit_flags(payload, unused, NS_CERT_TYPE_FLAGS))
}
