//! Helpers over the generic `asn1_rs::Any` node tree
//!
//! The decoder never interprets raw TLV bytes itself: `asn1-rs` turns the byte
//! sequence into typed nodes, and everything here only pattern-matches on node
//! kind and content. Constructed nodes are walked into ordered child lists.

use asn1_rs::{Any, Class, FromBer, Tag};
use data_encoding::HEXLOWER;

use crate::error::DecodeError;

/// Parse the root node of a BER/DER byte sequence.
///
/// Trailing bytes after the first top-level element are ignored, as most
/// tools are tolerant of trailing padding.
pub(crate) fn parse_root(bytes: &[u8]) -> Result<Any<'_>, DecodeError> {
    let (_, any) = Any::from_ber(bytes)?;
    Ok(any)
}

/// Walk the content of a constructed node into its ordered children.
pub(crate) fn children<'a>(any: &Any<'a>) -> Result<Vec<Any<'a>>, DecodeError> {
    let mut rem = any.data;
    let mut nodes = Vec::new();
    while !rem.is_empty() {
        let (r, child) = Any::from_ber(rem)?;
        nodes.push(child);
        rem = r;
    }
    Ok(nodes)
}

/// True if the node carries the given context-specific tag number.
pub(crate) fn is_context(any: &Any<'_>, number: u32) -> bool {
    any.class() == Class::ContextSpecific && any.tag().0 == number
}

/// Lower-case hex rendering of a byte slice.
pub(crate) fn hex_lower(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

/// Extract the textual value of a string-kind node.
///
/// The UTF-8 family (UTF8String, PrintableString, IA5String, VisibleString,
/// NumericString, GeneralString, and TeletexString, which in practice carries
/// Latin-1/UTF-8) is read as UTF-8; BMPString is UTF-16BE. Returns `None` for
/// non-string kinds or undecodable content.
pub(crate) fn text_value(any: &Any<'_>) -> Option<String> {
    match any.tag() {
        Tag::Utf8String
        | Tag::PrintableString
        | Tag::Ia5String
        | Tag::VisibleString
        | Tag::NumericString
        | Tag::GeneralString => std::str::from_utf8(any.data).ok().map(str::to_string),
        Tag::BmpString => decode_utf16_be(any.data),
        // TeletexString (T61String, tag 20) has no named constant here
        t if t.0 == 20 => std::str::from_utf8(any.data).ok().map(str::to_string),
        _ => None,
    }
}

/// True for the node kinds `text_value` understands.
pub(crate) fn is_textual(any: &Any<'_>) -> bool {
    matches!(
        any.tag(),
        Tag::Utf8String
            | Tag::PrintableString
            | Tag::Ia5String
            | Tag::VisibleString
            | Tag::NumericString
            | Tag::GeneralString
            | Tag::BmpString
    ) || any.tag().0 == 20
}

fn decode_utf16_be(data: &[u8]) -> Option<String> {
    if data.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

/// Split a primitive BIT STRING node into its unused-bit count and payload.
pub(crate) fn bit_string_parts<'a>(any: &Any<'a>) -> Result<(usize, &'a [u8]), DecodeError> {
    if any.tag() != Tag::BitString || any.data.is_empty() {
        return Err(DecodeError::ExtensionDecode);
    }
    let unused = any.data[0] as usize;
    if unused > 7 {
        return Err(DecodeError::ExtensionDecode);
    }
    Ok((unused, &any.data[1..]))
}

/// Decode a small INTEGER node (up to 8 content bytes) to `i64`.
pub(crate) fn int_value(any: &Any<'_>) -> Option<i64> {
    if any.tag() != Tag::Integer && any.tag() != Tag::Enumerated {
        return None;
    }
    int_from_bytes(any.data)
}

pub(crate) fn int_from_bytes(data: &[u8]) -> Option<i64> {
    if data.is_empty() || data.len() > 8 {
        return None;
    }
    let negative = data[0] & 0x80 != 0;
    let mut acc: i64 = if negative { -1 } else { 0 };
    for &b in data {
        acc = (acc << 8) | i64::from(b);
    }
    Some(acc)
}

/// Strip the sign byte a DER INTEGER prepends to values with the high bit set.
pub(crate) fn strip_sign_byte(data: &[u8]) -> &[u8] {
    match data.split_first() {
        Some((0, rest)) if !rest.is_empty() => rest,
        _ => data,
    }
}
