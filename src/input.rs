//! Input-format detection and normalization
//!
//! The decoder accepts one string of unknown encoding: PEM-armored text, bare
//! base64, hex digits (optionally interspersed with whitespace), or a raw
//! binary-as-text string. This module turns it into the underlying byte
//! sequence and remembers which form it came in.

use core::fmt;

use data_encoding::{DecodeKind, Encoding, Specification};
use lazy_static::lazy_static;

use crate::error::{DecodeError, InputFormatError};

/// Encoding of the original input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceType {
    /// PEM armor or a bare base64 body
    Pem,
    /// Hex digits, case-insensitive
    Hex,
    /// Raw binary passed through as text
    Der,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Pem => f.write_str("pem"),
            SourceType::Hex => f.write_str("hex"),
            SourceType::Der => f.write_str("der"),
        }
    }
}

const WHITESPACE: &str = " \t\r\n\u{0c}";

lazy_static! {
    // RFC 4648 standard alphabet, accepting the URL-safe variant and ignoring
    // interleaved whitespace. Trailing-bit checks are relaxed: encoders in the
    // wild do not always zero the unused bits of the last symbol.
    static ref BASE64_RELAXED: Encoding = {
        let mut spec = Specification::new();
        spec.symbols
            .push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
        spec.translate.from.push_str("-_");
        spec.translate.to.push_str("+/");
        spec.ignore.push_str(WHITESPACE);
        spec.check_trailing_bits = false;
        spec.encoding().unwrap()
    };
    static ref HEX_RELAXED: Encoding = {
        let mut spec = Specification::new();
        spec.symbols.push_str("0123456789abcdef");
        spec.translate.from.push_str("ABCDEF");
        spec.translate.to.push_str("abcdef");
        spec.ignore.push_str(WHITESPACE);
        spec.encoding().unwrap()
    };
}

/// Detect the encoding of `source` and decode it to bytes.
///
/// Detection: PEM armor wins, then a body of only hex digits, then a body of
/// base64 alphabet characters (hex is the narrower class, so it is tested
/// first), and anything else is taken as a raw binary string, one byte per
/// character.
pub fn normalize(source: &str) -> Result<(Vec<u8>, SourceType), DecodeError> {
    if source.contains("-----BEGIN") {
        let body = strip_armor(source);
        let bytes = decode_base64(&body)?;
        return Ok((bytes, SourceType::Pem));
    }

    let has_content = source.chars().any(|c| !c.is_whitespace());

    if has_content && source.chars().all(is_hex_char) {
        let bytes = decode_hex(source)?;
        return Ok((bytes, SourceType::Hex));
    }

    if has_content && source.chars().all(is_base64_char) {
        let bytes = decode_base64(source)?;
        return Ok((bytes, SourceType::Pem));
    }

    // raw binary string: keep the low byte of every char, as a JS-style
    // binary string would
    let bytes = source.chars().map(|c| (c as u32) as u8).collect();
    Ok((bytes, SourceType::Der))
}

fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c.is_whitespace()
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "+/=-_".contains(c) || c.is_whitespace()
}

/// Drop the `-----BEGIN …-----` / `-----END …-----` marker lines, keeping the
/// base64 body between them.
fn strip_armor(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with("-----"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_base64(body: &str) -> Result<Vec<u8>, DecodeError> {
    // decoding stops at the first padding character
    let body = match body.find('=') {
        Some(idx) => &body[..idx],
        None => body,
    };
    BASE64_RELAXED.decode(body.as_bytes()).map_err(|e| {
        let e = match e.kind {
            DecodeKind::Length => InputFormatError::IncompleteBase64,
            _ => InputFormatError::IllegalCharacter { offset: e.position },
        };
        DecodeError::from(e)
    })
}

fn decode_hex(body: &str) -> Result<Vec<u8>, DecodeError> {
    HEX_RELAXED.decode(body.as_bytes()).map_err(|e| {
        let e = match e.kind {
            DecodeKind::Length => InputFormatError::IncompleteHex,
            _ => InputFormatError::IllegalCharacter { offset: e.position },
        };
        DecodeError::from(e)
    })
}
