//! GeneralName decoding: Subject Alternative Name and Name Constraints
//!
//! <pre>
//! GeneralName ::= CHOICE {
//!     otherName                 [0] OtherName,
//!     rfc822Name                [1] IA5String,
//!     dNSName                   [2] IA5String,
//!     x400Address               [3] ORAddress,
//!     directoryName             [4] Name,
//!     ediPartyName              [5] EDIPartyName,
//!     uniformResourceIdentifier [6] IA5String,
//!     iPAddress                 [7] OCTET STRING,
//!     registeredID              [8] OBJECT IDENTIFIER }
//! </pre>

use asn1_rs::{Any, Class};

use crate::der;
use crate::error::DecodeError;
use crate::name::{decode_name, NameComponent};

const SAN_TYPES: &[&str] = &[
    "Other Name",
    "Email Address",
    "DNS Name",
    "X400 Address",
    "Directory Name",
    "Edi Party Name",
    "Uniform Resource Identifier",
    "IP Address",
    "Registered ID",
];

/// Decoded value of one GeneralName entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SanValue {
    Text(String),
    DirectoryName(Vec<NameComponent>),
}

/// One entry of a Subject Alternative Name or Name Constraints subtree list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanEntry {
    /// Label of the entry type, or a diagnostic for unknown tags
    pub type_name: String,
    /// Raw GeneralName tag number
    pub type_value: u32,
    pub value: SanValue,
    /// `permitted` or `excluded` for Name Constraints entries
    pub subtree: Option<&'static str>,
}

/// Label for a GeneralName tag number.
fn type_label(type_value: u32) -> String {
    match SAN_TYPES.get(type_value as usize) {
        Some(label) => (*label).to_string(),
        None => format!("need handler for this type - {}", type_value),
    }
}

/// Decode `SEQUENCE OF GeneralName` content.
pub(crate) fn decode_general_names(input: &[u8]) -> Result<Vec<SanEntry>, DecodeError> {
    let root = der::parse_root(input)?;
    der::children(&root)?
        .iter()
        .map(decode_general_name)
        .collect()
}

pub(crate) fn decode_general_name(any: &Any<'_>) -> Result<SanEntry, DecodeError> {
    if any.class() != Class::ContextSpecific {
        return Err(DecodeError::ExtensionDecode);
    }
    let type_value = any.tag().0;
    let value = match type_value {
        4 => {
            // explicit tag: the Name sequence is nested below it
            let inner = der::children(any)?;
            let name = inner.first().ok_or(DecodeError::ExtensionDecode)?;
            SanValue::DirectoryName(decode_name(name)?)
        }
        7 => SanValue::Text(decode_ip(&der::hex_lower(any.data))),
        8 => {
            let oid = asn1_rs::Oid::new(std::borrow::Cow::Borrowed(any.data));
            SanValue::Text(oid.to_id_string())
        }
        _ => match std::str::from_utf8(any.data) {
            Ok(s) if is_text_type(type_value) => SanValue::Text(s.to_string()),
            _ => SanValue::Text(format!("type value is not a string - {}", type_value)),
        },
    };
    Ok(SanEntry {
        type_name: type_label(type_value),
        type_value,
        value,
        subtree: None,
    })
}

// rfc822Name, dNSName and URI carry IA5String content directly
fn is_text_type(type_value: u32) -> bool {
    matches!(type_value, 1 | 2 | 6)
}

/// Decode Name Constraints content: permitted and excluded subtree lists,
/// each entry tagged with its subtree name.
///
/// <pre>
/// NameConstraints ::= SEQUENCE {
///     permittedSubtrees [0] GeneralSubtrees OPTIONAL,
///     excludedSubtrees  [1] GeneralSubtrees OPTIONAL }
/// GeneralSubtree ::= SEQUENCE { base GeneralName, ... }
/// </pre>
pub(crate) fn decode_name_constraints(input: &[u8]) -> Result<Vec<SanEntry>, DecodeError> {
    let root = der::parse_root(input)?;
    let mut entries = Vec::new();
    for subtrees in der::children(&root)? {
        let subtree = if der::is_context(&subtrees, 0) {
            "permitted"
        } else if der::is_context(&subtrees, 1) {
            "excluded"
        } else {
            continue;
        };
        for general_subtree in der::children(&subtrees)? {
            let base = der::children(&general_subtree)?;
            let base = base.first().ok_or(DecodeError::ExtensionDecode)?;
            let mut entry = decode_general_name(base)?;
            entry.subtree = Some(subtree);
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Decode an IP/mask BIT STRING payload given as lower-case hex.
///
/// A 32-byte all-zero payload is the IPv6 "any" range; a payload that is not
/// 4 address + 4 mask bytes is returned as its hex string (general IPv6 is
/// not handled). Otherwise the mask width is the number of set mask bits.
pub(crate) fn decode_ip(hex: &str) -> String {
    if hex.len() == 64 && hex.bytes().all(|b| b == b'0') {
        return "::/0".to_string();
    }
    if hex.len() != 16 {
        return hex.to_string();
    }

    let octet = |i: usize| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16);
    let address = match (octet(0), octet(1), octet(2), octet(3)) {
        (Ok(a), Ok(b), Ok(c), Ok(d)) => format!("{}.{}.{}.{}", a, b, c, d),
        _ => return hex.to_string(),
    };
    let width = match u32::from_str_radix(&hex[8..], 16) {
        Ok(mask) => mask.count_ones(),
        Err(_) => return hex.to_string(),
    };
    format!("{}/{}", address, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn ip_with_mask() {
        assert_eq!(decode_ip("c0a80000ffffff00"), "192.168.0.0/24");
        assert_eq!(decode_ip("C0A80000FFFFFF00".to_lowercase().as_str()), "192.168.0.0/24");
    }

    #[test]
    fn ipv6_any() {
        let zeros = "0".repeat(64);
        assert_eq!(decode_ip(&zeros), "::/0");
    }

    #[test]
    fn unhandled_lengths_pass_through() {
        // a bare 4-byte address (no mask) stays hex
        assert_eq!(decode_ip("c0a80001"), "c0a80001");
        let v6 = "20010db8000000000000000000000001ffffffffffffffffffffffffffffffff";
        assert_eq!(decode_ip(v6), v6);
    }

    #[test]
    fn dns_and_ip_entries() {
        // SEQ { [2] "a.example", [7] c0a80000ffffff00 }
        let bytes = hex!("30 15 82 09 612e6578616d706c65 87 08 c0a80000ffffff00");
        let entries = decode_general_names(&bytes).expect("san");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].type_name, "DNS Name");
        assert_eq!(entries[0].type_value, 2);
        assert_eq!(entries[0].value, SanValue::Text("a.example".to_string()));
        assert_eq!(entries[1].type_value, 7);
        assert_eq!(entries[1].value, SanValue::Text("192.168.0.0/24".to_string()));
    }

    #[test]
    fn directory_name_entry() {
        // [4] { SEQ { SET { SEQ { OID 2.5.4.3, UTF8 "Test" } } } }
        let bytes = hex!("30 13 a4 11 30 0f 31 0d 30 0b 06 03 55 04 03 0c 04 54 65 73 74");
        let entries = decode_general_names(&bytes).expect("san");
        assert_eq!(entries[0].type_name, "Directory Name");
        match &entries[0].value {
            SanValue::DirectoryName(components) => {
                assert_eq!(components[0].short_name, "CN");
                assert_eq!(components[0].value, "Test");
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn unknown_type_gets_diagnostic_label() {
        // [0] otherName with opaque content
        let bytes = hex!("30 06 a0 04 06 02 2b 09");
        let entries = decode_general_names(&bytes).expect("san");
        assert_eq!(entries[0].type_name, "Other Name");
        assert_eq!(
            entries[0].value,
            SanValue::Text("type value is not a string - 0".to_string())
        );
    }

    #[test]
    fn name_constraints_subtrees() {
        // SEQ { [0] { SEQ { [2] "good" } }, [1] { SEQ { [2] "bad" } } }
        let bytes = hex!(
            "30 13"
            "  a0 08 30 06 82 04 676f6f64"
            "  a1 07 30 05 82 03 626164"
        );
        let entries = decode_name_constraints(&bytes).expect("name constraints");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].subtree, Some("permitted"));
        assert_eq!(entries[0].value, SanValue::Text("good".to_string()));
        assert_eq!(entries[1].subtree, Some("excluded"));
        assert_eq!(entries[1].value, SanValue::Text("bad".to_string()));
    }
}
