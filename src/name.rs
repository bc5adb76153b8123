//! Issuer/Subject name decoding
//!
//! <pre>
//! Name ::= RDNSequence
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//! RelativeDistinguishedName ::= SET SIZE (1..MAX) OF AttributeTypeAndValue
//! AttributeTypeAndValue ::= SEQUENCE { type OBJECT IDENTIFIER, value ANY }
//! </pre>

use asn1_rs::{Any, Tag};

use crate::der;
use crate::error::DecodeError;
use crate::objects;

/// One decoded component of an Issuer or Subject name.
///
/// `short_name`/`long_name` are empty when the attribute type OID is not in
/// the name table; the OID itself is always preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameComponent {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub oid: String,
    pub value: String,
}

/// Decode a Name node into its components, in original order.
///
/// Components are flattened across the RDN sets; relative grouping is not
/// surfaced in the model.
pub(crate) fn decode_name(name: &Any<'_>) -> Result<Vec<NameComponent>, DecodeError> {
    if name.tag() != Tag::Sequence {
        return Err(DecodeError::InvalidName);
    }
    let mut components = Vec::new();
    for rdn in der::children(name)? {
        if rdn.tag() != Tag::Set {
            return Err(DecodeError::InvalidName);
        }
        for atv in der::children(&rdn)? {
            components.push(decode_type_and_value(&atv)?);
        }
    }
    Ok(components)
}

fn decode_type_and_value(atv: &Any<'_>) -> Result<NameComponent, DecodeError> {
    let nodes = der::children(atv)?;
    let (attr_type, attr_value) = match nodes.as_slice() {
        [t, v] => (t, v),
        _ => return Err(DecodeError::InvalidName),
    };
    let oid = attr_type.as_oid().map_err(|_| DecodeError::InvalidName)?;
    let (short_name, long_name) = match objects::name_abbreviations(&oid) {
        Some(abbrev) => (abbrev.short, abbrev.long),
        None => ("", ""),
    };
    let value = der::text_value(attr_value).unwrap_or_else(|| der::hex_lower(attr_value.data));
    Ok(NameComponent {
        short_name,
        long_name,
        oid: oid.to_id_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::der::parse_root;
    use hex_literal::hex;

    // SEQ { SET { SEQ { OID 2.5.4.3, UTF8 "Test" } }, SET { SEQ { OID 2.5.4.6, Printable "US" } } }
    const NAME: &[u8] = &hex!(
        "30 1e"
        "  31 0d 30 0b 06 03 55 04 03 0c 04 54 65 73 74"
        "  31 0d 30 0b 06 03 55 04 06 13 02 55 53"
    );

    #[test]
    fn decode_two_components() {
        let root = parse_root(NAME).expect("root");
        let name = decode_name(&root).expect("name");
        assert_eq!(name.len(), 2);
        assert_eq!(name[0].short_name, "CN");
        assert_eq!(name[0].long_name, "Common Name");
        assert_eq!(name[0].oid, "2.5.4.3");
        assert_eq!(name[0].value, "Test");
        assert_eq!(name[1].short_name, "C");
        assert_eq!(name[1].value, "US");
    }

    #[test]
    fn unknown_oid_keeps_empty_names() {
        // SEQ { SET { SEQ { OID 1.3.9.1, UTF8 "x" } } }
        let bytes = hex!("30 0c 31 0a 30 08 06 03 2b 09 01 0c 01 78");
        let root = parse_root(&bytes).expect("root");
        let name = decode_name(&root).expect("name");
        assert_eq!(name[0].short_name, "");
        assert_eq!(name[0].long_name, "");
        assert_eq!(name[0].oid, "1.3.9.1");
        assert_eq!(name[0].value, "x");
    }

    #[test]
    fn empty_name_is_empty_sequence() {
        let bytes = hex!("30 00");
        let root = parse_root(&bytes).expect("root");
        assert!(decode_name(&root).expect("name").is_empty());
    }

    #[test]
    fn non_sequence_is_rejected() {
        let bytes = hex!("02 01 00");
        let root = parse_root(&bytes).expect("root");
        assert_eq!(decode_name(&root), Err(DecodeError::InvalidName));
    }
}
