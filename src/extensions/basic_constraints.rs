//! "Basic Constraints" extension: identifies whether the subject of the
//! certificate is a CA, and the max validation depth.
//!
//! <pre>
//!   id-ce-basicConstraints OBJECT IDENTIFIER ::=  { id-ce 19 }
//!   BasicConstraints ::= SEQUENCE {
//!        cA                      BOOLEAN DEFAULT FALSE,
//!        pathLenConstraint       INTEGER (0..MAX) OPTIONAL }
//! </pre>

use std::convert::TryFrom;

use asn1_rs::Tag;

use crate::der;
use crate::error::DecodeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicConstraints {
    pub ca: bool,
    pub path_len_constraint: Option<u32>,
}

pub(crate) fn decode_basic_constraints(input: &[u8]) -> Result<BasicConstraints, DecodeError> {
    let root = der::parse_root(input)?;
    if root.tag() != Tag::Sequence {
        return Err(DecodeError::ExtensionDecode);
    }
    let mut bc = BasicConstraints {
        ca: false,
        path_len_constraint: None,
    };
    for node in der::children(&root)? {
        match node.tag() {
            // tolerate BER booleans: any non-zero octet is true
            Tag::Boolean => bc.ca = node.data.first().copied().unwrap_or(0) != 0,
            Tag::Integer => {
                bc.path_len_constraint = der::int_value(&node).and_then(|v| u32::try_from(v).ok())
            }
            _ => {}
        }
    }
    Ok(bc)
}
