//! Certification-request attribute decoding
//!
//! <pre>
//! Attribute ::= SEQUENCE {
//!     type   OBJECT IDENTIFIER,
//!     values SET OF AttributeValue }
//! </pre>
//!
//! Attribute values have no fixed schema, so they are decoded by a recursive
//! converter keyed on the node kind. Multi-valued attributes are flattened
//! into a single list. A failure inside one attribute is caught, logged, and
//! leaves that attribute's value empty; decoding continues with the next one.

use asn1_rs::{Any, Tag};
use log::warn;

use crate::der;
use crate::error::DecodeError;
use crate::extensions::decode_key_usage_node;
use crate::objects;

// bound against adversarial nesting; real attribute values are a few levels deep
const MAX_DEPTH: usize = 32;

const OID_KEY_USAGE: &str = "2.5.29.15";

/// One decoded CSR attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Display name, or the dotted OID when unknown
    pub name: String,
    pub oid: String,
    /// Flattened sequence of decoded values
    pub value: Vec<AttributeValue>,
}

/// A decoded attribute value node.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// An OID-identified record, possibly carrying a nested value
    Reference {
        name: String,
        oid: String,
        value: Option<Box<AttributeValue>>,
    },
    List(Vec<AttributeValue>),
    Integer(i64),
    Text(String),
    Hex(String),
    Flags(Vec<&'static str>),
    Boolean(bool),
    /// A node kind without a decoder
    Unsupported(String),
}

/// Decode one Attribute node; the values decode is fault-isolated.
pub(crate) fn decode_attribute(node: &Any<'_>) -> Result<Attribute, DecodeError> {
    let fields = der::children(node)?;
    let (attr_type, values) = match fields.as_slice() {
        [t, v] => (t, v),
        _ => return Err(DecodeError::AttributeDecode),
    };
    let oid = attr_type
        .as_oid()
        .map_err(|_| DecodeError::AttributeDecode)?;
    let name = objects::display_name_or_oid(&oid);

    let value = match decode_values(values) {
        Ok(v) => v,
        Err(e) => {
            warn!("decode attribute {} failed: {}", name, e);
            Vec::new()
        }
    };

    Ok(Attribute {
        name,
        oid: oid.to_id_string(),
        value,
    })
}

// SET OF AttributeValue, flattened
fn decode_values(values: &Any<'_>) -> Result<Vec<AttributeValue>, DecodeError> {
    let mut out = Vec::new();
    for value in der::children(values)? {
        flatten_into(convert(&value, 0)?, &mut out);
    }
    Ok(out)
}

// nested lists collapse into one level, in order
fn flatten_into(value: AttributeValue, out: &mut Vec<AttributeValue>) {
    match value {
        AttributeValue::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other),
    }
}

fn convert(node: &Any<'_>, depth: usize) -> Result<AttributeValue, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::AttributeDecode);
    }

    match node.tag() {
        Tag::Oid => {
            let oid = node.as_oid().map_err(|_| DecodeError::AttributeDecode)?;
            Ok(AttributeValue::Reference {
                name: objects::display_name_or_oid(&oid),
                oid: oid.to_id_string(),
                value: None,
            })
        }
        Tag::Ia5String => {
            let s = der::text_value(node).unwrap_or_else(|| der::hex_lower(node.data));
            Ok(AttributeValue::Reference {
                name: s.clone(),
                oid: s,
                value: None,
            })
        }
        Tag::Sequence | Tag::Set => convert_constructed(node, depth),
        Tag::Integer => Ok(match der::int_value(node) {
            Some(v) => AttributeValue::Integer(v),
            None => AttributeValue::Hex(der::hex_lower(node.data)),
        }),
        Tag::Boolean => Ok(AttributeValue::Boolean(
            node.data.first().copied().unwrap_or(0) != 0,
        )),
        Tag::BitString => {
            let (_, payload) = der::bit_string_parts(node)?;
            Ok(AttributeValue::Hex(der::hex_lower(payload)))
        }
        Tag::OctetString => Ok(match der::text_value(node) {
            Some(s) => AttributeValue::Text(s),
            None => AttributeValue::Hex(der::hex_lower(node.data)),
        }),
        _ if der::is_textual(node) => Ok(match der::text_value(node) {
            Some(s) => AttributeValue::Text(s),
            None => AttributeValue::Hex(der::hex_lower(node.data)),
        }),
        tag => Ok(AttributeValue::Unsupported(format!(
            "need decode: {}",
            tag_label(tag)
        ))),
    }
}

// A sequence led by an OID is an embedded record (the extensionRequest
// shape); its value comes from the first OCTET STRING child, with Key Usage
// content routed through the bit-flag decoder. Any other constructed node
// maps element-wise.
fn convert_constructed(node: &Any<'_>, depth: usize) -> Result<AttributeValue, DecodeError> {
    let nodes = der::children(node)?;

    let leads_with_oid = nodes.first().map(|n| n.tag() == Tag::Oid).unwrap_or(false);
    if !leads_with_oid {
        let items = nodes
            .iter()
            .map(|n| convert(n, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(AttributeValue::List(items));
    }

    let oid = nodes[0]
        .as_oid()
        .map_err(|_| DecodeError::AttributeDecode)?;
    let oid_string = oid.to_id_string();
    let mut value = None;

    if let Some(octet) = nodes.iter().find(|n| n.tag() == Tag::OctetString) {
        value = Some(if oid_string == OID_KEY_USAGE {
            let inner = der::parse_root(octet.data)?;
            AttributeValue::Flags(decode_key_usage_node(&inner)?)
        } else {
            convert(octet, depth + 1)?
        });
    }

    Ok(AttributeValue::Reference {
        name: objects::display_name_or_oid(&oid),
        oid: oid_string,
        value: value.map(Box::new),
    })
}

fn tag_label(tag: Tag) -> String {
    match tag {
        Tag::Null => "Null".to_string(),
        Tag::UtcTime => "UTCTime".to_string(),
        Tag::GeneralizedTime => "GeneralizedTime".to_string(),
        Tag::Enumerated => "Enumerated".to_string(),
        t => format!("tag {}", t.0),
    }
}
