//! Certificate / certification-request model building
//!
//! The entry point is [`decode`]: one source string in, one
//! [`CertificateModel`] out. The parsed tree is first interpreted against the
//! Certificate schema and, if that does not fit, against the
//! CertificationRequest schema.
//!
//! <pre>
//! Certificate ::= SEQUENCE {
//!     tbsCertificate       TBSCertificate,
//!     signatureAlgorithm   AlgorithmIdentifier,
//!     signatureValue       BIT STRING }
//!
//! CertificationRequest ::= SEQUENCE {
//!     certificationRequestInfo CertificationRequestInfo,
//!     signatureAlgorithm       AlgorithmIdentifier,
//!     signature                BIT STRING }
//! </pre>

use std::convert::TryFrom;

use asn1_rs::{Any, Tag};
use log::{debug, warn};
use time::OffsetDateTime;

use crate::algorithm::{resolve_signature_algorithm, SignatureAlgorithm};
use crate::attributes::{decode_attribute, Attribute};
use crate::der;
use crate::error::DecodeError;
use crate::extensions::{decode_extension, Extension};
use crate::input::{normalize, SourceType};
use crate::name::{decode_name, NameComponent};
use crate::public_key::{decode_public_key, PublicKeyInfo};
use crate::time::{datetime_value, days_between, format_long};

/// Decoded signature field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInfo {
    pub algorithm: SignatureAlgorithm,
    /// Lower-case hex of the BIT STRING payload
    pub value: String,
    pub oid: String,
}

/// The structured description of one certificate or certification request.
///
/// Built once per [`decode`] call and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateModel {
    pub issuer: Vec<NameComponent>,
    pub subject: Vec<NameComponent>,
    pub public_key: PublicKeyInfo,
    pub signature: SignatureInfo,
    /// Lower-case hex of the serial number content; empty for a CSR
    pub serial_number: String,
    /// Raw version value: 0 for v1, 1 for v2, 2 for v3
    pub version: u32,
    /// Long-form date, empty when absent
    pub not_before: String,
    /// Long-form date, empty when absent
    pub not_after: String,
    /// Whole days between the validity bounds, 0 when either is missing
    pub validity: i64,
    pub is_ca: bool,
    pub is_root: bool,
    pub source_type: SourceType,
    /// The original input string
    pub source: String,
    pub extensions: Vec<Extension>,
    pub attributes: Vec<Attribute>,
}

/// Decode a certificate or certification request from its textual source.
///
/// Returns either a complete model or a definitive failure; a corrupt
/// extension or attribute inside an otherwise well-formed input does not fail
/// the call (see [`crate::extensions`]).
pub fn decode(source: &str) -> Result<CertificateModel, DecodeError> {
    let (bytes, source_type) = normalize(source)?;
    let root = der::parse_root(&bytes)?;

    match decode_certificate(&root, source, source_type) {
        Ok(model) => Ok(model),
        Err(e) => {
            debug!("certificate schema does not fit ({}), trying CSR", e);
            decode_certification_request(&root, source, source_type)
                .map_err(|_| DecodeError::SchemaMismatch)
        }
    }
}

fn outer_parts<'a>(root: &Any<'a>) -> Result<(Any<'a>, Any<'a>, Any<'a>), DecodeError> {
    if root.tag() != Tag::Sequence {
        return Err(DecodeError::SchemaMismatch);
    }
    let nodes = der::children(root)?;
    match nodes.as_slice() {
        [body, alg, sig] if body.tag() == Tag::Sequence && alg.tag() == Tag::Sequence => {
            Ok((body.clone(), alg.clone(), sig.clone()))
        }
        _ => Err(DecodeError::SchemaMismatch),
    }
}

fn decode_certificate(
    root: &Any<'_>,
    source: &str,
    source_type: SourceType,
) -> Result<CertificateModel, DecodeError> {
    let (tbs, sig_alg, sig_value) = outer_parts(root)?;
    let nodes = der::children(&tbs)?;
    let mut idx = 0;

    // version [0] EXPLICIT, default v1
    let mut version = 0;
    if nodes.first().map(|n| der::is_context(n, 0)).unwrap_or(false) {
        let inner = der::children(&nodes[0])?;
        version = inner
            .first()
            .and_then(der::int_value)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(DecodeError::SchemaMismatch)?;
        idx = 1;
    }

    let serial = take_next(&nodes, &mut idx)?;
    if serial.tag() != Tag::Integer {
        return Err(DecodeError::SchemaMismatch);
    }
    let serial_number = der::hex_lower(serial.data);

    // tbs signature algorithm: must look like an AlgorithmIdentifier, the
    // model carries the outer one
    algorithm_oid(take_next(&nodes, &mut idx)?)?;

    let issuer =
        decode_name(take_next(&nodes, &mut idx)?).map_err(|_| DecodeError::SchemaMismatch)?;

    let validity = take_next(&nodes, &mut idx)?;
    if validity.tag() != Tag::Sequence {
        return Err(DecodeError::SchemaMismatch);
    }
    let times = der::children(validity)?;
    let not_before = times.first().and_then(datetime_value);
    let not_after = times.get(1).and_then(datetime_value);

    let subject =
        decode_name(take_next(&nodes, &mut idx)?).map_err(|_| DecodeError::SchemaMismatch)?;

    let public_key = decode_public_key(take_next(&nodes, &mut idx)?)?;

    // issuerUniqueID [1] and subjectUniqueID [2] are skipped
    let mut extensions = Vec::new();
    for node in &nodes[idx..] {
        if der::is_context(node, 3) {
            let list = der::children(node)?;
            let list = list.first().ok_or(DecodeError::SchemaMismatch)?;
            extensions = decode_extension_sequence(list)?;
        }
    }

    let is_ca = extensions.iter().any(Extension::is_ca_assertion);
    let is_root = issuer == subject;

    Ok(CertificateModel {
        is_root,
        is_ca,
        issuer,
        subject,
        public_key,
        signature: decode_signature(&sig_alg, &sig_value)?,
        serial_number,
        version,
        not_before: format_opt(&not_before),
        not_after: format_opt(&not_after),
        validity: match (&not_before, &not_after) {
            (Some(nb), Some(na)) => days_between(nb, na),
            _ => 0,
        },
        source_type,
        source: source.to_string(),
        extensions,
        attributes: Vec::new(),
    })
}

fn decode_certification_request(
    root: &Any<'_>,
    source: &str,
    source_type: SourceType,
) -> Result<CertificateModel, DecodeError> {
    let (info, sig_alg, sig_value) = outer_parts(root)?;
    let nodes = der::children(&info)?;
    let mut nodes = nodes.iter();

    // CertificationRequestInfo ::= SEQUENCE {
    //     version INTEGER, subject Name, subjectPKInfo, attributes [0] }
    let version_node = nodes.next().ok_or(DecodeError::SchemaMismatch)?;
    let version = der::int_value(version_node)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(DecodeError::SchemaMismatch)?;

    let subject_node = nodes.next().ok_or(DecodeError::SchemaMismatch)?;
    let subject = decode_name(subject_node).map_err(|_| DecodeError::SchemaMismatch)?;

    let spki = nodes.next().ok_or(DecodeError::SchemaMismatch)?;
    let public_key = decode_public_key(spki)?;

    let mut attributes = Vec::new();
    for node in nodes {
        if !der::is_context(node, 0) {
            continue;
        }
        for attribute in der::children(node)? {
            match decode_attribute(&attribute) {
                Ok(attr) => attributes.push(attr),
                Err(e) => warn!("skipping malformed attribute: {}", e),
            }
        }
    }

    let issuer = Vec::new();
    Ok(CertificateModel {
        is_root: issuer == subject,
        is_ca: false,
        issuer,
        subject,
        public_key,
        signature: decode_signature(&sig_alg, &sig_value)?,
        serial_number: String::new(),
        version,
        not_before: String::new(),
        not_after: String::new(),
        validity: 0,
        source_type,
        source: source.to_string(),
        extensions: Vec::new(),
        attributes,
    })
}

// Extensions ::= SEQUENCE SIZE (1..MAX) OF Extension
fn decode_extension_sequence(list: &Any<'_>) -> Result<Vec<Extension>, DecodeError> {
    if list.tag() != Tag::Sequence {
        return Err(DecodeError::SchemaMismatch);
    }
    let mut extensions = Vec::new();
    for node in der::children(list)? {
        let fields = der::children(&node)?;
        let mut fields = fields.iter();

        let oid = fields
            .next()
            .ok_or(DecodeError::ExtensionDecode)?
            .as_oid()
            .map_err(|_| DecodeError::ExtensionDecode)?;

        let mut critical = false;
        let mut value: &[u8] = &[];
        for field in fields {
            match field.tag() {
                // some encoders use BER booleans; any non-zero octet is true
                Tag::Boolean => critical = field.data.first().copied().unwrap_or(0) != 0,
                Tag::OctetString => value = field.data,
                _ => {}
            }
        }

        extensions.push(decode_extension(&oid, critical, value));
    }
    Ok(extensions)
}

fn take_next<'a, 'b>(nodes: &'b [Any<'a>], idx: &mut usize) -> Result<&'b Any<'a>, DecodeError> {
    let node = nodes.get(*idx).ok_or(DecodeError::SchemaMismatch)?;
    *idx += 1;
    Ok(node)
}

fn algorithm_oid<'a>(alg: &Any<'a>) -> Result<asn1_rs::Oid<'a>, DecodeError> {
    if alg.tag() != Tag::Sequence {
        return Err(DecodeError::SchemaMismatch);
    }
    der::children(alg)?
        .first()
        .ok_or(DecodeError::SchemaMismatch)?
        .as_oid()
        .map(|oid| oid.to_owned())
        .map_err(|_| DecodeError::SchemaMismatch)
}

fn decode_signature(alg: &Any<'_>, value: &Any<'_>) -> Result<SignatureInfo, DecodeError> {
    let oid = algorithm_oid(alg)?;
    let (_, payload) = der::bit_string_parts(value).map_err(|_| DecodeError::SchemaMismatch)?;
    Ok(SignatureInfo {
        algorithm: resolve_signature_algorithm(&oid),
        value: der::hex_lower(payload),
        oid: oid.to_id_string(),
    })
}

fn format_opt(dt: &Option<OffsetDateTime>) -> String {
    dt.as_ref().map(format_long).unwrap_or_default()
}
