//! X.509 extension decoding
//!
//! <pre>
//! Extension  ::=  SEQUENCE  {
//!     extnID      OBJECT IDENTIFIER,
//!     critical    BOOLEAN DEFAULT FALSE,
//!     extnValue   OCTET STRING  }
//! </pre>
//!
//! Decoding is dispatched on the extension OID through a static registry; an
//! OID without a registered decoder keeps the raw octets as a lower-case hex
//! dump. A decoder failure is confined to its own extension: the failure is
//! logged and the extension keeps its name, OID and criticality with an empty
//! value, so one corrupt extension never invalidates the rest of the
//! certificate.

use asn1_rs::Oid;
use log::warn;

use crate::der;
use crate::objects;

mod authority_info_access;
mod authority_key_identifier;
mod basic_constraints;
mod bit_flags;
mod certificate_policies;
mod distribution_point;
mod extended_key_usage;
mod san;
mod sct;

pub use authority_info_access::AccessDescription;
pub use authority_key_identifier::AuthorityKeyIdentifier;
pub use basic_constraints::BasicConstraints;
pub use certificate_policies::{PolicyInformation, PolicyQualifier, QualifierValue};
pub use distribution_point::DistributionPointEntry;
pub use san::{SanEntry, SanValue};
pub use sct::SignedCertificateTimestamp;

pub(crate) use bit_flags::decode_key_usage_node;

/// An OID together with its display name (empty when unknown).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OidName {
    pub oid: String,
    pub name: String,
}

/// Decoded value of one extension; the variant depends on the extension OID.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionValue {
    BasicConstraints(BasicConstraints),
    KeyUsage(Vec<&'static str>),
    NetscapeCertType(Vec<&'static str>),
    KeyPurposes(Vec<OidName>),
    AuthorityKeyIdentifier(AuthorityKeyIdentifier),
    Policies(Vec<PolicyInformation>),
    AccessDescriptions(Vec<AccessDescription>),
    AlternativeNames(Vec<SanEntry>),
    DistributionPoints(Vec<DistributionPointEntry>),
    Timestamps(Vec<SignedCertificateTimestamp>),
    /// Raw octets of an extension with no registered decoder
    Opaque(String),
    /// Default left behind when a registered decoder failed
    Empty,
}

/// One certificate extension.
#[derive(Clone, Debug, PartialEq)]
pub struct Extension {
    /// Display name, or the dotted OID when unknown
    pub name: String,
    pub oid: String,
    pub critical: bool,
    pub value: ExtensionValue,
}

impl Extension {
    /// True if this is a Basic Constraints extension asserting `cA`.
    pub(crate) fn is_ca_assertion(&self) -> bool {
        matches!(&self.value, ExtensionValue::BasicConstraints(bc) if bc.ca)
    }
}

/// Decode one extension, isolating any decoder failure to this extension.
pub(crate) fn decode_extension(oid: &Oid<'_>, critical: bool, value: &[u8]) -> Extension {
    let name = objects::display_name_or_oid(oid);
    let value = match registry::EXTENSION_DECODERS.get(oid) {
        Some(decoder) => decoder(value).unwrap_or_else(|e| {
            warn!("decode extension {} failed: {}", name, e);
            ExtensionValue::Empty
        }),
        None => ExtensionValue::Opaque(der::hex_lower(value)),
    };
    Extension {
        name,
        oid: oid.to_id_string(),
        critical,
        value,
    }
}

mod registry {
    use super::*;
    use crate::error::DecodeError;
    use lazy_static::lazy_static;
    use oid_registry::{
        OID_CT_LIST_SCT, OID_PKIX_AUTHORITY_INFO_ACCESS, OID_X509_EXT_AUTHORITY_KEY_IDENTIFIER,
        OID_X509_EXT_BASIC_CONSTRAINTS, OID_X509_EXT_CERTIFICATE_POLICIES, OID_X509_EXT_CERT_TYPE,
        OID_X509_EXT_CRL_DISTRIBUTION_POINTS, OID_X509_EXT_EXTENDED_KEY_USAGE,
        OID_X509_EXT_KEY_USAGE, OID_X509_EXT_NAME_CONSTRAINTS, OID_X509_EXT_SUBJECT_ALT_NAME,
    };
    use std::collections::HashMap;

    type ExtDecoder = fn(&[u8]) -> Result<ExtensionValue, DecodeError>;

    lazy_static! {
        pub(super) static ref EXTENSION_DECODERS: HashMap<Oid<'static>, ExtDecoder> = {
            macro_rules! add {
                ($m:ident, $oid:ident, $p:ident) => {
                    $m.insert($oid, $p as ExtDecoder);
                };
            }

            let mut m = HashMap::new();
            add!(m, OID_X509_EXT_BASIC_CONSTRAINTS, basic_constraints_ext);
            add!(m, OID_X509_EXT_KEY_USAGE, key_usage_ext);
            add!(m, OID_X509_EXT_EXTENDED_KEY_USAGE, extended_key_usage_ext);
            add!(
                m,
                OID_X509_EXT_AUTHORITY_KEY_IDENTIFIER,
                authority_key_identifier_ext
            );
            add!(m, OID_X509_EXT_CERTIFICATE_POLICIES, policies_ext);
            add!(m, OID_PKIX_AUTHORITY_INFO_ACCESS, info_access_ext);
            add!(m, OID_X509_EXT_SUBJECT_ALT_NAME, subject_alt_name_ext);
            add!(m, OID_X509_EXT_NAME_CONSTRAINTS, name_constraints_ext);
            add!(
                m,
                OID_X509_EXT_CRL_DISTRIBUTION_POINTS,
                distribution_points_ext
            );
            add!(m, OID_CT_LIST_SCT, sct_ext);
            add!(m, OID_X509_EXT_CERT_TYPE, ns_cert_type_ext);
            m
        };
    }

    fn basic_constraints_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        basic_constraints::decode_basic_constraints(input).map(ExtensionValue::BasicConstraints)
    }

    fn key_usage_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        bit_flags::decode_key_usage(input).map(ExtensionValue::KeyUsage)
    }

    fn ns_cert_type_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        bit_flags::decode_ns_cert_type(input).map(ExtensionValue::NetscapeCertType)
    }

    fn extended_key_usage_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        extended_key_usage::decode_extended_key_usage(input).map(ExtensionValue::KeyPurposes)
    }

    fn authority_key_identifier_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        authority_key_identifier::decode_authority_key_identifier(input)
            .map(ExtensionValue::AuthorityKeyIdentifier)
    }

    fn policies_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        certificate_policies::decode_certificate_policies(input).map(ExtensionValue::Policies)
    }

    fn info_access_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        authority_info_access::decode_authority_info_access(input)
            .map(ExtensionValue::AccessDescriptions)
    }

    fn subject_alt_name_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        san::decode_general_names(input).map(ExtensionValue::AlternativeNames)
    }

    fn name_constraints_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        san::decode_name_constraints(input).map(ExtensionValue::AlternativeNames)
    }

    fn distribution_points_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        distribution_point::decode_distribution_points(input)
            .map(ExtensionValue::DistributionPoints)
    }

    fn sct_ext(input: &[u8]) -> Result<ExtensionValue, DecodeError> {
        sct::decode_sct_list(input).map(ExtensionValue::Timestamps)
    }
}
