//! "Authority Key Identifier" extension
//!
//! <pre>
//! AuthorityKeyIdentifier ::= SEQUENCE {
//!     keyIdentifier             [0] KeyIdentifier           OPTIONAL,
//!     authorityCertIssuer       [1] GeneralNames            OPTIONAL,
//!     authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL }
//! </pre>
//!
//! The issuer name is not surfaced; key identifier and serial number are the
//! fields the model carries, both as lower-case hex.

use crate::der;
use crate::error::DecodeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorityKeyIdentifier {
    pub key_identifier: Option<String>,
    pub authority_cert_serial_number: Option<String>,
}

pub(crate) fn decode_authority_key_identifier(
    input: &[u8],
) -> Result<AuthorityKeyIdentifier, DecodeError> {
    let root = der::parse_root(input)?;
    let mut aki = AuthorityKeyIdentifier::default();
    for node in der::children(&root)? {
        if der::is_context(&node, 0) {
            aki.key_identifier = Some(der::hex_lower(node.data));
        } else if der::is_context(&node, 2) {
            aki.authority_cert_serial_number = Some(der::hex_lower(node.data));
        }
    }
    Ok(aki)
}
