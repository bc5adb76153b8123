//! "Certificate Policies" extension
//!
//! <pre>
//! CertificatePolicies ::= SEQUENCE SIZE (1..MAX) OF PolicyInformation
//!
//! PolicyInformation ::= SEQUENCE {
//!     policyIdentifier CertPolicyId,
//!     policyQualifiers SEQUENCE SIZE (1..MAX) OF PolicyQualifierInfo OPTIONAL }
//!
//! PolicyQualifierInfo ::= SEQUENCE {
//!     policyQualifierId PolicyQualifierId,
//!     qualifier         ANY DEFINED BY policyQualifierId }
//! </pre>

use asn1_rs::Tag;

use crate::der;
use crate::error::DecodeError;
use crate::objects;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyInformation {
    pub oid: String,
    pub name: String,
    pub qualifiers: Vec<PolicyQualifier>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyQualifier {
    pub oid: String,
    pub name: String,
    pub value: QualifierValue,
}

/// A CPS qualifier is a single link; other qualifiers surface their nested
/// displayable values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QualifierValue {
    Text(String),
    List(Vec<String>),
}

pub(crate) fn decode_certificate_policies(
    input: &[u8],
) -> Result<Vec<PolicyInformation>, DecodeError> {
    let root = der::parse_root(input)?;
    let mut policies = Vec::new();
    for node in der::children(&root)? {
        let fields = der::children(&node)?;
        let id = fields.first().ok_or(DecodeError::ExtensionDecode)?;
        let oid = id.as_oid().map_err(|_| DecodeError::ExtensionDecode)?;

        let mut qualifiers = Vec::new();
        if let Some(list) = fields.get(1) {
            for qualifier in der::children(list)? {
                qualifiers.push(decode_qualifier(&qualifier)?);
            }
        }

        policies.push(PolicyInformation {
            name: objects::display_name(&oid).unwrap_or("").to_string(),
            oid: oid.to_id_string(),
            qualifiers,
        });
    }
    Ok(policies)
}

fn decode_qualifier(node: &asn1_rs::Any<'_>) -> Result<PolicyQualifier, DecodeError> {
    let fields = der::children(node)?;
    let (id, qualifier) = match fields.as_slice() {
        [i, q] => (i, q),
        _ => return Err(DecodeError::ExtensionDecode),
    };
    let oid = id.as_oid().map_err(|_| DecodeError::ExtensionDecode)?;

    let value = if qualifier.tag() == Tag::Sequence || qualifier.tag() == Tag::Set {
        let items = der::children(qualifier)?
            .iter()
            .map(|q| der::text_value(q).unwrap_or_else(|| der::hex_lower(q.data)))
            .collect();
        QualifierValue::List(items)
    } else {
        QualifierValue::Text(
            der::text_value(qualifier).unwrap_or_else(|| der::hex_lower(qualifier.data)),
        )
    };

    Ok(PolicyQualifier {
        name: objects::display_name(&oid).unwrap_or("").to_string(),
        oid: oid.to_id_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn policy_with_cps_link() {
        // SEQ { SEQ { OID 2.23.140.1.2.1,
        //             SEQ { SEQ { OID 1.3.6.1.5.5.7.2.1, IA5 "http://c" } } } }
        let bytes = hex!(
            "30 22 30 20"
            "  06 06 67 81 0c 01 02 01"
            "  30 16 30 14 06 08 2b 06 01 05 05 07 02 01 16 08 687474703a2f2f63"
        );
        let policies = decode_certificate_policies(&bytes).expect("policies");
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].oid, "2.23.140.1.2.1");
        assert_eq!(policies[0].name, "Domain Validated");
        let q = &policies[0].qualifiers[0];
        assert_eq!(q.name, "CPS");
        assert_eq!(q.value, QualifierValue::Text("http://c".to_string()));
    }

    #[test]
    fn policy_without_qualifiers() {
        let bytes = hex!("30 06 30 04 06 02 55 1d");
        let policies = decode_certificate_policies(&bytes).expect("policies");
        assert_eq!(policies.len(), 1);
        assert!(policies[0].qualifiers.is_empty());
    }
}
