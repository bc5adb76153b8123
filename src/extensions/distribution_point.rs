//! "CRL Distribution Points" extension
//!
//! <pre>
//! CRLDistributionPoints ::= SEQUENCE SIZE (1..MAX) OF DistributionPoint
//!
//! DistributionPoint ::= SEQUENCE {
//!     distributionPoint [0] DistributionPointName OPTIONAL,
//!     reasons           [1] ReasonFlags           OPTIONAL,
//!     cRLIssuer         [2] GeneralNames          OPTIONAL }
//!
//! DistributionPointName ::= CHOICE {
//!     fullName                [0] GeneralNames,
//!     nameRelativeToCRLIssuer [1] RelativeDistinguishedName }
//! </pre>
//!
//! Only the fullName entries are surfaced: one `{value, type}` record per
//! GeneralName, flattened across distribution points.

use super::san::{decode_general_name, SanValue};
use crate::der;
use crate::error::DecodeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionPointEntry {
    pub value: String,
    pub type_value: u32,
}

pub(crate) fn decode_distribution_points(
    input: &[u8],
) -> Result<Vec<DistributionPointEntry>, DecodeError> {
    let root = der::parse_root(input)?;
    let mut entries = Vec::new();
    for point in der::children(&root)? {
        for field in der::children(&point)? {
            // distributionPoint [0], an explicitly tagged CHOICE
            if !der::is_context(&field, 0) {
                continue;
            }
            for name_form in der::children(&field)? {
                // fullName [0] IMPLICIT GeneralNames
                if !der::is_context(&name_form, 0) {
                    continue;
                }
                for general_name in der::children(&name_form)? {
                    let entry = decode_general_name(&general_name)?;
                    let value = match entry.value {
                        SanValue::Text(s) => s,
                        SanValue::DirectoryName(_) => entry.type_name.clone(),
                    };
                    entries.push(DistributionPointEntry {
                        value,
                        type_value: entry.type_value,
                    });
                }
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn single_uri_point() {
        // SEQ { SEQ { [0] { [0] { [6] "http://crl" } } } }
        let bytes = hex!("30 12 30 10 a0 0e a0 0c 86 0a 687474703a2f2f63726c");
        let entries = decode_distribution_points(&bytes).expect("crl dp");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "http://crl");
        assert_eq!(entries[0].type_value, 6);
    }

    #[test]
    fn point_without_name_is_skipped() {
        // SEQ { SEQ { [1] 03 02 05 a0 } } (reasons only)
        let bytes = hex!("30 06 30 04 81 02 05 a0");
        let entries = decode_distribution_points(&bytes).expect("crl dp");
        assert!(entries.is_empty());
    }
}
