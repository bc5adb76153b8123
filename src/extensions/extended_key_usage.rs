//! "Extended Key Usage" extension
//!
//! <pre>
//! ExtKeyUsageSyntax ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
//!
//! KeyPurposeId ::= OBJECT IDENTIFIER
//! </pre>

use super::OidName;
use crate::der;
use crate::error::DecodeError;
use crate::objects;

pub(crate) fn decode_extended_key_usage(input: &[u8]) -> Result<Vec<OidName>, DecodeError> {
    let root = der::parse_root(input)?;
    let mut purposes = Vec::new();
    for node in der::children(&root)? {
        let oid = node.as_oid().map_err(|_| DecodeError::ExtensionDecode)?;
        purposes.push(OidName {
            name: objects::display_name(&oid).unwrap_or("").to_string(),
            oid: oid.to_id_string(),
        });
    }
    Ok(purposes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn server_and_client_auth() {
        // SEQ { OID 1.3.6.1.5.5.7.3.1, OID 1.3.6.1.5.5.7.3.2 }
        let bytes = hex!("30 14 06 08 2b 06 01 05 05 07 03 01 06 08 2b 06 01 05 05 07 03 02");
        let purposes = decode_extended_key_usage(&bytes).expect("eku");
        assert_eq!(purposes.len(), 2);
        assert_eq!(purposes[0].oid, "1.3.6.1.5.5.7.3.1");
        assert_eq!(purposes[0].name, "Server Authentication");
        assert_eq!(purposes[1].name, "Client Authentication");
    }

    #[test]
    fn unknown_purpose_keeps_empty_name() {
        let bytes = hex!("30 05 06 03 2b 09 01");
        let purposes = decode_extended_key_usage(&bytes).expect("eku");
        assert_eq!(purposes[0].oid, "1.3.9.1");
        assert_eq!(purposes[0].name, "");
    }
}
