//! "Authority Info Access" extension
//!
//! <pre>
//! AuthorityInfoAccessSyntax ::= SEQUENCE SIZE (1..MAX) OF AccessDescription
//!
//! AccessDescription ::= SEQUENCE {
//!     accessMethod   OBJECT IDENTIFIER,
//!     accessLocation GeneralName }
//! </pre>

use super::san::{decode_general_name, SanEntry};
use crate::der;
use crate::error::DecodeError;
use crate::objects;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessDescription {
    pub oid: String,
    pub name: String,
    pub location: SanEntry,
}

pub(crate) fn decode_authority_info_access(
    input: &[u8],
) -> Result<Vec<AccessDescription>, DecodeError> {
    let root = der::parse_root(input)?;
    let mut descriptions = Vec::new();
    for node in der::children(&root)? {
        let fields = der::children(&node)?;
        let (method, location) = match fields.as_slice() {
            [m, l] => (m, l),
            _ => return Err(DecodeError::ExtensionDecode),
        };
        let oid = method.as_oid().map_err(|_| DecodeError::ExtensionDecode)?;
        descriptions.push(AccessDescription {
            name: objects::display_name(&oid).unwrap_or("").to_string(),
            oid: oid.to_id_string(),
            location: decode_general_name(location)?,
        });
    }
    Ok(descriptions)
}
