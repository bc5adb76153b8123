//! Signature-algorithm OID resolution

use asn1_rs::{oid, Oid};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Resolved signature algorithm.
///
/// `hash` is only present for OIDs in the known table; an unmapped OID keeps
/// its dotted form as the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureAlgorithm {
    pub name: String,
    pub hash: Option<&'static str>,
}

lazy_static! {
    static ref SIGNATURE_ALGORITHMS: HashMap<Oid<'static>, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert(oid!(1.2.840.113549.1.1.5), ("RSASSA-PKCS1-v1_5", "SHA-1"));
        m.insert(oid!(1.2.840.113549.1.1.11), ("RSASSA-PKCS1-v1_5", "SHA-256"));
        m.insert(oid!(1.2.840.113549.1.1.12), ("RSASSA-PKCS1-v1_5", "SHA-384"));
        m.insert(oid!(1.2.840.113549.1.1.13), ("RSASSA-PKCS1-v1_5", "SHA-512"));
        m.insert(oid!(1.2.840.10045.4.1), ("ECDSA", "SHA-1"));
        m.insert(oid!(1.2.840.10045.4.3.2), ("ECDSA", "SHA-256"));
        m
    };
}

/// Resolve a signature-algorithm OID to a name and hash.
pub fn resolve_signature_algorithm(oid: &Oid) -> SignatureAlgorithm {
    match SIGNATURE_ALGORITHMS.get(oid) {
        Some((name, hash)) => SignatureAlgorithm {
            name: (*name).to_string(),
            hash: Some(hash),
        },
        None => SignatureAlgorithm {
            name: oid.to_id_string(),
            hash: None,
        },
    }
}
