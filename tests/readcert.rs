mod common;

use common::*;
use hex_literal::hex;
use x509_inspect::extensions::{ExtensionValue, SanValue};
use x509_inspect::{decode, DecodeError, SourceType};

fn san_value() -> Vec<u8> {
    seq(&[
        &ctx_prim(2, b"example.com"),
        &ctx_prim(7, &hex!("c0a80000ffffff00")),
    ])
}

fn test_certificate(issuer_cn: &str, subject_cn: &str) -> Vec<u8> {
    let extensions = seq(&[
        &extension(&[2, 5, 29, 19], Some(true), &seq(&[&boolean(true)])),
        &extension(&[2, 5, 29, 15], Some(true), &bit_string(5, &[0xa0])),
        &extension(&[2, 5, 29, 17], None, &san_value()),
        &extension(&[1, 3, 9, 1], None, &hex!("ca fe")),
        // truncated Extended Key Usage content
        &extension(&[2, 5, 29, 37], None, &[0xff]),
    ]);
    let tbs = seq(&[
        &ctx(0, &int(&[0x02])),
        &int(&[0x01, 0x00]),
        &sha256_rsa_alg(),
        &cn_name(issuer_cn),
        &seq(&[&utc_time("200101000000Z"), &utc_time("300101000000Z")]),
        &cn_name(subject_cn),
        &rsa_spki(),
        &ctx(3, &extensions),
    ]);
    seq(&[
        &tbs,
        &sha256_rsa_alg(),
        &bit_string(0, &hex!("01 02 03 04")),
    ])
}

fn as_binary_string(der: &[u8]) -> String {
    der.iter().map(|&b| b as char).collect()
}

#[test]
fn decode_certificate_fields() {
    let der = test_certificate("Test CA", "Test Leaf");
    let model = decode(&as_binary_string(&der)).expect("decode certificate");

    assert_eq!(model.version, 2);
    assert_eq!(model.serial_number, "0100");
    assert_eq!(model.source_type, SourceType::Der);

    assert_eq!(model.issuer.len(), 1);
    assert_eq!(model.issuer[0].short_name, "CN");
    assert_eq!(model.issuer[0].long_name, "Common Name");
    assert_eq!(model.issuer[0].oid, "2.5.4.3");
    assert_eq!(model.issuer[0].value, "Test CA");
    assert_eq!(model.subject[0].value, "Test Leaf");

    assert!(!model.is_root);
    assert!(model.is_ca);

    assert_eq!(model.not_before, "Wednesday, January 1, 2020 12:00 AM");
    assert_eq!(model.not_after, "Tuesday, January 1, 2030 12:00 AM");
    assert_eq!(model.validity, 3653);

    assert_eq!(model.public_key.algorithm.name, "RSA");
    assert_eq!(model.public_key.algorithm.modulus_bits, Some(128));
    assert_eq!(model.public_key.algorithm.public_exponent, Some(65537));
    assert_eq!(model.public_key.oid, "1.2.840.113549.1.1.1");

    assert_eq!(model.signature.algorithm.name, "RSASSA-PKCS1-v1_5");
    assert_eq!(model.signature.algorithm.hash, Some("SHA-256"));
    assert_eq!(model.signature.oid, "1.2.840.113549.1.1.11");
    assert_eq!(model.signature.value, "01020304");

    assert!(model.attributes.is_empty());
}

#[test]
fn decode_certificate_extensions() {
    let der = test_certificate("Test CA", "Test Leaf");
    let model = decode(&as_binary_string(&der)).expect("decode certificate");

    // order matches the encoded order
    assert_eq!(model.extensions.len(), 5);
    let names: Vec<&str> = model.extensions.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Basic Constraints",
            "Key Usage",
            "Subject Alternative Name",
            "1.3.9.1",
            "Extended Key Usage"
        ]
    );

    assert!(model.extensions[0].critical);
    match &model.extensions[0].value {
        ExtensionValue::BasicConstraints(bc) => {
            assert!(bc.ca);
            assert_eq!(bc.path_len_constraint, None);
        }
        other => panic!("unexpected basic constraints value: {:?}", other),
    }

    assert_eq!(
        model.extensions[1].value,
        ExtensionValue::KeyUsage(vec!["Digital Signature", "Key Encipherment"])
    );

    match &model.extensions[2].value {
        ExtensionValue::AlternativeNames(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].type_name, "DNS Name");
            assert_eq!(entries[0].value, SanValue::Text("example.com".to_string()));
            assert_eq!(entries[1].type_name, "IP Address");
            assert_eq!(
                entries[1].value,
                SanValue::Text("192.168.0.0/24".to_string())
            );
        }
        other => panic!("unexpected san value: {:?}", other),
    }

    // unmapped OID: raw hex dump
    assert_eq!(
        model.extensions[3].value,
        ExtensionValue::Opaque("cafe".to_string())
    );

    // corrupt extension: identity kept, value defaulted, neighbors unaffected
    let broken = &model.extensions[4];
    assert_eq!(broken.name, "Extended Key Usage");
    assert_eq!(broken.oid, "2.5.29.37");
    assert!(!broken.critical);
    assert_eq!(broken.value, ExtensionValue::Empty);
}

#[test]
fn decode_is_pure() {
    let der = test_certificate("Test CA", "Test Leaf");
    let source = as_binary_string(&der);
    assert_eq!(decode(&source).unwrap(), decode(&source).unwrap());
}

#[test]
fn self_signed_certificate_is_root() {
    let der = test_certificate("Test CA", "Test CA");
    let model = decode(&as_binary_string(&der)).expect("decode certificate");
    assert!(model.is_root);
}

#[test]
fn component_order_matters_for_is_root() {
    // issuer CN then C, subject C then CN: same components, different order
    let issuer = seq(&[
        &rdn(&[2, 5, 4, 3], &utf8("Test")),
        &rdn(&[2, 5, 4, 6], &printable("US")),
    ]);
    let subject = seq(&[
        &rdn(&[2, 5, 4, 6], &printable("US")),
        &rdn(&[2, 5, 4, 3], &utf8("Test")),
    ]);
    let tbs = seq(&[
        &ctx(0, &int(&[0x02])),
        &int(&[0x01]),
        &sha256_rsa_alg(),
        &issuer,
        &seq(&[&utc_time("200101000000Z"), &utc_time("300101000000Z")]),
        &subject,
        &rsa_spki(),
    ]);
    let der = seq(&[&tbs, &sha256_rsa_alg(), &bit_string(0, &[0x01])]);
    let model = decode(&as_binary_string(&der)).expect("decode certificate");
    assert!(!model.is_root);
}

#[test]
fn v1_certificate_without_extensions() {
    // no version tag, no extensions
    let tbs = seq(&[
        &int(&[0x2a]),
        &sha256_rsa_alg(),
        &cn_name("Test CA"),
        &seq(&[&utc_time("200101000000Z"), &utc_time("300101000000Z")]),
        &cn_name("Test Leaf"),
        &rsa_spki(),
    ]);
    let der = seq(&[&tbs, &sha256_rsa_alg(), &bit_string(0, &[0x01])]);
    let model = decode(&as_binary_string(&der)).expect("decode certificate");
    assert_eq!(model.version, 0);
    assert_eq!(model.serial_number, "2a");
    assert!(model.extensions.is_empty());
    // Basic Constraints absent: not a CA
    assert!(!model.is_ca);
}

#[test]
fn pem_and_hex_sources() {
    let der = test_certificate("Test CA", "Test Leaf");

    let pem = pem_armor("CERTIFICATE", &der);
    let model = decode(&pem).expect("decode pem");
    assert_eq!(model.source_type, SourceType::Pem);
    assert_eq!(model.serial_number, "0100");
    assert_eq!(model.source, pem);

    let hex_source = data_encoding::HEXLOWER.encode(&der);
    let model = decode(&hex_source).expect("decode hex");
    assert_eq!(model.source_type, SourceType::Hex);
    assert_eq!(model.serial_number, "0100");
}

#[test]
fn malformed_input_is_a_definitive_failure() {
    // not ASN.1 at all
    assert!(decode("not a certificate \u{7f}~{}").is_err());

    // valid base64 holding a well-formed INTEGER, but neither schema fits
    assert_eq!(decode("AgEF").unwrap_err(), DecodeError::SchemaMismatch);
}
