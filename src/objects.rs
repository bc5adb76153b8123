//! Static OID lookup tables: name-attribute abbreviations, display names,
//! named curves
//!
//! All tables are process-wide, immutable, and initialized once before any
//! decode call. Contents follow the datasets the decoder is expected to carry;
//! unknown OIDs are never an error, lookups simply return `None`.

use asn1_rs::{oid, Oid};
use lazy_static::lazy_static;
use oid_registry::{
    OID_DOMAIN_COMPONENT, OID_PKCS9_EMAIL_ADDRESS, OID_X509_COMMON_NAME, OID_X509_COUNTRY_NAME,
    OID_X509_LOCALITY_NAME, OID_X509_ORGANIZATIONAL_UNIT, OID_X509_ORGANIZATION_NAME,
    OID_X509_STATE_OR_PROVINCE_NAME,
};
use std::collections::HashMap;

/// Short and long display forms of a Name attribute type.
#[derive(Debug, PartialEq, Eq)]
pub struct NameAbbrev {
    pub short: &'static str,
    pub long: &'static str,
}

lazy_static! {
    /// Attribute types appearing in Issuer/Subject names.
    static ref NAME_OIDS: HashMap<Oid<'static>, NameAbbrev> = {
        macro_rules! add {
            ($m:ident, $oid:expr, $short:expr, $long:expr) => {
                $m.insert($oid, NameAbbrev { short: $short, long: $long });
            };
        }

        let mut m = HashMap::new();
        add!(m, OID_X509_COMMON_NAME, "CN", "Common Name");
        add!(m, OID_X509_COUNTRY_NAME, "C", "Country");
        add!(m, oid!(2.5.4.5), "serialNumber", "Serial Number");
        add!(m, OID_DOMAIN_COMPONENT, "DC", "Domain Component");
        add!(m, OID_PKCS9_EMAIL_ADDRESS, "E", "Email");
        add!(m, oid!(2.5.4.42), "G", "Given Name");
        add!(m, oid!(2.5.4.43), "I", "Initials");
        add!(m, OID_X509_LOCALITY_NAME, "L", "Locality");
        add!(m, OID_X509_ORGANIZATION_NAME, "O", "Organization");
        add!(m, OID_X509_ORGANIZATIONAL_UNIT, "OU", "Organization Unit");
        add!(m, OID_X509_STATE_OR_PROVINCE_NAME, "ST", "State");
        add!(m, oid!(2.5.4.9), "Street", "Street Address");
        add!(m, oid!(2.5.4.4), "SN", "Surname");
        add!(m, oid!(2.5.4.12), "T", "Title");
        add!(m, oid!(1.2.840.113549.1.9.8), "", "Unstructured Address");
        add!(m, oid!(1.2.840.113549.1.9.2), "", "Unstructured Name");
        add!(m, oid!(1.3.6.1.4.1.311.60.2.1.3), "jurisdictionCountry", "Jurisdiction Country");
        add!(m, oid!(2.5.4.15), "businessCategory", "Business Category");
        add!(m, oid!(1.3.6.1.2.1.1.5), "", "Host Name");
        m
    };

    /// Display names for extensions, key purposes, policies, access methods,
    /// attributes, and algorithms.
    static ref DISPLAY_NAMES: HashMap<Oid<'static>, &'static str> = {
        let mut m = HashMap::new();
        // name attribute types
        m.insert(OID_X509_COMMON_NAME, "Common Name");
        m.insert(oid!(2.5.4.4), "Surname");
        m.insert(oid!(2.5.4.5), "Serial Number");
        m.insert(OID_X509_COUNTRY_NAME, "Country");
        m.insert(OID_X509_LOCALITY_NAME, "Locality");
        m.insert(OID_X509_STATE_OR_PROVINCE_NAME, "State");
        m.insert(oid!(2.5.4.9), "Street Address");
        m.insert(OID_X509_ORGANIZATION_NAME, "Organization");
        m.insert(OID_X509_ORGANIZATIONAL_UNIT, "Organization Unit");
        m.insert(oid!(2.5.4.12), "Title");
        m.insert(oid!(2.5.4.15), "Business Category");
        m.insert(oid!(2.5.4.42), "Given Name");
        m.insert(oid!(2.5.4.43), "Initials");
        m.insert(OID_DOMAIN_COMPONENT, "Domain Component");
        m.insert(oid!(1.3.6.1.4.1.311.60.2.1.1), "Jurisdiction Locality");
        m.insert(oid!(1.3.6.1.4.1.311.60.2.1.2), "Jurisdiction State");
        m.insert(oid!(1.3.6.1.4.1.311.60.2.1.3), "Jurisdiction Country");
        // certificate extensions
        m.insert(oid!(2.5.29.9), "Subject Directory Attributes");
        m.insert(oid!(2.5.29.14), "Subject Key Identifier");
        m.insert(oid!(2.5.29.15), "Key Usage");
        m.insert(oid!(2.5.29.16), "Private Key Usage Period");
        m.insert(oid!(2.5.29.17), "Subject Alternative Name");
        m.insert(oid!(2.5.29.18), "Issuer Alternative Name");
        m.insert(oid!(2.5.29.19), "Basic Constraints");
        m.insert(oid!(2.5.29.20), "CRL Number");
        m.insert(oid!(2.5.29.21), "Reason Code");
        m.insert(oid!(2.5.29.24), "Invalidity Date");
        m.insert(oid!(2.5.29.27), "Delta CRL Indicator");
        m.insert(oid!(2.5.29.28), "Issuing Distribution Point");
        m.insert(oid!(2.5.29.29), "Certificate Issuer");
        m.insert(oid!(2.5.29.30), "Name Constraints");
        m.insert(oid!(2.5.29.31), "CRL Distribution Points");
        m.insert(oid!(2.5.29.32), "Certificate Policies");
        m.insert(oid!(2.5.29.32.0), "Any Policy");
        m.insert(oid!(2.5.29.33), "Policy Mappings");
        m.insert(oid!(2.5.29.35), "Authority Key Identifier");
        m.insert(oid!(2.5.29.36), "Policy Constraints");
        m.insert(oid!(2.5.29.37), "Extended Key Usage");
        m.insert(oid!(2.5.29.46), "Freshest CRL");
        m.insert(oid!(2.5.29.54), "Inhibit Any Policy");
        m.insert(oid!(1.3.6.1.5.5.7.1.1), "Authority Info Access");
        m.insert(oid!(1.3.6.1.5.5.7.1.3), "QC Statements");
        m.insert(oid!(1.3.6.1.5.5.7.1.11), "Subject Info Access");
        m.insert(oid!(1.3.6.1.4.1.11129.2.4.2), "Certificate Transparency");
        m.insert(oid!(1.3.6.1.4.1.11129.2.4.3), "CT Precertificate Poison");
        m.insert(oid!(2.16.840.1.113730.1.1), "Netscape Certificate Type");
        m.insert(oid!(2.16.840.1.113730.1.13), "Netscape Comment");
        // extended key usage purposes
        m.insert(oid!(2.5.29.37.0), "Any Extended Key Usage");
        m.insert(oid!(1.3.6.1.5.5.7.3.1), "Server Authentication");
        m.insert(oid!(1.3.6.1.5.5.7.3.2), "Client Authentication");
        m.insert(oid!(1.3.6.1.5.5.7.3.3), "Code Signing");
        m.insert(oid!(1.3.6.1.5.5.7.3.4), "Email Protection");
        m.insert(oid!(1.3.6.1.5.5.7.3.5), "IPSEC End System");
        m.insert(oid!(1.3.6.1.5.5.7.3.6), "IPSEC Tunnel");
        m.insert(oid!(1.3.6.1.5.5.7.3.7), "IPSEC User");
        m.insert(oid!(1.3.6.1.5.5.7.3.8), "Time Stamping");
        m.insert(oid!(1.3.6.1.5.5.7.3.9), "OCSP Signing");
        m.insert(oid!(1.3.6.1.4.1.311.10.3.3), "Microsoft Server Gated Crypto");
        m.insert(oid!(1.3.6.1.4.1.311.10.3.4), "Microsoft Encrypted File System");
        m.insert(oid!(1.3.6.1.4.1.311.20.2.2), "Microsoft Smartcard Login");
        m.insert(oid!(2.16.840.1.113730.4.1), "Netscape Server Gated Crypto");
        // access methods
        m.insert(oid!(1.3.6.1.5.5.7.48.1), "OCSP");
        m.insert(oid!(1.3.6.1.5.5.7.48.2), "CA Issuers");
        m.insert(oid!(1.3.6.1.5.5.7.48.3), "Time Stamping");
        m.insert(oid!(1.3.6.1.5.5.7.48.5), "CA Repository");
        // policy qualifiers and CA/Browser Forum policies
        m.insert(oid!(1.3.6.1.5.5.7.2.1), "CPS");
        m.insert(oid!(1.3.6.1.5.5.7.2.2), "User Notice");
        m.insert(oid!(2.23.140.1.1), "EV Guidelines");
        m.insert(oid!(2.23.140.1.2.1), "Domain Validated");
        m.insert(oid!(2.23.140.1.2.2), "Organization Validated");
        m.insert(oid!(2.23.140.1.2.3), "Individual Validated");
        // PKCS#9 / CSR attributes
        m.insert(OID_PKCS9_EMAIL_ADDRESS, "Email");
        m.insert(oid!(1.2.840.113549.1.9.2), "Unstructured Name");
        m.insert(oid!(1.2.840.113549.1.9.3), "Content Type");
        m.insert(oid!(1.2.840.113549.1.9.4), "Message Digest");
        m.insert(oid!(1.2.840.113549.1.9.5), "Signing Time");
        m.insert(oid!(1.2.840.113549.1.9.7), "Challenge Password");
        m.insert(oid!(1.2.840.113549.1.9.8), "Unstructured Address");
        m.insert(oid!(1.2.840.113549.1.9.14), "Extension Request");
        m.insert(oid!(1.2.840.113549.1.9.15), "SMIME Capabilities");
        m.insert(oid!(1.2.840.113549.1.9.20), "Friendly Name");
        m.insert(oid!(1.2.840.113549.1.9.21), "Local Key ID");
        m.insert(oid!(1.3.6.1.4.1.311.13.2.2), "Enrollment CSP Provider");
        m.insert(oid!(1.3.6.1.4.1.311.13.2.3), "OS Version");
        m.insert(oid!(1.3.6.1.4.1.311.21.20), "Request Client Info");
        m.insert(oid!(1.3.6.1.4.1.311.2.1.14), "Microsoft Cert Extensions");
        // key and signature algorithms
        m.insert(oid!(1.2.840.113549.1.1.1), "RSA Encryption");
        m.insert(oid!(1.2.840.113549.1.1.5), "SHA-1 with RSA Encryption");
        m.insert(oid!(1.2.840.113549.1.1.11), "SHA-256 with RSA Encryption");
        m.insert(oid!(1.2.840.113549.1.1.12), "SHA-384 with RSA Encryption");
        m.insert(oid!(1.2.840.113549.1.1.13), "SHA-512 with RSA Encryption");
        m.insert(oid!(1.2.840.10045.2.1), "EC Public Key");
        m.insert(oid!(1.2.840.10045.4.1), "ECDSA with SHA-1");
        m.insert(oid!(1.2.840.10045.4.3.2), "ECDSA with SHA-256");
        m.insert(oid!(1.2.840.10045.4.3.3), "ECDSA with SHA-384");
        m
    };

    /// Named elliptic curves, by the SPKI algorithm parameter OID.
    static ref EC_CURVES: HashMap<Oid<'static>, &'static str> = {
        let mut m = HashMap::new();
        m.insert(oid!(1.2.840.10045.3.1.7), "P-256");
        m.insert(oid!(1.3.132.0.34), "P-384");
        m.insert(oid!(1.3.132.0.35), "P-521");
        m.insert(oid!(1.3.132.0.10), "secp256k1");
        m
    };
}

/// Short/long abbreviations for a Name attribute type OID.
pub fn name_abbreviations(oid: &Oid) -> Option<&'static NameAbbrev> {
    NAME_OIDS.get(&oid.to_owned())
}

/// Display name for a well-known OID.
pub fn display_name(oid: &Oid) -> Option<&'static str> {
    DISPLAY_NAMES.get(oid).copied()
}

/// Display name for a well-known OID, falling back to its dotted form.
pub fn display_name_or_oid(oid: &Oid) -> String {
    match display_name(oid) {
        Some(name) => name.to_string(),
        None => oid.to_id_string(),
    }
}

/// Named curve for an EC algorithm parameter OID.
pub fn curve_name(oid: &Oid) -> Option<&'static str> {
    EC_CURVES.get(oid).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_attribute() {
        let abbrev = name_abbreviations(&oid!(2.5.4.3)).expect("CN");
        assert_eq!(abbrev.short, "CN");
        assert_eq!(abbrev.long, "Common Name");
    }

    #[test]
    fn unknown_name_attribute() {
        assert!(name_abbreviations(&oid!(1.2.3.4)).is_none());
    }

    #[test]
    fn display_name_fallback() {
        assert_eq!(display_name_or_oid(&oid!(2.5.29.19)), "Basic Constraints");
        assert_eq!(display_name_or_oid(&oid!(1.3.9.9.9)), "1.3.9.9.9");
    }

    #[test]
    fn curve_lookup() {
        assert_eq!(curve_name(&oid!(1.2.840.10045.3.1.7)), Some("P-256"));
        assert_eq!(curve_name(&oid!(1.2.840.10045.3.1.1)), None);
    }
}
