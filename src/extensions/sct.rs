//! Signed Certificate Timestamp list (RFC 6962)
//!
//! The extension value is an OCTET STRING wrapping the TLS-encoded
//! `SignedCertificateTimestampList`:
//!
//! <pre>
//! opaque SerializedSCT<1..2^16-1>;
//! struct {
//!     SerializedSCT sct_list <1..2^16-1>;
//! } SignedCertificateTimestampList;
//!
//! struct {
//!     Version sct_version;        // u8
//!     LogID id;                   // 32 bytes
//!     uint64 timestamp;           // milliseconds
//!     CtExtensions extensions;    // u16-prefixed
//!     digitally-signed struct {   // hash u8, signature u8, u16-prefixed sig
//!         ...
//!     };
//! } SignedCertificateTimestamp;
//! </pre>

use asn1_rs::Tag;

use crate::ctlog;
use crate::der;
use crate::error::DecodeError;
use crate::time::{format_long, from_unix_millis};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedCertificateTimestamp {
    /// Lower-case hex of the 32-byte log id
    pub log_id: String,
    /// Operator description from the CT log dataset, empty if unknown
    pub log_name: &'static str,
    /// Long-form formatted timestamp
    pub timestamp: String,
    /// Lower-case hex of the signature bytes
    pub signature: String,
    pub hash_algorithm: &'static str,
    pub signature_algorithm: &'static str,
}

const HASH_ALGORITHMS: &[&str] = &["none", "md5", "sha1", "sha224", "sha256", "sha384", "sha512"];
const SIGNATURE_ALGORITHMS: &[&str] = &["anonymous", "rsa", "dsa", "ecdsa"];

pub(crate) fn decode_sct_list(
    input: &[u8],
) -> Result<Vec<SignedCertificateTimestamp>, DecodeError> {
    let root = der::parse_root(input)?;
    if root.tag() != Tag::OctetString {
        return Err(DecodeError::ExtensionDecode);
    }

    let mut reader = Reader::new(root.data);
    let list_len = reader.read_u16()? as usize;
    let mut list = reader.slice(list_len)?;

    let mut timestamps = Vec::new();
    while !list.is_empty() {
        let entry_len = list.read_u16()? as usize;
        let mut entry = list.slice(entry_len)?;

        let _version = entry.read_u8()?;
        let log_id = der::hex_lower(entry.slice(32)?.rest());
        let millis = entry.read_u64()?;
        let ext_len = entry.read_u16()? as usize;
        entry.slice(ext_len)?;
        let hash_algorithm = entry.read_u8()? as usize;
        let signature_algorithm = entry.read_u8()? as usize;
        let sig_len = entry.read_u16()? as usize;
        let signature = der::hex_lower(entry.slice(sig_len)?.rest());

        timestamps.push(SignedCertificateTimestamp {
            log_name: ctlog::log_name(&log_id),
            log_id,
            timestamp: from_unix_millis(millis)
                .map(|dt| format_long(&dt))
                .unwrap_or_default(),
            signature,
            hash_algorithm: HASH_ALGORITHMS
                .get(hash_algorithm)
                .copied()
                .unwrap_or("unknown"),
            signature_algorithm: SIGNATURE_ALGORITHMS
                .get(signature_algorithm)
                .copied()
                .unwrap_or("unknown"),
        });
    }
    Ok(timestamps)
}

// bounds-checked cursor over the TLS binary layout
struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn rest(&self) -> &'a [u8] {
        self.data
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let (b, rest) = self.data.split_first().ok_or(DecodeError::ExtensionDecode)?;
        self.data = rest;
        Ok(*b)
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let hi = self.read_u8()?;
        let lo = self.read_u8()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let mut acc: u64 = 0;
        for _ in 0..8 {
            acc = (acc << 8) | u64::from(self.read_u8()?);
        }
        Ok(acc)
    }

    fn slice(&mut self, len: usize) -> Result<Reader<'a>, DecodeError> {
        if len > self.data.len() {
            return Err(DecodeError::ExtensionDecode);
        }
        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        Ok(Reader { data: head })
    }
}
