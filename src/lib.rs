//! # X.509 Inspect
//!
//! A semantic decoder for X.509 certificates and certification requests
//! (CSRs): one source string in — PEM armor, bare base64, hex, or a raw
//! binary string — and one structured [`CertificateModel`] out, describing
//! every field, extension, and attribute in human-interpretable form.
//!
//! Byte-level ASN.1 parsing is delegated to [asn1-rs](https://docs.rs/asn1-rs);
//! this crate maps the generic node tree onto domain values: name components,
//! validity dates, public-key parameters, and the OID-dispatched extension and
//! attribute decoders. Decoding is tolerant of partial corruption: a broken
//! extension or attribute keeps its identity with an empty value, and never
//! fails the surrounding certificate.
//!
//! # Examples
//!
//! ```rust,no_run
//! static PEM: &str = "-----BEGIN CERTIFICATE-----\n...\n-----END CERTIFICATE-----";
//!
//! # fn main() {
//! let model = x509_inspect::decode(PEM).expect("decode failed");
//! println!("subject: {:?}", model.subject);
//! println!("serial: {}", model.serial_number);
//! for ext in &model.extensions {
//!     println!("extension {} (critical: {})", ext.name, ext.critical);
//! }
//! # }
//! ```
//!
//! Out of scope by design: chain validation, revocation checking, certificate
//! generation, and cryptographic signature verification.

#![deny(unstable_features, unused_import_braces, unused_qualifications)]
#![warn(missing_debug_implementations, unreachable_pub)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod algorithm;
pub mod attributes;
pub mod certificate;
pub mod ctlog;
mod der;
pub mod error;
pub mod extensions;
pub mod input;
pub mod name;
pub mod objects;
pub mod public_key;
mod time;

pub use certificate::{decode, CertificateModel, SignatureInfo};
pub use error::{DecodeError, InputFormatError};
pub use input::SourceType;
