//! Decoder errors

use asn1_rs::Error;

/// An error raised while normalizing the textual input into bytes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputFormatError {
    #[error("illegal character at offset {offset}")]
    IllegalCharacter { offset: usize },
    #[error("base64 encoding incomplete: at least 2 bits missing")]
    IncompleteBase64,
    #[error("hex encoding incomplete: 4 bits missing")]
    IncompleteHex,
}

/// An error that can occur while decoding a certificate or certification request.
///
/// Only errors at the top of the pipeline (input normalization, root parsing,
/// schema selection) are returned to the caller. Failures inside an individual
/// extension or attribute are caught at their own scope, logged, and replaced
/// with the type-appropriate default value.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid input format: {0}")]
    InputFormat(#[from] InputFormatError),

    #[error("input matches neither Certificate nor CertificationRequest")]
    SchemaMismatch,

    #[error("invalid X.509 name")]
    InvalidName,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid extension content")]
    ExtensionDecode,
    #[error("invalid attribute content")]
    AttributeDecode,

    #[error("BER error: {0}")]
    Ber(#[from] Error),
    #[error("incomplete BER content")]
    Incomplete,
}

impl From<asn1_rs::Err<Error>> for DecodeError {
    fn from(e: asn1_rs::Err<Error>) -> DecodeError {
        match e {
            asn1_rs::Err::Error(e) | asn1_rs::Err::Failure(e) => DecodeError::Ber(e),
            asn1_rs::Err::Incomplete(_) => DecodeError::Incomplete,
        }
    }
}
