/*!
 * Content Hash Errors
 */

use contenthash_multicodec::EncodingError;
use thiserror::Error;

/// Content hash encoding/decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentHashError {
    #[error("The codec ({0}) is not supported")]
    UnsupportedCodec(String),

    #[error("The code 0x{0:x} is not found in the codec table")]
    UnknownCode(u64),

    #[error("Malformed varint: {0}")]
    MalformedVarInt(String),

    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    #[error("Malformed CID: {0}")]
    MalformedCidStructure(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<EncodingError> for ContentHashError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::MalformedVarInt(msg) => ContentHashError::MalformedVarInt(msg),
            EncodingError::UnsupportedCodec(name) => ContentHashError::UnsupportedCodec(name),
            EncodingError::UnknownCode(code) => ContentHashError::UnknownCode(code),
        }
    }
}

impl From<hex::FromHexError> for ContentHashError {
    fn from(err: hex::FromHexError) -> Self {
        ContentHashError::MalformedHex(err.to_string())
    }
}

impl From<cid::Error> for ContentHashError {
    fn from(err: cid::Error) -> Self {
        ContentHashError::MalformedCidStructure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentHashError>;
