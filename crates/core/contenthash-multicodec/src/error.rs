//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Malformed varint: {0}")]
    MalformedVarInt(String),

    #[error("The codec ({0}) is not supported")]
    UnsupportedCodec(String),

    #[error("The code 0x{0:x} is not found in the codec table")]
    UnknownCode(u64),
}

pub type Result<T> = std::result::Result<T, EncodingError>;
