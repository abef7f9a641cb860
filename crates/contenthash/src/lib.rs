//! Encode and decode ENS content hashes
//!
//! A content hash is a multicodec prefixed byte string, exchanged as hex:
//! `e3 01 | 01 70 12 20 ...` is an `ipfs-ns` prefix followed by a CID.
//!
//! ```
//! use contenthash::ContentHash;
//!
//! let hash = "e30101701220c27f5a54fefc77ff1b2980461286628736f3f410f7e446da3266cdfff3d049c6";
//! assert_eq!(ContentHash::get_codec(hash).as_deref(), Some("ipfs-ns"));
//! assert_eq!(
//!     ContentHash::decode(hash).unwrap(),
//!     "QmbRtS9dp2zqARv7v7ak2reJp3zE5NRkvEpHsc48Hjo9MF"
//! );
//! ```
//!
//! [`ContentHash`] uses the bundled multicodec registry and default options.
//! Use [`ContentHashCodec`] with a [`config::ContentHashConfig`] to change them.

pub mod codec;
pub mod config;
pub mod errors;
pub mod ipfs;
pub mod profile;

pub use codec::{ContentHashCodec, DecodedContentHash};
pub use errors::{ContentHashError, Result};
pub use ipfs::cid_v0_to_v1_base32;
pub use profile::{Profile, TextDecoding};

pub struct ContentHash;

impl ContentHash {
    /// Decode a content hash (hex string) to its human readable value
    pub fn decode(content_hash: &str) -> Result<String> {
        ContentHashCodec::default().decode(content_hash)
    }

    /// Decode a content hash, returning both codec and value
    pub fn decode_with_codec(content_hash: &str) -> Result<DecodedContentHash> {
        ContentHashCodec::default().decode_with_codec(content_hash)
    }

    /// Encode `value` with `codec`, returns lower case hex without `0x`
    pub fn encode(codec: &str, value: &str) -> Result<String> {
        ContentHashCodec::default().encode(codec, value)
    }

    /// Codec name of a content hash, `None` if it can't be determined
    pub fn get_codec(content_hash: &str) -> Option<String> {
        ContentHashCodec::default().get_codec(content_hash)
    }

    pub fn from_ipfs(identifier: &str) -> Result<String> {
        ContentHashCodec::default().encode_ipfs(identifier)
    }

    pub fn from_ipns(identifier: &str) -> Result<String> {
        ContentHashCodec::default().encode_ipns(identifier)
    }

    /// Take any IPFS identifier and convert it to a CID v1 encoded in base32
    pub fn cid_v0_to_v1_base32(identifier: &str) -> Result<String> {
        cid_v0_to_v1_base32(identifier)
    }
}
