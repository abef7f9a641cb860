//! Multicodec prefixed buffers
//!
//! Multicodec is a self-describing format that prefixes data with a varint
//! indicating the type of data that follows. A content hash is exactly this:
//! `[varint codec][payload]`.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::{error::Result, varint};

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const DAG_PB: u64 = 0x70;
pub const IPFS_NS: u64 = 0xe3;
pub const SWARM_NS: u64 = 0xe4;
pub const IPNS_NS: u64 = 0xe5;
pub const ONION: u64 = 0x01bc;

/// A multicodec prefixed byte slice (borrowed)
#[repr(transparent)]
pub struct MultiEncoded([u8]);

impl MultiEncoded {
    /// Create a new multiencoded byte slice
    /// Validates the varint prefix
    pub fn new(bytes: &[u8]) -> Result<&Self> {
        varint::decode(bytes, 0)?;

        // SAFETY: MultiEncoded is a transparent wrapper over [u8]
        Ok(unsafe { &*(bytes as *const [u8] as *const MultiEncoded) })
    }

    /// Separates the codec and the data
    pub fn parts(&self) -> (u64, &[u8]) {
        let (codec, prefix_len) = self.split();
        (codec, &self.0[prefix_len..])
    }

    /// Raw codec value (u64)
    pub fn codec(&self) -> u64 {
        self.split().0
    }

    /// Number of bytes taken by the varint prefix
    pub fn prefix_len(&self) -> usize {
        self.split().1
    }

    /// The varint prefix bytes
    pub fn prefix(&self) -> &[u8] {
        &self.0[..self.prefix_len()]
    }

    /// Data bytes (without codec prefix)
    pub fn data(&self) -> &[u8] {
        self.parts().1
    }

    // The prefix was validated on construction
    fn split(&self) -> (u64, usize) {
        varint::decode(&self.0, 0).unwrap_or((0, 0))
    }
}

impl std::fmt::Debug for MultiEncoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiEncoded")
            .field("codec", &format_args!("0x{:x}", self.codec()))
            .field("data_len", &self.data().len())
            .finish()
    }
}

/// A multicodec prefixed byte buffer (owned)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiEncodedBuf(Vec<u8>);

impl MultiEncodedBuf {
    /// Prefix bytes with a raw codec value
    pub fn encode(codec: u64, bytes: &[u8]) -> Self {
        let prefix = varint::encode(codec);
        let mut result = Vec::with_capacity(prefix.len() + bytes.len());
        result.extend(prefix);
        result.extend(bytes);
        Self(result)
    }

    /// Returns the raw bytes, including the codec prefix
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}
