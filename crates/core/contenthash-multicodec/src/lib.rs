//! Multicodec registry and varint prefix utilities
//!
//! This crate provides the encoding primitives used by the content hash codec:
//! - Unsigned varint encoding/decoding
//! - A process-wide multicodec registry (name <-> code), loaded from a bundled `table.csv`
//! - Borrowed and owned views over multicodec prefixed buffers

pub mod multicodec;
pub mod registry;
pub mod varint;

pub use multicodec::{DAG_PB, IPFS_NS, IPNS_NS, MultiEncoded, MultiEncodedBuf, ONION, SWARM_NS};
pub use registry::{
    CodecEntry, MulticodecTable, add_prefix, extract_prefix, get_codec, get_prefix, is_codec,
    remove_prefix,
};

mod error;
pub use error::{EncodingError, Result};
