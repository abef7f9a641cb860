//! Content hash codec
//!
//! A content hash is `[varint multicodec][payload]`, exchanged as a hex string.
//! Decoding reads the codec from the prefix, strips it and hands the payload to
//! the [`Profile`] selected for that codec. Encoding runs the same steps in
//! reverse.

use crate::{config::ContentHashConfig, errors::Result, profile::Profile};
use contenthash_multicodec::{MulticodecTable, registry};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A decoded content hash: the codec name and the human readable value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedContentHash {
    pub codec: String,
    pub value: String,
}

#[derive(Clone, Debug, Default)]
pub struct ContentHashCodec {
    config: ContentHashConfig,
}

impl ContentHashCodec {
    pub fn new(config: ContentHashConfig) -> Self {
        ContentHashCodec { config }
    }

    /// The registry in use, custom if one was configured
    pub fn registry(&self) -> &MulticodecTable {
        match &self.config.registry {
            Some(table) => table,
            None => registry::global(),
        }
    }

    /// Decode a content hash.
    /// `content_hash` is a hex string, the result is the decoded content
    pub fn decode(&self, content_hash: &str) -> Result<String> {
        Ok(self.decode_with_codec(content_hash)?.value)
    }

    /// Decode a content hash, returning the codec alongside the value
    pub fn decode_with_codec(&self, content_hash: &str) -> Result<DecodedContentHash> {
        let buffer = self.hex_to_bytes(content_hash)?;
        let registry = self.registry();

        let codec = registry.get_codec(&buffer)?;
        let payload = registry.remove_prefix(&buffer)?;
        let profile = Profile::resolve(codec);
        debug!(
            "decoding {} payload bytes as {} ({codec})",
            payload.len(),
            profile.as_str()
        );

        Ok(DecodedContentHash {
            codec: codec.to_string(),
            value: profile.decode(payload, self.config.text_decoding)?,
        })
    }

    /// General purpose encoding.
    /// Returns the content hash as a lower case hex string without `0x`
    pub fn encode(&self, codec: &str, value: &str) -> Result<String> {
        let profile = Profile::resolve(codec);
        let payload = profile.encode(value)?;
        let prefixed = self.registry().add_prefix(codec, &payload)?;
        debug!("encoded ({value}) as {codec}, {} bytes", prefixed.len());
        Ok(hex::encode(prefixed))
    }

    /// Extract the codec of a content hash.
    /// Returns `None` if the hash can't be read or its code is unknown
    pub fn get_codec(&self, content_hash: &str) -> Option<String> {
        let lookup = self.hex_to_bytes(content_hash).and_then(|buffer| {
            self.registry()
                .get_codec(&buffer)
                .map(str::to_string)
                .map_err(Into::into)
        });

        match lookup {
            Ok(codec) => Some(codec),
            Err(e) => {
                trace!("no codec for ({content_hash}): {e}");
                None
            }
        }
    }

    /// Encode an IPFS identifier (base58 multihash) as an `ipfs-ns` content hash
    pub fn encode_ipfs(&self, identifier: &str) -> Result<String> {
        self.encode("ipfs-ns", identifier)
    }

    /// Encode an IPNS identifier (base58 multihash) as an `ipns-ns` content hash
    pub fn encode_ipns(&self, identifier: &str) -> Result<String> {
        self.encode("ipns-ns", identifier)
    }

    fn hex_to_bytes(&self, input: &str) -> Result<Vec<u8>> {
        let input = if self.config.hex_prefix {
            input
                .strip_prefix("0x")
                .or_else(|| input.strip_prefix("0X"))
                .unwrap_or(input)
        } else {
            input
        };
        Ok(hex::decode(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ContentHashError, profile::TextDecoding};

    const IPFS_HASH: &str =
        "e30101701220c27f5a54fefc77ff1b2980461286628736f3f410f7e446da3266cdfff3d049c6";

    #[test]
    fn test_decode_with_codec() {
        let decoded = ContentHashCodec::default()
            .decode_with_codec(IPFS_HASH)
            .unwrap();
        assert_eq!(decoded.codec, "ipfs-ns");
        assert_eq!(decoded.value, "QmbRtS9dp2zqARv7v7ak2reJp3zE5NRkvEpHsc48Hjo9MF");
    }

    #[test]
    fn test_hex_prefix_accepted() {
        let codec = ContentHashCodec::default();
        let prefixed = format!("0x{IPFS_HASH}");
        assert_eq!(codec.decode(&prefixed).unwrap(), codec.decode(IPFS_HASH).unwrap());
        assert_eq!(codec.get_codec(&prefixed).as_deref(), Some("ipfs-ns"));
    }

    #[test]
    fn test_hex_prefix_rejected() {
        let config = ContentHashConfig::builder()
            .with_hex_prefix(false)
            .build()
            .unwrap();
        let codec = ContentHashCodec::new(config);
        assert!(matches!(
            codec.decode(&format!("0x{IPFS_HASH}")).unwrap_err(),
            ContentHashError::MalformedHex(_)
        ));
    }

    #[test]
    fn test_custom_registry() {
        let table = MulticodecTable::from_csv("ipfs-ns, namespace, 0xe3\nnote, text, 0x0300");
        let config = ContentHashConfig::builder()
            .with_registry(table)
            .build()
            .unwrap();
        let codec = ContentHashCodec::new(config);

        assert_eq!(codec.encode("note", "hello").unwrap(), "800668656c6c6f");
        assert_eq!(codec.decode("800668656c6c6f").unwrap(), "hello");
        assert!(matches!(
            codec.encode("onion", "x").unwrap_err(),
            ContentHashError::UnsupportedCodec(_)
        ));
        assert_eq!(codec.get_codec("bc0378"), None);
    }

    #[test]
    fn test_strict_text_decoding() {
        let config = ContentHashConfig::builder()
            .with_text_decoding(TextDecoding::Strict)
            .build()
            .unwrap();
        let codec = ContentHashCodec::new(config);
        assert!(matches!(
            codec.decode("bc036fff6b").unwrap_err(),
            ContentHashError::InvalidUtf8(_)
        ));
        assert_eq!(ContentHashCodec::default().decode("bc036fff6b").unwrap(), "o\u{fffd}k");
    }

    #[test]
    fn test_get_codec_absorbs_errors() {
        let codec = ContentHashCodec::default();
        assert_eq!(codec.get_codec("zz"), None);
        assert_eq!(codec.get_codec("e3"), None);
        assert_eq!(codec.get_codec("ff7f00"), None);
        assert_eq!(codec.get_codec(""), None);
        assert_eq!(codec.get_codec("80808080808080808002aabb"), None);
    }

    #[test]
    fn test_encode_ipfs_and_ipns() {
        let codec = ContentHashCodec::default();
        let identifier = "QmbRtS9dp2zqARv7v7ak2reJp3zE5NRkvEpHsc48Hjo9MF";
        assert_eq!(codec.encode_ipfs(identifier).unwrap(), IPFS_HASH);
        assert_eq!(codec.encode_ipns(identifier).unwrap(), format!("e5{}", &IPFS_HASH[2..]));
    }
}
