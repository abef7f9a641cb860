/*!
 * Content Hash Codec configuration options
 */

use crate::{
    errors::{ContentHashError, Result},
    profile::TextDecoding,
};
use contenthash_multicodec::MulticodecTable;

#[derive(Clone, Debug)]
pub struct ContentHashConfig {
    pub(crate) registry: Option<MulticodecTable>,
    pub(crate) text_decoding: TextDecoding,
    pub(crate) hex_prefix: bool,
}

impl ContentHashConfig {
    /// Returns a builder for `ContentHashConfig`
    /// Example:
    /// ```
    /// use contenthash::config::ContentHashConfig;
    ///
    /// let config = ContentHashConfig::builder().build().unwrap();
    /// ```
    pub fn builder() -> ContentHashConfigBuilder {
        ContentHashConfigBuilder::default()
    }
}

impl Default for ContentHashConfig {
    fn default() -> Self {
        ContentHashConfig {
            registry: None,
            text_decoding: TextDecoding::default(),
            hex_prefix: true,
        }
    }
}

/// Builder for `ContentHashConfig`.
/// Example:
/// ```
/// use contenthash::{config::ContentHashConfig, TextDecoding};
///
/// // Reject payloads that are not valid UTF-8
/// let config = ContentHashConfig::builder()
///     .with_text_decoding(TextDecoding::Strict)
///     .build()
///     .unwrap();
/// ```
pub struct ContentHashConfigBuilder {
    /// Custom multicodec registry
    /// Defaults to the bundled registry
    registry: Option<MulticodecTable>,

    /// How plain text payloads with invalid UTF-8 are handled
    /// Default: `TextDecoding::Lossy`
    text_decoding: TextDecoding,

    /// Accept a leading `0x` on hex input
    /// Default: `true`
    hex_prefix: bool,
}

impl Default for ContentHashConfigBuilder {
    fn default() -> Self {
        ContentHashConfigBuilder {
            registry: None,
            text_decoding: TextDecoding::default(),
            hex_prefix: true,
        }
    }
}

impl ContentHashConfigBuilder {
    /// Default starting constructor for `ContentHashConfigBuilder`
    pub fn new() -> ContentHashConfigBuilder {
        ContentHashConfigBuilder::default()
    }

    /// Build the `ContentHashConfig` from the builder
    pub fn build(self) -> Result<ContentHashConfig> {
        if let Some(registry) = &self.registry
            && registry.is_empty()
        {
            return Err(ContentHashError::ConfigError(
                "custom multicodec registry has no entries".to_string(),
            ));
        }

        Ok(ContentHashConfig {
            registry: self.registry,
            text_decoding: self.text_decoding,
            hex_prefix: self.hex_prefix,
        })
    }

    /// Use a custom multicodec registry instead of the bundled one
    /// Example:
    /// ```
    /// use contenthash::config::ContentHashConfig;
    /// use contenthash_multicodec::MulticodecTable;
    ///
    /// let table = MulticodecTable::from_csv("ipfs-ns, namespace, 0xe3");
    /// let config = ContentHashConfig::builder().with_registry(table).build().unwrap();
    /// ```
    pub fn with_registry(mut self, registry: MulticodecTable) -> Self {
        self.registry = Some(registry);
        self
    }

    /// How plain text payloads with invalid UTF-8 are handled
    pub fn with_text_decoding(mut self, text_decoding: TextDecoding) -> Self {
        self.text_decoding = text_decoding;
        self
    }

    /// Whether hex input may carry a leading `0x`
    pub fn with_hex_prefix(mut self, hex_prefix: bool) -> Self {
        self.hex_prefix = hex_prefix;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContentHashConfig::builder().build().unwrap();
        assert!(config.registry.is_none());
        assert_eq!(config.text_decoding, TextDecoding::Lossy);
        assert!(config.hex_prefix);
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = ContentHashConfig::builder()
            .with_registry(MulticodecTable::from_csv("name, tag, code"))
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ContentHashError::ConfigError(_)
        ));
    }
}
