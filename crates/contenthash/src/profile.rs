//! Content hash profiles
//!
//! A profile converts the payload that follows the multicodec prefix to and
//! from its human readable form. The set of profiles is closed:
//!
//! | codec                 | profile     | decoded form                     |
//! |-----------------------|-------------|----------------------------------|
//! | `swarm-ns`            | `Swarm`     | hex digest of the embedded CID   |
//! | `ipfs-ns`, `ipns-ns`  | `IpfsLike`  | base58btc multihash of the CID   |
//! | anything else         | `PlainText` | UTF-8 text                       |

use crate::errors::{ContentHashError, Result};
use cid::Cid;
use contenthash_multicodec::DAG_PB;
use multihash::Multihash;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::trace;

/// How `PlainText` payloads that are not valid UTF-8 are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDecoding {
    /// Invalid sequences are replaced with U+FFFD
    #[default]
    Lossy,
    /// Invalid sequences fail with [`ContentHashError::InvalidUtf8`]
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Swarm,
    IpfsLike,
    PlainText,
}

impl Profile {
    /// Select the profile for a codec name. Unknown names fall back to `PlainText`
    pub fn resolve(codec: &str) -> Self {
        let profile = match codec {
            "swarm-ns" => Profile::Swarm,
            "ipfs-ns" | "ipns-ns" => Profile::IpfsLike,
            _ => Profile::PlainText,
        };
        trace!("codec ({codec}) resolved to profile {}", profile.as_str());
        profile
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Swarm => "swarm",
            Profile::IpfsLike => "ipfs",
            Profile::PlainText => "plain-text",
        }
    }

    /// Payload bytes to human readable string
    pub fn decode(&self, payload: &[u8], text: TextDecoding) -> Result<String> {
        match self {
            Profile::Swarm => hex_multihash(payload),
            Profile::IpfsLike => b58_multihash(payload),
            Profile::PlainText => utf8(payload, text),
        }
    }

    /// Human readable string to payload bytes
    pub fn encode(&self, value: &str) -> Result<Vec<u8>> {
        match self {
            // Swarm manifests would need a keccak-256 multihash wrapped in a
            // swarm-manifest CID, the layout is not settled
            Profile::Swarm => Err(ContentHashError::NotImplemented(
                "swarm-ns encoding".to_string(),
            )),
            Profile::IpfsLike => {
                let bytes = bs58::decode(value).into_vec().map_err(|e| {
                    ContentHashError::MalformedCidStructure(format!(
                        "({value}) is not base58: {e}"
                    ))
                })?;
                let multihash = Multihash::<64>::from_bytes(&bytes).map_err(|e| {
                    ContentHashError::MalformedCidStructure(format!(
                        "({value}) is not a multihash: {e}"
                    ))
                })?;
                Ok(Cid::new_v1(DAG_PB, multihash).to_bytes())
            }
            Profile::PlainText => Ok(value.as_bytes().to_vec()),
        }
    }
}

fn parse_cid(payload: &[u8]) -> Result<Cid> {
    let mut reader = Cursor::new(payload);
    let cid = Cid::read_bytes(&mut reader)?;
    let consumed = reader.position() as usize;
    if consumed != payload.len() {
        return Err(ContentHashError::MalformedCidStructure(format!(
            "{} trailing bytes after the CID",
            payload.len() - consumed
        )));
    }
    trace!(
        "payload parsed as CID {:?} codec 0x{:x}",
        cid.version(),
        cid.codec()
    );
    Ok(cid)
}

fn hex_multihash(payload: &[u8]) -> Result<String> {
    let cid = parse_cid(payload)?;
    Ok(hex::encode(cid.hash().digest()))
}

fn b58_multihash(payload: &[u8]) -> Result<String> {
    let cid = parse_cid(payload)?;
    Ok(bs58::encode(cid.hash().to_bytes()).into_string())
}

fn utf8(payload: &[u8], text: TextDecoding) -> Result<String> {
    match text {
        TextDecoding::Lossy => Ok(String::from_utf8_lossy(payload).into_owned()),
        TextDecoding::Strict => String::from_utf8(payload.to_vec())
            .map_err(|e| ContentHashError::InvalidUtf8(e.to_string())),
    }
}
