//! Multicodec registry
//!
//! A bidirectional `name <-> code` table loaded from `table.csv` records
//! (`name, tag, code[, status, description...]`). Only records whose code is
//! given in hexadecimal (`0x...`) are loaded, anything else is skipped.
//!
//! The process-wide table is built from the bundled `table.csv` the first time
//! it is used and is read-only afterwards. [`MulticodecTable::from_csv`] builds
//! an independent table from any other source.

use crate::{
    error::{EncodingError, Result},
    multicodec::{MultiEncoded, MultiEncodedBuf},
    varint,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::LazyLock};
use tracing::{debug, trace, warn};

static TABLE_SOURCE: &str = include_str!("table.csv");

static GLOBAL: LazyLock<MulticodecTable> = LazyLock::new(|| {
    let table = MulticodecTable::from_csv(TABLE_SOURCE);
    debug!("Loaded {} multicodec entries from bundled table", table.len());
    table
});

/// The process-wide registry, populated from the bundled `table.csv` on first use
pub fn global() -> &'static MulticodecTable {
    &GLOBAL
}

/// A single registry record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecEntry {
    pub name: String,
    pub tag: String,
    pub code: u64,
}

/// Bidirectional multicodec lookup table.
///
/// Every name maps to exactly one code and every code to exactly one name.
#[derive(Clone, Debug, Default)]
pub struct MulticodecTable {
    names: HashMap<String, CodecEntry>,
    codes: HashMap<u64, String>,
}

impl MulticodecTable {
    /// Parse a registry source in `table.csv` format
    pub fn from_csv(source: &str) -> Self {
        let mut table = MulticodecTable::default();

        for (line_no, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let [name, tag, code, ..] = fields.as_slice() else {
                trace!("table line {}: not enough fields, skipping", line_no + 1);
                continue;
            };

            let Some(hex) = code.strip_prefix("0x") else {
                trace!("table line {}: code ({code}) is not hex, skipping", line_no + 1);
                continue;
            };

            match u64::from_str_radix(hex, 16) {
                Ok(code) => table.insert(CodecEntry {
                    name: name.to_string(),
                    tag: tag.to_string(),
                    code,
                }),
                Err(e) => {
                    debug!(
                        "table line {}: malformed code ({code}) for {name}: {e}",
                        line_no + 1
                    );
                }
            }
        }

        table
    }

    /// Add an entry. A later entry replaces any earlier entry that shares its
    /// name or its code, the table stays one-to-one.
    pub fn insert(&mut self, entry: CodecEntry) {
        if let Some(previous) = self.names.get(&entry.name)
            && previous.code != entry.code
        {
            warn!(
                "multicodec ({}) redefined: 0x{:x} replaces 0x{:x}",
                entry.name, entry.code, previous.code
            );
            self.codes.remove(&previous.code);
        }

        if let Some(previous) = self.codes.get(&entry.code)
            && *previous != entry.name
        {
            warn!(
                "multicodec code 0x{:x} reassigned: ({}) replaces ({})",
                entry.code, entry.name, previous
            );
            self.names.remove(previous);
        }

        self.codes.insert(entry.code, entry.name.clone());
        self.names.insert(entry.name.clone(), entry);
    }

    /// Number of codecs in the table
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table holds no codecs
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All entries, ordered by code
    pub fn entries(&self) -> Vec<&CodecEntry> {
        let mut entries: Vec<&CodecEntry> = self.names.values().collect();
        entries.sort_by_key(|e| e.code);
        entries
    }

    /// Checks if the name is a known multicodec
    pub fn is_codec(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn code_of(&self, name: &str) -> Option<u64> {
        self.names.get(name).map(|e| e.code)
    }

    pub fn name_of(&self, code: u64) -> Option<&str> {
        self.codes.get(&code).map(String::as_str)
    }

    pub fn tag_of(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(|e| e.tag.as_str())
    }

    /// Varint encoded code for `name`
    pub fn get_prefix(&self, name: &str) -> Result<Vec<u8>> {
        self.code_of(name)
            .map(varint::encode)
            .ok_or_else(|| EncodingError::UnsupportedCodec(name.to_string()))
    }

    /// Returns `payload` prefixed with the varint code of `name`
    pub fn add_prefix(&self, name: &str, payload: &[u8]) -> Result<Vec<u8>> {
        let code = self
            .code_of(name)
            .ok_or_else(|| EncodingError::UnsupportedCodec(name.to_string()))?;
        Ok(MultiEncodedBuf::encode(code, payload).into_bytes())
    }

    /// Re-encodes the varint found at the start of `buffer`
    pub fn extract_prefix(&self, buffer: &[u8]) -> Result<Vec<u8>> {
        extract_prefix(buffer)
    }

    /// Returns `buffer` without its leading varint
    pub fn remove_prefix<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8]> {
        remove_prefix(buffer)
    }

    /// Name of the multicodec that prefixes `buffer`
    pub fn get_codec(&self, buffer: &[u8]) -> Result<&str> {
        let code = MultiEncoded::new(buffer)?.codec();
        self.name_of(code).ok_or(EncodingError::UnknownCode(code))
    }
}

// ****************************************************************************
// Process-wide registry helpers
// ****************************************************************************

/// Varint encoded code for `name`
pub fn get_prefix(name: &str) -> Result<Vec<u8>> {
    global().get_prefix(name)
}

/// Checks if the name is a known multicodec
pub fn is_codec(name: &str) -> bool {
    global().is_codec(name)
}

/// Returns `payload` prefixed with the varint code of `name`
pub fn add_prefix(name: &str, payload: &[u8]) -> Result<Vec<u8>> {
    global().add_prefix(name, payload)
}

/// The varint found at the start of `buffer`.
///
/// Only canonical varints are decoded, so the result is also the encoding of
/// the code it holds.
pub fn extract_prefix(buffer: &[u8]) -> Result<Vec<u8>> {
    Ok(MultiEncoded::new(buffer)?.prefix().to_vec())
}

/// Returns `buffer` without its leading varint
pub fn remove_prefix(buffer: &[u8]) -> Result<&[u8]> {
    Ok(MultiEncoded::new(buffer)?.data())
}

/// Name of the multicodec that prefixes `buffer`
pub fn get_codec(buffer: &[u8]) -> Result<&'static str> {
    global().get_codec(buffer)
}
