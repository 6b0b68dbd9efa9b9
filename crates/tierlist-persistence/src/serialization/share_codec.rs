//! Share codec: the board as a compact, URL-safe string.
//!
//! The canonical JSON is deflated and written as unpadded URL-safe base64, so
//! the result can sit in a URL fragment without further escaping.

use std::io::{Read, Write};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde_json::Value;
use tierlist_core::{TierlistError, TierlistResult};
use tierlist_domain::AppState;

use crate::migration::migrate;

/// Encodes a board for sharing. Returns an empty string if encoding fails.
pub fn encode(state: &AppState) -> String {
    match try_encode(state) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::error!("Failed to encode board: {}", e);
            String::new()
        }
    }
}

fn try_encode(state: &AppState) -> TierlistResult<String> {
    let json =
        serde_json::to_vec(state).map_err(|e| TierlistError::Serialization(e.to_string()))?;
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Decodes a shared string back into raw JSON.
///
/// Any failure (bad alphabet, corrupt stream, invalid JSON) yields `None`;
/// the result still has to go through [`migrate`].
pub fn decode(encoded: &str) -> Option<Value> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return None;
    }
    match try_decode(encoded) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring undecodable share string: {}", e);
            None
        }
    }
}

fn try_decode(encoded: &str) -> TierlistResult<Value> {
    let compressed = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| TierlistError::Serialization(e.to_string()))?;
    let mut json = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut json)?;
    serde_json::from_str(&json).map_err(|e| TierlistError::Serialization(e.to_string()))
}

/// [`decode`] followed by [`migrate`].
pub fn decode_state(encoded: &str) -> Option<AppState> {
    decode(encoded).and_then(|value| migrate(&value))
}
