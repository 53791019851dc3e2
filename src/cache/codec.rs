//! Value encoding for stored entries.
//!
//! Values are MessagePack encoded. Payloads above [`COMPRESSION_THRESHOLD`]
//! bytes are LZ4 compressed. The first byte of every stored value records
//! which of the two was used.

use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::errors::CacheError;

pub const COMPRESSION_THRESHOLD: usize = 64;

/// Largest decompressed value accepted from the store.
pub const MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

const MARKER_RAW: u8 = 0;
const MARKER_LZ4: u8 = 1;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CacheError> {
    let packed = rmp_serde::to_vec_named(value)
        .map_err(|e| CacheError::SerializationError(e.to_string()))?;
    if packed.len() <= COMPRESSION_THRESHOLD {
        let mut output = Vec::with_capacity(packed.len() + 1);
        output.push(MARKER_RAW);
        output.extend_from_slice(&packed);
        return Ok(output);
    }
    let compressed = lz4_flex::compress_prepend_size(&packed);
    let mut output = Vec::with_capacity(compressed.len() + 1);
    output.push(MARKER_LZ4);
    output.extend_from_slice(&compressed);
    Ok(output)
}

pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CacheError> {
    let (marker, payload) = data
        .split_first()
        .ok_or_else(|| CacheError::SerializationError("empty value".to_string()))?;
    match *marker {
        MARKER_RAW => rmp_serde::from_slice(payload)
            .map_err(|e| CacheError::SerializationError(e.to_string())),
        MARKER_LZ4 => {
            let (header, compressed) = payload
                .split_first_chunk::<4>()
                .ok_or_else(|| CacheError::SerializationError("truncated size header".to_string()))?;
            let size = u32::from_le_bytes(*header) as usize;
            if size > MAX_DECOMPRESSED_SIZE {
                return Err(CacheError::SerializationError(format!("decompressed size {} exceeds limit {}", size, MAX_DECOMPRESSED_SIZE)));
            }
            let packed = lz4_flex::decompress(compressed, size)
                .map_err(|e| CacheError::SerializationError(e.to_string()))?;
            rmp_serde::from_slice(&packed)
                .map_err(|e| CacheError::SerializationError(e.to_string()))
        }
        other => Err(CacheError::SerializationError(format!("unknown value marker {}", other))),
    }
}
