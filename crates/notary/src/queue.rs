//! Queue text envelope
//!
//! The batching queue between the two stages carries text records, so
//! accepted DataItem bytes ride inside standard base64. Encoding here and
//! decoding in the batch handler are the only transformations the bytes
//! ever see, and they are exact inverses: the blob that leaves the queue
//! is the blob that entered it.

use notary_types::{Error, Result};

/// Encode one accepted DataItem blob for the queue
pub fn encode_record(raw: &[u8]) -> String {
    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, raw)
}

/// Decode one queue record back into raw DataItem bytes
pub fn decode_record(record: &str) -> Result<Vec<u8>> {
    base64::Engine::decode(&base64::engine::general_purpose::STANDARD, record.trim())
        .map_err(|e| Error::decode(format!("invalid base64 in queue record: {e}")))
}

/// Decode a batch of queue records, preserving order
///
/// The resulting list feeds the bundle assembler directly; a single bad
/// record fails the whole batch so the queue's redelivery handles it.
pub fn decode_batch<R: AsRef<str>>(records: &[R]) -> Result<Vec<Vec<u8>>> {
    records
        .iter()
        .map(|record| decode_record(record.as_ref()))
        .collect()
}
