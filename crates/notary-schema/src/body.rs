//! The notarization record body
//!
//! The data payload of an accepted item is a small JSON object that
//! restates the chain-queryable tags. `deny_unknown_fields` plus five
//! required fields gives the "exactly five" rule directly; a non-string
//! value or a missing field surfaces as a deserialization error.

use notary_types::{Error, Result};
use serde::Deserialize;

/// The five-field JSON body every notarization carries
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotarizedBody {
    /// Content hash, mirrors the `Hash` tag
    pub hash: String,
    /// Namespace hash, mirrors the `Namespace` tag
    pub namespace: String,
    /// Notarization timestamp, mirrors the `Notarized-At` tag
    pub notarized_at: String,
    /// Client SDK version, mirrors the `SDK-Version` tag
    pub sdk_version: String,
    /// Record format version, always the literal `"1"`
    pub v: String,
}

impl NotarizedBody {
    /// Decode the payload as UTF-8 JSON
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(payload)
            .map_err(|_| Error::schema("body is not valid UTF-8"))?;
        serde_json::from_str(text).map_err(|e| Error::schema(format!("invalid body: {e}")))
    }
}
