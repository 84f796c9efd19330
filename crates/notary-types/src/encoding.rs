//! Byte encodings used on the wire and in identifiers
//!
//! Identifiers and owner moduli travel as unpadded base64url; the queue
//! envelope uses standard base64 and lives with the facade crate. Both
//! directions go through the `base64` engines so alphabet and padding
//! rules stay in one place.

use crate::error::{Error, Result};
use crate::hash::sha256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encode bytes as unpadded base64url (`A-Za-z0-9-_`)
pub fn base64url_encode(bytes: &[u8]) -> String {
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}

/// Decode unpadded base64url into bytes
pub fn base64url_decode(text: &str) -> Result<Vec<u8>> {
    base64::Engine::decode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, text)
        .map_err(|e| Error::decode(format!("invalid base64url: {e}")))
}

/// Canonical name for a signature: base64url(SHA-256(signature))
///
/// DataItem identifiers and wrapping L1 transaction ids are both derived
/// this way.
pub fn signature_id(signature: &[u8]) -> String {
    base64url_encode(&sha256(signature))
}

/// The 32-byte identifier of a DataItem
///
/// A pure function of the signature bytes: SHA-256 of the signature,
/// rendered as 43 characters of unpadded base64url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataItemId([u8; 32]);

impl DataItemId {
    /// Derive the identifier from raw signature bytes
    pub fn from_signature(signature: &[u8]) -> Self {
        DataItemId(sha256(signature))
    }

    /// The raw 32-byte digest
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for DataItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64url_encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64url_roundtrip() {
        let bytes = [0xfbu8, 0xef, 0xff, 0x00, 0x01];
        let encoded = base64url_encode(&bytes);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(base64url_decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_base64url_rejects_padding() {
        assert!(base64url_decode("aGVsbG8=").is_err());
    }

    #[test]
    fn test_id_is_43_chars() {
        let id = DataItemId::from_signature(&[7u8; 512]);
        assert_eq!(id.to_string().len(), 43);
    }

    #[test]
    fn test_id_depends_only_on_signature() {
        let a = DataItemId::from_signature(&[1u8; 512]);
        let b = DataItemId::from_signature(&[1u8; 512]);
        let c = DataItemId::from_signature(&[2u8; 512]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), signature_id(&[1u8; 512]));
    }
}
