//! Error taxonomy for the notary pipeline
//!
//! Every failure the core can produce falls into one of these kinds. The
//! messages are user-safe: the HTTP boundary echoes them verbatim in 400
//! responses, so nothing here may leak internals. `Internal` is the only
//! kind that maps to a 500 and its detail stays in the logs.

use thiserror::Error;

/// Result alias used throughout the notary crates
pub type Result<T> = std::result::Result<T, Error>;

/// All error kinds the protocol core can surface
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed DataItem bytes: buffer underflow, invalid presence flag,
    /// invalid Avro tag encoding, bad UTF-8, or a tag-count mismatch
    #[error("decode error: {0}")]
    Decode(String),

    /// The DataItem declares a signature scheme other than RSA-PSS (type 1)
    #[error("unsupported signature type {0}")]
    UnsupportedSignatureType(u16),

    /// Deep-hash recomputation or RSA-PSS verification failed
    #[error("signature verification failed")]
    SignatureInvalid,

    /// The DataItem exceeds the size ceiling the operator subsidizes
    #[error("data item size {size} exceeds limit of {limit} bytes")]
    SizeExceeded { size: usize, limit: usize },

    /// An authenticated DataItem violates the application schema; the
    /// message names the first rule that failed
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// An invariant the core relies on was broken; never echoed to callers
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a [`Error::Decode`] with a formatted message
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode(message.into())
    }

    /// Shorthand for a [`Error::SchemaViolation`] with a formatted message
    pub fn schema(message: impl Into<String>) -> Self {
        Error::SchemaViolation(message.into())
    }

    /// HTTP status class the outer boundary should translate this into
    pub fn status(&self) -> u16 {
        match self {
            Error::Internal(_) => 500,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(Error::decode("short read").status(), 400);
        assert_eq!(Error::UnsupportedSignatureType(2).status(), 400);
        assert_eq!(Error::SignatureInvalid.status(), 400);
        assert_eq!(
            Error::SizeExceeded {
                size: 20_000,
                limit: 12_288
            }
            .status(),
            400
        );
        assert_eq!(Error::schema("target not allowed").status(), 400);
    }

    #[test]
    fn test_internal_is_500() {
        assert_eq!(Error::Internal("invariant broken".into()).status(), 500);
    }

    #[test]
    fn test_messages_name_the_rule() {
        let err = Error::schema("SDK-Version 0.1.9 below minimum 0.2.0");
        assert_eq!(
            err.to_string(),
            "schema violation: SDK-Version 0.1.9 below minimum 0.2.0"
        );
    }
}
