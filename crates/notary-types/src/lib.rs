//! Core types and data structures for the notary gateway
//!
//! This crate provides the fundamental data structures shared across the
//! notary pipeline: tag pairs, derived identifiers, byte encodings, and the
//! error taxonomy every other crate reports through.

pub mod encoding;
pub mod error;
pub mod hash;
pub mod outcome;
pub mod tag;

pub use encoding::{base64url_decode, base64url_encode, signature_id, DataItemId};
pub use error::{Error, Result};
pub use hash::{sha256, sha384};
pub use outcome::ValidationOutcome;
pub use tag::Tag;
