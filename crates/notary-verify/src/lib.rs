//! DataItem authenticity
//!
//! This crate recomputes the Arweave deep-hash over a decoded DataItem's
//! canonical field tuple and verifies the RSA-PSS signature against the
//! owner modulus carried in the item. It holds no state and never mutates
//! or canonicalizes its inputs; a forged or corrupted item simply fails.

pub mod deep_hash;
mod signature;

pub use deep_hash::{deep_hash, DeepHashChunk};
pub use signature::{signing_message, verify};
