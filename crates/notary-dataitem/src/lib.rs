//! ANS-104 DataItem binary decoding
//!
//! This crate parses one DataItem blob into a structured, borrowed view:
//! signature, owner modulus, optional target and anchor, the raw Avro tag
//! region alongside its decoded tag list, the data payload, and the
//! derived identifier. Parsing is strictly bounds-checked; no field of the
//! view ever references memory outside the backing buffer.
//!
//! Decoding establishes structure only. Authenticity is the job of
//! `notary-verify` and policy the job of `notary-schema`; both operate on
//! the [`DataItem`] produced here.

pub mod avro;
pub mod item;
mod wire;

pub use avro::{decode_tags, encode_tags};
pub use item::{DataItem, ANCHOR_LEN, MIN_ITEM_LEN, OWNER_LEN, SIGNATURE_LEN, TARGET_LEN};
