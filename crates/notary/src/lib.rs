//! Notary gateway protocol core
//!
//! A two-stage pipeline for operator-subsidized notarization on Arweave.
//! Stage one accepts a signed ANS-104 DataItem from an untrusted client,
//! decodes it, verifies its RSA-PSS signature against the embedded owner
//! key, and validates it against the notarization schema; the original
//! bytes — never a re-encoding — are then queued. Stage two batches
//! queued items into one ANS-104 bundle for submission under an
//! operator-signed L1 transaction.
//!
//! # Example
//!
//! ```no_run
//! use notary::{process_data_item, queue};
//!
//! # fn example(raw: &[u8]) -> notary::Result<()> {
//! let outcome = process_data_item(raw);
//! if let Some(id) = outcome.id() {
//!     let record = queue::encode_record(raw);
//!     // hand `record` to the batching queue; later:
//!     let batch = queue::decode_batch(&[record])?;
//!     let bundle = notary::assemble(&batch)?;
//!     println!("bundle for {id}: {} bytes", bundle.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod queue;

pub use notary_bundle::{
    assemble, sign_transaction, BundleKeySigner, TransactionShell, TransactionSignature,
    BUNDLE_FORMAT_TAG, BUNDLE_VERSION_TAG,
};
pub use notary_dataitem::DataItem;
pub use notary_schema::{validate, NotarizedBody, MAX_ITEM_SIZE};
pub use notary_types::{DataItemId, Error, Result, Tag, ValidationOutcome};
pub use notary_verify::{deep_hash, signing_message, verify, DeepHashChunk};
pub use pipeline::process_data_item;
