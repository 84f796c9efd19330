//! ANS-104 bundle production
//!
//! The assembler turns an ordered batch of already-accepted DataItem blobs
//! into one bundle byte string: a 32-byte item count, a positional index
//! of (size, id) entries, then the payloads verbatim. Nothing is
//! re-parsed or re-verified here — admission happened upstream, and the
//! bundle must carry the exact bytes that were admitted.
//!
//! The signing seam wraps the finished bundle: a [`TransactionShell`]
//! stands in for the native L1 transaction and a [`BundleKeySigner`] for
//! the external key service, with [`sign_transaction`] driving the two.

mod assemble;
mod signer;

pub use assemble::{assemble, BUNDLE_HEADER_LEN, BUNDLE_INDEX_ENTRY_LEN};
pub use signer::{
    sign_transaction, BundleKeySigner, TransactionShell, TransactionSignature, BUNDLE_FORMAT_TAG,
    BUNDLE_VERSION_TAG,
};
