//! RSA-PSS verification of decoded DataItems

use crate::deep_hash::{deep_hash, DeepHashChunk};
use notary_dataitem::DataItem;
use notary_types::{sha256, Error, Result};
use rsa::{BigUint, Pss, RsaPublicKey};
use sha2::Sha256;

/// Public exponent every accepted owner key uses (`AQAB`)
const PUBLIC_EXPONENT: u32 = 65537;

/// PSS salt length: the SHA-256 digest size
const SALT_LEN: usize = 32;

/// The signed message of a v1 DataItem: the deep-hash of its canonical
/// field tuple
///
/// Target and anchor contribute empty byte strings when absent. The tag
/// element is the raw on-wire Avro region, never a re-encoding; two items
/// with the same tag list but different block framing sign differently.
pub fn signing_message(item: &DataItem<'_>) -> [u8; 48] {
    deep_hash(&DeepHashChunk::List(vec![
        DeepHashChunk::Blob(b"dataitem"),
        DeepHashChunk::Blob(b"1"),
        DeepHashChunk::Blob(b"1"),
        DeepHashChunk::Blob(item.owner()),
        DeepHashChunk::Blob(item.target().unwrap_or_default()),
        DeepHashChunk::Blob(item.anchor().unwrap_or_default()),
        DeepHashChunk::Blob(item.tag_bytes()),
        DeepHashChunk::Blob(item.data()),
    ]))
}

/// Verify a decoded DataItem against its embedded owner modulus
///
/// RSA-PSS with MGF1-SHA-256 and a 32-byte salt, public exponent 65537.
/// The PSS message digest is SHA-256 of the 48-byte deep-hash output.
/// Every failure mode collapses to [`Error::SignatureInvalid`]; the
/// distinction between a bad modulus, a wrong message, and a forged
/// signature is not observable to callers. The comparison itself is
/// delegated to the `rsa` crate's constant-time implementation.
pub fn verify(item: &DataItem<'_>) -> Result<()> {
    let modulus = BigUint::from_bytes_be(item.owner());
    let key = RsaPublicKey::new(modulus, BigUint::from(PUBLIC_EXPONENT)).map_err(|e| {
        tracing::debug!(error = %e, "owner modulus rejected");
        Error::SignatureInvalid
    })?;

    let digest = sha256(&signing_message(item));
    key.verify(
        Pss::new_with_salt::<Sha256>(SALT_LEN),
        &digest,
        item.signature(),
    )
    .map_err(|_| Error::SignatureInvalid)
}
