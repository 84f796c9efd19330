//! The L1 transaction signing seam
//!
//! The gateway never talks to the chain or the key service itself. The
//! caller supplies a [`TransactionShell`] wrapping the bundle bytes in a
//! native L1 transaction and a [`BundleKeySigner`] fronting the external
//! key service; [`sign_transaction`] runs the fixed choreography between
//! them. The transaction id uses the same derivation as a DataItem id:
//! base64url of the SHA-256 of the signature.

use notary_types::{base64url_encode, signature_id, Result};

/// Tag the wrapping L1 transaction carries to mark the payload format
pub const BUNDLE_FORMAT_TAG: (&str, &str) = ("Bundle-Format", "binary");

/// Tag the wrapping L1 transaction carries to mark the bundle version
pub const BUNDLE_VERSION_TAG: (&str, &str) = ("Bundle-Version", "2.0.0");

/// The completed signature triple placed back onto the transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSignature {
    /// Transaction id: base64url(SHA-256(signature))
    pub id: String,
    /// Owner modulus as unpadded base64url
    pub owner: String,
    /// Raw RSA-PSS signature bytes
    pub signature: Vec<u8>,
}

/// A native L1 transaction holding the bundle, seen through the three
/// operations the signing choreography needs
pub trait TransactionShell {
    /// Install the owner modulus (unpadded base64url) before hashing
    fn set_owner(&mut self, owner: &str) -> Result<()>;

    /// The 48-byte deep-hash over the transaction's signable fields,
    /// computed with the owner already in place
    fn signature_data(&self) -> Result<[u8; 48]>;

    /// Install the finished signature triple
    fn set_signature(&mut self, signature: TransactionSignature) -> Result<()>;
}

/// The externally held signing key, typically a KMS-backed RSA-4096 key
pub trait BundleKeySigner {
    /// The public modulus, big-endian bytes
    fn modulus(&self) -> Result<Vec<u8>>;

    /// RSA-PSS-SHA-256 signature over a 48-byte deep-hash output
    fn sign(&self, digest: &[u8; 48]) -> Result<Vec<u8>>;
}

/// Sign a bundle-carrying transaction and return its id
///
/// Order matters: the owner must be installed before the signature data
/// is taken, because the owner is one of the signed fields.
pub fn sign_transaction<T, S>(shell: &mut T, signer: &S) -> Result<String>
where
    T: TransactionShell,
    S: BundleKeySigner,
{
    let owner = base64url_encode(&signer.modulus()?);
    shell.set_owner(&owner)?;

    let digest = shell.signature_data()?;
    let signature = signer.sign(&digest)?;
    let id = signature_id(&signature);
    tracing::debug!(%id, "bundle transaction signed");

    shell.set_signature(TransactionSignature {
        id: id.clone(),
        owner,
        signature,
    })?;
    Ok(id)
}
