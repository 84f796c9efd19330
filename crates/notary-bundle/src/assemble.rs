//! Bundle framing

use notary_types::{sha256, Error, Result};

/// Size of the leading item-count field
pub const BUNDLE_HEADER_LEN: usize = 32;

/// Size of one index entry: a 32-byte length field and a 32-byte item id
pub const BUNDLE_INDEX_ENTRY_LEN: usize = 64;

/// Byte range of the signature inside a type-1 DataItem
const SIGNATURE_RANGE: std::ops::Range<usize> = 2..514;

/// Assemble an ordered batch of DataItem blobs into one ANS-104 bundle
///
/// Layout: a 32-byte little-endian item count, then per item a 32-byte
/// little-endian byte length and the raw SHA-256 of its signature slice,
/// then every blob verbatim in the same order. Output length is exactly
/// `32 + 64·N + Σ|item|`.
///
/// The batch is trusted: items were verified and validated on admission.
/// The only refusal is an item too short to contain a signature slice,
/// which could never have been admitted and indicates a corrupted batch.
pub fn assemble<B: AsRef<[u8]>>(items: &[B]) -> Result<Vec<u8>> {
    let payload_len: usize = items.iter().map(|item| item.as_ref().len()).sum();
    let mut bundle = Vec::with_capacity(
        BUNDLE_HEADER_LEN + BUNDLE_INDEX_ENTRY_LEN * items.len() + payload_len,
    );

    bundle.extend_from_slice(&le_u256(items.len() as u64));

    for (position, item) in items.iter().enumerate() {
        let item = item.as_ref();
        if item.len() < SIGNATURE_RANGE.end {
            return Err(Error::decode(format!(
                "bundle item {position} is {} bytes, too short for a signature",
                item.len()
            )));
        }
        bundle.extend_from_slice(&le_u256(item.len() as u64));
        bundle.extend_from_slice(&sha256(&item[SIGNATURE_RANGE]));
    }

    for item in items {
        bundle.extend_from_slice(item.as_ref());
    }

    tracing::debug!(items = items.len(), bytes = bundle.len(), "bundle assembled");
    Ok(bundle)
}

/// A u64 widened into the low bytes of a 32-byte little-endian field
fn le_u256(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..8].copy_from_slice(&value.to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_of(len: usize, fill: u8) -> Vec<u8> {
        let mut item = vec![fill; len];
        item[0] = 0x01;
        item[1] = 0x00;
        item
    }

    #[test]
    fn test_empty_batch() {
        let bundle = assemble::<&[u8]>(&[]).unwrap();
        assert_eq!(bundle, [0u8; 32]);
    }

    #[test]
    fn test_framing_layout() {
        let first = item_of(1100, 0xaa);
        let second = item_of(1200, 0xbb);
        let bundle = assemble(&[&first, &second]).unwrap();

        assert_eq!(bundle.len(), 32 + 64 * 2 + 1100 + 1200);
        assert_eq!(u64::from_le_bytes(bundle[0..8].try_into().unwrap()), 2);
        assert_eq!(&bundle[8..32], &[0u8; 24]);

        assert_eq!(u64::from_le_bytes(bundle[32..40].try_into().unwrap()), 1100);
        assert_eq!(&bundle[64..96], &sha256(&first[2..514]));
        assert_eq!(u64::from_le_bytes(bundle[96..104].try_into().unwrap()), 1200);
        assert_eq!(&bundle[128..160], &sha256(&second[2..514]));

        assert_eq!(&bundle[160..160 + 1100], &first[..]);
        assert_eq!(&bundle[160 + 1100..], &second[..]);
    }

    #[test]
    fn test_order_preserved() {
        let items: Vec<Vec<u8>> = (0..5).map(|i| item_of(514 + i, i as u8)).collect();
        let bundle = assemble(&items).unwrap();
        let mut offset = 32 + 64 * items.len();
        for item in &items {
            assert_eq!(&bundle[offset..offset + item.len()], &item[..]);
            offset += item.len();
        }
        assert_eq!(offset, bundle.len());
    }

    #[test]
    fn test_short_item_rejected() {
        let err = assemble(&[item_of(513, 0x00)]).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_items_emitted_verbatim() {
        let item = item_of(600, 0x5a);
        let bundle = assemble(&[&item]).unwrap();
        assert_eq!(&bundle[96..], &item[..]);
    }
}
