//! Arweave deep-hash
//!
//! A recursive SHA-384 digest over a tree whose leaves are byte strings
//! and whose interior nodes are ordered lists:
//!
//! - blob `b`: `H(H("blob" ++ len_ascii) ++ H(b))`
//! - list of `n` children: fold `acc = H(acc ++ deep_hash(child))` with
//!   the seed `acc = H("list" ++ n_ascii)`
//!
//! where `H` is SHA-384 and the length prefixes are decimal ASCII. The
//! construction is byte-exact; a one-byte difference anywhere in the tree
//! changes the root.

use notary_types::sha384;

/// One node of the deep-hash tree
#[derive(Debug, Clone)]
pub enum DeepHashChunk<'a> {
    /// A byte-string leaf
    Blob(&'a [u8]),
    /// An ordered list of children
    List(Vec<DeepHashChunk<'a>>),
}

/// Compute the 48-byte deep-hash of a tree
pub fn deep_hash(chunk: &DeepHashChunk<'_>) -> [u8; 48] {
    match chunk {
        DeepHashChunk::Blob(bytes) => {
            let tag = tagged(b"blob", bytes.len());
            let mut pair = [0u8; 96];
            pair[..48].copy_from_slice(&sha384(&tag));
            pair[48..].copy_from_slice(&sha384(bytes));
            sha384(&pair)
        }
        DeepHashChunk::List(children) => {
            let tag = tagged(b"list", children.len());
            let mut acc = sha384(&tag);
            for child in children {
                let mut pair = [0u8; 96];
                pair[..48].copy_from_slice(&acc);
                pair[48..].copy_from_slice(&deep_hash(child));
                acc = sha384(&pair);
            }
            acc
        }
    }
}

fn tagged(kind: &[u8], len: usize) -> Vec<u8> {
    let mut tag = kind.to_vec();
    tag.extend_from_slice(len.to_string().as_bytes());
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use notary_types::sha384;

    #[test]
    fn test_blob_construction() {
        // H(H("blob5") ++ H("hello")) per the definition above
        let mut pair = Vec::new();
        pair.extend_from_slice(&sha384(b"blob5"));
        pair.extend_from_slice(&sha384(b"hello"));
        assert_eq!(deep_hash(&DeepHashChunk::Blob(b"hello")), sha384(&pair));
    }

    #[test]
    fn test_empty_list_is_seed_hash() {
        assert_eq!(deep_hash(&DeepHashChunk::List(Vec::new())), sha384(b"list0"));
    }

    #[test]
    fn test_deterministic() {
        let tree = DeepHashChunk::List(vec![
            DeepHashChunk::Blob(b"dataitem"),
            DeepHashChunk::Blob(b"1"),
            DeepHashChunk::List(vec![DeepHashChunk::Blob(b"nested")]),
        ]);
        assert_eq!(deep_hash(&tree), deep_hash(&tree));
    }

    #[test]
    fn test_empty_blob_differs_from_empty_list() {
        assert_ne!(
            deep_hash(&DeepHashChunk::Blob(b"")),
            deep_hash(&DeepHashChunk::List(Vec::new()))
        );
    }

    #[test]
    fn test_list_order_matters() {
        let ab = DeepHashChunk::List(vec![DeepHashChunk::Blob(b"a"), DeepHashChunk::Blob(b"b")]);
        let ba = DeepHashChunk::List(vec![DeepHashChunk::Blob(b"b"), DeepHashChunk::Blob(b"a")]);
        assert_ne!(deep_hash(&ab), deep_hash(&ba));
    }

    #[test]
    fn test_concatenation_does_not_collide() {
        // ["ab"] and ["a", "b"] must hash differently
        let joined = DeepHashChunk::List(vec![DeepHashChunk::Blob(b"ab")]);
        let split = DeepHashChunk::List(vec![DeepHashChunk::Blob(b"a"), DeepHashChunk::Blob(b"b")]);
        assert_ne!(deep_hash(&joined), deep_hash(&split));
    }
}
