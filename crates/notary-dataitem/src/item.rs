//! Parsed view over one ANS-104 DataItem
//!
//! Layout for signature type 1 (RSA-PSS, 4096-bit):
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 2 | signature type, LE u16 |
//! | 2 | 512 | signature |
//! | 514 | 512 | owner modulus, big-endian |
//! | 1026 | 1 | target presence flag |
//! | … | 0 or 32 | target |
//! | … | 1 | anchor presence flag |
//! | … | 0 or 32 | anchor |
//! | … | 8 | tag count, LE u64 |
//! | … | 8 | tag region length, LE u64 |
//! | … | n | Avro tag region |
//! | … | rest | data payload |

use crate::avro;
use crate::wire::ByteReader;
use notary_types::{base64url_encode, DataItemId, Error, Result, Tag};

/// RSA-PSS over a 4096-bit key, the only scheme this gateway accepts
const SIGNATURE_TYPE_RSA4096: u16 = 1;

/// Signature length for signature type 1
pub const SIGNATURE_LEN: usize = 512;
/// Owner modulus length for signature type 1
pub const OWNER_LEN: usize = 512;
/// Target length when the presence flag is set
pub const TARGET_LEN: usize = 32;
/// Anchor length when the presence flag is set
pub const ANCHOR_LEN: usize = 32;
/// Smallest well-formed item: header fields with no target, anchor,
/// tags, or data
pub const MIN_ITEM_LEN: usize = 2 + SIGNATURE_LEN + OWNER_LEN + 1 + 1 + 8 + 8;

/// A borrowed, structured view over one DataItem blob
///
/// Every slice points into the backing buffer; the view lives no longer
/// than the bytes it was parsed from, and the original blob is what gets
/// forwarded downstream on acceptance.
#[derive(Debug)]
pub struct DataItem<'a> {
    raw: &'a [u8],
    signature: &'a [u8],
    owner: &'a [u8],
    target: Option<&'a [u8]>,
    anchor: Option<&'a [u8]>,
    tag_bytes: &'a [u8],
    data: &'a [u8],
    tags: Vec<Tag>,
    id: DataItemId,
}

impl<'a> DataItem<'a> {
    /// Parse one DataItem blob
    ///
    /// Fails with a decode error on any short read, an out-of-range
    /// presence flag, a malformed tag region, or a tag count that
    /// disagrees with the decoded list. A signature type other than 1 is
    /// reported distinctly so callers can tell an unsupported scheme from
    /// corruption.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        let mut reader = ByteReader::new(raw);

        let signature_type = reader.read_u16_le("signature type")?;
        if signature_type != SIGNATURE_TYPE_RSA4096 {
            return Err(Error::UnsupportedSignatureType(signature_type));
        }

        let signature = reader.take(SIGNATURE_LEN, "signature")?;
        let owner = reader.take(OWNER_LEN, "owner")?;

        let target = match reader.read_u8("target flag")? {
            0 => None,
            1 => Some(reader.take(TARGET_LEN, "target")?),
            flag => return Err(Error::decode(format!("invalid target flag {flag}"))),
        };
        let anchor = match reader.read_u8("anchor flag")? {
            0 => None,
            1 => Some(reader.take(ANCHOR_LEN, "anchor")?),
            flag => return Err(Error::decode(format!("invalid anchor flag {flag}"))),
        };

        let tag_count = reader.read_u64_le("tag count")?;
        let tag_bytes_len = reader.read_u64_le("tag region length")?;
        let tag_bytes_len = usize::try_from(tag_bytes_len)
            .map_err(|_| Error::decode("tag region length exceeds buffer"))?;
        let tag_bytes = reader.take(tag_bytes_len, "tag region")?;
        let data = reader.rest();

        let tags = avro::decode_tags(tag_bytes)?;
        if tags.len() as u64 != tag_count {
            return Err(Error::decode(format!(
                "tag count mismatch: header declares {tag_count}, decoded {}",
                tags.len()
            )));
        }

        Ok(DataItem {
            raw,
            signature,
            owner,
            target,
            anchor,
            tag_bytes,
            data,
            tags,
            id: DataItemId::from_signature(signature),
        })
    }

    /// The unmodified bytes this view was parsed from
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Total size of the item in bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the backing blob is empty (never true for a parsed item)
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Declared signature scheme; always 1 for a successfully parsed item
    pub fn signature_type(&self) -> u16 {
        SIGNATURE_TYPE_RSA4096
    }

    /// The 512-byte RSA-PSS signature
    pub fn signature(&self) -> &'a [u8] {
        self.signature
    }

    /// The 512-byte big-endian RSA modulus of the signer
    pub fn owner(&self) -> &'a [u8] {
        self.owner
    }

    /// Owner modulus as unpadded base64url
    pub fn owner_base64url(&self) -> String {
        base64url_encode(self.owner)
    }

    /// The 32-byte target, if the presence flag was set
    pub fn target(&self) -> Option<&'a [u8]> {
        self.target
    }

    /// Target as unpadded base64url, if present
    pub fn target_base64url(&self) -> Option<String> {
        self.target.map(base64url_encode)
    }

    /// The 32-byte anchor, if the presence flag was set
    pub fn anchor(&self) -> Option<&'a [u8]> {
        self.anchor
    }

    /// Anchor rendered as text: UTF-8 with trailing NULs trimmed, absent
    /// if the flag was unset or the trimmed text is empty
    pub fn anchor_text(&self) -> Option<String> {
        let anchor = self.anchor?;
        let trimmed = match anchor.iter().rposition(|b| *b != 0) {
            Some(last) => &anchor[..=last],
            None => return None,
        };
        String::from_utf8(trimmed.to_vec()).ok()
    }

    /// The raw on-wire Avro tag region, exactly as signed
    pub fn tag_bytes(&self) -> &'a [u8] {
        self.tag_bytes
    }

    /// Decoded tag list, in wire order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The data payload
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Derived identifier: base64url(SHA-256(signature))
    pub fn id(&self) -> DataItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notary_types::signature_id;

    /// Assemble a raw item from parts; mirrors the layout table above
    fn build_raw(
        signature_type: u16,
        target: Option<&[u8]>,
        anchor: Option<&[u8]>,
        tag_count: u64,
        tags: &[Tag],
        data: &[u8],
    ) -> Vec<u8> {
        let mut raw = Vec::new();
        raw.extend_from_slice(&signature_type.to_le_bytes());
        raw.extend_from_slice(&[0xabu8; SIGNATURE_LEN]);
        raw.extend_from_slice(&[0xcdu8; OWNER_LEN]);
        match target {
            Some(bytes) => {
                raw.push(1);
                raw.extend_from_slice(bytes);
            }
            None => raw.push(0),
        }
        match anchor {
            Some(bytes) => {
                raw.push(1);
                raw.extend_from_slice(bytes);
            }
            None => raw.push(0),
        }
        let tag_bytes = avro::encode_tags(tags);
        raw.extend_from_slice(&tag_count.to_le_bytes());
        raw.extend_from_slice(&(tag_bytes.len() as u64).to_le_bytes());
        raw.extend_from_slice(&tag_bytes);
        raw.extend_from_slice(data);
        raw
    }

    #[test]
    fn test_parse_minimal_item() {
        let raw = build_raw(1, None, None, 0, &[], b"");
        let item = DataItem::parse(&raw).unwrap();
        assert_eq!(item.len(), MIN_ITEM_LEN);
        assert_eq!(item.signature(), &[0xabu8; SIGNATURE_LEN][..]);
        assert_eq!(item.owner(), &[0xcdu8; OWNER_LEN][..]);
        assert!(item.target().is_none());
        assert!(item.anchor().is_none());
        assert!(item.tags().is_empty());
        assert!(item.data().is_empty());
    }

    #[test]
    fn test_parse_full_item() {
        let tags = vec![Tag::new("App-Name", "agentsystems-notary")];
        let target = [0x11u8; TARGET_LEN];
        let anchor = *b"anchor-text\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0";
        let raw = build_raw(1, Some(&target), Some(&anchor), 1, &tags, b"payload");
        let item = DataItem::parse(&raw).unwrap();
        assert_eq!(item.target(), Some(&target[..]));
        assert_eq!(item.target_base64url().unwrap(), base64url_encode(&target));
        assert_eq!(item.anchor_text().unwrap(), "anchor-text");
        assert_eq!(item.tags(), &tags[..]);
        assert_eq!(item.data(), b"payload");
        assert_eq!(item.tag_bytes(), avro::encode_tags(&tags));
    }

    #[test]
    fn test_identifier_is_signature_digest() {
        let raw = build_raw(1, None, None, 0, &[], b"data");
        let item = DataItem::parse(&raw).unwrap();
        assert_eq!(
            item.id().to_string(),
            signature_id(&[0xabu8; SIGNATURE_LEN])
        );
    }

    #[test]
    fn test_unsupported_signature_type() {
        let raw = build_raw(2, None, None, 0, &[], b"");
        match DataItem::parse(&raw) {
            Err(Error::UnsupportedSignatureType(2)) => {}
            other => panic!("expected UnsupportedSignatureType, got {other:?}"),
        }
    }

    #[test]
    fn test_short_buffer_fails() {
        let raw = build_raw(1, None, None, 0, &[], b"");
        for len in [0, 1, 2, 100, MIN_ITEM_LEN - 1] {
            assert!(DataItem::parse(&raw[..len]).is_err(), "len {len}");
        }
    }

    #[test]
    fn test_invalid_presence_flag_fails() {
        let mut raw = build_raw(1, None, None, 0, &[], b"");
        raw[2 + SIGNATURE_LEN + OWNER_LEN] = 2;
        let err = DataItem::parse(&raw).unwrap_err();
        assert!(err.to_string().contains("target flag"));
    }

    #[test]
    fn test_tag_count_mismatch_fails() {
        let tags = vec![Tag::new("a", "b")];
        let raw = build_raw(1, None, None, 3, &tags, b"");
        let err = DataItem::parse(&raw).unwrap_err();
        assert!(err.to_string().contains("tag count mismatch"));
    }

    #[test]
    fn test_tag_region_overrunning_buffer_fails() {
        let mut raw = build_raw(1, None, None, 0, &[], b"");
        // inflate the declared tag region length past the buffer end
        let len_offset = MIN_ITEM_LEN - 8;
        raw[len_offset..len_offset + 8].copy_from_slice(&1024u64.to_le_bytes());
        assert!(DataItem::parse(&raw).is_err());
    }

    #[test]
    fn test_all_zero_anchor_renders_absent() {
        let anchor = [0u8; ANCHOR_LEN];
        let raw = build_raw(1, None, Some(&anchor), 0, &[], b"");
        let item = DataItem::parse(&raw).unwrap();
        assert!(item.anchor().is_some());
        assert!(item.anchor_text().is_none());
    }
}
