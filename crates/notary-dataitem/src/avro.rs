//! Avro wire codec for the DataItem tag region
//!
//! Tags travel as an Avro array of `{name: string, value: string}` records:
//! zero or more blocks, each prefixed by a zig-zag long item count, closed
//! by a zero count. A negative block count means the count's absolute value
//! of items preceded by the block's byte size, which readers may skip; this
//! decoder reads and discards it. Strings are a zig-zag long length followed
//! by that many bytes of UTF-8.

use notary_types::{Error, Result, Tag};

/// Read one zig-zag encoded long, returning the value and bytes consumed
///
/// Seven payload bits per byte, continuation flag 0x80. A truncated or
/// overlong varint is a decode failure.
pub(crate) fn read_long(buf: &[u8]) -> Result<(i64, usize)> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    let mut consumed = 0;
    loop {
        let byte = *buf
            .get(consumed)
            .ok_or_else(|| Error::decode("buffer ends inside varint"))?;
        consumed += 1;
        if shift >= 64 {
            return Err(Error::decode("varint longer than 64 bits"));
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
    }
    let decoded = ((value >> 1) as i64) ^ -((value & 1) as i64);
    Ok((decoded, consumed))
}

fn write_long(out: &mut Vec<u8>, value: i64) {
    let mut encoded = ((value << 1) ^ (value >> 63)) as u64;
    loop {
        let byte = (encoded & 0x7f) as u8;
        encoded >>= 7;
        if encoded == 0 {
            out.push(byte);
            break;
        }
        out.push(byte | 0x80);
    }
}

struct TagReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> TagReader<'a> {
    fn read_long(&mut self) -> Result<i64> {
        let (value, consumed) = read_long(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    fn read_string(&mut self, field: &str) -> Result<String> {
        let len = self.read_long()?;
        let len = usize::try_from(len)
            .map_err(|_| Error::decode(format!("negative length for tag {field}")))?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| Error::decode(format!("buffer ends inside tag {field}")))?;
        let text = std::str::from_utf8(&self.buf[self.pos..end])
            .map_err(|_| Error::decode(format!("tag {field} is not valid UTF-8")))?;
        self.pos = end;
        Ok(text.to_owned())
    }
}

/// Decode the raw tag region into its tag list
///
/// An empty region decodes to an empty list. Otherwise blocks are read up
/// to the zero terminator; bytes after the terminator are a decode failure.
pub fn decode_tags(buf: &[u8]) -> Result<Vec<Tag>> {
    if buf.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = TagReader { buf, pos: 0 };
    let mut tags = Vec::new();
    loop {
        let block = reader.read_long()?;
        if block == 0 {
            break;
        }
        let count = if block < 0 {
            // sized block: the byte length follows the count; skippable,
            // but this decoder walks every entry anyway
            reader.read_long()?;
            block.unsigned_abs()
        } else {
            block as u64
        };
        for _ in 0..count {
            let name = reader.read_string("name")?;
            let value = reader.read_string("value")?;
            tags.push(Tag { name, value });
        }
    }
    if reader.pos != buf.len() {
        return Err(Error::decode("trailing bytes after tag list"));
    }
    Ok(tags)
}

/// Encode a tag list as a single Avro block
///
/// Produces the canonical on-wire form: one positive-count block followed
/// by the zero terminator, or an empty buffer for an empty list.
pub fn encode_tags(tags: &[Tag]) -> Vec<u8> {
    if tags.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    write_long(&mut out, tags.len() as i64);
    for tag in tags {
        write_long(&mut out, tag.name.len() as i64);
        out.extend_from_slice(tag.name.as_bytes());
        write_long(&mut out, tag.value.len() as i64);
        out.extend_from_slice(tag.value.as_bytes());
    }
    write_long(&mut out, 0);
    out
}
