// Copyright (c) 2018-2024 The MobileCoin Foundation

//! Bounds-checked reads over a decoded blob payload.

use crate::error::BlobError;
use core::ops::Range;

/// A cursor over the decoded payload.
///
/// Every read validates the remaining length before advancing, so the
/// layout arithmetic in the decoder can never index outside the buffer.
#[derive(Clone, Debug)]
pub struct BlobReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BlobReader<'a> {
    /// Start a cursor at the beginning of the given payload.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The current offset from the start of the payload.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read a little-endian u32 and advance past it.
    pub fn read_u32(&mut self) -> Result<u32, BlobError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    /// Claim the next `len` bytes, returning their range within the payload.
    pub fn read_range(&mut self, len: usize) -> Result<Range<usize>, BlobError> {
        let start = self.pos;
        let end = match start.checked_add(len) {
            Some(end) if end <= self.data.len() => end,
            _ => {
                return Err(BlobError::MalformedLayout(
                    start,
                    start.saturating_add(len),
                    self.data.len(),
                ))
            }
        };
        self.pos = end;
        Ok(start..end)
    }

    /// Claim the next `len` bytes, returning them as a slice.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], BlobError> {
        let range = self.read_range(len)?;
        Ok(&self.data[range])
    }

    /// Advance past `len` bytes without exposing them.
    pub fn skip(&mut self, len: usize) -> Result<(), BlobError> {
        self.read_range(len).map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_values() {
        let data = [1u8, 0, 0, 0, 0xfe, 0xff, 0xff, 0xff, 0xaa, 0xbb];
        let mut reader = BlobReader::new(&data);
        assert_eq!(reader.read_u32().expect("Could not read first word"), 1);
        assert_eq!(
            reader.read_u32().expect("Could not read second word"),
            0xffff_fffe
        );
        assert_eq!(reader.position(), 8);
        assert_eq!(
            reader.read_bytes(2).expect("Could not read trailing bytes"),
            &[0xaa, 0xbb]
        );
    }

    #[test]
    fn read_past_end() {
        let data = [0u8; 6];
        let mut reader = BlobReader::new(&data);
        reader.read_u32().expect("Could not read first word");
        assert_eq!(reader.read_u32(), Err(BlobError::MalformedLayout(4, 8, 6)));
        // A failed read does not advance the cursor.
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn skip_and_range() {
        let data = [0u8; 10];
        let mut reader = BlobReader::new(&data);
        reader.skip(3).expect("Could not skip");
        assert_eq!(reader.read_range(4).expect("Could not claim range"), 3..7);
        assert_eq!(
            reader.read_range(4),
            Err(BlobError::MalformedLayout(7, 11, 10))
        );
    }

    #[test]
    fn zero_length_range_at_end() {
        let data = [0u8; 4];
        let mut reader = BlobReader::new(&data);
        reader.skip(4).expect("Could not skip to end");
        assert_eq!(reader.read_range(0).expect("Could not claim range"), 4..4);
    }
}
