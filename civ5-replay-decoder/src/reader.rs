//! Primitive binary decoding over an in-memory byte source
//!
//! All integers are little-endian and signed. The stream keeps a sticky
//! `exhausted` flag: once any read runs past the end of the source the flag
//! stays set, and callers use it as a termination signal alongside the
//! terminal-record check.

use crate::types::{DecoderError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Forward-only reader with an owned cursor
#[derive(Debug, Clone)]
pub struct ByteStream {
    cursor: Cursor<Vec<u8>>,
    exhausted: bool,
}

impl ByteStream {
    /// Wrap a byte buffer
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            cursor: Cursor::new(data),
            exhausted: false,
        }
    }

    /// Current byte offset
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Total length of the source
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    /// True if the source holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left between the cursor and the end of the source
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor.position() as usize)
    }

    /// True once a read has run past the end of the source
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move the cursor back to an earlier position
    ///
    /// Only used to rewind after speculative locale detection. Clears the
    /// exhausted flag since the cursor is back inside the source.
    pub fn rewind_to(&mut self, position: u64) {
        self.cursor.set_position(position);
        self.exhausted = false;
    }

    /// Make sure `needed` bytes are available; otherwise consume the rest and fail
    fn ensure(&mut self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(self.run_out(needed));
        }
        Ok(())
    }

    /// Mark the stream exhausted and build the matching error
    fn run_out(&mut self, needed: usize) -> DecoderError {
        let offset = self.position();
        let available = self.remaining();
        self.cursor.set_position(self.len() as u64);
        self.exhausted = true;
        DecoderError::EndOfStream {
            offset,
            needed,
            available,
        }
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    /// Read a single signed byte
    pub fn read_i8(&mut self) -> Result<i8> {
        self.ensure(1)?;
        Ok(self.cursor.read_i8()?)
    }

    /// Read a little-endian signed 32-bit integer
    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.cursor.read_i32::<LittleEndian>()?)
    }

    /// Read exactly `count` raw bytes
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.ensure(count)?;
        let start = self.position() as usize;
        let bytes = self.cursor.get_ref()[start..start + count].to_vec();
        self.cursor.set_position((start + count) as u64);
        Ok(bytes)
    }

    /// Skip `count` bytes without decoding them
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.cursor.set_position(self.position() + count as u64);
        Ok(())
    }

    /// Read an `i32` that must be a non-negative length
    pub fn read_length(&mut self, context: &'static str) -> Result<usize> {
        let offset = self.position();
        let value = self.read_i32_le()?;
        usize::try_from(value).map_err(|_| DecoderError::FormatInvariantViolation {
            offset,
            context,
            expected: "non-negative length".to_string(),
            found: value.to_string(),
        })
    }

    /// Read a string whose byte count is given by a leading `i32`
    pub fn read_length_prefixed_string(&mut self) -> Result<String> {
        let count = self.read_length("string length")?;
        let bytes = self.read_bytes(count)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read bytes up to (and consuming) a NUL terminator
    pub fn read_nul_terminated_string(&mut self) -> Result<String> {
        let start = self.position() as usize;
        let data = self.cursor.get_ref();
        match data[start..].iter().position(|&b| b == 0) {
            Some(end) => {
                let s = String::from_utf8_lossy(&data[start..start + end]).into_owned();
                self.cursor.set_position((start + end + 1) as u64);
                Ok(s)
            }
            None => {
                // No terminator before the end of the source
                let needed = data.len() - start + 1;
                Err(self.run_out(needed))
            }
        }
    }

    /// Read NUL-terminated strings until an empty one terminates the list
    pub fn read_nul_terminated_string_list(&mut self) -> Result<Vec<String>> {
        let mut list = Vec::new();
        loop {
            let s = self.read_nul_terminated_string()?;
            if s.is_empty() {
                return Ok(list);
            }
            list.push(s);
        }
    }

    /// Read a block of `byte_count` bytes and split it on NUL
    ///
    /// One trailing NUL is stripped first, so a block of `"a\0b\0"` yields
    /// `["a", "b"]`.
    pub fn read_sized_string_list(&mut self, byte_count: usize) -> Result<Vec<String>> {
        let mut block = self.read_bytes(byte_count)?;
        if block.last() == Some(&0) {
            block.pop();
        }
        Ok(block
            .split(|&b| b == 0)
            .map(|part| String::from_utf8_lossy(part).into_owned())
            .collect())
    }

    /// Read `count` little-endian integers
    ///
    /// When `count` is `None` it is read as a leading `i32`.
    pub fn read_int_array(&mut self, count: Option<usize>) -> Result<Vec<i32>> {
        let count = match count {
            Some(count) => count,
            None => self.read_length("array length")?,
        };
        (0..count).map(|_| self.read_i32_le()).collect()
    }

    /// Read `count` tuples of `width` integers each
    ///
    /// When `count` is `None` it is read as a leading `i32`.
    pub fn read_int_tuples(&mut self, count: Option<usize>, width: usize) -> Result<Vec<Vec<i32>>> {
        let count = match count {
            Some(count) => count,
            None => self.read_length("array length")?,
        };
        (0..count)
            .map(|_| (0..width).map(|_| self.read_i32_le()).collect::<Result<Vec<i32>>>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_i32_little_endian_signed() {
        let mut stream = ByteStream::new(vec![0xff, 0xff, 0xff, 0xff, 0x05, 0, 0, 0]);
        assert_eq!(stream.read_i32_le().unwrap(), -1);
        assert_eq!(stream.read_i32_le().unwrap(), 5);
        assert_eq!(stream.remaining(), 0);
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut stream = ByteStream::new(vec![1, 2]);
        let err = stream.read_i32_le().unwrap_err();
        assert!(err.is_end_of_stream());
        assert!(stream.is_exhausted());
        assert!(stream.read_u8().is_err());
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_length_prefixed_string_replaces_invalid_utf8() {
        let mut stream = ByteStream::new(vec![3, 0, 0, 0, b'a', 0xff, b'b']);
        assert_eq!(stream.read_length_prefixed_string().unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_negative_string_length_is_rejected() {
        let mut stream = ByteStream::new(vec![0xfe, 0xff, 0xff, 0xff]);
        let err = stream.read_length_prefixed_string().unwrap_err();
        assert!(matches!(err, DecoderError::FormatInvariantViolation { offset: 0, .. }));
    }

    #[test]
    fn test_nul_terminated_strings() {
        let mut stream = ByteStream::new(b"abc\0de\0\0xyz".to_vec());
        assert_eq!(stream.read_nul_terminated_string_list().unwrap(), vec!["abc", "de"]);
        let err = stream.read_nul_terminated_string().unwrap_err();
        assert!(err.is_end_of_stream());
    }

    #[test]
    fn test_sized_string_list_strips_one_trailing_nul() {
        let mut stream = ByteStream::new(b"TERRAIN_GRASS\0TERRAIN_COAST\0".to_vec());
        let list = stream.read_sized_string_list(28).unwrap();
        assert_eq!(list, vec!["TERRAIN_GRASS", "TERRAIN_COAST"]);

        let mut stream = ByteStream::new(Vec::new());
        assert_eq!(stream.read_sized_string_list(0).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_int_arrays() {
        let bytes: Vec<u8> = [2i32, 7, 9, 1, 4, 5]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let mut stream = ByteStream::new(bytes);
        assert_eq!(stream.read_int_array(None).unwrap(), vec![7, 9]);
        assert_eq!(stream.read_int_tuples(None, 2).unwrap(), vec![vec![4, 5]]);
    }

    #[test]
    fn test_rewind_clears_exhaustion() {
        let mut stream = ByteStream::new(vec![7, 0, 0, 0]);
        assert_eq!(stream.read_i32_le().unwrap(), 7);
        assert!(stream.read_u8().is_err());
        stream.rewind_to(0);
        assert!(!stream.is_exhausted());
        assert_eq!(stream.read_i32_le().unwrap(), 7);
    }
}
