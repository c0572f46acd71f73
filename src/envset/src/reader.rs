//! Bounds-checked big-endian reader for source segments

use byteorder::{BigEndian, ByteOrder};

use crate::{Error, Result};

/// Cursor over a big-endian byte segment
///
/// Every read names the field it is decoding so a short segment reports
/// exactly where it ran out.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Take the next `len` bytes, failing if fewer remain
    fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(Error::TruncatedInput {
                field,
                needed: len,
                actual: remaining,
            });
        }

        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        self.take(field, 2).map(BigEndian::read_u16)
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        self.take(field, 4).map(BigEndian::read_i32)
    }

    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        self.take(field, 4).map(BigEndian::read_f32)
    }

    /// Read three consecutive i32 values (an RGB triple)
    pub fn read_i32x3(&mut self, field: &'static str) -> Result<[i32; 3]> {
        Ok([
            self.read_i32(field)?,
            self.read_i32(field)?,
            self.read_i32(field)?,
        ])
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
