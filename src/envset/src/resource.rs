//! Binary resource framing
//!
//! Every exported binary resource starts with a 64-byte header followed by
//! the resource body. All multi-byte values, header included, use the
//! writer's byte order, which is independent of the source data's.
//!
//! # Header Layout
//!
//! | Offset | Size | Field                              |
//! |--------|------|------------------------------------|
//! | 0x00   | 1    | Byte order (0 = little, 1 = big)   |
//! | 0x01   | 1    | Is custom (always 0)               |
//! | 0x02   | 2    | Reserved                           |
//! | 0x04   | 4    | Resource type                      |
//! | 0x08   | 4    | Version                            |
//! | 0x0C   | 8    | Resource id (`0xDEADBEEFDEADBEEF`) |
//! | 0x14   | 4    | Reserved                           |
//! | 0x18   | 8    | ROM CRC                            |
//! | 0x20   | 4    | ROM enum                           |
//! | 0x24   | 28   | Zero padding                       |

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::Result;

/// Size of the resource header
pub const HEADER_SIZE: usize = 0x40;

/// Placeholder id written into every header
pub const RESOURCE_ID: u64 = 0xDEAD_BEEF_DEAD_BEEF;

/// Byte order of a resource writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl Endianness {
    /// Tag stored in the first header byte
    pub fn tag(self) -> u8 {
        match self {
            Self::Little => 0,
            Self::Big => 1,
        }
    }
}

/// Resource type tags (four ASCII characters, big-endian packed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResourceType {
    /// "ENVS"
    EnvSettings = 0x454E_5653,
}

impl ResourceType {
    pub fn tag(self) -> u32 {
        self as u32
    }
}

/// Buffered writer for one framed resource
pub struct ResourceWriter {
    buf: Vec<u8>,
    endianness: Endianness,
}

impl ResourceWriter {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            buf: Vec::new(),
            endianness,
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        match self.endianness {
            Endianness::Little => LittleEndian::write_u16(&mut bytes, value),
            Endianness::Big => BigEndian::write_u16(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        match self.endianness {
            Endianness::Little => LittleEndian::write_u32(&mut bytes, value),
            Endianness::Big => BigEndian::write_u32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut bytes = [0u8; 4];
        match self.endianness {
            Endianness::Little => LittleEndian::write_i32(&mut bytes, value),
            Endianness::Big => BigEndian::write_i32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_u64(&mut self, value: u64) {
        let mut bytes = [0u8; 8];
        match self.endianness {
            Endianness::Little => LittleEndian::write_u64(&mut bytes, value),
            Endianness::Big => BigEndian::write_u64(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_f32(&mut self, value: f32) {
        let mut bytes = [0u8; 4];
        match self.endianness {
            Endianness::Little => LittleEndian::write_f32(&mut bytes, value),
            Endianness::Big => BigEndian::write_f32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    /// Write the 64-byte resource header
    pub fn write_header(&mut self, resource_type: ResourceType, version: i32) {
        self.write_u8(self.endianness.tag());
        self.write_u8(0); // is custom
        self.write_u8(0);
        self.write_u8(0);
        self.write_u32(resource_type.tag());
        self.write_i32(version);
        self.write_u64(RESOURCE_ID);
        self.write_u32(0);
        self.write_u64(0); // ROM CRC
        self.write_u32(0); // ROM enum

        while self.buf.len() < HEADER_SIZE {
            self.write_u32(0);
        }
    }

    /// Flush the buffered resource to `out`
    pub fn finish<W: Write + ?Sized>(self, out: &mut W) -> Result<()> {
        out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
