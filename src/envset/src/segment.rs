//! Segment resolution
//!
//! Locating an asset inside its source data (and undoing any segment
//! compression) happens before decoding. Decoders only see the resolved
//! bytes.

use tracing::trace;

use crate::metadata::Metadata;
use crate::{Error, Result};

/// Resolves an asset's bytes from its source buffer
pub trait SegmentSource: Send + Sync {
    /// Return the segment starting at the asset described by `metadata`.
    ///
    /// `size` is how many bytes the caller intends to decode. Implementations
    /// may return fewer when the buffer ends early; the decoder reports the
    /// truncation.
    fn resolve<'a>(&self, buffer: &'a [u8], metadata: &Metadata, size: usize) -> Result<&'a [u8]>;
}

/// Uncompressed source: the asset lives at `metadata.offset` in the buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSegments;

impl SegmentSource for RawSegments {
    fn resolve<'a>(&self, buffer: &'a [u8], metadata: &Metadata, size: usize) -> Result<&'a [u8]> {
        let start = metadata.offset as usize;
        if start > buffer.len() {
            return Err(Error::Resolution {
                offset: metadata.offset,
                len: buffer.len(),
            });
        }

        let end = start.saturating_add(size).min(buffer.len());
        trace!(start, end, "resolved raw segment");
        Ok(&buffer[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_bounds() {
        let buffer: Vec<u8> = (0..32).collect();
        let segment = RawSegments.resolve(&buffer, &Metadata::at(4), 8).unwrap();
        assert_eq!(segment, &[4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_resolve_short_tail() {
        let buffer: Vec<u8> = (0..32).collect();
        let segment = RawSegments.resolve(&buffer, &Metadata::at(28), 8).unwrap();
        assert_eq!(segment, &[28, 29, 30, 31]);

        let segment = RawSegments.resolve(&buffer, &Metadata::at(32), 8).unwrap();
        assert!(segment.is_empty());
    }

    #[test]
    fn test_resolve_out_of_range() {
        let buffer = [0u8; 16];
        let err = RawSegments.resolve(&buffer, &Metadata::at(17), 4).unwrap_err();
        assert!(matches!(err, Error::Resolution { offset: 17, len: 16 }));
    }
}
