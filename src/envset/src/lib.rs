//! Environment settings asset converter
//!
//! Environment settings are fixed-layout records stored big-endian inside
//! game data segments. Each record describes the lighting and fog setup of a
//! level and is converted into one of three outputs:
//!
//! - a header stub (`extern` declaration, or an `__OTR__` path placeholder)
//! - a C source initializer with symbolic sequence ids
//! - a packed binary resource framed by a 64-byte resource header
//!
//! # Record Layout (68 bytes, big-endian)
//!
//! | Offset | Field            | Type     |
//! |--------|------------------|----------|
//! | 0x00   | kind             | i32      |
//! | 0x04   | reserved         | i32      |
//! | 0x08   | background color | u16      |
//! | 0x0A   | sequence id      | u16      |
//! | 0x0C   | fog color        | 3 x i32  |
//! | 0x18   | fog near         | i32      |
//! | 0x1C   | fog far          | i32      |
//! | 0x20   | aux vector       | 3 x f32  |
//! | 0x2C   | light color      | 3 x i32  |
//! | 0x38   | ambient color    | 3 x i32  |

pub mod export;
mod factory;
pub mod metadata;
mod reader;
mod record;
pub mod registry;
pub mod resource;
pub mod segment;

pub use export::{export, Context, Entry, ExportMode};
pub use factory::{Asset, AssetKind, EnvSettingsFactory, Factory};
pub use metadata::{Manifest, Metadata};
pub use reader::Reader;
pub use record::{EnvSettings, Vec3f, RECORD_SIZE};
pub use registry::{EnumRegistry, SymbolRegistry, BGM_SEQ_IDS};
pub use resource::{Endianness, ResourceType, ResourceWriter};
pub use segment::{RawSegments, SegmentSource};

/// Errors from decoding and exporting assets
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Truncated input reading {field}: need {needed} bytes, got {actual}")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("Segment resolution failed: offset 0x{offset:x} is outside a {len}-byte buffer")]
    Resolution { offset: u32, len: usize },

    #[error("Unknown asset type: {0}")]
    UnknownKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
