//! Asset factories: turn resolved segments into typed records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metadata::Metadata;
use crate::reader::Reader;
use crate::record::{EnvSettings, Vec3f, RECORD_SIZE};
use crate::segment::SegmentSource;
use crate::{Error, Result};

/// Asset types known to the converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[default]
    #[serde(rename = "SF64:ENV_SETTINGS")]
    EnvSettings,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnvSettings => "SF64:ENV_SETTINGS",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SF64:ENV_SETTINGS" => Ok(Self::EnvSettings),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

/// A decoded asset of any known kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Asset {
    EnvSettings(EnvSettings),
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Self::EnvSettings(_) => AssetKind::EnvSettings,
        }
    }

    /// Resolve the segment described by `metadata` and decode it
    pub fn parse(
        buffer: &[u8],
        metadata: &Metadata,
        segments: &dyn SegmentSource,
    ) -> Result<Self> {
        match metadata.kind {
            AssetKind::EnvSettings => {
                EnvSettingsFactory::parse_asset(buffer, metadata, segments).map(Self::EnvSettings)
            }
        }
    }
}

impl From<EnvSettings> for Asset {
    fn from(env: EnvSettings) -> Self {
        Self::EnvSettings(env)
    }
}

/// Decoder for one asset type
pub trait Factory {
    type Data;

    /// Bytes one asset occupies in its source segment
    const SIZE: usize;

    /// Decode an already-resolved segment
    fn parse(segment: &[u8]) -> Result<Self::Data>;

    /// Resolve the asset's segment from the source buffer, then decode it
    fn parse_asset(
        buffer: &[u8],
        metadata: &Metadata,
        segments: &dyn SegmentSource,
    ) -> Result<Self::Data> {
        let segment = segments.resolve(buffer, metadata, Self::SIZE)?;
        Self::parse(segment)
    }
}

/// Decoder for big-endian environment settings records
pub struct EnvSettingsFactory;

impl Factory for EnvSettingsFactory {
    type Data = EnvSettings;

    const SIZE: usize = RECORD_SIZE;

    fn parse(segment: &[u8]) -> Result<EnvSettings> {
        let mut reader = Reader::new(segment);

        let env = EnvSettings {
            kind: reader.read_i32("kind")?,
            reserved: reader.read_i32("reserved")?,
            background_color: reader.read_u16("background_color")?,
            sequence_id: reader.read_u16("sequence_id")?,
            fog_color: reader.read_i32x3("fog_color")?,
            fog_near: reader.read_i32("fog_near")?,
            fog_far: reader.read_i32("fog_far")?,
            aux_vector: Vec3f {
                x: reader.read_f32("aux_vector")?,
                y: reader.read_f32("aux_vector")?,
                z: reader.read_f32("aux_vector")?,
            },
            light_color: reader.read_i32x3("light_color")?,
            ambient_color: reader.read_i32x3("ambient_color")?,
        };

        debug!(
            kind = env.kind,
            sequence_id = env.sequence_id,
            surplus = reader.remaining(),
            "decoded environment settings"
        );

        Ok(env)
    }
}

/// Encode a record in its big-endian source layout
#[cfg(test)]
pub(crate) fn encode_source(env: &EnvSettings) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_SIZE);
    out.extend_from_slice(&env.kind.to_be_bytes());
    out.extend_from_slice(&env.reserved.to_be_bytes());
    out.extend_from_slice(&env.background_color.to_be_bytes());
    out.extend_from_slice(&env.sequence_id.to_be_bytes());
    for v in env.fog_color {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out.extend_from_slice(&env.fog_near.to_be_bytes());
    out.extend_from_slice(&env.fog_far.to_be_bytes());
    for v in [env.aux_vector.x, env.aux_vector.y, env.aux_vector.z] {
        out.extend_from_slice(&v.to_be_bytes());
    }
    for v in env.light_color.iter().chain(env.ambient_color.iter()) {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::RawSegments;

    fn sample() -> EnvSettings {
        EnvSettings {
            kind: 1,
            reserved: 0,
            background_color: 0x000A,
            sequence_id: 0xFFFF,
            fog_color: [10, 20, 30],
            fog_near: 100,
            fog_far: 900,
            aux_vector: Vec3f::new(0.0, 1.5, -2.0),
            light_color: [255, 255, 255],
            ambient_color: [50, 50, 50],
        }
    }

    #[test]
    fn test_parse_example_record() {
        let data = encode_source(&sample());
        assert_eq!(data.len(), RECORD_SIZE);

        let env = EnvSettingsFactory::parse(&data).unwrap();
        assert_eq!(env.kind, 1);
        assert_eq!(env.reserved, 0);
        assert_eq!(env.background_color, 0x000A);
        assert_eq!(env.sequence_id, 0xFFFF);
        assert_eq!(env.fog_color, [10, 20, 30]);
        assert_eq!(env.fog_near, 100);
        assert_eq!(env.fog_far, 900);
        assert_eq!(env.aux_vector, Vec3f::new(0.0, 1.5, -2.0));
        assert_eq!(env.light_color, [255, 255, 255]);
        assert_eq!(env.ambient_color, [50, 50, 50]);
    }

    #[test]
    fn test_parse_known_bytes() {
        let mut data = vec![0u8; RECORD_SIZE];
        data[0..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFD]); // kind = -3
        data[8..10].copy_from_slice(&[0x12, 0x34]); // background color
        data[10..12].copy_from_slice(&[0x80, 0x05]); // sequence id
        data[0x20..0x24].copy_from_slice(&[0x3F, 0x80, 0x00, 0x00]); // x = 1.0
        data[0x40..0x44].copy_from_slice(&[0x00, 0x00, 0x01, 0x00]); // ambient B

        let env = EnvSettingsFactory::parse(&data).unwrap();
        assert_eq!(env.kind, -3);
        assert_eq!(env.background_color, 0x1234);
        assert_eq!(env.sequence_id, 0x8005);
        assert_eq!(env.aux_vector.x, 1.0);
        assert_eq!(env.ambient_color, [0, 0, 256]);
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let original = EnvSettings {
            kind: -7,
            reserved: i32::MAX,
            background_color: 0xFFFE,
            sequence_id: 0x8021,
            fog_color: [-1, 0, i32::MIN],
            fog_near: 996,
            fog_far: 1000,
            aux_vector: Vec3f::new(-0.25, 1e10, f32::MIN_POSITIVE),
            light_color: [1, 2, 3],
            ambient_color: [4, 5, 6],
        };

        let decoded = EnvSettingsFactory::parse(&encode_source(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_truncated_input() {
        let data = encode_source(&sample());

        for len in [0, 1, 10, RECORD_SIZE - 1] {
            let err = EnvSettingsFactory::parse(&data[..len]).unwrap_err();
            assert!(
                matches!(err, Error::TruncatedInput { .. }),
                "len {} gave {:?}",
                len,
                err
            );
        }

        let err = EnvSettingsFactory::parse(&data[..RECORD_SIZE - 1]).unwrap_err();
        match err {
            Error::TruncatedInput {
                field,
                needed,
                actual,
            } => {
                assert_eq!(field, "ambient_color");
                assert_eq!(needed, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_surplus_ignored() {
        let mut data = encode_source(&sample());
        data.extend_from_slice(&[0xAA; 12]);

        let env = EnvSettingsFactory::parse(&data).unwrap();
        assert_eq!(env, sample());
    }

    #[test]
    fn test_parse_asset_at_offset() {
        let mut buffer = vec![0xEE; 0x20];
        buffer.extend_from_slice(&encode_source(&sample()));

        let meta = Metadata::at(0x20);
        let asset = Asset::parse(&buffer, &meta, &RawSegments).unwrap();
        assert_eq!(asset, Asset::EnvSettings(sample()));
        assert_eq!(asset.kind(), AssetKind::EnvSettings);
    }

    #[test]
    fn test_asset_kind_from_str() {
        assert_eq!(
            "SF64:ENV_SETTINGS".parse::<AssetKind>().unwrap(),
            AssetKind::EnvSettings
        );
        assert!(matches!(
            "SF64:DISPLAY_LIST".parse::<AssetKind>(),
            Err(Error::UnknownKind(_))
        ));
        assert_eq!(AssetKind::EnvSettings.to_string(), "SF64:ENV_SETTINGS");
    }
}
