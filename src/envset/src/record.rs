//! Decoded environment settings record

use serde::{Deserialize, Serialize};

/// Size of one environment settings record in the source data
pub const RECORD_SIZE: usize = 68;

/// Three-component float vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Environment settings for a level
///
/// Field order matches the on-disk layout and is the order every exporter
/// writes in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvSettings {
    /// Settings category
    pub kind: i32,
    pub reserved: i32,
    /// Packed background color
    pub background_color: u16,
    /// Background music sequence (`0xFFFF` = none, `0x8000` = flagged)
    pub sequence_id: u16,
    /// Fog tint (R, G, B)
    pub fog_color: [i32; 3],
    pub fog_near: i32,
    pub fog_far: i32,
    pub aux_vector: Vec3f,
    /// Directional light tint (R, G, B)
    pub light_color: [i32; 3],
    /// Ambient light tint (R, G, B)
    pub ambient_color: [i32; 3],
}

impl EnvSettings {
    /// Sequence id value meaning "no background music"
    pub const SEQ_ID_NONE: u16 = 0xFFFF;

    /// High bit marking a combined sequence
    pub const SEQ_FLAG: u16 = 0x8000;

    #[inline]
    pub fn has_sequence(&self) -> bool {
        self.sequence_id != Self::SEQ_ID_NONE
    }

    /// True when the sequence id carries the combination flag
    #[inline]
    pub fn is_flagged_sequence(&self) -> bool {
        self.has_sequence() && self.sequence_id >= Self::SEQ_FLAG
    }

    /// Low byte of the sequence id, used as the registry key
    #[inline]
    pub fn sequence_index(&self) -> u16 {
        self.sequence_id & 0xFF
    }
}
