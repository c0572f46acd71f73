//! Binary resources

use std::io::Write;

use crate::record::EnvSettings;
use crate::resource::{Endianness, ResourceType, ResourceWriter};
use crate::Result;

/// Resource version of the environment settings body
pub const ENV_SETTINGS_VERSION: i32 = 0;

/// Write `env` as a framed binary resource.
///
/// The body repeats the source field order, with the vector flattened into
/// three scalar floats.
pub fn write_env_settings<W: Write + ?Sized>(
    out: &mut W,
    env: &EnvSettings,
    endianness: Endianness,
) -> Result<()> {
    let mut writer = ResourceWriter::new(endianness);
    writer.write_header(ResourceType::EnvSettings, ENV_SETTINGS_VERSION);

    writer.write_i32(env.kind);
    writer.write_i32(env.reserved);
    writer.write_u16(env.background_color);
    writer.write_u16(env.sequence_id);
    for value in env.fog_color {
        writer.write_i32(value);
    }
    writer.write_i32(env.fog_near);
    writer.write_i32(env.fog_far);
    writer.write_f32(env.aux_vector.x);
    writer.write_f32(env.aux_vector.y);
    writer.write_f32(env.aux_vector.z);
    for value in env.light_color {
        writer.write_i32(value);
    }
    for value in env.ambient_color {
        writer.write_i32(value);
    }

    writer.finish(out)
}
