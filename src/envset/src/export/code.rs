//! C source initializers

use std::io::Write;

use tracing::warn;

use crate::record::{EnvSettings, Vec3f, RECORD_SIZE};
use crate::registry::{SymbolRegistry, BGM_SEQ_IDS};
use crate::Result;

const INDENT: &str = "    ";

/// Token for a record without background music
pub const SEQ_ID_NONE: &str = "SEQ_ID_NONE";

/// Token OR'd onto flagged sequence ids
pub const SEQ_FLAG: &str = "SEQ_FLAG";

/// Render the sequence id field.
///
/// `0xFFFF` is always `SEQ_ID_NONE`. Other values are looked up by their low
/// byte; misses fall back to the full numeric value with an annotation.
pub fn sequence_token(env: &EnvSettings, registry: &dyn SymbolRegistry) -> String {
    if !env.has_sequence() {
        return SEQ_ID_NONE.to_string();
    }

    let index = env.sequence_index();
    let mut token = match registry.lookup(BGM_SEQ_IDS, i64::from(index)) {
        Some(name) => name.to_string(),
        None => {
            warn!(
                sequence_id = env.sequence_id,
                "no {} entry for sequence index {}", BGM_SEQ_IDS, index
            );
            format!("/* SEQ_ID_UNK */ {}", env.sequence_id)
        }
    };

    if env.is_flagged_sequence() {
        token.push_str(" | ");
        token.push_str(SEQ_FLAG);
    }

    token
}

/// Render a float component as a C float literal
fn float_literal(value: f32) -> String {
    format!("{:?}f", value)
}

fn vector_literal(v: &Vec3f) -> String {
    format!(
        "{{{}, {}, {}}}",
        float_literal(v.x),
        float_literal(v.y),
        float_literal(v.z)
    )
}

/// Write `env` as a C initializer named `symbol`.
///
/// Returns the source offset immediately after this record.
pub fn write_env_settings<W: Write + ?Sized>(
    out: &mut W,
    env: &EnvSettings,
    symbol: &str,
    offset: u32,
    registry: &dyn SymbolRegistry,
) -> Result<u32> {
    let [fog_r, fog_g, fog_b] = env.fog_color;
    let [light_r, light_g, light_b] = env.light_color;
    let [amb_r, amb_g, amb_b] = env.ambient_color;

    writeln!(out, "EnvSettings {} = {{", symbol)?;
    writeln!(
        out,
        "{}{}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {},",
        INDENT,
        env.kind,
        env.reserved,
        env.background_color,
        sequence_token(env, registry),
        fog_r,
        fog_g,
        fog_b,
        env.fog_near,
        env.fog_far,
        vector_literal(&env.aux_vector),
        light_r,
        light_g,
        light_b,
        amb_r,
        amb_g,
        amb_b,
    )?;
    writeln!(out, "}};")?;

    Ok(offset.wrapping_add(RECORD_SIZE as u32))
}
