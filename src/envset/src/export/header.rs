//! Header declarations

use std::io::Write;

use super::{Context, Entry};
use crate::Result;

/// Prefix marking an OTR resource path placeholder
pub const OTR_PREFIX: &str = "__OTR__";

/// Write the header declaration for an environment settings entry.
///
/// In OTR mode the symbol becomes a string naming the binary resource, so
/// code built against the header loads the asset at runtime instead.
pub fn write_env_settings<W: Write + ?Sized>(
    out: &mut W,
    entry: &Entry<'_>,
    ctx: &Context<'_>,
) -> Result<()> {
    let symbol = entry.symbol();

    if ctx.otr_mode {
        let path = entry.replacement.unwrap_or(symbol);
        writeln!(
            out,
            "static const ALIGN_ASSET(2) char {}[] = \"{}{}\";\n",
            symbol, OTR_PREFIX, path
        )?;
        return Ok(());
    }

    writeln!(out, "extern EnvSettings {};", symbol)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;

    fn render(entry: &Entry<'_>, otr_mode: bool) -> String {
        let ctx = Context::new(&()).with_otr_mode(otr_mode);
        let mut out = Vec::new();
        write_env_settings(&mut out, entry, &ctx).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_native_declaration() {
        let meta = Metadata {
            symbol: Some("sEnvSectorX".to_string()),
            ..Default::default()
        };
        let entry = Entry::new("D_ENV_SX", &meta);
        assert_eq!(render(&entry, false), "extern EnvSettings sEnvSectorX;\n");
    }

    #[test]
    fn test_otr_placeholder() {
        let meta = Metadata::default();
        let entry = Entry::new("D_ENV_SX", &meta).with_replacement("ast_env/D_ENV_SX");
        assert_eq!(
            render(&entry, true),
            "static const ALIGN_ASSET(2) char D_ENV_SX[] = \"__OTR__ast_env/D_ENV_SX\";\n\n"
        );
    }

    #[test]
    fn test_otr_placeholder_without_replacement() {
        let meta = Metadata::default();
        let entry = Entry::new("D_ENV_SX", &meta);
        assert!(render(&entry, true).contains("\"__OTR__D_ENV_SX\""));
    }
}
