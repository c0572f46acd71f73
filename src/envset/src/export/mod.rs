//! Exporters for decoded assets
//!
//! Each asset can be written three ways, selected by [`ExportMode`]:
//! a header declaration, a C source initializer, or a framed binary resource.
//! Everything an exporter needs besides the asset itself is passed in through
//! [`Entry`] and [`Context`].

pub mod binary;
pub mod code;
pub mod header;

use std::io::Write;

use tracing::debug;

use crate::factory::Asset;
use crate::metadata::Metadata;
use crate::registry::SymbolRegistry;
use crate::resource::Endianness;
use crate::Result;

/// Output representation to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Forward declaration (or OTR path placeholder)
    Header,
    /// C source initializer
    Code,
    /// Framed binary resource
    Binary,
}

/// Shared, read-only export settings
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Enum names for symbolic output
    pub registry: &'a dyn SymbolRegistry,
    /// Emit `__OTR__` path placeholders instead of declarations
    pub otr_mode: bool,
    /// Byte order of binary resources
    pub endianness: Endianness,
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a dyn SymbolRegistry) -> Self {
        Self {
            registry,
            otr_mode: false,
            endianness: Endianness::default(),
        }
    }

    pub fn with_otr_mode(mut self, otr_mode: bool) -> Self {
        self.otr_mode = otr_mode;
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }
}

/// Per-asset naming information
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Entry name from the manifest
    pub name: &'a str,
    pub metadata: &'a Metadata,
    /// Resource path referenced by OTR placeholders
    pub replacement: Option<&'a str>,
}

impl<'a> Entry<'a> {
    pub fn new(name: &'a str, metadata: &'a Metadata) -> Self {
        Self {
            name,
            metadata,
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: &'a str) -> Self {
        self.replacement = Some(replacement);
        self
    }

    /// Output symbol, defaulting to the entry name
    pub fn symbol(&self) -> &'a str {
        self.metadata.symbol_or(self.name)
    }
}

/// Export `asset` in the requested representation.
///
/// Returns the offset just past the asset for [`ExportMode::Code`], so
/// consecutive records from one buffer can be chained; `None` otherwise.
pub fn export<W: Write + ?Sized>(
    mode: ExportMode,
    out: &mut W,
    asset: &Asset,
    entry: &Entry<'_>,
    ctx: &Context<'_>,
) -> Result<Option<u32>> {
    debug!(entry = entry.name, kind = %asset.kind(), ?mode, "exporting");

    match (mode, asset) {
        (ExportMode::Header, Asset::EnvSettings(_)) => {
            header::write_env_settings(out, entry, ctx)?;
            Ok(None)
        }
        (ExportMode::Code, Asset::EnvSettings(env)) => {
            let next = code::write_env_settings(
                out,
                env,
                entry.symbol(),
                entry.metadata.offset,
                ctx.registry,
            )?;
            Ok(Some(next))
        }
        (ExportMode::Binary, Asset::EnvSettings(env)) => {
            binary::write_env_settings(out, env, ctx.endianness)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EnvSettings, RECORD_SIZE};
    use crate::registry::{EnumRegistry, BGM_SEQ_IDS};
    use crate::resource::HEADER_SIZE;

    fn asset() -> Asset {
        Asset::EnvSettings(EnvSettings {
            kind: 2,
            sequence_id: 0x0003,
            ..Default::default()
        })
    }

    #[test]
    fn test_export_header() {
        let meta = Metadata::at(0x100);
        let entry = Entry::new("D_ENV_CO", &meta);
        let ctx = Context::new(&());

        let mut out = Vec::new();
        let next = export(ExportMode::Header, &mut out, &asset(), &entry, &ctx).unwrap();
        assert_eq!(next, None);
        assert_eq!(String::from_utf8(out).unwrap(), "extern EnvSettings D_ENV_CO;\n");
    }

    #[test]
    fn test_export_code_chains_offset() {
        let mut registry = EnumRegistry::new();
        registry.insert(BGM_SEQ_IDS, 3, "SEQ_ID_CORNERIA");

        let meta = Metadata {
            symbol: Some("sEnvCorneria".to_string()),
            ..Metadata::at(0x100)
        };
        let entry = Entry::new("D_ENV_CO", &meta);
        let ctx = Context::new(&registry);

        let mut out = Vec::new();
        let next = export(ExportMode::Code, &mut out, &asset(), &entry, &ctx).unwrap();
        assert_eq!(next, Some(0x100 + RECORD_SIZE as u32));

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("EnvSettings sEnvCorneria = {\n"));
        assert!(text.contains("SEQ_ID_CORNERIA"));
    }

    #[test]
    fn test_export_binary_uses_context_endianness() {
        let meta = Metadata::default();
        let entry = Entry::new("D_ENV_CO", &meta);
        let ctx = Context::new(&()).with_endianness(Endianness::Big);

        let mut out = Vec::new();
        let next = export(ExportMode::Binary, &mut out, &asset(), &entry, &ctx).unwrap();
        assert_eq!(next, None);
        assert_eq!(out.len(), HEADER_SIZE + RECORD_SIZE);
        assert_eq!(out[0], Endianness::Big.tag());
        assert_eq!(&out[HEADER_SIZE..HEADER_SIZE + 4], &[0, 0, 0, 2]);
    }
}
