//! Single-asset command handlers

use anyhow::{Context, Result};
use envset::export::header as header_export;
use envset::{
    export, Asset, Context as ExportContext, Endianness, EnumRegistry, Entry, ExportMode,
    Metadata, RawSegments,
};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::cli::SourceArgs;

/// Load the enum registry, or an empty one when no file is given
pub fn load_registry(enums: Option<&Path>) -> Result<EnumRegistry> {
    match enums {
        Some(path) => {
            let registry = EnumRegistry::from_path(path)
                .with_context(|| format!("Failed to load enums from {}", path.display()))?;
            info!("Loaded {} enum names from {}", registry.len(), path.display());
            Ok(registry)
        }
        None => Ok(EnumRegistry::new()),
    }
}

/// Open an output file, or stdout when no path is given
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn metadata(source: &SourceArgs) -> Metadata {
    Metadata {
        symbol: source.symbol.clone(),
        ..Metadata::at(source.offset)
    }
}

/// Read the source file and decode the asset it points at
fn decode(source: &SourceArgs, meta: &Metadata) -> Result<Asset> {
    let data = fs::read(&source.input)
        .with_context(|| format!("Failed to read {}", source.input.display()))?;

    Asset::parse(&data, meta, &RawSegments).with_context(|| {
        format!(
            "Failed to decode {} at offset {:#x}",
            source.name, source.offset
        )
    })
}

/// Handle the Header command
pub fn header(
    name: &str,
    symbol: Option<String>,
    otr: bool,
    replacement: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let meta = Metadata {
        symbol,
        ..Metadata::default()
    };
    let mut entry = Entry::new(name, &meta);
    if let Some(path) = replacement {
        entry = entry.with_replacement(path);
    }

    let ctx = ExportContext::new(&()).with_otr_mode(otr);
    let mut out = open_output(output)?;
    header_export::write_env_settings(&mut out, &entry, &ctx)?;
    out.flush()?;
    Ok(())
}

/// Handle the Code command
pub fn code(source: &SourceArgs, enums: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let registry = load_registry(enums)?;
    let meta = metadata(source);
    let asset = decode(source, &meta)?;

    let ctx = ExportContext::new(&registry);
    let mut out = open_output(output)?;
    let next = export(
        ExportMode::Code,
        &mut out,
        &asset,
        &Entry::new(&source.name, &meta),
        &ctx,
    )?;
    out.flush()?;

    if let Some(next) = next {
        info!("Next record offset: {:#x}", next);
    }
    Ok(())
}

/// Handle the Binary command
pub fn binary(source: &SourceArgs, big_endian: bool, output: &Path) -> Result<()> {
    let meta = metadata(source);
    let asset = decode(source, &meta)?;

    let endianness = if big_endian {
        Endianness::Big
    } else {
        Endianness::Little
    };
    let ctx = ExportContext::new(&()).with_endianness(endianness);

    let mut out = open_output(Some(output))?;
    export(
        ExportMode::Binary,
        &mut out,
        &asset,
        &Entry::new(&source.name, &meta),
        &ctx,
    )?;
    out.flush()?;

    info!("Wrote {}", output.display());
    Ok(())
}

/// Handle the Inspect command
pub fn inspect(source: &SourceArgs) -> Result<()> {
    let meta = metadata(source);
    let json = match decode(source, &meta)? {
        Asset::EnvSettings(env) => serde_json::to_string_pretty(&env)?,
    };
    println!("{}", json);
    Ok(())
}
