//! Manifest-driven batch conversion
//!
//! Entries are decoded and exported in parallel. A failing entry is logged
//! and skipped; the remaining entries are still written.

use anyhow::{bail, Context, Result};
use envset::{
    export, Asset, Context as ExportContext, Endianness, Entry, ExportMode, Manifest,
    RawSegments,
};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use super::convert::load_registry;

/// Export settings shared by every entry
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub mode: ExportMode,
    pub otr: bool,
    pub big_endian: bool,
}

/// One converted entry
struct Converted {
    name: String,
    bytes: Vec<u8>,
}

fn convert_entry(
    data: &[u8],
    name: &str,
    meta: &envset::Metadata,
    replacement: &str,
    mode: ExportMode,
    ctx: &ExportContext<'_>,
) -> envset::Result<Converted> {
    let asset = Asset::parse(data, meta, &RawSegments)?;
    let entry = Entry::new(name, meta).with_replacement(replacement);

    let mut bytes = Vec::new();
    export(mode, &mut bytes, &asset, &entry, ctx)?;

    Ok(Converted {
        name: name.to_string(),
        bytes,
    })
}

/// Convert every manifest entry and write the results to `output`.
///
/// Header and code output is concatenated in manifest order into
/// `<manifest>.h` / `<manifest>.c`; binary resources go to one file per entry.
pub fn run(
    input: &Path,
    manifest_path: &Path,
    enums: Option<&Path>,
    options: Options,
    output: &Path,
) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let manifest = Manifest::from_path(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
    let registry = load_registry(enums)?;

    let stem = manifest_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("assets")
        .to_string();

    let endianness = if options.big_endian {
        Endianness::Big
    } else {
        Endianness::Little
    };
    let ctx = ExportContext::new(&registry)
        .with_otr_mode(options.otr)
        .with_endianness(endianness);

    info!(
        "Converting {} entries from {} ({:?})",
        manifest.len(),
        input.display(),
        options.mode
    );

    let entries: Vec<_> = manifest.iter().collect();
    let results: Vec<_> = entries
        .par_iter()
        .map(|(name, meta)| {
            let replacement = format!("{}/{}", stem, name);
            let result = convert_entry(&data, name, meta, &replacement, options.mode, &ctx);
            (*name, result)
        })
        .collect();

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut converted = Vec::new();
    let mut failed = 0usize;
    for (name, result) in results {
        match result {
            Ok(entry) => converted.push(entry),
            Err(e) => {
                error!("{}: {}", name, e);
                failed += 1;
            }
        }
    }

    match options.mode {
        ExportMode::Header | ExportMode::Code => {
            let ext = if options.mode == ExportMode::Header {
                "h"
            } else {
                "c"
            };
            let path = output.join(format!("{}.{}", stem, ext));
            let mut combined = Vec::new();
            for entry in &converted {
                combined.extend_from_slice(&entry.bytes);
                combined.push(b'\n');
            }
            fs::write(&path, combined)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} entries to {}", converted.len(), path.display());
        }
        ExportMode::Binary => {
            for entry in &converted {
                let path = output.join(&entry.name);
                fs::write(&path, &entry.bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            info!(
                "Wrote {} resources to {}",
                converted.len(),
                output.display()
            );
        }
    }

    if failed > 0 {
        bail!("{} of {} entries failed to convert", failed, manifest.len());
    }

    Ok(())
}
