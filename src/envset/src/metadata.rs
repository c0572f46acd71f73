//! Asset metadata descriptors
//!
//! Metadata comes from YAML manifests where each top-level key is an entry
//! name:
//!
//! ```yaml
//! D_ENV_CORNERIA:
//!   type: SF64:ENV_SETTINGS
//!   offset: 0x1A3C0
//!   symbol: sEnvCorneria
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::factory::AssetKind;
use crate::Result;

/// Options attached to a single asset entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Asset type, e.g. `SF64:ENV_SETTINGS`
    #[serde(rename = "type", default)]
    pub kind: AssetKind,
    /// Output identifier (defaults to the entry name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Byte offset of the asset in the source buffer
    #[serde(default)]
    pub offset: u32,
}

impl Metadata {
    pub fn at(offset: u32) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Output symbol, falling back to the entry name
    pub fn symbol_or<'a>(&'a self, entry_name: &'a str) -> &'a str {
        self.symbol.as_deref().unwrap_or(entry_name)
    }
}

/// All entries of a metadata file, keyed by entry name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: BTreeMap<String, Metadata>,
}

impl Manifest {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn get(&self, name: &str) -> Option<&Metadata> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metadata)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_defaults_to_entry_name() {
        let meta = Metadata::at(0x40);
        assert_eq!(meta.symbol_or("D_ENV_SOLAR"), "D_ENV_SOLAR");

        let meta = Metadata {
            symbol: Some("sEnvSolar".to_string()),
            ..Metadata::at(0x40)
        };
        assert_eq!(meta.symbol_or("D_ENV_SOLAR"), "sEnvSolar");
    }

    #[test]
    fn test_manifest_from_yaml() {
        let yaml = r#"
D_ENV_CORNERIA:
  type: SF64:ENV_SETTINGS
  offset: 0x1A3C0
  symbol: sEnvCorneria
D_ENV_METEO:
  type: SF64:ENV_SETTINGS
  offset: 128
"#;
        let manifest = Manifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.len(), 2);

        let corneria = manifest.get("D_ENV_CORNERIA").unwrap();
        assert_eq!(corneria.kind, AssetKind::EnvSettings);
        assert_eq!(corneria.offset, 0x1A3C0);
        assert_eq!(corneria.symbol_or("D_ENV_CORNERIA"), "sEnvCorneria");

        let meteo = manifest.get("D_ENV_METEO").unwrap();
        assert_eq!(meteo.offset, 128);
        assert_eq!(meteo.symbol, None);

        // BTreeMap ordering
        let names: Vec<_> = manifest.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["D_ENV_CORNERIA", "D_ENV_METEO"]);
    }

    #[test]
    fn test_manifest_unknown_type() {
        let yaml = "D_TEX:\n  type: SF64:TEXTURE\n  offset: 0\n";
        assert!(Manifest::from_yaml(yaml).is_err());
    }
}
