//! Symbolic name registry
//!
//! Maps numeric values back to enum constant names so emitted source reads
//! like the hand-written original. Registries are YAML files grouped by enum:
//!
//! ```yaml
//! BgmSeqIds:
//!   SEQ_ID_CORNERIA: 3
//!   SEQ_ID_METEO: 4
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::Result;

/// Enum category holding background music sequence ids
pub const BGM_SEQ_IDS: &str = "BgmSeqIds";

/// Read-only lookup of symbolic names by category and value
pub trait SymbolRegistry: Send + Sync {
    fn lookup(&self, category: &str, value: i64) -> Option<&str>;
}

/// Registry with no entries; every lookup misses
impl SymbolRegistry for () {
    fn lookup(&self, _category: &str, _value: i64) -> Option<&str> {
        None
    }
}

/// In-memory enum registry, value to name per category
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    categories: HashMap<String, HashMap<i64, String>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from YAML (`Category: { NAME: value }`)
    pub fn from_yaml(text: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, i64>> = serde_yaml::from_str(text)?;
        let mut registry = Self::new();
        for (category, names) in raw {
            for (name, value) in names {
                registry.insert(&category, value, name);
            }
        }
        Ok(registry)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Register `name` for `value`, replacing any previous name
    pub fn insert(&mut self, category: &str, value: i64, name: impl Into<String>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(value, name.into());
    }

    /// Number of names across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolRegistry for EnumRegistry {
    fn lookup(&self, category: &str, value: i64) -> Option<&str> {
        self.categories
            .get(category)?
            .get(&value)
            .map(String::as_str)
    }
}
