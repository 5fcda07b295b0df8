//! # Tip Catalog
//!
//! Immutable, ordered list of tips loaded once at startup.
//! Either the built-in Pragmatic Programmer set or a YAML file named in the config.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::types::Tip;
use crate::strings::tips::PRAGMATIC_TIPS;

#[derive(Debug, Clone)]
pub struct Catalog {
    tips: Vec<Tip>,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    tips: Vec<Tip>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists, duplicate ids and blank titles.
    pub fn new(tips: Vec<Tip>) -> Result<Self> {
        if tips.is_empty() {
            bail!("Tip catalog is empty");
        }

        let mut seen = HashSet::new();
        for tip in &tips {
            if !seen.insert(tip.id) {
                bail!("Duplicate tip id {} in catalog", tip.id);
            }
            if tip.title.trim().is_empty() {
                bail!("Tip #{} has an empty title", tip.id);
            }
        }

        Ok(Self { tips })
    }

    pub fn builtin() -> Self {
        let tips = PRAGMATIC_TIPS
            .iter()
            .map(|(id, title, body)| Tip::new(*id, *title, *body))
            .collect();
        Self { tips }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tip catalog {}", path.display()))?;
        let file: CatalogFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse tip catalog {}", path.display()))?;
        Self::new(file.tips).with_context(|| format!("Invalid tip catalog {}", path.display()))
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_dense() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 53);
        for (index, tip) in catalog.tips().iter().enumerate() {
            assert_eq!(tip.id as usize, index + 1);
            assert!(!tip.title.is_empty());
            assert!(!tip.body.is_empty());
        }
        // The validating constructor must accept the built-in set too
        assert!(Catalog::new(catalog.tips().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        let tip = catalog.tips().iter().find(|tip| tip.id == 5).unwrap();
        assert_eq!(tip.title, "Don't Live with Broken Windows");
        assert!(catalog.tips().iter().all(|tip| tip.id != 54));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(Catalog::new(Vec::new()).is_err());

        let dup = vec![Tip::new(1, "A", "a"), Tip::new(1, "B", "b")];
        let err = Catalog::new(dup).unwrap_err();
        assert!(err.to_string().contains("Duplicate tip id 1"));

        let blank = vec![Tip::new(1, "  ", "a")];
        assert!(Catalog::new(blank).is_err());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tips:\n  - id: 10\n    title: \"First\"\n    body: \"One\"\n  - id: 20\n    title: \"Second\"\n    summary: \"Two\""
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tips()[0].id, 10);
        assert_eq!(catalog.tips()[1].body, "Two");
    }

    #[test]
    fn test_load_rejects_empty_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tips: []").unwrap();
        assert!(Catalog::from_file(file.path()).is_err());
    }
}
