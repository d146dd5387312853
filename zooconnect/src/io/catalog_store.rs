//! Catalog loading with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::core::invariants::validate_invariants;
use crate::experience::Experience;

const CATALOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/catalog/v1.schema.json"
));

const EMBEDDED_CATALOG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/experiences.json"));

/// Load and validate a catalog file (schema + invariants).
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    debug!(path = %path.display(), "loading catalog");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    parse_catalog(&contents).with_context(|| format!("load catalog {}", path.display()))
}

/// The catalog bundled into the binary.
pub fn default_catalog() -> Result<Catalog> {
    parse_catalog(EMBEDDED_CATALOG).context("load embedded catalog")
}

/// Use `path` when given, otherwise the embedded catalog.
pub fn load_catalog_or_default(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => default_catalog(),
    }
}

/// Parse and validate catalog JSON text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(contents).context("parse catalog json")?;
    validate_schema(&value)?;
    let experiences: Vec<Experience> =
        serde_json::from_value(value).context("deserialize catalog")?;
    validate_catalog_invariants(&experiences)?;
    for experience in experiences.iter().filter(|e| e.images.is_empty()) {
        warn!(id = %experience.id, "experience has no images; cards fall back to a placeholder");
    }
    debug!(count = experiences.len(), "catalog loaded");
    Ok(Catalog::new(experiences))
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema_value: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parse bundled catalog schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_catalog_invariants(experiences: &[Experience]) -> Result<()> {
    let errors = validate_invariants(experiences);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("catalog invariants failed: {}", errors.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Continent, WildlifeType};
    use crate::test_support::{experience, temp_catalog};

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = default_catalog().expect("embedded catalog");
        assert!(catalog.len() >= 10);
        assert!(!catalog.featured().is_empty());
    }

    #[test]
    fn write_then_load_catalog_file() {
        let records = vec![
            experience("a", Continent::Africa, &[WildlifeType::BigCats], 2, Some(6)),
            experience("b", Continent::Asia, &[WildlifeType::Elephants], 4, None),
        ];
        let (_dir, path) = temp_catalog(&records).expect("write catalog");
        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.all(), records.as_slice());
    }

    #[test]
    fn schema_rejects_unknown_continent() {
        let raw = serde_json::to_string(&vec![experience(
            "a",
            Continent::Africa,
            &[WildlifeType::BigCats],
            2,
            None,
        )])
        .expect("serialize")
        .replace("\"Africa\"", "\"Atlantis\"");
        let err = parse_catalog(&raw).unwrap_err();
        assert!(format!("{:#}", err).contains("schema validation failed"));
    }

    #[test]
    fn invariants_reject_duplicate_ids() {
        let records = vec![
            experience("same", Continent::Africa, &[WildlifeType::BigCats], 2, None),
            experience("same", Continent::Asia, &[WildlifeType::Elephants], 4, None),
        ];
        let (_dir, path) = temp_catalog(&records).expect("write catalog");
        let err = load_catalog(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate id 'same'"));
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nope.json");
        let err = load_catalog(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }

    #[test]
    fn empty_images_are_tolerated() {
        let mut bare = experience("bare", Continent::Europe, &[WildlifeType::Birds], 1, None);
        bare.images.clear();
        let raw = serde_json::to_string(&vec![bare]).expect("serialize");
        let catalog = parse_catalog(&raw).expect("parse");
        assert_eq!(catalog.get("bare").and_then(|e| e.cover_image()), None);
    }
}
