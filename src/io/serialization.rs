// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! YAML and JSON serialization.
//!
//! Layout documents, configs and plan requests are written and read in
//! YAML or JSON, picked from the file extension.

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export data to YAML format.
pub fn export_yaml<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export data to JSON format.
pub fn export_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Import data from YAML format.
pub fn import_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data = serde_yaml::from_str(&yaml).with_context(|| format!("parsing {}", path.display()))?;
    Ok(data)
}

/// Import data from JSON format.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data = serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    Ok(data)
}

/// Export in the format matching the path's extension.
pub fn export<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    }
}

/// Import in the format matching the path's extension.
pub fn import<T: DeserializeOwned>(path: &Path) -> Result<T> {
    match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::SketchDocument;
    use crate::models::room::{Room, RoomId, CATALOG};

    fn sample() -> SketchDocument {
        SketchDocument::new(
            600,
            400,
            vec![Room {
                id: RoomId(7),
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 80.0,
                label: "Cozinha".to_string(),
                color: CATALOG[2].color,
            }],
        )
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.png")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let path = std::env::temp_dir().join("architai_layout_test.yaml");
        export(&sample(), &path).unwrap();
        let loaded: SketchDocument = import(&path).unwrap();
        assert_eq!(loaded, sample());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_import_missing_file_fails() {
        let path = std::env::temp_dir().join("architai_does_not_exist.json");
        let result: Result<SketchDocument> = import(&path);
        assert!(result.is_err());
    }
}
