//! Locating the region mapping document of a model

use std::path::Path;
use tracing::debug;

use super::config_loader::{from_value, read_config};
use super::file_scanner::FileScanner;
use crate::error::{ConfigError, ConfigurationError, ResolveError};
use crate::models::RegionMapping;

/// Search `mappings_dir` for the region mapping whose `model` equals `model`.
///
/// Every `.yaml`/`.yml` file in the directory is parsed in listing order and
/// the first exact match wins. When several files declare the same model,
/// which one is returned depends on the filesystem.
pub fn get_region_mapping(mappings_dir: &Path, model: &str) -> Result<RegionMapping, ResolveError> {
    if !mappings_dir.is_dir() {
        return Err(ConfigurationError::MissingDirectory {
            path: mappings_dir.to_path_buf(),
        }
        .into());
    }

    let files = FileScanner::scan_directory(mappings_dir).map_err(|source| ConfigError::Io {
        path: mappings_dir.to_path_buf(),
        source,
    })?;

    for path in files {
        let document = read_config(&path)?;
        if !document.is_mapping() {
            return Err(ConfigError::Shape {
                path,
                message: "expected a mapping with a `model` key".to_string(),
            }
            .into());
        }
        let declared = document.get("model").and_then(|m| m.as_str());
        if declared == Some(model) {
            debug!("Region mapping for {model}: {}", path.display());
            return Ok(from_value(&path, document)?);
        }
    }

    Err(ConfigurationError::NotFound {
        model: model.to_string(),
        path: mappings_dir.to_path_buf(),
    }
    .into())
}
