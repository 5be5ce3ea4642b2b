//! File scanning utilities for discovering YAML configuration files

use std::path::{Path, PathBuf};

pub struct FileScanner;

impl FileScanner {
    /// Check if a file name ends in `.yaml` or `.yml`, including a bare `.yaml`
    pub fn is_yaml_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
            .unwrap_or(false)
    }

    /// Scan a directory for YAML files (non-recursive).
    ///
    /// Files come back in directory-listing order.
    pub fn scan_directory(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && Self::is_yaml_file(&path) {
                files.push(path);
            } else {
                tracing::debug!("Skipping {}", path.display());
            }
        }

        Ok(files)
    }
}
