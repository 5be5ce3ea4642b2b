//! Reading YAML configuration documents

use serde::de::DeserializeOwned;
use serde_yaml::Value as YamlValue;
use std::path::Path;

use crate::error::{ConfigError, YamlParseError};

/// Parse a YAML config file into its native structure.
///
/// No schema is applied here; the result is whatever mapping or sequence
/// the document holds.
pub fn read_config(path: impl AsRef<Path>) -> Result<YamlValue, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_yaml::from_str(&content) {
        Ok(value) => Ok(value),
        Err(err) => Err(ConfigError::Parse(Box::new(YamlParseError::new(
            path.to_path_buf(),
            content,
            &err,
        )))),
    }
}

/// Parse a YAML config file and convert it into `T`.
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let value = read_config(path)?;
    from_value(path, value)
}

/// Convert an already parsed document, attributing failures to `path`.
pub fn from_value<T: DeserializeOwned>(path: &Path, value: YamlValue) -> Result<T, ConfigError> {
    serde_yaml::from_value(value).map_err(|err| ConfigError::Shape {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_mapping_documents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.yaml");
        fs::write(
            &path,
            r#"
Emissions|CO2:
  unit: Mt CO2/yr
  required: true
"#,
        )
        .unwrap();

        let value = read_config(&path).unwrap();
        assert!(value.is_mapping());
        assert_eq!(value["Emissions|CO2"]["unit"].as_str(), Some("Mt CO2/yr"));
    }

    #[test]
    fn reads_sequence_documents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.yml");
        fs::write(&path, "- a\n- b\n").unwrap();

        let value = read_config(&path).unwrap();
        assert_eq!(value.as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_config(temp_dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn malformed_yaml_reports_location() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "a: [1, 2\nb: c\n").unwrap();

        let err = read_config(&path).unwrap_err();
        let diagnostic = err.diagnostic().expect("parse errors carry a diagnostic");
        assert!(diagnostic.span.is_some());
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn wrong_shape_is_reported_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.yaml");
        fs::write(&path, "- a\n- b\n").unwrap();

        let err = load_config::<BTreeMap<String, String>>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Shape { .. }));
        assert!(err.to_string().contains("list.yaml"));
    }
}
