//! Error kinds raised while loading configuration, mappings and datasets

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// A YAML document that could not be parsed, with the failing location.
#[derive(Error, Debug, Diagnostic)]
#[error("Failed to parse {}: {reason}", .path.display())]
pub struct YamlParseError {
    pub path: PathBuf,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{}", self.reason)]
    pub span: Option<SourceSpan>,

    pub reason: String,
}

impl YamlParseError {
    pub fn new(path: PathBuf, content: String, error: &serde_yaml::Error) -> Self {
        let span = error
            .location()
            .map(|loc| crate::error_utils::point_span(&content, loc.index()));
        let src = crate::error_utils::create_named_source(&path, content);

        Self {
            path,
            src,
            span,
            reason: error.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(Box<YamlParseError>),

    /// The document parsed, but does not have the expected structure.
    #[error("Unexpected structure in {}: {message}", .path.display())]
    Shape { path: PathBuf, message: String },
}

impl ConfigError {
    /// The miette diagnostic behind this error, if it carries one.
    pub fn diagnostic(&self) -> Option<&YamlParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Region mapping lookup failures that count as a failed check, not a crash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Directory containing region mappings does not exists: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("No region mapping found for model \"{model}\" in path \"{}\"", .path.display())]
    NotFound { model: String, path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed timeseries data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timeseries data is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}
