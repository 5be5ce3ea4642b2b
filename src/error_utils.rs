//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Toggle this to add spaces for iTerm2 clickability
const ADD_SPACES_FOR_ITERM: bool = true;

/// Format a file path for error display
///
/// When ADD_SPACES_FOR_ITERM is true, adds a space before the path
/// to make it clickable in iTerm2.
pub fn format_error_path(path: &Path) -> String {
    let path_str = path.display().to_string();

    if ADD_SPACES_FOR_ITERM {
        format!(" {path_str}")
    } else {
        path_str
    }
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    let formatted_path = format_error_path(path);
    NamedSource::new(formatted_path, content)
}

/// Span of a single character at `offset`, clamped to the source length.
pub fn point_span(content: &str, offset: usize) -> SourceSpan {
    let start = offset.min(content.len());
    let len = usize::from(start < content.len());
    SourceSpan::new(start.into(), len)
}
