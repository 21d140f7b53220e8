//! Dotted field paths

/// A dot-separated path into nested row data, such as `owner.name` or `tags.0`.
///
/// Paths are parsed once and reused for every row lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    /// Creates a path from its dotted form.
    pub fn new(path: impl Into<String>) -> Self {
        Self { raw: path.into() }
    }

    /// Returns the dotted form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterates over the path segments.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.raw.split('.')
    }

    /// Returns `true` if the path has more than one segment.
    pub fn is_nested(&self) -> bool {
        self.raw.contains('.')
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
