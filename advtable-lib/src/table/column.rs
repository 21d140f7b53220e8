//! Column descriptors.

use serde::Deserialize;
use serde::Serialize;

/// Default column width in terminal columns.
pub const DEFAULT_WIDTH: u16 = 16;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column has a label and, if it can be sorted, the sort key (a dotted
/// field path) its values are read from. Width and alignment are only used by
/// text renderers.
///
/// # Examples
///
/// ```
/// use advtable_lib::table::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("Notes"),
///     Column::new("Name").sort_key("name"),
///     Column::new("Revenue").sort_key("revenue").width(12).align(Alignment::Right),
/// ];
/// assert!(!columns[0].is_sortable());
/// assert!(columns[1].is_sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column header text
    pub label: String,
    /// Field path the column sorts by; `None` for unsortable columns
    pub sort_key: Option<String>,
    /// Column width in terminal columns
    pub width: u16,
    /// Horizontal alignment
    pub align: Alignment,
}

impl Column {
    /// Create an unsortable column.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: None,
            width: DEFAULT_WIDTH,
            align: Alignment::Left,
        }
    }

    /// Make the column sortable by the given field path.
    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Set the column width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Returns `true` if the column has a sort key.
    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }
}
