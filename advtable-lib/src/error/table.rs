//! TableError for table configuration and activation

/// Error type for operations on an [`AdvancedTable`](crate::table::AdvancedTable).
///
/// Resolving sort state and ordering rows never fail. These errors only come
/// from wiring mistakes: activating a column that cannot sort, or handing the
/// table state it does not accept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// The column index is past the end of the column list.
    #[error("Column {index} out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },

    /// The column has no sort key.
    #[error("Column '{label}' is not sortable")]
    NotSortable { label: String },

    /// The table was built without a sorting strategy.
    #[error("Sorting is disabled for this table")]
    SortingDisabled,

    /// The sort state is owned by the table itself and cannot be set by the caller.
    #[error("Sort state is owned by the '{strategy}' strategy")]
    StateNotCallerOwned { strategy: &'static str },

    /// The current location handed to a href builder could not be parsed.
    #[error("Invalid location '{location}': {source}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },
}

impl TableError {
    /// Creates a new column out of range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::ColumnOutOfRange { index, len }
    }

    /// Creates a new not sortable error.
    pub fn not_sortable(label: impl Into<String>) -> Self {
        Self::NotSortable {
            label: label.into(),
        }
    }

    /// Creates a new invalid location error.
    pub fn invalid_location(location: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            source,
        }
    }
}
