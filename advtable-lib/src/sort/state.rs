//! Sort direction and state types.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for an active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the lowercase query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort direction '{0}', expected 'asc' or 'desc'")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// The sort state of a table: at most one active key, always with a direction.
///
/// A key without a direction cannot be represented. Use [`SortState::new`] to
/// build a state from loosely paired inputs such as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortState {
    /// No column is sorted; rows keep their input order.
    #[default]
    Unsorted,
    /// One column is sorted in the given direction.
    Sorted {
        /// The sort key of the active column.
        key: String,
        /// The active direction.
        direction: Direction,
    },
}

impl SortState {
    /// Builds a state from an optional key and direction.
    ///
    /// Anything short of both being present is [`SortState::Unsorted`].
    pub fn new(key: Option<impl Into<String>>, direction: Option<Direction>) -> Self {
        match (key, direction) {
            (Some(key), Some(direction)) => Self::sorted(key, direction),
            _ => Self::Unsorted,
        }
    }

    /// Creates a sorted state.
    pub fn sorted(key: impl Into<String>, direction: Direction) -> Self {
        Self::Sorted {
            key: key.into(),
            direction,
        }
    }

    /// Returns the active key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { key, .. } => Some(key),
        }
    }

    /// Returns the active direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Returns `true` if a column is sorted.
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortState::Sorted { .. })
    }

    /// Returns the direction if `key` is the active key.
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        match self {
            SortState::Sorted { key: active, direction } if active == key => Some(*direction),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortState::Unsorted => f.write_str("unsorted"),
            SortState::Sorted { key, direction } => write!(f, "{} {}", key, direction),
        }
    }
}
