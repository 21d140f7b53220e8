//! Next-state resolution for header activations.

use log::debug;

use super::Direction;
use super::SortState;
use crate::model::FieldPath;
use crate::model::Row;
use crate::model::Value;

/// How a column's values are classified for choosing a direction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A number that is not NaN.
    Numeric,
    /// Anything else, including null.
    Text,
}

impl ValueKind {
    /// Classifies a sampled value.
    pub fn classify(value: &Value) -> Self {
        if value.is_numeric() {
            ValueKind::Numeric
        } else {
            ValueKind::Text
        }
    }

    /// The direction a column starts in when it becomes active.
    ///
    /// Numbers start biggest-first, everything else starts A-to-Z.
    pub fn first_direction(self) -> Direction {
        match self {
            ValueKind::Numeric => Direction::Desc,
            ValueKind::Text => Direction::Asc,
        }
    }

    /// The direction that follows `current` when the same column is activated
    /// again, or `None` when the cycle wraps back to unsorted.
    fn next_direction(self, current: Direction) -> Option<Direction> {
        let first = self.first_direction();
        if current == first {
            Some(first.reverse())
        } else {
            None
        }
    }
}

/// Returns the first non-null value at `key`, scanning rows in order.
///
/// Falls back to [`Value::Null`] when rows are empty or no row has a value.
pub fn sample_value<R: Row>(rows: &[R], key: &str) -> Value {
    let path = FieldPath::new(key);
    rows.iter()
        .filter_map(|row| row.field(&path))
        .find(|value| !value.is_null())
        .map(|value| value.into_owned())
        .unwrap_or(Value::Null)
}

/// Computes the sort state that follows activating the column keyed `activated`.
///
/// - A column that is not currently active starts at its first direction:
///   descending for numeric columns, ascending otherwise.
/// - Re-activating the active column advances a three-step cycle
///   (numeric: desc, asc, unsorted; other: asc, desc, unsorted). Landing on
///   unsorted clears the key.
///
/// `rows` is only used to sample one value for the type check. The function
/// is total: empty rows or a key no row carries classify as non-numeric.
pub fn resolve_next_sort_state<R: Row>(current: &SortState, activated: &str, rows: &[R]) -> SortState {
    let kind = ValueKind::classify(&sample_value(rows, activated));

    let next = match current.direction_for(activated) {
        Some(direction) => match kind.next_direction(direction) {
            Some(next) => SortState::sorted(activated, next),
            None => SortState::Unsorted,
        },
        None => SortState::sorted(activated, kind.first_direction()),
    };

    debug!(
        "sort activation on '{}' ({:?}): {} -> {}",
        activated, kind, current, next
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn numbers() -> Vec<Record> {
        vec![
            Record::new().set("n", 3),
            Record::new().set("n", 1),
            Record::new().set("n", 2),
        ]
    }

    fn names() -> Vec<Record> {
        vec![
            Record::new().set("name", "Bob"),
            Record::new().set("name", "alice"),
            Record::new().set("name", Value::Null),
        ]
    }

    #[test]
    fn test_sample_skips_nulls_and_missing() {
        let rows = vec![
            Record::new(),
            Record::new().set("n", Value::Null),
            Record::new().set("n", 7),
            Record::new().set("n", "late"),
        ];
        assert_eq!(sample_value(&rows, "n"), Value::Int(7));
    }

    #[test]
    fn test_sample_empty_rows() {
        let rows: Vec<Record> = Vec::new();
        assert_eq!(sample_value(&rows, "n"), Value::Null);
    }

    #[test]
    fn test_sample_nested_path() {
        let rows = vec![Record::new().set("owner", Record::new().set("age", 40))];
        assert_eq!(sample_value(&rows, "owner.age"), Value::Int(40));
    }

    #[test]
    fn test_numeric_cycle() {
        let rows = numbers();
        let first = resolve_next_sort_state(&SortState::Unsorted, "n", &rows);
        assert_eq!(first, SortState::sorted("n", Direction::Desc));
        let second = resolve_next_sort_state(&first, "n", &rows);
        assert_eq!(second, SortState::sorted("n", Direction::Asc));
        let third = resolve_next_sort_state(&second, "n", &rows);
        assert_eq!(third, SortState::Unsorted);
        let fourth = resolve_next_sort_state(&third, "n", &rows);
        assert_eq!(fourth, first);
    }

    #[test]
    fn test_text_cycle() {
        let rows = names();
        let first = resolve_next_sort_state(&SortState::Unsorted, "name", &rows);
        assert_eq!(first, SortState::sorted("name", Direction::Asc));
        let second = resolve_next_sort_state(&first, "name", &rows);
        assert_eq!(second, SortState::sorted("name", Direction::Desc));
        let third = resolve_next_sort_state(&second, "name", &rows);
        assert_eq!(third, SortState::Unsorted);
        let fourth = resolve_next_sort_state(&third, "name", &rows);
        assert_eq!(fourth, first);
    }

    #[test]
    fn test_new_column_resets_direction() {
        let rows: Vec<Record> = numbers()
            .into_iter()
            .zip(["x", "y", "z"])
            .map(|(r, s)| r.set("s", s))
            .collect();

        for direction in [Direction::Asc, Direction::Desc] {
            let current = SortState::sorted("s", direction);
            assert_eq!(
                resolve_next_sort_state(&current, "n", &rows),
                SortState::sorted("n", Direction::Desc)
            );
            let current = SortState::sorted("n", direction);
            assert_eq!(
                resolve_next_sort_state(&current, "s", &rows),
                SortState::sorted("s", Direction::Asc)
            );
        }
    }

    #[test]
    fn test_nan_sample_is_text() {
        let rows = vec![Record::new().set("f", f64::NAN)];
        assert_eq!(
            resolve_next_sort_state(&SortState::Unsorted, "f", &rows),
            SortState::sorted("f", Direction::Asc)
        );
    }

    #[test]
    fn test_absent_key_is_total() {
        let rows = numbers();
        let state = resolve_next_sort_state(&SortState::Unsorted, "missing", &rows);
        assert_eq!(state, SortState::sorted("missing", Direction::Asc));

        let empty: Vec<Record> = Vec::new();
        let state = resolve_next_sort_state(&state, "missing", &empty);
        assert_eq!(state, SortState::sorted("missing", Direction::Desc));
    }

    #[test]
    fn test_numeric_column_in_text_direction_wraps() {
        // Reached when a column's sampled type changes between activations.
        let rows = numbers();
        let current = SortState::sorted("n", Direction::Asc);
        assert_eq!(resolve_next_sort_state(&current, "n", &rows), SortState::Unsorted);
    }
}
