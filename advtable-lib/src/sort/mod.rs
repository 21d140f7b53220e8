//! Sort state resolution and row ordering.
//!
//! The two halves are independent pure functions:
//!
//! - [`resolve_next_sort_state`] turns a header activation into the next
//!   [`SortState`], cycling through a direction order picked from the column's
//!   value type.
//! - [`order_rows`] produces a stably ordered view of a row slice for a
//!   [`SortState`] without touching the slice.
//!
//! # Example
//!
//! ```
//! use advtable_lib::model::Record;
//! use advtable_lib::sort::{order_rows, resolve_next_sort_state, Direction, OrderOptions, SortState};
//!
//! let rows = vec![
//!     Record::new().set("n", 3),
//!     Record::new().set("n", 1),
//!     Record::new().set("n", 2),
//! ];
//!
//! let state = resolve_next_sort_state(&SortState::Unsorted, "n", &rows);
//! assert_eq!(state, SortState::sorted("n", Direction::Desc));
//!
//! let ordered = order_rows(&rows, &state, OrderOptions::default());
//! assert_eq!(ordered[0].get("n"), rows[0].get("n"));
//! ```

mod collate;
mod compare;
mod order;
mod resolve;
mod state;

pub use collate::collate;
pub use compare::compare_values;
pub use order::{OrderOptions, order_rows};
pub use resolve::{ValueKind, resolve_next_sort_state, sample_value};
pub use state::{Direction, ParseDirectionError, SortState};
