//! Sortable table core
//!
//! Sort-state resolution and row ordering for data tables, plus the column,
//! strategy and rendering plumbing that drives them.

pub mod error;
pub mod href;
pub mod model;
pub mod render;
pub mod sort;
pub mod table;

pub use error::TableError;
pub use model::{FieldPath, Record, Row, Value};
pub use sort::{Direction, OrderOptions, SortState, order_rows, resolve_next_sort_state};
pub use table::{Activation, AdvancedTable, Alignment, Column, SortStrategy};
