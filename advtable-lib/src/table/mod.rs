//! Sortable table component.
//!
//! [`AdvancedTable`] ties columns, rows and a [`SortStrategy`] together. It
//! turns header activations into resolver calls, routes the resolved state to
//! whoever owns it, and hands renderers header cells and keyed body rows.

mod column;
mod strategy;

pub use column::{Alignment, Column, DEFAULT_WIDTH};
pub use strategy::{SortCallback, SortStrategy};

use log::debug;

use crate::error::TableError;
use crate::model::Row;
use crate::sort::{Direction, OrderOptions, SortState, order_rows, resolve_next_sort_state};

type RowKeyFn<R> = Box<dyn Fn(&R) -> String>;

/// Outcome of activating a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Automatic strategy: the table replaced its own state.
    Applied(SortState),
    /// Controlled strategy: the caller was asked to adopt this state.
    Requested(SortState),
    /// URL strategy: the caller should navigate to this href.
    Navigate(String),
}

impl Activation {
    /// Returns the resolved state, if the activation carried one.
    pub fn state(&self) -> Option<&SortState> {
        match self {
            Activation::Applied(state) | Activation::Requested(state) => Some(state),
            Activation::Navigate(_) => None,
        }
    }
}

/// A header cell ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell<'a> {
    /// Column position.
    pub index: usize,
    /// The column descriptor.
    pub column: &'a Column,
    /// Direction indicator when this column is the active sort.
    pub direction: Option<Direction>,
    /// Link to the next sort state (URL strategy only).
    pub href: Option<String>,
}

impl HeaderCell<'_> {
    /// Returns `true` if activating this cell does something.
    pub fn is_interactive(&self) -> bool {
        self.column.is_sortable()
    }
}

/// A body row with its render key.
#[derive(Debug, PartialEq)]
pub struct BodyRow<'a, R> {
    /// Stable key from the row-key extractor, or `row-{position}`.
    pub key: String,
    /// The row data.
    pub row: &'a R,
}

/// A data table with client-side sort state.
///
/// # Example
///
/// ```
/// use advtable_lib::model::Record;
/// use advtable_lib::sort::{Direction, SortState};
/// use advtable_lib::table::{Activation, AdvancedTable, Column, SortStrategy};
///
/// let rows = vec![
///     Record::new().set("name", "Alice").set("age", 19),
///     Record::new().set("name", "Bob").set("age", 25),
/// ];
/// let mut table = AdvancedTable::new(
///     vec![Column::new("Name").sort_key("name"), Column::new("Age").sort_key("age")],
///     rows,
/// )
/// .with_strategy(SortStrategy::automatic());
///
/// let activation = table.activate(1).unwrap();
/// assert_eq!(activation, Activation::Applied(SortState::sorted("age", Direction::Desc)));
///
/// let body = table.body();
/// assert_eq!(body[0].row.get("name").unwrap().to_text(), "Bob");
/// ```
pub struct AdvancedTable<R> {
    columns: Vec<Column>,
    rows: Vec<R>,
    strategy: SortStrategy,
    options: OrderOptions,
    row_key: Option<RowKeyFn<R>>,
}

impl<R: Row> AdvancedTable<R> {
    /// Create an unsortable table.
    pub fn new(columns: Vec<Column>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            strategy: SortStrategy::None,
            options: OrderOptions::default(),
            row_key: None,
        }
    }

    /// Set the sorting strategy.
    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the ordering options.
    pub fn with_options(mut self, options: OrderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the row-key extractor used for [`BodyRow::key`].
    pub fn with_row_key(mut self, row_key: impl Fn(&R) -> String + 'static) -> Self {
        self.row_key = Some(Box::new(row_key));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the rows in input order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace all rows. The sort state is kept.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Get the strategy.
    pub fn strategy(&self) -> &SortStrategy {
        &self.strategy
    }

    /// Replace the strategy, e.g. after following a url-strategy link.
    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.strategy = strategy;
    }

    /// Get the ordering options.
    pub fn options(&self) -> OrderOptions {
        self.options
    }

    /// Get the current sort state.
    pub fn sort_state(&self) -> &SortState {
        self.strategy.state()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Activate the header of the column at `index`.
    ///
    /// Resolves the next sort state once and delivers it according to the
    /// strategy. See [`Activation`] for what each strategy returns.
    pub fn activate(&mut self, index: usize) -> Result<Activation, TableError> {
        if !self.strategy.is_sortable() {
            return Err(TableError::SortingDisabled);
        }
        let column = self
            .columns
            .get(index)
            .ok_or_else(|| TableError::out_of_range(index, self.columns.len()))?;
        let key = column
            .sort_key
            .as_deref()
            .ok_or_else(|| TableError::not_sortable(&column.label))?;

        let next = resolve_next_sort_state(self.strategy.state(), key, &self.rows);
        debug!("{} table: column {} activated -> {}", self.strategy.name(), index, next);

        match &mut self.strategy {
            SortStrategy::None => Err(TableError::SortingDisabled),
            SortStrategy::Automatic { state, on_sort } => {
                if let Some(on_sort) = on_sort {
                    on_sort(&next);
                }
                *state = next.clone();
                Ok(Activation::Applied(next))
            }
            SortStrategy::Controlled { on_sort, .. } => {
                on_sort(&next);
                Ok(Activation::Requested(next))
            }
            SortStrategy::Url { href, .. } => Ok(Activation::Navigate(href.build_href(&next))),
        }
    }

    /// Hand the table a caller-owned sort state.
    ///
    /// Only valid for the controlled and url strategies; the automatic
    /// strategy owns its state.
    pub fn set_sort_state(&mut self, next: SortState) -> Result<(), TableError> {
        match &mut self.strategy {
            SortStrategy::Controlled { state, .. } | SortStrategy::Url { state, .. } => {
                *state = next;
                Ok(())
            }
            other => Err(TableError::StateNotCallerOwned {
                strategy: other.name(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering input
    // -------------------------------------------------------------------------

    /// Build the header cells.
    pub fn header(&self) -> Vec<HeaderCell<'_>> {
        let state = self.strategy.state();
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let key = column.sort_key.as_deref();
                let href = match (&self.strategy, key) {
                    (SortStrategy::Url { href, .. }, Some(key)) => {
                        let next = resolve_next_sort_state(state, key, &self.rows);
                        Some(href.build_href(&next))
                    }
                    _ => None,
                };
                HeaderCell {
                    index,
                    column,
                    direction: key.and_then(|key| state.direction_for(key)),
                    href,
                }
            })
            .collect()
    }

    /// Build the body rows in display order.
    ///
    /// Only the automatic strategy reorders; the others render rows exactly as
    /// the caller supplied them.
    pub fn body(&self) -> Vec<BodyRow<'_, R>> {
        let rows = match &self.strategy {
            SortStrategy::Automatic { state, .. } => order_rows(&self.rows, state, self.options),
            _ => self.rows.iter().collect(),
        };
        rows.into_iter()
            .enumerate()
            .map(|(position, row)| BodyRow {
                key: match &self.row_key {
                    Some(row_key) => row_key(row),
                    None => format!("row-{}", position),
                },
                row,
            })
            .collect()
    }
}

impl<R> std::fmt::Debug for AdvancedTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvancedTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("strategy", &self.strategy)
            .field("options", &self.options)
            .finish()
    }
}
