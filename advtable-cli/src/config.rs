//! Table configuration file.

use std::fs;
use std::path::Path;

use advtable_lib::model::{FieldPath, Record, Row};
use advtable_lib::sort::{Direction, SortState, sample_value};
use advtable_lib::table::{Alignment, Column, DEFAULT_WIDTH};
use clap::ValueEnum;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::args::Args;
use crate::error::CliError;
use crate::paths;

const MIN_DERIVED_WIDTH: usize = 4;
const MAX_DERIVED_WIDTH: usize = 32;

/// Which sorting strategy the CLI drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    None,
    #[default]
    Automatic,
    Controlled,
    Url,
}

/// A column entry in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnConfig {
    pub label: String,
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub align: Alignment,
}

impl ColumnConfig {
    fn to_column(&self) -> Column {
        let mut column = Column::new(self.label.as_str())
            .width(self.width.unwrap_or(DEFAULT_WIDTH))
            .align(self.align);
        column.sort_key = self.sort_key.clone();
        column
    }
}

/// Table configuration, read from JSON.
///
/// ```json
/// {
///   "strategy": "automatic",
///   "pin_last_row": true,
///   "columns": [
///     { "label": "Name", "sort_key": "name" },
///     { "label": "Revenue", "sort_key": "revenue", "width": 12, "align": "right" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Columns; derived from the first row when empty.
    pub columns: Vec<ColumnConfig>,
    pub strategy: StrategyKind,
    pub pin_last_row: bool,
    /// Current page address for the url strategy.
    pub location: Option<String>,
    /// Initial sort key for the controlled strategy.
    pub sort: Option<String>,
    /// Initial sort direction for the controlled strategy.
    pub direction: Option<Direction>,
}

impl TableConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
        serde_json::from_str(&text).map_err(|e| CliError::json(path, e))
    }

    /// Load the config from the platform config directory, if present.
    pub fn load_default() -> Result<Option<Self>, CliError> {
        match paths::config_file() {
            Some(path) if path.is_file() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Apply command-line overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(strategy) = args.strategy {
            self.strategy = strategy;
        }
        if args.pin_last_row {
            self.pin_last_row = true;
        }
        if let Some(location) = &args.location {
            self.location = Some(location.clone());
        }
    }

    /// Initial caller-owned sort state.
    pub fn initial_state(&self) -> SortState {
        SortState::new(self.sort.clone(), self.direction)
    }

    /// Build table columns, deriving them from the first row when none are configured.
    ///
    /// Derived columns follow the first row's field order, are sortable by their
    /// field name, sized to the display width of their widest value, and
    /// right-aligned when the field samples as numeric.
    pub fn columns_for(&self, rows: &[Record]) -> Vec<Column> {
        if !self.columns.is_empty() {
            return self.columns.iter().map(ColumnConfig::to_column).collect();
        }
        let Some(first) = rows.first() else {
            return Vec::new();
        };
        first
            .keys()
            .map(|key| {
                let path = FieldPath::new(key);
                let widest = rows
                    .iter()
                    .filter_map(|row| row.field(&path))
                    .map(|value| value.to_text().width())
                    .chain([key.width() + 2])
                    .max()
                    .unwrap_or(MIN_DERIVED_WIDTH);
                let align = if sample_value(rows, key).is_numeric() {
                    Alignment::Right
                } else {
                    Alignment::Left
                };
                Column::new(key)
                    .sort_key(key)
                    .width(widest.clamp(MIN_DERIVED_WIDTH, MAX_DERIVED_WIDTH) as u16)
                    .align(align)
            })
            .collect()
    }
}
