mod args;
mod config;
mod error;
mod logging;
mod paths;

use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use advtable_lib::href::QueryHrefBuilder;
use advtable_lib::model::Record;
use advtable_lib::render::{default_cells, render_text};
use advtable_lib::sort::{OrderOptions, order_rows};
use advtable_lib::table::{Activation, AdvancedTable, SortStrategy};
use clap::Parser;
use log::{error, info};

use args::Args;
use config::{StrategyKind, TableConfig};
use error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_file.clone(), args.log_level);

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::load_default()?.unwrap_or_default(),
    };
    config.apply_args(args);

    let rows = load_rows(&args.rows)?;
    info!("loaded {} rows from {}", rows.len(), args.rows.display());

    let columns = config.columns_for(&rows);
    let options = OrderOptions::default().with_pinned_last_row(config.pin_last_row);
    let mut table = AdvancedTable::new(columns, rows)
        .with_strategy(build_strategy(&config)?)
        .with_options(options);

    let mut followed: Option<QueryHrefBuilder> = None;
    for key in &args.activate {
        let index = table
            .columns()
            .iter()
            .position(|c| c.sort_key.as_deref() == Some(key.as_str()))
            .ok_or_else(|| CliError::UnknownColumn(key.clone()))?;

        match table.activate(index)? {
            Activation::Applied(state) => info!("sorted: {}", state),
            Activation::Requested(state) => {
                // Acting as the controlling caller: adopt what was requested.
                table.set_sort_state(state)?;
            }
            Activation::Navigate(href) => {
                // Acting as the browser: follow the link and re-read the state.
                info!("navigating to {}", href);
                let next = current_location(&config, followed.as_ref())?.follow(&href)?;
                table.set_strategy(SortStrategy::url(next.current_state(), next.clone()));
                followed = Some(next);
            }
        }
    }

    // Caller-owned strategies render rows as supplied, so order them here.
    if matches!(config.strategy, StrategyKind::Controlled | StrategyKind::Url) {
        let ordered: Vec<Record> = order_rows(table.rows(), table.sort_state(), options)
            .into_iter()
            .cloned()
            .collect();
        table.set_rows(ordered);
    }

    let mut output = render_text(&table, |row| default_cells(row, table.columns()));
    if config.strategy == StrategyKind::Url {
        output.push('\n');
        for cell in table.header() {
            if let Some(href) = cell.href {
                let _ = writeln!(output, "{}: {}", cell.column.label, href);
            }
        }
    }
    Ok(output)
}

fn build_strategy(config: &TableConfig) -> Result<SortStrategy, CliError> {
    let strategy = match config.strategy {
        StrategyKind::None => SortStrategy::None,
        StrategyKind::Automatic => {
            SortStrategy::automatic_with(|state| info!("automatic sort changed: {}", state))
        }
        StrategyKind::Controlled => SortStrategy::controlled(config.initial_state(), |state| {
            info!("controlled sort requested: {}", state)
        }),
        StrategyKind::Url => {
            let location = current_location(config, None)?;
            SortStrategy::url(location.current_state(), location)
        }
    };
    Ok(strategy)
}

fn current_location(
    config: &TableConfig,
    followed: Option<&QueryHrefBuilder>,
) -> Result<QueryHrefBuilder, CliError> {
    if let Some(location) = followed {
        return Ok(location.clone());
    }
    let location = config.location.as_deref().ok_or(CliError::MissingLocation)?;
    Ok(QueryHrefBuilder::parse(location)?)
}

fn load_rows(path: &Path) -> Result<Vec<Record>, CliError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::read(path, e))?;
        text
    } else {
        fs::read_to_string(path).map_err(|e| CliError::read(path, e))?
    };
    serde_json::from_str(&text).map_err(|e| CliError::json(path, e))
}
