use clap::{Parser, ValueEnum};
use gridconv::input::truncate_value;
use gridconv::{
    parse_cell, sanitize_dim, ConvolveConfig, Convolver, Grid, PaddingAdjustment, PaddingMode,
    MAX_DIM,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid convolution CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
    /// Output format for the result grid.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PaddingConfig {
    #[default]
    None,
    Zero,
    Same,
}

impl From<PaddingConfig> for PaddingMode {
    fn from(value: PaddingConfig) -> Self {
        match value {
            PaddingConfig::None => PaddingMode::None,
            PaddingConfig::Zero => PaddingMode::Zero,
            PaddingConfig::Same => PaddingMode::Same,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AdjustmentConfig {
    #[default]
    FloorStart,
    CeilStart,
}

impl From<AdjustmentConfig> for PaddingAdjustment {
    fn from(value: AdjustmentConfig) -> Self {
        match value {
            AdjustmentConfig::FloorStart => PaddingAdjustment::FloorStart,
            AdjustmentConfig::CeilStart => PaddingAdjustment::CeilStart,
        }
    }
}

/// A form value: either a JSON number or free text.
///
/// Cells and row/column counts share this type so malformed input is
/// sanitized rather than rejected at deserialization.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    fn to_int(&self) -> i64 {
        match self {
            InputValue::Number(value) => truncate_value(*value),
            InputValue::Text(text) => parse_cell(text),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GridConfig {
    rows: Option<InputValue>,
    cols: Option<InputValue>,
    cells: Vec<Vec<InputValue>>,
}

impl GridConfig {
    fn build(&self) -> gridconv::GridConvResult<Grid> {
        let inferred_rows = i64::try_from(self.cells.len()).ok();
        let inferred_cols = self
            .cells
            .iter()
            .map(Vec::len)
            .max()
            .and_then(|len| i64::try_from(len).ok());
        let rows = sanitize_dim(
            self.rows.as_ref().map(InputValue::to_int).or(inferred_rows),
            MAX_DIM,
        );
        let cols = sanitize_dim(
            self.cols.as_ref().map(InputValue::to_int).or(inferred_cols),
            MAX_DIM,
        );

        // Cells outside the requested block are ignored; missing ones stay 0.
        let mut grid = Grid::zeros(rows, cols)?;
        for (row, line) in self.cells.iter().take(rows).enumerate() {
            for (col, cell) in line.iter().take(cols).enumerate() {
                grid.set(row, col, cell.to_int())?;
            }
        }
        Ok(grid)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    matrix: GridConfig,
    filter: GridConfig,
    padding: PaddingConfig,
    adjustment: AdjustmentConfig,
    parallel: bool,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<i64>>,
}

impl From<&Grid> for Output {
    fn from(value: &Grid) -> Self {
        Self {
            rows: value.rows(),
            cols: value.cols(),
            cells: value.to_rows(),
        }
    }
}

fn run_config(config: Config) -> Result<Grid, Box<dyn std::error::Error>> {
    let matrix = config.matrix.build()?;
    let filter = config.filter.build()?;
    tracing::info!(
        matrix_rows = matrix.rows(),
        matrix_cols = matrix.cols(),
        filter_rows = filter.rows(),
        filter_cols = filter.cols(),
        "grids loaded"
    );

    let convolver = Convolver::new().with_config(ConvolveConfig {
        padding: config.padding.into(),
        adjustment: config.adjustment.into(),
        parallel: config.parallel,
    });
    Ok(convolver.run(&matrix, &filter)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("gridconv=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let output_path = config.output_path.clone();

    let result = run_config(config)?;
    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&Output::from(&result))?,
        OutputFormat::Text => result.to_string(),
    };

    match output_path {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
