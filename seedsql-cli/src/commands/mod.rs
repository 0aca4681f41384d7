use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use seedsql_core::{build_seed_script, ConversionConfig, InsertStatement, LiteralExtractor, Row};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Command-line overrides for the conversion settings
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub marker: Option<String>,
    pub table: Option<String>,
}

impl Overrides {
    /// Layer the overrides over `base` and validate the result
    fn apply(&self, base: &ConversionConfig) -> Result<ConversionConfig> {
        let mut conversion = base.clone();
        if let Some(marker) = &self.marker {
            conversion.extractor.start_marker = marker.clone();
        }
        if let Some(table) = &self.table {
            conversion.schema.table = table.clone();
        }
        conversion
            .validate()
            .with_context(|| "Invalid command-line overrides")?;
        Ok(conversion)
    }
}

/// Write the full seed script for the input file
pub fn convert(
    config: &Config,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    overrides: &Overrides,
) -> Result<()> {
    let input = resolve_input(config, input)?;
    let text = read_source(&input)?;
    let conversion = overrides.apply(&config.conversion)?;

    let script = build_seed_script(&text, &conversion)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let output = output.or_else(|| config.output.clone());
    emit(output.as_deref(), &script.render())?;

    if let Some(path) = &output {
        info!(
            "Wrote {} {} rows to {}",
            script.row_count(),
            conversion.schema.table,
            path.display()
        );
    }
    Ok(())
}

/// Print the extracted rows without the surrounding script
pub fn extract(
    config: &Config,
    input: Option<PathBuf>,
    format: OutputFormat,
    overrides: &Overrides,
) -> Result<()> {
    let input = resolve_input(config, input)?;
    let text = read_source(&input)?;
    let conversion = overrides.apply(&config.conversion)?;

    let extractor = LiteralExtractor::from_config(&conversion.extractor)?;
    let rows = extractor
        .extract(&text, &conversion.schema)
        .with_context(|| format!("Failed to extract rows from {}", input.display()))?;
    debug!("Extracted {} rows as {}", rows.len(), format);

    let rendered = match format {
        OutputFormat::Table => format_table(&rows),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Sql => InsertStatement::new(&conversion.schema, rows).render(),
    };
    emit(None, &rendered)
}

/// Print the `CREATE TABLE` statement of the configured table
pub fn schema(config: &Config, overrides: &Overrides) -> Result<()> {
    let conversion = overrides.apply(&config.conversion)?;
    emit(None, conversion.schema.create_table_sql().trim_end())
}

/// Print the effective configuration, or save it to `write`
pub fn show_config(config: &Config, write: Option<PathBuf>) -> Result<()> {
    match write {
        Some(path) => {
            config.save_to_file(&path)?;
            info!("Saved configuration to {}", path.display());
            Ok(())
        }
        None => emit(None, config.to_toml()?.trim_end()),
    }
}

fn resolve_input(config: &Config, input: Option<PathBuf>) -> Result<PathBuf> {
    input.or_else(|| config.input.clone()).ok_or_else(|| {
        anyhow!("No input file given; pass --input or set `input` in the config file")
    })
}

fn read_source(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

/// One line per row listing its non-null cells
fn format_table(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| {
            row.cells()
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(column, value)| format!("{}={}", column, value))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
