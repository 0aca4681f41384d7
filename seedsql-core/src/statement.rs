//! `INSERT` statement rendering

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::extractor::{LiteralExtractor, Row};
use crate::schema::TableSchema;
use std::fmt;

/// Multi-row `INSERT INTO ... VALUES` statement for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    table: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl InsertStatement {
    pub fn new(schema: &TableSchema, rows: Vec<Row>) -> Self {
        Self {
            table: schema.table.clone(),
            columns: schema.columns.iter().map(|c| c.name.clone()).collect(),
            rows,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the statement; empty when there are no rows
    ///
    /// `VALUES` with no tuples is not valid SQL, so nothing is emitted.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let tuples = self
            .rows
            .iter()
            .map(Row::render)
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "INSERT INTO {} ({}) VALUES\n{};",
            self.table,
            self.columns.join(", "),
            tuples
        )
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Extract every row of `text` and return the rendered `INSERT`
pub fn convert(text: &str, config: &ConversionConfig) -> Result<String> {
    config.schema.validate()?;
    let extractor = LiteralExtractor::from_config(&config.extractor)?;
    let rows = extractor.extract(text, &config.schema)?;
    Ok(InsertStatement::new(&config.schema, rows).render())
}
