//! Destination table definitions
//!
//! A [`TableSchema`] fixes the column order every extracted row is rendered
//! in, and carries the column types used both for the `CREATE TABLE`
//! statement and for deciding whether a quoted source number is emitted bare.

mod countries;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Table schema definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub table: String,

    /// All columns in declaration order
    pub columns: Vec<ColumnDef>,
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name
    pub name: String,

    /// SQL data type (e.g. "BIGINT UNSIGNED", "VARCHAR(255)", "DECIMAL(10, 8)")
    #[serde(rename = "type")]
    pub data_type: String,

    /// Trailing clause (e.g. "NOT NULL", "NULL DEFAULT CURRENT_TIMESTAMP")
    #[serde(default)]
    pub constraints: String,
}

/// How values of a column are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

const NUMERIC_TYPES: &[&str] = &[
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "INT",
    "INTEGER",
    "BIGINT",
    "DECIMAL",
    "NUMERIC",
    "FLOAT",
    "DOUBLE",
    "REAL",
    "BOOL",
    "BOOLEAN",
    "BIT",
];

impl ColumnDef {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            constraints: constraints.into(),
        }
    }

    /// Classify the column by the base name of its SQL type
    pub fn kind(&self) -> ColumnKind {
        let base: String = self
            .data_type
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_uppercase();

        if NUMERIC_TYPES.contains(&base.as_str()) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// Render the column line used inside `CREATE TABLE`
    pub fn definition_sql(&self) -> String {
        let constraints = self.constraints.trim();
        if constraints.is_empty() {
            format!("{} {}", self.name, self.data_type)
        } else {
            format!("{} {} {}", self.name, self.data_type, constraints)
        }
    }
}

impl TableSchema {
    /// Create a schema, rejecting empty or duplicated column lists
    pub fn new(table: impl Into<String>, columns: Vec<ColumnDef>) -> Result<Self> {
        let schema = Self {
            table: table.into(),
            columns,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Built-in `countries` reference table
    pub fn countries() -> Self {
        countries::countries_schema()
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(Error::schema("table name is empty"));
        }
        if self.columns.is_empty() {
            return Err(Error::schema(format!(
                "table '{}' declares no columns",
                self.table
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.trim().is_empty() {
                return Err(Error::schema(format!(
                    "table '{}' has a column without a name",
                    self.table
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(Error::schema(format!(
                    "duplicate column '{}' in table '{}'",
                    column.name, self.table
                )));
            }
        }

        Ok(())
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Render `CREATE TABLE IF NOT EXISTS`, one column per line
    pub fn create_table_sql(&self) -> String {
        let body = self
            .columns
            .iter()
            .map(|c| format!("    {}", c.definition_sql()))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n);\n", self.table, body)
    }
}
