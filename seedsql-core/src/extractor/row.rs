use crate::literal::{SourceValue, SqlLiteral};
use crate::schema::TableSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// One destination row, cells in schema column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, SqlLiteral)>,
}

impl Row {
    /// Build a row by looking up every schema column in `values`
    ///
    /// Columns without a value become `NULL`; keys that name no column are
    /// dropped.
    pub fn assemble(schema: &TableSchema, mut values: HashMap<&str, SourceValue>) -> Self {
        let cells = schema
            .columns
            .iter()
            .map(|column| {
                let literal = values
                    .remove(column.name.as_str())
                    .map(|value| value.into_literal(column.kind()))
                    .unwrap_or(SqlLiteral::Null);
                (column.name.clone(), literal)
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&SqlLiteral> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, literal)| literal)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlLiteral> {
        self.cells.iter().map(|(_, literal)| literal)
    }

    pub fn cells(&self) -> &[(String, SqlLiteral)] {
        &self.cells
    }

    /// Number of non-null cells
    pub fn populated(&self) -> usize {
        self.values().filter(|v| !v.is_null()).count()
    }

    /// Render the SQL value tuple, e.g. `(1, 'Narnia', NULL)`
    pub fn render(&self) -> String {
        let values = self
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("({})", values)
    }
}

/// Serializes as a map of column to rendered SQL text, in column order
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, literal) in &self.cells {
            map.serialize_entry(name, &literal.to_string())?;
        }
        map.end()
    }
}
