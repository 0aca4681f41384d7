//! The `countries` reference table

use super::{ColumnDef, TableSchema};

const COUNTRY_COLUMNS: &[(&str, &str, &str)] = &[
    ("id", "BIGINT UNSIGNED", "PRIMARY KEY"),
    ("name", "VARCHAR(255)", "NOT NULL"),
    ("iso3", "VARCHAR(3)", "NULL"),
    ("numeric_code", "VARCHAR(3)", "NULL"),
    ("iso2", "VARCHAR(2)", "NULL"),
    ("phonecode", "VARCHAR(255)", "NULL"),
    ("capital", "VARCHAR(255)", "NULL"),
    ("currency", "VARCHAR(255)", "NULL"),
    ("currency_name", "VARCHAR(255)", "NULL"),
    ("currency_symbol", "VARCHAR(255)", "NULL"),
    ("tld", "VARCHAR(255)", "NULL"),
    ("native", "VARCHAR(255)", "NULL"),
    ("region", "VARCHAR(255)", "NULL"),
    ("subregion", "VARCHAR(255)", "NULL"),
    ("timezones", "TEXT", "NULL"),
    ("translations", "TEXT", "NULL"),
    ("latitude", "DECIMAL(10, 8)", "NULL"),
    ("longitude", "DECIMAL(11, 8)", "NULL"),
    ("emoji", "VARCHAR(191)", "NULL"),
    ("emojiU", "VARCHAR(191)", "NULL"),
    ("created_at", "TIMESTAMP", "NULL DEFAULT CURRENT_TIMESTAMP"),
    (
        "updated_at",
        "TIMESTAMP",
        "NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP",
    ),
    ("flag", "BOOLEAN", "NOT NULL DEFAULT 1"),
    ("wikiDataId", "VARCHAR(255)", "NULL"),
];

pub(super) fn countries_schema() -> TableSchema {
    TableSchema {
        table: "countries".to_string(),
        columns: COUNTRY_COLUMNS
            .iter()
            .map(|(name, data_type, constraints)| ColumnDef::new(*name, *data_type, *constraints))
            .collect(),
    }
}
