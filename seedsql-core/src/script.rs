//! Seed script assembly
//!
//! A seed script is the `CREATE TABLE` for the destination table, the
//! generated `INSERT`, and a fixed tail of auxiliary statements, in that order.

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::extractor::LiteralExtractor;
use crate::statement::InsertStatement;
use log::{info, warn};

const ROLES_SEED: &str = "INSERT IGNORE INTO roles (name, guard_name, created_at, updated_at) VALUES
('super_admin', 'admin', NOW(), NOW()),
('seller', 'seller', NOW(), NOW()),
('customer', 'web', NOW(), NOW());";

/// Seed rows written after the generated data
pub fn default_auxiliary_statements() -> Vec<String> {
    vec![ROLES_SEED.to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedScript {
    create_table: String,
    insert: InsertStatement,
    auxiliary: Vec<String>,
}

impl SeedScript {
    pub fn new(create_table: String, insert: InsertStatement, auxiliary: Vec<String>) -> Self {
        Self {
            create_table,
            insert,
            auxiliary,
        }
    }

    pub fn insert(&self) -> &InsertStatement {
        &self.insert
    }

    pub fn row_count(&self) -> usize {
        self.insert.rows().len()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.create_table);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.insert.render());
        out.push('\n');
        for statement in &self.auxiliary {
            out.push('\n');
            out.push_str(statement.trim());
            out.push('\n');
        }
        out
    }
}

/// Run the full conversion of `text` into a seed script
pub fn build_seed_script(text: &str, config: &ConversionConfig) -> Result<SeedScript> {
    config.validate()?;

    let extractor = LiteralExtractor::from_config(&config.extractor)?;
    let rows = extractor.extract(text, &config.schema)?;

    if rows.is_empty() {
        warn!(
            "No {} rows found after {:?}; the INSERT statement is omitted",
            config.schema.table,
            extractor.start_marker()
        );
    } else {
        info!("Found {} {} rows", rows.len(), config.schema.table);
    }

    Ok(SeedScript::new(
        config.schema.create_table_sql(),
        InsertStatement::new(&config.schema, rows),
        config.auxiliary_statements.clone(),
    ))
}
