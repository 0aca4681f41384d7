//! seedsql core
//!
//! Converts a reference-data array literal (a PHP seeder's
//! `$countries = array(array('id' => '1', ...), ...)`) into SQL seed
//! statements: the table definition, one multi-row `INSERT`, and fixed
//! auxiliary seed rows. All I/O belongs to the caller.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod literal;
pub mod schema;
pub mod script;
pub mod statement;

// Re-export main types for convenience
pub use crate::{
    config::{ConversionConfig, ExtractorConfig, DEFAULT_START_MARKER},
    error::{Error, ErrorCategory, Result},
    extractor::{FieldAssignment, LiteralExtractor, RawRecordBlock, Row},
    literal::{SourceValue, SqlLiteral},
    schema::{ColumnDef, ColumnKind, TableSchema},
    script::{build_seed_script, default_auxiliary_statements, SeedScript},
    statement::{convert, InsertStatement},
};
