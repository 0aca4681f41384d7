//! Configuration for a conversion run

use crate::error::Result;
use crate::schema::TableSchema;
use crate::script::default_auxiliary_statements;
use serde::{Deserialize, Serialize};

/// Default start marker of the countries seeder
pub const DEFAULT_START_MARKER: &str = "$countries = array(";

/// Full conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// How rows are located in the source text
    pub extractor: ExtractorConfig,

    /// Destination table; fixes the rendered column order
    pub schema: TableSchema,

    /// Statements appended verbatim after the generated `INSERT`
    pub auxiliary_statements: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            schema: TableSchema::countries(),
            auxiliary_statements: default_auxiliary_statements(),
        }
    }
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.schema.validate()
    }
}

/// Literal extractor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Literal substring where the array data begins
    pub start_marker: String,

    /// Override for the group pattern; capture group 1 is the group body
    pub group_pattern: Option<String>,

    /// Override for the field pattern; captures are key and raw value
    pub field_pattern: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            group_pattern: None,
            field_pattern: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            start_marker: marker.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_marker.is_empty() {
            return Err(crate::Error::configuration("start marker is empty"));
        }
        for pattern in [&self.group_pattern, &self.field_pattern].into_iter().flatten() {
            regex::Regex::new(pattern)?;
        }
        Ok(())
    }
}
