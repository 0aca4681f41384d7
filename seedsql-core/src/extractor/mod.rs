//! Literal extractor
//!
//! Pulls reference-table rows out of a source array literal such as
//!
//! ```text
//! $countries = array(
//!     array('id' => '1', 'name' => 'Afghanistan', 'flag' => 1, 'wikiDataId' => 'Q889'),
//!     array('id' => '2', 'name' => 'Aland Islands', 'flag' => 1, 'wikiDataId' => NULL),
//! );
//! ```
//!
//! Extraction is a single pass of two regular expressions over the text after
//! the start marker. Groups are matched as the shortest span between `array(`
//! and `),` and are assumed not to nest, so a value containing `),` ends its
//! group early and the remaining fields of that row come out as `NULL`.
//! Fields that cannot be read are never an error.

mod row;

pub use row::Row;

use crate::config::{ExtractorConfig, DEFAULT_START_MARKER};
use crate::error::{Error, Result};
use crate::literal::SourceValue;
use crate::schema::TableSchema;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static GROUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)array\((.*?)\),").expect("group pattern is valid"));

static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'(\w+)'\s*=>\s*('(?:\\[\s\S]|[^'])*'|NULL|\d+)").expect("field pattern is valid")
});

/// Extracts rows from a source array literal
#[derive(Debug, Clone)]
pub struct LiteralExtractor {
    start_marker: String,
    group_pattern: Regex,
    field_pattern: Regex,
}

/// Text of one bracketed group, borrowed from the input
#[derive(Debug, Clone, Copy)]
pub struct RawRecordBlock<'a> {
    text: &'a str,
    field_pattern: &'a Regex,
}

/// One `'key' => value` pair inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAssignment<'a> {
    pub key: &'a str,
    /// Value exactly as written, quotes and escapes included
    pub raw_value: &'a str,
}

impl LiteralExtractor {
    /// Extractor with the built-in group and field patterns
    pub fn new(start_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            group_pattern: GROUP_PATTERN.clone(),
            field_pattern: FIELD_PATTERN.clone(),
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;

        let group_pattern = match &config.group_pattern {
            Some(pattern) => Regex::new(pattern)?,
            None => GROUP_PATTERN.clone(),
        };
        let field_pattern = match &config.field_pattern {
            Some(pattern) => {
                let regex = Regex::new(pattern)?;
                // slot 0 is the whole match
                if regex.captures_len() < 3 {
                    return Err(Error::configuration(format!(
                        "field pattern {:?} must capture a key and a value",
                        pattern
                    )));
                }
                regex
            }
            None => FIELD_PATTERN.clone(),
        };

        Ok(Self {
            start_marker: config.start_marker.clone(),
            group_pattern,
            field_pattern,
        })
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    /// Suffix of `text` starting at the first occurrence of the start marker
    pub fn locate<'a>(&self, text: &'a str) -> Result<&'a str> {
        text.find(&self.start_marker)
            .map(|idx| &text[idx..])
            .ok_or_else(|| Error::marker_not_found(&self.start_marker))
    }

    /// All groups in `subset`, in source order
    pub fn groups<'a>(&'a self, subset: &'a str) -> Vec<RawRecordBlock<'a>> {
        self.group_pattern
            .captures_iter(subset)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| RawRecordBlock {
                text: m.as_str(),
                field_pattern: &self.field_pattern,
            })
            .collect()
    }

    /// Rows of `text` in schema column order
    ///
    /// Fails only when the start marker is missing. Zero matched groups give
    /// an empty vector.
    pub fn extract(&self, text: &str, schema: &TableSchema) -> Result<Vec<Row>> {
        let subset = self.locate(text)?;
        let groups = self.groups(subset);
        debug!(
            "Matched {} groups after marker {:?}",
            groups.len(),
            self.start_marker
        );

        let rows = groups
            .iter()
            .map(|group| Row::assemble(schema, group.values()))
            .collect();
        Ok(rows)
    }
}

impl Default for LiteralExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKER)
    }
}

impl<'a> RawRecordBlock<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Field assignments in source order, duplicates included
    pub fn fields(&self) -> Vec<FieldAssignment<'a>> {
        self.field_pattern
            .captures_iter(self.text)
            .filter_map(|caps| {
                Some(FieldAssignment {
                    key: caps.get(1)?.as_str(),
                    raw_value: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    /// Parsed values by key; a repeated key keeps its last value
    pub fn values(&self) -> HashMap<&'a str, SourceValue> {
        self.fields()
            .into_iter()
            .map(|field| (field.key, field.value()))
            .collect()
    }
}

impl FieldAssignment<'_> {
    pub fn value(&self) -> SourceValue {
        SourceValue::parse(self.raw_value)
    }
}
