//! Source values and SQL literals
//!
//! The source array literal and SQL escape quotes differently: the source
//! writes an embedded quote as `\'`, SQL writes it as `''`. Values are
//! unescaped from the source form when parsed and escaped into the SQL form
//! only when rendered, so a [`SqlLiteral::Text`] always holds the plain string.

use crate::schema::ColumnKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Keyword used for missing and null values on both sides
pub const NULL_KEYWORD: &str = "NULL";

static NUMERIC_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("numeric literal pattern is valid"));

/// A value as written inside a source group, after source unescaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceValue {
    /// Single-quoted string, holding the unescaped contents
    Quoted(String),
    /// The `NULL` sentinel
    Null,
    /// Anything else the field pattern admits (a run of digits)
    Bare(String),
}

impl SourceValue {
    /// Parse the raw text captured for a field value
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            return SourceValue::Quoted(unescape_source_string(&raw[1..raw.len() - 1]));
        }
        if raw == NULL_KEYWORD {
            return SourceValue::Null;
        }
        SourceValue::Bare(raw.to_string())
    }

    /// Convert into the SQL literal for a column of the given kind
    ///
    /// Quoted numbers land bare in numeric columns; everything quoted in a
    /// text column stays quoted.
    pub fn into_literal(self, kind: ColumnKind) -> SqlLiteral {
        match self {
            SourceValue::Null => SqlLiteral::Null,
            SourceValue::Bare(digits) => SqlLiteral::Number(digits),
            SourceValue::Quoted(text) => {
                if kind == ColumnKind::Numeric && is_numeric_literal(&text) {
                    SqlLiteral::Number(text)
                } else {
                    SqlLiteral::Text(text)
                }
            }
        }
    }
}

/// A rendered SQL value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    Null,
    /// Emitted without quotes
    Number(String),
    /// Unescaped string; quotes are doubled on render
    Text(String),
}

impl SqlLiteral {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlLiteral::Null)
    }

    /// Parse a rendered literal back, the inverse of [`fmt::Display`]
    pub fn from_sql(rendered: &str) -> Option<Self> {
        let rendered = rendered.trim();
        if rendered.eq_ignore_ascii_case(NULL_KEYWORD) {
            return Some(SqlLiteral::Null);
        }
        if is_numeric_literal(rendered) {
            return Some(SqlLiteral::Number(rendered.to_string()));
        }
        unquote_sql_literal(rendered).map(SqlLiteral::Text)
    }
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Null => f.write_str(NULL_KEYWORD),
            SqlLiteral::Number(n) => f.write_str(n),
            SqlLiteral::Text(s) => f.write_str(&quote_sql_string(s)),
        }
    }
}

/// Undo the source escaping: `\'` becomes `'`, other backslashes are kept
pub fn unescape_source_string(inner: &str) -> String {
    inner.replace("\\'", "'")
}

/// Double every quote character, SQL style
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Escape and wrap in single quotes
pub fn quote_sql_string(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Strip the quotes from a SQL string literal and undo quote doubling
///
/// Returns `None` if the text is not a single well-formed quoted literal.
pub fn unquote_sql_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // a lone quote would have terminated the literal
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

/// True for plain integers and decimals such as `42`, `-7` or `33.0000`
pub fn is_numeric_literal(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(text)
}
