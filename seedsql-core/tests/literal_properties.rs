//! Property tests for SQL quoting and row assembly

use proptest::prelude::*;
use seedsql_core::literal::{quote_sql_string, unquote_sql_literal};
use seedsql_core::{Error, LiteralExtractor, SqlLiteral, TableSchema};

const MARKER: &str = "$countries = array(";

fn source_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "\\'"))
}

proptest! {
    #[test]
    fn text_without_marker_is_rejected(text in "[^$]{0,200}") {
        let result = LiteralExtractor::new(MARKER).extract(&text, &TableSchema::countries());
        prop_assert!(matches!(result, Err(Error::MarkerNotFound { .. })), "expected MarkerNotFound");
    }

    #[test]
    fn sql_quoting_round_trips(value in any::<String>()) {
        prop_assert_eq!(unquote_sql_literal(&quote_sql_string(&value)), Some(value));
    }

    #[test]
    fn extracted_names_round_trip(name in "[A-Za-z' .-]{0,24}") {
        let text = format!("{}array('id' => '1', 'name' => {}),", MARKER, source_quote(&name));
        let rows = LiteralExtractor::new(MARKER)
            .extract(&text, &TableSchema::countries())
            .unwrap();

        prop_assert_eq!(rows.len(), 1);
        let rendered = rows[0].get("name").unwrap().to_string();
        prop_assert_eq!(unquote_sql_literal(&rendered), Some(name.clone()));
        prop_assert_eq!(SqlLiteral::from_sql(&rendered), Some(SqlLiteral::Text(name)));
    }

    #[test]
    fn column_order_ignores_source_order(
        fields in Just(vec![
            ("id", "'42'"),
            ("name", "'Narnia'"),
            ("iso2", "'NA'"),
            ("capital", "'Cair Paravel'"),
            ("flag", "1"),
            ("wikiDataId", "NULL"),
        ]).prop_shuffle()
    ) {
        let body = fields
            .iter()
            .map(|(key, value)| format!("'{}' => {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!("{}array({}),", MARKER, body);

        let schema = TableSchema::countries();
        let rows = LiteralExtractor::new(MARKER).extract(&text, &schema).unwrap();

        prop_assert_eq!(rows[0].columns().collect::<Vec<_>>(), schema.column_names());
        let rendered = rows[0].render();
        prop_assert!(rendered.starts_with("(42, 'Narnia', NULL, NULL, 'NA', NULL, 'Cair Paravel',"));
        prop_assert!(rendered.ends_with(", 1, NULL)"));
    }
}
