//! End-to-end extraction scenarios against the built-in countries table

use seedsql_core::{
    build_seed_script, convert, ConversionConfig, Error, LiteralExtractor, SqlLiteral, TableSchema,
};

const MARKER: &str = "$countries = array(";

const SEEDER: &str = r#"<?php

namespace Database\Seeders;

use Illuminate\Database\Seeder;
use Illuminate\Support\Facades\DB;

class CountriesSeeder extends Seeder
{
    public function run()
    {
        $countries = array(
            array('id' => '1','name' => 'Afghanistan','iso3' => 'AFG','numeric_code' => '004','iso2' => 'AF','phonecode' => '93','capital' => 'Kabul','currency' => 'AFN','currency_name' => 'Afghan afghani','currency_symbol' => '؋','tld' => '.af','native' => 'افغانستان','region' => 'Asia','subregion' => 'Southern Asia','timezones' => '[{"zoneName":"Asia/Kabul","gmtOffset":16200}]','translations' => '{"kr":"아프가니스탄","fr":"Afghanistan"}','latitude' => '33.00000000','longitude' => '65.00000000','emoji' => '🇦🇫','emojiU' => 'U+1F1E6 U+1F1EB','created_at' => '2018-07-21 01:41:03','updated_at' => '2022-05-21 13:01:16','flag' => '1','wikiDataId' => 'Q889'),
            array('id' => '106','name' => 'Côte d\'Ivoire','iso3' => 'CIV','flag' => '1','wikiDataId' => NULL),
        );

        DB::table('countries')->insert($countries);
    }
}
"#;

#[cfg(test)]
mod extraction_scenarios {
    use super::*;

    #[test]
    fn test_missing_marker_yields_no_rows() {
        let extractor = LiteralExtractor::new(MARKER);
        let result = extractor.extract("<?php\n$regions = array();", &TableSchema::countries());
        assert!(matches!(result, Err(Error::MarkerNotFound { .. })));

        let script = build_seed_script("no marker here", &ConversionConfig::default());
        assert!(script.is_err());
    }

    #[test]
    fn test_single_group_with_escaped_quote() {
        let text = r"$countries = array(array('id' => '5', 'name' => 'O\'Brien', 'flag' => NULL),";
        let rows = LiteralExtractor::new(MARKER)
            .extract(text, &TableSchema::countries())
            .unwrap();

        assert_eq!(rows.len(), 1);
        let rendered = rows[0].render();
        assert!(rendered.starts_with("(5, 'O''Brien', NULL,"));
        assert_eq!(rendered.matches("''").count(), 1);
        assert!(!rendered.contains('\\'));
        assert_eq!(rows[0].get("flag"), Some(&SqlLiteral::Null));
    }

    #[test]
    fn test_narnia_end_to_end() {
        let text = "$countries = array(array('id' => '1', 'name' => 'Narnia'),";
        let sql = convert(text, &ConversionConfig::default()).unwrap();

        let schema = TableSchema::countries();
        let nulls = vec!["NULL"; schema.columns.len() - 2].join(", ");
        let expected = format!(
            "INSERT INTO countries ({}) VALUES\n(1, 'Narnia', {});",
            schema.column_names().join(", "),
            nulls
        );
        assert_eq!(sql, expected);
        assert!(sql.starts_with("INSERT INTO countries (id, name, iso3, numeric_code,"));
    }

    #[test]
    fn test_seeder_file() {
        let rows = LiteralExtractor::new(MARKER)
            .extract(SEEDER, &TableSchema::countries())
            .unwrap();
        assert_eq!(rows.len(), 2);

        let afghanistan = &rows[0];
        assert_eq!(afghanistan.populated(), 24);
        assert_eq!(afghanistan.get("id").unwrap().to_string(), "1");
        assert_eq!(afghanistan.get("numeric_code").unwrap().to_string(), "'004'");
        assert_eq!(afghanistan.get("latitude").unwrap().to_string(), "33.00000000");
        assert_eq!(afghanistan.get("flag").unwrap().to_string(), "1");
        assert_eq!(afghanistan.get("native").unwrap().to_string(), "'افغانستان'");
        assert_eq!(
            afghanistan.get("timezones").unwrap().to_string(),
            r#"'[{"zoneName":"Asia/Kabul","gmtOffset":16200}]'"#
        );

        let ivory_coast = &rows[1];
        assert_eq!(ivory_coast.get("name").unwrap().to_string(), "'Côte d''Ivoire'");
        assert_eq!(ivory_coast.get("capital"), Some(&SqlLiteral::Null));
        assert_eq!(ivory_coast.get("wikiDataId"), Some(&SqlLiteral::Null));
    }

    #[test]
    fn test_seeder_script_layout() {
        let script = build_seed_script(SEEDER, &ConversionConfig::default()).unwrap();
        let rendered = script.render();

        let create = rendered.find("CREATE TABLE IF NOT EXISTS countries").unwrap();
        let insert = rendered.find("INSERT INTO countries").unwrap();
        let roles = rendered.find("INSERT IGNORE INTO roles").unwrap();
        assert!(create < insert && insert < roles);
        assert!(rendered.contains("'Côte d''Ivoire'"));
        assert!(rendered.ends_with("('customer', 'web', NOW(), NOW());\n"));
    }

    #[test]
    fn test_every_row_has_declared_column_order() {
        let rows = LiteralExtractor::new(MARKER)
            .extract(SEEDER, &TableSchema::countries())
            .unwrap();
        let schema = TableSchema::countries();
        for row in &rows {
            assert_eq!(row.columns().collect::<Vec<_>>(), schema.column_names());
        }
    }
}
