// 🧾 Record Assembler - Canonical Output Rows
// Drives the schema in order and attaches fixed annotations

use serde::{Deserialize, Serialize};

use crate::parser::FieldSet;
use crate::resolve::resolve_field;
use crate::schema::SchemaRegistry;

/// RecordRow - One row of the canonical record
///
/// Serde renames match the column headers of the exported sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRow {
    #[serde(rename = "#")]
    pub index: usize,

    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Value")]
    pub value: String,

    #[serde(rename = "Comments")]
    pub annotation: String,
}

/// Build the canonical record for one document.
///
/// Row count and order come from the registry alone: a field the document
/// never mentioned still gets its row, with an empty value and the registry's
/// annotation. The record is computed fresh on every call.
pub fn build_record(fields: &FieldSet, registry: &SchemaRegistry) -> Vec<RecordRow> {
    registry
        .fields()
        .iter()
        .enumerate()
        .map(|(position, spec)| RecordRow {
            index: position + 1,
            key: spec.key.clone(),
            value: resolve_field(spec, fields),
            annotation: spec.annotation.clone(),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DocumentParser;

    fn value_of<'a>(record: &'a [RecordRow], key: &str) -> &'a str {
        record
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
            .expect("key should be in the record")
    }

    #[test]
    fn test_record_shape_matches_schema() {
        let registry = SchemaRegistry::new();
        let record = build_record(&FieldSet::new(), &registry);

        assert_eq!(record.len(), registry.len());
        for (position, (row, spec)) in record.iter().zip(registry.fields()).enumerate() {
            assert_eq!(row.index, position + 1);
            assert_eq!(row.key, spec.key);
        }
    }

    #[test]
    fn test_empty_field_set_yields_empty_values_with_annotations() {
        let registry = SchemaRegistry::new();
        let record = build_record(&FieldSet::new(), &registry);

        for (row, spec) in record.iter().zip(registry.fields()) {
            assert_eq!(row.value, "");
            assert_eq!(row.annotation, spec.annotation);
        }
    }

    #[test]
    fn test_exact_key_value_is_carried_unchanged() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("Current Organization", "Tata Consultancy");

        let record = build_record(&fields, &registry);
        assert_eq!(value_of(&record, "Current Organization"), "Tata Consultancy");
    }

    #[test]
    fn test_partial_extraction_populates_only_matched_rows() {
        let registry = SchemaRegistry::new();
        let parser = DocumentParser::new().expect("rules should compile");

        let fields =
            parser.parse("He grew up in Jaipur, Rajasthan, making him fond of the desert.");
        let record = build_record(&fields, &registry);

        for row in &record {
            match row.key.as_str() {
                "Birth City" => assert_eq!(row.value, "Jaipur"),
                "Birth State" => assert_eq!(row.value, "Rajasthan"),
                _ => assert_eq!(row.value, "", "unexpected value for {}", row.key),
            }
        }
    }

    #[test]
    fn test_end_to_end_narrative() {
        let registry = SchemaRegistry::new();
        let parser = DocumentParser::new().expect("rules should compile");

        let text = "Vijay Kumar was born in the late eighties. He was born on July 1, 1988 \
and spent his childhood in Jaipur, Rajasthan, making him 36 years old as of 2024.";

        let record = build_record(&parser.parse(text), &registry);

        assert_eq!(value_of(&record, "First Name"), "Vijay");
        assert_eq!(value_of(&record, "Last Name"), "Kumar");
        assert_eq!(value_of(&record, "Date of Birth"), "1-Jul-88");
        assert_eq!(value_of(&record, "Birth City"), "Jaipur");
        assert_eq!(value_of(&record, "Birth State"), "Rajasthan");
        assert_eq!(value_of(&record, "Age"), "36 years");
    }

    #[test]
    fn test_previous_end_year_resolves_across_casing() {
        let registry = SchemaRegistry::new();
        let parser = DocumentParser::new().expect("rules should compile");

        let text = "Earlier he worked at Wipro Technologies from August 10, 2015 to 2019, \
starting as a Software Engineer.";

        let record = build_record(&parser.parse(text), &registry);
        assert_eq!(value_of(&record, "Previous end year"), "2019");
        assert_eq!(value_of(&record, "Previous Joining Date"), "10-Aug-15");
    }

    #[test]
    fn test_record_is_recomputed_fresh() {
        let registry = SchemaRegistry::new();

        let mut fields = FieldSet::new();
        fields.insert("First Name", "Vijay");
        let first = build_record(&fields, &registry);

        let second = build_record(&FieldSet::new(), &registry);

        assert_eq!(value_of(&first, "First Name"), "Vijay");
        assert_eq!(value_of(&second, "First Name"), "");
    }
}
