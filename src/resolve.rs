// 🔎 Field Resolver - Synonym Fallback Resolution
// Maps a canonical field spec onto the best available raw value

use crate::dates::normalize_short_date;
use crate::parser::{FieldSet, FieldValue};
use crate::schema::{FieldSpec, ValueKind};

/// List-valued field consulted when distributing certifications across slots
const CERT_LIST_FIELD: &str = "Certifications";

/// Combined-string fields consulted when no list was captured
const CERT_COMBINED_FIELDS: [&str; 3] = ["Certifications (raw)", "Certifications", "certifications"];

/// Number of certification slots in the record
const CERT_SLOTS: usize = 4;

/// Return the first candidate whose mapped value is present and non-empty.
///
/// Candidates are scanned twice: once with exact names, then again with
/// case-insensitive comparison. This is a pure function of its inputs and is
/// independent of schema iteration.
pub fn first_non_empty<'a, S: AsRef<str>>(
    candidates: &[S],
    fields: &'a FieldSet,
) -> Option<&'a FieldValue> {
    for candidate in candidates {
        if let Some(value) = fields.get(candidate.as_ref()) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    for candidate in candidates {
        if let Some(value) = fields.get_ignore_case(candidate.as_ref()) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    None
}

/// Render a raw value as a single record cell. Text is trimmed; list
/// elements are trimmed, filtered and joined with "; ".
pub fn render(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.trim().to_string(),
        FieldValue::List(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
    }
}

/// Resolve one canonical field against the extracted field set.
///
/// Never fails: the worst case for any kind is an empty string.
pub fn resolve_field(spec: &FieldSpec, fields: &FieldSet) -> String {
    match spec.kind {
        ValueKind::Plain => first_non_empty(&spec.synonyms, fields)
            .map(render)
            .unwrap_or_default(),
        ValueKind::Date => {
            let raw = first_non_empty(&spec.synonyms, fields)
                .map(render)
                .unwrap_or_default();
            if raw.is_empty() {
                raw
            } else {
                normalize_short_date(&raw)
            }
        }
        ValueKind::CertificationSlot(slot) => resolve_certification_slot(spec, slot, fields),
    }
}

/// Certification slots resolve in three steps: a dedicated per-slot field
/// name, then element-wise distribution of a captured list, then positional
/// pieces of a combined string split on the sentence terminator. Splitting
/// on '.' mis-splits dotted abbreviations; that is the documented behavior.
fn resolve_certification_slot(spec: &FieldSpec, slot: usize, fields: &FieldSet) -> String {
    if let Some(value) = first_non_empty(&spec.synonyms, fields) {
        return render(value);
    }

    let idx = slot.saturating_sub(1);

    if let Some(FieldValue::List(items)) = fields.get(CERT_LIST_FIELD) {
        if let Some(item) = items.get(idx) {
            let item = item.trim();
            if !item.is_empty() {
                return item.to_string();
            }
        }
    }

    if let Some(FieldValue::Text(raw)) = first_non_empty(&CERT_COMBINED_FIELDS, fields) {
        let pieces: Vec<&str> = raw
            .split('.')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .take(CERT_SLOTS)
            .collect();

        if let Some(piece) = pieces.get(idx) {
            return (*piece).to_string();
        }
    }

    String::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;

    fn spec_for(registry: &SchemaRegistry, key: &str) -> FieldSpec {
        registry.get(key).expect("key should be registered").clone()
    }

    #[test]
    fn test_exact_name_wins() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("First Name", "Vijay");
        fields.insert("first_name", "Wrong");

        let spec = spec_for(&registry, "First Name");
        assert_eq!(resolve_field(&spec, &fields), "Vijay");
    }

    #[test]
    fn test_synonym_fallback_in_order() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("first_name", "Vijay");

        let spec = spec_for(&registry, "First Name");
        assert_eq!(resolve_field(&spec, &fields), "Vijay");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("First Name", "");
        fields.insert("first_name", "Vijay");

        let spec = spec_for(&registry, "First Name");
        assert_eq!(resolve_field(&spec, &fields), "Vijay");
    }

    #[test]
    fn test_case_insensitive_second_pass() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();

        // The previous-role rule emits this casing; the canonical key is
        // "Previous end year"
        fields.insert("Previous End Year", "2019");

        let spec = spec_for(&registry, "Previous end year");
        assert_eq!(resolve_field(&spec, &fields), "2019");
    }

    #[test]
    fn test_resolution_miss_yields_empty_string() {
        let registry = SchemaRegistry::new();
        let fields = FieldSet::new();

        let spec = spec_for(&registry, "Nationality");
        assert_eq!(resolve_field(&spec, &fields), "");
    }

    #[test]
    fn test_list_values_join_with_semicolons() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert(
            "Technical Proficiency",
            vec![
                "SQL".to_string(),
                String::new(),
                " Python ".to_string(),
            ],
        );

        let spec = spec_for(&registry, "Technical Proficiency");
        assert_eq!(resolve_field(&spec, &fields), "SQL; Python");
    }

    #[test]
    fn test_date_kind_is_normalized() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("Date of Birth", "July 1, 1988");

        let spec = spec_for(&registry, "Date of Birth");
        assert_eq!(resolve_field(&spec, &fields), "1-Jul-88");
    }

    #[test]
    fn test_date_kind_passes_through_unparseable_text() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("Current Joining Date", "sometime in spring");

        let spec = spec_for(&registry, "Current Joining Date");
        assert_eq!(resolve_field(&spec, &fields), "sometime in spring");
    }

    #[test]
    fn test_certification_list_distributes_across_slots() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert(
            "Certifications",
            vec!["A".to_string(), "B".to_string()],
        );

        for (key, expected) in [
            ("Certifications 1", "A"),
            ("Certifications 2", "B"),
            ("Certifications 3", ""),
            ("Certifications 4", ""),
        ] {
            let spec = spec_for(&registry, key);
            assert_eq!(resolve_field(&spec, &fields), expected, "slot {key}");
        }
    }

    #[test]
    fn test_dedicated_slot_field_beats_list() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert(
            "Certifications",
            vec!["A".to_string(), "B".to_string()],
        );
        fields.insert("Certifications 1", "AWS Solutions Architect");

        let spec = spec_for(&registry, "Certifications 1");
        assert_eq!(resolve_field(&spec, &fields), "AWS Solutions Architect");

        // Slot 2 still comes from the list
        let spec = spec_for(&registry, "Certifications 2");
        assert_eq!(resolve_field(&spec, &fields), "B");
    }

    #[test]
    fn test_combined_string_splits_on_sentence_terminator() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert(
            "Certifications (raw)",
            "AWS Solutions Architect. Azure Fundamentals. PMP",
        );

        for (key, expected) in [
            ("Certifications 1", "AWS Solutions Architect"),
            ("Certifications 2", "Azure Fundamentals"),
            ("Certifications 3", "PMP"),
            ("Certifications 4", ""),
        ] {
            let spec = spec_for(&registry, key);
            assert_eq!(resolve_field(&spec, &fields), expected, "slot {key}");
        }
    }

    #[test]
    fn test_combined_string_caps_at_four_pieces() {
        let registry = SchemaRegistry::new();
        let mut fields = FieldSet::new();
        fields.insert("Certifications (raw)", "A. B. C. D. E");

        let spec = spec_for(&registry, "Certifications 4");
        assert_eq!(resolve_field(&spec, &fields), "D");
    }

    #[test]
    fn test_first_non_empty_is_usable_standalone() {
        let mut fields = FieldSet::new();
        fields.insert("dob", "1988-07-01");

        let found = first_non_empty(&["Date of Birth", "DOB", "dob"], &fields);
        assert_eq!(found, Some(&FieldValue::text("1988-07-01")));

        let missing = first_non_empty(&["Nationality"], &fields);
        assert!(missing.is_none());
    }

    #[test]
    fn test_render_trims_text() {
        assert_eq!(render(&FieldValue::text("  Jaipur  ")), "Jaipur");
    }
}
