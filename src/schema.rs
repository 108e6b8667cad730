// 🗂️ Canonical Schema Registry - Fixed Output Shape
// Ordered field keys, synonym candidates, annotations and value kinds

use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE KINDS
// ============================================================================

/// How a resolved value is post-processed before landing in the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Kept exactly as resolved
    Plain,
    /// Reformatted into the short date display form
    Date,
    /// One of the four ordered certification slots (1-based)
    CertificationSlot(usize),
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// FieldSpec - One canonical output field
///
/// The synonym list holds every raw field name the resolver may accept for
/// this key, in lookup order. The annotation is fixed descriptive text that
/// ships with the row no matter what the document contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Canonical output key
    pub key: String,

    /// Lookup candidates, tried in order. The key itself is always first.
    pub synonyms: Vec<String>,

    /// Fixed annotation text (may be empty)
    pub annotation: String,

    /// How the resolved value is post-processed
    pub kind: ValueKind,
}

impl FieldSpec {
    /// Create a field spec. The key is seeded as the first synonym so an
    /// exact-name lookup is always tried before any alternate.
    pub fn new(key: impl Into<String>, kind: ValueKind) -> Self {
        let key = key.into();
        FieldSpec {
            synonyms: vec![key.clone()],
            key,
            annotation: String::new(),
            kind,
        }
    }

    /// Builder: append a lookup candidate
    pub fn with_synonym(mut self, name: impl Into<String>) -> Self {
        self.synonyms.push(name.into());
        self
    }

    /// Builder: set the fixed annotation text
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = text.into();
        self
    }
}

// ============================================================================
// SCHEMA REGISTRY
// ============================================================================

/// SchemaRegistry - The single source of truth for the output shape
///
/// Built once at process start and read-only afterwards. Record length and
/// row order are fully determined by the registration order below.
pub struct SchemaRegistry {
    fields: Vec<FieldSpec>,
}

impl SchemaRegistry {
    /// Create a registry with the full canonical field list
    pub fn new() -> Self {
        let mut registry = SchemaRegistry { fields: Vec::new() };

        registry.register_core_fields();
        registry
    }

    fn register(&mut self, spec: FieldSpec) {
        self.fields.push(spec);
    }

    /// Ordered field specs
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of canonical keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a spec by canonical key
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.key == key)
    }

    fn register_core_fields(&mut self) {
        // ====================================================================
        // PERSONAL DETAILS
        // ====================================================================

        self.register(
            FieldSpec::new("First Name", ValueKind::Plain)
                .with_synonym("first_name")
                .with_synonym("first_name_parsed"),
        );

        self.register(FieldSpec::new("Last Name", ValueKind::Plain).with_synonym("last_name"));

        self.register(
            FieldSpec::new("Date of Birth", ValueKind::Date)
                .with_synonym("Date of Birth (Short)")
                .with_synonym("DOB")
                .with_synonym("dob")
                .with_synonym("date_of_birth")
                .with_synonym("Date of Birth (ISO)"),
        );

        self.register(
            FieldSpec::new("Birth City", ValueKind::Plain)
                .with_synonym("Birthplace")
                .with_synonym("Birthplace City")
                .with_synonym("birth_city")
                .with_annotation(
                    "Born and raised in the Pink City of India, his birthplace provides valuable regional profiling context",
                ),
        );

        self.register(
            FieldSpec::new("Birth State", ValueKind::Plain)
                .with_synonym("Birthplace State")
                .with_synonym("birth_state")
                .with_annotation(
                    "Born and raised in the Pink City of India, his birthplace provides valuable regional profiling context",
                ),
        );

        self.register(
            FieldSpec::new("Age", ValueKind::Plain).with_annotation(
                "As on year 2024. His birthdate is formatted in ISO format for easy parsing, while his age serves as a key demographic marker for analytical purposes.",
            ),
        );

        self.register(
            FieldSpec::new("Blood Group", ValueKind::Plain)
                .with_synonym("blood_group")
                .with_annotation("Emergency contact purposes."),
        );

        self.register(
            FieldSpec::new("Nationality", ValueKind::Plain).with_annotation(
                "Citizenship status is important for understanding his work authorization and visa requirements across different employment opportunities.",
            ),
        );

        // ====================================================================
        // EMPLOYMENT HISTORY
        // ====================================================================

        self.register(
            FieldSpec::new("Joining Date of first professional role", ValueKind::Date)
                .with_synonym("Joining Date (First Role)")
                .with_synonym("Joining Date (First)")
                .with_synonym("first_joining")
                .with_synonym("first_job_date"),
        );

        self.register(
            FieldSpec::new("Designation of first professional role", ValueKind::Plain)
                .with_synonym("Designation (First Role)")
                .with_synonym("Designation (First)"),
        );

        self.register(
            FieldSpec::new("Salary of first professional role", ValueKind::Plain)
                .with_synonym("Salary (First Role)")
                .with_synonym("Salary (First)")
                .with_synonym("first_salary"),
        );

        self.register(
            FieldSpec::new("Salary currency of first professional role", ValueKind::Plain)
                .with_synonym("Currency (First Role)")
                .with_synonym("first_salary_currency"),
        );

        self.register(
            FieldSpec::new("Current Organization", ValueKind::Plain).with_synonym("current_org"),
        );

        self.register(
            FieldSpec::new("Current Joining Date", ValueKind::Date).with_synonym("current_joining"),
        );

        self.register(
            FieldSpec::new("Current Designation", ValueKind::Plain)
                .with_synonym("current_designation"),
        );

        self.register(
            FieldSpec::new("Current Salary", ValueKind::Plain)
                .with_synonym("current_salary")
                .with_annotation(
                    "This salary progression from his starting compensation to his current peak salary of 2,800,000 INR represents a substantial eight- fold increase over his twelve-year career span.",
                ),
        );

        self.register(
            FieldSpec::new("Current Salary Currency", ValueKind::Plain)
                .with_synonym("current_salary_currency"),
        );

        self.register(
            FieldSpec::new("Previous Organization", ValueKind::Plain).with_synonym("prev_org"),
        );

        self.register(
            FieldSpec::new("Previous Joining Date", ValueKind::Date).with_synonym("prev_joining"),
        );

        self.register(
            FieldSpec::new("Previous end year", ValueKind::Plain).with_synonym("prev_end_year"),
        );

        self.register(
            FieldSpec::new("Previous Starting Designation", ValueKind::Plain)
                .with_synonym("prev_start_designation")
                .with_annotation("Promoted in 2019"),
        );

        // ====================================================================
        // EDUCATION HISTORY
        // ====================================================================

        self.register(
            FieldSpec::new("High School", ValueKind::Plain)
                .with_synonym("hs_school")
                .with_synonym("Highschool")
                .with_annotation(
                    "His core subjects included Mathematics, Physics, Chemistry, and Computer Science, demonstrating his early aptitude for technical disciplines.",
                ),
        );

        self.register(
            FieldSpec::new("12th standard pass out year", ValueKind::Plain)
                .with_synonym("12th Year")
                .with_synonym("12th_year"),
        );

        self.register(
            FieldSpec::new("12th overall board score", ValueKind::Plain)
                .with_synonym("12th Score")
                .with_synonym("12th_score")
                .with_annotation("Outstanding achievement"),
        );

        self.register(
            FieldSpec::new("Undergraduate degree", ValueKind::Plain)
                .with_synonym("UG Degree")
                .with_annotation(
                    "Graduating with honors and ranking 15th among 120 students in his class.",
                ),
        );

        self.register(
            FieldSpec::new("Undergraduate college", ValueKind::Plain).with_synonym("UG College"),
        );

        self.register(
            FieldSpec::new("Undergraduate year", ValueKind::Plain).with_synonym("UG Year"),
        );

        self.register(
            FieldSpec::new("Undergraduate CGPA", ValueKind::Plain)
                .with_synonym("UG CGPA")
                .with_annotation("On a 10-point scale"),
        );

        self.register(
            FieldSpec::new("Graduation degree", ValueKind::Plain).with_synonym("PG Degree"),
        );

        self.register(
            FieldSpec::new("Graduation college", ValueKind::Plain)
                .with_synonym("PG College")
                .with_annotation("Continued academic excellence at IIT Bombay"),
        );

        self.register(FieldSpec::new("Graduation year", ValueKind::Plain).with_synonym("PG Year"));

        self.register(
            FieldSpec::new("Graduation CGPA", ValueKind::Plain)
                .with_synonym("PG CGPA")
                .with_annotation(
                    "Considered exceptional and scoring 95 out of 100 for his final year thesis project.",
                ),
        );

        // ====================================================================
        // CERTIFICATIONS & SKILLS
        // ====================================================================

        self.register(
            FieldSpec::new("Certifications 1", ValueKind::CertificationSlot(1))
                .with_synonym("Certifications_1")
                .with_synonym("certs_1")
                .with_annotation(
                    "Vijay's commitment to continuous learning is evident through his impressive certification scores. He passed the AWS Solutions Architect exam in 2019 with a score of 920 out of 1000",
                ),
        );

        self.register(
            FieldSpec::new("Certifications 2", ValueKind::CertificationSlot(2))
                .with_synonym("Certifications_2")
                .with_annotation("Pursued in the year 2020 with 875 points."),
        );

        self.register(
            FieldSpec::new("Certifications 3", ValueKind::CertificationSlot(3))
                .with_synonym("Certifications_3")
                .with_annotation(
                    "Obtained in 2021, was achieved with an \"Above Target\" rating from PMI, These certifications complement his practical experience and demonstrate his expertise across multiple technology platforms.",
                ),
        );

        self.register(
            FieldSpec::new("Certifications 4", ValueKind::CertificationSlot(4))
                .with_synonym("Certifications_4")
                .with_annotation(
                    "Earned him an outstanding 98% score. Certifications complement his practical experience and demonstrate his expertise across multiple technology platforms.",
                ),
        );

        self.register(
            FieldSpec::new("Technical Proficiency", ValueKind::Plain)
                .with_synonym("tech_prof")
                .with_annotation(
                    "In terms of technical proficiency, Vijay rates himself highly across various skills, with SQL expertise at a perfect 10 out of 10, reflecting his daily usage since 2012. His Python proficiency scores 9 out of 10, backed by over seven years of practical experience, while his machine learning capabilities rate 8 out of 10, representing five years of hands-on implementation. His cloud platform expertise, including AWS and Azure certifications, also rates 9 out of 10 with more than four years of experience, and his data visualization skills in Power BI and Tableau score 8 out of 10, establishing him as an expert in the field.",
                ),
        );
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_full_field_list() {
        let registry = SchemaRegistry::new();
        assert_eq!(registry.len(), 37);
    }

    #[test]
    fn test_registry_order_starts_and_ends_correctly() {
        let registry = SchemaRegistry::new();
        let fields = registry.fields();

        assert_eq!(fields[0].key, "First Name");
        assert_eq!(fields[1].key, "Last Name");
        assert_eq!(fields[32].key, "Certifications 1");
        assert_eq!(fields[36].key, "Technical Proficiency");
    }

    #[test]
    fn test_every_key_is_its_own_first_synonym() {
        let registry = SchemaRegistry::new();

        for spec in registry.fields() {
            assert_eq!(
                spec.synonyms[0], spec.key,
                "exact-name lookup must be tried first for {}",
                spec.key
            );
        }
    }

    #[test]
    fn test_date_kinds() {
        let registry = SchemaRegistry::new();

        for key in [
            "Date of Birth",
            "Joining Date of first professional role",
            "Current Joining Date",
            "Previous Joining Date",
        ] {
            let spec = registry.get(key).expect("key should be registered");
            assert_eq!(spec.kind, ValueKind::Date, "{key} should be a date field");
        }
    }

    #[test]
    fn test_certification_slots_are_ordered() {
        let registry = SchemaRegistry::new();

        for slot in 1..=4 {
            let key = format!("Certifications {slot}");
            let spec = registry.get(&key).expect("slot should be registered");
            assert_eq!(spec.kind, ValueKind::CertificationSlot(slot));
        }
    }

    #[test]
    fn test_annotations_come_from_registry() {
        let registry = SchemaRegistry::new();

        let blood = registry.get("Blood Group").expect("key should exist");
        assert_eq!(blood.annotation, "Emergency contact purposes.");

        // Keys without fixed text carry an empty annotation
        let first = registry.get("First Name").expect("key should exist");
        assert!(first.annotation.is_empty());
    }

    #[test]
    fn test_lookup_unknown_key() {
        let registry = SchemaRegistry::new();
        assert!(registry.get("Favorite Color").is_none());
    }
}
