// 📄 Extraction Engine - Narrative Pattern Rules
// Polymorphic rule system for pulling raw field values out of profile text

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// CORE TYPES
// ============================================================================

/// FieldValue - Raw value captured by an extraction rule
///
/// Most rules emit plain text; certification-style fields may carry a list
/// of entries that downstream resolution distributes across slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a list value
    pub fn list(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }

    /// A value is empty when its text trims to nothing, or the list has
    /// no non-empty elements
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Borrow the text form, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Borrow the list form, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}

/// FieldSet - Sparse mapping of raw field names to captured values
///
/// Built once per document by the DocumentParser and read-only afterwards.
/// Rules that find no match simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    fields: HashMap<String, FieldValue>,
}

impl FieldSet {
    pub fn new() -> Self {
        FieldSet {
            fields: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Case-insensitive lookup, used as the second resolution pass when an
    /// exact field name is absent
    pub fn get_ignore_case(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

// ============================================================================
// EXTRACTION RULE TRAIT
// ============================================================================

/// ExtractionRule - One independent pattern unit
///
/// Each rule is a pure function of the full document text. On a match it
/// emits its whole group of named fields; on a miss it emits nothing. A rule
/// only ever uses the first match occurrence in the text.
pub trait ExtractionRule: Send + Sync {
    /// Rule name for diagnostics
    fn name(&self) -> &str;

    /// Apply the rule to the full text
    fn apply(&self, text: &str) -> Vec<(String, FieldValue)>;
}

/// Strip thousands separators from a captured numeric string
fn strip_thousands(raw: &str) -> String {
    raw.replace(',', "")
}

// ============================================================================
// PERSONAL DETAIL RULES
// ============================================================================

/// Two capitalized tokens immediately before the birth-announcement phrase
pub struct NameRule {
    re: Regex,
}

impl NameRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(NameRule {
            re: Regex::new(r"^([A-Z][a-z]+)\s+([A-Z][a-z]+)\s+was born")?,
        })
    }
}

impl ExtractionRule for NameRule {
    fn name(&self) -> &str {
        "name"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                ("First Name".to_string(), FieldValue::text(&caps[1])),
                ("Last Name".to_string(), FieldValue::text(&caps[2])),
            ],
            None => Vec::new(),
        }
    }
}

/// Free-form date text after the birth-date anchor phrase
pub struct BirthDateRule {
    re: Regex,
}

impl BirthDateRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(BirthDateRule {
            re: Regex::new(r"born on ([A-Za-z]+ \d{1,2}, \d{4})")?,
        })
    }
}

impl ExtractionRule for BirthDateRule {
    fn name(&self) -> &str {
        "birth_date"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![("Date of Birth".to_string(), FieldValue::text(&caps[1]))],
            None => Vec::new(),
        }
    }
}

/// Integer age next to the reference-year phrase
pub struct AgeRule {
    re: Regex,
}

impl AgeRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(AgeRule {
            re: Regex::new(r"(\d+)\s+years old as of\s+(\d{4})")?,
        })
    }
}

impl ExtractionRule for AgeRule {
    fn name(&self) -> &str {
        "age"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![(
                "Age".to_string(),
                FieldValue::text(format!("{} years", &caps[1])),
            )],
            None => Vec::new(),
        }
    }
}

/// City/state pair inside the birthplace anchor phrase
pub struct BirthplaceRule {
    re: Regex,
}

impl BirthplaceRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(BirthplaceRule {
            re: Regex::new(r"in ([A-Za-z\s]+),\s*([A-Za-z\s]+), making him")?,
        })
    }
}

impl ExtractionRule for BirthplaceRule {
    fn name(&self) -> &str {
        "birthplace"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                ("Birth City".to_string(), FieldValue::text(caps[1].trim())),
                ("Birth State".to_string(), FieldValue::text(caps[2].trim())),
            ],
            None => Vec::new(),
        }
    }
}

/// Boolean-flag rule keyed on a fixed substring
///
/// When the needle appears anywhere in the text the rule emits a fixed
/// derived value; otherwise the field stays absent.
pub struct SubstringFlagRule {
    needle: &'static str,
    field: &'static str,
    value: &'static str,
}

impl SubstringFlagRule {
    pub fn new(needle: &'static str, field: &'static str, value: &'static str) -> Self {
        SubstringFlagRule {
            needle,
            field,
            value,
        }
    }

    /// Flag rule for the blood-group phrase
    pub fn blood_group() -> Self {
        SubstringFlagRule::new("O+ blood group", "Blood Group", "O+")
    }

    /// Flag rule for the nationality phrase
    pub fn nationality() -> Self {
        SubstringFlagRule::new("Indian national", "Nationality", "Indian")
    }
}

impl ExtractionRule for SubstringFlagRule {
    fn name(&self) -> &str {
        self.field
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        if text.contains(self.needle) {
            vec![(self.field.to_string(), FieldValue::text(self.value))]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// EMPLOYMENT HISTORY RULES
// ============================================================================

/// First professional role: joining date plus starting salary
///
/// The template fixes the currency and the starting designation, so both are
/// emitted as constants alongside the captured values.
pub struct FirstRoleRule {
    re: Regex,
}

impl FirstRoleRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(FirstRoleRule {
            re: Regex::new(
                r"joined his first company.* on ([A-Za-z]+ \d{1,2}, \d{4}).*annual salary of ([\d,]+)",
            )?,
        })
    }
}

impl ExtractionRule for FirstRoleRule {
    fn name(&self) -> &str {
        "first_role"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                (
                    "Joining Date (First Role)".to_string(),
                    FieldValue::text(&caps[1]),
                ),
                (
                    "Salary (First Role)".to_string(),
                    FieldValue::text(strip_thousands(&caps[2])),
                ),
                ("Currency (First Role)".to_string(), FieldValue::text("INR")),
                (
                    "Designation (First Role)".to_string(),
                    FieldValue::text("Junior Developer"),
                ),
            ],
            None => Vec::new(),
        }
    }
}

/// Current role: organization, joining date, designation and salary
pub struct CurrentRoleRule {
    re: Regex,
}

impl CurrentRoleRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(CurrentRoleRule {
            re: Regex::new(
                r"current role at ([A-Za-z\s]+) beginning on ([A-Za-z]+ \d{1,2}, \d{4}).*serves as a ([A-Za-z\s]+) earning ([\d,]+)",
            )?,
        })
    }
}

impl ExtractionRule for CurrentRoleRule {
    fn name(&self) -> &str {
        "current_role"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                (
                    "Current Organization".to_string(),
                    FieldValue::text(caps[1].trim()),
                ),
                (
                    "Current Joining Date".to_string(),
                    FieldValue::text(caps[2].trim()),
                ),
                (
                    "Current Designation".to_string(),
                    FieldValue::text(caps[3].trim()),
                ),
                (
                    "Current Salary".to_string(),
                    FieldValue::text(strip_thousands(&caps[4])),
                ),
                (
                    "Current Salary Currency".to_string(),
                    FieldValue::text("INR"),
                ),
            ],
            None => Vec::new(),
        }
    }
}

/// Previous role: organization, date range and starting designation
pub struct PreviousRoleRule {
    re: Regex,
}

impl PreviousRoleRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(PreviousRoleRule {
            re: Regex::new(
                r"worked at ([A-Za-z\s]+) from ([A-Za-z0-9 ,]+) to (\d{4}), starting as a ([A-Za-z\s]+)",
            )?,
        })
    }
}

impl ExtractionRule for PreviousRoleRule {
    fn name(&self) -> &str {
        "previous_role"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                (
                    "Previous Organization".to_string(),
                    FieldValue::text(caps[1].trim()),
                ),
                (
                    "Previous Joining Date".to_string(),
                    FieldValue::text(caps[2].trim()),
                ),
                (
                    "Previous End Year".to_string(),
                    FieldValue::text(caps[3].trim()),
                ),
                (
                    "Previous Starting Designation".to_string(),
                    FieldValue::text(caps[4].trim()),
                ),
            ],
            None => Vec::new(),
        }
    }
}

// ============================================================================
// EDUCATION HISTORY RULES
// ============================================================================

/// High school: institution, pass-out year and board score
pub struct HighSchoolRule {
    re: Regex,
}

impl HighSchoolRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(HighSchoolRule {
            re: Regex::new(
                r"high school education at ([A-Za-z' \.,-]+).*in (\d{4}), achieving.*?(\d{2}\.\d+)%",
            )?,
        })
    }
}

impl ExtractionRule for HighSchoolRule {
    fn name(&self) -> &str {
        "high_school"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                ("High School".to_string(), FieldValue::text(caps[1].trim())),
                ("12th Year".to_string(), FieldValue::text(&caps[2])),
                (
                    "12th Score".to_string(),
                    FieldValue::text(format!("{}%", &caps[3])),
                ),
            ],
            None => Vec::new(),
        }
    }
}

/// Undergraduate degree: branch, college, year and CGPA
///
/// The CGPA keeps whatever precision the document used.
pub struct UndergraduateRule {
    re: Regex,
}

impl UndergraduateRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(UndergraduateRule {
            re: Regex::new(
                r"B\.Tech in ([A-Za-z\s]+) at ([A-Za-z\s]+).* in (\d{4}) with a CGPA of ([\d\.]+)",
            )?,
        })
    }
}

impl ExtractionRule for UndergraduateRule {
    fn name(&self) -> &str {
        "undergraduate"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                (
                    "UG Degree".to_string(),
                    FieldValue::text(format!("B.Tech ({})", caps[1].trim())),
                ),
                ("UG College".to_string(), FieldValue::text(caps[2].trim())),
                ("UG Year".to_string(), FieldValue::text(&caps[3])),
                ("UG CGPA".to_string(), FieldValue::text(&caps[4])),
            ],
            None => Vec::new(),
        }
    }
}

/// Graduate degree: branch, year, CGPA and thesis score
pub struct GraduateRule {
    re: Regex,
}

impl GraduateRule {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(GraduateRule {
            re: Regex::new(
                r"M\.Tech in ([A-Za-z\s]+).* in (\d{4}), achieving.* CGPA of ([\d\.]+).*scoring (\d+) out of (\d+)",
            )?,
        })
    }
}

impl ExtractionRule for GraduateRule {
    fn name(&self) -> &str {
        "graduate"
    }

    fn apply(&self, text: &str) -> Vec<(String, FieldValue)> {
        match self.re.captures(text) {
            Some(caps) => vec![
                (
                    "PG Degree".to_string(),
                    FieldValue::text(format!("M.Tech ({})", caps[1].trim())),
                ),
                ("PG Year".to_string(), FieldValue::text(&caps[2])),
                ("PG CGPA".to_string(), FieldValue::text(&caps[3])),
                (
                    "PG Thesis Score".to_string(),
                    FieldValue::text(format!("{}/{}", &caps[4], &caps[5])),
                ),
            ],
            None => Vec::new(),
        }
    }
}

// ============================================================================
// DOCUMENT PARSER
// ============================================================================

/// DocumentParser - Applies every rule to the text and merges the results
///
/// Rules are independent: each one sees the full text regardless of whether
/// earlier rules matched, and a miss raises no error.
pub struct DocumentParser {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl DocumentParser {
    /// Build the full rule set. Compiling the patterns is the only fallible
    /// step in the pipeline.
    pub fn new() -> Result<Self> {
        let rules: Vec<Box<dyn ExtractionRule>> = vec![
            Box::new(NameRule::new()?),
            Box::new(BirthDateRule::new()?),
            Box::new(AgeRule::new()?),
            Box::new(BirthplaceRule::new()?),
            Box::new(SubstringFlagRule::blood_group()),
            Box::new(SubstringFlagRule::nationality()),
            Box::new(FirstRoleRule::new()?),
            Box::new(CurrentRoleRule::new()?),
            Box::new(PreviousRoleRule::new()?),
            Box::new(HighSchoolRule::new()?),
            Box::new(UndergraduateRule::new()?),
            Box::new(GraduateRule::new()?),
        ];

        Ok(DocumentParser { rules })
    }

    /// Run all rules over the text and merge their emissions into one set
    pub fn parse(&self, text: &str) -> FieldSet {
        let mut fields = FieldSet::new();

        for rule in &self.rules {
            for (name, value) in rule.apply(text) {
                fields.insert(name, value);
            }
        }

        fields
    }

    /// Number of rules loaded
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
