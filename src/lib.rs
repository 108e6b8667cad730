// Document Structuring System - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod dates;
pub mod export;
pub mod parser;
pub mod record;
pub mod resolve;
pub mod schema;

// Re-export commonly used types
pub use dates::normalize_short_date;
pub use export::{export_raw_text_csv, export_record_csv, export_record_json, load_text};
pub use parser::{
    AgeRule, BirthDateRule, BirthplaceRule, CurrentRoleRule, DocumentParser, ExtractionRule,
    FieldSet, FieldValue, FirstRoleRule, GraduateRule, HighSchoolRule, NameRule, PreviousRoleRule,
    SubstringFlagRule, UndergraduateRule,
};
pub use record::{build_record, RecordRow};
pub use resolve::{first_non_empty, render, resolve_field};
pub use schema::{FieldSpec, SchemaRegistry, ValueKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
