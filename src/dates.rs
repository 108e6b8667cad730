// 📅 Value Normalizer - Short Date Formatting
// Best-effort reformatting of loose date text into the D-Mon-YY display form

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Month-name and delimiter variants accepted after the ISO forms
const DATE_FORMATS: [&str; 5] = ["%B %d, %Y", "%b %d, %Y", "%d-%b-%y", "%d-%b-%Y", "%Y/%m/%d"];

/// Convert a loosely formatted date string into `D-Mon-YY`, e.g.
/// `"1989-03-15"` becomes `"15-Mar-89"`. The day carries no leading zero.
///
/// Known formats are tried in fixed order over the entire string. If none
/// parse, an embedded ISO date substring is used when present. A string that
/// still resists parsing is returned unchanged; this function never fails.
pub fn normalize_short_date(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return short_form(date);
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return short_form(datetime.date());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return short_form(date);
        }
    }

    if let Some(date) = embedded_iso_date(s) {
        return short_form(date);
    }

    s.to_string()
}

/// Render the canonical short display form
fn short_form(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.format("%b"), date.format("%y"))
}

/// Find a `YYYY-MM-DD` substring anywhere in the text and parse it
fn embedded_iso_date(s: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"\d{4}-\d{2}-\d{2}").ok()?;
    let found = re.find(s)?;
    NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d").ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(normalize_short_date("1989-03-15"), "15-Mar-89");
    }

    #[test]
    fn test_iso_date_time() {
        assert_eq!(normalize_short_date("1989-03-15 00:00:00"), "15-Mar-89");
    }

    #[test]
    fn test_long_month_name() {
        assert_eq!(normalize_short_date("March 15, 1989"), "15-Mar-89");
    }

    #[test]
    fn test_abbreviated_month_name() {
        assert_eq!(normalize_short_date("Jul 1, 1988"), "1-Jul-88");
    }

    #[test]
    fn test_day_has_no_leading_zero() {
        assert_eq!(normalize_short_date("July 1, 1988"), "1-Jul-88");
        assert_eq!(normalize_short_date("1988-07-01"), "1-Jul-88");
    }

    #[test]
    fn test_canonical_form_is_stable() {
        assert_eq!(normalize_short_date("15-Mar-89"), "15-Mar-89");
        assert_eq!(normalize_short_date("15-Mar-1989"), "15-Mar-89");
    }

    #[test]
    fn test_slash_delimited() {
        assert_eq!(normalize_short_date("1989/03/15"), "15-Mar-89");
    }

    #[test]
    fn test_embedded_iso_date_is_extracted() {
        assert_eq!(
            normalize_short_date("recorded 1989-03-15 at the registry"),
            "15-Mar-89"
        );
    }

    #[test]
    fn test_unparseable_text_passes_through() {
        assert_eq!(normalize_short_date("not-a-date"), "not-a-date");
        assert_eq!(normalize_short_date("sometime in spring"), "sometime in spring");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_short_date(""), "");
        assert_eq!(normalize_short_date("   "), "");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(normalize_short_date("  1989-03-15  "), "15-Mar-89");
    }
}
