// 💾 Export Plumbing - Text Loading and Tabular Output
// Thin I/O around the pipeline; the only fatal errors in the system live here

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::record::RecordRow;

/// Read the linearized document text from disk.
///
/// Upstream document conversion hands the pipeline plain text; a missing or
/// unreadable file is the one fatal condition on the input side.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read document text: {}", path.as_ref().display()))
}

/// Write the canonical record as a CSV sheet with `#,Key,Value,Comments`
/// columns, one line per schema key.
pub fn export_record_csv<P: AsRef<Path>>(rows: &[RecordRow], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("Failed to create output sheet: {}", path.as_ref().display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write record row {}", row.index))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output sheet: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write the full raw document text as a single-column companion sheet
pub fn export_raw_text_csv<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("Failed to create raw text sheet: {}", path.as_ref().display()))?;

    writer
        .write_record(["RawText"])
        .context("Failed to write raw text header")?;
    writer
        .write_record([text])
        .context("Failed to write raw text body")?;

    writer
        .flush()
        .with_context(|| format!("Failed to flush raw text sheet: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write the canonical record as pretty-printed JSON
pub fn export_record_json<P: AsRef<Path>>(rows: &[RecordRow], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("Failed to serialize record")?;

    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write record JSON: {}", path.as_ref().display()))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
