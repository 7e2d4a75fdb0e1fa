//! Terminal rendering of command results

use crate::application::dto::ClassificationReport;
use crate::domain::services::SignatureTable;
use anyhow::{Context, Result};
use std::fmt::Write;

/// Renders a classification report as aligned text or pretty JSON
pub fn render_report(report: &ClassificationReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("Failed to serialize report");
    }

    let mut out = String::new();
    for file in &report.files {
        let detail = match (&file.error, &file.detection) {
            (Some(error), _) => format!("error: {error}"),
            (None, Some(detection)) => {
                format!("{} [{}]", detection.signature(), detection.magic_hex())
            }
            (None, None) => String::new(),
        };
        let size = file.size.map(|s| format!("{s:>12} ")).unwrap_or_default();

        writeln!(
            out,
            "{:<8} {}{} {}",
            file.file_type.extension(),
            size,
            file.path.display(),
            detail
        )?;
    }

    out.push_str(&report.summary());
    Ok(out)
}

/// Lists every known signature with its pattern
pub fn render_signatures(table: &SignatureTable) -> String {
    let mut out = String::new();
    for (file_type, signature) in table.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{:<14} {:<12} {:>2} bytes  {}",
            file_type.name(),
            signature.name(),
            signature.len(),
            signature
        );
    }
    out
}
