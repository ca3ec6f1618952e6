//! Snapshot persistence: one pretty-printed JSON document, fully
//! overwritten on every successful run.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use sentipulse_common::ResultRecord;

/// Write `record` to `path`, creating missing parent directories. The
/// consumer contract is 4-space-indented UTF-8 JSON with non-ASCII kept
/// literal, so this uses an explicit pretty formatter rather than
/// `to_string_pretty` (which indents with 2 spaces).
///
/// Filesystem errors are fatal to the run and propagate to the caller.
pub fn persist(record: &ResultRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(path, render(record)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), score = record.sentiment_score, "Snapshot saved");
    Ok(())
}

fn render(record: &ResultRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut ser)
        .context("Failed to serialize snapshot record")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_four_space_indented_utf8() {
        let record = ResultRecord::new(0.42, 3, "Bitcoin", "cryptocurrency");
        let json = String::from_utf8(render(&record).unwrap()).unwrap();

        assert!(json.starts_with("{\n    \"sentiment_score\""));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn non_ascii_survives_literally() {
        let record = ResultRecord::new(0.0, 1, "Yükseliş", "kripto");
        let json = String::from_utf8(render(&record).unwrap()).unwrap();

        assert!(json.contains("Yükseliş"));
        assert!(!json.contains("\\u"));
    }
}
