//! Statistics aggregation over JSONL round logs.
//!
//! Reads a round log file (or every `.jsonl` file below a directory), orders
//! the rounds by timestamp and prints a JSON summary. Unparsable lines are
//! reported on stderr and skipped.

use crate::error::CliError;
use crate::formatters::{format_card, format_result};
use crate::io_utils::{collect_jsonl_files, read_text};
use crate::ui;
use highcard_engine::logger::{SessionSummary, read_records, sort_by_timestamp};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct StatsReport {
    files: usize,
    corrupted: usize,
    summary: SessionSummary,
}

/// Aggregates statistics from JSONL round logs.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file or a directory containing round logs
/// * `list` - Also print every round, oldest first
/// * `out` - Output stream for the report
/// * `err` - Output stream for corrupted-line warnings
pub fn handle_stats_command(
    input: &Path,
    list: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::InvalidInput(format!(
            "input not found: {}",
            input.display()
        )));
    }

    let files = collect_jsonl_files(input)?;
    let mut records = Vec::new();
    let mut corrupted = 0usize;
    for path in &files {
        let (mut recs, bad) = read_records(&read_text(path)?);
        for c in &bad {
            ui::display_warning(
                err,
                &format!("{}:{}: skipped corrupted record: {}", path.display(), c.line, c.message),
            )?;
        }
        corrupted += bad.len();
        records.append(&mut recs);
    }
    sort_by_timestamp(&mut records);

    if list {
        for r in &records {
            writeln!(
                out,
                "{} {} player {} vs house {} -> {} bet={} balance={}",
                r.ts.as_deref().unwrap_or("-"),
                r.round_id,
                format_card(&r.player_card),
                format_card(&r.house_card),
                format_result(r.result),
                r.bet,
                r.balance_after
            )?;
        }
    }

    let report = StatsReport {
        files: files.len(),
        corrupted,
        summary: SessionSummary::from_records(&records),
    };
    let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_input_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command(Path::new("nonexistent.jsonl"), false, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_stats_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        std::fs::write(&path, "").unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(&path, false, &mut out, &mut err).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["summary"]["rounds"], 0);
        assert!(v["summary"]["final_balance"].is_null());
    }
}
