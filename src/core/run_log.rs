use std::cmp::Reverse;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDateTime;

use crate::core::diagnostics::{DiagnosticSink, SkipReason};
use crate::models::error::SkError;
use crate::models::run_log::{RunLog, RunRecord};

/// Timestamp layout the backup tool embeds in its run logs.
const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Reads every `*.json` run log directly inside `dir`, newest first. Files
/// that cannot be read or parsed go to the sink and are dropped from the
/// collection; a missing directory is an ordinary empty state.
pub fn list_logs(dir: &Utf8Path, sink: &mut dyn DiagnosticSink) -> Result<Vec<RunLog>, SkError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut logs = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                sink.skipped(dir, SkipReason::Unreadable(e.to_string()));
                continue;
            }
        };

        let Ok(filename) = entry.file_name().into_string() else {
            sink.skipped(dir, SkipReason::Unreadable("non-UTF-8 entry name".into()));
            continue;
        };
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.path()) else {
            continue;
        };
        if path.extension() != Some("json") || !path.is_file() {
            continue;
        }

        match read_record(&path) {
            Ok(record) => logs.push(RunLog::from_record(filename, record)),
            Err(reason) => sink.skipped(&path, reason),
        }
    }

    // Unparsable timestamps compare as None and land after every parsed one,
    // i.e. they count as the oldest possible instant. Filename breaks ties to
    // keep the order total.
    logs.sort_by_cached_key(|log| Reverse((parse_timestamp(&log.timestamp), log.filename.clone())));

    Ok(logs)
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, RUN_TIMESTAMP_FORMAT).ok()
}

fn read_record(path: &Utf8Path) -> Result<RunRecord, SkipReason> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| SkipReason::Malformed(e.to_string()))
}
