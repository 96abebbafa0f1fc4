use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use specta::Type;

/// One file copied by the backup tool, as recorded in its run log.
#[derive(Type, Serialize, Deserialize, Clone, Debug)]
pub struct BackedUpFile {
    pub original: String,
    pub backup: String,
    #[serde(default)]
    pub size: u64,
}

#[derive(Type, Serialize, Deserialize, Clone, Debug, Default)]
pub struct GameBackupSummary {
    #[serde(default)]
    pub files: Vec<BackedUpFile>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub backup_dir: String,
}

/// Raw record as persisted by the tool, one JSON file per run. Lenient on
/// purpose: a record missing a field still loads, only shape errors reject it.
#[derive(Type, Serialize, Deserialize, Clone, Debug, Default)]
pub struct RunRecord {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub games_backed_up: BTreeMap<String, GameBackupSummary>,
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A run record augmented with the file it was read from.
#[derive(Type, Serialize, Clone, Debug)]
pub struct RunLog {
    pub filename: String,
    pub timestamp: String,
    pub games_backed_up: BTreeMap<String, GameBackupSummary>,
    pub total_files: u64,
    pub errors: Vec<String>,
}

impl RunLog {
    pub fn from_record(filename: String, record: RunRecord) -> Self {
        Self {
            filename,
            timestamp: record.timestamp,
            games_backed_up: record.games_backed_up,
            total_files: record.total_files,
            errors: record.errors,
        }
    }
}
