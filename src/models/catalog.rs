use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use specta::Type;

/// One timestamped backup directory for a game. The timestamp is the
/// directory name, kept as an opaque label.
#[derive(Type, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SaveBackup {
    pub timestamp: String,
    #[specta(type = String)]
    pub path: Utf8PathBuf,
    pub file_count: u64,
    /// Directory mtime, Unix milliseconds.
    pub created: i64,
}

/// Discovered backups grouped by game, newest first within each game.
/// A game with no backup directories does not appear at all.
pub type Catalog = BTreeMap<String, Vec<SaveBackup>>;
