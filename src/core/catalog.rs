use camino::{Utf8Path, Utf8PathBuf};

use crate::core::diagnostics::{DiagnosticSink, SkipReason};
use crate::models::catalog::{Catalog, SaveBackup};
use crate::models::error::SkError;
use crate::utils::fs::FileUtils;
use crate::utils::time::unix_millis;

/// Walks `root` as `game -> timestamped backup directory` and rebuilds the
/// catalog from what is on disk. A missing root is an ordinary empty state;
/// only a root that exists but cannot be enumerated is an error. Everything
/// deeper degrades through the sink, so a backup written or removed while we
/// walk shows up partially or not at all instead of poisoning the read.
pub fn list_backups(root: &Utf8Path, sink: &mut dyn DiagnosticSink) -> Result<Catalog, SkError> {
    if !root.exists() {
        return Ok(Catalog::new());
    }

    let mut catalog = Catalog::new();

    for entry in std::fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                sink.skipped(root, SkipReason::Unreadable(e.to_string()));
                continue;
            }
        };

        let Ok(game) = entry.file_name().into_string() else {
            sink.skipped(root, SkipReason::Unreadable("non-UTF-8 entry name".into()));
            continue;
        };
        let Ok(game_path) = Utf8PathBuf::from_path_buf(entry.path()) else {
            continue;
        };
        if !game_path.is_dir() {
            continue;
        }

        let backups = read_game_backups(&game_path, sink);
        if !backups.is_empty() {
            catalog.insert(game, backups);
        }
    }

    Ok(catalog)
}

fn read_game_backups(game_path: &Utf8Path, sink: &mut dyn DiagnosticSink) -> Vec<SaveBackup> {
    let entries = match std::fs::read_dir(game_path) {
        Ok(entries) => entries,
        Err(e) => {
            sink.skipped(game_path, SkipReason::Unreadable(e.to_string()));
            return Vec::new();
        }
    };

    let mut backups = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                sink.skipped(game_path, SkipReason::Unreadable(e.to_string()));
                continue;
            }
        };

        let Ok(timestamp) = entry.file_name().into_string() else {
            sink.skipped(game_path, SkipReason::Unreadable("non-UTF-8 entry name".into()));
            continue;
        };
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.path()) else {
            continue;
        };
        if !path.is_dir() {
            continue;
        }

        // The entry can vanish between enumeration and stat while the tool
        // is rewriting the tree; treat that as "not there".
        let created = match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(modified) => unix_millis(modified),
            Err(e) => {
                sink.skipped(&path, SkipReason::Unreadable(e.to_string()));
                continue;
            }
        };

        let file_count = FileUtils::count_files(&path, sink);

        backups.push(SaveBackup {
            timestamp,
            path,
            file_count,
            created,
        });
    }

    // Stable sort keeps enumeration order among equal mtimes, so one read is
    // always internally consistent.
    backups.sort_by(|a, b| b.created.cmp(&a.created));
    backups
}
