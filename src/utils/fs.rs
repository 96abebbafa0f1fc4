use camino::Utf8Path;
use walkdir::WalkDir;

use crate::core::diagnostics::{DiagnosticSink, SkipReason};

pub struct FileUtils;

impl FileUtils {
    /// Counts regular files under `root`, recursively. Directories are not
    /// counted; subtrees that cannot be read go to the sink and are left out
    /// of the count rather than failing the walk.
    pub fn count_files(root: &Utf8Path, sink: &mut dyn DiagnosticSink) -> u64 {
        let mut count = 0;
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => count += 1,
                Ok(_) => {}
                Err(e) => {
                    let path = e.path().and_then(Utf8Path::from_path).unwrap_or(root);
                    sink.skipped(path, SkipReason::Unreadable(e.to_string()));
                }
            }
        }
        count
    }
}
