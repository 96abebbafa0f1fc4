use camino::{Utf8Path, Utf8PathBuf};
use save_keeper_lib::core::diagnostics::{DiagnosticSink, SkipReason};
use std::fs;
use tempfile::TempDir;

/// Sink that records every skipped path so tests can assert on degradation.
#[derive(Default)]
pub struct CollectSink {
    pub skipped: Vec<(Utf8PathBuf, SkipReason)>,
}

impl DiagnosticSink for CollectSink {
    fn skipped(&mut self, path: &Utf8Path, reason: SkipReason) {
        self.skipped.push((path.to_owned(), reason));
    }
}

/// Fresh temp dir plus its UTF-8 path. Keep the TempDir alive for the test.
pub fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

/// Lays out one backup instance: `<root>/<game>/<timestamp>/<files...>`.
pub fn create_backup_instance(
    root: &Utf8Path,
    game: &str,
    timestamp: &str,
    files: &[&str],
) -> Utf8PathBuf {
    let dir = root.join(game).join(timestamp);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        let path = dir.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "save data").unwrap();
    }
    dir
}

pub fn write_log(dir: &Utf8Path, filename: &str, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(filename), contents).unwrap();
}
