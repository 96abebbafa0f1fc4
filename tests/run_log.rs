mod common;

use common::{temp_root, write_log, CollectSink};
use save_keeper_lib::core::diagnostics::SkipReason;
use save_keeper_lib::core::run_log::{list_logs, parse_timestamp};

const OLDER: &str = r#"{"timestamp":"2025-01-01_10-00-00","games_backed_up":{},"total_files":0,"errors":[]}"#;
const NEWER: &str = r#"{"timestamp":"2025-06-15_18-45-30","games_backed_up":{},"total_files":2,"errors":[]}"#;

#[test]
fn missing_directory_yields_an_empty_collection() {
    let (_tmp, root) = temp_root();
    let missing = root.join("logs");

    let logs = list_logs(&missing, &mut CollectSink::default()).unwrap();

    assert!(logs.is_empty());
}

#[test]
fn malformed_file_is_skipped_without_poisoning_the_read() {
    let (_tmp, root) = temp_root();
    let logs_dir = root.join("logs");
    write_log(&logs_dir, "a.json", OLDER);
    write_log(&logs_dir, "b.json", "{ this is not json");
    write_log(&logs_dir, "c.json", NEWER);

    let mut sink = CollectSink::default();
    let logs = list_logs(&logs_dir, &mut sink).unwrap();

    let filenames: Vec<_> = logs.iter().map(|l| l.filename.as_str()).collect();
    assert_eq!(filenames, vec!["c.json", "a.json"]);

    assert_eq!(sink.skipped.len(), 1);
    assert!(sink.skipped[0].0.as_str().ends_with("b.json"));
    assert!(matches!(sink.skipped[0].1, SkipReason::Malformed(_)));
}

#[test]
fn non_json_files_are_ignored() {
    let (_tmp, root) = temp_root();
    let logs_dir = root.join("logs");
    write_log(&logs_dir, "readme.txt", "not a log");
    write_log(&logs_dir, "backup_2025-01-01_10-00-00.json", OLDER);

    let mut sink = CollectSink::default();
    let logs = list_logs(&logs_dir, &mut sink).unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].filename, "backup_2025-01-01_10-00-00.json");
    assert!(sink.skipped.is_empty());
}

#[test]
fn records_expose_per_game_details() {
    let (_tmp, root) = temp_root();
    let logs_dir = root.join("logs");
    write_log(
        &logs_dir,
        "backup.json",
        r#"{
            "timestamp": "2025-03-10_21-00-00",
            "games_backed_up": {
                "Elden Ring": {
                    "files": [
                        {"original": "C:/saves/ER0000.sl2", "backup": "loaded saves/Elden Ring/2025-03-10_21-00-00/ER0000.sl2", "size": 26214400}
                    ],
                    "count": 1,
                    "backup_dir": "loaded saves/Elden Ring/2025-03-10_21-00-00"
                }
            },
            "total_files": 1
        }"#,
    );

    let logs = list_logs(&logs_dir, &mut CollectSink::default()).unwrap();

    assert_eq!(logs.len(), 1);
    let log = &logs[0];
    assert_eq!(log.total_files, 1);
    assert!(log.errors.is_empty());

    let detail = &log.games_backed_up["Elden Ring"];
    assert_eq!(detail.count, 1);
    assert_eq!(detail.files.len(), 1);
    assert_eq!(detail.files[0].size, 26214400);
}

#[test]
fn unparsable_timestamps_sort_as_oldest() {
    let (_tmp, root) = temp_root();
    let logs_dir = root.join("logs");
    write_log(&logs_dir, "valid.json", OLDER);
    write_log(
        &logs_dir,
        "mangled.json",
        r#"{"timestamp":"not a date","games_backed_up":{},"total_files":0,"errors":[]}"#,
    );

    let logs = list_logs(&logs_dir, &mut CollectSink::default()).unwrap();

    let filenames: Vec<_> = logs.iter().map(|l| l.filename.as_str()).collect();
    assert_eq!(filenames, vec!["valid.json", "mangled.json"]);
}

#[test]
fn timestamp_parsing_matches_the_tool_layout() {
    assert!(parse_timestamp("2025-06-15_18-45-30").is_some());
    assert!(parse_timestamp("2025-06-15 18:45:30").is_none());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn missing_optional_fields_default_instead_of_rejecting() {
    let (_tmp, root) = temp_root();
    let logs_dir = root.join("logs");
    write_log(&logs_dir, "sparse.json", r#"{"timestamp":"2025-02-02_02-02-02"}"#);

    let logs = list_logs(&logs_dir, &mut CollectSink::default()).unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].total_files, 0);
    assert!(logs[0].games_backed_up.is_empty());
    assert!(logs[0].errors.is_empty());
}
