//! File logging through init_logging_in_dir
//!
//! Runs in its own test binary because the global subscriber can only be set
//! once per process.

use example_common::{LogTarget, init_logging, init_logging_in_dir};
use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// The non-blocking writer flushes on its own thread, so poll for the line.
fn wait_for_log_line(path: &Path, needle: &str) -> bool {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(5) {
        if fs::read_to_string(path).is_ok_and(|content| content.contains(needle)) {
            return true;
        }
        sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_file_target_installs_rolling_log() {
    let temp_dir = tempdir().unwrap();
    let log_dir = temp_dir.path().join("logs");

    let target = init_logging_in_dir("file_app", "debug", &log_dir);

    assert_eq!(*target, LogTarget::File(log_dir.clone()));
    let files: Vec<String> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1, "files: {:?}", files);
    assert!(files[0].starts_with("file_app"), "files: {:?}", files);
    assert!(files[0].ends_with(".log"), "files: {:?}", files);

    let log_file = log_dir.join(&files[0]);
    assert!(
        wait_for_log_line(&log_file, "logging initialized"),
        "initialization event missing from {}",
        log_file.display()
    );

    // Later calls keep the first target.
    assert_eq!(*init_logging("file_app", "debug", false), *target);
}
