//! Tests for [`patterns_core::init_tracing`].
//!
//! Kept in its own test binary: `init_tracing` installs the process-wide subscriber, so only one
//! test may call it successfully.

use patterns_core::init_tracing;

/// **Test: Log file path tees formatted events into the file; a second init is rejected.**
///
/// **Setup:** Temp dir with a log file path; RUST_LOG=info.
/// **Action:** `init_tracing(Some(path))`, emit an info event, then call `init_tracing` again.
/// **Expected:** File contains the event message; second call returns an error.
#[test]
fn test_init_tracing_writes_to_log_file() {
    std::env::set_var("RUST_LOG", "info");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patterns.log");
    let path_str = path.to_str().unwrap();

    init_tracing(Some(path_str)).unwrap();
    tracing::info!(request_type = "Vacation", "log file smoke event");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.is_empty());
    assert!(contents.contains("log file smoke event"));
    assert!(contents.contains("INFO"));

    assert!(init_tracing(None).is_err());
}
