/// End-to-end pipeline tests.
///
/// These run the real `notify` watcher against a temporary directory and
/// read updates from the pipeline channel exactly as the UI does, so the
/// whole path from OS notification to formatted message is covered with no
/// mocking.
use nasbot_core::pipeline::update::DashboardUpdate;
use nasbot_core::pipeline::{start_pipeline, PipelineHandle};
use nasbot_core::WatchError;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Start a pipeline with a no-op wake hook.
fn start(tmp: &TempDir) -> PipelineHandle {
    start_pipeline(tmp.path().to_path_buf(), Arc::new(|| {})).unwrap()
}

/// Read updates until one carries `expected` as its message, returning the
/// file count from that update's snapshot. Panics after 30 seconds.
fn wait_for_message(handle: &PipelineHandle, expected: &str) -> Option<u64> {
    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            Instant::now() < deadline,
            "no update with message {expected:?} within 30 seconds"
        );
        match handle.update_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(DashboardUpdate::Event {
                message, snapshot, ..
            }) if message.as_str() == expected => {
                return snapshot.ok().map(|s| s.file_count);
            }
            Ok(DashboardUpdate::WatchStopped { reason }) => {
                panic!("watcher stopped unexpectedly: {reason}")
            }
            Ok(_) | Err(_) => continue,
        }
    }
}

// ── Startup ──────────────────────────────────────────────────────────────────

/// A missing root must fail startup, not produce an empty view.
#[test]
fn missing_root_fails_startup() {
    let tmp = TempDir::new().unwrap();
    let result = start_pipeline(tmp.path().join("does-not-exist"), Arc::new(|| {}));
    assert!(matches!(result, Err(WatchError::RootMissing(_))));
}

// ── Scenarios ────────────────────────────────────────────────────────────────

/// Empty directory, `notes.txt` created: added message and count 0 -> 1.
#[test]
fn created_file_reports_added_and_count() {
    let tmp = TempDir::new().unwrap();
    let handle = start(&tmp);

    fs::write(tmp.path().join("notes.txt"), b"remember the milk").unwrap();

    let count = wait_for_message(&handle, "File added: notes.txt (Type: .txt)");
    assert_eq!(count, Some(1));
    handle.stop();
}

/// Deleting an extensionless file reports type `Unknown`.
#[test]
fn deleted_file_without_extension_reports_unknown() {
    let tmp = TempDir::new().unwrap();
    let report = tmp.path().join("report");
    fs::write(&report, b"q3").unwrap();
    let handle = start(&tmp);

    fs::remove_file(&report).unwrap();

    let count = wait_for_message(&handle, "File removed: report (Type: Unknown)");
    assert_eq!(count, Some(0));
    handle.stop();
}

/// Changes inside subdirectories are reported, but the count stays
/// top-level only.
#[test]
fn nested_changes_are_watched_recursively() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("photos").join("2024");
    fs::create_dir_all(&sub).unwrap();
    let handle = start(&tmp);

    fs::write(sub.join("beach.jpg"), vec![0u8; 64]).unwrap();

    let count = wait_for_message(&handle, "File added: beach.jpg (Type: .jpg)");
    assert_eq!(count, Some(1));
    handle.stop();
}

/// Repeated modifications each yield a correct, independent message.
#[test]
fn repeated_modifications_each_produce_a_message() {
    let tmp = TempDir::new().unwrap();
    let draft = tmp.path().join("draft.md");
    fs::write(&draft, b"v0").unwrap();
    let handle = start(&tmp);

    for i in 1..=3 {
        fs::write(&draft, format!("v{i}")).unwrap();
        let count = wait_for_message(&handle, "File modified: draft.md (Type: .md)");
        assert_eq!(count, Some(1));
    }
    handle.stop();
}

/// The wake hook runs for published updates.
#[test]
fn wake_hook_runs_after_updates() {
    let tmp = TempDir::new().unwrap();
    let wakes = Arc::new(AtomicUsize::new(0));
    let counter = wakes.clone();
    let handle = start_pipeline(
        tmp.path().to_path_buf(),
        Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }),
    )
    .unwrap();

    fs::write(tmp.path().join("ping.txt"), b"ping").unwrap();
    wait_for_message(&handle, "File added: ping.txt (Type: .txt)");
    assert!(wakes.load(Ordering::Relaxed) >= 1);
    handle.stop();
}

/// After `stop`, the pipeline thread exits and the channel disconnects.
#[test]
fn stop_closes_the_update_channel() {
    let tmp = TempDir::new().unwrap();
    let handle = start(&tmp);
    handle.stop();
    assert!(handle.is_stopped());

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        assert!(Instant::now() < deadline, "pipeline did not stop");
        match handle.update_rx.recv_timeout(Duration::from_millis(100)) {
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            _ => continue,
        }
    }
}
