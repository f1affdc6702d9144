use super::*;
use crate::kernel::services::adapters::MemoryScratchFileSystem;
use crate::kernel::services::bus::kernel_bus;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

fn tracker_with_bus() -> (OpenEditorTracker, crate::kernel::services::bus::KernelBusReceiver) {
    let files = Arc::new(MemoryScratchFileSystem::with_files(
        "/scratches",
        [("scratch.txt", ""), ("notes.md", "")],
    ));
    let (tx, rx) = kernel_bus();
    (OpenEditorTracker::new(tx, files), rx)
}

fn focus(path: &str) -> SelectionChanged {
    SelectionChanged {
        new_file: Some(Path::new(path).to_path_buf()),
    }
}

#[test]
fn forwards_scratch_file_name() {
    let (tracker, mut rx) = tracker_with_bus();

    assert!(tracker.selection_changed(&focus("/scratches/notes.md")).unwrap());
    assert_eq!(
        rx.drain_actions(),
        vec![Action::UserOpenedScratch {
            file_name: "notes.md".to_string(),
        }]
    );
}

#[test]
fn ignores_non_scratch_and_empty_selection() {
    let (tracker, mut rx) = tracker_with_bus();

    assert!(!tracker.selection_changed(&focus("/project/src/main.rs")).unwrap());
    assert!(!tracker.selection_changed(&focus("/scratches/unknown.txt")).unwrap());
    assert!(!tracker
        .selection_changed(&SelectionChanged { new_file: None })
        .unwrap());
    assert!(rx.drain_actions().is_empty());
}

#[test]
fn background_tracking_stops_when_events_close() {
    let (tracker, mut rx) = tracker_with_bus();
    let (events_tx, events_rx) = mpsc::channel();

    let handle = tracker.start_tracking(events_rx).unwrap();
    events_tx.send(focus("/project/lib.rs")).unwrap();
    events_tx.send(focus("/scratches/scratch.txt")).unwrap();

    assert_eq!(
        rx.recv_action_timeout(Duration::from_secs(5)),
        Some(Action::UserOpenedScratch {
            file_name: "scratch.txt".to_string(),
        })
    );

    drop(events_tx);
    handle.join().unwrap();
    assert!(rx.drain_actions().is_empty());
}

#[test]
fn selection_reports_closed_bus() {
    let (tracker, rx) = tracker_with_bus();
    drop(rx);

    assert!(tracker.selection_changed(&focus("/project/lib.rs")).is_ok());
    assert!(tracker
        .selection_changed(&focus("/scratches/notes.md"))
        .is_err());
}

#[test]
fn background_tracking_stops_when_bus_closes() {
    let (tracker, rx) = tracker_with_bus();
    let (events_tx, events_rx) = mpsc::channel();
    drop(rx);

    let handle = tracker.start_tracking(events_rx).unwrap();
    events_tx.send(focus("/scratches/notes.md")).unwrap();

    handle.join().unwrap();
    assert!(events_tx.send(focus("/scratches/scratch.txt")).is_err());
}
