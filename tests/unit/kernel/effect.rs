use super::*;

#[test]
fn clipboard_notices_are_informational() {
    let started = Notice::ListeningToClipboard(true);
    assert_eq!(started.level(), NoticeLevel::Info);
    assert_eq!(started.title(), "Scratch");
    assert_eq!(started.to_string(), "Started listening to clipboard");

    let stopped = Notice::ListeningToClipboard(false);
    assert_eq!(stopped.level(), NoticeLevel::Info);
    assert_eq!(stopped.to_string(), "Stopped listening to clipboard");
}

#[test]
fn failure_notices_are_untitled_warnings() {
    let cases = [
        (Notice::FailedToListScratches, "Failed to list scratches"),
        (
            Notice::FailedToOpen("todo".to_string()),
            "Failed to open scratch: 'todo'",
        ),
        (
            Notice::FailedToOpenDefaultScratch,
            "Failed to open default scratch",
        ),
        (
            Notice::FailedToRename("todo".to_string()),
            "Failed to rename scratch: todo",
        ),
        (
            Notice::FailedToCreate("todo".to_string()),
            "Failed to create scratch: 'todo'",
        ),
        (
            Notice::FailedToDelete("todo".to_string()),
            "Failed to delete scratch: 'todo'",
        ),
    ];

    for (notice, message) in cases {
        assert_eq!(notice.level(), NoticeLevel::Warning, "{:?}", notice);
        assert_eq!(notice.title(), "");
        assert_eq!(notice.to_string(), message);
    }
}
