use super::*;
use std::io::Write;

#[test]
fn file_writer_writes_into_log_dir() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (mut writer, _guard) = file_writer(dir.path());
        writer.write_all(b"scratch log line\n").unwrap();
    }

    let logs: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);
    let name = logs[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with(LOG_FILE), "unexpected log file {}", name);
    let text = std::fs::read_to_string(&logs[0]).unwrap();
    assert!(text.contains("scratch log line"));
}
