use super::*;
use tempfile::tempdir;

#[test]
fn test_create_and_list() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path()).unwrap();

    files.create_file("scratch.txt", "hello").unwrap();
    files.create_file("Another.md", "").unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();
    fs::write(dir.path().join(".hidden"), "").unwrap();

    assert_eq!(
        files.list_scratch_files().unwrap(),
        vec!["Another.md".to_string(), "scratch.txt".to_string()]
    );
    assert!(files.scratch_file_exists("scratch.txt"));
    assert!(!files.scratch_file_exists("missing.txt"));
    assert_eq!(
        fs::read_to_string(dir.path().join("scratch.txt")).unwrap(),
        "hello"
    );
}

#[test]
fn test_create_refuses_existing_file() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path()).unwrap();

    files.create_file("scratch.txt", "first").unwrap();
    let result = files.create_file("scratch.txt", "second");
    assert!(matches!(result, Err(FileError::AlreadyExists(_))));
    assert_eq!(
        fs::read_to_string(dir.path().join("scratch.txt")).unwrap(),
        "first"
    );
}

#[test]
fn test_rename() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path()).unwrap();

    files.create_file("old.txt", "content").unwrap();
    files.rename_file("old.txt", "new.txt").unwrap();

    assert!(!files.scratch_file_exists("old.txt"));
    assert!(files.scratch_file_exists("new.txt"));

    let missing = files.rename_file("old.txt", "other.txt");
    assert!(matches!(missing, Err(FileError::NotFound(_))));

    files.create_file("taken.txt", "").unwrap();
    let taken = files.rename_file("new.txt", "taken.txt");
    assert!(matches!(taken, Err(FileError::AlreadyExists(_))));
}

#[test]
fn test_remove() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path()).unwrap();

    files.create_file("scratch.txt", "").unwrap();
    files.remove_file("scratch.txt").unwrap();
    assert!(!files.scratch_file_exists("scratch.txt"));
    assert!(matches!(
        files.remove_file("scratch.txt"),
        Err(FileError::NotFound(_))
    ));
}

#[test]
fn test_invalid_names_never_escape_root() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path().join("scratches")).unwrap();

    let result = files.create_file("../escape.txt", "");
    assert!(matches!(result, Err(FileError::InvalidName { .. })));
    assert!(!dir.path().join("escape.txt").exists());
    assert!(files.is_valid_scratch_name("../escape.txt").is_no());
}

#[test]
fn test_is_scratch() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path().join("scratches")).unwrap();
    files.create_file("scratch.txt", "").unwrap();
    fs::write(dir.path().join("project.rs"), "").unwrap();

    assert!(files.is_scratch(&files.root().join("scratch.txt")));
    assert!(!files.is_scratch(&dir.path().join("project.rs")));
    assert!(!files.is_scratch(&files.root().join("missing.txt")));
}

#[test]
fn test_add_text_to() {
    let dir = tempdir().unwrap();
    let files = LocalScratchFileSystem::new(dir.path()).unwrap();
    files.create_file("scratch.txt", "first").unwrap();

    files.add_text_to("scratch.txt", "second", None).unwrap();
    assert_eq!(files.read_text("scratch.txt").unwrap(), "first\nsecond");

    files
        .add_text_to("scratch.txt", "zero", Some(crate::kernel::AppendType::Prepend))
        .unwrap();
    assert_eq!(files.read_text("scratch.txt").unwrap(), "zero\nfirst\nsecond");

    let missing = files.write_text("missing.txt", "x");
    assert!(matches!(missing, Err(FileError::NotFound(_))));
}

#[test]
fn test_for_config_uses_configured_folder() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("notes");
    let config = ScratchConfig::DEFAULT.with_scratches_folder_path(Some(folder.clone()));

    let fs = LocalScratchFileSystem::for_config(&config).unwrap();
    fs.create_file("todo.md", "").unwrap();

    assert!(folder.join("todo.md").is_file());
    assert_eq!(fs.root(), folder.canonicalize().unwrap());
}
