use super::*;

#[test]
fn test_get_settings_dir() {
    let dir = get_settings_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
}

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(LOG_DIR));
}

#[test]
fn test_get_default_scratches_dir() {
    let dir = get_default_scratches_dir().unwrap();
    assert!(dir.ends_with(SCRATCHES_DIR));
    assert_ne!(Some(dir), get_log_dir());
}

#[test]
fn test_ensure_dir_creates_missing_directory() {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join("a").join("b");

    let dir = ensure_dir(Some(target.clone()), "test").unwrap();
    assert_eq!(dir, target);
    assert!(target.is_dir());

    let err = ensure_dir(None, "test").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_scratches_dir_prefers_configured_folder() {
    let root = tempfile::tempdir().unwrap();
    let folder = root.path().join("my-scratches");
    let config = ScratchConfig::DEFAULT.with_scratches_folder_path(Some(folder.clone()));

    let dir = scratches_dir(&config).unwrap();
    assert_eq!(dir, folder);
    assert!(folder.is_dir());
}

#[test]
fn test_scratches_dir_defaults_to_platform_folder() {
    assert_eq!(
        get_scratches_dir(&ScratchConfig::DEFAULT),
        get_default_scratches_dir()
    );

    let config = ScratchConfig::DEFAULT.with_scratches_folder_path(Some("/srv/notes".into()));
    assert_eq!(get_scratches_dir(&config), Some(PathBuf::from("/srv/notes")));
}
