//! Service adapters: OS specific implementations.

pub mod app_dirs;
pub mod editor_tracker;
pub mod file;
pub mod settings;

pub use app_dirs::{
    ensure_log_dir, get_default_scratches_dir, get_log_dir, get_scratches_dir, get_settings_dir,
    scratches_dir,
};
pub use editor_tracker::{OpenEditorTracker, SelectionChanged};
pub use file::{LocalScratchFileSystem, MemoryScratchFileSystem};
pub use settings::{get_settings_path, ConfigPersistence, SettingsError};
