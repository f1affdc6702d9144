//! Service ports: traits + data contracts.

pub mod file;
pub mod settings;

pub use file::{validate_file_name, Answer, FileError, Result as FileResult, ScratchFileSystem};
pub use settings::ScratchConfigRecord;
