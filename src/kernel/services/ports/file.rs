//! 草稿文件系统端口
//!
//! 草稿文件都放在同一个目录里，按文件名（不含 `&` 标记）寻址。

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::kernel::config::AppendType;

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("scratch file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("scratch file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("invalid scratch file name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Yes, or no with an explanation for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No(String),
}

impl Answer {
    pub fn no(explanation: impl Into<String>) -> Self {
        Answer::No(explanation.into())
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn is_no(&self) -> bool {
        !self.is_yes()
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            Answer::Yes => None,
            Answer::No(explanation) => Some(explanation),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No(explanation) => write!(f, "No({})", explanation),
        }
    }
}

const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// File-name rules shared by every backend.
pub fn validate_file_name(file_name: &str) -> Answer {
    if file_name.trim().is_empty() {
        return Answer::no("Name cannot be empty");
    }
    if file_name == "." || file_name == ".." {
        return Answer::no("Name cannot be a relative path");
    }
    if let Some(ch) = file_name
        .chars()
        .find(|ch| FORBIDDEN_CHARS.contains(ch) || ch.is_control())
    {
        return Answer::no(format!("Name cannot contain '{}'", ch.escape_default()));
    }
    Answer::Yes
}

pub trait ScratchFileSystem: Send + Sync {
    fn list_scratch_files(&self) -> Result<Vec<String>>;

    fn scratch_file_exists(&self, file_name: &str) -> bool;

    fn is_valid_scratch_name(&self, file_name: &str) -> Answer {
        validate_file_name(file_name)
    }

    fn create_file(&self, file_name: &str, text: &str) -> Result<()>;

    fn rename_file(&self, old_name: &str, new_name: &str) -> Result<()>;

    fn remove_file(&self, file_name: &str) -> Result<()>;

    fn read_text(&self, file_name: &str) -> Result<String>;

    fn write_text(&self, file_name: &str, text: &str) -> Result<()>;

    /// Merges `text` into an existing scratch; absent means append.
    fn add_text_to(
        &self,
        file_name: &str,
        text: &str,
        append_type: Option<AppendType>,
    ) -> Result<()> {
        let existing = self.read_text(file_name)?;
        let merged = append_type.unwrap_or(AppendType::Append).merge(&existing, text);
        self.write_text(file_name, &merged)
    }

    /// Whether an editor path points into the scratch folder.
    fn is_scratch(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
