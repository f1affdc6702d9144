//! 本地草稿目录
//!
//! 实现 ScratchFileSystem trait，所有文件都在同一个目录下

use crate::kernel::services::adapters::app_dirs::scratches_dir;
use crate::kernel::services::ports::file::{
    validate_file_name, Answer, FileError, Result, ScratchFileSystem,
};
use crate::kernel::ScratchConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct LocalScratchFileSystem {
    root: PathBuf,
}

impl LocalScratchFileSystem {
    /// Creates `root` when it does not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let root = root.canonicalize().unwrap_or(root);
        Ok(Self { root })
    }

    /// Opens the folder the config points at, or the platform default one.
    pub fn for_config(config: &ScratchConfig) -> Result<Self> {
        Self::new(scratches_dir(config)?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, file_name: &str) -> Result<PathBuf> {
        if let Answer::No(reason) = validate_file_name(file_name) {
            return Err(FileError::InvalidName {
                name: file_name.to_string(),
                reason,
            });
        }
        Ok(self.root.join(file_name))
    }
}

impl ScratchFileSystem for LocalScratchFileSystem {
    fn list_scratch_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort_by_key(|name| name.to_lowercase());
        Ok(names)
    }

    fn scratch_file_exists(&self, file_name: &str) -> bool {
        self.path_of(file_name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn create_file(&self, file_name: &str, text: &str) -> Result<()> {
        let path = self.path_of(file_name)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::AlreadyExists => FileError::AlreadyExists(path.clone()),
                _ => FileError::Io(err),
            })?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    fn rename_file(&self, old_name: &str, new_name: &str) -> Result<()> {
        let from = self.path_of(old_name)?;
        let to = self.path_of(new_name)?;
        if !from.is_file() {
            return Err(FileError::NotFound(from));
        }
        // 大小写不敏感的文件系统上，只改大小写时 `to` 会“已存在”
        let case_only = old_name.to_lowercase() == new_name.to_lowercase();
        if to.exists() && !case_only {
            return Err(FileError::AlreadyExists(to));
        }
        fs::rename(&from, &to)?;
        Ok(())
    }

    fn remove_file(&self, file_name: &str) -> Result<()> {
        let path = self.path_of(file_name)?;
        if !path.is_file() {
            return Err(FileError::NotFound(path));
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    fn read_text(&self, file_name: &str) -> Result<String> {
        let path = self.path_of(file_name)?;
        if !path.is_file() {
            return Err(FileError::NotFound(path));
        }
        Ok(fs::read_to_string(&path)?)
    }

    fn write_text(&self, file_name: &str, text: &str) -> Result<()> {
        let path = self.path_of(file_name)?;
        if !path.is_file() {
            return Err(FileError::NotFound(path));
        }
        fs::write(&path, text)?;
        Ok(())
    }

    fn is_scratch(&self, path: &Path) -> bool {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        path.parent() == Some(self.root.as_path()) && path.is_file()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
