//! 内存中的草稿目录，供嵌入方和测试使用

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::kernel::services::ports::file::{
    validate_file_name, Answer, FileError, Result, ScratchFileSystem,
};

pub struct MemoryScratchFileSystem {
    root: PathBuf,
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryScratchFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_files<'a, I>(root: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fs = Self::new(root);
        fs.lock().extend(
            files
                .into_iter()
                .map(|(name, text)| (name.to_string(), text.to_string())),
        );
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_name(&self, file_name: &str) -> Result<()> {
        match validate_file_name(file_name) {
            Answer::Yes => Ok(()),
            Answer::No(reason) => Err(FileError::InvalidName {
                name: file_name.to_string(),
                reason,
            }),
        }
    }
}

impl ScratchFileSystem for MemoryScratchFileSystem {
    fn list_scratch_files(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn scratch_file_exists(&self, file_name: &str) -> bool {
        self.lock().contains_key(file_name)
    }

    fn create_file(&self, file_name: &str, text: &str) -> Result<()> {
        self.check_name(file_name)?;
        let mut files = self.lock();
        if files.contains_key(file_name) {
            return Err(FileError::AlreadyExists(self.root.join(file_name)));
        }
        files.insert(file_name.to_string(), text.to_string());
        Ok(())
    }

    fn rename_file(&self, old_name: &str, new_name: &str) -> Result<()> {
        self.check_name(new_name)?;
        let mut files = self.lock();
        if files.contains_key(new_name) {
            return Err(FileError::AlreadyExists(self.root.join(new_name)));
        }
        let text = files
            .remove(old_name)
            .ok_or_else(|| FileError::NotFound(self.root.join(old_name)))?;
        files.insert(new_name.to_string(), text);
        Ok(())
    }

    fn remove_file(&self, file_name: &str) -> Result<()> {
        self.lock()
            .remove(file_name)
            .map(|_| ())
            .ok_or_else(|| FileError::NotFound(self.root.join(file_name)))
    }

    fn read_text(&self, file_name: &str) -> Result<String> {
        self.lock()
            .get(file_name)
            .cloned()
            .ok_or_else(|| FileError::NotFound(self.root.join(file_name)))
    }

    fn write_text(&self, file_name: &str, text: &str) -> Result<()> {
        match self.lock().get_mut(file_name) {
            Some(existing) => {
                *existing = text.to_string();
                Ok(())
            }
            None => Err(FileError::NotFound(self.root.join(file_name))),
        }
    }

    fn is_scratch(&self, path: &Path) -> bool {
        path.parent() == Some(self.root.as_path())
            && path
                .file_name()
                .is_some_and(|name| self.scratch_file_exists(&name.to_string_lossy()))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/memory.rs"]
mod tests;
