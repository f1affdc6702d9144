//! 草稿配置：不可变快照
//!
//! 每个修改操作都返回新的 `ScratchConfig`，接收者保持不变。
//! 快照可以在线程之间共享，由 `Store` 持有唯一的“当前”快照。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kernel::services::ports::settings::ScratchConfigRecord;
use crate::models::Scratch;

/// How new text is merged into an existing scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppendType {
    Append,
    Prepend,
    Replace,
}

impl AppendType {
    /// Lines are kept apart with a newline unless one side is empty.
    pub fn merge(self, existing: &str, text: &str) -> String {
        match self {
            AppendType::Replace => text.to_string(),
            _ if existing.is_empty() => text.to_string(),
            _ if text.is_empty() => existing.to_string(),
            AppendType::Append => join_lines(existing, text),
            AppendType::Prepend => join_lines(text, existing),
        }
    }
}

fn join_lines(first: &str, second: &str) -> String {
    if first.ends_with('\n') {
        format!("{}{}", first, second)
    } else {
        format!("{}\n{}", first, second)
    }
}

/// What "open the default scratch" refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultScratchMeaning {
    Topmost,
    LastOpened,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchConfig {
    listen_to_clipboard: bool,
    scratches: Vec<Scratch>,
    last_opened_scratch: Option<Scratch>,
    clipboard_append_type: Option<AppendType>,
    new_scratch_append_type: Option<AppendType>,
    default_scratch_meaning: Option<DefaultScratchMeaning>,
    scratches_folder_path: Option<PathBuf>,
}

impl ScratchConfig {
    pub const DEFAULT: Self = Self {
        listen_to_clipboard: false,
        scratches: Vec::new(),
        last_opened_scratch: None,
        clipboard_append_type: None,
        new_scratch_append_type: None,
        default_scratch_meaning: None,
        scratches_folder_path: None,
    };

    pub fn is_listening_to_clipboard(&self) -> bool {
        self.listen_to_clipboard
    }

    pub fn scratches(&self) -> &[Scratch] {
        &self.scratches
    }

    /// May point at a scratch that is no longer listed.
    pub fn last_opened_scratch(&self) -> Option<&Scratch> {
        self.last_opened_scratch.as_ref()
    }

    pub fn clipboard_append_type(&self) -> Option<AppendType> {
        self.clipboard_append_type
    }

    pub fn new_scratch_append_type(&self) -> Option<AppendType> {
        self.new_scratch_append_type
    }

    pub fn default_scratch_meaning(&self) -> Option<DefaultScratchMeaning> {
        self.default_scratch_meaning
    }

    pub fn scratches_folder_path(&self) -> Option<&Path> {
        self.scratches_folder_path.as_deref()
    }

    pub fn listen_to_clipboard(&self, value: bool) -> Self {
        Self {
            listen_to_clipboard: value,
            ..self.clone()
        }
    }

    /// Replaces the whole list as given. Callers keep raw names unique;
    /// duplicates are neither dropped nor reordered here.
    pub fn with_scratches(&self, scratches: Vec<Scratch>) -> Self {
        Self {
            scratches,
            ..self.clone()
        }
    }

    pub fn with_last_opened_scratch(&self, scratch: Option<Scratch>) -> Self {
        Self {
            last_opened_scratch: scratch,
            ..self.clone()
        }
    }

    pub fn with_default_scratch_meaning(&self, meaning: Option<DefaultScratchMeaning>) -> Self {
        Self {
            default_scratch_meaning: meaning,
            ..self.clone()
        }
    }

    pub fn with_clipboard_append_type(&self, append_type: Option<AppendType>) -> Self {
        Self {
            clipboard_append_type: append_type,
            ..self.clone()
        }
    }

    pub fn with_new_scratch_append_type(&self, append_type: Option<AppendType>) -> Self {
        Self {
            new_scratch_append_type: append_type,
            ..self.clone()
        }
    }

    pub fn with_scratches_folder_path(&self, path: Option<PathBuf>) -> Self {
        Self {
            scratches_folder_path: path,
            ..self.clone()
        }
    }

    /// Swaps `scratch` for `renamed` in place. The last-opened pointer
    /// follows the rename.
    pub fn replace(&self, scratch: &Scratch, renamed: Scratch) -> Self {
        let scratches = self
            .scratches
            .iter()
            .map(|it| if it == scratch { renamed.clone() } else { it.clone() })
            .collect();
        let last_opened = match &self.last_opened_scratch {
            Some(last) if last == scratch => Some(renamed),
            other => other.clone(),
        };
        self.with_scratches(scratches)
            .with_last_opened_scratch(last_opened)
    }

    /// Moves `scratch` by `shift` positions, wrapping around both ends.
    pub fn move_scratch(&self, scratch: &Scratch, shift: isize) -> Self {
        let Some(old_index) = self.index_of(scratch) else {
            return self.clone();
        };
        let len = self.scratches.len() as isize;
        let new_index = (old_index as isize + shift).rem_euclid(len) as usize;

        let mut scratches = self.scratches.clone();
        let moved = scratches.remove(old_index);
        scratches.insert(new_index, moved);
        self.with_scratches(scratches)
    }

    pub fn with_added_scratch(&self, scratch: Scratch) -> Self {
        let mut scratches = self.scratches.clone();
        match self.new_scratch_append_type {
            Some(AppendType::Prepend) => scratches.insert(0, scratch),
            _ => scratches.push(scratch),
        }
        self.with_scratches(scratches)
    }

    /// Drops `scratch` from the list; `last_opened_scratch` is left as is.
    pub fn without_scratch(&self, scratch: &Scratch) -> Self {
        let scratches = self
            .scratches
            .iter()
            .filter(|it| *it != scratch)
            .cloned()
            .collect();
        self.with_scratches(scratches)
    }

    pub fn default_scratch(&self) -> Option<&Scratch> {
        match self.default_scratch_meaning {
            Some(DefaultScratchMeaning::LastOpened) => self
                .last_opened_scratch
                .as_ref()
                .filter(|last| self.scratches.contains(*last))
                .or_else(|| self.scratches.first()),
            Some(DefaultScratchMeaning::Topmost) | None => self.scratches.first(),
        }
    }

    pub fn find_by_file_name(&self, file_name: &str) -> Option<&Scratch> {
        self.scratches.iter().find(|it| it.file_name() == file_name)
    }

    pub fn index_of(&self, scratch: &Scratch) -> Option<usize> {
        self.scratches.iter().position(|it| it == scratch)
    }

    pub fn to_record(&self) -> ScratchConfigRecord {
        ScratchConfigRecord {
            listen_to_clipboard: self.listen_to_clipboard,
            full_scratch_names_ordered: self
                .scratches
                .iter()
                .map(|it| it.full_name_with_mnemonics().to_string())
                .collect(),
            last_opened_scratch: self
                .last_opened_scratch
                .as_ref()
                .map(|it| it.full_name_with_mnemonics().to_string()),
            clipboard_append_type: self.clipboard_append_type,
            new_scratch_append_type: self.new_scratch_append_type,
            default_scratch_meaning: self.default_scratch_meaning,
            scratches_folder_path: self.scratches_folder_path.clone(),
        }
    }

    /// Rebuilds a snapshot from `DEFAULT`. The last-opened name is wrapped
    /// without checking that it is listed.
    pub fn from_record(record: ScratchConfigRecord) -> Self {
        Self::DEFAULT
            .listen_to_clipboard(record.listen_to_clipboard)
            .with_scratches(
                record
                    .full_scratch_names_ordered
                    .into_iter()
                    .map(Scratch::new)
                    .collect(),
            )
            .with_last_opened_scratch(record.last_opened_scratch.map(Scratch::new))
            .with_default_scratch_meaning(record.default_scratch_meaning)
            .with_clipboard_append_type(record.clipboard_append_type)
            .with_new_scratch_append_type(record.new_scratch_append_type)
            .with_scratches_folder_path(record.scratches_folder_path)
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&ScratchConfig> for ScratchConfigRecord {
    fn from(config: &ScratchConfig) -> Self {
        config.to_record()
    }
}

impl From<ScratchConfigRecord> for ScratchConfig {
    fn from(record: ScratchConfigRecord) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config.rs"]
mod tests;
