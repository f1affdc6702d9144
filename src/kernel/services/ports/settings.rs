use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kernel::config::{AppendType, DefaultScratchMeaning};

/// Flat, serialization-ready projection of `ScratchConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchConfigRecord {
    #[serde(default)]
    pub listen_to_clipboard: bool,
    #[serde(default)]
    pub full_scratch_names_ordered: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_scratch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard_append_type: Option<AppendType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_scratch_append_type: Option<AppendType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scratch_meaning: Option<DefaultScratchMeaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratches_folder_path: Option<PathBuf>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
