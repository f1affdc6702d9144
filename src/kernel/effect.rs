use std::fmt;

use crate::kernel::config::AppendType;
use crate::kernel::services::ports::ScratchConfigRecord;
use crate::models::Scratch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistConfig(ScratchConfigRecord),
    OpenScratch(Scratch),
    DisplayScratchesList(Vec<Scratch>),
    OpenNewScratchDialog {
        suggested_name: String,
    },
    AddTextTo {
        scratch: Scratch,
        text: String,
        append_type: Option<AppendType>,
    },
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// 用户可见的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ListeningToClipboard(bool),
    FailedToListScratches,
    FailedToOpen(String),
    FailedToOpenDefaultScratch,
    FailedToRename(String),
    FailedToCreate(String),
    FailedToDelete(String),
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::ListeningToClipboard(_) => NoticeLevel::Info,
            _ => NoticeLevel::Warning,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::ListeningToClipboard(_) => "Scratch",
            _ => "",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ListeningToClipboard(true) => write!(f, "Started listening to clipboard"),
            Notice::ListeningToClipboard(false) => write!(f, "Stopped listening to clipboard"),
            Notice::FailedToListScratches => write!(f, "Failed to list scratches"),
            Notice::FailedToOpen(name) => write!(f, "Failed to open scratch: '{}'", name),
            Notice::FailedToOpenDefaultScratch => write!(f, "Failed to open default scratch"),
            Notice::FailedToRename(name) => write!(f, "Failed to rename scratch: {}", name),
            Notice::FailedToCreate(name) => write!(f, "Failed to create scratch: '{}'", name),
            Notice::FailedToDelete(name) => write!(f, "Failed to delete scratch: '{}'", name),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/effect.rs"]
mod tests;
