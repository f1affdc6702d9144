//! 编辑器焦点追踪
//!
//! 编辑器切换到草稿文件时，把文件名通过内核总线交给 `Store`。

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, SendError};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::kernel::services::bus::{KernelBusSender, KernelMessage};
use crate::kernel::services::ports::ScratchFileSystem;
use crate::kernel::Action;

/// Host notification that the focused editor changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub new_file: Option<PathBuf>,
}

pub struct OpenEditorTracker {
    bus: KernelBusSender,
    files: Arc<dyn ScratchFileSystem>,
}

impl OpenEditorTracker {
    pub fn new(bus: KernelBusSender, files: Arc<dyn ScratchFileSystem>) -> Self {
        Self { bus, files }
    }

    /// `Ok(true)` when the event was forwarded as `UserOpenedScratch`,
    /// `Ok(false)` when it was not about a scratch file.
    pub fn selection_changed(
        &self,
        event: &SelectionChanged,
    ) -> Result<bool, SendError<KernelMessage>> {
        let Some(path) = event.new_file.as_deref() else {
            return Ok(false);
        };
        if !self.files.is_scratch(path) {
            return Ok(false);
        }
        let Some(file_name) = path.file_name() else {
            return Ok(false);
        };

        let file_name = file_name.to_string_lossy().to_string();
        tracing::debug!(%file_name, "scratch focused");
        self.bus
            .send_action(Action::UserOpenedScratch { file_name })
            .map(|()| true)
    }

    /// Runs until the host drops its end of `events` or the `Store` side of
    /// the bus goes away.
    pub fn start_tracking(
        self,
        events: Receiver<SelectionChanged>,
    ) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("scratch-editor-tracker".to_string())
            .spawn(move || {
                for event in events {
                    if self.selection_changed(&event).is_err() {
                        tracing::debug!("kernel bus closed");
                        break;
                    }
                }
                tracing::debug!("editor tracker stopped");
            })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/editor_tracker.rs"]
mod tests;
