//! 草稿管理器：持有当前配置快照，处理用户动作并产生副作用。
//!
//! 所有配置变化都经过 `dispatch`，一次只处理一个动作。

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::{Action, Effect, Notice, ScratchConfig};
use crate::kernel::services::bus::KernelBusReceiver;
use crate::kernel::services::ports::{Answer, ScratchFileSystem};
use crate::models::{Scratch, DEFAULT_SCRATCH_NAME};

const NEW_SCRATCH_EXTENSION: &str = "txt";
const MAX_NEW_SCRATCH_SUFFIX: usize = 100;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn merge(&mut self, other: DispatchResult) {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
    }
}

pub struct Store {
    config: ScratchConfig,
    files: Arc<dyn ScratchFileSystem>,
}

impl Store {
    pub fn new(config: ScratchConfig, files: Arc<dyn ScratchFileSystem>) -> Self {
        Self { config, files }
    }

    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    pub fn should_listen_to_clipboard(&self) -> bool {
        self.config.is_listening_to_clipboard()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut effects = Vec::new();
        let next = self.reduce(action, &mut effects);

        let state_changed = match next {
            Some(config) if config != self.config => {
                self.config = config;
                true
            }
            _ => false,
        };
        if state_changed {
            tracing::debug!(
                scratches = self.config.scratches().len(),
                "scratch config updated"
            );
            effects.insert(0, Effect::PersistConfig(self.config.to_record()));
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    /// Dispatches everything queued on the bus, in order.
    pub fn drain_bus(&mut self, rx: &mut KernelBusReceiver) -> DispatchResult {
        let mut result = DispatchResult::default();
        for action in rx.drain_actions() {
            result.merge(self.dispatch(action));
        }
        result
    }

    pub fn check_if_user_can_rename(&self, scratch: &Scratch, full_name: &str) -> Answer {
        if full_name.is_empty() {
            return Answer::no("Name cannot be empty");
        }

        let renamed = Scratch::new(full_name);
        if scratch.file_name() == renamed.file_name() {
            return Answer::Yes;
        }

        let renamed_name = renamed.name();
        let taken = self
            .config
            .scratches()
            .iter()
            .any(|it| it != scratch && it.name() == renamed_name);
        if taken {
            return Answer::no("There is already a scratch with this name");
        }

        self.files.is_valid_scratch_name(&renamed.file_name())
    }

    pub fn check_if_user_can_create(&self, full_name: &str) -> Answer {
        if full_name.is_empty() {
            return Answer::no("Name cannot be empty");
        }

        let scratch = Scratch::new(full_name);
        if !self.is_unique_scratch(&scratch.name()) {
            return Answer::no("There is already a scratch with this name");
        }

        self.files.is_valid_scratch_name(&scratch.file_name())
    }

    fn reduce(&self, action: Action, effects: &mut Vec<Effect>) -> Option<ScratchConfig> {
        match action {
            Action::UserOpenedScratch { file_name } => {
                let Some(scratch) = self.config.find_by_file_name(&file_name) else {
                    tracing::debug!(%file_name, "focused file is not a listed scratch");
                    return None;
                };
                Some(
                    self.config
                        .with_last_opened_scratch(Some(scratch.clone())),
                )
            }
            Action::UserWantsToSeeScratchesList => self.refresh_scratches_list(effects),
            Action::UserWantsToOpenScratch(scratch) => {
                if self.files.scratch_file_exists(&scratch.file_name()) {
                    effects.push(Effect::OpenScratch(scratch));
                } else {
                    tracing::warn!(file = %scratch.file_name(), "scratch file is missing");
                    effects.push(Effect::Notify(Notice::FailedToOpen(scratch.name())));
                }
                None
            }
            Action::UserWantsToOpenDefaultScratch => {
                match self.existing_default_scratch() {
                    Some(scratch) => effects.push(Effect::OpenScratch(scratch)),
                    None => effects.push(Effect::Notify(Notice::FailedToOpenDefaultScratch)),
                }
                None
            }
            Action::UserRenamedScratch { scratch, full_name } => {
                let renamed = Scratch::new(full_name);
                let (from, to) = (scratch.file_name(), renamed.file_name());
                if from != to {
                    if let Err(err) = self.files.rename_file(&from, &to) {
                        tracing::warn!(%from, %to, error = %err, "failed to rename scratch");
                        effects.push(Effect::Notify(Notice::FailedToRename(scratch.name())));
                        return None;
                    }
                }
                Some(self.config.replace(&scratch, renamed))
            }
            Action::UserMovedScratch { scratch, shift } => {
                Some(self.config.move_scratch(&scratch, shift))
            }
            Action::UserWantsToListenToClipboard(value) => {
                effects.push(Effect::Notify(Notice::ListeningToClipboard(value)));
                Some(self.config.listen_to_clipboard(value))
            }
            Action::ClipboardTextChanged(text) => {
                if !self.config.is_listening_to_clipboard() {
                    return None;
                }
                match self.existing_default_scratch() {
                    Some(scratch) => effects.push(Effect::AddTextTo {
                        scratch,
                        text,
                        append_type: self.config.clipboard_append_type(),
                    }),
                    None => effects.push(Effect::Notify(Notice::FailedToOpenDefaultScratch)),
                }
                None
            }
            Action::UserWantsToEnterNewScratchName => {
                match self.unique_new_scratch_name() {
                    Some(name) => effects.push(Effect::OpenNewScratchDialog {
                        suggested_name: format!("{}.{}", name, NEW_SCRATCH_EXTENSION),
                    }),
                    None => tracing::debug!("no free default scratch name left"),
                }
                None
            }
            Action::UserWantsToAddNewScratch { full_name } => {
                let scratch = Scratch::new(full_name);
                if let Answer::No(reason) = self.check_if_user_can_create(scratch.full_name_with_mnemonics()) {
                    tracing::warn!(name = %scratch.name(), %reason, "refused to create scratch");
                    effects.push(Effect::Notify(Notice::FailedToCreate(scratch.name())));
                    return None;
                }
                if let Err(err) = self.files.create_file(&scratch.file_name(), "") {
                    tracing::warn!(file = %scratch.file_name(), error = %err, "failed to create scratch");
                    effects.push(Effect::Notify(Notice::FailedToCreate(scratch.name())));
                    return None;
                }
                effects.push(Effect::OpenScratch(scratch.clone()));
                Some(self.config.with_added_scratch(scratch))
            }
            Action::UserWantsToDeleteScratch(scratch) => {
                if let Err(err) = self.files.remove_file(&scratch.file_name()) {
                    tracing::warn!(file = %scratch.file_name(), error = %err, "failed to delete scratch");
                    effects.push(Effect::Notify(Notice::FailedToDelete(scratch.name())));
                    return None;
                }
                Some(self.config.without_scratch(&scratch))
            }
            Action::SetClipboardAppendType(append_type) => {
                Some(self.config.with_clipboard_append_type(append_type))
            }
            Action::SetNewScratchAppendType(append_type) => {
                Some(self.config.with_new_scratch_append_type(append_type))
            }
            Action::SetDefaultScratchMeaning(meaning) => {
                Some(self.config.with_default_scratch_meaning(meaning))
            }
        }
    }

    /// Known scratches that still exist keep their order; files nobody
    /// knew about are appended unless their name does not parse back to
    /// the same file.
    fn refresh_scratches_list(&self, effects: &mut Vec<Effect>) -> Option<ScratchConfig> {
        let file_names = match self.files.list_scratch_files() {
            Ok(file_names) => file_names,
            Err(err) => {
                tracing::warn!(error = %err, "failed to list scratch files");
                effects.push(Effect::Notify(Notice::FailedToListScratches));
                return None;
            }
        };

        let on_disk: FxHashSet<&str> = file_names.iter().map(String::as_str).collect();
        let mut scratches: Vec<Scratch> = self
            .config
            .scratches()
            .iter()
            .filter(|it| on_disk.contains(it.file_name().as_str()))
            .cloned()
            .collect();
        let kept = scratches.len();

        let known: FxHashSet<String> = scratches.iter().map(Scratch::file_name).collect();
        scratches.extend(
            file_names
                .iter()
                .filter(|file_name| !known.contains(file_name.as_str()))
                .filter_map(|file_name| {
                    let scratch = Scratch::new(file_name.as_str());
                    // `&` and a trailing `.` do not survive parsing.
                    if scratch.file_name() != *file_name {
                        tracing::warn!(%file_name, "file name cannot be a scratch name, skipped");
                        return None;
                    }
                    Some(scratch)
                }),
        );

        let changed =
            scratches.len() != kept || kept != self.config.scratches().len();
        effects.push(Effect::DisplayScratchesList(scratches.clone()));
        changed.then(|| self.config.with_scratches(scratches))
    }

    fn existing_default_scratch(&self) -> Option<Scratch> {
        let scratch = self.config.default_scratch()?;
        if self.files.scratch_file_exists(&scratch.file_name()) {
            Some(scratch.clone())
        } else {
            tracing::warn!(file = %scratch.file_name(), "default scratch file is missing");
            None
        }
    }

    fn unique_new_scratch_name(&self) -> Option<String> {
        std::iter::once(DEFAULT_SCRATCH_NAME.to_string())
            .chain((1..MAX_NEW_SCRATCH_SUFFIX).map(|i| format!("{}{}", DEFAULT_SCRATCH_NAME, i)))
            .find(|name| self.is_unique_scratch(name))
    }

    fn is_unique_scratch(&self, name: &str) -> bool {
        !self.config.scratches().iter().any(|it| it.name() == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
