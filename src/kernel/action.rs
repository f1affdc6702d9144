use crate::kernel::config::{AppendType, DefaultScratchMeaning};
use crate::models::Scratch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An editor focused a scratch file; `file_name` has no mnemonic marker.
    UserOpenedScratch {
        file_name: String,
    },
    UserWantsToSeeScratchesList,
    UserWantsToOpenScratch(Scratch),
    UserWantsToOpenDefaultScratch,
    UserRenamedScratch {
        scratch: Scratch,
        full_name: String,
    },
    UserMovedScratch {
        scratch: Scratch,
        shift: isize,
    },
    UserWantsToListenToClipboard(bool),
    ClipboardTextChanged(String),
    UserWantsToEnterNewScratchName,
    UserWantsToAddNewScratch {
        full_name: String,
    },
    UserWantsToDeleteScratch(Scratch),
    SetClipboardAppendType(Option<AppendType>),
    SetNewScratchAppendType(Option<AppendType>),
    SetDefaultScratchMeaning(Option<DefaultScratchMeaning>),
}
