use super::scratch_name::ScratchName;

/// A scratch entry, identified by its raw name (mnemonic marker included).
///
/// Two entries that display the same but carry the marker in different
/// places are different scratches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scratch {
    full_name_with_mnemonics: String,
}

impl Scratch {
    pub fn new(full_name_with_mnemonics: impl Into<String>) -> Self {
        Self {
            full_name_with_mnemonics: full_name_with_mnemonics.into(),
        }
    }

    pub fn full_name_with_mnemonics(&self) -> &str {
        &self.full_name_with_mnemonics
    }

    pub fn into_full_name(self) -> String {
        self.full_name_with_mnemonics
    }

    /// Parsed on every call; the raw name is the only stored state.
    pub fn parsed(&self) -> ScratchName {
        ScratchName::parse(&self.full_name_with_mnemonics)
    }

    pub fn name(&self) -> String {
        self.parsed().name
    }

    pub fn extension(&self) -> String {
        self.parsed().extension
    }

    pub fn mnemonic(&self) -> Option<char> {
        self.parsed().mnemonic
    }

    pub fn file_name(&self) -> String {
        self.parsed().file_name()
    }
}

impl From<&str> for Scratch {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Scratch {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Scratch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/scratch.rs"]
mod tests;
