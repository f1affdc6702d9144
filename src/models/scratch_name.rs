//! 草稿名解析：原始名 -> 名称 / 扩展名 / 助记符
//!
//! 原始名里的 `&` 标记它后面的字符为助记符，最后一个 `.` 分隔扩展名。
//! 解析是全函数，任何输入都有结果。

pub const MNEMONIC_MARKER: char = '&';
pub const EXTENSION_SEPARATOR: char = '.';
pub const DEFAULT_SCRATCH_NAME: &str = "scratch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchName {
    pub name: String,
    pub extension: String,
    pub mnemonic: Option<char>,
}

impl ScratchName {
    pub fn parse(raw: &str) -> Self {
        let mnemonic = raw
            .split_once(MNEMONIC_MARKER)
            .and_then(|(_, rest)| rest.chars().next())
            .filter(|ch| *ch != MNEMONIC_MARKER);

        let (name, extension) = match raw.rfind(EXTENSION_SEPARATOR) {
            Some(idx) => (&raw[..idx], &raw[idx + EXTENSION_SEPARATOR.len_utf8()..]),
            None => (raw, ""),
        };

        let mut name = strip_markers(name);
        if name.is_empty() {
            name = DEFAULT_SCRATCH_NAME.to_string();
        }

        Self {
            name,
            extension: strip_markers(extension),
            mnemonic,
        }
    }

    /// `name.extension`, or just `name` when there is no extension.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}{}{}", self.name, EXTENSION_SEPARATOR, self.extension)
        }
    }
}

fn strip_markers(value: &str) -> String {
    value.chars().filter(|ch| *ch != MNEMONIC_MARKER).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/models/scratch_name.rs"]
mod tests;
