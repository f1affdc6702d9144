//! 数据模型层

pub mod scratch;
pub mod scratch_name;

pub use scratch::Scratch;
pub use scratch_name::{ScratchName, DEFAULT_SCRATCH_NAME, MNEMONIC_MARKER};
