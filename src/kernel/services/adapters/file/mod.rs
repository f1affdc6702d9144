pub mod local;
pub mod memory;

pub use local::LocalScratchFileSystem;
pub use memory::MemoryScratchFileSystem;
