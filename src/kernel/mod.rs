//! Headless scratch core (config/action/effect/store).

pub mod action;
pub mod config;
pub mod effect;
pub mod services;
pub mod store;

pub use action::Action;
pub use config::{AppendType, DefaultScratchMeaning, ScratchConfig};
pub use effect::{Effect, Notice, NoticeLevel};
pub use store::{DispatchResult, Store};
