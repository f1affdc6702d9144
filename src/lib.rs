//! scratch - 草稿管理内核
//!
//! 模块结构：
//! - models: 草稿名称解析（Scratch, ScratchName）
//! - kernel: 配置快照、动作与副作用、草稿管理器（ScratchConfig, Action, Effect, Store）
//! - kernel::services: 端口与适配器（文件系统、配置持久化、编辑器跟踪、消息总线）
//! - logging: tracing 日志初始化

pub mod kernel;
pub mod logging;
pub mod models;
