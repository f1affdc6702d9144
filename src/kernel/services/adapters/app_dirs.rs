//! 应用目录
//!
//! 跨平台的配置 / 数据目录：
//! - macOS: ~/Library/Application Support/scratch
//! - Linux: $XDG_CONFIG_HOME/scratch 与 $XDG_DATA_HOME/scratch
//! - Windows: %APPDATA%\scratch

use std::path::{Path, PathBuf};

use crate::kernel::ScratchConfig;

const APP_NAME: &str = "scratch";
const LOG_DIR: &str = "logs";
const SCRATCHES_DIR: &str = "scratches";

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        xdg_or_home("XDG_CONFIG_HOME", ".config")
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn get_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        xdg_or_home("XDG_DATA_HOME", ".local/share")
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn dirs_path_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn xdg_or_home(xdg_var: &str, home_relative: &str) -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var(xdg_var) {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(home_relative).join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn dirs_path_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// 配置文件所在目录
pub fn get_settings_dir() -> Option<PathBuf> {
    get_config_dir()
}

/// 日志目录
pub fn get_log_dir() -> Option<PathBuf> {
    get_data_dir().map(|p| p.join(LOG_DIR))
}

/// 没有配置 `scratches_folder_path` 时草稿文件的存放目录
pub fn get_default_scratches_dir() -> Option<PathBuf> {
    get_data_dir().map(|p| p.join(SCRATCHES_DIR))
}

fn ensure_dir(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {} directory", what),
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

/// 草稿目录：优先使用配置里的 `scratches_folder_path`，否则用平台默认目录。
pub fn get_scratches_dir(config: &ScratchConfig) -> Option<PathBuf> {
    config
        .scratches_folder_path()
        .map(Path::to_path_buf)
        .or_else(get_default_scratches_dir)
}

/// 确保草稿目录存在
pub fn scratches_dir(config: &ScratchConfig) -> std::io::Result<PathBuf> {
    ensure_dir(get_scratches_dir(config), "scratches")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/app_dirs.rs"]
mod tests;
