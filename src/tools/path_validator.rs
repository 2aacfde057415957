use anyhow::{Result, bail};
use rust_i18n::t;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

/// 路徑檢查失敗的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathIssue {
    NotAbsolute,
    NotFound,
    NotADirectory,
    NotWritable,
}

impl PathIssue {
    /// 對應的使用者提示訊息
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotAbsolute => t!("path_check.not_absolute").to_string(),
            Self::NotFound => t!("path_check.not_found").to_string(),
            Self::NotADirectory => t!("path_check.not_a_directory").to_string(),
            Self::NotWritable => t!("path_check.not_writable").to_string(),
        }
    }
}

/// 檢查轉換目標目錄：必須是絕對路徑、存在、為目錄且可寫入
///
/// 純檢查函式，與輸入迴圈分離，提示迴圈只負責顯示 [`PathIssue::message`]
pub fn check_writable_directory(path: &Path) -> Result<(), PathIssue> {
    if !path.is_absolute() {
        return Err(PathIssue::NotAbsolute);
    }
    if !path.exists() {
        return Err(PathIssue::NotFound);
    }
    if !path.is_dir() {
        return Err(PathIssue::NotADirectory);
    }
    if !probe_writable(path) {
        return Err(PathIssue::NotWritable);
    }
    Ok(())
}

/// 以建立探測檔的方式確認目錄可寫入（唯讀位元在各平台上不可靠）
fn probe_writable(directory: &Path) -> bool {
    let probe = directory.join(".asset_tools_write_probe");

    match OpenOptions::new().write(true).create_new(true).open(&probe) {
        Ok(file) => {
            drop(file);
            let _ = std::fs::remove_file(&probe);
            true
        }
        // 探測檔已存在代表前次探測殘留，目錄本身可寫
        Err(e) => e.kind() == ErrorKind::AlreadyExists,
    }
}

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{}", t!("path_check.missing", path = path.display()));
    }
    if !path.is_dir() {
        bail!("{}", t!("path_check.not_directory", path = path.display()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
