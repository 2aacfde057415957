//! 平面複製
//!
//! 將媒體檔案複製到單一目的資料夾，不保留原有的子目錄結構，
//! 檔名衝突時於副檔名前依序附加數字序號

use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use console::style;
use filetime::FileTime;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rust_i18n::t;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 複製結果統計
#[derive(Debug, Default)]
pub struct CopyResult {
    pub copied: usize,
    pub skipped: usize,
    pub interrupted: bool,
}

/// 在既有名稱集合中找出下一個可用的檔名
///
/// 名稱已被占用時依序嘗試 `stem_1.ext`、`stem_2.ext`…，
/// 對任何有限的衝突數量都會在有限步數內找到未使用的名稱
#[must_use]
pub fn next_available_name(existing: &HashSet<String>, base_name: &str) -> String {
    if !existing.contains(base_name) {
        return base_name.to_string();
    }

    let (stem, extension) = split_base_name(base_name);
    let mut counter = 1usize;
    loop {
        let candidate = format!("{stem}_{counter}{extension}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// 分離檔名主體與副檔名（取最後一個點；前導點視為隱藏檔名的一部分）
fn split_base_name(base_name: &str) -> (&str, &str) {
    match base_name.rfind('.') {
        Some(index) if index > 0 => base_name.split_at(index),
        _ => (base_name, ""),
    }
}

/// 將檔案逐一平面複製到目的資料夾
///
/// 單一檔案複製失敗只記錄並計入跳過數，不中止整體流程
pub fn copy_files_flat(
    files: &[PathBuf],
    destination: &Path,
    shutdown_signal: &Arc<AtomicBool>,
) -> Result<CopyResult> {
    ensure_directory_exists(destination)?;

    let mut existing = read_existing_names(destination)?;
    let mut result = CopyResult::default();

    let progress_bar = ProgressBar::new(files.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message(t!("media_extractor.copying").to_string());

    for file in files {
        if shutdown_signal.load(Ordering::SeqCst) {
            progress_bar.abandon_with_message(t!("common.interrupted").to_string());
            result.interrupted = true;
            break;
        }

        let Some(base_name) = file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
        else {
            result.skipped += 1;
            progress_bar.inc(1);
            continue;
        };

        let target_name = next_available_name(&existing, &base_name);
        let target_path = destination.join(&target_name);

        match copy_with_mtime(file, &target_path) {
            Ok(()) => {
                existing.insert(target_name);
                result.copied += 1;
            }
            Err(e) => {
                warn!("複製失敗 {}: {e:#}", file.display());
                progress_bar.println(format!(
                    "{} {e}",
                    style(t!("media_extractor.copy_failed", path = file.display())).red()
                ));
                result.skipped += 1;
            }
        }

        progress_bar.inc(1);
    }

    if !result.interrupted {
        progress_bar.finish_with_message(t!("media_extractor.copy_done").to_string());
    }

    Ok(result)
}

/// 讀取目的資料夾既有的檔名，衝突判斷須涵蓋先前執行留下的檔案
fn read_existing_names(destination: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    let entries = fs::read_dir(destination)
        .with_context(|| format!("無法讀取目的資料夾: {}", destination.display()))?;

    for entry in entries {
        let entry = entry?;
        names.insert(entry.file_name().to_string_lossy().to_string());
    }

    Ok(names)
}

/// 複製檔案並比照來源設定修改時間；時間設定失敗不影響複製本身
fn copy_with_mtime(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination)?;

    if let Ok(metadata) = fs::metadata(source)
        && let Ok(modified) = metadata.modified()
    {
        let _ = filetime::set_file_mtime(destination, FileTime::from_system_time(modified));
    }

    Ok(())
}
