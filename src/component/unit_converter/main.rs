use super::match_preview::{CONTEXT_LINES, collect_match_contexts, render_contexts};
use super::px_pattern::replace_pixels_with_rem;
use crate::tools::{check_writable_directory, normalize_extensions, scan_files_with_suffixes};
use anyhow::{Context, Result};
use console::{Term, style};
use dialoguer::{Confirm, Input};
use log::{info, warn};
use rust_i18n::t;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 像素轉 rem 元件
///
/// 互動式詢問目標目錄與副檔名，逐檔預覽比對結果並於確認後改寫
pub struct UnitConverter {
    shutdown_signal: Arc<AtomicBool>,
}

impl UnitConverter {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self, term: &Term) -> Result<()> {
        println!("{}", style(t!("unit_converter.title")).cyan().bold());

        // 取得目標目錄與副檔名，中斷時直接結束
        let Some(directory) = self.prompt_target_directory()? else {
            return Ok(());
        };
        let Some(extensions) = self.prompt_extensions()? else {
            return Ok(());
        };

        let files = scan_files_with_suffixes(&directory, &extensions)?;
        if files.is_empty() {
            println!("{}", style(t!("unit_converter.no_files")).yellow());
            return Ok(());
        }
        info!("掃描到 {} 個符合副檔名的檔案", files.len());

        let mut rewritten = 0usize;
        let mut declined = 0usize;

        for file in &files {
            // 檢查中斷訊號
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                println!("{}", style(t!("common.interrupted")).yellow());
                return Ok(());
            }

            let content = fs::read_to_string(file)
                .with_context(|| t!("unit_converter.read_failed", path = file.display()))?;

            // 沒有任何比對結果的檔案直接略過，不詢問
            let contexts = collect_match_contexts(&content, CONTEXT_LINES);
            if contexts.is_empty() {
                continue;
            }

            term.clear_screen()?;
            render_contexts(&contexts);

            if !self.confirm_rewrite(file)? {
                declined += 1;
                continue;
            }

            let (converted, replaced) = replace_pixels_with_rem(&content);
            write_atomic(file, &converted)?;
            rewritten += 1;

            info!("已改寫 {}，共 {replaced} 個像素值", file.display());
            println!(
                "{}",
                style(t!(
                    "unit_converter.file_rewritten",
                    count = replaced,
                    path = file.display()
                ))
                .green()
            );
        }

        self.print_result(files.len(), rewritten, declined);
        Ok(())
    }

    /// 詢問目標目錄，驗證失敗時重新詢問；回傳 `None` 表示收到中斷
    fn prompt_target_directory(&self) -> Result<Option<PathBuf>> {
        loop {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                return Ok(None);
            }

            let input: String = Input::new()
                .with_prompt(t!("unit_converter.prompt_directory"))
                .interact_text()?;
            let path = PathBuf::from(input.trim());

            if let Err(issue) = check_writable_directory(&path) {
                println!("{}", style(issue.message()).red());
                continue;
            }

            println!(
                "{}",
                t!("unit_converter.target_directory", path = path.display())
            );
            let confirmed = Confirm::new()
                .with_prompt(t!("common.confirm_correct"))
                .default(false)
                .interact()?;
            if confirmed {
                return Ok(Some(path));
            }
        }
    }

    /// 詢問副檔名清單並逐項列出供確認；回傳 `None` 表示收到中斷
    fn prompt_extensions(&self) -> Result<Option<Vec<String>>> {
        loop {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                return Ok(None);
            }

            let input: String = Input::new()
                .with_prompt(t!("unit_converter.prompt_extensions"))
                .interact_text()?;
            let extensions = normalize_extensions(input.trim());

            println!("{}", t!("unit_converter.extensions_header"));
            for extension in &extensions {
                println!("- *{extension}");
            }

            let confirmed = Confirm::new()
                .with_prompt(t!("common.confirm_correct"))
                .default(false)
                .interact()?;
            if confirmed {
                return Ok(Some(extensions));
            }
        }
    }

    fn confirm_rewrite(&self, file: &Path) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(t!("unit_converter.confirm_file", path = file.display()))
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn print_result(&self, scanned: usize, rewritten: usize, declined: usize) {
        println!();
        println!("{}", style(t!("unit_converter.result_title")).cyan().bold());
        println!(
            "  {}",
            t!("unit_converter.result_scanned", count = scanned)
        );
        println!(
            "  {}",
            t!(
                "unit_converter.result_rewritten",
                count = style(rewritten).green()
            )
        );
        if declined > 0 {
            println!(
                "  {}",
                t!(
                    "unit_converter.result_declined",
                    count = style(declined).yellow()
                )
            );
        }

        info!("像素轉換完成 - 掃描: {scanned}, 改寫: {rewritten}, 跳過: {declined}");
    }
}

/// 改寫檔案內容：先寫入同目錄暫存檔再原子替換，目標檔案不是完整改寫就是保持原狀
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!("{file_name}.rem_tmp"));

    fs::write(&tmp_path, content)
        .with_context(|| t!("unit_converter.write_failed", path = tmp_path.display()))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e)
            .with_context(|| t!("unit_converter.write_failed", path = path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("style.scss");
        fs::write(&file_path, "width: 32px;").unwrap();

        write_atomic(&file_path, "width: 2rem;").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "width: 2rem;");
        // 暫存檔不殘留
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
