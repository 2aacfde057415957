use super::classifier::MediaClassifier;
use super::flat_copier::{CopyResult, copy_files_flat};
use crate::config::Config;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use walkdir::WalkDir;

/// 媒體檔案抽取元件
///
/// 遞迴掃描來源資料夾，將所有媒體檔案平面複製到目的資料夾
pub struct MediaExtractor {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

/// 掃描結果
struct ScanOutcome {
    media_files: Vec<PathBuf>,
    total_scanned: usize,
    interrupted: bool,
}

impl MediaExtractor {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("media_extractor.title")).cyan().bold());

        // 來源驗證失敗直接回報錯誤結束，不重新詢問
        let source = self.prompt_source_path()?;
        validate_directory_exists(&source)?;

        let destination = self.prompt_destination_path(&source)?;

        println!(
            "{}",
            style(t!("media_extractor.scanning", path = source.display())).dim()
        );
        let classifier = MediaClassifier::new(&self.config.media_type_table);
        let outcome = self.find_media_files(&source, &classifier);

        if outcome.interrupted {
            println!("{}", style(t!("common.interrupted")).yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(t!(
                "media_extractor.scan_done",
                total = outcome.total_scanned,
                found = outcome.media_files.len()
            ))
            .green()
        );

        if outcome.media_files.is_empty() {
            println!("{}", style(t!("media_extractor.no_media")).yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(t!("media_extractor.copying_to", path = destination.display())).cyan()
        );
        let result = copy_files_flat(
            &outcome.media_files,
            &destination,
            &self.shutdown_signal,
        )?;

        self.print_result(&outcome, &result, &destination);
        Ok(())
    }

    fn prompt_source_path(&self) -> Result<PathBuf> {
        let input: String = Input::new()
            .with_prompt(t!("media_extractor.prompt_source"))
            .interact_text()?;
        Ok(PathBuf::from(input.trim()))
    }

    /// 詢問目的資料夾，留空時採用 `<來源上層>/extracted_media`
    fn prompt_destination_path(&self, source: &Path) -> Result<PathBuf> {
        let default_destination = source
            .parent()
            .unwrap_or(source)
            .join("extracted_media")
            .to_string_lossy()
            .to_string();

        let input: String = Input::new()
            .with_prompt(t!("media_extractor.prompt_destination"))
            .default(default_destination)
            .interact_text()?;
        Ok(PathBuf::from(input.trim()))
    }

    /// 遞迴掃描來源並分類媒體檔案，每 100 個檔案更新一次進度
    fn find_media_files(&self, source: &Path, classifier: &MediaClassifier) -> ScanOutcome {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress bar template"),
        );

        let mut media_files = Vec::new();
        let mut total_scanned = 0usize;
        let mut interrupted = false;

        for entry in WalkDir::new(source)
            .follow_links(false)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止掃描");
                spinner.abandon_with_message(t!("media_extractor.scan_interrupted").to_string());
                interrupted = true;
                break;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            total_scanned += 1;
            if classifier.is_media_file(entry.path()) {
                media_files.push(entry.into_path());
            }

            if total_scanned % 100 == 0 {
                spinner.set_message(
                    t!(
                        "media_extractor.scan_progress",
                        total = total_scanned,
                        found = media_files.len()
                    )
                    .to_string(),
                );
                spinner.tick();
            }
        }

        if !interrupted {
            spinner.finish_and_clear();
        }

        // 依路徑排序，讓衝突編號的結果可重現
        media_files.sort();

        ScanOutcome {
            media_files,
            total_scanned,
            interrupted,
        }
    }

    fn print_result(&self, outcome: &ScanOutcome, result: &CopyResult, destination: &Path) {
        println!();
        println!("{}", style(t!("media_extractor.result_title")).cyan().bold());
        println!(
            "  {}",
            t!(
                "media_extractor.result_found",
                count = style(outcome.media_files.len()).cyan()
            )
        );
        println!(
            "  {}",
            t!(
                "media_extractor.result_copied",
                count = style(result.copied).green()
            )
        );
        if result.skipped > 0 {
            println!(
                "  {}",
                t!(
                    "media_extractor.result_skipped",
                    count = style(result.skipped).red()
                )
            );
        }

        if result.interrupted {
            println!("{}", style(t!("common.interrupted")).yellow());
        } else {
            println!();
            println!(
                "{}",
                style(t!(
                    "media_extractor.done",
                    count = result.copied,
                    path = destination.display()
                ))
                .green()
            );
        }

        info!(
            "媒體抽取完成 - 掃描: {}, 媒體: {}, 複製: {}, 跳過: {}",
            outcome.total_scanned,
            outcome.media_files.len(),
            result.copied,
            result.skipped
        );
    }
}
