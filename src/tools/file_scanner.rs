use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 將使用者輸入的副檔名清單正規化
///
/// 輸入以逗號加空格分隔（例如 `"ts, scss, component.ts"`），
/// 每個項目保證恰好一個前導點
#[must_use]
pub fn normalize_extensions(input: &str) -> Vec<String> {
    input
        .split(", ")
        .map(|ext| format!(".{}", ext.trim().trim_start_matches('.')))
        .collect()
}

/// 掃描目錄下檔名以任一副檔名結尾的檔案，依路徑排序
///
/// 以檔名結尾比對而非 `Path::extension`，複合副檔名（`.component.ts`）才比對得到
pub fn scan_files_with_suffixes(directory: &Path, suffixes: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}
