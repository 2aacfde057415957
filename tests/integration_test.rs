//! 整合測試 - 以暫存目錄驗證兩個工具的核心流程

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use asset_tools::component::media_extractor::{MediaClassifier, copy_files_flat};
use asset_tools::component::unit_converter::replace_pixels_with_rem;
use asset_tools::config::Config;
use asset_tools::tools::{normalize_extensions, scan_files_with_suffixes};
use filetime::FileTime;
use tempfile::TempDir;

fn classifier() -> MediaClassifier {
    let config = Config::new().unwrap();
    MediaClassifier::new(&config.media_type_table)
}

/// 遞迴收集目錄下的所有檔案，依路徑排序
fn collect_files(directory: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![directory.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

fn dest_names(destination: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(destination)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// 測試 1: 媒體抽取端對端 - 掃描、分類、平面複製
#[test]
fn test_media_extraction_end_to_end() {
    let source = TempDir::new().unwrap();
    fs::create_dir(source.path().join("b")).unwrap();
    fs::write(source.path().join("a.jpg"), "jpg-a").unwrap();
    fs::write(source.path().join("b").join("c.jpg"), "jpg-c").unwrap();
    fs::write(source.path().join("notes.txt"), "not media").unwrap();

    let classifier = classifier();
    let media_files: Vec<PathBuf> = collect_files(source.path())
        .into_iter()
        .filter(|path| classifier.is_media_file(path))
        .collect();
    assert_eq!(media_files.len(), 2, "notes.txt 不應列入媒體");

    let dest_root = TempDir::new().unwrap();
    let destination = dest_root.path().join("extracted_media");
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    let result = copy_files_flat(&media_files, &destination, &shutdown_signal).unwrap();

    assert_eq!(result.copied, 2);
    assert_eq!(result.skipped, 0);
    assert!(!result.interrupted);
    assert_eq!(dest_names(&destination), vec!["a.jpg", "c.jpg"]);
}

/// 測試 2: 檔名衝突 - 同名檔案依序編號，不覆寫既有檔案
#[test]
fn test_collision_numbering_never_overwrites() {
    let source = TempDir::new().unwrap();
    for sub in ["x", "y", "z"] {
        fs::create_dir(source.path().join(sub)).unwrap();
        fs::write(source.path().join(sub).join("photo.jpg"), sub).unwrap();
    }

    let dest_root = TempDir::new().unwrap();
    let destination = dest_root.path().join("out");
    // 預先放置同名檔案，模擬先前執行留下的結果
    fs::create_dir_all(&destination).unwrap();
    fs::write(destination.join("photo.jpg"), "pre-existing").unwrap();

    let media_files = collect_files(source.path());
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let result = copy_files_flat(&media_files, &destination, &shutdown_signal).unwrap();

    assert_eq!(result.copied, 3);
    assert_eq!(
        dest_names(&destination),
        vec!["photo.jpg", "photo_1.jpg", "photo_2.jpg", "photo_3.jpg"]
    );
    // 既有檔案內容未被覆寫
    assert_eq!(
        fs::read_to_string(destination.join("photo.jpg")).unwrap(),
        "pre-existing"
    );
}

/// 測試 3: 複製保留來源的修改時間
#[test]
fn test_copy_preserves_mtime() {
    let source = TempDir::new().unwrap();
    let file = source.path().join("clip.mp4");
    fs::write(&file, "video-bytes").unwrap();

    let mtime = FileTime::from_unix_time(1_600_000_000, 0);
    filetime::set_file_mtime(&file, mtime).unwrap();

    let dest_root = TempDir::new().unwrap();
    let destination = dest_root.path().join("out");
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    copy_files_flat(&[file], &destination, &shutdown_signal).unwrap();

    let copied = destination.join("clip.mp4");
    let copied_mtime = FileTime::from_last_modification_time(&fs::metadata(&copied).unwrap());
    assert_eq!(copied_mtime.unix_seconds(), mtime.unix_seconds());
}

/// 測試 4: 已觸發的中斷訊號使複製立即停止
#[test]
fn test_copy_stops_on_shutdown_signal() {
    let source = TempDir::new().unwrap();
    let file = source.path().join("a.png");
    fs::write(&file, "png").unwrap();

    let dest_root = TempDir::new().unwrap();
    let destination = dest_root.path().join("out");
    let shutdown_signal = Arc::new(AtomicBool::new(true));

    let result = copy_files_flat(&[file], &destination, &shutdown_signal).unwrap();

    assert!(result.interrupted);
    assert_eq!(result.copied, 0);
}

/// 測試 5: 轉換流程 - 副檔名正規化、掃描、改寫、重複執行不變
#[test]
fn test_conversion_flow_over_real_files() {
    let target = TempDir::new().unwrap();
    fs::create_dir(target.path().join("styles")).unwrap();
    fs::write(
        target.path().join("styles").join("layout.scss"),
        ".header {\n  height: 64px;\n  padding: 4px 19px;\n}\n",
    )
    .unwrap();
    fs::write(
        target.path().join("app.component.ts"),
        "const width = '100px';\n",
    )
    .unwrap();
    fs::write(target.path().join("readme.md"), "10px here stays\n").unwrap();

    let extensions = normalize_extensions("scss, component.ts");
    let files = scan_files_with_suffixes(target.path(), &extensions).unwrap();
    assert_eq!(files.len(), 2, "readme.md 不在副檔名清單內");

    for file in &files {
        let content = fs::read_to_string(file).unwrap();
        let (converted, _) = replace_pixels_with_rem(&content);
        fs::write(file, converted).unwrap();
    }

    let scss = fs::read_to_string(target.path().join("styles").join("layout.scss")).unwrap();
    assert_eq!(scss, ".header {\n  height: 4rem;\n  padding: 0.25rem 1.188rem;\n}\n");

    let ts = fs::read_to_string(target.path().join("app.component.ts")).unwrap();
    assert_eq!(ts, "const width = '6.25rem';\n");

    // 再執行一次不應有任何變動
    for file in &files {
        let content = fs::read_to_string(file).unwrap();
        let (converted, replaced) = replace_pixels_with_rem(&content);
        assert_eq!(replaced, 0);
        assert_eq!(converted, content);
    }

    // 清單外的檔案維持原狀
    assert_eq!(
        fs::read_to_string(target.path().join("readme.md")).unwrap(),
        "10px here stays\n"
    );
}

/// 測試 6: 目的資料夾不存在時連同中間層一併建立
#[test]
fn test_destination_intermediate_directories_are_created() {
    let source = TempDir::new().unwrap();
    let file = source.path().join("song.mp3");
    fs::write(&file, "mp3").unwrap();

    let dest_root = TempDir::new().unwrap();
    let destination = dest_root.path().join("deep").join("nested").join("out");
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    let result = copy_files_flat(&[file], &destination, &shutdown_signal).unwrap();

    assert_eq!(result.copied, 1);
    assert!(destination.join("song.mp3").is_file());
}
