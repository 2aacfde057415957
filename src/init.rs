//! 程式初始化
//!
//! 日誌寫入暫存目錄的記錄檔，避免干擾互動式介面

use log::LevelFilter;
use std::fs::File;

pub fn init() {
    let log_path = std::env::temp_dir().join("asset_tools.log");

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);

    if let Ok(file) = File::create(&log_path) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // 測試中可能重複初始化，失敗時沿用既有設定
    let _ = builder.try_init();
}
