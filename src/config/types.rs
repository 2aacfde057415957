use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 媒體類型表
///
/// `MIME_TYPE` 為副檔名對應 MIME 類型的查詢表；
/// 三個分類清單則是 MIME 查不到時的後備副檔名允許清單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
    #[serde(rename = "AUDIO_FILE")]
    pub audio_file: Vec<String>,
    #[serde(rename = "MIME_TYPE")]
    pub mime_type: HashMap<String, String>,
}

impl MediaTypeTable {
    /// 後備副檔名集合（小寫、含前導點）
    #[must_use]
    pub fn fallback_extensions_set(&self) -> HashSet<String> {
        self.image_file
            .iter()
            .chain(self.video_file.iter())
            .chain(self.audio_file.iter())
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    /// MIME 查詢表（鍵為小寫副檔名）
    #[must_use]
    pub fn mime_type_map(&self) -> HashMap<String, String> {
        self.mime_type
            .iter()
            .map(|(ext, mime)| (ext.to_lowercase(), mime.clone()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub media_type_table: MediaTypeTable,
}
