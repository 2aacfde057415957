//! 媒體檔案分類
//!
//! 先以副檔名查 MIME 類型，頂層分類為 image、video、audio 即視為媒體；
//! MIME 查不到時退回後備副檔名允許清單

use crate::config::MediaTypeTable;
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub struct MediaClassifier {
    mime_types: HashMap<String, String>,
    fallback_extensions: HashSet<String>,
}

impl MediaClassifier {
    #[must_use]
    pub fn new(table: &MediaTypeTable) -> Self {
        Self {
            mime_types: table.mime_type_map(),
            fallback_extensions: table.fallback_extensions_set(),
        }
    }

    /// 判斷檔案是否為媒體檔（影像、影片或聲音）
    #[must_use]
    pub fn is_media_file(&self, path: &Path) -> bool {
        let Some(extension) = Self::extension_of(path) else {
            return false;
        };

        match self.mime_types.get(&extension) {
            Some(mime) => Self::is_media_mime(mime),
            None => self.fallback_extensions.contains(&extension),
        }
    }

    /// 取出小寫副檔名（含前導點）；無副檔名或僅有前導點的隱藏檔回傳 `None`
    fn extension_of(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let index = name.rfind('.')?;
        if index == 0 {
            return None;
        }
        Some(name[index..].to_lowercase())
    }

    fn is_media_mime(mime: &str) -> bool {
        let top_level = mime.split('/').next().unwrap_or_default();
        matches!(top_level, "image" | "video" | "audio")
    }
}
