//! 功能元件模組
//!
//! 每個子模組實現一個獨立的工具，包含主要流程和專用邏輯

pub mod media_extractor;
pub mod unit_converter;

pub use media_extractor::MediaExtractor;
pub use unit_converter::UnitConverter;
