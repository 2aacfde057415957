mod classifier;
mod flat_copier;
mod main;

pub use classifier::MediaClassifier;
pub use flat_copier::{CopyResult, copy_files_flat, next_available_name};
pub use main::MediaExtractor;
