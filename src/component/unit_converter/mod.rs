mod main;
mod match_preview;
mod px_pattern;

pub use main::UnitConverter;
pub use match_preview::{CONTEXT_LINES, MatchContext, collect_match_contexts, render_contexts};
pub use px_pattern::{REM_BASE, format_rem, line_has_px, px_to_rem, replace_pixels_with_rem};
