//! 比對結果預覽
//!
//! 為每個含像素值的行擷取前後數行上下文，僅供顯示用，不參與改寫

use super::px_pattern::line_has_px;
use console::style;
use rust_i18n::t;

/// 上下文行數
pub const CONTEXT_LINES: usize = 5;

/// 單一比對行的上下文視窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchContext {
    /// 視窗內的各行（不含換行符）
    pub lines: Vec<String>,
    /// 比對行在視窗內的索引
    pub highlight: usize,
}

/// 擷取內容中每個含像素值的行的上下文視窗
///
/// 視窗為 `[i - context_lines, i + context_lines)`，於檔案頭尾截短
#[must_use]
pub fn collect_match_contexts(content: &str, context_lines: usize) -> Vec<MatchContext> {
    let lines: Vec<&str> = content.lines().collect();
    let mut contexts = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line_has_px(line) {
            continue;
        }

        let start = i.saturating_sub(context_lines);
        let end = (i + context_lines).max(i + 1).min(lines.len());

        contexts.push(MatchContext {
            lines: lines[start..end].iter().map(ToString::to_string).collect(),
            highlight: i - start,
        });
    }

    contexts
}

/// 渲染上下文視窗，比對行以綠色標示
///
/// 色彩能力偵測交由 `console` 處理，非終端機輸出會自動退化為純文字
pub fn render_contexts(contexts: &[MatchContext]) {
    println!("{}", t!("unit_converter.matched_contexts"));

    for (index, context) in contexts.iter().enumerate() {
        println!("---");
        for (line_index, line) in context.lines.iter().enumerate() {
            if line_index == context.highlight {
                println!("{}", style(line).green());
            } else {
                println!("{line}");
            }
        }
        println!("---");

        if index != contexts.len() - 1 {
            println!();
        }
    }
}
