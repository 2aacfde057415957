//! 像素值比對與換算
//!
//! 比對內容中的像素值（`32px`、`12.5px`），以固定基準 16 換算為 rem。
//! 已轉換的 `rem` 值不再符合樣式，重複執行不會改動檔案

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// rem 換算基準（1rem = 16px）
pub const REM_BASE: f64 = 16.0;

static PX_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((\d+\.)?\d+)px").expect("Invalid regex"));

/// 單行是否含有像素值
#[must_use]
pub fn line_has_px(line: &str) -> bool {
    PX_VALUE.is_match(line)
}

/// 像素值換算為 rem，小數第三位採四捨六入五成雙
#[must_use]
pub fn px_to_rem(px: f64) -> f64 {
    (px / REM_BASE * 1000.0).round_ties_even() / 1000.0
}

/// rem 數值格式化：固定三位小數後去除尾端零與小數點
///
/// `2.000` → `2rem`、`0.500` → `0.5rem`、`1.188` → `1.188rem`
#[must_use]
pub fn format_rem(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}rem")
}

/// 將內容中所有像素值改寫為 rem，回傳改寫後內容與替換數量
///
/// 對整份內容單次掃描，同一行多個像素值與跨行內容都會處理
#[must_use]
pub fn replace_pixels_with_rem(content: &str) -> (String, usize) {
    let mut replaced = 0usize;
    let converted = PX_VALUE.replace_all(content, |caps: &Captures| {
        replaced += 1;
        let px: f64 = caps[1].parse().unwrap_or(0.0);
        format_rem(px_to_rem(px))
    });
    (converted.into_owned(), replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_value() {
        let (converted, replaced) = replace_pixels_with_rem("width: 32px;");
        assert_eq!(converted, "width: 2rem;");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn test_trailing_zeros_are_trimmed() {
        assert_eq!(format_rem(px_to_rem(32.0)), "2rem");
        assert_eq!(format_rem(px_to_rem(8.0)), "0.5rem");
        assert_eq!(format_rem(px_to_rem(16.0)), "1rem");
    }

    #[test]
    fn test_three_decimal_result() {
        let (converted, _) = replace_pixels_with_rem("font-size: 19px;");
        assert_eq!(converted, "font-size: 1.188rem;");
    }

    #[test]
    fn test_decimal_value() {
        let (converted, _) = replace_pixels_with_rem("letter-spacing: 12.5px;");
        assert_eq!(converted, "letter-spacing: 0.781rem;");
    }

    #[test]
    fn test_ties_round_to_even() {
        // 1px: 62.5/1000，取偶數退位為 0.062
        assert_eq!(format_rem(px_to_rem(1.0)), "0.062rem");
        // 3px: 187.5/1000，取偶數進位為 0.188
        assert_eq!(format_rem(px_to_rem(3.0)), "0.188rem");
    }

    #[test]
    fn test_multiple_matches_on_one_line() {
        let (converted, replaced) = replace_pixels_with_rem("margin: 4px 8px 16px 32px;");
        assert_eq!(converted, "margin: 0.25rem 0.5rem 1rem 2rem;");
        assert_eq!(replaced, 4);
    }

    #[test]
    fn test_multiline_content() {
        let content = ".a {\n  width: 32px;\n}\n.b {\n  height: 8px;\n}\n";
        let (converted, replaced) = replace_pixels_with_rem(content);
        assert_eq!(converted, ".a {\n  width: 2rem;\n}\n.b {\n  height: 0.5rem;\n}\n");
        assert_eq!(replaced, 2);
    }

    #[test]
    fn test_rem_values_are_not_touched() {
        let content = "width: 2rem; height: 0.5rem;";
        let (converted, replaced) = replace_pixels_with_rem(content);
        assert_eq!(converted, content);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_rerun_is_a_no_op() {
        let (first, _) = replace_pixels_with_rem("padding: 24px 19px;");
        let (second, replaced) = replace_pixels_with_rem(&first);
        assert_eq!(second, first);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_line_has_px() {
        assert!(line_has_px("  width: 100px;"));
        assert!(!line_has_px("  width: 100%;"));
        assert!(!line_has_px("  width: 2rem;"));
    }
}
