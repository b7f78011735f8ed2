/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("admintui-debug.log");
    path
}

/// Truncate a cell to a display width, appending an ellipsis when cut
pub fn truncate_cell(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            // Drop one cell to make room for the ellipsis
            while !out.is_empty() && width + 1 > max_width {
                if let Some(last) = out.pop() {
                    width -= last.width().unwrap_or(0);
                }
            }
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_cell("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_cell("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_cell("abc", 0), "");
    }
}
