//! Width-aware text wrapping for mixed Chinese and Latin prose.
//!
//! Ratatui's own wrapping splits on whitespace, which Chinese text rarely
//! contains. Here every wide character is a break opportunity, runs of
//! ASCII are kept together, and widths are measured in terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Wrap `text` into lines no wider than `width` columns.
///
/// Embedded newlines start a new line. Whitespace at a break point is
/// dropped. A `width` of zero returns the text unchanged.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

/// Pad `text` with spaces to exactly `width` columns (no truncation)
pub fn pad_to(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(gap))
}

/// Split into break units: ASCII words stay whole, every other character
/// (spaces, CJK, punctuation) is its own unit
fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_ascii() && !c.is_ascii_whitespace() {
            word_start.get_or_insert(i);
        } else {
            if let Some(start) = word_start.take() {
                tokens.push(&text[start..i]);
            }
            tokens.push(&text[i..i + c.len_utf8()]);
        }
    }
    if let Some(start) = word_start {
        tokens.push(&text[start..]);
    }
    tokens
}

fn wrap_paragraph(text: &str, width: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0;

    for token in tokens(text) {
        let token_width = display_width(token);

        if line_width > 0 && line_width + token_width > width {
            out.push(line.trim_end().to_string());
            line.clear();
            line_width = 0;
            if token.trim().is_empty() {
                continue;
            }
        }

        if token_width > width {
            // Hard-split words longer than a whole line
            for c in token.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width > 0 && line_width + char_width > width {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
            continue;
        }

        line.push_str(token);
        line_width += token_width;
    }

    out.push(line.trim_end().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("区块链"), 6);
        assert_eq!(display_width("L1 区块"), 7);
    }

    #[test]
    fn test_wrap_chinese_breaks_between_characters() {
        assert_eq!(wrap("区块链是基础", 4), vec!["区块", "链是", "基础"]);
    }

    #[test]
    fn test_wrap_keeps_ascii_words_whole() {
        assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap("hello world", 8), vec!["hello", "world"]);
    }

    #[test]
    fn test_wrap_mixed_text() {
        let lines = wrap("学习 Rollup 技术", 8);
        assert_eq!(lines, vec!["学习", "Rollup", "技术"]);
    }

    #[test]
    fn test_wrap_never_exceeds_width() {
        let text = "以太坊（Ethereum）是一个支持智能合约的开放区块链平台，开发者可以在其上构建去中心化应用 DApp。";
        for width in [6, 10, 17, 40] {
            for line in wrap(text, width) {
                assert!(display_width(&line) <= width, "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let lines = wrap("0x1234567890abcdef", 8);
        assert_eq!(lines, vec!["0x123456", "7890abcd", "ef"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        assert_eq!(wrap("第一行\n第二行", 20), vec!["第一行", "第二行"]);
        assert_eq!(wrap("a\n\nb", 20), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_zero_width_returns_input() {
        assert_eq!(wrap("区块链", 0), vec!["区块链"]);
    }

    #[test]
    fn test_pad_to_uses_display_width() {
        assert_eq!(pad_to("链", 4), "链  ");
        assert_eq!(pad_to("abc", 2), "abc");
    }
}
