use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Collapses all whitespace, including newlines, to single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Terminal display width of `text`
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `max_width` columns, ending in an ellipsis
/// when anything was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pads `text` with spaces on the right up to `width` columns
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(pad))
}

/// Pads `text` with spaces on the left up to `width` columns
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  A\n title\t here "), "A title here");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_long_text() {
        let out = truncate_to_width("a very long meta description", 10);
        assert_eq!(out, "a very lo…");
        assert_eq!(display_width(&out), 10);
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character takes two columns
        let out = truncate_to_width("日本語のタイトル", 7);
        assert_eq!(out, "日本語…");
        assert!(display_width(&out) <= 7);
    }

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("日本", 6), "日本  ");
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_right("too long", 3), "too long");
    }
}
