use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so that it fits in `width` terminal columns, ending with `…` when shortened.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > width {
            break;
        }
        current_width += char_width;
        result.push(c);
    }
    result.push('…');
    result
}

/// Pad `s` with spaces on both sides so that it is centered in `width` columns.
pub fn center(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    let left = padding / 2;
    let right = padding - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
