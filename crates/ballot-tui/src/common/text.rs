//! Text helpers for fixed-width input boxes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keeps the end of `text` visible, prefixing `…` when it does not fit.
///
/// Input boxes show the tail so the character being typed stays on screen.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    let mut truncated = String::from("…");
    truncated.extend(kept.into_iter().rev());
    truncated
}

/// Replaces every character with a bullet.
pub fn mask(text: &str) -> String {
    "•".repeat(text.chars().count())
}
