//! Plain-text layout helpers shared by the card blocks.

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Truncate `text` to at most `width` characters.
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Center `text` within `width` characters, padding with spaces on both
/// sides. Truncates if the text is wider than `width`.
pub fn center(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let text_len = truncated.chars().count();
    if text_len >= width {
        return truncated;
    }
    let pad_left = (width - text_len) / 2;
    let pad_right = width - text_len - pad_left;
    format!(
        "{}{}{}",
        " ".repeat(pad_left),
        truncated,
        " ".repeat(pad_right)
    )
}

/// Greedy word wrap of `text` into lines at most `width` characters wide.
///
/// Words longer than `width` are split mid-word. Returns an empty vec for
/// empty text or zero width; callers treat that as "no rows to render".
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                // Split an over-long word across lines.
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > width {
                    lines.push(rest[..width].iter().collect());
                    rest.drain(..width);
                }
                current = rest.into_iter().collect();
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > width {
                    lines.push(rest[..width].iter().collect());
                    rest.drain(..width);
                }
                current = rest.into_iter().collect();
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ===========================================================================
// Tests
// ===========================================================================
