//! Display-string helpers used by the section engine and the renderer.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Safely truncate text to a maximum byte length, appending an ellipsis
/// when anything was cut. Truncation happens on grapheme boundaries so a
/// multi-byte character is never split.
pub fn safe_truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut current_len = 0;

    for grapheme in text.graphemes(true) {
        let grapheme_len = grapheme.len();
        if current_len + grapheme_len > max_len {
            break;
        }
        truncated.push_str(grapheme);
        current_len += grapheme_len;
    }

    if current_len < text.len() && current_len + 3 <= max_len {
        truncated.push_str("...");
    } else if current_len < text.len() && max_len >= 3 {
        truncated.truncate(max_len - 3);
        truncated.push_str("...");
    }

    truncated
}

/// Collapse all whitespace runs to single spaces and trim the ends.
/// Content bullets arrive with embedded newlines from multi-line literals.
pub fn normalize_whitespace(text: &str) -> String {
    let whitespace_regex = Regex::new(r"\s+").expect("static regex");
    whitespace_regex.replace_all(text, " ").trim().to_string()
}

/// Two-letter uppercase initials for a technology without an icon slug,
/// e.g. "Machine Learning" -> "MA". Falls back to "?" for empty input.
pub fn initials(name: &str) -> String {
    let letters: String = name.graphemes(true).take(2).collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Capitalize the first letter of a string (nav labels come lowercase
/// from anchor ids).
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if let Some(first) = chars.first_mut() {
        *first = first.to_uppercase().next().unwrap_or(*first);
    }
    chars.into_iter().collect()
}

/// Wrap text to a column width on word boundaries. Words longer than the
/// width are emitted on their own line unbroken.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate() {
        assert_eq!(safe_truncate("hello world", 20), "hello world");
        assert_eq!(safe_truncate("hello world", 8), "hello...");
        assert_eq!(safe_truncate("hello", 3), "hel");
        assert_eq!(safe_truncate("", 5), "");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
        assert_eq!(normalize_whitespace("hello\n\tworld"), "hello world");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Machine Learning"), "MA");
        assert_eq!(initials("RL"), "RL");
        assert_eq!(initials("c"), "C");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("about"), "About");
        assert_eq!(capitalize_first_letter("HELLO"), "HELLO");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_wrap_text() {
        let wrapped = wrap_text("one two three four", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four"]);

        assert_eq!(wrap_text("short", 40), vec!["short"]);
        assert_eq!(wrap_text("", 40), vec![""]);

        // Oversized word stays unbroken on its own line
        let wrapped = wrap_text("a extraordinarily b", 6);
        assert_eq!(wrapped, vec!["a", "extraordinarily", "b"]);
    }
}
