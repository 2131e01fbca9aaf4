//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use teloxide::types::User;

/// Escape HTML special characters for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build an inline mention of a user for Telegram HTML parse mode
pub fn mention_user(user: &User) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user.id.0,
        escape_html(&user.first_name)
    )
}

/// Normalize a user-supplied language code
///
/// Accepts codes like "en", "FR", "zh-CN" or "pt_BR" and returns the
/// lowercased, hyphenated form. Returns None when the input does not look
/// like a language code at all.
pub fn normalize_lang_code(input: &str) -> Option<String> {
    let code = input.trim().to_lowercase().replace('_', "-");

    let mut parts = code.split('-');
    let primary = parts.next()?;
    if primary.len() < 2 || primary.len() > 3 || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    for subtag in parts {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return None;
        }
    }

    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_normalize_lang_code_simple() {
        assert_eq!(normalize_lang_code("en"), Some("en".to_string()));
        assert_eq!(normalize_lang_code(" FR "), Some("fr".to_string()));
        assert_eq!(normalize_lang_code("zh-CN"), Some("zh-cn".to_string()));
        assert_eq!(normalize_lang_code("pt_BR"), Some("pt-br".to_string()));
    }

    #[test]
    fn test_normalize_lang_code_rejects_garbage() {
        assert_eq!(normalize_lang_code(""), None);
        assert_eq!(normalize_lang_code("e"), None);
        assert_eq!(normalize_lang_code("english language"), None);
        assert_eq!(normalize_lang_code("123"), None);
        assert_eq!(normalize_lang_code("en-"), None);
    }
}
