use std::borrow::Cow;

/// Сколько символов извлечённого текста показывать в свёрнутом виде
pub const PREVIEW_LIMIT: usize = 600;

pub const ELLIPSIS: char = '…';

/// Текст для превью: целиком, если `expanded` или текст короче лимита,
/// иначе первые `PREVIEW_LIMIT` символов и многоточие.
///
/// Лимит считается в символах, а не в байтах, чтобы не резать UTF-8.
pub fn preview_text(text: &str, expanded: bool) -> Cow<'_, str> {
    if expanded {
        return Cow::Borrowed(text);
    }
    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => {
            let mut short = String::with_capacity(cut + ELLIPSIS.len_utf8());
            short.push_str(&text[..cut]);
            short.push(ELLIPSIS);
            Cow::Owned(short)
        }
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(preview_text("Hello world", false), "Hello world");
        let exact = "a".repeat(PREVIEW_LIMIT);
        assert_eq!(preview_text(&exact, false), exact);
    }

    #[test]
    fn test_long_text_truncated_with_ellipsis() {
        let long = "b".repeat(PREVIEW_LIMIT + 1);
        let shown = preview_text(&long, false);
        assert_eq!(shown.chars().count(), PREVIEW_LIMIT + 1);
        assert!(shown.ends_with(ELLIPSIS));
        assert!(shown.starts_with(&"b".repeat(PREVIEW_LIMIT)));
    }

    #[test]
    fn test_expanded_shows_everything() {
        let long = "c".repeat(2000);
        assert_eq!(preview_text(&long, true), long);
    }

    #[test]
    fn test_multibyte_text_cut_on_char_boundary() {
        let long = "ж".repeat(PREVIEW_LIMIT + 10);
        let shown = preview_text(&long, false);
        assert_eq!(shown, format!("{}…", "ж".repeat(PREVIEW_LIMIT)));
    }
}
