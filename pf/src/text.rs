//! Text cleanup for server-provided HTML snippets

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]*>").expect("tag pattern is valid"));
static TRAILING_BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[ |\u{a0}]*\n").expect("trailing blank pattern is valid"));
static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&nbsp;").expect("nbsp pattern is valid"));

/// Strip HTML tags, blanks before line breaks and `&nbsp;` entities
pub fn remove_html_tag(input: &str) -> String {
    let stripped = TAG.replace_all(input, "");
    let stripped = TRAILING_BLANKS.replace_all(&stripped, "\n");
    NBSP.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_tags() {
        assert_eq!(remove_html_tag("<b>bold</b> text<br/>"), "bold text");
        assert_eq!(remove_html_tag("<p class=\"x\">para</p>"), "para");
    }

    #[test]
    fn test_trims_blanks_before_newline() {
        assert_eq!(remove_html_tag("line one   \nline two \u{a0}\n"), "line one\nline two\n");
    }

    #[test]
    fn test_removes_nbsp_case_insensitive() {
        assert_eq!(remove_html_tag("a&nbsp;b&NBSP;c"), "abc");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(remove_html_tag("1 < 2 and 3 > 2"), "1  2");
        assert_eq!(remove_html_tag("nothing to strip"), "nothing to strip");
    }
}
