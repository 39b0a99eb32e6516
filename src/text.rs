//! Turning post titles and community names into path segments

use std::sync::LazyLock;

use regex_lite::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a word character, whitespace or hyphen (ASCII only)
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Runs of whitespace and hyphens
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Fold `text` to ASCII and, when `clean` is set, reduce it to a slug.
///
/// Folding decomposes the text (NFKD) and drops every non-ASCII code point,
/// so `Café` becomes `Cafe`. Cleaning then removes everything except ASCII
/// letters, digits, `_`, whitespace and `-`, turns runs of whitespace and
/// hyphens into a single `-` and trims `-`/`_` from both ends. Case is kept.
///
/// With `clean` unset only the folding happens; the result may then contain
/// characters some filesystems reject.
pub fn clean_text(text: &str, clean: bool) -> String {
    let folded: String = text.nfkd().filter(char::is_ascii).collect();
    if !clean {
        return folded;
    }

    let stripped = DISALLOWED.replace_all(&folded, "");
    SEPARATORS
        .replace_all(&stripped, "-")
        .trim_matches(|c: char| c == '-' || c == '_')
        .to_string()
}

/// Like [`clean_text`] but never returns an empty string.
pub fn path_segment(text: &str, clean: bool, fallback: &str) -> String {
    let segment = clean_text(text, clean);
    if segment.is_empty() {
        fallback.to_string()
    } else {
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !s.starts_with(['-', '_'])
            && !s.ends_with(['-', '_'])
    }

    #[test]
    fn test_clean_basic_title() {
        assert_eq!(clean_text("Hello, World!", true), "Hello-World");
        assert_eq!(clean_text("  spaced   out  ", true), "spaced-out");
        assert_eq!(clean_text("a - b -- c", true), "a-b-c");
    }

    #[test]
    fn test_clean_folds_accents() {
        assert_eq!(clean_text("Café Überblick", true), "Cafe-Uberblick");
        assert_eq!(clean_text("ﬁsh", true), "fish");
    }

    #[test]
    fn test_clean_drops_emoji_and_symbols() {
        assert_eq!(clean_text("🐦 birds 🐦", true), "birds");
        assert_eq!(clean_text("__private__", true), "private");
        assert_eq!(clean_text("what/about\\paths?", true), "whataboutpaths");
    }

    #[test]
    fn test_clean_keeps_case() {
        assert_eq!(clean_text("MixedCase Title", true), "MixedCase-Title");
    }

    #[test]
    fn test_clean_output_charset() {
        let samples = [
            "",
            "---",
            "_-_",
            "Normal title",
            "Ünïcödé everywhere — really",
            "tabs\tand\nnewlines",
            "[OC] My cat (2 years old) :3",
            "100% legit!!!",
            "日本語のタイトル",
            "-_leading and trailing_-",
        ];
        for sample in samples {
            let cleaned = clean_text(sample, true);
            assert!(is_clean(&cleaned), "{sample:?} -> {cleaned:?}");
        }
    }

    #[test]
    fn test_dont_clean_only_folds() {
        assert_eq!(clean_text("What? A/B test é", false), "What? A/B test e");
        assert_eq!(clean_text("日本語", false), "");
        assert_eq!(clean_text("  keep  spacing ", false), "  keep  spacing ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text("", true), "");
        assert_eq!(clean_text("", false), "");
    }

    #[test]
    fn test_path_segment_fallback() {
        assert_eq!(path_segment("🎉🎉", true, "post"), "post");
        assert_eq!(path_segment("Party", true, "post"), "Party");
    }
}
