use super::{is_valid_full_page_path, is_valid_name, sanitize_name, EDS_CHAR_LIMIT};

#[test]
fn test_sanitize_lowercases_and_collapses_runs() {
    assert_eq!(sanitize_name("Hello   World!!"), "hello-world");
    assert_eq!(sanitize_name("Getting Started: Part 1"), "getting-started-part-1");
}

#[test]
fn test_sanitize_folds_diacritics() {
    assert_eq!(sanitize_name("Café"), "cafe");
    assert_eq!(sanitize_name("Crème Brûlée"), "creme-brulee");
}

#[test]
fn test_sanitize_keeps_undecomposable_letters_as_dashes() {
    // 'ø' has no canonical decomposition, so it falls outside [a-z0-9].
    assert_eq!(sanitize_name("Smørrebrød"), "sm-rrebr-d");
}

#[test]
fn test_sanitize_trims_edge_dashes() {
    assert_eq!(sanitize_name("-abc-"), "abc");
    assert_eq!(sanitize_name("  spaced out  "), "spaced-out");
}

#[test]
fn test_sanitize_empty_and_all_symbol_input() {
    assert_eq!(sanitize_name(""), "");
    assert_eq!(sanitize_name("!!!"), "");
}

#[test]
fn test_sanitize_is_idempotent() {
    let samples = [
        "",
        "Café",
        "Hello   World!!",
        "-abc-",
        "already-sanitized-123",
        "Überraschung für Groß & Klein",
        "日本語のページ",
    ];
    for sample in samples {
        let once = sanitize_name(sample);
        assert_eq!(sanitize_name(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_sanitize_output_charset() {
    let samples = ["Hello, World!", "foo__bar", "père-Noël", "a/b/c", "100%"];
    for sample in samples {
        let sanitized = sanitize_name(sample);
        assert!(
            sanitized.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')),
            "unexpected character in {sanitized:?}"
        );
        assert!(!sanitized.starts_with('-'), "leading dash in {sanitized:?}");
        assert!(!sanitized.ends_with('-'), "trailing dash in {sanitized:?}");
    }
}

#[test]
fn test_is_valid_name_matches_sanitized_form() {
    assert!(is_valid_name("hello-world"));
    assert!(is_valid_name("abc123"));
    assert!(is_valid_name(""));

    assert!(!is_valid_name("Hello"));
    assert!(!is_valid_name("a--b"));
    assert!(!is_valid_name("-abc"));
    assert!(!is_valid_name("abc-"));
    assert!(!is_valid_name("hello world"));
}

#[test]
fn test_is_valid_name_agrees_with_sanitize() {
    let samples = ["hello", "Hello", "a--b", "", "café", "cafe", "-x-"];
    for sample in samples {
        assert_eq!(is_valid_name(sample), sanitize_name(sample) == sample);
    }
}

#[test]
fn test_full_page_path_limit_boundary() {
    let parent = "a".repeat(EDS_CHAR_LIMIT - 10);
    assert!(is_valid_full_page_path(&"b".repeat(10), &parent));
    assert!(!is_valid_full_page_path(&"b".repeat(11), &parent));
}

#[test]
fn test_full_page_path_counts_utf16_units() {
    // U+1D11E is a single char but two UTF-16 code units.
    let parent = "a".repeat(EDS_CHAR_LIMIT - 2);
    assert!(is_valid_full_page_path("𝄞", &parent));

    let parent = "a".repeat(EDS_CHAR_LIMIT - 1);
    assert!(!is_valid_full_page_path("𝄞", &parent));
}

#[test]
fn test_full_page_path_empty_name() {
    assert!(is_valid_full_page_path("", ""));
    assert!(is_valid_full_page_path("", &"a".repeat(EDS_CHAR_LIMIT)));
    assert!(!is_valid_full_page_path("", &"a".repeat(EDS_CHAR_LIMIT + 1)));
}
