//! String formatting functions

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Default suffix appended by [`truncate`]
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

static LOWER_UPPER_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static SPACE_OR_UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());

static CAMEL_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_\s]+(.)?").unwrap());

static NON_SLUG_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert a string to kebab-case
///
/// ```rust
/// use breaking_string_utils::kebab_case;
///
/// assert_eq!(kebab_case("Hello World"), "hello-world");
/// assert_eq!(kebab_case("camelCase"), "camel-case");
/// ```
pub fn kebab_case(s: &str) -> String {
    let split = LOWER_UPPER_BOUNDARY.replace_all(s, "$1-$2");
    SPACE_OR_UNDERSCORE_RUN
        .replace_all(&split, "-")
        .to_lowercase()
}

/// Convert a string to camelCase
///
/// Only the character following a delimiter run is uppercased. The first
/// character and any interior capitals are left alone, so `"MiXeD CaSe"`
/// becomes `"MiXeDCaSe"`.
///
/// ```rust
/// use breaking_string_utils::camel_case;
///
/// assert_eq!(camel_case("hello-world"), "helloWorld");
/// assert_eq!(camel_case("snake_case"), "snakeCase");
/// ```
pub fn camel_case(s: &str) -> String {
    CAMEL_DELIMITER
        .replace_all(s, |caps: &Captures| {
            caps.get(1)
                .map(|c| c.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a string to Title Case
///
/// Splits on single spaces, so runs of spaces survive unchanged.
pub fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Create a URL-friendly slug
///
/// The result only contains `[a-z0-9-]`, never starts or ends with a hyphen
/// and never contains `--`.
///
/// ```rust
/// use breaking_string_utils::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("The Quick Brown Fox"), "the-quick-brown-fox");
/// ```
pub fn slugify(s: &str) -> String {
    let lowered = s.to_lowercase();
    let stripped = NON_SLUG_CHAR.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");

    // runs are already collapsed, so at most one hyphen sits at either end
    collapsed.trim_matches('-').to_string()
}

/// Truncate a string to `max_len` characters using the default `"..."` suffix
///
/// ```rust
/// use breaking_string_utils::truncate;
///
/// assert_eq!(truncate("Hello World", 5), "He...");
/// assert_eq!(truncate("Hello", 10), "Hello");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    truncate_with(s, max_len, DEFAULT_TRUNCATE_SUFFIX)
}

/// Truncate a string to `max_len` characters, ending with `suffix`
///
/// Lengths are counted in `char`s. When the input is longer than `max_len`,
/// the output is exactly `max_len` characters long as long as the suffix
/// fits. If the suffix itself is longer than `max_len` there is no room for
/// any of the input, and the suffix is returned on its own.
pub fn truncate_with(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut truncated: String = s.chars().take(keep).collect();
    truncated.push_str(suffix);
    truncated
}
