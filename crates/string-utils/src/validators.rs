//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

// Syntactic check only: something@something.something, no whitespace, one '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Most compiled patterns [`matches_regex`] keeps before starting over
pub const REGEX_CACHE_CAPACITY: usize = 256;

static REGEX_CACHE: Lazy<Mutex<HashMap<String, Regex>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Check if a string looks like an email address
///
/// ```rust
/// use breaking_string_utils::is_email;
///
/// assert!(is_email("test@example.com"));
/// assert!(!is_email("invalid-email"));
/// ```
pub fn is_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Check if a string is an absolute URL
///
/// Anything the WHATWG URL parser accepts without a base passes, so a scheme
/// is required and bare domains such as `example.com` are rejected.
pub fn is_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("Rejected URL {:?}: {}", s, e);
            false
        }
    }
}

/// Check if a string is non-empty and made only of ASCII letters and digits
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check if a string is empty or whitespace only
pub fn is_empty(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check if a string has at least `min_length` characters (untrimmed)
pub fn has_min_length(s: &str, min_length: usize) -> bool {
    s.chars().count() >= min_length
}

/// Check if a string matches a caller-supplied pattern
///
/// ```rust
/// use breaking_string_utils::matches_pattern;
/// use regex::Regex;
///
/// let digits = Regex::new(r"^\d+$").unwrap();
/// assert!(matches_pattern("123", &digits));
/// assert!(!matches_pattern("abc", &digits));
/// ```
pub fn matches_pattern(s: &str, pattern: &Regex) -> bool {
    pattern.is_match(s)
}

/// Check if a string matches a textual regex pattern
///
/// Compiled patterns are cached process-wide. The cache holds at most
/// [`REGEX_CACHE_CAPACITY`] patterns and is emptied when a new pattern would
/// exceed that, so callers feeding unbounded distinct patterns (user input)
/// do not grow memory without limit. Prefer [`matches_pattern`] with a
/// caller-owned `Regex` for hot paths. An invalid pattern never matches.
pub fn matches_regex(s: &str, pattern: &str) -> bool {
    let mut cache = REGEX_CACHE.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(regex) = cache.get(pattern) {
        return regex.is_match(s);
    }

    match Regex::new(pattern) {
        Ok(regex) => {
            let matched = regex.is_match(s);
            if cache.len() >= REGEX_CACHE_CAPACITY {
                tracing::debug!("Regex cache full ({} patterns), clearing", cache.len());
                cache.clear();
            }
            cache.insert(pattern.to_string(), regex);
            matched
        }
        Err(e) => {
            tracing::warn!("Invalid regex pattern {:?}: {}", pattern, e);
            false
        }
    }
}
