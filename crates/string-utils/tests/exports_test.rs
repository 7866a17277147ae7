//! Checks that the flat, namespaced and metadata exports line up

use breaking_string_utils::{camel_case, formatters, is_email, is_url, kebab_case, validators};
use breaking_string_utils::{NAME, VERSION};

#[test]
fn test_flat_exports() {
    assert_eq!(kebab_case("Hello World"), "hello-world");
    assert_eq!(camel_case("hello world"), "helloWorld");
    assert!(is_email("test@example.com"));
    assert!(is_url("https://example.com"));
}

#[test]
fn test_namespace_exports() {
    assert_eq!(formatters::kebab_case("Hello World"), "hello-world");
    assert_eq!(formatters::slugify("Hello World"), "hello-world");
    assert!(validators::is_email("test@example.com"));
    assert!(validators::is_empty("   "));
}

#[test]
fn test_package_metadata() {
    assert_eq!(NAME, "breaking-string-utils");
    assert_eq!(VERSION, "0.2.0");
}

#[test]
fn test_chained_operations() {
    let input = "Hello World Example!";
    assert_eq!(kebab_case(input), "hello-world-example!");
    assert_eq!(formatters::slugify(input), "hello-world-example");
}

#[test]
fn test_validating_formatted_strings() {
    assert!(validators::is_alphanumeric(&formatters::camel_case("hello world")));
    assert!(!validators::is_alphanumeric(&formatters::kebab_case("hello world")));
    assert!(!validators::has_min_length("", 1));
    assert!(validators::is_empty(&formatters::slugify("!!!")));
}

#[test]
fn test_scenario_validators() {
    assert!(is_email("test@example.com"));
    assert!(!is_email("test@"));
    assert!(!is_url("example.com"));
    assert!(is_url("https://example.com"));
}
