//! Breaking String Utils
//!
//! Small, pure string helpers: case conversion, slugs and truncation in
//! [`formatters`], boolean predicates in [`validators`].
//!
//! Every function is available three ways:
//!
//! ```rust
//! use breaking_string_utils::{formatters, kebab_case};
//!
//! assert_eq!(kebab_case("Hello World"), "hello-world");
//! assert_eq!(formatters::kebab_case("Hello World"), "hello-world");
//! assert!(breaking_string_utils::validators::is_email("test@example.com"));
//! ```

pub mod formatters;
pub mod validators;

// Re-export all functions at the crate root
pub use formatters::*;
pub use validators::*;

/// Package name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
