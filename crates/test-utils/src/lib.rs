//! Shared test utilities for the GP results viewer workspace.
//!
//! This crate provides common testing infrastructure including:
//! - A builder for temporary results trees (`tree`)
//! - Option names and file names matching the real results (`fixtures`)
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../../crates/test-utils" }
//! ```
//!
//! Then build a tree in your tests:
//!
//! ```ignore
//! use test_utils::ResultsTree;
//!
//! let tree = ResultsTree::new();
//! tree.stationary_kernel("dec6", "pH", "Exponential");
//! ```

pub mod fixtures;
pub mod tree;

pub use tree::ResultsTree;

/// Assert that a rendered page contains a fragment, printing the page on failure.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_html_contains;
///
/// assert_html_contains!(html, r#"<option value="dec6" selected>"#);
/// ```
#[macro_export]
macro_rules! assert_html_contains {
    ($html:expr, $needle:expr) => {{
        let html: &str = &$html;
        let needle: &str = &$needle;
        if !html.contains(needle) {
            panic!(
                "assertion failed: page does not contain `{}`\n--- page ---\n{}",
                needle, html
            );
        }
    }};
}

/// Negated form of [`assert_html_contains!`].
#[macro_export]
macro_rules! assert_html_lacks {
    ($html:expr, $needle:expr) => {{
        let html: &str = &$html;
        let needle: &str = &$needle;
        if html.contains(needle) {
            panic!(
                "assertion failed: page unexpectedly contains `{}`\n--- page ---\n{}",
                needle, html
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_html_contains_passes() {
        assert_html_contains!("<p>Missing</p>", "Missing");
        assert_html_lacks!("<p>Missing</p>", "<img");
    }

    #[test]
    #[should_panic(expected = "page does not contain")]
    fn test_assert_html_contains_fails() {
        assert_html_contains!("<p></p>", "Missing");
    }
}
