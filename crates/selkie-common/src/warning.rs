//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid printing the same warning multiple times.
//! Used by the CLI to report input it accepts but that is probably a mistake,
//! such as a combinator token outside the standard four.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are colored. Cleared by `--no-color`.
static COLOR: AtomicBool = AtomicBool::new(true);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Enable or disable colored warning output.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Whether warnings are currently colored.
#[must_use]
pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Record a warning, returning the line to print if it has not been seen before.
fn record(component: &str, message: &str) -> Option<String> {
    let key = format!("[{component}] {message}");
    let first = warned().get_or_insert_with(HashSet::new).insert(key);
    first.then(|| format!("[Selkie {component}] ⚠ {message}"))
}

/// Warn about suspicious input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("combine", "non-standard combinator '||' used verbatim");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if let Some(line) = record(component, message) {
        if color_enabled() {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}

/// Number of distinct warnings printed so far.
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global state so parallel tests cannot skew the count.
    #[test]
    fn test_warnings_are_counted_once_per_component_and_message() {
        let before = warning_count();

        let first = record("test-dedupe", "same message");
        assert_eq!(
            first.as_deref(),
            Some("[Selkie test-dedupe] ⚠ same message")
        );
        assert_eq!(record("test-dedupe", "same message"), None);
        assert_eq!(warning_count(), before + 1);

        assert!(record("test-dedupe-other", "same message").is_some());
        warn_once("test-dedupe", "another message");
        warn_once("test-dedupe", "another message");
        assert_eq!(warning_count(), before + 3);
    }

    #[test]
    fn test_set_color_toggles_flag() {
        set_color(false);
        assert!(!color_enabled());
        set_color(true);
        assert!(color_enabled());
    }
}
