//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so a defect repeated across many elements is
//! reported once. Used by the markup parser and the CLI.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format the dedup key for a component/message pair.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record a warning, returning true the first time this exact
/// component/message pair is seen.
fn record(component: &str, message: &str) -> bool {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message))
}

/// Warn about a structural problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "mismatched closing tag: expected </name>, found </nmae>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Wombat {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
