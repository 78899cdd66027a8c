//! Recurring character check.

use std::collections::HashSet;

/// True if any character value appears more than once anywhere in the
/// password. Identity is case-sensitive and the check spans the whole
/// string, not a single class.
pub fn has_recurring(password: &str) -> bool {
    let mut seen = HashSet::new();
    password.chars().any(|c| !seen.insert(c))
}
