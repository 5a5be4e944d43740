//! Tag list operations used when adding, removing, and parsing tags.
//!
//! Tags are compared case-sensitively here. `Work` and `work` are distinct
//! entries in a note's stored list even though the index files both under
//! the `work` bucket.

use std::collections::HashSet;

/// Unions `existing` with the trimmed, non-empty entries of `additions`.
///
/// Exact duplicates collapse to their first occurrence. Existing tags keep
/// their order and new tags follow in the order they were supplied. Existing
/// tags are kept verbatim (not re-trimmed).
pub fn merge_tags<S: AsRef<str>>(existing: &[String], additions: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(existing.len() + additions.len());

    let candidates = existing.iter().map(String::as_str).chain(
        additions
            .iter()
            .map(|tag| tag.as_ref().trim())
            .filter(|tag| !tag.is_empty()),
    );

    for tag in candidates {
        if seen.insert(tag) {
            merged.push(tag.to_string());
        }
    }
    merged
}

/// Removes every tag that exactly matches a trimmed entry of `removals`.
///
/// The remaining tags keep their relative order. Removing a tag that is not
/// present changes nothing.
pub fn remove_tags<S: AsRef<str>>(existing: &[String], removals: &[S]) -> Vec<String> {
    let remove: HashSet<&str> = removals.iter().map(|tag| tag.as_ref().trim()).collect();
    existing
        .iter()
        .filter(|tag| !remove.contains(tag.as_str()))
        .cloned()
        .collect()
}

/// Splits a comma-separated tag list, trimming each entry.
///
/// Blank input yields an empty list. Blank entries between commas are kept
/// as empty strings so replace-all callers see exactly what was typed.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}
