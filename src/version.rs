//! Picking the newest documented version out of `api_data.json`.
//!
//! apidoc keeps every historical version of an endpoint in the same data
//! file. Only the entries of the semantically greatest version are rendered.

use crate::entry::Entry;
use indexmap::IndexMap;
use log::{debug, warn};
use semver::Version;
use std::cmp::Ordering;

/// Parses a version string, tolerating surrounding whitespace and a leading
/// `v` or `=`.
pub fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix('=')
        .unwrap_or(trimmed)
        .trim_start();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    Version::parse(trimmed).ok()
}

/// Whether `candidate` is strictly greater than `chosen`.
///
/// Build metadata is ignored. A string that is not a valid version never
/// beats one that is.
fn is_greater(candidate: &str, chosen: &str) -> bool {
    match (parse_version(candidate), parse_version(chosen)) {
        (Some(a), Some(b)) => a.cmp_precedence(&b) == Ordering::Greater,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Returns the greatest version of `versions`.
///
/// Among semantically equal versions the first one encountered wins.
/// Returns `None` when `versions` is empty.
pub fn latest_version<'a>(versions: &[&'a str]) -> Option<&'a str> {
    let (&first, rest) = versions.split_first()?;

    Some(rest.iter().fold(first, |chosen, &candidate| {
        if is_greater(candidate, chosen) {
            candidate
        } else {
            chosen
        }
    }))
}

/// Groups entries by their version key, keeping first-seen key order and
/// per-group insertion order.
pub fn group_by_version(entries: &[Entry]) -> IndexMap<String, Vec<&Entry>> {
    let mut groups: IndexMap<String, Vec<&Entry>> = IndexMap::new();

    for entry in entries {
        groups.entry(entry.version_key()).or_default().push(entry);
    }

    groups
}

/// Returns the entries belonging to the latest version, in input order.
///
/// An empty input yields an empty list.
pub fn latest_version_entries(entries: &[Entry]) -> Vec<Entry> {
    let groups = group_by_version(entries);

    for key in groups.keys() {
        if parse_version(key).is_none() {
            warn!("Entries with version {key:?} do not carry a valid semantic version");
        }
    }

    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    let Some(latest) = latest_version(&keys) else {
        debug!("No entries found, nothing to select");
        return Vec::new();
    };

    debug!(
        "Selected version {latest} out of {} distinct versions",
        keys.len()
    );

    groups
        .get(latest)
        .map(|group| group.iter().map(|&entry| entry.clone()).collect())
        .unwrap_or_default()
}
