//! Live substring filter over a directory listing.

use codedump_core::Entry;

/// Entries whose name contains `query`, ignoring case.
///
/// An empty query returns the listing unchanged. The `..` entry is always
/// kept so the user can still leave the directory while filtering.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.is_parent_ref() || entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<Entry> {
        vec![
            Entry::parent_ref(),
            Entry::directory("src"),
            Entry::file("README.md"),
            Entry::file("Cargo.toml"),
            Entry::file("readme-old.txt"),
        ]
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let entries = listing();
        assert_eq!(filter_entries(&entries, ""), entries);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let entries = listing();
        let filtered = filter_entries(&entries, "ReAdMe");
        assert_eq!(names(&filtered), vec!["..", "README.md", "readme-old.txt"]);
    }

    #[test]
    fn test_parent_ref_survives_no_match() {
        let entries = listing();
        let filtered = filter_entries(&entries, "zzz");
        assert_eq!(names(&filtered), vec![".."]);
    }

    #[test]
    fn test_parent_ref_kept_for_every_query() {
        let entries = listing();
        for query in ["a", "x", ".", "..", "src", "🦀", "TOML"] {
            let filtered = filter_entries(&entries, query);
            assert!(filtered.iter().any(Entry::is_parent_ref), "{query}");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = listing();
        for query in ["", "r", "md", "zzz", "C"] {
            let once = filter_entries(&entries, query);
            let twice = filter_entries(&once, query);
            assert_eq!(once, twice, "{query}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let entries = listing();
        let filtered = filter_entries(&entries, "r");
        assert_eq!(
            names(&filtered),
            vec!["..", "src", "README.md", "Cargo.toml", "readme-old.txt"]
        );
    }
}
