//! View Projection
//!
//! Derives the display order from the canonical list: search filter,
//! pinned first, newest first. Pure; the input is never touched.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::{parse_timestamp, Record};

/// Filter `records` by `search_term` and sort for display
pub fn project<R: Record>(records: &[R], search_term: &str) -> Vec<R> {
    let needle = search_term.to_lowercase();

    let mut visible: Vec<(Option<DateTime<Utc>>, &R)> = records
        .iter()
        .filter(|r| matches_term(*r, &needle))
        .map(|r| (parse_timestamp(r.created_at()), r))
        .collect();

    // sort_by is stable: equal keys keep canonical order
    visible.sort_by(|(a_at, a), (b_at, b)| {
        b.is_pinned()
            .cmp(&a.is_pinned())
            .then_with(|| newest_first(a_at, b_at))
    });

    visible.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Case-insensitive substring match on primary or secondary text
pub fn matches_term<R: Record>(record: &R, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || record.primary_text().to_lowercase().contains(lowered_term)
        || record.secondary_text().to_lowercase().contains(lowered_term)
}

// Unparseable timestamps sort as the oldest
fn newest_first(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bookmark, BookmarkDraft, Snippet, SnippetDraft};

    fn snippet(id: i64, key: &str, value: &str, created_at: &str, pinned: bool) -> Snippet {
        let mut s = Snippet::from_draft(id, created_at.to_string(), &SnippetDraft::new(key, value));
        s.is_pinned = pinned;
        s
    }

    fn ids<R: Record>(records: &[R]) -> Vec<i64> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_empty_term_sorts_pinned_then_newest() {
        let records = vec![
            snippet(1, "a", "1", "2024-01-01T00:00:00.000Z", false),
            snippet(2, "b", "2", "2024-01-03T00:00:00.000Z", false),
            snippet(3, "c", "3", "2024-01-02T00:00:00.000Z", true),
            snippet(4, "d", "4", "2024-01-04T00:00:00.000Z", true),
        ];
        assert_eq!(ids(&project(&records, "")), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let at = "2024-01-01T00:00:00.000Z";
        let records = vec![
            snippet(10, "a", "", at, false),
            snippet(11, "b", "", at, true),
            snippet(12, "c", "", at, false),
            snippet(13, "d", "", at, true),
        ];
        assert_eq!(ids(&project(&records, "")), vec![11, 13, 10, 12]);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_fields() {
        let at = "2024-01-01T00:00:00.000Z";
        let records = vec![
            snippet(1, "API_KEY", "abc", at, false),
            snippet(2, "email", "me@Api.dev", at, false),
            snippet(3, "phone", "555", at, false),
        ];
        assert_eq!(ids(&project(&records, "api")), vec![1, 2]);
        assert_eq!(ids(&project(&records, "PHONE")), vec![3]);
        assert!(project(&records, "zzz").is_empty());
    }

    #[test]
    fn test_projection_is_pure_and_idempotent() {
        let records = vec![
            snippet(1, "a", "x", "2024-01-01T00:00:00.000Z", false),
            snippet(2, "b", "x", "2024-02-01T00:00:00.000Z", true),
        ];
        let before = records.clone();
        let first = project(&records, "x");
        let second = project(&records, "x");
        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_unparseable_timestamp_sorts_last() {
        let records = vec![
            snippet(1, "a", "", "garbage", false),
            snippet(2, "b", "", "2020-01-01T00:00:00.000Z", false),
        ];
        assert_eq!(ids(&project(&records, "")), vec![2, 1]);
    }

    #[test]
    fn test_bookmarks_search_title_and_description() {
        let at = "2024-01-01T00:00:00.000Z";
        let records = vec![
            Bookmark::from_draft(1, at.into(), &BookmarkDraft::new("Rust Book", "learn", "https://doc.rust-lang.org/book")),
            Bookmark::from_draft(2, at.into(), &BookmarkDraft::new("News", "rust weekly", "https://this-week-in-rust.org")),
            Bookmark::from_draft(3, at.into(), &BookmarkDraft::new("Mail", "inbox", "https://rust.example")),
        ];
        // URL is not searched
        assert_eq!(ids(&project(&records, "RUST")), vec![1, 2]);
    }
}
