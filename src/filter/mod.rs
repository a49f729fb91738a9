use crate::models::Project;

/// Sort key for project lists (active and trash share the same row shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum SortKey {
    UpdatedAt,
    CreatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SortOrder {
    Asc,
    Desc,
}

pub(crate) trait ProjectListEntry {
    fn title(&self) -> &str;
    fn created_at(&self) -> &str;
    fn updated_at(&self) -> &str;
}

impl ProjectListEntry for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

/// Filter by case-insensitive title substring, then sort on the chosen
/// timestamp.
///
/// Rules:
/// - A blank/whitespace query keeps every row.
/// - Sort compares the ISO-8601 strings directly (lexicographic order is
///   chronological for the backend's uniform UTC timestamps).
/// - Stable: rows with equal timestamps keep their incoming order.
///
/// Pure function of its inputs; list pages re-derive it on every change to
/// the backend snapshot, the query, or the sort controls.
pub(crate) fn filter_and_sort<T: ProjectListEntry + Clone>(
    items: &[T],
    query: &str,
    key: SortKey,
    order: SortOrder,
) -> Vec<T> {
    let needle = query.trim().to_lowercase();

    let mut out: Vec<T> = items
        .iter()
        .filter(|item| needle.is_empty() || item.title().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let (ka, kb) = match key {
            SortKey::UpdatedAt => (a.updated_at(), b.updated_at()),
            SortKey::CreatedAt => (a.created_at(), b.created_at()),
        };
        match order {
            SortOrder::Asc => ka.cmp(kb),
            SortOrder::Desc => kb.cmp(ka),
        }
    });

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, created_at: &str, updated_at: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            created_at: created_at.to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("1", "Algebra 1", "2025-01-01T00:00:00Z", "2025-03-01T00:00:00Z"),
            project("2", "Geometry", "2025-02-01T00:00:00Z", "2025-01-15T00:00:00Z"),
            project("3", "algebra 2", "2025-01-20T00:00:00Z", "2025-02-10T00:00:00Z"),
        ]
    }

    #[test]
    fn test_blank_query_keeps_membership() {
        let items = sample();
        let out = filter_and_sort(&items, "", SortKey::UpdatedAt, SortOrder::Desc);
        assert_eq!(out.len(), 3);
        let out = filter_and_sort(&items, "   ", SortKey::UpdatedAt, SortOrder::Desc);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let items = sample();
        let out = filter_and_sort(&items, "ALGEBRA", SortKey::UpdatedAt, SortOrder::Desc);
        let titles: Vec<&str> = out.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Algebra 1", "algebra 2"]);
    }

    #[test]
    fn test_query_with_no_match_yields_empty() {
        let items = sample();
        let out = filter_and_sort(&items, "calculus", SortKey::UpdatedAt, SortOrder::Desc);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sort_by_updated_at_both_orders() {
        let items = sample();

        let desc = filter_and_sort(&items, "", SortKey::UpdatedAt, SortOrder::Desc);
        let ids: Vec<&str> = desc.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);

        let asc = filter_and_sort(&items, "", SortKey::UpdatedAt, SortOrder::Asc);
        let ids: Vec<&str> = asc.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_created_at() {
        let items = sample();
        let asc = filter_and_sort(&items, "", SortKey::CreatedAt, SortOrder::Asc);
        let ids: Vec<&str> = asc.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let t = "2025-01-01T00:00:00Z";
        let items = vec![
            project("a", "One", t, t),
            project("b", "Two", t, t),
            project("c", "Three", t, t),
        ];

        let once = filter_and_sort(&items, "", SortKey::UpdatedAt, SortOrder::Desc);
        let twice = filter_and_sort(&once, "", SortKey::UpdatedAt, SortOrder::Desc);

        let ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
