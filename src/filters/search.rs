use crate::models::record::Record;
use crate::models::search::SearchCategory;

/// Stable, case-insensitive substring filter over a fixed record set.
///
/// - A blank query (whitespace only) matches nothing, whatever the category.
/// - A record matches when the lower-cased query occurs in its title,
///   description, or parent project name.
/// - `all` skips the type check, `issues`/`projects` require the singular
///   type, and `users` or any unknown category match nothing.
///
/// Results keep the order of `records`.
pub fn search(records: &[Record], query: &str, category: &SearchCategory) -> Vec<Record> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| category.admits(record.kind) && matches_query(record, &needle))
        .cloned()
        .collect()
}

fn matches_query(record: &Record, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(record.title.as_str())
        || contains(record.description.as_str())
        || record.project.as_deref().is_some_and(contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{Priority, RecordStatus};

    fn sample() -> Vec<Record> {
        vec![
            Record::issue(
                "1",
                "Fix login bug",
                "Users unable to login with correct credentials",
                RecordStatus::InProgress,
                Priority::High,
                "Mobile App Development",
            ),
            Record::project(
                "2",
                "Website Redesign",
                "Complete redesign of company website",
                RecordStatus::Active,
                45,
            ),
        ]
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn matches_title_across_all_categories() {
        let found = search(&sample(), "login", &SearchCategory::All);
        assert_eq!(titles(&found), vec!["Fix login bug"]);
    }

    #[test]
    fn category_excludes_other_types() {
        assert!(search(&sample(), "web", &SearchCategory::Issues).is_empty());
        let found = search(&sample(), "web", &SearchCategory::Projects);
        assert_eq!(titles(&found), vec!["Website Redesign"]);
    }

    #[test]
    fn matches_through_parent_project_name() {
        let found = search(&sample(), "mobile", &SearchCategory::All);
        assert_eq!(titles(&found), vec!["Fix login bug"]);
    }

    #[test]
    fn comparison_ignores_case() {
        let found = search(&sample(), "WEBSITE", &SearchCategory::All);
        assert_eq!(titles(&found), vec!["Website Redesign"]);
    }

    #[test]
    fn blank_query_yields_nothing() {
        for category in ["all", "issues", "projects", "users"] {
            assert!(search(&sample(), "", &SearchCategory::from(category)).is_empty());
            assert!(search(&sample(), "   ", &SearchCategory::from(category)).is_empty());
        }
    }

    #[test]
    fn users_and_unknown_categories_match_nothing() {
        assert!(search(&sample(), "e", &SearchCategory::Users).is_empty());
        assert!(search(&sample(), "e", &SearchCategory::from("issue")).is_empty());
    }

    #[test]
    fn untrimmed_query_is_matched_verbatim() {
        let leading = search(&sample(), " login", &SearchCategory::All);
        assert_eq!(titles(&leading), vec!["Fix login bug"]);
        let trailing = search(&sample(), "login ", &SearchCategory::All);
        assert_eq!(titles(&trailing), vec!["Fix login bug"]);
        assert!(search(&sample(), "bug ", &SearchCategory::All).is_empty());
    }

    #[test]
    fn preserves_source_order() {
        let found = search(&sample(), "e", &SearchCategory::All);
        assert_eq!(titles(&found), vec!["Fix login bug", "Website Redesign"]);
    }
}
