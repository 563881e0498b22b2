//! Built-in data set served by the app. The record sets are fixed at start-up;
//! creation flows never write back into them.

use chrono::{Duration, NaiveDate};

use crate::models::dashboard::{DashboardMetric, SprintProgress};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::project::{ProjectLead, ProjectSummary, ProjectTemplate};
use crate::models::record::{Priority, Record, RecordStatus};
use crate::models::work_item::{IssueType, WorkItem};

/// Narrow data-access seam so the search engine never depends on storage.
pub trait RecordSource: Send + Sync {
    fn list_records(&self) -> Vec<Record>;
}

/// Serves the bundled mock records.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<Record>,
}

impl StaticCatalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(search_records())
    }
}

impl RecordSource for StaticCatalog {
    fn list_records(&self) -> Vec<Record> {
        self.records.clone()
    }
}

pub fn search_records() -> Vec<Record> {
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
        Record::issue(
            "3",
            "Dashboard redesign",
            "Redesign the main dashboard interface",
            RecordStatus::ToDo,
            Priority::Medium,
            "Website Redesign",
        ),
        Record::issue(
            "4",
            "Mobile app testing",
            "Comprehensive testing of mobile application",
            RecordStatus::Done,
            Priority::Low,
            "Mobile App Development",
        ),
    ]
}

/// Work list with dates laid out relative to `today`.
pub fn work_items(today: NaiveDate) -> Vec<WorkItem> {
    let day = |offset: i64| today + Duration::days(offset);
    let item = |id: &str,
                title: &str,
                project: &str,
                priority: Priority,
                status: RecordStatus,
                assignee: &str,
                issue_type: IssueType,
                updated: i64,
                due: Option<i64>| WorkItem {
        id: id.to_string(),
        title: title.to_string(),
        project: project.to_string(),
        priority,
        status,
        assignee: assignee.to_string(),
        issue_type,
        updated_on: day(updated),
        due_on: due.map(day),
    };

    vec![
        item(
            "1",
            "Fix login authentication bug",
            "MAD",
            Priority::High,
            RecordStatus::InProgress,
            "John Doe",
            IssueType::Bug,
            -1,
            Some(-2),
        ),
        item(
            "2",
            "Implement user dashboard",
            "MAD",
            Priority::Medium,
            RecordStatus::ToDo,
            "Alice Smith",
            IssueType::Story,
            -3,
            Some(5),
        ),
        item(
            "3",
            "Design mobile app icons",
            "WRD",
            Priority::Low,
            RecordStatus::Done,
            "Mike Johnson",
            IssueType::Task,
            -12,
            Some(-10),
        ),
        item(
            "4",
            "API endpoint testing",
            "API",
            Priority::High,
            RecordStatus::InProgress,
            "Sarah Wilson",
            IssueType::Bug,
            -8,
            Some(1),
        ),
        item(
            "5",
            "Database schema update",
            "DBM",
            Priority::Medium,
            RecordStatus::ToDo,
            "David Brown",
            IssueType::Story,
            -20,
            None,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let entry = |id: &str,
                 kind,
                 title: &str,
                 message: &str,
                 time: &str,
                 read,
                 project: &str| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
        project: project.to_string(),
    };

    vec![
        entry(
            "1",
            NotificationKind::IssueAssigned,
            "Issue assigned to you",
            "You have been assigned to \"Fix login authentication bug\"",
            "2 minutes ago",
            false,
            "MAD",
        ),
        entry(
            "2",
            NotificationKind::Comment,
            "New comment on issue",
            "John Doe commented on \"Implement user dashboard\"",
            "15 minutes ago",
            false,
            "MAD",
        ),
        entry(
            "3",
            NotificationKind::StatusChange,
            "Issue status updated",
            "Issue \"Design mobile app icons\" moved to Done",
            "1 hour ago",
            true,
            "WRD",
        ),
        entry(
            "4",
            NotificationKind::Mention,
            "You were mentioned",
            "Alice Smith mentioned you in a comment",
            "2 hours ago",
            true,
            "API",
        ),
        entry(
            "5",
            NotificationKind::SprintStart,
            "Sprint started",
            "Sprint 23 has started with 15 issues",
            "1 day ago",
            true,
            "MAD",
        ),
        entry(
            "6",
            NotificationKind::Deadline,
            "Deadline approaching",
            "Issue \"API endpoint testing\" is due tomorrow",
            "1 day ago",
            false,
            "API",
        ),
    ]
}

pub fn projects() -> Vec<ProjectSummary> {
    let project = |id: &str, name: &str, key: &str, progress, issues, color: &str| ProjectSummary {
        id: id.to_string(),
        name: name.to_string(),
        key: key.to_string(),
        progress,
        issues,
        color: color.to_string(),
    };

    vec![
        project("1", "Mobile App Development", "MAD", 75, 24, "#FF6B6B"),
        project("2", "Website Redesign", "WRD", 45, 18, "#4ECDC4"),
        project("3", "API Integration", "API", 90, 12, "#45B7D1"),
        project("4", "Database Migration", "DBM", 30, 8, "#96CEB4"),
    ]
}

pub fn project_templates() -> Vec<ProjectTemplate> {
    let template = |id: &str, name: &str, description: &str, icon: &str, color: &str| {
        ProjectTemplate {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    };

    vec![
        template(
            "software",
            "Software Development",
            "Agile software development project",
            "code",
            "#FF6B6B",
        ),
        template(
            "marketing",
            "Marketing Campaign",
            "Digital marketing and campaign management",
            "megaphone",
            "#4ECDC4",
        ),
        template(
            "design",
            "Design Project",
            "UI/UX design and creative projects",
            "brush",
            "#45B7D1",
        ),
        template(
            "research",
            "Research & Analysis",
            "Data analysis and research projects",
            "analytics",
            "#96CEB4",
        ),
        template(
            "custom",
            "Custom Project",
            "Create your own project structure",
            "settings",
            "#FFA726",
        ),
    ]
}

pub fn project_leads() -> Vec<ProjectLead> {
    let lead = |id: &str, name: &str, email: &str, avatar: &str| ProjectLead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
    };

    vec![
        lead("1", "John Doe", "john@company.com", "JD"),
        lead("2", "Jane Smith", "jane@company.com", "JS"),
        lead("3", "Mike Johnson", "mike@company.com", "MJ"),
        lead("4", "Sarah Wilson", "sarah@company.com", "SW"),
    ]
}

pub fn dashboard_metrics() -> Vec<DashboardMetric> {
    let metric = |title: &str, value, icon: &str| DashboardMetric {
        title: title.to_string(),
        value,
        icon: icon.to_string(),
    };

    vec![
        metric("Total Issues", 156, "list"),
        metric("In Progress", 23, "time"),
        metric("Completed", 89, "checkmark-circle"),
        metric("Overdue", 5, "warning"),
    ]
}

pub fn recent_sprints() -> Vec<SprintProgress> {
    [("Sprint 23", 85, 3), ("Sprint 22", 100, 0), ("Sprint 21", 92, 0)]
        .into_iter()
        .map(|(name, progress, days_left)| SprintProgress {
            name: name.to_string(),
            progress,
            days_left,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::validate_records;

    #[test]
    fn bundled_records_satisfy_invariants() {
        validate_records(&search_records()).expect("catalog is valid");
    }

    #[test]
    fn static_catalog_lists_records_in_source_order() {
        let ids: Vec<String> = StaticCatalog::default()
            .list_records()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}
