use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::record::{Priority, RecordStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    Bug,
    Story,
    Task,
}

/// An issue card on the All Work screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    /// Project key, e.g. "MAD".
    pub project: String,
    pub priority: Priority,
    pub status: RecordStatus,
    pub assignee: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub updated_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
}

impl WorkItem {
    /// Avatar text: the first character of each part of the assignee's name.
    pub fn assignee_initials(&self) -> String {
        self.assignee
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A work item as the All Work screen renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCard {
    #[serde(flatten)]
    pub item: WorkItem,
    pub assignee_initials: String,
}

impl From<WorkItem> for WorkCard {
    fn from(item: WorkItem) -> Self {
        Self {
            assignee_initials: item.assignee_initials(),
            item,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkFilter {
    All,
    #[serde(rename = "My Work")]
    MyWork,
    Recent,
    Overdue,
}
