use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::PlanUpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Issue,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
    Active,
}

impl RecordStatus {
    /// Whether this status is drawn from the set allowed for `kind`.
    pub fn allowed_for(self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Issue => matches!(self, Self::ToDo | Self::InProgress | Self::Done),
            RecordKind::Project => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Active => "Active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A searchable unit of work (issue) or a container of work (project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Parent project name, issues only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Completion percentage, projects only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl Record {
    pub fn issue(
        id: &str,
        title: &str,
        description: &str,
        status: RecordStatus,
        priority: Priority,
        project: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind: RecordKind::Issue,
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority: Some(priority),
            project: Some(project.to_string()),
            progress: None,
        }
    }

    pub fn project(
        id: &str,
        title: &str,
        description: &str,
        status: RecordStatus,
        progress: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind: RecordKind::Project,
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority: None,
            project: None,
            progress: Some(progress),
        }
    }

    pub fn is_issue(&self) -> bool {
        self.kind == RecordKind::Issue
    }

    fn check(&self) -> Result<(), String> {
        let is_issue = self.is_issue();
        if self.priority.is_some() != is_issue {
            return Err("priority must be set on issues and only on issues".to_string());
        }
        if self.progress.is_some() == is_issue {
            return Err("progress must be set on projects and only on projects".to_string());
        }
        if let Some(progress) = self.progress {
            if progress > 100 {
                return Err(format!("progress {progress} is outside 0-100"));
            }
        }
        if !self.status.allowed_for(self.kind) {
            return Err(format!("status '{}' is not valid for an issue", self.status.label()));
        }
        Ok(())
    }
}

/// Checks the record set invariants: unique ids, kind-specific fields and statuses.
pub fn validate_records(records: &[Record]) -> Result<(), PlanUpError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(PlanUpError::DuplicateRecordId(record.id.clone()));
        }
        record.check().map_err(|reason| PlanUpError::InvalidRecord {
            id: record.id.clone(),
            reason,
        })?;
    }
    Ok(())
}
