use chrono::{Duration, NaiveDate};

use crate::models::record::RecordStatus;
use crate::models::work_item::{WorkFilter, WorkItem};

/// Items touched within this many days count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Narrows the All Work list. `viewer` is the signed-in user's display name.
pub fn filter_work_items(
    items: &[WorkItem],
    filter: WorkFilter,
    viewer: Option<&str>,
    today: NaiveDate,
) -> Vec<WorkItem> {
    let recent_cutoff = today - Duration::days(RECENT_WINDOW_DAYS);

    items
        .iter()
        .filter(|item| match filter {
            WorkFilter::All => true,
            WorkFilter::MyWork => viewer
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .is_some_and(|name| item.assignee.to_lowercase() == name.to_lowercase()),
            WorkFilter::Recent => item.updated_on >= recent_cutoff && item.updated_on <= today,
            WorkFilter::Overdue => {
                item.status != RecordStatus::Done && item.due_on.is_some_and(|due| due < today)
            }
        })
        .cloned()
        .collect()
}
