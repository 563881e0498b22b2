use chrono::{Local, NaiveDate};

use crate::catalog;
use crate::filters::work::filter_work_items;
use crate::models::user::UserProfile;
use crate::models::work_item::{WorkCard, WorkFilter};

/// `viewer` is the signed-in user's profile; My Work is empty without one.
#[cfg_attr(feature = "app", tauri::command)]
pub async fn list_work_items(
    filter: WorkFilter,
    viewer: Option<UserProfile>,
) -> Result<Vec<WorkCard>, String> {
    Ok(list_work_items_on(
        filter,
        viewer.as_ref(),
        Local::now().date_naive(),
    ))
}

pub fn list_work_items_on(
    filter: WorkFilter,
    viewer: Option<&UserProfile>,
    today: NaiveDate,
) -> Vec<WorkCard> {
    let viewer_name = viewer.map(UserProfile::display_name);
    let items = catalog::work_items(today);
    let filtered = filter_work_items(&items, filter, viewer_name.as_deref(), today);
    log::debug!(
        "Work list {filter:?}: {} of {} items",
        filtered.len(),
        items.len()
    );
    filtered.into_iter().map(WorkCard::from).collect()
}
