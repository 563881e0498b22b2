use crate::filters::notifications::{filter_notifications, mark_all_read, unread_count};
use crate::models::notification::{NotificationFeed, NotificationFilter};
use crate::state::AppState;

#[cfg(feature = "app")]
#[tauri::command]
pub async fn list_notifications(
    filter: NotificationFilter,
    state: tauri::State<'_, AppState>,
) -> Result<NotificationFeed, String> {
    list_notifications_internal(state.inner(), filter)
}

#[cfg(feature = "app")]
#[tauri::command]
pub async fn mark_all_notifications_read(
    state: tauri::State<'_, AppState>,
) -> Result<NotificationFeed, String> {
    mark_all_notifications_read_internal(state.inner())
}

pub fn list_notifications_internal(
    state: &AppState,
    filter: NotificationFilter,
) -> Result<NotificationFeed, String> {
    let items = state.notifications()?;
    Ok(NotificationFeed {
        total: items.len(),
        unread: unread_count(&items),
        items: filter_notifications(&items, filter),
    })
}

pub fn mark_all_notifications_read_internal(state: &AppState) -> Result<NotificationFeed, String> {
    let mut items = state.notifications()?;
    let changed = mark_all_read(&mut items);
    log::info!("Marked {changed} notifications read");

    Ok(NotificationFeed {
        total: items.len(),
        unread: 0,
        items: items.clone(),
    })
}
