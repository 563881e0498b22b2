use crate::models::notification::{Notification, NotificationFilter, NotificationKind};

pub fn filter_notifications(
    items: &[Notification],
    filter: NotificationFilter,
) -> Vec<Notification> {
    items
        .iter()
        .filter(|n| match filter {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !n.read,
            NotificationFilter::Mentions => n.kind == NotificationKind::Mention,
            NotificationFilter::Assigned => n.kind == NotificationKind::IssueAssigned,
        })
        .cloned()
        .collect()
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Flags every notification as read, returning how many changed.
pub fn mark_all_read(items: &mut [Notification]) -> usize {
    let mut changed = 0;
    for item in items.iter_mut().filter(|n| !n.read) {
        item.read = true;
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::notifications;

    #[test]
    fn filters_by_read_state_and_kind() {
        let items = notifications();
        let unread = filter_notifications(&items, NotificationFilter::Unread);
        assert_eq!(unread.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), vec!["1", "2", "6"]);

        let mentions = filter_notifications(&items, NotificationFilter::Mentions);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].id, "4");

        let assigned = filter_notifications(&items, NotificationFilter::Assigned);
        assert_eq!(assigned[0].kind, NotificationKind::IssueAssigned);
        assert_eq!(filter_notifications(&items, NotificationFilter::All), items);
    }

    #[test]
    fn mark_all_read_clears_unread_count() {
        let mut items = notifications();
        assert_eq!(unread_count(&items), 3);
        assert_eq!(mark_all_read(&mut items), 3);
        assert_eq!(unread_count(&items), 0);
        assert_eq!(mark_all_read(&mut items), 0);
    }
}
