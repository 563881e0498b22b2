use crate::catalog;
use crate::models::dashboard::{Dashboard, SprintCard};

#[cfg_attr(feature = "app", tauri::command)]
pub async fn get_dashboard() -> Result<Dashboard, String> {
    Ok(build_dashboard())
}

pub fn build_dashboard() -> Dashboard {
    let sprints = catalog::recent_sprints()
        .into_iter()
        .map(|sprint| SprintCard {
            status_label: sprint.status_label(),
            sprint,
        })
        .collect();

    Dashboard {
        metrics: catalog::dashboard_metrics(),
        sprints,
    }
}
