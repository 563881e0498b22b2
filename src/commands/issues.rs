use crate::error::PlanUpError;
use crate::models::project::{CreationReceipt, NewIssue};
use crate::models::record::Priority;
use crate::state::AppState;

#[cfg(feature = "app")]
#[tauri::command]
pub async fn create_issue(
    issue: NewIssue,
    state: tauri::State<'_, AppState>,
) -> Result<CreationReceipt, String> {
    create_issue_internal(state.inner(), issue).await
}

pub async fn create_issue_internal(
    state: &AppState,
    issue: NewIssue,
) -> Result<CreationReceipt, String> {
    if issue.title.trim().is_empty() {
        let err = PlanUpError::validation("Please enter a title for the issue");
        log::warn!("Rejected new issue: {err}");
        return Err(err.into());
    }

    if !state.config.create_delay.is_zero() {
        tokio::time::sleep(state.config.create_delay).await;
    }

    let receipt = CreationReceipt {
        id: uuid::Uuid::new_v4().to_string(),
        title: issue.title.trim().to_string(),
        created_at: chrono::Utc::now().timestamp(),
        message: "Issue created successfully!".to_string(),
        key: None,
        priority: Some(Priority::from(issue.priority)),
    };
    log::info!("Created issue {:?} ({})", receipt.title, receipt.id);
    Ok(receipt)
}
