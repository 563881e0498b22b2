use crate::catalog;
use crate::error::PlanUpError;
use crate::models::project::{
    CreationReceipt, NewProject, ProjectLead, ProjectSummary, ProjectTemplate,
};
use crate::state::AppState;

const MAX_KEY_LEN: usize = 3;

#[cfg_attr(feature = "app", tauri::command)]
pub async fn list_projects() -> Result<Vec<ProjectSummary>, String> {
    Ok(catalog::projects())
}

#[cfg_attr(feature = "app", tauri::command)]
pub async fn list_project_templates() -> Result<Vec<ProjectTemplate>, String> {
    Ok(catalog::project_templates())
}

#[cfg_attr(feature = "app", tauri::command)]
pub async fn list_project_leads() -> Result<Vec<ProjectLead>, String> {
    Ok(catalog::project_leads())
}

#[cfg_attr(feature = "app", tauri::command)]
pub async fn suggest_project_key(name: String) -> Result<String, String> {
    Ok(generate_project_key(&name))
}

#[cfg(feature = "app")]
#[tauri::command]
pub async fn create_project(
    project: NewProject,
    state: tauri::State<'_, AppState>,
) -> Result<CreationReceipt, String> {
    create_project_internal(state.inner(), project).await
}

/// Initials of each space-separated word, upper-cased, capped at three characters.
pub fn generate_project_key(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_KEY_LEN)
        .collect()
}

/// Checks the form in the order the wizard reports problems.
pub fn validate_new_project(project: &NewProject) -> Result<(), PlanUpError> {
    if project.name.trim().is_empty() {
        return Err(PlanUpError::validation("Please enter a project name"));
    }
    if project.key.trim().is_empty() {
        return Err(PlanUpError::validation("Please enter a project key"));
    }

    let Some(lead_id) = project.lead_id.as_deref() else {
        return Err(PlanUpError::validation("Please select a project lead"));
    };
    if !catalog::project_leads().iter().any(|lead| lead.id == lead_id) {
        return Err(PlanUpError::UnknownLead(lead_id.to_string()));
    }

    if let Some(template_id) = project.template_id.as_deref() {
        if !catalog::project_templates().iter().any(|t| t.id == template_id) {
            return Err(PlanUpError::UnknownTemplate(template_id.to_string()));
        }
    }

    Ok(())
}

/// Simulated creation: validates, waits out the configured latency, and
/// hands back a receipt. The project list is left untouched.
pub async fn create_project_internal(
    state: &AppState,
    project: NewProject,
) -> Result<CreationReceipt, String> {
    if let Err(e) = validate_new_project(&project) {
        log::warn!("Rejected new project {:?}: {e}", project.name);
        return Err(e.into());
    }

    if !state.config.create_delay.is_zero() {
        tokio::time::sleep(state.config.create_delay).await;
    }

    let receipt = CreationReceipt {
        id: uuid::Uuid::new_v4().to_string(),
        title: project.name.clone(),
        created_at: chrono::Utc::now().timestamp(),
        message: format!("Project \"{}\" created successfully!", project.name),
        key: Some(project.key.trim().to_string()),
        priority: None,
    };
    log::info!("Created project {} ({})", receipt.title, receipt.id);
    Ok(receipt)
}
