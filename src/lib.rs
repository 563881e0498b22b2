pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod state;

/// Installs the `env_logger` backend once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(feature = "app")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{
        dashboard::get_dashboard,
        issues::create_issue,
        notifications::{list_notifications, mark_all_notifications_read},
        profile::get_user_initials,
        projects::{
            create_project, list_project_leads, list_project_templates, list_projects,
            suggest_project_key,
        },
        search::search_records,
        settings::{get_settings, save_settings},
        work::list_work_items,
    };
    use catalog::RecordSource;
    use std::sync::Arc;

    init_logging();
    let config = config::AppConfig::from_env();
    log::info!(
        "Starting PlanUp (search delay {:?}, create delay {:?})",
        config.search_delay,
        config.create_delay
    );

    let records = catalog::StaticCatalog::default();
    if let Err(e) = models::record::validate_records(&records.list_records()) {
        log::error!("Bundled records are inconsistent: {e}");
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(state::AppState::new(config, Arc::new(records)))
        .invoke_handler(tauri::generate_handler![
            search_records,
            list_work_items,
            list_notifications,
            mark_all_notifications_read,
            list_projects,
            list_project_templates,
            list_project_leads,
            suggest_project_key,
            create_project,
            create_issue,
            get_dashboard,
            get_user_initials,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
