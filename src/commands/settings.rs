use serde_json::{json, Map, Value};

use crate::state::AppState;

const SETTINGS_SCHEMA_VERSION: i64 = 1;

#[cfg(feature = "app")]
#[tauri::command]
pub async fn get_settings(state: tauri::State<'_, AppState>) -> Result<Value, String> {
    get_settings_internal(state.inner())
}

#[cfg(feature = "app")]
#[tauri::command]
pub async fn save_settings(
    state: tauri::State<'_, AppState>,
    settings: Value,
) -> Result<Value, String> {
    save_settings_internal(state.inner(), settings)
}

pub fn get_settings_internal(state: &AppState) -> Result<Value, String> {
    let mut current = state.settings()?;
    let migrated = migrate_settings(current.clone());
    *current = migrated.clone();
    Ok(migrated)
}

/// Merges a partial update into the session settings. Nothing is written to disk.
pub fn save_settings_internal(state: &AppState, settings: Value) -> Result<Value, String> {
    let mut current = state.settings()?;
    let mut merged = current.clone();
    apply_update(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    *current = migrated.clone();
    log::debug!("Settings updated: {migrated}");
    Ok(migrated)
}

pub fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "notificationsEnabled": true,
        "darkModeEnabled": false,
        "emailNotifications": true,
        "colorScheme": "system"
    })
}

fn migrate_settings(input: Value) -> Value {
    let mut settings = match input {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    fill_missing_defaults(&mut settings);
    sanitize_settings(&mut settings);
    settings.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));

    Value::Object(settings)
}

fn fill_missing_defaults(settings: &mut Map<String, Value>) {
    if let Value::Object(defaults) = default_settings() {
        for (key, value) in defaults {
            settings.entry(key).or_insert(value);
        }
    }
}

/// Settings are flat toggles, so each incoming key replaces the stored value.
fn apply_update(settings: &mut Value, update: &Value) {
    let Some(changes) = update.as_object() else {
        log::warn!("Ignoring settings update that is not an object: {update}");
        return;
    };

    match settings.as_object_mut() {
        Some(current) => {
            for (key, value) in changes {
                current.insert(key.clone(), value.clone());
            }
        }
        None => *settings = Value::Object(changes.clone()),
    }
}

fn sanitize_settings(settings: &mut Map<String, Value>) {
    ensure_bool(settings, "notificationsEnabled", true);
    ensure_bool(settings, "darkModeEnabled", false);
    ensure_bool(settings, "emailNotifications", true);
    sanitize_enum(settings, "colorScheme", &["system", "light", "dark"], "system");
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_fills_defaults_and_stamps_version() {
        let migrated = migrate_settings(json!({ "darkModeEnabled": true }));

        assert_eq!(migrated["darkModeEnabled"], json!(true));
        assert_eq!(migrated["notificationsEnabled"], json!(true));
        assert_eq!(migrated["schema_version"], json!(SETTINGS_SCHEMA_VERSION));
    }

    #[test]
    fn non_object_input_resets_to_defaults() {
        assert_eq!(migrate_settings(json!("garbage")), default_settings());
    }

    #[test]
    fn invalid_values_are_sanitized() {
        let mut existing = default_settings();
        apply_update(
            &mut existing,
            &json!({ "emailNotifications": "yes", "colorScheme": "neon" }),
        );
        let migrated = migrate_settings(existing);

        assert_eq!(migrated["emailNotifications"], json!(true));
        assert_eq!(migrated["colorScheme"], json!("system"));
    }

    #[test]
    fn non_object_update_is_ignored() {
        let mut existing = default_settings();
        apply_update(&mut existing, &json!(["darkModeEnabled"]));
        assert_eq!(existing, default_settings());

        apply_update(&mut existing, &json!({ "darkModeEnabled": true }));
        assert_eq!(existing["darkModeEnabled"], json!(true));
        assert_eq!(existing["notificationsEnabled"], json!(true));
    }
}
