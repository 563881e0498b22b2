use crate::models::user::UserProfile;

/// Avatar text for the signed-in user, from the identity provider's profile.
#[cfg_attr(feature = "app", tauri::command)]
pub async fn get_user_initials(profile: Option<UserProfile>) -> Result<String, String> {
    Ok(profile.unwrap_or_default().initials())
}
