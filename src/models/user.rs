use serde::{Deserialize, Serialize};

/// Profile fields supplied by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Avatar initials, falling back to the first email and then to "U".
    pub fn initials(&self) -> String {
        let first = first_char(self.first_name.as_deref());
        let last = first_char(self.last_name.as_deref());

        match (first, last) {
            (Some(f), Some(l)) => format!("{f}{l}").to_uppercase(),
            (Some(f), None) => f.to_uppercase().to_string(),
            _ => first_char(self.email_addresses.first().map(String::as_str))
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "U".to_string()),
        }
    }
}

fn first_char(value: Option<&str>) -> Option<char> {
    value.and_then(|v| v.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>, emails: &[&str]) -> UserProfile {
        UserProfile {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email_addresses: emails.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn initials_fall_back_in_order() {
        assert_eq!(profile(Some("jane"), Some("smith"), &[]).initials(), "JS");
        assert_eq!(profile(Some("jane"), None, &["x@y.z"]).initials(), "J");
        assert_eq!(profile(None, Some("smith"), &["mike@company.com"]).initials(), "M");
        assert_eq!(profile(Some(""), None, &[]).initials(), "U");
    }

    #[test]
    fn display_name_skips_missing_parts() {
        assert_eq!(profile(Some("John"), Some("Doe"), &[]).display_name(), "John Doe");
        assert_eq!(profile(None, Some("Doe"), &[]).display_name(), "Doe");
    }
}
