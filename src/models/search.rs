use serde::{Deserialize, Serialize};

use crate::models::record::{Record, RecordKind};

/// Coarse type selector offered by the search modal.
///
/// Unknown selector strings are kept rather than rejected; they simply match
/// no record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchCategory {
    All,
    Issues,
    Projects,
    Users,
    Unrecognized(String),
}

impl SearchCategory {
    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Issues => "issues",
            Self::Projects => "projects",
            Self::Users => "users",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Type check applied after singularizing the category name.
    pub fn admits(&self, kind: RecordKind) -> bool {
        match self {
            Self::All => true,
            Self::Issues => kind == RecordKind::Issue,
            Self::Projects => kind == RecordKind::Project,
            Self::Users | Self::Unrecognized(_) => false,
        }
    }
}

impl From<&str> for SearchCategory {
    fn from(raw: &str) -> Self {
        match raw {
            "all" => Self::All,
            "issues" => Self::Issues,
            "projects" => Self::Projects,
            "users" => Self::Users,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SearchCategory {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<SearchCategory> for String {
    fn from(category: SearchCategory) -> Self {
        category.key().to_string()
    }
}

/// Outcome of one search request as seen by the search modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub category: SearchCategory,
    pub generation: u64,
    /// Set when a newer request started before this one finished; results are then empty.
    pub superseded: bool,
    pub results: Vec<Record>,
}
