use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetric {
    pub title: String,
    pub value: u32,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintProgress {
    pub name: String,
    pub progress: u8,
    pub days_left: u32,
}

impl SprintProgress {
    pub fn status_label(&self) -> String {
        if self.days_left > 0 {
            format!("{} days left", self.days_left)
        } else {
            "Completed".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintCard {
    #[serde(flatten)]
    pub sprint: SprintProgress,
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: Vec<DashboardMetric>,
    pub sprints: Vec<SprintCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprint_label_counts_down_then_completes() {
        let mut sprint = SprintProgress {
            name: "Sprint 23".to_string(),
            progress: 85,
            days_left: 3,
        };
        assert_eq!(sprint.status_label(), "3 days left");

        sprint.days_left = 0;
        assert_eq!(sprint.status_label(), "Completed");
    }
}
