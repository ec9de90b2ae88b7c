use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// One person in a pod's workflow. Ids are unique within a pod only.
///
/// Timestamps are kept as the caller sent them; the service never parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub task_description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub handoff_link: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub work_started_at: Option<String>,
    #[serde(default)]
    pub work_completed_at: Option<String>,
    #[serde(default)]
    pub actual_time_spent: f64,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            task_description: None,
            start_date: None,
            end_date: None,
            handoff_link: String::new(),
            completed: false,
            work_started_at: None,
            work_completed_at: None,
            actual_time_spent: 0.0,
        }
    }

    /// "Name (role)" as shown in chat messages.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

// ---------------------------------------------------------------------------
// Pod
// ---------------------------------------------------------------------------

/// Snapshot of a pod as the front-end holds it. Supplied whole on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub current_stage: i64,
    pub members: Vec<Member>,
    pub status: String,
    pub workflow_order: Vec<String>,
}

impl Pod {
    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }
}

// ---------------------------------------------------------------------------
// Request / result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub pod: Pod,
    pub current_member_id: String,
    pub handoff_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub success: bool,
    pub message: String,
    pub next_member_name: Option<String>,
}
