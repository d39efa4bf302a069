// ── Workflow wire types ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    #[serde(default)]
    pub workflow_name: String,
    /// `Alert`, `Notification` or `Message`.
    #[serde(default)]
    pub workflow_type: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub scheduled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<i64>,
    #[serde(default)]
    pub conditions: Vec<WorkflowCondition>,
    #[serde(default)]
    pub actions: Vec<WorkflowAction>,
    /// Computed by the server.
    #[serde(default, skip_serializing)]
    pub is_used: Option<bool>,
    /// Computed by the server.
    #[serde(default, skip_serializing)]
    pub is_bidirection: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(rename = "match")]
    pub match_kind: String,
    pub name: String,
    pub operator: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowAction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_to_original_recipients: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_to_sender: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_to_owner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_new_thread: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}

/// Envelope returned by `GET /api/v2/workflows`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowList {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}
