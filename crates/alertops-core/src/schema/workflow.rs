// ── alertops_workflow ──

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    pub workflow_name: String,
    /// `Alert`, `Notification` or `Message`.
    pub workflow_type: String,
    pub enabled: bool,
    pub alert_type: String,
    pub scheduled: bool,
    #[serde(default = "defaults::zero", skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<i64>,
    /// Required, may be empty.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_used: Option<bool>,
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bidirection: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
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
pub struct Action {
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}
