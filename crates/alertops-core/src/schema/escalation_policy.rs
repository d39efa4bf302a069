// ── alertops_escalation_policy ──
//
// policy -> member_roles -> contact_methods
// policy -> options -> {acknowledgement, assignment, escalate, close, notification_settings}

use serde::{Deserialize, Serialize};

use super::block;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct EscalationPolicyConfig {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_id: Option<i64>,
    pub escalation_policy_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub enabled: bool,
    pub quick_launch: bool,
    pub notify_using_centralized_settings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_before_notifying_next_group_in_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_roles: Vec<MemberRole>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub group_contact_notifications: Option<GroupContactNotifications>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<WorkflowRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_integrations: Vec<OutboundIntegration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_actions: Vec<OutboundAction>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub options: Option<Options>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRole {
    pub member_role_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_between_members_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_wait_time_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_retries: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_methods: Vec<RoleContactMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleContactMethod {
    pub contact_method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_times: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_bcc_or_cc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupContactNotifications {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_methods: Vec<GroupNotificationMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNotificationMethod {
    pub contact_method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_bcc_or_cc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRef {
    pub workflow_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundIntegration {
    pub outbound_integration_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_in_sec: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<OutboundIntegrationAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundIntegrationAction {
    pub action_name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundAction {
    pub action_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub acknowledgement: Option<Channels>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub assignment: Option<Channels>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub escalate: Option<Channels>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub close: Option<Channels>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_name_for_reply: Option<String>,
    /// Fractional hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_in_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_alert_id_in_subject: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_email_per_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_message_per_recipient: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_group_first: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<Recipient>,
}

/// Channels used when an alert is acknowledged, assigned, escalated or closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_chat: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub recipient_type_id: i64,
    pub recipient_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}
