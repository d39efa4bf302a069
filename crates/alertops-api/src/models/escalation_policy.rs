// ── Escalation policy wire types ──
//
// The deepest tree in the API: policy -> options -> notification settings,
// policy -> member roles -> contact methods.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct EscalationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_id: Option<i64>,
    #[serde(default)]
    pub escalation_policy_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub quick_launch: bool,
    #[serde(default)]
    pub notify_using_centralized_settings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_roles: Option<Vec<MemberRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_before_notifying_next_group_in_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_contact_notifications: Option<GroupContactNotifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<PolicyWorkflow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_integrations: Option<Vec<OutboundIntegration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_actions: Option<Vec<OutboundAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PolicyOptions>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_methods: Option<Vec<PolicyContactMethod>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContactMethod {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_methods: Option<Vec<GroupNotificationMethod>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNotificationMethod {
    pub contact_method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_bcc_or_cc: Option<String>,
}

/// Soft reference to a workflow by id and (optionally) name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyWorkflow {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<OutboundIntegrationAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundIntegrationAction {
    pub action_name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundAction {
    pub action_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<OptionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<OptionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalate: Option<OptionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<OptionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_name_for_reply: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
}

/// Which channels an acknowledgement/assignment/escalate/close event uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSettings {
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

/// Envelope returned by `GET /api/v2/escalation_policies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EscalationPolicyList {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub escalation_policies: Vec<EscalationPolicy>,
}
