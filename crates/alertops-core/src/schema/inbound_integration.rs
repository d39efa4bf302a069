// ── alertops_inbound_integration ──
//
// One resource for API, email, chat and heartbeat integrations. Every
// nested field is optional; settings blocks that do not match `type` are
// normally left out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{block, defaults};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundIntegrationConfig {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_integration_id: Option<i64>,
    pub inbound_integration_name: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(default = "defaults::yes", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub bridge: Option<Bridge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_template_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub api_settings: Option<ApiSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_box: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub email_settings: Option<EmailSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub chat_settings: Option<ChatSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub heartbeat_settings: Option<HeartbeatSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval_in_min: Option<i64>,
}

// ── API settings ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bidirection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub url_mapping: Option<UrlMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub alert_tags: Option<AlertTags>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delaying_or_grouping: Option<DelayingOrGrouping>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub filters_to_match_json_or_form_fields: Option<FieldFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub escalation_policy_override: Option<EscalationPolicyOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_recipient_groups: Vec<DynamicRecipientGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub open_alert_when: Option<AlertCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub close_alert_when: Option<SimpleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub update_alert_when: Option<SimpleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<String>,
    /// Free-form sample payload, kept as raw JSON values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sample_field_value: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_alert_fields: Vec<CustomAlertField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub attachments: Option<Attachments>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCondition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAlertField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collection: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
}

// ── Delaying / grouping ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayingOrGrouping {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delaying_rule: Option<DelayingRule>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub grouping_rule: Option<GroupingRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayingRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delay_notifications_for_every_x_alerts: Option<EveryXAlerts>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delay_notifications_for_every_x_minutes: Option<EveryXMinutes>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delay_notifications_for_every_x_alerts_within_x_minutes: Option<EveryXAlertsWithinXMinutes>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delay_notifications_until_support_hours: Option<UntilSupportHours>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveryXAlerts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_x_alerts: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveryXMinutes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_x_minutes: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveryXAlertsWithinXMinutes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_x_alerts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_x_minutes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntilSupportHours {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_schedules: Vec<WeeklySchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub days_of_week: Option<DaysOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub end_time: Option<TimeOfDay>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOfWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fri: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub grouping_with_in_x_minutes: Option<EveryXMinutes>,
}

// ── Field filters ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilters {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub add_all_filter: Option<FilterSet>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub add_any_filter: Option<FilterSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FieldFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub condition: Option<FieldFilterCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilterCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
}

// ── Escalation overrides / dynamic recipients ───────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationPolicyOverride {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub based_on_time_of_day: Option<TimeOfDayOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on_source_data: Vec<SourceDataOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayOverride {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub week: Option<DaysOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub end_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDataOverride {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub condition: Option<SourceDataCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDataCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicRecipientGroup {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub condition: Option<SourceDataCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

// ── Email settings ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub email_mapping: Option<EmailMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub alert_tags: Option<EmailAlertTags>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub delaying_or_grouping: Option<DelayingOrGrouping>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub filters_to_match_incoming_emails: Option<EmailFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub escalation_policy_override: Option<EscalationPolicyOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_recipient_groups: Vec<DynamicRecipientGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_incoming_email_will_open_an_alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub source_name: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub source_identifier: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub open_alert_when: Option<AlertCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub close_alert_when: Option<SimpleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub update_alert_when: Option<SimpleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_duplicates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub long_text: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub short_text: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub source_url: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub assignee_mail_official: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub recipient_user: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub recipient_groups: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub topic: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_alert_fields: Vec<EmailCustomAlertField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCustomAlertField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAlertTags {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub business_service: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub component_type: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub component_name: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub data_center: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub environment: Option<EmailField>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub problem_type: Option<EmailField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFilters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_filters: Vec<EmailContentFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_filters: Vec<EmailContentFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender_or_recipient_filters: Vec<EmailRecipientFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority_filters: Vec<EmailPriorityFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub condition: Option<EmailFilterCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFilterCondition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecipientFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPriorityFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
}

// ── Chat settings ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub url_mapping: Option<ChatUrlMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub escalation_policy_override: Option<EscalationPolicyOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUrlMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_value: Option<String>,
}
