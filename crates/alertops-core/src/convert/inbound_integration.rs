// ── alertops_inbound_integration conversions ──
//
// Every nested wire object is all-optional, so flatten drops any block the
// API echoes back empty.

use alertops_api::models as wire;

use super::{Expand, expand_block, expand_list, flatten_list, flatten_sparse_block, non_empty};
use crate::error::CoreError;
use crate::schema::inbound_integration::{
    AlertCondition, AlertTags, ApiSettings, Attachments, Bridge, ChatSettings, ChatUrlMapping,
    CustomAlertField, DaysOfWeek, DelayingOrGrouping, DelayingRule, DynamicRecipientGroup,
    EmailAlertTags, EmailContentFilter, EmailCustomAlertField, EmailField, EmailFilterCondition,
    EmailFilters, EmailMapping, EmailPriorityFilter, EmailRecipientFilter, EmailSettings,
    EscalationPolicyOverride, EveryXAlerts, EveryXAlertsWithinXMinutes, EveryXMinutes,
    FieldFilter, FieldFilterCondition, FieldFilters, FilterSet, GroupingRule, HeartbeatSettings,
    InboundIntegrationConfig, SimpleCondition, SourceDataCondition, SourceDataOverride,
    TimeOfDay, TimeOfDayOverride, UntilSupportHours, UrlMapping, WeeklySchedule,
};

impl Expand for InboundIntegrationConfig {
    type Output = wire::InboundIntegration;

    fn expand(&self) -> Result<wire::InboundIntegration, CoreError> {
        Ok(wire::InboundIntegration {
            inbound_integration_id: None,
            inbound_integration_name: self.inbound_integration_name.clone(),
            integration_type: self.integration_type.clone(),
            sequence: self.sequence,
            enabled: self.enabled,
            escalation_policy: self.escalation_policy.clone(),
            recipient_groups: non_empty(&self.recipient_groups),
            recipient_users: non_empty(&self.recipient_users),
            bridge: expand_block(&self.bridge, "bridge")?,
            inbound_template_id: self.inbound_template_id,
            api_settings: expand_block(&self.api_settings, "api_settings")?,
            mail_box: self.mail_box.clone(),
            email_settings: expand_block(&self.email_settings, "email_settings")?,
            chat_settings: expand_block(&self.chat_settings, "chat_settings")?,
            heartbeat_settings: expand_block(&self.heartbeat_settings, "heartbeat_settings")?,
        })
    }
}

impl Expand for Bridge {
    type Output = wire::Bridge;

    fn expand(&self) -> Result<wire::Bridge, CoreError> {
        Ok(wire::Bridge {
            telephone_number: self.telephone_number.clone(),
            access_code: self.access_code.clone(),
        })
    }
}

impl Expand for HeartbeatSettings {
    type Output = wire::HeartbeatSettings;

    fn expand(&self) -> Result<wire::HeartbeatSettings, CoreError> {
        Ok(wire::HeartbeatSettings {
            heartbeat_interval_in_min: self.heartbeat_interval_in_min,
        })
    }
}

// ── API settings ────────────────────────────────────────────────────

impl Expand for ApiSettings {
    type Output = wire::ApiSettings;

    fn expand(&self) -> Result<wire::ApiSettings, CoreError> {
        Ok(wire::ApiSettings {
            is_bidirection: self.is_bidirection,
            url_mapping: expand_block(&self.url_mapping, "url_mapping")?,
            alert_tags: expand_block(&self.alert_tags, "alert_tags")?,
            delaying_or_grouping: expand_block(
                &self.delaying_or_grouping,
                "delaying_or_grouping",
            )?,
            filters_to_match_json_or_form_fields: expand_block(
                &self.filters_to_match_json_or_form_fields,
                "filters_to_match_json_or_form_fields",
            )?,
            escalation_policy_override: expand_block(
                &self.escalation_policy_override,
                "escalation_policy_override",
            )?,
            dynamic_recipient_groups: expand_list(
                &self.dynamic_recipient_groups,
                "dynamic_recipient_groups",
            )?,
        })
    }
}

impl Expand for UrlMapping {
    type Output = wire::UrlMapping;

    fn expand(&self) -> Result<wire::UrlMapping, CoreError> {
        Ok(wire::UrlMapping {
            method: self.method.clone(),
            content: self.content.clone(),
            source: self.source.clone(),
            source_name: self.source_name.clone(),
            is_static: self.is_static,
            source_value: self.source_value.clone(),
            source_id: self.source_id.clone(),
            source_url: self.source_url.clone(),
            severity: self.severity.clone(),
            source_status: self.source_status.clone(),
            assignee: self.assignee.clone(),
            open_alert_when: expand_block(&self.open_alert_when, "open_alert_when")?,
            close_alert_when: expand_block(&self.close_alert_when, "close_alert_when")?,
            update_alert_when: expand_block(&self.update_alert_when, "update_alert_when")?,
            long_text: self.long_text.clone(),
            short_text: self.short_text.clone(),
            subject: self.subject.clone(),
            recipient_user: self.recipient_user.clone(),
            recipient_group: self.recipient_group.clone(),
            topic: self.topic.clone(),
            sample_data: self.sample_data.clone(),
            sample_field_value: (!self.sample_field_value.is_empty())
                .then(|| self.sample_field_value.clone()),
            custom_alert_fields: expand_list(&self.custom_alert_fields, "custom_alert_fields")?,
            attachments: expand_block(&self.attachments, "attachments")?,
        })
    }
}

impl Expand for AlertCondition {
    type Output = wire::AlertCondition;

    fn expand(&self) -> Result<wire::AlertCondition, CoreError> {
        Ok(wire::AlertCondition {
            field_name: self.field_name.clone(),
            condition_type: self.condition_type.clone(),
            values: non_empty(&self.values),
        })
    }
}

impl Expand for SimpleCondition {
    type Output = wire::SimpleCondition;

    fn expand(&self) -> Result<wire::SimpleCondition, CoreError> {
        Ok(wire::SimpleCondition {
            condition_type: self.condition_type.clone(),
            values: non_empty(&self.values),
        })
    }
}

impl Expand for CustomAlertField {
    type Output = wire::CustomAlertField;

    fn expand(&self) -> Result<wire::CustomAlertField, CoreError> {
        Ok(wire::CustomAlertField {
            attribute_name: self.attribute_name.clone(),
            attribute_value: self.attribute_value.clone(),
            required: self.required,
        })
    }
}

impl Expand for Attachments {
    type Output = wire::Attachments;

    fn expand(&self) -> Result<wire::Attachments, CoreError> {
        Ok(wire::Attachments {
            base_path: self.base_path.clone(),
            url: self.url.clone(),
            file_name: self.file_name.clone(),
            is_link: self.is_link,
            is_collection: self.is_collection,
        })
    }
}

impl Expand for AlertTags {
    type Output = wire::AlertTags;

    fn expand(&self) -> Result<wire::AlertTags, CoreError> {
        Ok(wire::AlertTags {
            business_service: self.business_service.clone(),
            component_type: self.component_type.clone(),
            component_name: self.component_name.clone(),
            data_center: self.data_center.clone(),
            environment: self.environment.clone(),
            problem_type: self.problem_type.clone(),
        })
    }
}

// ── Delaying / grouping ─────────────────────────────────────────────

impl Expand for DelayingOrGrouping {
    type Output = wire::DelayingOrGrouping;

    fn expand(&self) -> Result<wire::DelayingOrGrouping, CoreError> {
        Ok(wire::DelayingOrGrouping {
            delaying_rule: expand_block(&self.delaying_rule, "delaying_rule")?,
            grouping_rule: expand_block(&self.grouping_rule, "grouping_rule")?,
        })
    }
}

impl Expand for DelayingRule {
    type Output = wire::DelayingRule;

    fn expand(&self) -> Result<wire::DelayingRule, CoreError> {
        Ok(wire::DelayingRule {
            delay: self.delay,
            delay_notifications_for_every_x_alerts: expand_block(
                &self.delay_notifications_for_every_x_alerts,
                "delay_notifications_for_every_x_alerts",
            )?,
            delay_notifications_for_every_x_minutes: expand_block(
                &self.delay_notifications_for_every_x_minutes,
                "delay_notifications_for_every_x_minutes",
            )?,
            delay_notifications_for_every_x_alerts_within_x_minutes: expand_block(
                &self.delay_notifications_for_every_x_alerts_within_x_minutes,
                "delay_notifications_for_every_x_alerts_within_x_minutes",
            )?,
            delay_notifications_until_support_hours: expand_block(
                &self.delay_notifications_until_support_hours,
                "delay_notifications_until_support_hours",
            )?,
        })
    }
}

impl Expand for EveryXAlerts {
    type Output = wire::EveryXAlerts;

    fn expand(&self) -> Result<wire::EveryXAlerts, CoreError> {
        Ok(wire::EveryXAlerts {
            every_x_alerts: self.every_x_alerts,
        })
    }
}

impl Expand for EveryXMinutes {
    type Output = wire::EveryXMinutes;

    fn expand(&self) -> Result<wire::EveryXMinutes, CoreError> {
        Ok(wire::EveryXMinutes {
            every_x_minutes: self.every_x_minutes,
        })
    }
}

impl Expand for EveryXAlertsWithinXMinutes {
    type Output = wire::EveryXAlertsWithinXMinutes;

    fn expand(&self) -> Result<wire::EveryXAlertsWithinXMinutes, CoreError> {
        Ok(wire::EveryXAlertsWithinXMinutes {
            every_x_alerts: self.every_x_alerts,
            every_x_minutes: self.every_x_minutes,
        })
    }
}

impl Expand for UntilSupportHours {
    type Output = wire::UntilSupportHours;

    fn expand(&self) -> Result<wire::UntilSupportHours, CoreError> {
        Ok(wire::UntilSupportHours {
            weekly_schedules: expand_list(&self.weekly_schedules, "weekly_schedules")?,
        })
    }
}

impl Expand for WeeklySchedule {
    type Output = wire::WeeklySchedule;

    fn expand(&self) -> Result<wire::WeeklySchedule, CoreError> {
        Ok(wire::WeeklySchedule {
            name: self.name.clone(),
            days_of_week: expand_block(&self.days_of_week, "days_of_week")?,
            start_time: expand_block(&self.start_time, "start_time")?,
            end_time: expand_block(&self.end_time, "end_time")?,
        })
    }
}

impl Expand for DaysOfWeek {
    type Output = wire::DaysOfWeek;

    fn expand(&self) -> Result<wire::DaysOfWeek, CoreError> {
        Ok(wire::DaysOfWeek {
            sun: self.sun,
            mon: self.mon,
            tue: self.tue,
            wed: self.wed,
            thu: self.thu,
            fri: self.fri,
            sat: self.sat,
        })
    }
}

impl Expand for TimeOfDay {
    type Output = wire::TimeOfDay;

    fn expand(&self) -> Result<wire::TimeOfDay, CoreError> {
        for (field, value, max) in [("hour", self.hour, 23), ("minute", self.minute, 59)] {
            if let Some(v) = value.filter(|v| !(0..=max).contains(v)) {
                return Err(CoreError::validation(
                    field,
                    format!("{v} is outside 0..={max}"),
                ));
            }
        }
        Ok(wire::TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        })
    }
}

impl Expand for GroupingRule {
    type Output = wire::GroupingRule;

    fn expand(&self) -> Result<wire::GroupingRule, CoreError> {
        Ok(wire::GroupingRule {
            group: self.group,
            grouping_with_in_x_minutes: expand_block(
                &self.grouping_with_in_x_minutes,
                "grouping_with_in_x_minutes",
            )?,
        })
    }
}

// ── Field filters ───────────────────────────────────────────────────

impl Expand for FieldFilters {
    type Output = wire::FieldFilters;

    fn expand(&self) -> Result<wire::FieldFilters, CoreError> {
        Ok(wire::FieldFilters {
            add_all_filter: expand_block(&self.add_all_filter, "add_all_filter")?,
            add_any_filter: expand_block(&self.add_any_filter, "add_any_filter")?,
        })
    }
}

impl Expand for FilterSet {
    type Output = wire::FilterSet;

    fn expand(&self) -> Result<wire::FilterSet, CoreError> {
        Ok(wire::FilterSet {
            filters: expand_list(&self.filters, "filters")?,
        })
    }
}

impl Expand for FieldFilter {
    type Output = wire::FieldFilter;

    fn expand(&self) -> Result<wire::FieldFilter, CoreError> {
        Ok(wire::FieldFilter {
            filter_id: self.filter_id,
            condition: expand_block(&self.condition, "condition")?,
            not: self.not,
        })
    }
}

impl Expand for FieldFilterCondition {
    type Output = wire::FieldFilterCondition;

    fn expand(&self) -> Result<wire::FieldFilterCondition, CoreError> {
        Ok(wire::FieldFilterCondition {
            field_name: self.field_name.clone(),
            condition_type: self.condition_type.clone(),
        })
    }
}

// ── Escalation overrides / dynamic recipients ───────────────────────

impl Expand for EscalationPolicyOverride {
    type Output = wire::EscalationPolicyOverride;

    fn expand(&self) -> Result<wire::EscalationPolicyOverride, CoreError> {
        Ok(wire::EscalationPolicyOverride {
            based_on_time_of_day: expand_block(
                &self.based_on_time_of_day,
                "based_on_time_of_day",
            )?,
            based_on_source_data: expand_list(
                &self.based_on_source_data,
                "based_on_source_data",
            )?,
        })
    }
}

impl Expand for TimeOfDayOverride {
    type Output = wire::TimeOfDayOverride;

    fn expand(&self) -> Result<wire::TimeOfDayOverride, CoreError> {
        Ok(wire::TimeOfDayOverride {
            week: expand_block(&self.week, "week")?,
            start_time: expand_block(&self.start_time, "start_time")?,
            end_time: expand_block(&self.end_time, "end_time")?,
            escalation_policy_id: self.escalation_policy_id.clone(),
            escalation_policy_name: self.escalation_policy_name.clone(),
        })
    }
}

impl Expand for SourceDataOverride {
    type Output = wire::SourceDataOverride;

    fn expand(&self) -> Result<wire::SourceDataOverride, CoreError> {
        Ok(wire::SourceDataOverride {
            condition: expand_block(&self.condition, "condition")?,
            escalation_policy_id: self.escalation_policy_id.clone(),
            escalation_policy_name: self.escalation_policy_name.clone(),
        })
    }
}

impl Expand for SourceDataCondition {
    type Output = wire::SourceDataCondition;

    fn expand(&self) -> Result<wire::SourceDataCondition, CoreError> {
        Ok(wire::SourceDataCondition {
            field_name: self.field_name.clone(),
            condition_type: self.condition_type.clone(),
            value: self.value.clone(),
        })
    }
}

impl Expand for DynamicRecipientGroup {
    type Output = wire::DynamicRecipientGroup;

    fn expand(&self) -> Result<wire::DynamicRecipientGroup, CoreError> {
        Ok(wire::DynamicRecipientGroup {
            condition: expand_block(&self.condition, "condition")?,
            recipient_group: self.recipient_group.clone(),
            group_name: self.group_name.clone(),
        })
    }
}

// ── Email settings ──────────────────────────────────────────────────

impl Expand for EmailSettings {
    type Output = wire::EmailSettings;

    fn expand(&self) -> Result<wire::EmailSettings, CoreError> {
        Ok(wire::EmailSettings {
            email_mapping: expand_block(&self.email_mapping, "email_mapping")?,
            alert_tags: expand_block(&self.alert_tags, "alert_tags")?,
            delaying_or_grouping: expand_block(
                &self.delaying_or_grouping,
                "delaying_or_grouping",
            )?,
            filters_to_match_incoming_emails: expand_block(
                &self.filters_to_match_incoming_emails,
                "filters_to_match_incoming_emails",
            )?,
            escalation_policy_override: expand_block(
                &self.escalation_policy_override,
                "escalation_policy_override",
            )?,
            dynamic_recipient_groups: expand_list(
                &self.dynamic_recipient_groups,
                "dynamic_recipient_groups",
            )?,
        })
    }
}

impl Expand for EmailMapping {
    type Output = wire::EmailMapping;

    fn expand(&self) -> Result<wire::EmailMapping, CoreError> {
        Ok(wire::EmailMapping {
            every_incoming_email_will_open_an_alert: self.every_incoming_email_will_open_an_alert,
            source_name: expand_block(&self.source_name, "source_name")?,
            source_identifier: expand_block(&self.source_identifier, "source_identifier")?,
            open_alert_when: expand_block(&self.open_alert_when, "open_alert_when")?,
            close_alert_when: expand_block(&self.close_alert_when, "close_alert_when")?,
            update_alert_when: expand_block(&self.update_alert_when, "update_alert_when")?,
            ignore_duplicates: self.ignore_duplicates,
            long_text: expand_block(&self.long_text, "long_text")?,
            short_text: expand_block(&self.short_text, "short_text")?,
            source_url: expand_block(&self.source_url, "source_url")?,
            assignee_mail_official: expand_block(
                &self.assignee_mail_official,
                "assignee_mail_official",
            )?,
            recipient_user: expand_block(&self.recipient_user, "recipient_user")?,
            recipient_groups: expand_block(&self.recipient_groups, "recipient_groups")?,
            topic: expand_block(&self.topic, "topic")?,
            custom_alert_fields: expand_list(&self.custom_alert_fields, "custom_alert_fields")?,
            long_message_text: self.long_message_text.clone(),
            short_message_text: self.short_message_text.clone(),
            sample_data: self.sample_data.clone(),
        })
    }
}

impl Expand for EmailField {
    type Output = wire::EmailField;

    fn expand(&self) -> Result<wire::EmailField, CoreError> {
        Ok(wire::EmailField {
            field_name: self.field_name.clone(),
            start_tag: self.start_tag.clone(),
            end_tag: self.end_tag.clone(),
        })
    }
}

impl Expand for EmailCustomAlertField {
    type Output = wire::EmailCustomAlertField;

    fn expand(&self) -> Result<wire::EmailCustomAlertField, CoreError> {
        Ok(wire::EmailCustomAlertField {
            attribute_name: self.attribute_name.clone(),
            attribute_value: self.attribute_value.clone(),
            required: self.required,
            attribute_data_type: self.attribute_data_type.clone(),
            start_tag: self.start_tag.clone(),
            end_tag: self.end_tag.clone(),
        })
    }
}

impl Expand for EmailAlertTags {
    type Output = wire::EmailAlertTags;

    fn expand(&self) -> Result<wire::EmailAlertTags, CoreError> {
        Ok(wire::EmailAlertTags {
            business_service: expand_block(&self.business_service, "business_service")?,
            component_type: expand_block(&self.component_type, "component_type")?,
            component_name: expand_block(&self.component_name, "component_name")?,
            data_center: expand_block(&self.data_center, "data_center")?,
            environment: expand_block(&self.environment, "environment")?,
            problem_type: expand_block(&self.problem_type, "problem_type")?,
        })
    }
}

impl Expand for EmailFilters {
    type Output = wire::EmailFilters;

    fn expand(&self) -> Result<wire::EmailFilters, CoreError> {
        Ok(wire::EmailFilters {
            subject_filters: expand_list(&self.subject_filters, "subject_filters")?,
            body_filters: expand_list(&self.body_filters, "body_filters")?,
            sender_or_recipient_filters: expand_list(
                &self.sender_or_recipient_filters,
                "sender_or_recipient_filters",
            )?,
            priority_filters: expand_list(&self.priority_filters, "priority_filters")?,
        })
    }
}

impl Expand for EmailContentFilter {
    type Output = wire::EmailContentFilter;

    fn expand(&self) -> Result<wire::EmailContentFilter, CoreError> {
        Ok(wire::EmailContentFilter {
            filter_id: self.filter_id,
            condition: expand_block(&self.condition, "condition")?,
            and: self.and,
            not: self.not,
        })
    }
}

impl Expand for EmailFilterCondition {
    type Output = wire::EmailFilterCondition;

    fn expand(&self) -> Result<wire::EmailFilterCondition, CoreError> {
        Ok(wire::EmailFilterCondition {
            condition_type: self.condition_type.clone(),
            value: self.value.clone(),
        })
    }
}

impl Expand for EmailRecipientFilter {
    type Output = wire::EmailRecipientFilter;

    fn expand(&self) -> Result<wire::EmailRecipientFilter, CoreError> {
        Ok(wire::EmailRecipientFilter {
            filter_id: self.filter_id,
            recipient_name: self.recipient_name.clone(),
            recipient_address: self.recipient_address.clone(),
            recipient_type: self.recipient_type.clone(),
            and: self.and,
            not: self.not,
        })
    }
}

impl Expand for EmailPriorityFilter {
    type Output = wire::EmailPriorityFilter;

    fn expand(&self) -> Result<wire::EmailPriorityFilter, CoreError> {
        Ok(wire::EmailPriorityFilter {
            filter_id: self.filter_id,
            priority: self.priority.clone(),
            and: self.and,
            not: self.not,
        })
    }
}

// ── Chat settings ───────────────────────────────────────────────────

impl Expand for ChatSettings {
    type Output = wire::ChatSettings;

    fn expand(&self) -> Result<wire::ChatSettings, CoreError> {
        Ok(wire::ChatSettings {
            url_mapping: expand_block(&self.url_mapping, "url_mapping")?,
            escalation_policy_override: expand_block(
                &self.escalation_policy_override,
                "escalation_policy_override",
            )?,
        })
    }
}

impl Expand for ChatUrlMapping {
    type Output = wire::ChatUrlMapping;

    fn expand(&self) -> Result<wire::ChatUrlMapping, CoreError> {
        Ok(wire::ChatUrlMapping {
            source: self.source.clone(),
            source_name: self.source_name.clone(),
            is_static: self.is_static,
            source_value: self.source_value.clone(),
        })
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::InboundIntegration> for InboundIntegrationConfig {
    fn from(i: &wire::InboundIntegration) -> Self {
        Self {
            inbound_integration_id: i.inbound_integration_id,
            inbound_integration_name: i.inbound_integration_name.clone(),
            integration_type: i.integration_type.clone(),
            sequence: i.sequence,
            enabled: i.enabled,
            escalation_policy: i.escalation_policy.clone(),
            recipient_groups: i.recipient_groups.clone().unwrap_or_default(),
            recipient_users: i.recipient_users.clone().unwrap_or_default(),
            bridge: flatten_sparse_block(&i.bridge),
            inbound_template_id: i.inbound_template_id,
            api_settings: flatten_sparse_block(&i.api_settings),
            mail_box: i.mail_box.clone(),
            email_settings: flatten_sparse_block(&i.email_settings),
            chat_settings: flatten_sparse_block(&i.chat_settings),
            heartbeat_settings: flatten_sparse_block(&i.heartbeat_settings),
        }
    }
}

impl From<&wire::Bridge> for Bridge {
    fn from(b: &wire::Bridge) -> Self {
        Self {
            telephone_number: b.telephone_number.clone(),
            access_code: b.access_code.clone(),
        }
    }
}

impl From<&wire::HeartbeatSettings> for HeartbeatSettings {
    fn from(h: &wire::HeartbeatSettings) -> Self {
        Self {
            heartbeat_interval_in_min: h.heartbeat_interval_in_min,
        }
    }
}

impl From<&wire::ApiSettings> for ApiSettings {
    fn from(a: &wire::ApiSettings) -> Self {
        Self {
            is_bidirection: a.is_bidirection,
            url_mapping: flatten_sparse_block(&a.url_mapping),
            alert_tags: flatten_sparse_block(&a.alert_tags),
            delaying_or_grouping: flatten_sparse_block(&a.delaying_or_grouping),
            filters_to_match_json_or_form_fields: flatten_sparse_block(
                &a.filters_to_match_json_or_form_fields,
            ),
            escalation_policy_override: flatten_sparse_block(&a.escalation_policy_override),
            dynamic_recipient_groups: flatten_list(&a.dynamic_recipient_groups),
        }
    }
}

impl From<&wire::UrlMapping> for UrlMapping {
    fn from(u: &wire::UrlMapping) -> Self {
        Self {
            method: u.method.clone(),
            content: u.content.clone(),
            source: u.source.clone(),
            source_name: u.source_name.clone(),
            is_static: u.is_static,
            source_value: u.source_value.clone(),
            source_id: u.source_id.clone(),
            source_url: u.source_url.clone(),
            severity: u.severity.clone(),
            source_status: u.source_status.clone(),
            assignee: u.assignee.clone(),
            open_alert_when: flatten_sparse_block(&u.open_alert_when),
            close_alert_when: flatten_sparse_block(&u.close_alert_when),
            update_alert_when: flatten_sparse_block(&u.update_alert_when),
            long_text: u.long_text.clone(),
            short_text: u.short_text.clone(),
            subject: u.subject.clone(),
            recipient_user: u.recipient_user.clone(),
            recipient_group: u.recipient_group.clone(),
            topic: u.topic.clone(),
            sample_data: u.sample_data.clone(),
            sample_field_value: u.sample_field_value.clone().unwrap_or_default(),
            custom_alert_fields: flatten_list(&u.custom_alert_fields),
            attachments: flatten_sparse_block(&u.attachments),
        }
    }
}

impl From<&wire::AlertCondition> for AlertCondition {
    fn from(c: &wire::AlertCondition) -> Self {
        Self {
            field_name: c.field_name.clone(),
            condition_type: c.condition_type.clone(),
            values: c.values.clone().unwrap_or_default(),
        }
    }
}

impl From<&wire::SimpleCondition> for SimpleCondition {
    fn from(c: &wire::SimpleCondition) -> Self {
        Self {
            condition_type: c.condition_type.clone(),
            values: c.values.clone().unwrap_or_default(),
        }
    }
}

impl From<&wire::CustomAlertField> for CustomAlertField {
    fn from(f: &wire::CustomAlertField) -> Self {
        Self {
            attribute_name: f.attribute_name.clone(),
            attribute_value: f.attribute_value.clone(),
            required: f.required,
        }
    }
}

impl From<&wire::Attachments> for Attachments {
    fn from(a: &wire::Attachments) -> Self {
        Self {
            base_path: a.base_path.clone(),
            url: a.url.clone(),
            file_name: a.file_name.clone(),
            is_link: a.is_link,
            is_collection: a.is_collection,
        }
    }
}

impl From<&wire::AlertTags> for AlertTags {
    fn from(t: &wire::AlertTags) -> Self {
        Self {
            business_service: t.business_service.clone(),
            component_type: t.component_type.clone(),
            component_name: t.component_name.clone(),
            data_center: t.data_center.clone(),
            environment: t.environment.clone(),
            problem_type: t.problem_type.clone(),
        }
    }
}

impl From<&wire::DelayingOrGrouping> for DelayingOrGrouping {
    fn from(d: &wire::DelayingOrGrouping) -> Self {
        Self {
            delaying_rule: flatten_sparse_block(&d.delaying_rule),
            grouping_rule: flatten_sparse_block(&d.grouping_rule),
        }
    }
}

impl From<&wire::DelayingRule> for DelayingRule {
    fn from(r: &wire::DelayingRule) -> Self {
        Self {
            delay: r.delay,
            delay_notifications_for_every_x_alerts: flatten_sparse_block(
                &r.delay_notifications_for_every_x_alerts,
            ),
            delay_notifications_for_every_x_minutes: flatten_sparse_block(
                &r.delay_notifications_for_every_x_minutes,
            ),
            delay_notifications_for_every_x_alerts_within_x_minutes: flatten_sparse_block(
                &r.delay_notifications_for_every_x_alerts_within_x_minutes,
            ),
            delay_notifications_until_support_hours: flatten_sparse_block(
                &r.delay_notifications_until_support_hours,
            ),
        }
    }
}

impl From<&wire::EveryXAlerts> for EveryXAlerts {
    fn from(e: &wire::EveryXAlerts) -> Self {
        Self {
            every_x_alerts: e.every_x_alerts,
        }
    }
}

impl From<&wire::EveryXMinutes> for EveryXMinutes {
    fn from(e: &wire::EveryXMinutes) -> Self {
        Self {
            every_x_minutes: e.every_x_minutes,
        }
    }
}

impl From<&wire::EveryXAlertsWithinXMinutes> for EveryXAlertsWithinXMinutes {
    fn from(e: &wire::EveryXAlertsWithinXMinutes) -> Self {
        Self {
            every_x_alerts: e.every_x_alerts,
            every_x_minutes: e.every_x_minutes,
        }
    }
}

impl From<&wire::UntilSupportHours> for UntilSupportHours {
    fn from(u: &wire::UntilSupportHours) -> Self {
        Self {
            weekly_schedules: flatten_list(&u.weekly_schedules),
        }
    }
}

impl From<&wire::WeeklySchedule> for WeeklySchedule {
    fn from(w: &wire::WeeklySchedule) -> Self {
        Self {
            name: w.name.clone(),
            days_of_week: flatten_sparse_block(&w.days_of_week),
            start_time: flatten_sparse_block(&w.start_time),
            end_time: flatten_sparse_block(&w.end_time),
        }
    }
}

impl From<&wire::DaysOfWeek> for DaysOfWeek {
    fn from(d: &wire::DaysOfWeek) -> Self {
        Self {
            sun: d.sun,
            mon: d.mon,
            tue: d.tue,
            wed: d.wed,
            thu: d.thu,
            fri: d.fri,
            sat: d.sat,
        }
    }
}

impl From<&wire::TimeOfDay> for TimeOfDay {
    fn from(t: &wire::TimeOfDay) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
        }
    }
}

impl From<&wire::GroupingRule> for GroupingRule {
    fn from(g: &wire::GroupingRule) -> Self {
        Self {
            group: g.group,
            grouping_with_in_x_minutes: flatten_sparse_block(&g.grouping_with_in_x_minutes),
        }
    }
}

impl From<&wire::FieldFilters> for FieldFilters {
    fn from(f: &wire::FieldFilters) -> Self {
        Self {
            add_all_filter: flatten_sparse_block(&f.add_all_filter),
            add_any_filter: flatten_sparse_block(&f.add_any_filter),
        }
    }
}

impl From<&wire::FilterSet> for FilterSet {
    fn from(f: &wire::FilterSet) -> Self {
        Self {
            filters: flatten_list(&f.filters),
        }
    }
}

impl From<&wire::FieldFilter> for FieldFilter {
    fn from(f: &wire::FieldFilter) -> Self {
        Self {
            filter_id: f.filter_id,
            condition: flatten_sparse_block(&f.condition),
            not: f.not,
        }
    }
}

impl From<&wire::FieldFilterCondition> for FieldFilterCondition {
    fn from(c: &wire::FieldFilterCondition) -> Self {
        Self {
            field_name: c.field_name.clone(),
            condition_type: c.condition_type.clone(),
        }
    }
}

impl From<&wire::EscalationPolicyOverride> for EscalationPolicyOverride {
    fn from(o: &wire::EscalationPolicyOverride) -> Self {
        Self {
            based_on_time_of_day: flatten_sparse_block(&o.based_on_time_of_day),
            based_on_source_data: flatten_list(&o.based_on_source_data),
        }
    }
}

impl From<&wire::TimeOfDayOverride> for TimeOfDayOverride {
    fn from(o: &wire::TimeOfDayOverride) -> Self {
        Self {
            week: flatten_sparse_block(&o.week),
            start_time: flatten_sparse_block(&o.start_time),
            end_time: flatten_sparse_block(&o.end_time),
            escalation_policy_id: o.escalation_policy_id.clone(),
            escalation_policy_name: o.escalation_policy_name.clone(),
        }
    }
}

impl From<&wire::SourceDataOverride> for SourceDataOverride {
    fn from(o: &wire::SourceDataOverride) -> Self {
        Self {
            condition: flatten_sparse_block(&o.condition),
            escalation_policy_id: o.escalation_policy_id.clone(),
            escalation_policy_name: o.escalation_policy_name.clone(),
        }
    }
}

impl From<&wire::SourceDataCondition> for SourceDataCondition {
    fn from(c: &wire::SourceDataCondition) -> Self {
        Self {
            field_name: c.field_name.clone(),
            condition_type: c.condition_type.clone(),
            value: c.value.clone(),
        }
    }
}

impl From<&wire::DynamicRecipientGroup> for DynamicRecipientGroup {
    fn from(g: &wire::DynamicRecipientGroup) -> Self {
        Self {
            condition: flatten_sparse_block(&g.condition),
            recipient_group: g.recipient_group.clone(),
            group_name: g.group_name.clone(),
        }
    }
}

impl From<&wire::EmailSettings> for EmailSettings {
    fn from(e: &wire::EmailSettings) -> Self {
        Self {
            email_mapping: flatten_sparse_block(&e.email_mapping),
            alert_tags: flatten_sparse_block(&e.alert_tags),
            delaying_or_grouping: flatten_sparse_block(&e.delaying_or_grouping),
            filters_to_match_incoming_emails: flatten_sparse_block(
                &e.filters_to_match_incoming_emails,
            ),
            escalation_policy_override: flatten_sparse_block(&e.escalation_policy_override),
            dynamic_recipient_groups: flatten_list(&e.dynamic_recipient_groups),
        }
    }
}

impl From<&wire::EmailMapping> for EmailMapping {
    fn from(m: &wire::EmailMapping) -> Self {
        Self {
            every_incoming_email_will_open_an_alert: m.every_incoming_email_will_open_an_alert,
            source_name: flatten_sparse_block(&m.source_name),
            source_identifier: flatten_sparse_block(&m.source_identifier),
            open_alert_when: flatten_sparse_block(&m.open_alert_when),
            close_alert_when: flatten_sparse_block(&m.close_alert_when),
            update_alert_when: flatten_sparse_block(&m.update_alert_when),
            ignore_duplicates: m.ignore_duplicates,
            long_text: flatten_sparse_block(&m.long_text),
            short_text: flatten_sparse_block(&m.short_text),
            source_url: flatten_sparse_block(&m.source_url),
            assignee_mail_official: flatten_sparse_block(&m.assignee_mail_official),
            recipient_user: flatten_sparse_block(&m.recipient_user),
            recipient_groups: flatten_sparse_block(&m.recipient_groups),
            topic: flatten_sparse_block(&m.topic),
            custom_alert_fields: flatten_list(&m.custom_alert_fields),
            long_message_text: m.long_message_text.clone(),
            short_message_text: m.short_message_text.clone(),
            sample_data: m.sample_data.clone(),
        }
    }
}

impl From<&wire::EmailField> for EmailField {
    fn from(f: &wire::EmailField) -> Self {
        Self {
            field_name: f.field_name.clone(),
            start_tag: f.start_tag.clone(),
            end_tag: f.end_tag.clone(),
        }
    }
}

impl From<&wire::EmailCustomAlertField> for EmailCustomAlertField {
    fn from(f: &wire::EmailCustomAlertField) -> Self {
        Self {
            attribute_name: f.attribute_name.clone(),
            attribute_value: f.attribute_value.clone(),
            required: f.required,
            attribute_data_type: f.attribute_data_type.clone(),
            start_tag: f.start_tag.clone(),
            end_tag: f.end_tag.clone(),
        }
    }
}

impl From<&wire::EmailAlertTags> for EmailAlertTags {
    fn from(t: &wire::EmailAlertTags) -> Self {
        Self {
            business_service: flatten_sparse_block(&t.business_service),
            component_type: flatten_sparse_block(&t.component_type),
            component_name: flatten_sparse_block(&t.component_name),
            data_center: flatten_sparse_block(&t.data_center),
            environment: flatten_sparse_block(&t.environment),
            problem_type: flatten_sparse_block(&t.problem_type),
        }
    }
}

impl From<&wire::EmailFilters> for EmailFilters {
    fn from(f: &wire::EmailFilters) -> Self {
        Self {
            subject_filters: flatten_list(&f.subject_filters),
            body_filters: flatten_list(&f.body_filters),
            sender_or_recipient_filters: flatten_list(&f.sender_or_recipient_filters),
            priority_filters: flatten_list(&f.priority_filters),
        }
    }
}

impl From<&wire::EmailContentFilter> for EmailContentFilter {
    fn from(f: &wire::EmailContentFilter) -> Self {
        Self {
            filter_id: f.filter_id,
            condition: flatten_sparse_block(&f.condition),
            and: f.and,
            not: f.not,
        }
    }
}

impl From<&wire::EmailFilterCondition> for EmailFilterCondition {
    fn from(c: &wire::EmailFilterCondition) -> Self {
        Self {
            condition_type: c.condition_type.clone(),
            value: c.value.clone(),
        }
    }
}

impl From<&wire::EmailRecipientFilter> for EmailRecipientFilter {
    fn from(f: &wire::EmailRecipientFilter) -> Self {
        Self {
            filter_id: f.filter_id,
            recipient_name: f.recipient_name.clone(),
            recipient_address: f.recipient_address.clone(),
            recipient_type: f.recipient_type.clone(),
            and: f.and,
            not: f.not,
        }
    }
}

impl From<&wire::EmailPriorityFilter> for EmailPriorityFilter {
    fn from(f: &wire::EmailPriorityFilter) -> Self {
        Self {
            filter_id: f.filter_id,
            priority: f.priority.clone(),
            and: f.and,
            not: f.not,
        }
    }
}

impl From<&wire::ChatSettings> for ChatSettings {
    fn from(c: &wire::ChatSettings) -> Self {
        Self {
            url_mapping: flatten_sparse_block(&c.url_mapping),
            escalation_policy_override: flatten_sparse_block(&c.escalation_policy_override),
        }
    }
}

impl From<&wire::ChatUrlMapping> for ChatUrlMapping {
    fn from(u: &wire::ChatUrlMapping) -> Self {
        Self {
            source: u.source.clone(),
            source_name: u.source_name.clone(),
            is_static: u.is_static,
            source_value: u.source_value.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn api_integration_tree_expands_nested_settings() {
        let config: InboundIntegrationConfig = serde_json::from_value(json!({
            "inbound_integration_name": "Datadog",
            "type": "API",
            "recipient_groups": ["ops"],
            "api_settings": [{
                "url_mapping": [{
                    "source_name": "dd",
                    "static": true,
                    "open_alert_when": [{ "field_name": "status", "type": "Equals", "values": ["firing"] }],
                    "sample_field_value": { "status": "firing", "count": 3 }
                }],
                "delaying_or_grouping": [{
                    "grouping_rule": [{ "group": true, "grouping_with_in_x_minutes": [{ "every_x_minutes": 5 }] }]
                }],
                "dynamic_recipient_groups": [{
                    "condition": [{ "field_name": "team", "type": "Equals", "value": "db" }],
                    "group_name": "dba"
                }]
            }]
        }))
        .unwrap();

        let body = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "inbound_integration_name": "Datadog",
                "type": "API",
                "enabled": true,
                "recipient_groups": ["ops"],
                "api_settings": {
                    "url_mapping": {
                        "source_name": "dd",
                        "static": true,
                        "open_alert_when": { "field_name": "status", "type": "Equals", "values": ["firing"] },
                        "sample_field_value": { "count": 3, "status": "firing" }
                    },
                    "delaying_or_grouping": {
                        "grouping_rule": { "group": true, "grouping_with_in_x_minutes": { "every_x_minutes": 5 } }
                    },
                    "dynamic_recipient_groups": [{
                        "condition": { "field_name": "team", "type": "Equals", "value": "db" },
                        "group_name": "dba"
                    }]
                }
            })
        );
    }

    #[test]
    fn out_of_range_time_is_rejected_with_nested_path() {
        let config = InboundIntegrationConfig {
            chat_settings: Some(ChatSettings {
                escalation_policy_override: Some(EscalationPolicyOverride {
                    based_on_time_of_day: Some(TimeOfDayOverride {
                        start_time: Some(TimeOfDay {
                            hour: Some(24),
                            minute: Some(0),
                        }),
                        ..TimeOfDayOverride::default()
                    }),
                    ..EscalationPolicyOverride::default()
                }),
                ..ChatSettings::default()
            }),
            ..InboundIntegrationConfig::default()
        };

        match config.expand().unwrap_err() {
            CoreError::ValidationFailed { field, .. } => assert_eq!(
                field,
                "chat_settings.escalation_policy_override.based_on_time_of_day.start_time.hour"
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_echoed_settings_flatten_to_absent() {
        let entity = wire::InboundIntegration {
            inbound_integration_id: Some(21),
            inbound_integration_name: "Heartbeat".into(),
            integration_type: "Heartbeat".into(),
            bridge: Some(wire::Bridge::default()),
            email_settings: Some(wire::EmailSettings {
                alert_tags: Some(wire::EmailAlertTags::default()),
                ..wire::EmailSettings::default()
            }),
            heartbeat_settings: Some(wire::HeartbeatSettings {
                heartbeat_interval_in_min: Some(10),
            }),
            ..wire::InboundIntegration::default()
        };

        let tree = InboundIntegrationConfig::from(&entity);
        assert_eq!(tree.bridge, None);
        assert_eq!(tree.email_settings, Some(EmailSettings::default()));
        assert_eq!(
            tree.heartbeat_settings,
            Some(HeartbeatSettings {
                heartbeat_interval_in_min: Some(10)
            })
        );
    }

    #[test]
    fn expand_of_flatten_is_identity_up_to_computed_fields() {
        let email_field = |name: &str| wire::EmailField {
            field_name: Some(name.into()),
            start_tag: Some("<b>".into()),
            end_tag: Some("</b>".into()),
        };
        let entity = wire::InboundIntegration {
            inbound_integration_id: Some(30),
            inbound_integration_name: "Mail".into(),
            integration_type: "Email".into(),
            sequence: Some(2),
            enabled: Some(false),
            escalation_policy: Some("Critical".into()),
            recipient_users: Some(vec!["alice".into()]),
            mail_box: Some("alerts".into()),
            email_settings: Some(wire::EmailSettings {
                email_mapping: Some(wire::EmailMapping {
                    every_incoming_email_will_open_an_alert: Some(true),
                    source_name: Some(email_field("source")),
                    close_alert_when: Some(wire::SimpleCondition {
                        condition_type: Some("Contains".into()),
                        values: Some(vec!["resolved".into()]),
                    }),
                    custom_alert_fields: Some(vec![wire::EmailCustomAlertField {
                        attribute_name: Some("host".into()),
                        attribute_data_type: Some("Text".into()),
                        ..wire::EmailCustomAlertField::default()
                    }]),
                    ..wire::EmailMapping::default()
                }),
                alert_tags: Some(wire::EmailAlertTags {
                    environment: Some(email_field("env")),
                    ..wire::EmailAlertTags::default()
                }),
                delaying_or_grouping: Some(wire::DelayingOrGrouping {
                    delaying_rule: Some(wire::DelayingRule {
                        delay: Some(true),
                        delay_notifications_until_support_hours: Some(wire::UntilSupportHours {
                            weekly_schedules: Some(vec![wire::WeeklySchedule {
                                name: Some("weekdays".into()),
                                days_of_week: Some(wire::DaysOfWeek {
                                    mon: Some(true),
                                    fri: Some(true),
                                    ..wire::DaysOfWeek::default()
                                }),
                                start_time: Some(wire::TimeOfDay {
                                    hour: Some(9),
                                    minute: Some(0),
                                }),
                                end_time: None,
                            }]),
                        }),
                        ..wire::DelayingRule::default()
                    }),
                    grouping_rule: None,
                }),
                filters_to_match_incoming_emails: Some(wire::EmailFilters {
                    subject_filters: Some(vec![wire::EmailContentFilter {
                        filter_id: Some(1),
                        condition: Some(wire::EmailFilterCondition {
                            condition_type: Some("Contains".into()),
                            value: Some("CRITICAL".into()),
                        }),
                        and: Some(true),
                        not: Some(false),
                    }]),
                    priority_filters: Some(vec![wire::EmailPriorityFilter {
                        priority: Some("High".into()),
                        ..wire::EmailPriorityFilter::default()
                    }]),
                    ..wire::EmailFilters::default()
                }),
                escalation_policy_override: Some(wire::EscalationPolicyOverride {
                    based_on_time_of_day: None,
                    based_on_source_data: Some(vec![wire::SourceDataOverride {
                        condition: Some(wire::SourceDataCondition {
                            field_name: Some("subject".into()),
                            condition_type: Some("Contains".into()),
                            value: Some("db".into()),
                        }),
                        escalation_policy_name: Some("Database".into()),
                        ..wire::SourceDataOverride::default()
                    }]),
                }),
                dynamic_recipient_groups: None,
            }),
            ..wire::InboundIntegration::default()
        };

        let round_trip = InboundIntegrationConfig::from(&entity).expand().unwrap();
        assert_eq!(
            round_trip,
            wire::InboundIntegration {
                inbound_integration_id: None,
                ..entity
            }
        );
    }
}
