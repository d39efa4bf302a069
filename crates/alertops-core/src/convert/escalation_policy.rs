// ── alertops_escalation_policy conversions ──

use alertops_api::models as wire;

use super::{
    Expand, Sequenced, expand_block, expand_list, expand_sequenced, flatten_list,
    flatten_sequenced, flatten_sparse_block,
};
use crate::error::CoreError;
use crate::schema::escalation_policy::{
    Channels, EscalationPolicyConfig, GroupContactNotifications, GroupNotificationMethod,
    MemberRole, NotificationSettings, Options, OutboundAction, OutboundIntegration,
    OutboundIntegrationAction, Recipient, RoleContactMethod, WorkflowRef,
};

impl Expand for EscalationPolicyConfig {
    type Output = wire::EscalationPolicy;

    fn expand(&self) -> Result<wire::EscalationPolicy, CoreError> {
        Ok(wire::EscalationPolicy {
            escalation_policy_id: None,
            escalation_policy_name: self.escalation_policy_name.clone(),
            description: self.description.clone(),
            priority: self.priority.clone(),
            enabled: self.enabled,
            quick_launch: self.quick_launch,
            notify_using_centralized_settings: self.notify_using_centralized_settings,
            member_roles: expand_list(&self.member_roles, "member_roles")?,
            wait_time_before_notifying_next_group_in_min: self
                .wait_time_before_notifying_next_group_in_min,
            group_contact_notifications: expand_block(
                &self.group_contact_notifications,
                "group_contact_notifications",
            )?,
            workflows: expand_list(&self.workflows, "workflows")?,
            outbound_integrations: expand_list(
                &self.outbound_integrations,
                "outbound_integrations",
            )?,
            outbound_actions: expand_list(&self.outbound_actions, "outbound_actions")?,
            options: expand_block(&self.options, "options")?,
        })
    }
}

impl Expand for MemberRole {
    type Output = wire::MemberRole;

    fn expand(&self) -> Result<wire::MemberRole, CoreError> {
        Ok(wire::MemberRole {
            member_role_type: self.member_role_type.clone(),
            wait_time_between_members_in_mins: self.wait_time_between_members_in_mins,
            role_wait_time_in_mins: self.role_wait_time_in_mins,
            no_of_retries: self.no_of_retries,
            retry_interval: self.retry_interval,
            contact_methods: expand_sequenced(
                &self.contact_methods,
                "contact_methods",
                |c, sequence| {
                    Ok(wire::PolicyContactMethod {
                        contact_method_name: c.contact_method_name.clone(),
                        wait_time_in_mins: c.wait_time_in_mins,
                        repeat: c.repeat,
                        repeat_times: c.repeat_times,
                        repeat_minutes: c.repeat_minutes,
                        to_bcc_or_cc: c.to_bcc_or_cc.clone(),
                        sequence: Some(sequence),
                    })
                },
            )?,
        })
    }
}

impl Sequenced for RoleContactMethod {
    fn sequence(&self) -> Option<i64> {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: i64) {
        self.sequence = Some(sequence);
    }
}

impl Expand for GroupContactNotifications {
    type Output = wire::GroupContactNotifications;

    fn expand(&self) -> Result<wire::GroupContactNotifications, CoreError> {
        Ok(wire::GroupContactNotifications {
            contact_methods: expand_list(&self.contact_methods, "contact_methods")?,
        })
    }
}

impl Expand for GroupNotificationMethod {
    type Output = wire::GroupNotificationMethod;

    fn expand(&self) -> Result<wire::GroupNotificationMethod, CoreError> {
        Ok(wire::GroupNotificationMethod {
            contact_method_name: self.contact_method_name.clone(),
            wait_time_in_mins: self.wait_time_in_mins,
            to_bcc_or_cc: self.to_bcc_or_cc.clone(),
        })
    }
}

impl Expand for WorkflowRef {
    type Output = wire::PolicyWorkflow;

    fn expand(&self) -> Result<wire::PolicyWorkflow, CoreError> {
        Ok(wire::PolicyWorkflow {
            workflow_id: self.workflow_id,
            workflow_name: self.workflow_name.clone(),
        })
    }
}

impl Expand for OutboundIntegration {
    type Output = wire::OutboundIntegration;

    fn expand(&self) -> Result<wire::OutboundIntegration, CoreError> {
        Ok(wire::OutboundIntegration {
            outbound_integration_id: self.outbound_integration_id,
            name: self.name.clone(),
            interval_in_sec: self.interval_in_sec,
            actions: expand_list(&self.actions, "actions")?,
        })
    }
}

impl Expand for OutboundIntegrationAction {
    type Output = wire::OutboundIntegrationAction;

    fn expand(&self) -> Result<wire::OutboundIntegrationAction, CoreError> {
        Ok(wire::OutboundIntegrationAction {
            action_name: self.action_name.clone(),
            enabled: self.enabled,
        })
    }
}

impl Expand for OutboundAction {
    type Output = wire::OutboundAction;

    fn expand(&self) -> Result<wire::OutboundAction, CoreError> {
        Ok(wire::OutboundAction {
            action_id: self.action_id,
            action_name: self.action_name.clone(),
        })
    }
}

impl Expand for Options {
    type Output = wire::PolicyOptions;

    fn expand(&self) -> Result<wire::PolicyOptions, CoreError> {
        if let Some(hours) = self.sla_in_hours.filter(|h| !h.is_finite() || *h < 0.0) {
            return Err(CoreError::validation(
                "sla_in_hours",
                format!("{hours} is not a non-negative number of hours"),
            ));
        }
        Ok(wire::PolicyOptions {
            acknowledgement: expand_block(&self.acknowledgement, "acknowledgement")?,
            assignment: expand_block(&self.assignment, "assignment")?,
            escalate: expand_block(&self.escalate, "escalate")?,
            close: expand_block(&self.close, "close")?,
            notification_settings: expand_block(
                &self.notification_settings,
                "notification_settings",
            )?,
            escalation_policy_name_for_reply: self.escalation_policy_name_for_reply.clone(),
            sla_in_hours: self.sla_in_hours,
            message_text: self.message_text.clone(),
            include_alert_id_in_subject: self.include_alert_id_in_subject,
            one_email_per_message: self.one_email_per_message,
            one_message_per_recipient: self.one_message_per_recipient,
            sequence_group_first: self.sequence_group_first,
            alert_type: self.alert_type.clone(),
            recipients: expand_list(&self.recipients, "recipients")?,
        })
    }
}

impl Expand for Channels {
    type Output = wire::OptionSettings;

    fn expand(&self) -> Result<wire::OptionSettings, CoreError> {
        Ok(wire::OptionSettings {
            phone: self.phone,
            sms: self.sms,
            email: self.email,
            group_chat: self.group_chat,
        })
    }
}

impl Expand for NotificationSettings {
    type Output = wire::NotificationSettings;

    fn expand(&self) -> Result<wire::NotificationSettings, CoreError> {
        Ok(wire::NotificationSettings {
            email: self.email.clone(),
            phone: self.phone.clone(),
            sms: self.sms.clone(),
        })
    }
}

impl Expand for Recipient {
    type Output = wire::Recipient;

    fn expand(&self) -> Result<wire::Recipient, CoreError> {
        Ok(wire::Recipient {
            recipient_type_id: self.recipient_type_id,
            recipient_id: self.recipient_id,
            recipient_name: self.recipient_name.clone(),
        })
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::EscalationPolicy> for EscalationPolicyConfig {
    fn from(p: &wire::EscalationPolicy) -> Self {
        Self {
            escalation_policy_id: p.escalation_policy_id,
            escalation_policy_name: p.escalation_policy_name.clone(),
            description: p.description.clone(),
            priority: p.priority.clone(),
            enabled: p.enabled,
            quick_launch: p.quick_launch,
            notify_using_centralized_settings: p.notify_using_centralized_settings,
            wait_time_before_notifying_next_group_in_min: p
                .wait_time_before_notifying_next_group_in_min,
            member_roles: flatten_list(&p.member_roles),
            group_contact_notifications: flatten_sparse_block(&p.group_contact_notifications),
            workflows: flatten_list(&p.workflows),
            outbound_integrations: flatten_list(&p.outbound_integrations),
            outbound_actions: flatten_list(&p.outbound_actions),
            options: flatten_sparse_block(&p.options),
        }
    }
}

impl From<&wire::MemberRole> for MemberRole {
    fn from(r: &wire::MemberRole) -> Self {
        Self {
            member_role_type: r.member_role_type.clone(),
            wait_time_between_members_in_mins: r.wait_time_between_members_in_mins,
            role_wait_time_in_mins: r.role_wait_time_in_mins,
            no_of_retries: r.no_of_retries,
            retry_interval: r.retry_interval,
            contact_methods: flatten_sequenced(&r.contact_methods),
        }
    }
}

impl From<&wire::PolicyContactMethod> for RoleContactMethod {
    fn from(c: &wire::PolicyContactMethod) -> Self {
        Self {
            contact_method_name: c.contact_method_name.clone(),
            wait_time_in_mins: c.wait_time_in_mins,
            repeat: c.repeat,
            repeat_times: c.repeat_times,
            repeat_minutes: c.repeat_minutes,
            to_bcc_or_cc: c.to_bcc_or_cc.clone(),
            sequence: c.sequence,
        }
    }
}

impl From<&wire::GroupContactNotifications> for GroupContactNotifications {
    fn from(g: &wire::GroupContactNotifications) -> Self {
        Self {
            contact_methods: flatten_list(&g.contact_methods),
        }
    }
}

impl From<&wire::GroupNotificationMethod> for GroupNotificationMethod {
    fn from(m: &wire::GroupNotificationMethod) -> Self {
        Self {
            contact_method_name: m.contact_method_name.clone(),
            wait_time_in_mins: m.wait_time_in_mins,
            to_bcc_or_cc: m.to_bcc_or_cc.clone(),
        }
    }
}

impl From<&wire::PolicyWorkflow> for WorkflowRef {
    fn from(w: &wire::PolicyWorkflow) -> Self {
        Self {
            workflow_id: w.workflow_id,
            workflow_name: w.workflow_name.clone(),
        }
    }
}

impl From<&wire::OutboundIntegration> for OutboundIntegration {
    fn from(o: &wire::OutboundIntegration) -> Self {
        Self {
            outbound_integration_id: o.outbound_integration_id,
            name: o.name.clone(),
            interval_in_sec: o.interval_in_sec,
            actions: flatten_list(&o.actions),
        }
    }
}

impl From<&wire::OutboundIntegrationAction> for OutboundIntegrationAction {
    fn from(a: &wire::OutboundIntegrationAction) -> Self {
        Self {
            action_name: a.action_name.clone(),
            enabled: a.enabled,
        }
    }
}

impl From<&wire::OutboundAction> for OutboundAction {
    fn from(a: &wire::OutboundAction) -> Self {
        Self {
            action_id: a.action_id,
            action_name: a.action_name.clone(),
        }
    }
}

impl From<&wire::PolicyOptions> for Options {
    fn from(o: &wire::PolicyOptions) -> Self {
        Self {
            acknowledgement: flatten_sparse_block(&o.acknowledgement),
            assignment: flatten_sparse_block(&o.assignment),
            escalate: flatten_sparse_block(&o.escalate),
            close: flatten_sparse_block(&o.close),
            notification_settings: flatten_sparse_block(&o.notification_settings),
            escalation_policy_name_for_reply: o.escalation_policy_name_for_reply.clone(),
            sla_in_hours: o.sla_in_hours,
            message_text: o.message_text.clone(),
            include_alert_id_in_subject: o.include_alert_id_in_subject,
            one_email_per_message: o.one_email_per_message,
            one_message_per_recipient: o.one_message_per_recipient,
            sequence_group_first: o.sequence_group_first,
            alert_type: o.alert_type.clone(),
            recipients: flatten_list(&o.recipients),
        }
    }
}

impl From<&wire::OptionSettings> for Channels {
    fn from(s: &wire::OptionSettings) -> Self {
        Self {
            phone: s.phone,
            sms: s.sms,
            email: s.email,
            group_chat: s.group_chat,
        }
    }
}

impl From<&wire::NotificationSettings> for NotificationSettings {
    fn from(s: &wire::NotificationSettings) -> Self {
        Self {
            email: s.email.clone(),
            phone: s.phone.clone(),
            sms: s.sms.clone(),
        }
    }
}

impl From<&wire::Recipient> for Recipient {
    fn from(r: &wire::Recipient) -> Self {
        Self {
            recipient_type_id: r.recipient_type_id,
            recipient_id: r.recipient_id,
            recipient_name: r.recipient_name.clone(),
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
    fn nested_options_expand_to_objects() {
        let config: EscalationPolicyConfig = serde_json::from_value(json!({
            "escalation_policy_name": "Critical",
            "enabled": true,
            "quick_launch": false,
            "notify_using_centralized_settings": false,
            "member_roles": [{
                "member_role_type": "Primary",
                "contact_methods": [
                    { "contact_method_name": "Email-Official", "wait_time_in_mins": 0 },
                    { "contact_method_name": "Phone-Official", "repeat": false }
                ]
            }],
            "options": [{
                "acknowledgement": [{ "email": true, "sms": false }],
                "notification_settings": [{ "email": "Default" }],
                "sla_in_hours": 1.5
            }]
        }))
        .unwrap();

        let body = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "escalation_policy_name": "Critical",
                "enabled": true,
                "quick_launch": false,
                "notify_using_centralized_settings": false,
                "member_roles": [{
                    "member_role_type": "Primary",
                    "contact_methods": [
                        { "contact_method_name": "Email-Official", "wait_time_in_mins": 0, "sequence": 1 },
                        { "contact_method_name": "Phone-Official", "repeat": false, "sequence": 2 }
                    ]
                }],
                "options": {
                    "acknowledgement": { "sms": false, "email": true },
                    "notification_settings": { "email": "Default" },
                    "sla_in_hours": 1.5
                }
            })
        );
    }

    #[test]
    fn role_contact_method_sequence_error_carries_full_path() {
        let config = EscalationPolicyConfig {
            escalation_policy_name: "p".into(),
            member_roles: vec![MemberRole {
                member_role_type: "Primary".into(),
                contact_methods: vec![RoleContactMethod {
                    contact_method_name: "Email-Official".into(),
                    sequence: Some(3),
                    ..RoleContactMethod::default()
                }],
                ..MemberRole::default()
            }],
            ..EscalationPolicyConfig::default()
        };

        match config.expand().unwrap_err() {
            CoreError::ValidationFailed { field, .. } => {
                assert_eq!(field, "member_roles[0].contact_methods[0].sequence");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_sla_is_rejected() {
        let config = EscalationPolicyConfig {
            options: Some(Options {
                sla_in_hours: Some(-1.0),
                ..Options::default()
            }),
            ..EscalationPolicyConfig::default()
        };
        match config.expand().unwrap_err() {
            CoreError::ValidationFailed { field, .. } => {
                assert_eq!(field, "options.sla_in_hours");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_echoed_blocks_flatten_to_absent() {
        let entity = wire::EscalationPolicy {
            escalation_policy_id: Some(5),
            escalation_policy_name: "Quiet".into(),
            group_contact_notifications: Some(wire::GroupContactNotifications::default()),
            options: Some(wire::PolicyOptions {
                acknowledgement: Some(wire::OptionSettings::default()),
                message_text: Some("hello".into()),
                ..wire::PolicyOptions::default()
            }),
            ..wire::EscalationPolicy::default()
        };

        let tree = EscalationPolicyConfig::from(&entity);
        assert_eq!(tree.group_contact_notifications, None);
        let options = tree.options.unwrap();
        assert_eq!(options.acknowledgement, None);
        assert_eq!(options.message_text.as_deref(), Some("hello"));
    }

    #[test]
    fn expand_of_flatten_is_identity_up_to_computed_fields() {
        let entity = wire::EscalationPolicy {
            escalation_policy_id: Some(9),
            escalation_policy_name: "Database".into(),
            description: Some("DB on-call".into()),
            priority: Some("High".into()),
            enabled: true,
            quick_launch: true,
            notify_using_centralized_settings: false,
            member_roles: Some(vec![wire::MemberRole {
                member_role_type: "Primary".into(),
                role_wait_time_in_mins: Some(10),
                contact_methods: Some(vec![wire::PolicyContactMethod {
                    contact_method_name: "SMS-Official".into(),
                    repeat: Some(true),
                    repeat_times: Some(2),
                    sequence: Some(1),
                    ..wire::PolicyContactMethod::default()
                }]),
                ..wire::MemberRole::default()
            }]),
            wait_time_before_notifying_next_group_in_min: Some(15),
            group_contact_notifications: Some(wire::GroupContactNotifications {
                contact_methods: Some(vec![wire::GroupNotificationMethod {
                    contact_method_name: "Email-Official".into(),
                    to_bcc_or_cc: Some("cc".into()),
                    ..wire::GroupNotificationMethod::default()
                }]),
            }),
            workflows: Some(vec![wire::PolicyWorkflow {
                workflow_id: 4,
                workflow_name: Some("Escalate".into()),
            }]),
            outbound_integrations: Some(vec![wire::OutboundIntegration {
                outbound_integration_id: 11,
                interval_in_sec: Some(60),
                actions: Some(vec![wire::OutboundIntegrationAction {
                    action_name: "Open".into(),
                    enabled: true,
                }]),
                ..wire::OutboundIntegration::default()
            }]),
            outbound_actions: Some(vec![wire::OutboundAction {
                action_id: 2,
                action_name: None,
            }]),
            options: Some(wire::PolicyOptions {
                close: Some(wire::OptionSettings {
                    group_chat: Some(true),
                    ..wire::OptionSettings::default()
                }),
                sla_in_hours: Some(0.25),
                recipients: Some(vec![wire::Recipient {
                    recipient_type_id: 1,
                    recipient_id: 77,
                    recipient_name: Some("ops".into()),
                }]),
                ..wire::PolicyOptions::default()
            }),
        };

        let round_trip = EscalationPolicyConfig::from(&entity).expand().unwrap();
        assert_eq!(
            round_trip,
            wire::EscalationPolicy {
                escalation_policy_id: None,
                ..entity
            }
        );
    }
}
