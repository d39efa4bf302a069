// ── alertops_workflow conversions ──

use alertops_api::models as wire;
use strum::VariantNames;

use super::{Expand, expand_each, non_empty};
use crate::error::CoreError;
use crate::schema::workflow::{Action, Condition, WorkflowConfig};

/// Kinds of workflow the API accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::VariantNames,
)]
pub enum WorkflowType {
    Alert,
    Notification,
    Message,
}

impl WorkflowType {
    fn validate(raw: &str) -> Result<Self, CoreError> {
        raw.parse().map_err(|_| {
            CoreError::validation(
                "workflow_type",
                format!("{raw:?} is not one of: {}", Self::VARIANTS.join(", ")),
            )
        })
    }
}

impl Expand for WorkflowConfig {
    type Output = wire::Workflow;

    fn expand(&self) -> Result<wire::Workflow, CoreError> {
        let workflow_type = WorkflowType::validate(&self.workflow_type)?;
        Ok(wire::Workflow {
            workflow_id: None,
            workflow_name: self.workflow_name.clone(),
            workflow_type: workflow_type.to_string(),
            enabled: self.enabled,
            alert_type: self.alert_type.clone(),
            scheduled: self.scheduled,
            recurrence_interval: self.recurrence_interval,
            conditions: expand_each(&self.conditions, "conditions")?,
            actions: expand_each(&self.actions, "actions")?,
            is_used: None,
            is_bidirection: None,
        })
    }
}

impl Expand for Condition {
    type Output = wire::WorkflowCondition;

    fn expand(&self) -> Result<wire::WorkflowCondition, CoreError> {
        Ok(wire::WorkflowCondition {
            condition_type: self.condition_type.clone(),
            match_kind: self.match_kind.clone(),
            name: self.name.clone(),
            operator: self.operator.clone(),
            value: self.value.clone(),
            list_id: self.list_id.clone(),
        })
    }
}

impl Expand for Action {
    type Output = wire::WorkflowAction;

    fn expand(&self) -> Result<wire::WorkflowAction, CoreError> {
        Ok(wire::WorkflowAction {
            name: self.name.clone(),
            value: self.value.clone(),
            webhook_url: self.webhook_url.clone(),
            send_to_original_recipients: self.send_to_original_recipients,
            send_to_sender: self.send_to_sender,
            send_to_owner: self.send_to_owner,
            launch_new_thread: self.launch_new_thread,
            subject: self.subject.clone(),
            message_text: self.message_text.clone(),
            users: non_empty(&self.users),
            groups: non_empty(&self.groups),
        })
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::Workflow> for WorkflowConfig {
    fn from(w: &wire::Workflow) -> Self {
        Self {
            workflow_id: w.workflow_id,
            workflow_name: w.workflow_name.clone(),
            workflow_type: w.workflow_type.clone(),
            enabled: w.enabled,
            alert_type: w.alert_type.clone(),
            scheduled: w.scheduled,
            recurrence_interval: w.recurrence_interval,
            conditions: w.conditions.iter().map(Condition::from).collect(),
            actions: w.actions.iter().map(Action::from).collect(),
            is_used: w.is_used,
            is_bidirection: w.is_bidirection,
        }
    }
}

impl From<&wire::WorkflowCondition> for Condition {
    fn from(c: &wire::WorkflowCondition) -> Self {
        Self {
            condition_type: c.condition_type.clone(),
            match_kind: c.match_kind.clone(),
            name: c.name.clone(),
            operator: c.operator.clone(),
            value: c.value.clone(),
            list_id: c.list_id.clone(),
        }
    }
}

impl From<&wire::WorkflowAction> for Action {
    fn from(a: &wire::WorkflowAction) -> Self {
        Self {
            name: a.name.clone(),
            value: a.value.clone(),
            webhook_url: a.webhook_url.clone(),
            send_to_original_recipients: a.send_to_original_recipients,
            send_to_sender: a.send_to_sender,
            send_to_owner: a.send_to_owner,
            launch_new_thread: a.launch_new_thread,
            subject: a.subject.clone(),
            message_text: a.message_text.clone(),
            users: a.users.clone().unwrap_or_default(),
            groups: a.groups.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn escalate_workflow() -> WorkflowConfig {
        serde_json::from_value(json!({
            "workflow_name": "Escalate critical",
            "workflow_type": "Alert",
            "enabled": true,
            "alert_type": "All",
            "scheduled": false,
            "conditions": [{
                "type": "Alert",
                "match": "All",
                "name": "priority",
                "operator": "Is",
                "value": "Critical"
            }],
            "actions": [{ "name": "Notify", "users": ["alice"] }]
        }))
        .unwrap()
    }

    #[test]
    fn conditions_and_actions_are_sent_with_type_and_match_keys() {
        let body = serde_json::to_value(escalate_workflow().expand().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "workflow_name": "Escalate critical",
                "workflow_type": "Alert",
                "enabled": true,
                "alert_type": "All",
                "scheduled": false,
                "recurrence_interval": 0,
                "conditions": [{
                    "type": "Alert",
                    "match": "All",
                    "name": "priority",
                    "operator": "Is",
                    "value": "Critical"
                }],
                "actions": [{ "name": "Notify", "users": ["alice"] }]
            })
        );
    }

    #[test]
    fn empty_conditions_are_still_sent() {
        let config = WorkflowConfig {
            conditions: vec![],
            actions: vec![],
            ..escalate_workflow()
        };
        let body = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(body["conditions"], json!([]));
        assert_eq!(body["actions"], json!([]));
    }

    #[test]
    fn unknown_workflow_type_is_rejected() {
        let config = WorkflowConfig {
            workflow_type: "Incident".into(),
            ..escalate_workflow()
        };
        match config.expand().unwrap_err() {
            CoreError::ValidationFailed { field, message } => {
                assert_eq!(field, "workflow_type");
                assert!(message.contains("Alert, Notification, Message"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn computed_flags_flatten_but_are_never_sent() {
        let entity = wire::Workflow {
            workflow_id: Some(8),
            workflow_name: "Chat".into(),
            workflow_type: "Message".into(),
            is_used: Some(true),
            is_bidirection: Some(false),
            ..wire::Workflow::default()
        };
        let tree = WorkflowConfig::from(&entity);
        assert_eq!(tree.is_used, Some(true));
        assert_eq!(tree.is_bidirection, Some(false));

        let body = serde_json::to_value(tree.expand().unwrap()).unwrap();
        assert!(body.get("is_used").is_none());
        assert!(body.get("workflow_id").is_none());
    }

    #[test]
    fn expand_of_flatten_is_identity_up_to_computed_fields() {
        let entity = wire::Workflow {
            workflow_id: Some(3),
            workflow_name: "Reminder".into(),
            workflow_type: "Notification".into(),
            enabled: true,
            alert_type: "Open".into(),
            scheduled: true,
            recurrence_interval: Some(30),
            conditions: vec![wire::WorkflowCondition {
                condition_type: "Alert".into(),
                match_kind: "Any".into(),
                name: "source".into(),
                operator: "Contains".into(),
                value: "db".into(),
                list_id: Some("7".into()),
            }],
            actions: vec![wire::WorkflowAction {
                name: "Send Message".into(),
                subject: Some("Still open".into()),
                send_to_owner: Some(false),
                groups: Some(vec!["dba".into()]),
                ..wire::WorkflowAction::default()
            }],
            is_used: Some(true),
            is_bidirection: None,
        };

        let round_trip = WorkflowConfig::from(&entity).expand().unwrap();
        assert_eq!(
            round_trip,
            wire::Workflow {
                workflow_id: None,
                is_used: None,
                ..entity
            }
        );
    }
}
