// Wire entity model for the AlertOps REST API v2.
//
// Field names match the JSON keys the API uses (snake_case). Optional
// fields are `Option<T>` and skipped when `None`, so "unset" and
// "set to the zero value" serialize differently.

pub mod escalation_policy;
pub mod group;
pub mod inbound_integration;
pub mod schedule;
pub mod user;
pub mod workflow;

pub use escalation_policy::*;
pub use group::*;
pub use inbound_integration::*;
pub use schedule::*;
pub use user::*;
pub use workflow::*;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_optionals_are_not_serialized() {
        let user = User {
            user_name: "alice".into(),
            first_name: "Alice".into(),
            last_name: "Lee".into(),
            ..User::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "user_name": "alice", "first_name": "Alice", "last_name": "Lee" })
        );
    }

    #[test]
    fn explicit_false_is_serialized() {
        let method = GroupContactMethod {
            contact_method_name: "Email-Official".into(),
            enabled: Some(false),
            sequence: 1,
            ..GroupContactMethod::default()
        };
        let value = serde_json::to_value(&method).unwrap();
        assert_eq!(value["enabled"], json!(false));
        assert!(value.get("url").is_none());
    }

    #[test]
    fn server_computed_fields_are_read_but_never_sent() {
        let workflow: Workflow = serde_json::from_value(json!({
            "workflow_id": 9,
            "workflow_name": "Escalate",
            "workflow_type": "Alert",
            "enabled": true,
            "alert_type": "Any",
            "scheduled": false,
            "conditions": [],
            "actions": [],
            "is_used": true,
            "is_bidirection": false
        }))
        .unwrap();
        assert_eq!(workflow.is_used, Some(true));

        let value = serde_json::to_value(&workflow).unwrap();
        assert!(value.get("is_used").is_none());
        assert!(value.get("is_bidirection").is_none());
    }

    #[test]
    fn user_type_uses_type_key() {
        let user: User = serde_json::from_value(json!({
            "user_name": "bob",
            "first_name": "Bob",
            "last_name": "Ng",
            "type": "Admin",
            "last_login_date": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(user.user_type.as_deref(), Some("Admin"));

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["type"], json!("Admin"));
        assert!(value.get("last_login_date").is_none());
    }

    #[test]
    fn inbound_sample_field_value_keeps_arbitrary_json() {
        let inbound: InboundIntegration = serde_json::from_value(json!({
            "inbound_integration_id": 3,
            "inbound_integration_name": "Datadog",
            "type": "API",
            "api_settings": {
                "url_mapping": {
                    "static": true,
                    "sample_field_value": { "host": "web-1", "count": 4, "tags": ["a"] }
                }
            }
        }))
        .unwrap();

        let mapping = inbound.api_settings.unwrap().url_mapping.unwrap();
        assert_eq!(mapping.is_static, Some(true));
        let sample = mapping.sample_field_value.unwrap();
        assert_eq!(sample["count"], json!(4));
        assert_eq!(sample["tags"], json!(["a"]));
    }
}
