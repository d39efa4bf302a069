// ── alertops_group conversions ──

use alertops_api::models as wire;

use super::{
    Expand, Sequenced, expand_list, expand_sequenced, flatten_list, flatten_sequenced, non_empty,
};
use crate::error::CoreError;
use crate::schema::group::{Attribute, ContactMethod, GroupConfig, Member};

impl Expand for GroupConfig {
    type Output = wire::Group;

    fn expand(&self) -> Result<wire::Group, CoreError> {
        Ok(wire::Group {
            group_id: None,
            group_name: self.group_name.clone(),
            dynamic: self.dynamic,
            description: non_empty(&self.description),
            members: expand_sequenced(&self.members, "members", |m, sequence| {
                Ok(wire::GroupMember {
                    member_type: m.member_type.clone(),
                    member: m.member.clone(),
                    sequence,
                    roles: non_empty(&m.roles),
                })
            })?,
            contact_methods: expand_sequenced(
                &self.contact_methods,
                "contact_methods",
                |c, sequence| {
                    Ok(wire::GroupContactMethod {
                        contact_method_name: c.contact_method_name.clone(),
                        email_address: c.email_address.clone(),
                        country_code: c.country_code.clone(),
                        phone_number: c.phone_number.clone(),
                        extension: c.extension.clone(),
                        url: c.url.clone(),
                        get_alert_update: c.get_alert_update,
                        enabled: c.enabled,
                        sequence,
                    })
                },
            )?,
            topics: non_empty(&self.topics),
            attributes: expand_list(&self.attributes, "attributes")?,
        })
    }
}

impl Expand for Attribute {
    type Output = wire::GroupAttribute;

    fn expand(&self) -> Result<wire::GroupAttribute, CoreError> {
        Ok(wire::GroupAttribute {
            attribute_name: self.attribute_name.clone(),
            attribute_value: self.attribute_value.clone(),
        })
    }
}

impl Sequenced for Member {
    fn sequence(&self) -> Option<i64> {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: i64) {
        self.sequence = Some(sequence);
    }
}

impl Sequenced for ContactMethod {
    fn sequence(&self) -> Option<i64> {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: i64) {
        self.sequence = Some(sequence);
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::Group> for GroupConfig {
    fn from(g: &wire::Group) -> Self {
        Self {
            group_id: g.group_id,
            group_name: g.group_name.clone(),
            dynamic: g.dynamic,
            description: g.description.clone().unwrap_or_default(),
            topics: g.topics.clone().unwrap_or_default(),
            members: flatten_sequenced(&g.members),
            contact_methods: flatten_sequenced(&g.contact_methods),
            attributes: flatten_list(&g.attributes),
        }
    }
}

impl From<&wire::GroupMember> for Member {
    fn from(m: &wire::GroupMember) -> Self {
        Self {
            member_type: m.member_type.clone(),
            member: m.member.clone(),
            sequence: Some(m.sequence),
            roles: m.roles.clone().unwrap_or_default(),
        }
    }
}

impl From<&wire::GroupContactMethod> for ContactMethod {
    fn from(c: &wire::GroupContactMethod) -> Self {
        Self {
            contact_method_name: c.contact_method_name.clone(),
            email_address: c.email_address.clone(),
            country_code: c.country_code.clone(),
            phone_number: c.phone_number.clone(),
            extension: c.extension.clone(),
            url: c.url.clone(),
            get_alert_update: c.get_alert_update,
            enabled: c.enabled,
            sequence: Some(c.sequence),
        }
    }
}

impl From<&wire::GroupAttribute> for Attribute {
    fn from(a: &wire::GroupAttribute) -> Self {
        Self {
            attribute_name: a.attribute_name.clone(),
            attribute_value: a.attribute_value.clone(),
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
    fn members_get_positional_sequences() {
        let config: GroupConfig = serde_json::from_value(json!({
            "group_name": "ops",
            "members": [
                { "member_type": "User", "member": "alice" },
                { "member_type": "Group", "member": "dba", "sequence": 2, "roles": ["Primary"] }
            ]
        }))
        .unwrap();

        let body = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "group_name": "ops",
                "dynamic": false,
                "members": [
                    { "member_type": "User", "member": "alice", "sequence": 1 },
                    { "member_type": "Group", "member": "dba", "sequence": 2, "roles": ["Primary"] }
                ]
            })
        );
    }

    #[test]
    fn out_of_order_contact_method_sequence_fails() {
        let config: GroupConfig = serde_json::from_value(json!({
            "group_name": "ops",
            "contact_methods": [
                { "contact_method_name": "Email-Official", "sequence": 2 },
                { "contact_method_name": "Phone-Official", "sequence": 1 }
            ]
        }))
        .unwrap();

        let err = config.expand().unwrap_err();
        match err {
            CoreError::ValidationFailed { field, .. } => {
                assert_eq!(field, "contact_methods[0].sequence");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_lists_are_omitted_and_flatten_back_to_empty() {
        let config = GroupConfig {
            group_name: "ops".into(),
            ..GroupConfig::default()
        };
        let entity = config.expand().unwrap();
        assert!(entity.members.is_none());
        assert!(entity.topics.is_none());

        let echoed = wire::Group {
            group_id: Some(3),
            members: Some(vec![]),
            ..entity
        };
        let tree = GroupConfig::from(&echoed);
        assert!(tree.members.is_empty());
        assert!(tree.expand().unwrap().members.is_none());
    }

    #[test]
    fn expand_of_flatten_is_identity_up_to_computed_fields() {
        let entity = wire::Group {
            group_id: Some(12),
            group_name: "noc".into(),
            dynamic: Some(true),
            description: Some(vec!["Network".into(), "Operations".into()]),
            members: Some(vec![wire::GroupMember {
                member_type: "User".into(),
                member: "carol".into(),
                sequence: 1,
                roles: Some(vec!["Manager".into()]),
            }]),
            contact_methods: Some(vec![wire::GroupContactMethod {
                contact_method_name: "Email-Official".into(),
                email_address: Some("noc@example.com".into()),
                get_alert_update: Some(false),
                enabled: Some(true),
                sequence: 1,
                ..wire::GroupContactMethod::default()
            }]),
            topics: Some(vec!["network".into()]),
            attributes: Some(vec![wire::GroupAttribute {
                attribute_name: "site".into(),
                attribute_value: "east".into(),
            }]),
        };

        let round_trip = GroupConfig::from(&entity).expand().unwrap();
        assert_eq!(
            round_trip,
            wire::Group {
                group_id: None,
                ..entity
            }
        );
    }
}
